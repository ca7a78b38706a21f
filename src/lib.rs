//! Togglebox - button-toggled RGB indicator and buzzer for RP2040
//!
//! Two push buttons switch two independent behaviors on and off:
//! - **Button A**: an RGB LED stepping red, green, blue once per second
//! - **Button B**: a buzzer beeping briefly every two seconds
//!
//! ## Architecture
//! - **Interrupt path**: falling edges are classified into [`types::ButtonEvent`]s
//!   and pushed, never blocking, into a bounded queue ([`channels`])
//! - **Dispatcher**: the only queue consumer and the only writer of the two
//!   enable flags ([`flags`]); forces outputs off on disable ([`dispatch`])
//! - **Periodic tasks**: the indicator ([`indicator`]) and the buzzer
//!   ([`signal`]) poll their flag once per period
//! - **Board binding**: Embassy executors and `embassy-rp` pins, behind the
//!   `rp2040` feature ([`hardware`])
//!
//! The core modules are generic over `embedded-hal` pins and delays and
//! build on the host.

#![cfg_attr(not(test), no_std)]

pub mod channels;
pub mod config;
pub mod dispatch;
pub mod edge;
pub mod error;
pub mod flags;
pub mod indicator;
pub mod outputs;
pub mod shutdown;
pub mod signal;
pub mod types;

#[cfg(feature = "rp2040")]
pub mod hardware;
#[cfg(feature = "rp2040")]
pub mod supervisor;
