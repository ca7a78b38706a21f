//! Common types and data structures used across the Togglebox application
//!
//! This module contains the event and state types shared by the interrupt
//! path, the dispatcher and the periodic tasks.

/// Semantic button event produced from a falling edge
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    /// Button A went down: toggles the RGB indicator
    APressed,
    /// Button B went down: toggles the buzzer
    BPressed,
}

impl ButtonEvent {
    /// The behavior this button controls
    pub fn behavior(self) -> Behavior {
        match self {
            ButtonEvent::APressed => Behavior::Indicator,
            ButtonEvent::BPressed => Behavior::Signal,
        }
    }
}

/// One of the two toggleable behaviors
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Behavior {
    /// Cycling RGB indicator
    Indicator,
    /// Periodic buzzer beep
    Signal,
}

/// Result of one dispatch step
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FlagChange {
    pub behavior: Behavior,
    /// State of the behavior's enable flag after the toggle
    pub enabled: bool,
}

/// Indicator colors, in cycle order
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Color {
    Red,
    Green,
    Blue,
}

impl Color {
    pub const CYCLE: [Color; 3] = [Color::Red, Color::Green, Color::Blue];

    /// Position in the cycle (0, 1 or 2)
    pub fn index(self) -> usize {
        match self {
            Color::Red => 0,
            Color::Green => 1,
            Color::Blue => 2,
        }
    }
}

/// Application version information
pub struct AppVersion {
    pub major: u8,
    pub minor: u8,
    pub patch: u8,
}

impl AppVersion {
    pub const fn new(major: u8, minor: u8, patch: u8) -> Self {
        Self { major, minor, patch }
    }
}

/// Current application version
pub const APP_VERSION: AppVersion = AppVersion::new(0, 1, 0);
