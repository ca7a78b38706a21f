//! Output lines driven by more than one task
//!
//! The dispatcher forces a behavior's lines off while the behavior's own
//! periodic task drives the same lines during normal operation. Both go
//! through [`Shared`], a critical-section mutex, since the dispatcher runs
//! on an interrupt executor and may preempt the periodic task.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use embedded_hal::digital::OutputPin;

use crate::types::Color;

/// Interrupt-safe shared ownership of an output
pub struct Shared<T> {
    inner: Mutex<CriticalSectionRawMutex, RefCell<T>>,
}

impl<T> Shared<T> {
    pub const fn new(value: T) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(value)),
        }
    }

    /// Run `f` with exclusive access, inside a critical section.
    /// Keep `f` short: interrupts are masked while it runs.
    pub fn with<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        self.inner.lock(|cell| f(&mut *cell.borrow_mut()))
    }
}

/// The three lines of the RGB indicator
pub struct RgbLines<P> {
    red: P,
    green: P,
    blue: P,
}

impl<P: OutputPin> RgbLines<P> {
    pub fn new(red: P, green: P, blue: P) -> Self {
        Self { red, green, blue }
    }

    pub fn all_off(&mut self) {
        let _ = self.red.set_low();
        let _ = self.green.set_low();
        let _ = self.blue.set_low();
    }

    /// Turn on the line of `color`, leaving the others as they are
    pub fn light(&mut self, color: Color) {
        let _ = self.line_mut(color).set_high();
    }

    pub fn line(&self, color: Color) -> &P {
        match color {
            Color::Red => &self.red,
            Color::Green => &self.green,
            Color::Blue => &self.blue,
        }
    }

    fn line_mut(&mut self, color: Color) -> &mut P {
        match color {
            Color::Red => &mut self.red,
            Color::Green => &mut self.green,
            Color::Blue => &mut self.blue,
        }
    }
}

/// The buzzer line
pub struct SignalLine<P> {
    pin: P,
}

impl<P: OutputPin> SignalLine<P> {
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    pub fn on(&mut self) {
        let _ = self.pin.set_high();
    }

    pub fn off(&mut self) {
        let _ = self.pin.set_low();
    }

    pub fn pin(&self) -> &P {
        &self.pin
    }
}
