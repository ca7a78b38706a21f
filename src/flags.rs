//! Enable flags for the periodic behaviors
//!
//! Each flag has exactly one writer (the dispatcher) and is read by the
//! periodic task it gates. The writer is handed out once; a second request
//! is a startup error rather than a silent second writer.

use portable_atomic::{AtomicBool, Ordering};

use crate::error::StartupError;
use crate::types::Behavior;

/// Enable flag of the RGB indicator
pub static INDICATOR_ENABLED: EnableFlag = EnableFlag::new(Behavior::Indicator);

/// Enable flag of the buzzer
pub static SIGNAL_ENABLED: EnableFlag = EnableFlag::new(Behavior::Signal);

/// Single-writer boolean gating one behavior. Starts enabled.
pub struct EnableFlag {
    behavior: Behavior,
    enabled: AtomicBool,
    writer_taken: AtomicBool,
}

impl EnableFlag {
    pub const fn new(behavior: Behavior) -> Self {
        Self {
            behavior,
            enabled: AtomicBool::new(true),
            writer_taken: AtomicBool::new(false),
        }
    }

    /// Take the flag's only writer
    pub fn writer(&self) -> Result<FlagWriter<'_>, StartupError> {
        if self.writer_taken.swap(true, Ordering::AcqRel) {
            return Err(StartupError::FlagWriterTaken(self.behavior));
        }
        Ok(FlagWriter { flag: self })
    }

    pub fn reader(&self) -> FlagReader<'_> {
        FlagReader { flag: self }
    }
}

/// Write access to an [`EnableFlag`]
pub struct FlagWriter<'a> {
    flag: &'a EnableFlag,
}

impl FlagWriter<'_> {
    /// Flip the flag and return the new state
    pub fn toggle(&mut self) -> bool {
        !self.flag.enabled.fetch_not(Ordering::AcqRel)
    }
}

/// Read access to an [`EnableFlag`]
#[derive(Clone, Copy)]
pub struct FlagReader<'a> {
    flag: &'a EnableFlag,
}

impl FlagReader<'_> {
    pub fn is_enabled(&self) -> bool {
        self.flag.enabled.load(Ordering::Acquire)
    }
}
