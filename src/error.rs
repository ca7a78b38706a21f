//! Startup errors
//!
//! Every resource the firmware creates at boot (queue ends, flag writers,
//! spawned tasks) is checked. None of these can be retried, so the caller
//! logs the error and halts.

use crate::types::Behavior;

/// Errors that can occur while wiring up the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StartupError {
    /// The event queue was already split into producer and consumer.
    QueueAlreadySplit,
    /// The single writer of a behavior's enable flag was already taken.
    FlagWriterTaken(Behavior),
    /// The executor had no room left for a task.
    Spawn,
}

#[cfg(feature = "rp2040")]
impl From<embassy_executor::SpawnError> for StartupError {
    fn from(_: embassy_executor::SpawnError) -> Self {
        StartupError::Spawn
    }
}
