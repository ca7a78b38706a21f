//! Cooperative stop request for the task loops
//!
//! On the board the tasks run until power-off and nothing ever requests a
//! stop. Hosted runs use [`Shutdown`] to end every loop deterministically.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use portable_atomic::{AtomicBool, Ordering};

pub struct Shutdown {
    requested: AtomicBool,
    wake: Signal<CriticalSectionRawMutex, ()>,
}

impl Shutdown {
    pub const fn new() -> Self {
        Self {
            requested: AtomicBool::new(false),
            wake: Signal::new(),
        }
    }

    /// Ask every loop watching this token to stop at its next boundary
    pub fn request(&self) {
        self.requested.store(true, Ordering::Release);
        self.wake.signal(());
    }

    pub fn is_requested(&self) -> bool {
        self.requested.load(Ordering::Acquire)
    }

    /// Resolve once a stop has been requested. Only one task may wait.
    pub async fn wait(&self) {
        while !self.is_requested() {
            self.wake.wait().await;
        }
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}
