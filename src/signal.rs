//! Periodic buzzer beep
//!
//! Every [`SIGNAL_PERIOD_MS`] the task checks its enable flag once. When
//! set, it sounds the buzzer for [`SIGNAL_PULSE_MS`] and stays quiet for
//! the rest of the period; the pulse is part of the period, not added to
//! it. A flag change is only seen at the next period start.

use embedded_hal::digital::OutputPin;
use embedded_hal_async::delay::DelayNs;

use crate::config::{SIGNAL_PERIOD_MS, SIGNAL_PULSE_MS};
use crate::flags::FlagReader;
use crate::outputs::{Shared, SignalLine};
use crate::shutdown::Shutdown;

pub struct SignalTask<'a, P> {
    enabled: FlagReader<'a>,
    line: &'a Shared<SignalLine<P>>,
}

impl<'a, P: OutputPin> SignalTask<'a, P> {
    pub fn new(enabled: FlagReader<'a>, line: &'a Shared<SignalLine<P>>) -> Self {
        Self { enabled, line }
    }

    /// One period. Returns whether a pulse was emitted.
    pub async fn run_cycle<D: DelayNs>(&mut self, delay: &mut D) -> bool {
        let pulsed = self.line.with(|line| {
            if !self.enabled.is_enabled() {
                return false;
            }
            line.on();
            true
        });

        if pulsed {
            delay.delay_ms(SIGNAL_PULSE_MS).await;
            self.line.with(|line| line.off());
            delay.delay_ms(SIGNAL_PERIOD_MS - SIGNAL_PULSE_MS).await;
        } else {
            delay.delay_ms(SIGNAL_PERIOD_MS).await;
        }
        pulsed
    }

    pub async fn run<D: DelayNs>(&mut self, mut delay: D) -> ! {
        #[cfg(feature = "defmt")]
        defmt::info!("Signal task started");
        loop {
            self.run_cycle(&mut delay).await;
        }
    }

    /// Run periods until `shutdown` is requested, checked at each period start
    pub async fn run_until<D: DelayNs>(&mut self, delay: &mut D, shutdown: &Shutdown) {
        while !shutdown.is_requested() {
            self.run_cycle(delay).await;
        }
    }
}
