//! Button event dispatcher
//!
//! Sole consumer of the event queue and sole writer of both enable flags.
//! Disabling a behavior also forces its outputs off right away, so a lit
//! LED or a sounding buzzer never outlives the press that disabled it.

use embassy_futures::select::{select, Either};
use embedded_hal::digital::OutputPin;

use crate::channels::EventConsumer;
use crate::flags::FlagWriter;
use crate::outputs::{RgbLines, Shared, SignalLine};
use crate::shutdown::Shutdown;
use crate::types::{ButtonEvent, FlagChange};

pub struct Dispatcher<'a, L, S> {
    indicator_flag: FlagWriter<'a>,
    signal_flag: FlagWriter<'a>,
    indicator_lines: &'a Shared<RgbLines<L>>,
    signal_line: &'a Shared<SignalLine<S>>,
}

impl<'a, L: OutputPin, S: OutputPin> Dispatcher<'a, L, S> {
    pub fn new(
        indicator_flag: FlagWriter<'a>,
        signal_flag: FlagWriter<'a>,
        indicator_lines: &'a Shared<RgbLines<L>>,
        signal_line: &'a Shared<SignalLine<S>>,
    ) -> Self {
        Self {
            indicator_flag,
            signal_flag,
            indicator_lines,
            signal_line,
        }
    }

    /// One dispatch step: flip the flag the event controls and, if that
    /// disabled the behavior, turn its outputs off.
    pub fn handle(&mut self, event: ButtonEvent) -> FlagChange {
        let enabled = match event {
            ButtonEvent::APressed => {
                let enabled = self.indicator_flag.toggle();
                if !enabled {
                    self.indicator_lines.with(|lines| lines.all_off());
                }
                enabled
            }
            ButtonEvent::BPressed => {
                let enabled = self.signal_flag.toggle();
                if !enabled {
                    self.signal_line.with(|line| line.off());
                }
                enabled
            }
        };

        let change = FlagChange {
            behavior: event.behavior(),
            enabled,
        };
        #[cfg(feature = "defmt")]
        defmt::info!("{} {}", change.behavior, if enabled { "enabled" } else { "disabled" });
        change
    }

    /// Dispatch events forever
    pub async fn run(&mut self, events: &EventConsumer<'_>) -> ! {
        loop {
            let event = events.pop().await;
            self.handle(event);
        }
    }

    /// Dispatch events until `shutdown` is requested and no event is
    /// waiting. Events already queued when the request arrives are still
    /// handled, in order.
    pub async fn run_until(&mut self, events: &EventConsumer<'_>, shutdown: &Shutdown) {
        loop {
            match select(events.pop(), shutdown.wait()).await {
                Either::First(event) => {
                    self.handle(event);
                }
                Either::Second(()) => {
                    while let Some(event) = events.try_pop() {
                        self.handle(event);
                    }
                    return;
                }
            }
        }
    }
}
