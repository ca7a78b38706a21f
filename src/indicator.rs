//! Cycling RGB indicator
//!
//! Once per [`INDICATOR_PERIOD_MS`] the task lights the next color of the
//! red, green, blue cycle, as long as its enable flag is set. While
//! disabled nothing is drawn and the cycle position is kept, so enabling
//! again resumes with the color that would have come next.

use embedded_hal::digital::OutputPin;
use embedded_hal_async::delay::DelayNs;

use crate::config::INDICATOR_PERIOD_MS;
use crate::flags::FlagReader;
use crate::outputs::{RgbLines, Shared};
use crate::shutdown::Shutdown;
use crate::types::Color;

/// Position in the red, green, blue cycle
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ColorCycle {
    index: u8,
}

impl ColorCycle {
    /// Start at `color` instead of red
    pub fn starting_at(color: Color) -> Self {
        Self {
            index: color.index() as u8,
        }
    }

    pub fn current(&self) -> Color {
        Color::CYCLE[self.index as usize]
    }

    pub fn advance(&mut self) {
        self.index = (self.index + 1) % Color::CYCLE.len() as u8;
    }
}

pub struct IndicatorTask<'a, P> {
    enabled: FlagReader<'a>,
    lines: &'a Shared<RgbLines<P>>,
    cycle: ColorCycle,
}

impl<'a, P: OutputPin> IndicatorTask<'a, P> {
    pub fn new(enabled: FlagReader<'a>, lines: &'a Shared<RgbLines<P>>) -> Self {
        Self {
            enabled,
            lines,
            cycle: ColorCycle::default(),
        }
    }

    pub fn with_cycle(mut self, cycle: ColorCycle) -> Self {
        self.cycle = cycle;
        self
    }

    pub fn cycle(&self) -> ColorCycle {
        self.cycle
    }

    /// Draw the current color and step the cycle, if enabled.
    ///
    /// The flag is checked inside the critical section, so a disable that
    /// the dispatcher has already committed is never drawn over.
    pub fn update(&mut self) -> Option<Color> {
        let color = self.cycle.current();
        let drawn = self.lines.with(|lines| {
            if !self.enabled.is_enabled() {
                return false;
            }
            lines.all_off();
            lines.light(color);
            true
        });

        if drawn {
            self.cycle.advance();
            Some(color)
        } else {
            None
        }
    }

    /// One full period: the gated update followed by the fixed sleep
    pub async fn run_cycle<D: DelayNs>(&mut self, delay: &mut D) -> Option<Color> {
        let drawn = self.update();
        delay.delay_ms(INDICATOR_PERIOD_MS).await;
        drawn
    }

    pub async fn run<D: DelayNs>(&mut self, mut delay: D) -> ! {
        #[cfg(feature = "defmt")]
        defmt::info!("Indicator task started");
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
