//! Shared test infrastructure for togglebox integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::convert::Infallible;

use embedded_hal::digital::{ErrorKind, ErrorType, OutputPin};
use embedded_hal_async::delay::DelayNs;
use embedded_hal_async::digital::Wait;
use togglebox::outputs::{RgbLines, Shared, SignalLine};
use togglebox::types::Color;

// ============================================================================
// Mock Pin
// ============================================================================

/// Output pin that records every level written to it
pub struct MockPin {
    high: bool,
    history: heapless::Vec<bool, 64>,
}

impl MockPin {
    pub fn new() -> Self {
        Self {
            high: false,
            history: heapless::Vec::new(),
        }
    }

    pub fn is_high(&self) -> bool {
        self.high
    }

    /// Levels written so far, oldest first
    pub fn history(&self) -> &[bool] {
        &self.history
    }

    /// Number of low-to-high transitions written so far
    pub fn rising_edges(&self) -> usize {
        let mut level = false;
        let mut edges = 0;
        for &written in self.history.iter() {
            if written && !level {
                edges += 1;
            }
            level = written;
        }
        edges
    }
}

impl ErrorType for MockPin {
    type Error = Infallible;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.high = false;
        let _ = self.history.push(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.high = true;
        let _ = self.history.push(true);
        Ok(())
    }
}

pub fn mock_rgb() -> Shared<RgbLines<MockPin>> {
    Shared::new(RgbLines::new(MockPin::new(), MockPin::new(), MockPin::new()))
}

pub fn mock_buzzer() -> Shared<SignalLine<MockPin>> {
    Shared::new(SignalLine::new(MockPin::new()))
}

/// Colors whose line is currently high
pub fn lit(rgb: &Shared<RgbLines<MockPin>>) -> heapless::Vec<Color, 3> {
    rgb.with(|lines| {
        Color::CYCLE
            .iter()
            .copied()
            .filter(|color| lines.line(*color).is_high())
            .collect()
    })
}

pub fn buzzer_on(buzzer: &Shared<SignalLine<MockPin>>) -> bool {
    buzzer.with(|line| line.pin().is_high())
}

// ============================================================================
// Mock Button
// ============================================================================

/// Input that delivers a fixed number of edges, then fails every wait
pub struct MockButton {
    edges_left: usize,
    waits: usize,
}

impl MockButton {
    pub fn with_edges(edges: usize) -> Self {
        Self {
            edges_left: edges,
            waits: 0,
        }
    }

    /// Number of waits started so far
    pub fn waits(&self) -> usize {
        self.waits
    }

    fn next_edge(&mut self) -> Result<(), ErrorKind> {
        self.waits += 1;
        if self.edges_left == 0 {
            return Err(ErrorKind::Other);
        }
        self.edges_left -= 1;
        Ok(())
    }
}

impl ErrorType for MockButton {
    type Error = ErrorKind;
}

impl Wait for MockButton {
    async fn wait_for_high(&mut self) -> Result<(), Self::Error> {
        self.next_edge()
    }

    async fn wait_for_low(&mut self) -> Result<(), Self::Error> {
        self.next_edge()
    }

    async fn wait_for_rising_edge(&mut self) -> Result<(), Self::Error> {
        self.next_edge()
    }

    async fn wait_for_falling_edge(&mut self) -> Result<(), Self::Error> {
        self.next_edge()
    }

    async fn wait_for_any_edge(&mut self) -> Result<(), Self::Error> {
        self.next_edge()
    }
}

// ============================================================================
// Mock Delay
// ============================================================================

type SleepHook<'a> = Box<dyn FnMut(u64, u32) + 'a>;

/// Delay that completes immediately and advances a virtual clock instead.
///
/// An optional hook runs at the start of every sleep with the virtual time
/// and the requested duration, standing in for whatever other tasks would
/// do while this one sleeps.
pub struct MockDelay<'a> {
    now_ms: u64,
    sleeps: heapless::Vec<u32, 128>,
    hook: Option<SleepHook<'a>>,
}

impl<'a> MockDelay<'a> {
    pub fn new() -> Self {
        Self {
            now_ms: 0,
            sleeps: heapless::Vec::new(),
            hook: None,
        }
    }

    pub fn with_hook(hook: impl FnMut(u64, u32) + 'a) -> Self {
        Self {
            hook: Some(Box::new(hook)),
            ..Self::new()
        }
    }

    /// Virtual milliseconds slept so far
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Every sleep requested, in milliseconds, oldest first
    pub fn sleeps(&self) -> &[u32] {
        &self.sleeps
    }

    fn sleep(&mut self, ms: u32) {
        if let Some(hook) = self.hook.as_mut() {
            hook(self.now_ms, ms);
        }
        let _ = self.sleeps.push(ms);
        self.now_ms += u64::from(ms);
    }
}

impl DelayNs for MockDelay<'_> {
    async fn delay_ns(&mut self, ns: u32) {
        self.sleep(ns / 1_000_000);
    }

    async fn delay_ms(&mut self, ms: u32) {
        self.sleep(ms);
    }
}
