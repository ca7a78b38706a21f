//! Falling-edge handling for the two buttons
//!
//! [`EdgeHandler::on_falling_edge`] is the body of the button interrupt. It
//! maps the pin that fired to a [`ButtonEvent`] and pushes it without
//! blocking. A successful push wakes the dispatcher, which pends its
//! executor's interrupt; the switch to the dispatcher then happens as soon
//! as the current interrupt returns.
//!
//! No debounce filter is applied: every edge delivered to the handler is
//! one push attempt, however close it follows the previous one.
//!
//! On the board, edges reach the handler through [`EdgeHandler::watch_edge`]
//! on an `embassy-rp` input. That driver re-arms the pin interrupt on each
//! wait and clears edges latched while re-arming, so contact bounce that
//! lands between a wake-up and the next wait is merged into the edge
//! already delivered. This is the one place edges are merged; no timing
//! filter is added on top.

use embedded_hal_async::digital::Wait;

use crate::channels::{EventProducer, QueueFull};
use crate::types::ButtonEvent;

/// What happened to one edge
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EdgeOutcome {
    /// The pin is not a monitored button
    Ignored,
    /// The event is in the queue
    Queued(ButtonEvent),
    /// The queue was full and the event was discarded
    Dropped(ButtonEvent),
}

pub struct EdgeHandler<'a> {
    producer: EventProducer<'a>,
    button_a_pin: u8,
    button_b_pin: u8,
}

impl<'a> EdgeHandler<'a> {
    pub fn new(producer: EventProducer<'a>, button_a_pin: u8, button_b_pin: u8) -> Self {
        Self {
            producer,
            button_a_pin,
            button_b_pin,
        }
    }

    pub fn classify(&self, pin: u8) -> Option<ButtonEvent> {
        if pin == self.button_a_pin {
            Some(ButtonEvent::APressed)
        } else if pin == self.button_b_pin {
            Some(ButtonEvent::BPressed)
        } else {
            None
        }
    }

    pub fn on_falling_edge(&self, pin: u8) -> EdgeOutcome {
        let Some(event) = self.classify(pin) else {
            #[cfg(feature = "defmt")]
            defmt::debug!("Edge on unmonitored GPIO {} ignored", pin);
            return EdgeOutcome::Ignored;
        };

        match self.producer.push(event) {
            Ok(()) => EdgeOutcome::Queued(event),
            Err(QueueFull(event)) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("Event queue full, dropping {}", event);
                EdgeOutcome::Dropped(event)
            }
        }
    }

    /// Wait for the next falling edge on `button` and handle it as `pin`.
    /// A failed wait is reported as [`EdgeOutcome::Ignored`].
    pub async fn watch_edge<W: Wait>(&self, button: &mut W, pin: u8) -> EdgeOutcome {
        if button.wait_for_falling_edge().await.is_err() {
            return EdgeOutcome::Ignored;
        }
        self.on_falling_edge(pin)
    }
}
