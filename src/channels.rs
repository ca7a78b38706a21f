//! Interrupt-to-task event queue
//!
//! The only channel from interrupt context into task context. The producer
//! end exposes nothing but a non-blocking push, so code running in an
//! interrupt can never end up waiting on the queue. The consumer end is the
//! only place that may block.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::{Channel, Receiver, Sender, TrySendError};
use portable_atomic::{AtomicBool, Ordering};

use crate::config::EVENT_QUEUE_DEPTH;
use crate::error::StartupError;
use crate::types::ButtonEvent;

/// Event queue shared by the edge handler and the dispatcher
pub static EVENT_QUEUE: EventQueue = EventQueue::new();

/// Bounded FIFO of button events, split once into its two ends
pub struct EventQueue {
    channel: Channel<CriticalSectionRawMutex, ButtonEvent, EVENT_QUEUE_DEPTH>,
    split: AtomicBool,
}

/// The queue was full; the rejected event is handed back
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct QueueFull(pub ButtonEvent);

impl EventQueue {
    pub const fn new() -> Self {
        Self {
            channel: Channel::new(),
            split: AtomicBool::new(false),
        }
    }

    /// Hand out the producer and consumer ends.
    ///
    /// Succeeds exactly once so that the queue keeps one producer and one
    /// consumer for its whole lifetime.
    pub fn split(&self) -> Result<(EventProducer<'_>, EventConsumer<'_>), StartupError> {
        if self.split.swap(true, Ordering::AcqRel) {
            return Err(StartupError::QueueAlreadySplit);
        }
        Ok((
            EventProducer {
                sender: self.channel.sender(),
            },
            EventConsumer {
                receiver: self.channel.receiver(),
            },
        ))
    }

    /// Number of events waiting to be consumed
    pub fn len(&self) -> usize {
        self.channel.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channel.is_empty()
    }
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::new()
    }
}

/// Producer end, safe to use from interrupt context
pub struct EventProducer<'a> {
    sender: Sender<'a, CriticalSectionRawMutex, ButtonEvent, EVENT_QUEUE_DEPTH>,
}

impl EventProducer<'_> {
    /// Enqueue without blocking. When the queue is full the new event is
    /// dropped and everything already queued stays untouched.
    pub fn push(&self, event: ButtonEvent) -> Result<(), QueueFull> {
        self.sender.try_send(event).map_err(|TrySendError::Full(e)| QueueFull(e))
    }
}

/// Consumer end, task context only
pub struct EventConsumer<'a> {
    receiver: Receiver<'a, CriticalSectionRawMutex, ButtonEvent, EVENT_QUEUE_DEPTH>,
}

impl EventConsumer<'_> {
    /// Wait until an event is available and take it
    pub async fn pop(&self) -> ButtonEvent {
        self.receiver.receive().await
    }

    /// Take the oldest event if there is one
    pub fn try_pop(&self) -> Option<ButtonEvent> {
        self.receiver.try_receive().ok()
    }
}
