//! End-to-end tests: edge handler -> event queue -> dispatcher -> tasks

mod common;
use common::*;

use std::thread;
use std::time::Duration;

use embassy_futures::block_on;
use togglebox::channels::{EventQueue, QueueFull, EVENT_QUEUE};
use togglebox::config::{BUTTON_A_PIN, BUTTON_B_PIN, EVENT_QUEUE_DEPTH};
use togglebox::dispatch::Dispatcher;
use togglebox::edge::{EdgeHandler, EdgeOutcome};
use togglebox::error::StartupError;
use togglebox::flags::{EnableFlag, INDICATOR_ENABLED, SIGNAL_ENABLED};
use togglebox::indicator::IndicatorTask;
use togglebox::shutdown::Shutdown;
use togglebox::signal::SignalTask;
use togglebox::types::{Behavior, ButtonEvent, Color};

#[test]
fn static_resources_hand_out_single_ends() {
    assert!(EVENT_QUEUE.split().is_ok());
    assert_eq!(EVENT_QUEUE.split().err(), Some(StartupError::QueueAlreadySplit));

    assert!(INDICATOR_ENABLED.writer().is_ok());
    assert_eq!(
        INDICATOR_ENABLED.writer().err(),
        Some(StartupError::FlagWriterTaken(Behavior::Indicator))
    );
    assert!(SIGNAL_ENABLED.writer().is_ok());
    assert!(SIGNAL_ENABLED.writer().is_err());
}

#[test]
fn capacity_law_keeps_first_ten_in_order() {
    let queue = EventQueue::new();
    let (producer, consumer) = queue.split().unwrap();

    let mut pushed = Vec::new();
    for i in 0..EVENT_QUEUE_DEPTH {
        let event = if i % 3 == 0 {
            ButtonEvent::BPressed
        } else {
            ButtonEvent::APressed
        };
        producer.push(event).unwrap();
        pushed.push(event);
    }
    assert_eq!(
        producer.push(ButtonEvent::APressed),
        Err(QueueFull(ButtonEvent::APressed))
    );

    let popped: Vec<_> = (0..EVENT_QUEUE_DEPTH)
        .map(|_| block_on(consumer.pop()))
        .collect();
    assert_eq!(popped, pushed);
    assert_eq!(consumer.try_pop(), None);
}

#[test]
fn button_presses_reach_outputs() {
    let queue = EventQueue::new();
    let (producer, consumer) = queue.split().unwrap();
    let edges = EdgeHandler::new(producer, BUTTON_A_PIN, BUTTON_B_PIN);
    let indicator_flag = EnableFlag::new(Behavior::Indicator);
    let signal_flag = EnableFlag::new(Behavior::Signal);
    let rgb = mock_rgb();
    let buzzer = mock_buzzer();
    let mut dispatcher = Dispatcher::new(
        indicator_flag.writer().unwrap(),
        signal_flag.writer().unwrap(),
        &rgb,
        &buzzer,
    );
    let mut indicator = IndicatorTask::new(indicator_flag.reader(), &rgb);
    let mut signal = SignalTask::new(signal_flag.reader(), &buzzer);
    let shutdown = Shutdown::new();

    assert_eq!(indicator.update(), Some(Color::Red));

    assert_eq!(
        edges.on_falling_edge(BUTTON_A_PIN),
        EdgeOutcome::Queued(ButtonEvent::APressed)
    );
    assert_eq!(
        edges.on_falling_edge(BUTTON_B_PIN),
        EdgeOutcome::Queued(ButtonEvent::BPressed)
    );
    assert_eq!(edges.on_falling_edge(0), EdgeOutcome::Ignored);
    shutdown.request();
    block_on(dispatcher.run_until(&consumer, &shutdown));

    assert!(lit(&rgb).is_empty());
    assert_eq!(indicator.update(), None);
    let mut delay = MockDelay::new();
    assert!(!block_on(signal.run_cycle(&mut delay)));
    assert!(!buzzer_on(&buzzer));
}

#[test]
fn watcher_pushes_every_delivered_edge() {
    let queue = EventQueue::new();
    let (producer, consumer) = queue.split().unwrap();
    let edges = EdgeHandler::new(producer, BUTTON_A_PIN, BUTTON_B_PIN);

    // A press with two bounce edges, delivered back to back
    let mut button = MockButton::with_edges(3);
    for _ in 0..3 {
        assert_eq!(
            block_on(edges.watch_edge(&mut button, BUTTON_B_PIN)),
            EdgeOutcome::Queued(ButtonEvent::BPressed)
        );
    }

    assert_eq!(queue.len(), 3);
    for _ in 0..3 {
        assert_eq!(consumer.try_pop(), Some(ButtonEvent::BPressed));
    }
}

#[test]
fn watcher_ignores_failed_wait() {
    let queue = EventQueue::new();
    let (producer, _consumer) = queue.split().unwrap();
    let edges = EdgeHandler::new(producer, BUTTON_A_PIN, BUTTON_B_PIN);

    let mut button = MockButton::with_edges(0);
    assert_eq!(
        block_on(edges.watch_edge(&mut button, BUTTON_A_PIN)),
        EdgeOutcome::Ignored
    );
    assert_eq!(button.waits(), 1);
    assert!(queue.is_empty());
}

#[test]
fn interrupt_during_dispatch_is_processed_after_earlier_events() {
    let queue = EventQueue::new();
    let (producer, consumer) = queue.split().unwrap();
    let edges = EdgeHandler::new(producer, BUTTON_A_PIN, BUTTON_B_PIN);

    // Producer thread stands in for the interrupt firing while the
    // consumer is busy or blocked
    let received = thread::scope(|s| {
        s.spawn(|| {
            for i in 0..40 {
                let pin = if i % 2 == 0 { BUTTON_A_PIN } else { BUTTON_B_PIN };
                // Slow enough that the queue never fills
                assert!(matches!(edges.on_falling_edge(pin), EdgeOutcome::Queued(_)));
                thread::sleep(Duration::from_millis(1));
            }
        });

        (0..40).map(|_| block_on(consumer.pop())).collect::<Vec<_>>()
    });

    let expected: Vec<_> = (0..40)
        .map(|i| {
            if i % 2 == 0 {
                ButtonEvent::APressed
            } else {
                ButtonEvent::BPressed
            }
        })
        .collect();
    assert_eq!(received, expected);
}

#[test]
fn concurrent_presses_toggle_once_per_accepted_event() {
    let queue = EventQueue::new();
    let (producer, consumer) = queue.split().unwrap();
    let edges = EdgeHandler::new(producer, BUTTON_A_PIN, BUTTON_B_PIN);
    let indicator_flag = EnableFlag::new(Behavior::Indicator);
    let signal_flag = EnableFlag::new(Behavior::Signal);
    let rgb = mock_rgb();
    let buzzer = mock_buzzer();
    let mut dispatcher = Dispatcher::new(
        indicator_flag.writer().unwrap(),
        signal_flag.writer().unwrap(),
        &rgb,
        &buzzer,
    );
    let shutdown = Shutdown::new();

    // Burst without pauses: some presses may be dropped on a full queue
    let accepted = thread::scope(|s| {
        let producer = s.spawn(|| {
            let accepted = (0..101)
                .filter(|_| {
                    matches!(
                        edges.on_falling_edge(BUTTON_A_PIN),
                        EdgeOutcome::Queued(_)
                    )
                })
                .count();
            shutdown.request();
            accepted
        });

        block_on(dispatcher.run_until(&consumer, &shutdown));
        producer.join().unwrap()
    });

    assert!(accepted >= EVENT_QUEUE_DEPTH);
    assert!(queue.is_empty());
    assert_eq!(indicator_flag.reader().is_enabled(), accepted % 2 == 0);
    assert!(signal_flag.reader().is_enabled());
}
