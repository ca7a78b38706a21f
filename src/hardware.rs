//! Hardware binding for the RP2040 board
//!
//! Creates the GPIO drivers, wires them into the shared output cells, the
//! event queue and the enable flags, and spawns every task on the executor
//! matching its priority:
//!
//! | Executor              | Tasks                      |
//! |-----------------------|----------------------------|
//! | SWI_IRQ_1 (interrupt) | button edge watchers       |
//! | SWI_IRQ_0 (interrupt) | event dispatcher           |
//! | thread mode           | RGB indicator, buzzer beep |

use defmt::*;
use embassy_executor::{InterruptExecutor, SendSpawner, Spawner};
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::interrupt;
use embassy_rp::interrupt::{InterruptExt, Priority};
use embassy_rp::Peripherals;
use embassy_time::Delay;
use static_cell::StaticCell;

use crate::channels::{EventConsumer, EVENT_QUEUE};
use crate::config;
use crate::dispatch::Dispatcher;
use crate::edge::EdgeHandler;
use crate::error::StartupError;
use crate::flags::{INDICATOR_ENABLED, SIGNAL_ENABLED};
use crate::indicator::IndicatorTask;
use crate::outputs::{RgbLines, Shared, SignalLine};
use crate::signal::SignalTask;

pub type BoardDispatcher = Dispatcher<'static, Output<'static>, Output<'static>>;
pub type BoardIndicator = IndicatorTask<'static, Output<'static>>;
pub type BoardSignal = SignalTask<'static, Output<'static>>;

static INDICATOR_LINES: StaticCell<Shared<RgbLines<Output<'static>>>> = StaticCell::new();
static SIGNAL_LINE: StaticCell<Shared<SignalLine<Output<'static>>>> = StaticCell::new();
static EDGE_HANDLER: StaticCell<EdgeHandler<'static>> = StaticCell::new();

static EXECUTOR_EDGE: InterruptExecutor = InterruptExecutor::new();
static EXECUTOR_DISPATCH: InterruptExecutor = InterruptExecutor::new();

#[interrupt]
unsafe fn SWI_IRQ_1() {
    EXECUTOR_EDGE.on_interrupt()
}

#[interrupt]
unsafe fn SWI_IRQ_0() {
    EXECUTOR_DISPATCH.on_interrupt()
}

/// Everything the tasks need, created once from the peripherals
pub struct Board {
    pub button_a: Input<'static>,
    pub button_b: Input<'static>,
    pub edge_handler: &'static EdgeHandler<'static>,
    pub dispatcher: BoardDispatcher,
    pub events: EventConsumer<'static>,
    pub indicator: BoardIndicator,
    pub signal: BoardSignal,
}

impl Board {
    pub fn new(p: Peripherals) -> Result<Self, StartupError> {
        // All outputs start low: LED dark, buzzer silent
        let rgb = RgbLines::new(
            Output::new(p.PIN_11, Level::Low), // config::LED_RED_PIN
            Output::new(p.PIN_12, Level::Low), // config::LED_GREEN_PIN
            Output::new(p.PIN_13, Level::Low), // config::LED_BLUE_PIN
        );
        let buzzer = SignalLine::new(Output::new(p.PIN_21, Level::Low)); // config::BUZZER_PIN

        let button_a = Input::new(p.PIN_5, Pull::Up); // config::BUTTON_A_PIN
        let button_b = Input::new(p.PIN_6, Pull::Up); // config::BUTTON_B_PIN

        let indicator_lines: &'static _ = INDICATOR_LINES.init(Shared::new(rgb));
        let signal_line: &'static _ = SIGNAL_LINE.init(Shared::new(buzzer));

        let (producer, events) = EVENT_QUEUE.split()?;
        let edge_handler: &'static _ = EDGE_HANDLER.init(EdgeHandler::new(
            producer,
            config::BUTTON_A_PIN,
            config::BUTTON_B_PIN,
        ));

        let dispatcher = Dispatcher::new(
            INDICATOR_ENABLED.writer()?,
            SIGNAL_ENABLED.writer()?,
            indicator_lines,
            signal_line,
        );

        Ok(Self {
            button_a,
            button_b,
            edge_handler,
            dispatcher,
            events,
            indicator: IndicatorTask::new(INDICATOR_ENABLED.reader(), indicator_lines),
            signal: SignalTask::new(SIGNAL_ENABLED.reader(), signal_line),
        })
    }

    /// Start both interrupt executors and spawn the edge watchers and the
    /// dispatcher on them. Returns the periodic tasks, which belong on the
    /// thread-mode executor.
    pub fn start_interrupt_tasks(self) -> Result<(BoardIndicator, BoardSignal), StartupError> {
        let (edge_spawner, dispatch_spawner) = init_executors();

        dispatch_spawner.spawn(dispatch_task(self.dispatcher, self.events))?;
        edge_spawner.spawn(edge_task(self.button_a, config::BUTTON_A_PIN, self.edge_handler))?;
        edge_spawner.spawn(edge_task(self.button_b, config::BUTTON_B_PIN, self.edge_handler))?;

        Ok((self.indicator, self.signal))
    }
}

/// Start the edge and dispatch executors, returning their spawners
pub fn init_executors() -> (SendSpawner, SendSpawner) {
    // Edge executor: SWI_IRQ_1, above the dispatcher
    interrupt::SWI_IRQ_1.set_priority(priority(config::EDGE_EXECUTOR_PRIORITY));
    let edge_spawner = EXECUTOR_EDGE.start(interrupt::SWI_IRQ_1);

    // Dispatch executor: SWI_IRQ_0, above every thread-mode task
    interrupt::SWI_IRQ_0.set_priority(priority(config::DISPATCH_EXECUTOR_PRIORITY));
    let dispatch_spawner = EXECUTOR_DISPATCH.start(interrupt::SWI_IRQ_0);

    (edge_spawner, dispatch_spawner)
}

/// Spawn the periodic tasks on the thread-mode executor
pub fn spawn_periodic_tasks(
    spawner: &Spawner,
    indicator: BoardIndicator,
    signal: BoardSignal,
) -> Result<(), StartupError> {
    spawner.spawn(indicator_task(indicator))?;
    spawner.spawn(signal_task(signal))?;
    Ok(())
}

// Levels above 3 are rejected at compile time in `config`
fn priority(level: u8) -> Priority {
    match level {
        0 => Priority::P0,
        1 => Priority::P1,
        2 => Priority::P2,
        _ => Priority::P3,
    }
}

// ===================================================================
// Tasks
// ===================================================================

/// Falling-edge watcher for one button, running in interrupt context.
/// Edges latched while the input re-arms are merged, see [`crate::edge`].
#[embassy_executor::task(pool_size = 2)]
pub async fn edge_task(
    mut button: Input<'static>,
    pin: u8,
    handler: &'static EdgeHandler<'static>,
) -> ! {
    info!("Edge watcher for GPIO {} started", pin);

    loop {
        handler.watch_edge(&mut button, pin).await;
    }
}

#[embassy_executor::task]
pub async fn dispatch_task(mut dispatcher: BoardDispatcher, events: EventConsumer<'static>) -> ! {
    info!("Dispatch task started");
    dispatcher.run(&events).await
}

#[embassy_executor::task]
pub async fn indicator_task(mut indicator: BoardIndicator) -> ! {
    indicator.run(Delay).await
}

#[embassy_executor::task]
pub async fn signal_task(mut signal: BoardSignal) -> ! {
    signal.run(Delay).await
}
