//! Togglebox - RP2040 firmware entry point
//!
//! Button A toggles the cycling RGB LED, button B toggles the periodic
//! buzzer beep. Button edges are handled on an interrupt executor, the
//! dispatcher on a second one, and the two periodic tasks in thread mode.

#![no_std]
#![no_main]

use embassy_executor::Executor;
use panic_halt as _;
use defmt_rtt as _; // global logger
use static_cell::StaticCell;

extern crate togglebox;
use togglebox::hardware::{self, Board};
use togglebox::supervisor;

static EXECUTOR_THREAD: StaticCell<Executor> = StaticCell::new();

#[cortex_m_rt::entry]
fn main() -> ! {
    let p = embassy_rp::init(Default::default());

    supervisor::print_startup_banner();

    let board = match Board::new(p) {
        Ok(board) => board,
        Err(e) => supervisor::halt(e),
    };

    let (indicator, signal) = match board.start_interrupt_tasks() {
        Ok(periodic) => periodic,
        Err(e) => supervisor::halt(e),
    };

    let executor = EXECUTOR_THREAD.init(Executor::new());
    executor.run(move |spawner| {
        if let Err(e) = hardware::spawn_periodic_tasks(&spawner, indicator, signal) {
            supervisor::halt(e);
        }
        supervisor::print_init_success();
    })
}
