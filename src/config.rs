//! Hardware configuration for Togglebox
//! RP2040 board with an RGB LED, a buzzer and two push buttons

// ===================================================================
// GPIO Pin Assignments - Raspberry Pi Pico
// ===================================================================

// hardware::Board::new takes these as typed PIN_n peripherals; change both
// together.

// RGB indicator LED (one line per color, active high)
pub const LED_RED_PIN: u8 = 11;
pub const LED_GREEN_PIN: u8 = 12;
pub const LED_BLUE_PIN: u8 = 13;

// Buzzer (active high)
pub const BUZZER_PIN: u8 = 21;

// Push buttons (pull-up, pressed = low, falling edge triggers)
pub const BUTTON_A_PIN: u8 = 5; // Toggles the RGB indicator
pub const BUTTON_B_PIN: u8 = 6; // Toggles the buzzer

// ===================================================================
// Timing
// ===================================================================

pub const INDICATOR_PERIOD_MS: u32 = 1000; // One color step per period
pub const SIGNAL_PERIOD_MS: u32 = 2000; // Beep cycle, pulse included
pub const SIGNAL_PULSE_MS: u32 = 200; // Buzzer on-time per cycle

const _: () = assert!(SIGNAL_PULSE_MS < SIGNAL_PERIOD_MS);

// ===================================================================
// Inter-task Communication
// ===================================================================

pub const EVENT_QUEUE_DEPTH: usize = 10; // Button events buffered ISR -> dispatcher

// ===================================================================
// Scheduling
// ===================================================================

// RP2040 NVIC has 2 priority bits: 0 is the most urgent. Both executors
// preempt the thread-mode executor running the periodic tasks.
pub const EDGE_EXECUTOR_PRIORITY: u8 = 2; // Button edge watchers (SWI_IRQ_1)
pub const DISPATCH_EXECUTOR_PRIORITY: u8 = 3; // Event dispatcher (SWI_IRQ_0)

const _: () = assert!(EDGE_EXECUTOR_PRIORITY <= 3);
const _: () = assert!(DISPATCH_EXECUTOR_PRIORITY <= 3);
const _: () = assert!(EDGE_EXECUTOR_PRIORITY < DISPATCH_EXECUTOR_PRIORITY);
