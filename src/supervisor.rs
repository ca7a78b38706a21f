//! Application startup reporting and fatal halt

use crate::config::*;
use crate::error::StartupError;
use crate::types::APP_VERSION;
use defmt::*;

/// Print application startup banner with board information
pub fn print_startup_banner() {
    info!("========================================");
    info!(
        "Togglebox v{}.{}.{}",
        APP_VERSION.major, APP_VERSION.minor, APP_VERSION.patch
    );
    info!("Hardware: RP2040 (Raspberry Pi Pico)");
    info!("========================================");
    info!(
        "RGB LED: GPIO {}/{}/{}, step every {} ms",
        LED_RED_PIN, LED_GREEN_PIN, LED_BLUE_PIN, INDICATOR_PERIOD_MS
    );
    info!(
        "Buzzer: GPIO {}, {} ms beep every {} ms",
        BUZZER_PIN, SIGNAL_PULSE_MS, SIGNAL_PERIOD_MS
    );
    info!(
        "Buttons: A=GPIO {} (LED), B=GPIO {} (buzzer), queue depth {}",
        BUTTON_A_PIN, BUTTON_B_PIN, EVENT_QUEUE_DEPTH
    );
    info!("========================================");
}

/// Print successful initialization message
pub fn print_init_success() {
    info!("Togglebox initialized successfully");
    info!("Waiting for button presses...");
}

/// Stop here for good. Nothing is retried after a startup failure.
pub fn halt(error: StartupError) -> ! {
    error!("Startup failed: {}", error);
    loop {
        cortex_m::asm::nop();
    }
}
