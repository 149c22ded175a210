//! Hello world and blinky for ZeroSoC.
//!
//! [bring_up()] readies the GPIO and UART and sends [GREETING]; a
//! [Blinker] then toggles [LED_PIN] forever.
#![cfg_attr(not(test), no_std)]

/// HAL crate, providing structured access to peripherals.
pub use zerosoc_hal as hal;

/// Peripheral access crate, providing raw, unconstrained access to peripherals.
pub use hal::pac;

mod blink;
pub use blink::Blinker;

pub mod console;
pub mod serial;

#[cfg(feature = "defmt-logger")]
mod defmt_logger;

use hal::delay::CORE_CLOCK;
use hal::gpio::{self, Gpio};
use hal::time::Hertz;
use hal::uart::{self, Parity, Toggle, Uart};

/// Sent once the UART is up.
pub const GREETING: &[u8; 14] = b"Hello world!\r\n";

/// The blinking pin.
pub const LED_PIN: u8 = 0;

/// How long the pin holds each level.
pub const BLINK_PERIOD_MS: u32 = 1000;

/// Serial line settings.
///
/// Even parity is selected but never enabled, so no parity bit is sent.
pub const UART_CONFIG: uart::Config = uart::Config::new(Hertz::Hz(9600), CORE_CLOCK)
    .parity_enable(Toggle::Disabled)
    .parity(Parity::Even);

/// How far the firmware has got.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Stage {
    Uninitialized,
    GpioReady,
    UartReady,
    Greeted,
    /// Toggling the pin; holds the level the next step writes.
    Blinking(bool),
}

/// What happened during [bring_up()].
///
/// Nothing here stops the firmware. A failed peripheral is left as it
/// is and the sequence carries on.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BringUp {
    /// The last stage reached with every step before it working.
    pub stage: Stage,
    pub gpio: Result<(), gpio::Error>,
    pub uart_init: Result<(), uart::Error>,
    pub uart_config: Result<(), uart::Error>,
    /// How much of [GREETING] went out.
    pub greeted: usize,
}

impl BringUp {
    /// Did everything work?
    #[inline(always)]
    pub fn is_ok(&self) -> bool {
        self.stage == Stage::Greeted
    }

    /// Log anything that went wrong.
    #[cfg(feature = "defmt")]
    pub fn log(&self) {
        if let Err(e) = &self.gpio {
            defmt::warn!("gpio init failed: {}", e);
        }
        if let Err(e) = &self.uart_init {
            defmt::warn!("uart init failed: {}", e);
        }
        if let Err(e) = &self.uart_config {
            defmt::warn!("uart configure failed: {}", e);
        }
        if self.greeted < GREETING.len() {
            defmt::warn!("greeting cut short after {} bytes", self.greeted);
        }
        if !self.is_ok() {
            defmt::warn!("bring-up stopped at {}", self.stage);
        }
    }
}

#[inline(always)]
fn enter(stage: Stage) -> Stage {
    #[cfg(feature = "defmt")]
    defmt::info!("stage: {}", stage);
    stage
}

/// Ready the GPIO and UART, then send [GREETING].
///
/// Every step runs whether or not the one before it worked, but the
/// stage only advances past steps that succeeded.
pub fn bring_up(gpio: &mut Gpio, uart: &mut Uart, config: uart::Config) -> BringUp {
    let mut stage = enter(Stage::Uninitialized);

    let init = gpio.init();
    let output = gpio.set_output_enable(LED_PIN, true);
    let gpio_result = init.and(output);
    if gpio_result.is_ok() {
        stage = enter(Stage::GpioReady);
    }

    let uart_init = uart.init();
    let uart_config = uart.configure(config);
    if stage == Stage::GpioReady && uart_init.is_ok() && uart_config.is_ok() {
        stage = enter(Stage::UartReady);
    }

    let greeted = serial::write_bytes(uart, GREETING);
    if stage == Stage::UartReady && greeted == GREETING.len() {
        stage = enter(Stage::Greeted);
    }

    BringUp {
        stage,
        gpio: gpio_result,
        uart_init,
        uart_config,
        greeted,
    }
}
