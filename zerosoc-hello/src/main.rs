#![no_std]
#![no_main]

use panic_halt as _;
// provides the critical-section implementation
use riscv as _;

use zerosoc_hello::hal;
use zerosoc_hello::{Blinker, BLINK_PERIOD_MS, LED_PIN, UART_CONFIG};

use hal::delay::CycleDelay;
use hal::gpio::Gpio;
use hal::uart::Uart;

#[riscv_rt::entry]
fn main() -> ! {
    // grab peripherals at their fixed addresses
    let p = hal::pac::Peripherals::take().unwrap();

    let mut gpio = Gpio::new(p.GPIO);
    let mut uart = Uart::new(p.UART);

    // failures are recorded, not acted on. A dead peripheral stays dead
    // and the blinking carries on regardless.
    let report = zerosoc_hello::bring_up(&mut gpio, &mut uart, UART_CONFIG);
    #[cfg(feature = "defmt")]
    report.log();
    let _ = report;

    // anything printed from here on goes out the UART
    zerosoc_hello::console::install(uart);

    // it's blinkin' time
    let led = gpio.pin(LED_PIN).unwrap();
    Blinker::new(led, CycleDelay::default(), BLINK_PERIOD_MS).run()
}
