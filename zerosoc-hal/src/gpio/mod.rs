//! Interfaces for interacting with GPIO pins.

use crate::pac;
use pac::gpio::{masked, PIN_COUNT};

mod hal1;

mod pin;
pub use pin::*;

/// GPIO error.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// The controller did not hold the values written during init.
    PeripheralInitFailed,
    /// The pin index is past the end of the controller.
    PinOutOfRange,
}

impl core::fmt::Display for Error {
    #[allow(clippy::missing_inline_in_public_items)]
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "GPIO Error {:?}", self)
    }
}

/// The GPIO controller.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Gpio {
    gpio: pac::GPIO,
}

/// Which masked register covers `pin`, and the data bit for it there.
#[inline(always)]
fn masked_bit(pin: u8) -> Result<(bool, u32), Error> {
    if pin >= PIN_COUNT {
        return Err(Error::PinOutOfRange);
    }
    Ok((pin >= masked::PINS, 1 << (pin % masked::PINS)))
}

impl Gpio {
    /// Take ownership of the GPIO controller. Call [Gpio::init] before use.
    #[inline(always)]
    pub fn new(gpio: pac::GPIO) -> Self {
        Self { gpio }
    }

    /// Recover the GPIO register from the driver.
    #[inline(always)]
    pub fn free(self) -> pac::GPIO {
        self.gpio
    }

    /// Put the controller in a known state: interrupts off, outputs low
    /// and undriven.
    pub fn init(&mut self) -> Result<(), Error> {
        self.gpio.intr_enable().write(0);
        self.gpio.intr_ctrl_en_rising().write(0);
        self.gpio.intr_ctrl_en_falling().write(0);
        self.gpio.intr_ctrl_en_lvlhigh().write(0);
        self.gpio.intr_ctrl_en_lvllow().write(0);
        self.gpio.intr_state().write(u32::MAX);
        self.gpio.ctrl_en_input_filter().write(0);
        self.gpio.direct_out().write(0);
        self.gpio.direct_oe().write(0);

        if self.gpio.direct_out().read() != 0 || self.gpio.direct_oe().read() != 0 {
            return Err(Error::PeripheralInitFailed);
        }
        Ok(())
    }

    /// Drive `pin` to `value`, leaving every other pin alone.
    #[inline]
    pub fn write(&mut self, pin: u8, value: bool) -> Result<(), Error> {
        let (upper, bit) = masked_bit(pin)?;
        let word = (bit << masked::MASK_SHIFT) | if value { bit } else { 0 };
        if upper {
            self.gpio.masked_out_upper().write(word);
        } else {
            self.gpio.masked_out_lower().write(word);
        }
        Ok(())
    }

    /// Enable or disable the output driver for `pin`.
    #[inline]
    pub fn set_output_enable(&mut self, pin: u8, enabled: bool) -> Result<(), Error> {
        let (upper, bit) = masked_bit(pin)?;
        let word = (bit << masked::MASK_SHIFT) | if enabled { bit } else { 0 };
        if upper {
            self.gpio.masked_oe_upper().write(word);
        } else {
            self.gpio.masked_oe_lower().write(word);
        }
        Ok(())
    }

    /// Read the input level of `pin`.
    #[inline]
    pub fn read(&self, pin: u8) -> Result<bool, Error> {
        if pin >= PIN_COUNT {
            return Err(Error::PinOutOfRange);
        }
        Ok(self.gpio.data_in().read() & (1 << pin) != 0)
    }

    /// The level last driven onto `pin`.
    #[inline]
    pub fn output_level(&self, pin: u8) -> Result<bool, Error> {
        if pin >= PIN_COUNT {
            return Err(Error::PinOutOfRange);
        }
        Ok(self.gpio.direct_out().read() & (1 << pin) != 0)
    }

    /// Borrow a single pin as an output.
    #[inline]
    pub fn pin(&mut self, pin: u8) -> Result<OutputPin<'_>, Error> {
        if pin >= PIN_COUNT {
            return Err(Error::PinOutOfRange);
        }
        Ok(OutputPin::new(self, pin))
    }
}
