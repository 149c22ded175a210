use super::{Error, Gpio};

/// A single GPIO pin, borrowed from the controller as an output.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OutputPin<'a> {
    gpio: &'a mut Gpio,
    pin: u8,
}

impl<'a> OutputPin<'a> {
    // pin must already be in range
    #[inline(always)]
    pub(super) fn new(gpio: &'a mut Gpio, pin: u8) -> Self {
        Self { gpio, pin }
    }

    /// The index of this pin on the controller.
    #[inline(always)]
    pub fn index(&self) -> u8 {
        self.pin
    }

    /// Turn the output driver on or off.
    #[inline(always)]
    pub fn set_enabled(&mut self, enabled: bool) -> Result<(), Error> {
        self.gpio.set_output_enable(self.pin, enabled)
    }

    /// Drive the pin to `value`.
    #[inline(always)]
    pub fn set(&mut self, value: bool) -> Result<(), Error> {
        self.gpio.write(self.pin, value)
    }

    /// Drive the pin high.
    #[inline(always)]
    pub fn set_high(&mut self) -> Result<(), Error> {
        self.set(true)
    }

    /// Drive the pin low.
    #[inline(always)]
    pub fn set_low(&mut self) -> Result<(), Error> {
        self.set(false)
    }

    /// Is the pin currently driven high?
    #[inline(always)]
    pub fn is_set_high(&self) -> Result<bool, Error> {
        self.gpio.output_level(self.pin)
    }

    /// Drive the pin to the opposite level.
    #[inline(always)]
    pub fn toggle(&mut self) -> Result<(), Error> {
        let level = self.is_set_high()?;
        self.set(!level)
    }
}
