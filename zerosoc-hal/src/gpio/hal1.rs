use embedded_hal_1::digital as hal1;

use super::{Error, OutputPin};

impl hal1::Error for Error {
    #[inline(always)]
    fn kind(&self) -> hal1::ErrorKind {
        hal1::ErrorKind::Other
    }
}

impl<'a> hal1::ErrorType for OutputPin<'a> {
    type Error = Error;
}

impl<'a> hal1::OutputPin for OutputPin<'a> {
    #[inline(always)]
    fn set_low(&mut self) -> Result<(), Self::Error> {
        OutputPin::set_low(self)
    }

    #[inline(always)]
    fn set_high(&mut self) -> Result<(), Self::Error> {
        OutputPin::set_high(self)
    }

    #[inline(always)]
    fn set_state(&mut self, state: hal1::PinState) -> Result<(), Self::Error> {
        OutputPin::set(self, state == hal1::PinState::High)
    }
}

impl<'a> hal1::StatefulOutputPin for OutputPin<'a> {
    #[inline(always)]
    fn is_set_high(&mut self) -> Result<bool, Self::Error> {
        OutputPin::is_set_high(self)
    }

    #[inline(always)]
    fn is_set_low(&mut self) -> Result<bool, Self::Error> {
        OutputPin::is_set_high(self).map(|high| !high)
    }

    #[inline(always)]
    fn toggle(&mut self) -> Result<(), Self::Error> {
        OutputPin::toggle(self)
    }
}
