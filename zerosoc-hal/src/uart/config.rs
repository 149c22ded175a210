use crate::pac::uart::ctrl;
use crate::time::Hertz;

/// UART error.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// FIFOs did not report empty after reset.
    PeripheralInitFailed,
    /// Baud rate or clock frequency is zero.
    ConfigInvalid,
    /// Requested baud rate does not fit the NCO at this clock.
    BadNco,
    /// The transmitter is not enabled.
    TxDisabled,
    /// The receiver is not enabled.
    RxDisabled,
}

impl core::fmt::Display for Error {
    #[allow(clippy::missing_inline_in_public_items)]
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "UART Error {:?}", self)
    }
}

/// An on/off switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Toggle {
    Enabled,
    Disabled,
}

/// Choices for parity bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Parity {
    Even,
    Odd,
}

/// UART line settings.
///
/// Parity mode and parity enable are set separately, as the hardware
/// does. A parity mode with the enable toggle off sends no parity bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    pub baud: Hertz,
    pub clk_freq: Hertz,
    pub parity_enable: Toggle,
    pub parity: Parity,
}

impl Config {
    /// Settings for `baud` on a peripheral clocked at `clk_freq`, without
    /// parity.
    #[inline(always)]
    pub const fn new(baud: Hertz, clk_freq: Hertz) -> Self {
        Self {
            baud,
            clk_freq,
            parity_enable: Toggle::Disabled,
            parity: Parity::Even,
        }
    }

    /// Set the parity enable toggle.
    #[inline(always)]
    pub const fn parity_enable(mut self, parity_enable: Toggle) -> Self {
        self.parity_enable = parity_enable;
        self
    }

    /// Set the parity mode.
    #[inline(always)]
    pub const fn parity(mut self, parity: Parity) -> Self {
        self.parity = parity;
        self
    }

    /// The baud rate NCO increment, `(baud << 20) / clk_freq`.
    pub fn nco(&self) -> Result<u16, Error> {
        let baud = self.baud.to_Hz() as u64;
        let clk = self.clk_freq.to_Hz() as u64;
        if baud == 0 || clk == 0 {
            return Err(Error::ConfigInvalid);
        }

        // the NCO advances 16 times per bit
        let nco = (baud << (ctrl::NCO_WIDTH + 4)) / clk;
        u16::try_from(nco).map_err(|_| Error::BadNco)
    }

    /// The `CTRL` value for these settings, with TX and RX enabled.
    pub fn ctrl(&self) -> Result<u32, Error> {
        let mut value = ((self.nco()? as u32) << ctrl::NCO_SHIFT) | ctrl::TX | ctrl::RX;
        if self.parity_enable == Toggle::Enabled {
            value |= ctrl::PARITY_EN;
        }
        if self.parity == Parity::Odd {
            value |= ctrl::PARITY_ODD;
        }
        Ok(value)
    }

    /// The baud rate these settings actually produce.
    pub fn actual_baud(&self) -> Result<Hertz, Error> {
        let nco = self.nco()? as u64;
        let baud = (nco * self.clk_freq.to_Hz() as u64) >> (ctrl::NCO_WIDTH + 4);
        Ok(Hertz::from_raw(baud as u32))
    }
}
