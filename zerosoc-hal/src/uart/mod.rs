//! Interfaces for UART.
//!
//! The UART is used in polled mode only. [Uart::send_polled] and
//! [Uart::receive_polled] spin until the hardware is ready, while the
//! `*_one` methods return [block::Error::WouldBlock] instead.

mod config;
pub use config::*;

mod hal1;

use crate::block;
use crate::pac;
use pac::uart::{ctrl, fifo_ctrl, status, INTR_ALL};

/// The UART controller.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Uart {
    uart: pac::UART,
}

impl Uart {
    /// Take ownership of the UART. Call [Uart::init] and
    /// [Uart::configure] before use.
    #[inline(always)]
    pub fn new(uart: pac::UART) -> Self {
        Self { uart }
    }

    /// Recover the UART register from the driver.
    #[inline(always)]
    pub fn free(self) -> pac::UART {
        self.uart
    }

    /// Reset the UART: transmitter and receiver off, FIFOs emptied,
    /// interrupts off and acknowledged.
    pub fn init(&mut self) -> Result<(), Error> {
        self.uart.ctrl().write(0);
        self.reset_fifos();
        self.uart.ovrd().write(0);
        self.uart.timeout_ctrl().write(0);
        self.uart.intr_enable().write(0);
        self.uart.intr_state().write(INTR_ALL);

        if !self.uart.status().is_set(status::TXEMPTY | status::RXEMPTY) {
            return Err(Error::PeripheralInitFailed);
        }
        Ok(())
    }

    /// Apply line settings and enable the transmitter and receiver.
    ///
    /// Nothing is written if the settings are rejected.
    pub fn configure(&mut self, config: Config) -> Result<(), Error> {
        let value = config.ctrl()?;
        self.uart.ctrl().write(value);
        self.reset_fifos();
        self.uart.intr_enable().write(0);
        Ok(())
    }

    // watermark levels are left alone
    #[inline(always)]
    fn reset_fifos(&mut self) {
        self.uart
            .fifo_ctrl()
            .set_bits(fifo_ctrl::RXRST | fifo_ctrl::TXRST);
    }

    /// Is the transmitter enabled?
    #[inline(always)]
    pub fn is_tx_enabled(&self) -> bool {
        self.uart.ctrl().is_set(ctrl::TX)
    }

    /// Is the receiver enabled?
    #[inline(always)]
    pub fn is_rx_enabled(&self) -> bool {
        self.uart.ctrl().is_set(ctrl::RX)
    }

    /// Is the TX FIFO full?
    #[inline(always)]
    pub fn is_tx_full(&self) -> bool {
        self.uart.status().is_set(status::TXFULL)
    }

    /// Has the transmitter finished sending everything?
    #[inline(always)]
    pub fn is_tx_idle(&self) -> bool {
        self.uart.status().is_set(status::TXIDLE)
    }

    /// Is the RX FIFO empty?
    #[inline(always)]
    pub fn is_rx_empty(&self) -> bool {
        self.uart.status().is_set(status::RXEMPTY)
    }

    /// Queue a single byte.
    pub fn write_one(&mut self, data: u8) -> block::Result<(), Error> {
        if !self.is_tx_enabled() {
            Err(block::Error::Other(Error::TxDisabled))
        } else if self.is_tx_full() {
            Err(block::Error::WouldBlock)
        } else {
            self.uart.wdata().write(data as u32);
            Ok(())
        }
    }

    /// Take a single byte from the RX FIFO.
    pub fn read_one(&mut self) -> block::Result<u8, Error> {
        if !self.is_rx_enabled() {
            Err(block::Error::Other(Error::RxDisabled))
        } else if self.is_rx_empty() {
            Err(block::Error::WouldBlock)
        } else {
            Ok(self.uart.rdata().read() as u8)
        }
    }

    /// Wait for the transmitter to go idle.
    pub fn flush(&mut self) -> block::Result<(), Error> {
        if !self.is_tx_enabled() {
            Err(block::Error::Other(Error::TxDisabled))
        } else if self.is_tx_idle() {
            Ok(())
        } else {
            Err(block::Error::WouldBlock)
        }
    }

    /// Send one byte, blocking until it has left the transmitter.
    pub fn send_polled(&mut self, data: u8) -> Result<(), Error> {
        block::block!(self.write_one(data))?;
        block::block!(self.flush())
    }

    /// Receive one byte, blocking until one arrives.
    pub fn receive_polled(&mut self) -> Result<u8, Error> {
        block::block!(self.read_one())
    }

    /// Send every byte in `data`, blocking as needed.
    pub fn write_all(&mut self, data: &[u8]) -> Result<(), Error> {
        for b in data {
            block::block!(self.write_one(*b))?;
        }

        Ok(())
    }
}

impl core::fmt::Write for Uart {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        self.write_all(s.as_bytes()).map_err(|_| core::fmt::Error)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use crate::time::RateExtU32;
    use pac::uart::RegisterBlock;

    const IDLE: u32 = status::TXEMPTY | status::TXIDLE | status::RXEMPTY | status::RXIDLE;

    fn bind(regs: &RegisterBlock) -> Uart {
        // safety: regs outlives the driver in every test
        Uart::new(unsafe { pac::UART::from_addr(regs as *const _ as usize) })
    }

    fn zerosoc_config() -> Config {
        Config::new(9600.Hz(), 6.MHz())
            .parity_enable(Toggle::Disabled)
            .parity(Parity::Even)
    }

    #[test]
    fn init_resets() {
        let regs = RegisterBlock::zeroed();
        regs.status().write(IDLE);
        regs.ctrl().write(0xffff_ffff);
        regs.intr_enable().write(0xff);

        let mut uart = bind(&regs);
        assert_eq!(uart.init(), Ok(()));
        assert_eq!(regs.ctrl().read(), 0);
        assert_eq!(regs.intr_enable().read(), 0);
        assert_eq!(regs.intr_state().read(), INTR_ALL);
        assert_eq!(
            regs.fifo_ctrl().read(),
            fifo_ctrl::RXRST | fifo_ctrl::TXRST
        );
    }

    #[test]
    fn fifo_reset_keeps_watermarks() {
        let regs = RegisterBlock::zeroed();
        regs.status().write(IDLE);
        let levels = (0b011 << fifo_ctrl::RXILVL_SHIFT) | (0b10 << fifo_ctrl::TXILVL_SHIFT);
        regs.fifo_ctrl().write(levels);

        let mut uart = bind(&regs);
        uart.init().unwrap();
        assert_eq!(
            regs.fifo_ctrl().read(),
            levels | fifo_ctrl::RXRST | fifo_ctrl::TXRST
        );

        regs.fifo_ctrl().write(levels);
        uart.configure(zerosoc_config()).unwrap();
        assert_eq!(
            regs.fifo_ctrl().read(),
            levels | fifo_ctrl::RXRST | fifo_ctrl::TXRST
        );
    }

    #[test]
    fn init_notices_dead_fifos() {
        let regs = RegisterBlock::zeroed();
        let mut uart = bind(&regs);
        assert_eq!(uart.init(), Err(Error::PeripheralInitFailed));
    }

    #[test]
    fn configure_zerosoc() {
        let regs = RegisterBlock::zeroed();
        regs.status().write(IDLE);
        let mut uart = bind(&regs);
        uart.init().unwrap();

        assert_eq!(uart.configure(zerosoc_config()), Ok(()));
        assert_eq!(regs.ctrl().read(), (1677 << 16) | ctrl::TX | ctrl::RX);
        assert!(uart.is_tx_enabled());
        assert!(uart.is_rx_enabled());
    }

    #[test]
    fn rejected_config_writes_nothing() {
        let regs = RegisterBlock::zeroed();
        let mut uart = bind(&regs);

        assert_eq!(
            uart.configure(Config::new(0.Hz(), 6.MHz())),
            Err(Error::ConfigInvalid)
        );
        assert_eq!(regs.ctrl().read(), 0);
        assert_eq!(regs.fifo_ctrl().read(), 0);
    }

    #[test]
    fn send_and_receive() {
        let regs = RegisterBlock::zeroed();
        regs.status().write(IDLE);
        let mut uart = bind(&regs);
        uart.init().unwrap();
        uart.configure(zerosoc_config()).unwrap();

        assert_eq!(uart.send_polled(b'!'), Ok(()));
        assert_eq!(regs.wdata().read(), b'!' as u32);

        // a byte arrives
        regs.rdata().write(b'x' as u32);
        regs.status().write(status::TXEMPTY | status::TXIDLE);
        assert_eq!(uart.receive_polled(), Ok(b'x'));
    }

    #[test]
    fn would_block() {
        let regs = RegisterBlock::zeroed();
        regs.status().write(status::TXFULL | status::RXEMPTY);
        regs.ctrl().write(ctrl::TX | ctrl::RX);
        let mut uart = bind(&regs);

        assert_eq!(uart.write_one(b'a'), Err(block::Error::WouldBlock));
        assert_eq!(uart.read_one(), Err(block::Error::WouldBlock));
        assert_eq!(uart.flush(), Err(block::Error::WouldBlock));
        assert_eq!(regs.wdata().read(), 0);
    }

    #[test]
    fn disabled_halves_fail() {
        let regs = RegisterBlock::zeroed();
        regs.status().write(IDLE);
        let mut uart = bind(&regs);
        uart.init().unwrap();

        assert_eq!(uart.send_polled(b'a'), Err(Error::TxDisabled));
        assert_eq!(uart.receive_polled(), Err(Error::RxDisabled));
        assert_eq!(regs.wdata().read(), 0);
    }
}
