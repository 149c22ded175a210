use embedded_hal_nb::serial as hal1nb;
use embedded_io as hal1;

use crate::block;

use super::{Error, Uart};

impl hal1nb::Error for Error {
    #[inline(always)]
    fn kind(&self) -> hal1nb::ErrorKind {
        hal1nb::ErrorKind::Other
    }
}

impl hal1::Error for Error {
    #[inline(always)]
    fn kind(&self) -> hal1::ErrorKind {
        match self {
            Error::ConfigInvalid | Error::BadNco => hal1::ErrorKind::InvalidInput,
            Error::TxDisabled | Error::RxDisabled => hal1::ErrorKind::NotConnected,
            Error::PeripheralInitFailed => hal1::ErrorKind::Other,
        }
    }
}

impl hal1nb::ErrorType for Uart {
    type Error = Error;
}

impl hal1::ErrorType for Uart {
    type Error = Error;
}

impl hal1nb::Read<u8> for Uart {
    #[inline(always)]
    fn read(&mut self) -> block::Result<u8, Self::Error> {
        Uart::read_one(self)
    }
}

impl hal1nb::Write<u8> for Uart {
    #[inline(always)]
    fn write(&mut self, word: u8) -> block::Result<(), Self::Error> {
        Uart::write_one(self, word)
    }

    #[inline(always)]
    fn flush(&mut self) -> block::Result<(), Self::Error> {
        Uart::flush(self)
    }
}

impl hal1::Read for Uart {
    /// Blocks for the first byte, then takes whatever else is waiting.
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        let mut amt = 0;
        while amt < buf.len() {
            match self.read_one() {
                Ok(b) => {
                    buf[amt] = b;
                    amt += 1;
                }
                Err(block::Error::WouldBlock) => {
                    if amt > 0 {
                        break;
                    }
                }
                Err(block::Error::Other(e)) => return Err(e),
            }
        }
        Ok(amt)
    }
}

impl hal1::ReadReady for Uart {
    fn read_ready(&mut self) -> Result<bool, Self::Error> {
        if !self.is_rx_enabled() {
            return Err(Error::RxDisabled);
        }
        Ok(!self.is_rx_empty())
    }
}

impl hal1::Write for Uart {
    /// Blocks for room for the first byte, then queues what fits.
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        for (i, b) in buf.iter().enumerate() {
            match self.write_one(*b) {
                Ok(()) => continue,
                Err(block::Error::WouldBlock) => {
                    if i == 0 {
                        block::block!(self.write_one(*b))?;
                    } else {
                        return Ok(i);
                    }
                }
                Err(block::Error::Other(e)) => return Err(e),
            }
        }

        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        block::block!(Uart::flush(self))
    }

    fn write_all(&mut self, buf: &[u8]) -> Result<(), Self::Error> {
        Uart::write_all(self, buf)
    }
}

impl hal1::WriteReady for Uart {
    fn write_ready(&mut self) -> Result<bool, Self::Error> {
        if !self.is_tx_enabled() {
            return Err(Error::TxDisabled);
        }
        Ok(!self.is_tx_full())
    }
}

#[cfg(test)]
mod test {
    use embedded_io::{Read, ReadReady, Write, WriteReady};

    use crate::pac::uart::{ctrl, status, RegisterBlock};
    use crate::pac;
    use crate::uart::{Error, Uart};

    fn bind(regs: &RegisterBlock) -> Uart {
        // safety: regs outlives the driver in every test
        Uart::new(unsafe { pac::UART::from_addr(regs as *const _ as usize) })
    }

    #[test]
    fn io_write() {
        let regs = RegisterBlock::zeroed();
        regs.ctrl().write(ctrl::TX | ctrl::RX);
        regs.status().write(status::TXIDLE | status::RXEMPTY);
        let mut uart = bind(&regs);

        assert_eq!(uart.write_ready(), Ok(true));
        assert_eq!(uart.write(b"hi"), Ok(2));
        assert_eq!(regs.wdata().read(), b'i' as u32);
        assert_eq!(uart.flush(), Ok(()));
        assert_eq!(uart.read_ready(), Ok(false));
    }

    #[test]
    fn io_read_takes_what_is_waiting() {
        let regs = RegisterBlock::zeroed();
        regs.ctrl().write(ctrl::RX);
        regs.rdata().write(b'z' as u32);
        let mut uart = bind(&regs);

        // the mock never empties, so a full buffer comes back
        let mut buf = [0; 3];
        assert_eq!(uart.read(&mut buf), Ok(3));
        assert_eq!(&buf, b"zzz");
    }

    #[test]
    fn io_errors() {
        let regs = RegisterBlock::zeroed();
        let mut uart = bind(&regs);

        assert_eq!(uart.write(b"x"), Err(Error::TxDisabled));
        assert_eq!(uart.read(&mut [0; 1]), Err(Error::RxDisabled));
        assert_eq!(
            embedded_io::Error::kind(&Error::TxDisabled),
            embedded_io::ErrorKind::NotConnected
        );
    }
}
