//! Whole-buffer helpers over a polled serial port.

use embedded_hal_nb::serial::{Read, Write};

/// Send `buf` one byte at a time, waiting for each byte to leave the
/// transmitter before the next.
///
/// Returns `buf.len()` if every byte went out, or else the index of the
/// first byte that failed. Failed bytes are not retried.
pub fn write_bytes<W>(uart: &mut W, buf: &[u8]) -> usize
where
    W: Write<u8>,
{
    for (i, b) in buf.iter().enumerate() {
        let sent = nb::block!(uart.write(*b)).and_then(|()| nb::block!(uart.flush()));
        if sent.is_err() {
            return i;
        }
    }
    buf.len()
}

/// Receive into `buf` until a `\r` or `\n` arrives or `buf` is full.
///
/// Returns the number of bytes before the terminator. The terminator
/// itself is left in `buf` but not counted. A failed receive ends the
/// line early.
pub fn read_line<R>(uart: &mut R, buf: &mut [u8]) -> usize
where
    R: Read<u8>,
{
    for i in 0..buf.len() {
        match nb::block!(uart.read()) {
            Ok(b) => {
                buf[i] = b;
                if b == b'\r' || b == b'\n' {
                    return i;
                }
            }
            Err(_) => return i,
        }
    }
    buf.len()
}
