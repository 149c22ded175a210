//! The UART as a global console.
//!
//! Once [install()]ed, anything can [print!] or [println!] to it.

use core::cell::RefCell;
use core::fmt;

use critical_section::Mutex;

use crate::hal::uart::Uart;

// the global UART
static CONSOLE: Mutex<RefCell<Option<Uart>>> = Mutex::new(RefCell::new(None));

/// Print a line to the global UART.
///
/// See [install()] for how to install a global UART.
#[macro_export]
macro_rules! println {
    () => ($crate::print!("\r\n"));
    ($($arg:tt)*) => ($crate::print!("{}\r\n", format_args!($($arg)*)));
}

/// Print to the global UART.
///
/// See [install()] for how to install a global UART.
#[macro_export]
macro_rules! print {
    ($($arg:tt)*) => ($crate::console::_print(format_args!($($arg)*)));
}

#[doc(hidden)]
/// Internal print function, used by [print!()] macro.
pub fn _print(args: fmt::Arguments) {
    use fmt::Write;
    // intentionally ignore possible errors. This is best-effort,
    // it should not panic.
    let _ = with(|uart| write!(uart, "{}", args));
}

/// Install a UART as the global console, returning the old one.
pub fn install(uart: Uart) -> Option<Uart> {
    critical_section::with(|cs| CONSOLE.borrow_ref_mut(cs).replace(uart))
}

/// Remove the global console.
pub fn uninstall() -> Option<Uart> {
    critical_section::with(|cs| CONSOLE.borrow_ref_mut(cs).take())
}

/// Run `f` on the global console, if there is one.
pub fn with<F, R>(f: F) -> Option<R>
where
    F: FnOnce(&mut Uart) -> R,
{
    critical_section::with(|cs| CONSOLE.borrow_ref_mut(cs).as_mut().map(f))
}

#[cfg(test)]
mod test {
    use super::*;

    use std::boxed::Box;

    use crate::hal::pac;
    use pac::uart::{ctrl, status, RegisterBlock};

    // the console is global, so everything happens in one test
    #[test]
    fn print_through_console() {
        assert!(with(|_| ()).is_none());
        crate::println!("nobody is listening");

        let regs: &'static RegisterBlock = Box::leak(Box::new(RegisterBlock::zeroed()));
        regs.ctrl().write(ctrl::TX);
        regs.status().write(status::TXIDLE);
        // safety: regs is leaked, and lives forever
        let uart = Uart::new(unsafe { pac::UART::from_addr(regs as *const _ as usize) });

        assert!(install(uart).is_none());
        crate::print!("{}", 42);
        assert_eq!(regs.wdata().read(), b'2' as u32);
        crate::println!();
        assert_eq!(regs.wdata().read(), b'\n' as u32);

        let uart = uninstall().unwrap();
        assert_eq!(uart.free().addr(), regs as *const _ as usize);
        assert!(uninstall().is_none());
    }
}
