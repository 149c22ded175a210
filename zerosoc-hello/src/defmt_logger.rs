//! A [defmt] logger writing raw frames to the global console.
//!
//! Frames are collected in a small buffer and pushed out the UART when it
//! fills or the frame ends. With no console installed they are dropped.

use core::sync::atomic::{AtomicBool, Ordering};

use critical_section::RestoreState;

#[defmt::global_logger]
struct Logger;

const PENDING_LEN: usize = 0x40;

struct Pending {
    data: [u8; PENDING_LEN],
    len: usize,
}

impl Pending {
    const fn new() -> Self {
        Self {
            data: [0; PENDING_LEN],
            len: 0,
        }
    }

    fn push(&mut self, mut bytes: &[u8]) {
        while !bytes.is_empty() {
            let amt = bytes.len().min(PENDING_LEN - self.len);
            self.data[self.len..self.len + amt].copy_from_slice(&bytes[..amt]);
            self.len += amt;
            bytes = &bytes[amt..];

            if self.len == PENDING_LEN {
                self.drain();
            }
        }
    }

    fn drain(&mut self) {
        if self.len == 0 {
            return;
        }
        let data = &self.data[..self.len];
        let _ = crate::console::with(|uart| uart.write_all(data));
        self.len = 0;
    }
}

static TAKEN: AtomicBool = AtomicBool::new(false);
static mut CS_RESTORE: RestoreState = RestoreState::invalid();
static mut ENCODER: defmt::Encoder = defmt::Encoder::new();
static mut PENDING: Pending = Pending::new();

// safety: callers hold the critical section taken in acquire()
unsafe fn pending() -> &'static mut Pending {
    &mut *core::ptr::addr_of_mut!(PENDING)
}

fn push(bytes: &[u8]) {
    // safety: the encoder only calls this between acquire and release
    unsafe { pending().push(bytes) }
}

unsafe impl defmt::Logger for Logger {
    fn acquire() {
        // safety: paired with release()
        let restore = unsafe { critical_section::acquire() };

        if TAKEN.load(Ordering::Relaxed) {
            panic!("defmt logger acquired twice");
        }
        TAKEN.store(true, Ordering::Relaxed);

        // safety: inside the critical section
        unsafe {
            CS_RESTORE = restore;
            (*core::ptr::addr_of_mut!(ENCODER)).start_frame(push)
        }
    }

    unsafe fn flush() {
        pending().drain();
    }

    unsafe fn release() {
        (*core::ptr::addr_of_mut!(ENCODER)).end_frame(push);
        pending().drain();

        TAKEN.store(false, Ordering::Relaxed);
        critical_section::release(CS_RESTORE);
    }

    unsafe fn write(bytes: &[u8]) {
        (*core::ptr::addr_of_mut!(ENCODER)).write(bytes, push);
    }
}
