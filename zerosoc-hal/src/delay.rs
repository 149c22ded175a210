//! Busy-wait delays, calibrated against the core clock.
//!
//! There is no timer on ZeroSoC, so delays count instructions. Each pass
//! through the loop costs [CYCLES_PER_LOOP] cycles on Ibex: four `nop`,
//! one `addi`, and a taken `bnez` at three cycles. Nothing corrects for
//! drift.

use embedded_hal_1::delay as hal1;
use muldiv::MulDiv;

use crate::time::Hertz;

/// The core clock ZeroSoC runs at.
pub const CORE_CLOCK: Hertz = Hertz::MHz(6);

/// Cycles spent in one pass of the delay loop.
pub const CYCLES_PER_LOOP: u32 = 8;

/// A delay that spins the core for a computed number of loops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CycleDelay {
    loops_per_ms: u32,
}

impl Default for CycleDelay {
    #[inline(always)]
    fn default() -> Self {
        Self::new(CORE_CLOCK)
    }
}

impl CycleDelay {
    /// Calibrate a delay for a core running at `core_clock`.
    #[inline(always)]
    pub const fn new(core_clock: Hertz) -> Self {
        Self {
            loops_per_ms: core_clock.to_Hz() / 1000 / CYCLES_PER_LOOP,
        }
    }

    /// Loops needed to wait one millisecond.
    #[inline(always)]
    pub const fn loops_per_ms(&self) -> u32 {
        self.loops_per_ms
    }

    /// Loops needed to wait `ms` milliseconds.
    #[inline(always)]
    pub const fn loops_for_ms(&self, ms: u32) -> u64 {
        self.loops_per_ms as u64 * ms as u64
    }

    /// Core cycles spent waiting `ms` milliseconds.
    #[inline(always)]
    pub const fn cycles_for_ms(&self, ms: u32) -> u64 {
        self.loops_for_ms(ms) * CYCLES_PER_LOOP as u64
    }

    /// Loops needed to wait `us` microseconds, rounded up.
    #[inline]
    pub fn loops_for_us(&self, us: u32) -> u64 {
        (us as u64 * self.loops_per_ms as u64).div_ceil(1_000)
    }

    /// Loops needed to wait `ns` nanoseconds, rounded up.
    #[inline]
    pub fn loops_for_ns(&self, ns: u32) -> u64 {
        // u32::MAX ns is barely over four seconds, so this always fits
        ns.mul_div_ceil(self.loops_per_ms, 1_000_000)
            .unwrap_or(u32::MAX) as u64
    }

    /// Spin for `loops` passes of the delay loop.
    pub fn spin(&self, loops: u64) {
        let mut remaining = loops;
        while remaining > 0 {
            let chunk = remaining.min(u32::MAX as u64) as u32;
            spin_loops(chunk);
            remaining -= chunk as u64;
        }
    }
}

impl hal1::DelayNs for CycleDelay {
    #[inline]
    fn delay_ns(&mut self, ns: u32) {
        self.spin(self.loops_for_ns(ns))
    }

    #[inline]
    fn delay_us(&mut self, us: u32) {
        self.spin(self.loops_for_us(us))
    }

    #[inline]
    fn delay_ms(&mut self, ms: u32) {
        self.spin(self.loops_for_ms(ms))
    }
}

#[cfg(target_arch = "riscv32")]
#[inline(always)]
fn spin_loops(loops: u32) {
    // the loop decrements before testing, so zero would wrap
    if loops == 0 {
        return;
    }

    // safety: only touches the counter register
    unsafe {
        core::arch::asm!(
            "2:",
            "nop",
            "nop",
            "nop",
            "nop",
            "addi {0}, {0}, -1",
            "bnez {0}, 2b",
            inout(reg) loops => _,
            options(nomem, nostack),
        );
    }
}

#[cfg(not(target_arch = "riscv32"))]
#[inline(always)]
fn spin_loops(loops: u32) {
    for _ in 0..loops {
        core::hint::spin_loop();
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use crate::prelude::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn zerosoc_calibration() {
        let delay = CycleDelay::default();
        assert_eq!(delay.loops_per_ms(), 750);
        assert_eq!(delay.cycles_for_ms(1000), 6_000_000);
    }

    #[quickcheck]
    fn cycles_match_clock(ms: u32) -> bool {
        // 6 MHz is 6000 cycles per millisecond, with no remainder
        CycleDelay::default().cycles_for_ms(ms) == ms as u64 * 6000
    }

    #[quickcheck]
    fn sub_millisecond_rounds_up(us: u16) -> bool {
        let delay = CycleDelay::default();
        let loops = delay.loops_for_us(us as u32);
        let cycles = loops * CYCLES_PER_LOOP as u64;
        // never short, and never more than one loop long
        cycles >= us as u64 * 6 && cycles < us as u64 * 6 + CYCLES_PER_LOOP as u64
    }

    #[test]
    fn nanoseconds() {
        let delay = CycleDelay::default();
        assert_eq!(delay.loops_for_ns(0), 0);
        assert_eq!(delay.loops_for_ns(1), 1);
        assert_eq!(delay.loops_for_ns(1_000_000), 750);
        assert_eq!(delay.loops_for_ns(u32::MAX), 3_221_226);
    }

    #[test]
    fn zero_returns() {
        let mut delay = CycleDelay::default();
        delay.delay_ms(0);
        delay.delay_us(0);
        delay.delay_ns(0);
    }

    #[test]
    fn short_spin() {
        let mut delay = CycleDelay::new(Hertz::kHz(8));
        assert_eq!(delay.loops_per_ms(), 1);
        delay.delay_ms(3);
    }
}
