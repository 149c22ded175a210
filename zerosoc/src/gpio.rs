//! GPIO register block (OpenTitan `gpio` layout).

use crate::Reg;

/// GPIO register block.
#[repr(C)]
#[derive(Debug)]
pub struct RegisterBlock {
    intr_state: Reg,
    intr_enable: Reg,
    intr_test: Reg,
    data_in: Reg,
    direct_out: Reg,
    masked_out_lower: Reg,
    masked_out_upper: Reg,
    direct_oe: Reg,
    masked_oe_lower: Reg,
    masked_oe_upper: Reg,
    intr_ctrl_en_rising: Reg,
    intr_ctrl_en_falling: Reg,
    intr_ctrl_en_lvlhigh: Reg,
    intr_ctrl_en_lvllow: Reg,
    ctrl_en_input_filter: Reg,
}

/// Number of pins on the controller.
pub const PIN_COUNT: u8 = 32;

/// Layout of the `MASKED_*` registers: data in the low half, write
/// enables in the high half, each covering sixteen pins.
pub mod masked {
    /// Pins per masked register.
    pub const PINS: u8 = 16;
    /// Shift from a data bit to its mask bit.
    pub const MASK_SHIFT: u32 = 16;
}

impl RegisterBlock {
    /// A block with every register cleared, for use in RAM.
    #[cfg(feature = "mock")]
    pub const fn zeroed() -> Self {
        Self {
            intr_state: Reg::new(0),
            intr_enable: Reg::new(0),
            intr_test: Reg::new(0),
            data_in: Reg::new(0),
            direct_out: Reg::new(0),
            masked_out_lower: Reg::new(0),
            masked_out_upper: Reg::new(0),
            direct_oe: Reg::new(0),
            masked_oe_lower: Reg::new(0),
            masked_oe_upper: Reg::new(0),
            intr_ctrl_en_rising: Reg::new(0),
            intr_ctrl_en_falling: Reg::new(0),
            intr_ctrl_en_lvlhigh: Reg::new(0),
            intr_ctrl_en_lvllow: Reg::new(0),
            ctrl_en_input_filter: Reg::new(0),
        }
    }

    /// 0x00 - Interrupt state, write 1 to clear.
    #[inline(always)]
    pub const fn intr_state(&self) -> &Reg {
        &self.intr_state
    }

    /// 0x04 - Interrupt enable.
    #[inline(always)]
    pub const fn intr_enable(&self) -> &Reg {
        &self.intr_enable
    }

    /// 0x08 - Interrupt test.
    #[inline(always)]
    pub const fn intr_test(&self) -> &Reg {
        &self.intr_test
    }

    /// 0x0c - Sampled input levels.
    #[inline(always)]
    pub const fn data_in(&self) -> &Reg {
        &self.data_in
    }

    /// 0x10 - Output levels for all pins at once.
    #[inline(always)]
    pub const fn direct_out(&self) -> &Reg {
        &self.direct_out
    }

    /// 0x14 - Masked output levels, pins 0 to 15.
    #[inline(always)]
    pub const fn masked_out_lower(&self) -> &Reg {
        &self.masked_out_lower
    }

    /// 0x18 - Masked output levels, pins 16 to 31.
    #[inline(always)]
    pub const fn masked_out_upper(&self) -> &Reg {
        &self.masked_out_upper
    }

    /// 0x1c - Output enables for all pins at once.
    #[inline(always)]
    pub const fn direct_oe(&self) -> &Reg {
        &self.direct_oe
    }

    /// 0x20 - Masked output enables, pins 0 to 15.
    #[inline(always)]
    pub const fn masked_oe_lower(&self) -> &Reg {
        &self.masked_oe_lower
    }

    /// 0x24 - Masked output enables, pins 16 to 31.
    #[inline(always)]
    pub const fn masked_oe_upper(&self) -> &Reg {
        &self.masked_oe_upper
    }

    /// 0x28 - Rising edge interrupt enables.
    #[inline(always)]
    pub const fn intr_ctrl_en_rising(&self) -> &Reg {
        &self.intr_ctrl_en_rising
    }

    /// 0x2c - Falling edge interrupt enables.
    #[inline(always)]
    pub const fn intr_ctrl_en_falling(&self) -> &Reg {
        &self.intr_ctrl_en_falling
    }

    /// 0x30 - High level interrupt enables.
    #[inline(always)]
    pub const fn intr_ctrl_en_lvlhigh(&self) -> &Reg {
        &self.intr_ctrl_en_lvlhigh
    }

    /// 0x34 - Low level interrupt enables.
    #[inline(always)]
    pub const fn intr_ctrl_en_lvllow(&self) -> &Reg {
        &self.intr_ctrl_en_lvllow
    }

    /// 0x38 - Input noise filter enables.
    #[inline(always)]
    pub const fn ctrl_en_input_filter(&self) -> &Reg {
        &self.ctrl_en_input_filter
    }
}
