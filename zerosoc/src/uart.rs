//! UART register block (OpenTitan `uart` layout).

use crate::Reg;

/// UART register block.
#[repr(C)]
#[derive(Debug)]
pub struct RegisterBlock {
    intr_state: Reg,
    intr_enable: Reg,
    intr_test: Reg,
    ctrl: Reg,
    status: Reg,
    rdata: Reg,
    wdata: Reg,
    fifo_ctrl: Reg,
    fifo_status: Reg,
    ovrd: Reg,
    val: Reg,
    timeout_ctrl: Reg,
}

/// `CTRL` fields.
pub mod ctrl {
    /// Transmitter enable.
    pub const TX: u32 = 1 << 0;
    /// Receiver enable.
    pub const RX: u32 = 1 << 1;
    /// RX noise filter enable.
    pub const NF: u32 = 1 << 2;
    /// System loopback.
    pub const SLPBK: u32 = 1 << 4;
    /// Line loopback.
    pub const LLPBK: u32 = 1 << 5;
    /// Parity bit enable.
    pub const PARITY_EN: u32 = 1 << 6;
    /// Odd parity when set, even parity when clear.
    pub const PARITY_ODD: u32 = 1 << 7;
    /// Shift of the baud rate NCO field.
    pub const NCO_SHIFT: u32 = 16;
    /// Width of the NCO field, in bits.
    pub const NCO_WIDTH: u32 = 16;
}

/// `STATUS` fields.
pub mod status {
    pub const TXFULL: u32 = 1 << 0;
    pub const RXFULL: u32 = 1 << 1;
    pub const TXEMPTY: u32 = 1 << 2;
    pub const TXIDLE: u32 = 1 << 3;
    pub const RXIDLE: u32 = 1 << 4;
    pub const RXEMPTY: u32 = 1 << 5;
}

/// `FIFO_CTRL` fields.
pub mod fifo_ctrl {
    /// Reset the RX FIFO.
    pub const RXRST: u32 = 1 << 0;
    /// Reset the TX FIFO.
    pub const TXRST: u32 = 1 << 1;
    /// RX watermark level field, 3 bits.
    pub const RXILVL_SHIFT: u32 = 2;
    /// TX watermark level field, 2 bits.
    pub const TXILVL_SHIFT: u32 = 5;
}

/// Every interrupt source, as laid out in `INTR_*`.
pub const INTR_ALL: u32 = 0xff;

impl RegisterBlock {
    /// A block with every register cleared, for use in RAM.
    #[cfg(feature = "mock")]
    pub const fn zeroed() -> Self {
        Self {
            intr_state: Reg::new(0),
            intr_enable: Reg::new(0),
            intr_test: Reg::new(0),
            ctrl: Reg::new(0),
            status: Reg::new(0),
            rdata: Reg::new(0),
            wdata: Reg::new(0),
            fifo_ctrl: Reg::new(0),
            fifo_status: Reg::new(0),
            ovrd: Reg::new(0),
            val: Reg::new(0),
            timeout_ctrl: Reg::new(0),
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

    /// 0x0c - Control.
    #[inline(always)]
    pub const fn ctrl(&self) -> &Reg {
        &self.ctrl
    }

    /// 0x10 - Live status.
    #[inline(always)]
    pub const fn status(&self) -> &Reg {
        &self.status
    }

    /// 0x14 - Read data.
    #[inline(always)]
    pub const fn rdata(&self) -> &Reg {
        &self.rdata
    }

    /// 0x18 - Write data.
    #[inline(always)]
    pub const fn wdata(&self) -> &Reg {
        &self.wdata
    }

    /// 0x1c - FIFO control.
    #[inline(always)]
    pub const fn fifo_ctrl(&self) -> &Reg {
        &self.fifo_ctrl
    }

    /// 0x20 - FIFO levels.
    #[inline(always)]
    pub const fn fifo_status(&self) -> &Reg {
        &self.fifo_status
    }

    /// 0x24 - TX pin override.
    #[inline(always)]
    pub const fn ovrd(&self) -> &Reg {
        &self.ovrd
    }

    /// 0x28 - Oversampled RX values.
    #[inline(always)]
    pub const fn val(&self) -> &Reg {
        &self.val
    }

    /// 0x2c - RX timeout control.
    #[inline(always)]
    pub const fn timeout_ctrl(&self) -> &Reg {
        &self.timeout_ctrl
    }
}
