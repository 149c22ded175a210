use vcell::VolatileCell;

/// A single 32-bit memory-mapped register.
#[repr(transparent)]
pub struct Reg {
    cell: VolatileCell<u32>,
}

impl Reg {
    /// A register holding `value`. Only useful for RAM-backed blocks.
    #[cfg(feature = "mock")]
    #[inline(always)]
    pub const fn new(value: u32) -> Self {
        Self {
            cell: VolatileCell::new(value),
        }
    }

    /// Read the register.
    #[inline(always)]
    pub fn read(&self) -> u32 {
        self.cell.get()
    }

    /// Write the register.
    #[inline(always)]
    pub fn write(&self, value: u32) {
        self.cell.set(value)
    }

    /// Read, modify and write back the register.
    #[inline(always)]
    pub fn modify<F>(&self, f: F)
    where
        F: FnOnce(u32) -> u32,
    {
        self.write(f(self.read()))
    }

    /// Set the bits in `mask`.
    #[inline(always)]
    pub fn set_bits(&self, mask: u32) {
        self.modify(|r| r | mask)
    }

    /// Are all the bits in `mask` set?
    #[inline(always)]
    pub fn is_set(&self, mask: u32) -> bool {
        self.read() & mask == mask
    }
}

impl core::fmt::Debug for Reg {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "Reg({:#010x})", self.read())
    }
}
