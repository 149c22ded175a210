//! Peripheral access crate for ZeroSoC.
//!
//! ZeroSoC pairs an Ibex RISC-V core with the OpenTitan GPIO and UART
//! blocks. This crate describes their register layouts and hands out
//! ownership tokens for them, bound to the addresses in a [MemoryMap].
#![no_std]

use core::marker::PhantomData;
use core::ops::Deref;

pub mod gpio;
pub mod uart;

mod reg;
pub use reg::Reg;

/// Base addresses of every peripheral on the bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MemoryMap {
    pub gpio: usize,
    pub uart: usize,
}

impl MemoryMap {
    /// The ZeroSoC crossbar layout.
    pub const ZEROSOC: MemoryMap = MemoryMap {
        gpio: 0x4001_0000,
        uart: 0x4000_0000,
    };

    /// Do the register blocks in this map avoid one another?
    pub const fn is_disjoint(&self) -> bool {
        let gpio_end = self.gpio + core::mem::size_of::<gpio::RegisterBlock>();
        let uart_end = self.uart + core::mem::size_of::<uart::RegisterBlock>();
        gpio_end <= self.uart || uart_end <= self.gpio
    }
}

/// The GPIO controller.
pub struct GPIO {
    base: usize,
    _marker: PhantomData<*const ()>,
}

/// The UART controller.
pub struct UART {
    base: usize,
    _marker: PhantomData<*const ()>,
}

macro_rules! peripheral {
    ($Name:ident, $module:ident) => {
        impl $Name {
            /// Bind this peripheral to a register block at `base`.
            ///
            /// # Safety
            /// `base` must point to a live, suitably aligned register
            /// block, and nothing else may own it.
            #[inline(always)]
            pub const unsafe fn from_addr(base: usize) -> Self {
                Self {
                    base,
                    _marker: PhantomData,
                }
            }

            /// The base address this peripheral is bound to.
            #[inline(always)]
            pub const fn addr(&self) -> usize {
                self.base
            }

            /// Raw pointer to the register block.
            #[inline(always)]
            pub const fn ptr(&self) -> *const $module::RegisterBlock {
                self.base as *const _
            }
        }

        // safety: the token is the only handle to its registers
        unsafe impl Send for $Name {}

        impl Deref for $Name {
            type Target = $module::RegisterBlock;

            #[inline(always)]
            fn deref(&self) -> &Self::Target {
                // safety: from_addr requires a live register block at base
                unsafe { &*self.ptr() }
            }
        }

        impl core::fmt::Debug for $Name {
            fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
                write!(f, "{}@{:#010x}", stringify!($Name), self.base)
            }
        }

        #[cfg(feature = "defmt")]
        impl defmt::Format for $Name {
            fn format(&self, f: defmt::Formatter) {
                defmt::write!(f, "{}@{=usize:#x}", stringify!($Name), self.base)
            }
        }
    };
}

peripheral!(GPIO, gpio);
peripheral!(UART, uart);

/// All the peripherals.
#[allow(non_snake_case)]
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Peripherals {
    pub GPIO: GPIO,
    pub UART: UART,
}

#[cfg(feature = "critical-section")]
static mut TAKEN: bool = false;

impl Peripherals {
    /// Returns all the peripherals *once*, at their ZeroSoC addresses.
    #[cfg(feature = "critical-section")]
    #[inline]
    pub fn take() -> Option<Self> {
        // safety: MemoryMap::ZEROSOC describes the real hardware
        unsafe { Self::take_with(MemoryMap::ZEROSOC) }
    }

    /// Returns all the peripherals *once*, bound to `map`. Returns [None]
    /// if they were already taken, or if `map` overlaps itself.
    ///
    /// # Safety
    /// Every address in `map` must point to a live register block.
    #[cfg(feature = "critical-section")]
    #[inline]
    pub unsafe fn take_with(map: MemoryMap) -> Option<Self> {
        if !map.is_disjoint() {
            return None;
        }

        critical_section::with(|_| {
            // safety: guarded by the critical section
            if TAKEN {
                None
            } else {
                TAKEN = true;
                Some(Self::steal_with(map))
            }
        })
    }

    /// Unchecked version of [Peripherals::take_with].
    ///
    /// # Safety
    /// Each returned peripheral must be used by only one owner.
    #[inline]
    pub unsafe fn steal_with(map: MemoryMap) -> Self {
        Peripherals {
            GPIO: GPIO::from_addr(map.gpio),
            UART: UART::from_addr(map.uart),
        }
    }
}
