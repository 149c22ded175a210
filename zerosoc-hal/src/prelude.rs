//! Traits and extension methods, for glob import.

pub use embedded_hal_1::delay::DelayNs as _;
pub use embedded_hal_1::digital::OutputPin as _;
pub use embedded_hal_1::digital::StatefulOutputPin as _;
pub use embedded_hal_nb::serial::Read as _;
pub use embedded_hal_nb::serial::Write as _;

pub use crate::time::DurationExtU32 as _;
pub use crate::time::RateExtU32 as _;
