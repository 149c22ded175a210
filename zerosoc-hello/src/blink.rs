use embedded_hal_1::delay::DelayNs;
use embedded_hal_1::digital::{OutputPin, PinState};

use crate::Stage;

/// Toggles one output pin forever, pausing between each change.
#[derive(Debug)]
pub struct Blinker<P, D> {
    pin: P,
    delay: D,
    period_ms: u32,
    state: bool,
}

impl<P, D> Blinker<P, D>
where
    P: OutputPin,
    D: DelayNs,
{
    /// Blink `pin`, starting low, holding each level for `period_ms`.
    pub fn new(pin: P, delay: D, period_ms: u32) -> Self {
        Self {
            pin,
            delay,
            period_ms,
            state: false,
        }
    }

    /// The level the next step will write.
    #[inline(always)]
    pub fn state(&self) -> bool {
        self.state
    }

    /// Where the sequence is.
    #[inline(always)]
    pub fn stage(&self) -> Stage {
        Stage::Blinking(self.state)
    }

    /// Write the current level, flip it, then wait one period.
    ///
    /// The level flips even if the write fails. Returns the level that
    /// was written.
    pub fn step(&mut self) -> Result<bool, P::Error> {
        let level = self.state;
        let written = self.pin.set_state(PinState::from(level));
        self.state = !level;
        self.delay.delay_ms(self.period_ms);
        written.map(|()| level)
    }

    /// Blink forever. Pin errors are dropped: there is nobody to tell.
    pub fn run(mut self) -> ! {
        loop {
            let _ = self.step();
        }
    }

    /// Recover the pin and delay.
    pub fn free(self) -> (P, D) {
        (self.pin, self.delay)
    }
}

#[cfg(test)]
pub(crate) mod test {
    use super::*;

    use std::vec::Vec;

    use embedded_hal_1::digital::{ErrorKind, ErrorType};
    use quickcheck_macros::quickcheck;

    /// Records every level written to it.
    #[derive(Debug, Default)]
    pub(crate) struct MockPin {
        pub levels: Vec<bool>,
        pub broken: bool,
    }

    impl ErrorType for MockPin {
        type Error = ErrorKind;
    }

    impl OutputPin for MockPin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.set_state(PinState::Low)
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.set_state(PinState::High)
        }

        fn set_state(&mut self, state: PinState) -> Result<(), Self::Error> {
            if self.broken {
                return Err(ErrorKind::Other);
            }
            self.levels.push(state == PinState::High);
            Ok(())
        }
    }

    /// Adds up the time it was asked to wait, without waiting.
    #[derive(Debug, Default)]
    pub(crate) struct MockDelay {
        pub elapsed_ns: u64,
        pub calls: usize,
    }

    impl DelayNs for MockDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.elapsed_ns += ns as u64;
            self.calls += 1;
        }

        fn delay_ms(&mut self, ms: u32) {
            self.elapsed_ns += ms as u64 * 1_000_000;
            self.calls += 1;
        }
    }

    #[test]
    fn first_two_steps() {
        let mut blinker = Blinker::new(MockPin::default(), MockDelay::default(), 1000);
        assert!(!blinker.state());

        assert_eq!(blinker.step(), Ok(false));
        assert!(blinker.state());
        assert_eq!(blinker.stage(), Stage::Blinking(true));

        assert_eq!(blinker.step(), Ok(true));
        assert!(!blinker.state());

        let (pin, delay) = blinker.free();
        assert_eq!(pin.levels, [false, true]);
        assert_eq!(delay.calls, 2);
        assert_eq!(delay.elapsed_ns, 2_000_000_000);
    }

    #[test]
    fn broken_pin_still_toggles() {
        let pin = MockPin {
            broken: true,
            ..Default::default()
        };
        let mut blinker = Blinker::new(pin, MockDelay::default(), 1000);

        assert_eq!(blinker.step(), Err(ErrorKind::Other));
        assert!(blinker.state());
        assert_eq!(blinker.step(), Err(ErrorKind::Other));
        assert!(!blinker.state());

        // the delay still runs, so the failing loop keeps its pace
        let (_, delay) = blinker.free();
        assert_eq!(delay.calls, 2);
    }

    #[quickcheck]
    fn alternates_with_period_two(steps: u16) -> bool {
        let steps = steps as usize % 2000;
        let mut blinker = Blinker::new(MockPin::default(), MockDelay::default(), 1000);
        for _ in 0..steps {
            if blinker.step().is_err() {
                return false;
            }
        }

        let (pin, delay) = blinker.free();
        pin.levels.len() == steps
            && pin.levels.iter().enumerate().all(|(i, l)| *l == (i % 2 == 1))
            && delay.elapsed_ns == steps as u64 * 1_000_000_000
    }
}
