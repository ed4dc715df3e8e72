//! Implementation of a 2-bit saturating counter.

use crate::branch::Outcome;

/// A 2-bit saturating counter used to follow the behavior of a branch.
///
/// The value saturates within `[0, 3]` and predicts taken at 2 or above.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SaturatingCounter {
    value: u8,
}

impl SaturatingCounter {
    pub const MAX: u8 = 3;

    /// Initial state for the bimodal and gshare tables.
    pub const WEAKLY_TAKEN: u8 = 2;

    /// Initial state for the hybrid chooser table.
    pub const WEAKLY_NOT_TAKEN: u8 = 1;

    pub fn new(value: u8) -> Self {
        debug_assert!(value <= Self::MAX);
        Self { value }
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    /// Return the current predicted direction.
    pub fn predict(&self) -> Outcome {
        Outcome::from_bool(self.value >= 2)
    }

    /// Move the counter toward the resolved outcome, saturating at the bounds.
    pub fn update(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::T => {
                if self.value < Self::MAX {
                    self.value += 1;
                }
            }
            Outcome::N => {
                self.value = self.value.saturating_sub(1);
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn saturates_at_both_bounds() {
        let mut ctr = SaturatingCounter::new(SaturatingCounter::WEAKLY_TAKEN);
        for _ in 0..100 {
            ctr.update(Outcome::T);
            assert!(ctr.value() <= SaturatingCounter::MAX);
        }
        assert_eq!(ctr.value(), 3);
        for _ in 0..100 {
            ctr.update(Outcome::N);
        }
        assert_eq!(ctr.value(), 0);
    }

    #[test]
    fn predicts_taken_at_two_or_above() {
        assert_eq!(SaturatingCounter::new(0).predict(), Outcome::N);
        assert_eq!(SaturatingCounter::new(1).predict(), Outcome::N);
        assert_eq!(SaturatingCounter::new(2).predict(), Outcome::T);
        assert_eq!(SaturatingCounter::new(3).predict(), Outcome::T);
    }

    #[test]
    fn stays_in_range_for_arbitrary_sequences() {
        let outcomes = [
            Outcome::T, Outcome::N, Outcome::N, Outcome::T, Outcome::T,
            Outcome::T, Outcome::N, Outcome::T, Outcome::N, Outcome::N,
        ];
        let mut ctr = SaturatingCounter::new(0);
        for o in outcomes.iter().cycle().take(1000) {
            ctr.update(*o);
            assert!(ctr.value() <= SaturatingCounter::MAX);
        }
    }
}
