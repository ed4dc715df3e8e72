//! The global branch history register.

use bitvec::prelude::*;

use crate::branch::Outcome;

/// A fixed-width shift register holding the most recent branch outcomes.
///
/// The newest outcome always occupies the most-significant retained bit
/// (index `len - 1`); recording a new outcome discards the oldest bit from
/// the least-significant side. A zero-width register is legal and always
/// reads as zero.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryRegister {
    data: BitVec<usize, Lsb0>,
    len: usize,
}

// Presents the bits with the most-significant (newest) on the left.
impl std::fmt::Display for HistoryRegister {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let x: String = self.data.as_bitslice().iter().by_vals()
            .map(|b| if b { '1' } else { '0' })
            .rev()
            .collect();
        write!(f, "{}", x)
    }
}

impl HistoryRegister {
    /// Create a register with the specified length in bits.
    /// All bits in the register are initialized to zero.
    pub fn new(len: usize) -> Self {
        Self {
            data: bitvec![usize, Lsb0; 0; len],
            len,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Return the register contents as an integer.
    pub fn value(&self) -> usize {
        if self.len == 0 {
            return 0;
        }
        self.data.load::<usize>()
    }

    /// Shift the register down by one bit and record `outcome` in the
    /// most-significant position. No-op for a zero-width register.
    pub fn record(&mut self, outcome: Outcome) {
        if self.len == 0 {
            return;
        }
        if self.len > 1 {
            self.data.shift_left(1);
        }
        self.data.set(self.len - 1, outcome.into());
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn record_inserts_at_msb() {
        let mut ghr = HistoryRegister::new(4);
        assert_eq!(ghr.value(), 0);

        ghr.record(Outcome::T);
        assert_eq!(ghr.value(), 0b1000);

        ghr.record(Outcome::N);
        assert_eq!(ghr.value(), 0b0100);

        ghr.record(Outcome::T);
        assert_eq!(ghr.value(), 0b1010);

        ghr.record(Outcome::T);
        assert_eq!(ghr.value(), 0b1101);
    }

    #[test]
    fn oldest_bit_falls_off_the_bottom() {
        let mut ghr = HistoryRegister::new(2);
        ghr.record(Outcome::T);
        ghr.record(Outcome::N);
        ghr.record(Outcome::N);
        // The first taken outcome has been shifted out entirely.
        assert_eq!(ghr.value(), 0b00);
        assert_eq!(ghr.len(), 2);
    }

    #[test]
    fn value_is_a_function_of_prior_value_and_new_bit() {
        let mut ghr = HistoryRegister::new(6);
        for o in [Outcome::T, Outcome::T, Outcome::N, Outcome::T, Outcome::N] {
            let prior = ghr.value();
            ghr.record(o);
            let expected = (prior >> 1) | (o.bit() << 5);
            assert_eq!(ghr.value(), expected);
        }
    }

    #[test]
    fn single_bit_register_tracks_the_last_outcome() {
        let mut ghr = HistoryRegister::new(1);
        ghr.record(Outcome::T);
        assert_eq!(ghr.value(), 1);
        ghr.record(Outcome::N);
        assert_eq!(ghr.value(), 0);
        ghr.record(Outcome::T);
        assert_eq!(ghr.value(), 1);
    }

    #[test]
    fn zero_width_register_is_inert() {
        let mut ghr = HistoryRegister::new(0);
        ghr.record(Outcome::T);
        ghr.record(Outcome::T);
        assert_eq!(ghr.value(), 0);
        assert!(ghr.is_empty());
    }

    #[test]
    fn display_newest_on_the_left() {
        let mut ghr = HistoryRegister::new(4);
        ghr.record(Outcome::T);
        assert_eq!(format!("{}", ghr), "1000");
    }
}
