//! The bimodal direction predictor.

use crate::branch::Outcome;
use crate::predictor::counter::SaturatingCounter;
use crate::predictor::index::pc_index;
use crate::predictor::table::CounterTable;

/// A single table of saturating counters indexed directly by the program
/// counter. Carries no history state.
#[derive(Clone, Debug)]
pub struct BimodalPredictor {
    table: CounterTable,
}

impl BimodalPredictor {
    pub fn new(index_bits: u32) -> Self {
        Self {
            table: CounterTable::new(index_bits, SaturatingCounter::WEAKLY_TAKEN),
        }
    }

    /// Predict the direction for `pc`, then train the entry with the
    /// resolved outcome. Returns the pre-update prediction.
    pub fn process(&mut self, pc: u64, outcome: Outcome) -> Outcome {
        let idx = pc_index(pc, self.table.index_bits());
        let prediction = self.table.predict(idx);
        self.table.update(idx, outcome);
        prediction
    }

    pub fn table(&self) -> &CounterTable {
        &self.table
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn warms_up_and_cools_down() {
        let mut p = BimodalPredictor::new(4);
        let pc = 0x1000;

        // Counters start weakly-taken (2); two taken outcomes pin the entry
        // at 3, and not-taken outcomes then walk it back down through the
        // taken threshold.
        assert_eq!(p.process(pc, Outcome::T), Outcome::T);
        assert_eq!(p.process(pc, Outcome::T), Outcome::T);
        assert_eq!(p.process(pc, Outcome::N), Outcome::T); // mispredict, 3 -> 2
        assert_eq!(p.process(pc, Outcome::N), Outcome::T); // mispredict, 2 -> 1
        assert_eq!(p.process(pc, Outcome::N), Outcome::N); // correct, 1 -> 0
    }

    #[test]
    fn entries_are_independent() {
        let mut p = BimodalPredictor::new(4);
        for _ in 0..4 {
            let _ = p.process(0x1000, Outcome::N);
        }
        // A different index still sits at the initial weakly-taken state.
        assert_eq!(p.process(0x1004, Outcome::T), Outcome::T);
    }

    #[test]
    fn aliasing_addresses_share_an_entry() {
        let mut p = BimodalPredictor::new(2);
        // 0x1000 and 0x1010 differ only above the low 2 index bits.
        let _ = p.process(0x1000, Outcome::N);
        let _ = p.process(0x1010, Outcome::N);
        assert_eq!(p.process(0x1000, Outcome::N), Outcome::N);
    }
}
