//! The gshare direction predictor.

use crate::branch::Outcome;
use crate::history::HistoryRegister;
use crate::predictor::counter::SaturatingCounter;
use crate::predictor::index::mixed_index;
use crate::predictor::table::CounterTable;

/// A counter table indexed by the program counter XORed with global branch
/// history. Owns its history register.
#[derive(Clone, Debug)]
pub struct GsharePredictor {
    table: CounterTable,
    ghr: HistoryRegister,
}

impl GsharePredictor {
    pub fn new(index_bits: u32, history_bits: u32) -> Self {
        Self {
            table: CounterTable::new(index_bits, SaturatingCounter::WEAKLY_TAKEN),
            ghr: HistoryRegister::new(history_bits as usize),
        }
    }

    /// Predict the direction for `pc`, train the indexed entry, then record
    /// the outcome in the history register. Returns the pre-update
    /// prediction.
    pub fn process(&mut self, pc: u64, outcome: Outcome) -> Outcome {
        let idx = mixed_index(pc, self.table.index_bits(), &self.ghr);
        let prediction = self.table.predict(idx);
        self.table.update(idx, outcome);
        self.ghr.record(outcome);
        prediction
    }

    pub fn table(&self) -> &CounterTable {
        &self.table
    }

    pub fn history(&self) -> &HistoryRegister {
        &self.ghr
    }
}
