//! The hybrid (chooser-selected) direction predictor.

use crate::branch::Outcome;
use crate::history::HistoryRegister;
use crate::predictor::counter::SaturatingCounter;
use crate::predictor::index::{mixed_index, pc_index};
use crate::predictor::table::CounterTable;

/// A meta-predictor combining a gshare and a bimodal component.
///
/// A chooser table (indexed directly by the program counter) selects which
/// component supplies the prediction for each event. Only the active
/// component's counter is trained, but the chooser observes the correctness
/// of both components every event.
#[derive(Clone, Debug)]
pub struct HybridPredictor {
    chooser: CounterTable,
    gshare: CounterTable,
    bimodal: CounterTable,
    ghr: HistoryRegister,
}

impl HybridPredictor {
    pub fn new(
        chooser_bits: u32,
        gshare_bits: u32,
        bimodal_bits: u32,
        history_bits: u32,
    ) -> Self {
        Self {
            chooser: CounterTable::new(chooser_bits, SaturatingCounter::WEAKLY_NOT_TAKEN),
            gshare: CounterTable::new(gshare_bits, SaturatingCounter::WEAKLY_TAKEN),
            bimodal: CounterTable::new(bimodal_bits, SaturatingCounter::WEAKLY_TAKEN),
            ghr: HistoryRegister::new(history_bits as usize),
        }
    }

    /// Process one event and return the active component's pre-update
    /// prediction.
    ///
    /// The non-active component's counter is left untouched this round; the
    /// chooser moves toward whichever component was correct when exactly one
    /// of them was.
    pub fn process(&mut self, pc: u64, outcome: Outcome) -> Outcome {
        let gshare_idx = mixed_index(pc, self.gshare.index_bits(), &self.ghr);
        let bimodal_idx = pc_index(pc, self.bimodal.index_bits());
        let chooser_idx = pc_index(pc, self.chooser.index_bits());

        let gshare_pred = self.gshare.predict(gshare_idx);
        let bimodal_pred = self.bimodal.predict(bimodal_idx);

        let prediction = match self.chooser.predict(chooser_idx) {
            Outcome::T => {
                self.gshare.update(gshare_idx, outcome);
                gshare_pred
            }
            Outcome::N => {
                self.bimodal.update(bimodal_idx, outcome);
                bimodal_pred
            }
        };
        self.ghr.record(outcome);

        let gshare_correct = gshare_pred == outcome;
        let bimodal_correct = bimodal_pred == outcome;
        if gshare_correct != bimodal_correct {
            self.chooser
                .update(chooser_idx, Outcome::from_bool(gshare_correct));
        }

        prediction
    }

    pub fn chooser(&self) -> &CounterTable {
        &self.chooser
    }

    pub fn gshare(&self) -> &CounterTable {
        &self.gshare
    }

    pub fn bimodal(&self) -> &CounterTable {
        &self.bimodal
    }

    pub fn history(&self) -> &HistoryRegister {
        &self.ghr
    }
}
