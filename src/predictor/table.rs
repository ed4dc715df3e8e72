//! A table of saturating counters indexed by bits derived from the
//! program counter.

use crate::branch::Outcome;
use crate::predictor::counter::SaturatingCounter;

/// An ordered array of `2^w` [`SaturatingCounter`] entries.
#[derive(Clone, Debug)]
pub struct CounterTable {
    data: Vec<SaturatingCounter>,
    index_bits: u32,
}

impl CounterTable {
    pub fn new(index_bits: u32, init: u8) -> Self {
        let data = vec![SaturatingCounter::new(init); 1usize << index_bits];
        Self { data, index_bits }
    }

    /// Returns the number of entries in the table.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    pub fn index_bits(&self) -> u32 {
        self.index_bits
    }

    /// Returns a bitmask corresponding to the number of entries in the table.
    pub fn index_mask(&self) -> usize {
        self.data.len() - 1
    }

    pub fn get(&self, idx: usize) -> &SaturatingCounter {
        &self.data[idx & self.index_mask()]
    }

    pub fn get_mut(&mut self, idx: usize) -> &mut SaturatingCounter {
        let index = idx & self.index_mask();
        &mut self.data[index]
    }

    /// Return the predicted direction at `idx` without changing any state.
    pub fn predict(&self, idx: usize) -> Outcome {
        self.get(idx).predict()
    }

    /// Train the entry at `idx` with the resolved outcome.
    pub fn update(&mut self, idx: usize, outcome: Outcome) {
        self.get_mut(idx).update(outcome);
    }

    /// Return the raw counter values in index order.
    pub fn dump(&self) -> Vec<u8> {
        self.data.iter().map(|c| c.value()).collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn table_has_power_of_two_entries() {
        let table = CounterTable::new(4, SaturatingCounter::WEAKLY_TAKEN);
        assert_eq!(table.size(), 16);
        assert_eq!(table.index_mask(), 0xf);
        assert!(table.dump().iter().all(|v| *v == 2));
    }

    #[test]
    fn update_only_touches_one_entry() {
        let mut table = CounterTable::new(3, SaturatingCounter::WEAKLY_TAKEN);
        table.update(5, Outcome::T);
        let dump = table.dump();
        assert_eq!(dump[5], 3);
        for (i, v) in dump.iter().enumerate() {
            if i != 5 {
                assert_eq!(*v, 2);
            }
        }
    }

    #[test]
    fn counters_remain_in_range() {
        let mut table = CounterTable::new(2, 0);
        for i in 0..1000usize {
            let outcome = Outcome::from_bool(i % 3 == 0);
            table.update(i, outcome);
        }
        assert!(table.dump().iter().all(|v| *v <= SaturatingCounter::MAX));
    }
}
