//! A set-associative branch target cache with counter-based LRU replacement.
//!
//! Recency is tracked with per-entry age counters (0 = most recent) instead
//! of a recency list: a hit increments every valid entry that was more
//! recently used than the hit entry, and an eviction increments every other
//! valid entry in the set. Eviction picks the first entry found holding the
//! maximum age.

use crate::predictor::index::ADDR_MASK;

/// Addresses are split on 4-unit blocks.
const BLOCK_BITS: u32 = 2;

/// One cached branch address.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BtbEntry {
    pub tag: u32,
    pub valid: bool,
    pub age: u32,
}

/// The branch target cache.
#[derive(Clone, Debug)]
pub struct TargetCache {
    sets: Vec<Vec<BtbEntry>>,
    assoc: usize,
    set_bits: u32,
    size: usize,
}

impl TargetCache {
    /// Build a cache of `size / (4 * assoc)` sets. The set count must be a
    /// nonzero power of two; [`crate::config::BtbConfig`] enforces this
    /// before construction.
    pub fn new(size: usize, assoc: usize) -> Self {
        let num_sets = size / (4 * assoc);
        debug_assert!(num_sets.is_power_of_two());
        Self {
            sets: vec![vec![BtbEntry::default(); assoc]; num_sets],
            assoc,
            set_bits: num_sets.trailing_zeros(),
            size,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn assoc(&self) -> usize {
        self.assoc
    }

    pub fn num_sets(&self) -> usize {
        self.sets.len()
    }

    /// Split an address into its tag and set index. The set index is drawn
    /// from the low 32 bits; the tag keeps 32 bits of the remainder.
    fn split(&self, addr: u64) -> (u32, usize) {
        let tag = (addr >> (self.set_bits + BLOCK_BITS)) as u32;
        let set = (((addr & ADDR_MASK) >> BLOCK_BITS) as usize) & (self.num_sets() - 1);
        (tag, set)
    }

    /// Look up `addr` and update recency state. On a miss the new tag is
    /// installed (into an invalid slot, or over the oldest entry). Returns
    /// whether the lookup hit.
    pub fn access(&mut self, addr: u64) -> bool {
        let (tag, set) = self.split(addr);
        let hit = self.sets[set]
            .iter()
            .position(|e| e.valid && e.tag == tag);
        match hit {
            Some(slot) => {
                self.touch(set, slot);
                true
            }
            None => {
                self.replace(set, tag);
                false
            }
        }
    }

    /// Age update on a hit: the hit entry becomes age 0, and every other
    /// valid entry that was more recent than it ages by one.
    fn touch(&mut self, set: usize, slot: usize) {
        let entries = &mut self.sets[set];
        let prior = entries[slot].age;
        entries[slot].age = 0;
        for (i, e) in entries.iter_mut().enumerate() {
            if i != slot && e.valid && e.age < prior {
                e.age += 1;
            }
        }
    }

    /// Install `tag` on a miss: into the first invalid slot if one exists,
    /// otherwise over the first entry holding the maximum age. Every other
    /// valid entry then ages by one.
    fn replace(&mut self, set: usize, tag: u32) {
        let entries = &mut self.sets[set];
        let victim = match entries.iter().position(|e| !e.valid) {
            Some(slot) => slot,
            None => {
                let mut oldest = 0;
                for (i, e) in entries.iter().enumerate().skip(1) {
                    if e.age > entries[oldest].age {
                        oldest = i;
                    }
                }
                oldest
            }
        };
        entries[victim] = BtbEntry { tag, valid: true, age: 0 };
        for (i, e) in entries.iter_mut().enumerate() {
            if i != victim && e.valid {
                e.age += 1;
            }
        }
    }

    /// Per-set entry tags in slot order; `None` marks an invalid slot.
    pub fn dump(&self) -> Vec<Vec<Option<u32>>> {
        self.sets
            .iter()
            .map(|set| {
                set.iter()
                    .map(|e| if e.valid { Some(e.tag) } else { None })
                    .collect()
            })
            .collect()
    }

    #[cfg(test)]
    fn entries(&self, set: usize) -> &[BtbEntry] {
        &self.sets[set]
    }
}
