//! Simulator configuration and construction-time validation.

use thiserror::Error;

/// The widest usable table index: the word-aligned address keeps 30 bits
/// inside the 32-bit truncation.
pub const MAX_INDEX_BITS: u32 = 30;

/// Block size of the target cache, in address units.
pub const BTB_BLOCK_SIZE: usize = 4;

/// Errors rejected when building a [`crate::sim::Simulator`].
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("table index width must be between 1 and {MAX_INDEX_BITS} bits, got {0}")]
    InvalidIndexWidth(u32),

    #[error("history width {history} exceeds the table index width {index}")]
    HistoryTooWide { history: u32, index: u32 },

    #[error("BTB associativity must be positive when a BTB is configured")]
    ZeroAssociativity,

    #[error("BTB size {size} is not divisible by block size * associativity ({divisor})")]
    UnalignedBtbSize { size: usize, divisor: usize },

    #[error("BTB set count {0} is not a nonzero power of two")]
    BadSetCount(usize),
}

/// Selects a prediction scheme and carries its table parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SchemeConfig {
    Bimodal {
        index_bits: u32,
    },
    Gshare {
        index_bits: u32,
        history_bits: u32,
    },
    Hybrid {
        chooser_bits: u32,
        gshare_bits: u32,
        bimodal_bits: u32,
        history_bits: u32,
    },
}

impl SchemeConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        match *self {
            Self::Bimodal { index_bits } => {
                check_width(index_bits)?;
            }
            Self::Gshare { index_bits, history_bits } => {
                check_width(index_bits)?;
                check_history(history_bits, index_bits)?;
            }
            Self::Hybrid { chooser_bits, gshare_bits, bimodal_bits, history_bits } => {
                check_width(chooser_bits)?;
                check_width(gshare_bits)?;
                check_width(bimodal_bits)?;
                check_history(history_bits, gshare_bits)?;
            }
        }
        Ok(())
    }
}

fn check_width(bits: u32) -> Result<(), ConfigError> {
    if bits == 0 || bits > MAX_INDEX_BITS {
        return Err(ConfigError::InvalidIndexWidth(bits));
    }
    Ok(())
}

fn check_history(history: u32, index: u32) -> Result<(), ConfigError> {
    if history > index {
        return Err(ConfigError::HistoryTooWide { history, index });
    }
    Ok(())
}

/// Parameters of an enabled target cache.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BtbConfig {
    /// Total cache size in address units.
    pub size: usize,
    /// Entries per set.
    pub assoc: usize,
}

impl BtbConfig {
    pub fn num_sets(&self) -> usize {
        self.size / (BTB_BLOCK_SIZE * self.assoc)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.assoc == 0 {
            return Err(ConfigError::ZeroAssociativity);
        }
        let divisor = BTB_BLOCK_SIZE * self.assoc;
        if self.size % divisor != 0 {
            return Err(ConfigError::UnalignedBtbSize { size: self.size, divisor });
        }
        let sets = self.num_sets();
        if !sets.is_power_of_two() {
            return Err(ConfigError::BadSetCount(sets));
        }
        Ok(())
    }
}

/// Full configuration of one simulation run. Immutable after construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SimConfig {
    pub scheme: SchemeConfig,
    /// `None` disables the target cache entirely.
    pub btb: Option<BtbConfig>,
}

impl SimConfig {
    pub fn new(scheme: SchemeConfig, btb: Option<BtbConfig>) -> Self {
        Self { scheme, btb }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.scheme.validate()?;
        if let Some(btb) = &self.btb {
            btb.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn accepts_a_plain_bimodal_config() {
        let cfg = SimConfig::new(SchemeConfig::Bimodal { index_bits: 12 }, None);
        assert_eq!(cfg.validate(), Ok(()));
    }

    #[test]
    fn rejects_zero_index_width() {
        let cfg = SimConfig::new(SchemeConfig::Bimodal { index_bits: 0 }, None);
        assert_eq!(cfg.validate(), Err(ConfigError::InvalidIndexWidth(0)));
    }

    #[test]
    fn rejects_oversized_history() {
        let cfg = SimConfig::new(
            SchemeConfig::Gshare { index_bits: 8, history_bits: 9 },
            None,
        );
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::HistoryTooWide { history: 9, index: 8 })
        );
    }

    #[test]
    fn hybrid_history_is_bounded_by_the_gshare_width() {
        let cfg = SimConfig::new(
            SchemeConfig::Hybrid {
                chooser_bits: 6,
                gshare_bits: 10,
                bimodal_bits: 8,
                history_bits: 10,
            },
            None,
        );
        assert_eq!(cfg.validate(), Ok(()));
    }

    #[test]
    fn rejects_unaligned_btb_size() {
        let cfg = SimConfig::new(
            SchemeConfig::Bimodal { index_bits: 4 },
            Some(BtbConfig { size: 100, assoc: 2 }),
        );
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::UnalignedBtbSize { size: 100, divisor: 8 })
        );
    }

    #[test]
    fn rejects_zero_associativity() {
        let cfg = SimConfig::new(
            SchemeConfig::Bimodal { index_bits: 4 },
            Some(BtbConfig { size: 64, assoc: 0 }),
        );
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroAssociativity));
    }

    #[test]
    fn rejects_non_power_of_two_sets() {
        // 96 / (4 * 2) = 12 sets.
        let cfg = SimConfig::new(
            SchemeConfig::Bimodal { index_bits: 4 },
            Some(BtbConfig { size: 96, assoc: 2 }),
        );
        assert_eq!(cfg.validate(), Err(ConfigError::BadSetCount(12)));
    }
}
