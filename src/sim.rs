//! The top-level simulator: one prediction scheme, an optional target
//! cache, and the run statistics, owned together for the lifetime of a run.

use log::debug;

use crate::branch::{BranchEvent, Outcome};
use crate::config::{ConfigError, SchemeConfig, SimConfig};
use crate::stats::SimStats;
use crate::predictor::bimodal::BimodalPredictor;
use crate::predictor::btb::TargetCache;
use crate::predictor::gshare::GsharePredictor;
use crate::predictor::hybrid::HybridPredictor;

/// The active prediction scheme, carrying only the state its variant needs.
#[derive(Clone, Debug)]
enum Scheme {
    Bimodal(BimodalPredictor),
    Gshare(GsharePredictor),
    Hybrid(HybridPredictor),
}

impl Scheme {
    fn build(cfg: &SchemeConfig) -> Self {
        match *cfg {
            SchemeConfig::Bimodal { index_bits } => {
                Self::Bimodal(BimodalPredictor::new(index_bits))
            }
            SchemeConfig::Gshare { index_bits, history_bits } => {
                Self::Gshare(GsharePredictor::new(index_bits, history_bits))
            }
            SchemeConfig::Hybrid {
                chooser_bits,
                gshare_bits,
                bimodal_bits,
                history_bits,
            } => Self::Hybrid(HybridPredictor::new(
                chooser_bits,
                gshare_bits,
                bimodal_bits,
                history_bits,
            )),
        }
    }

    fn process(&mut self, pc: u64, outcome: Outcome) -> Outcome {
        match self {
            Self::Bimodal(p) => p.process(pc, outcome),
            Self::Gshare(p) => p.process(pc, outcome),
            Self::Hybrid(p) => p.process(pc, outcome),
        }
    }

    fn dump_tables(&self) -> Vec<TableDump> {
        match self {
            Self::Bimodal(p) => {
                vec![TableDump::new("bimodal", p.table().dump())]
            }
            Self::Gshare(p) => {
                vec![TableDump::new("gshare", p.table().dump())]
            }
            Self::Hybrid(p) => vec![
                TableDump::new("chooser", p.chooser().dump()),
                TableDump::new("gshare", p.gshare().dump()),
                TableDump::new("bimodal", p.bimodal().dump()),
            ],
        }
    }
}

/// A named counter-table snapshot, in index order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableDump {
    pub name: &'static str,
    pub counters: Vec<u8>,
}

impl TableDump {
    pub fn new(name: &'static str, counters: Vec<u8>) -> Self {
        Self { name, counters }
    }
}

/// Final state of a run, sufficient to render the textual report.
#[derive(Clone, Debug)]
pub struct Report {
    pub config: SimConfig,
    pub stats: SimStats,
    /// Active counter tables: `[bimodal]`, `[gshare]`, or
    /// `[chooser, gshare, bimodal]` for the hybrid scheme.
    pub tables: Vec<TableDump>,
    /// Per-set entry tags when the cache is enabled; `None` marks an
    /// invalid slot.
    pub btb_sets: Option<Vec<Vec<Option<u32>>>>,
}

/// Replays branch events through a direction predictor and an optional
/// branch target cache.
#[derive(Clone, Debug)]
pub struct Simulator {
    config: SimConfig,
    scheme: Scheme,
    btb: Option<TargetCache>,
    stats: SimStats,
}

impl Simulator {
    /// Validate `config` and build the simulator state.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let scheme = Scheme::build(&config.scheme);
        let btb = config.btb.map(|b| TargetCache::new(b.size, b.assoc));
        debug!("built simulator: {:?}", config);
        Ok(Self {
            config,
            scheme,
            btb,
            stats: SimStats::new(),
        })
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn stats(&self) -> &SimStats {
        &self.stats
    }

    /// Feed one resolved branch into the simulator.
    ///
    /// With a cache configured, only events that hit it reach the direction
    /// predictor; a miss records a miss-while-taken misprediction (when the
    /// branch was taken), performs replacement, and leaves every prediction
    /// table and the history register untouched.
    pub fn ingest(&mut self, event: BranchEvent) {
        self.stats.branches += 1;

        if let Some(btb) = &mut self.btb {
            if !btb.access(event.pc) {
                if event.outcome == Outcome::T {
                    self.stats.btb_miss_taken += 1;
                }
                return;
            }
        }

        self.stats.predictions += 1;
        let prediction = self.scheme.process(event.pc, event.outcome);
        if prediction != event.outcome {
            self.stats.mispredictions += 1;
        }
    }

    /// Snapshot the run: statistics plus ordered table and cache contents.
    pub fn report(&self) -> Report {
        Report {
            config: self.config,
            stats: self.stats,
            tables: self.scheme.dump_tables(),
            btb_sets: self.btb.as_ref().map(TargetCache::dump),
        }
    }
}
