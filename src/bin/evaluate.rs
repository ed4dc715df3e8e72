//! Evaluate a branch direction prediction scheme against a trace file and
//! print the run report.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use itertools::Itertools;
use log::info;

use axon::{
    read_trace, BtbConfig, Report, SchemeConfig, SimConfig, Simulator,
};

#[derive(Parser)]
#[command(about = "Replay a branch trace through a direction predictor")]
struct Args {
    #[command(subcommand)]
    scheme: SchemeArgs,
}

#[derive(Subcommand)]
enum SchemeArgs {
    /// Bimodal predictor.
    Bimodal {
        /// Table index width in bits
        index_bits: u32,
        /// BTB size in address units (0 disables the BTB)
        btb_size: usize,
        /// BTB associativity (0 disables the BTB)
        btb_assoc: usize,
        /// Trace file: one `HEXADDR t|n` event per line
        trace: PathBuf,
    },
    /// Gshare predictor.
    Gshare {
        /// Table index width in bits
        index_bits: u32,
        /// Global history width in bits
        history_bits: u32,
        /// BTB size in address units (0 disables the BTB)
        btb_size: usize,
        /// BTB associativity (0 disables the BTB)
        btb_assoc: usize,
        /// Trace file: one `HEXADDR t|n` event per line
        trace: PathBuf,
    },
    /// Hybrid predictor (chooser-selected gshare/bimodal).
    Hybrid {
        /// Chooser table index width in bits
        chooser_bits: u32,
        /// Gshare table index width in bits
        gshare_bits: u32,
        /// Global history width in bits
        history_bits: u32,
        /// Bimodal table index width in bits
        bimodal_bits: u32,
        /// BTB size in address units (0 disables the BTB)
        btb_size: usize,
        /// BTB associativity (0 disables the BTB)
        btb_assoc: usize,
        /// Trace file: one `HEXADDR t|n` event per line
        trace: PathBuf,
    },
}

impl SchemeArgs {
    /// Split into the simulator configuration and the trace path. A BTB
    /// size or associativity of zero disables the cache.
    fn into_config(self) -> (SimConfig, PathBuf) {
        let btb = |size: usize, assoc: usize| {
            (size > 0 && assoc > 0).then_some(BtbConfig { size, assoc })
        };
        match self {
            Self::Bimodal { index_bits, btb_size, btb_assoc, trace } => (
                SimConfig::new(
                    SchemeConfig::Bimodal { index_bits },
                    btb(btb_size, btb_assoc),
                ),
                trace,
            ),
            Self::Gshare { index_bits, history_bits, btb_size, btb_assoc, trace } => (
                SimConfig::new(
                    SchemeConfig::Gshare { index_bits, history_bits },
                    btb(btb_size, btb_assoc),
                ),
                trace,
            ),
            Self::Hybrid {
                chooser_bits,
                gshare_bits,
                history_bits,
                bimodal_bits,
                btb_size,
                btb_assoc,
                trace,
            } => (
                SimConfig::new(
                    SchemeConfig::Hybrid {
                        chooser_bits,
                        gshare_bits,
                        bimodal_bits,
                        history_bits,
                    },
                    btb(btb_size, btb_assoc),
                ),
                trace,
            ),
        }
    }
}

fn print_report(report: &Report) {
    let stats = &report.stats;
    if let Some(btb) = &report.config.btb {
        println!("size of BTB:  {}", btb.size);
        println!("number of branches: {}", stats.branches);
        println!(
            "number of predictions from branch predictor:   {}",
            stats.predictions
        );
        println!(
            "number of mispredictions from branch predictor: {}",
            stats.mispredictions
        );
        println!(
            "number of branches miss in BTB and taken: {}",
            stats.btb_miss_taken
        );
        println!("total mispredictions: {}", stats.total_mispredictions());
        println!(
            "misprediction rate: {:.2}%",
            stats.misprediction_rate() * 100.0
        );
        println!();
        println!("FINAL BTB CONTENTS");
        if let Some(sets) = &report.btb_sets {
            for (i, set) in sets.iter().enumerate() {
                let tags = set
                    .iter()
                    .map(|slot| match slot {
                        Some(tag) => format!("{:X}", tag),
                        None => "-".to_string(),
                    })
                    .format("   ");
                println!("set    {}:      {}", i, tags);
            }
        }
        println!();
    } else {
        println!("number of predictions: {}", stats.branches);
        println!("number of mispredictions: {}", stats.total_mispredictions());
        println!(
            "misprediction rate: {:.2}%",
            stats.misprediction_rate() * 100.0
        );
    }

    for table in &report.tables {
        println!("FINAL {} CONTENTS", table.name.to_uppercase());
        for (i, value) in table.counters.iter().enumerate() {
            println!("{}        {}", i, value);
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let (config, trace_path) = args.scheme.into_config();

    let events = read_trace(&trace_path)
        .with_context(|| format!("reading trace {}", trace_path.display()))?;
    info!("loaded {} events from {}", events.len(), trace_path.display());

    let mut sim = Simulator::new(config).context("invalid configuration")?;
    for event in events {
        sim.ingest(event);
    }

    print_report(&sim.report());
    Ok(())
}
