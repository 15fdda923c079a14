//! Command line input handling

use std::path::PathBuf;

use crate::algorithms::SortVariant;

/// Command line arguments
#[derive(clap::Parser)]
#[command(author, version, about, disable_help_subcommand = true)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(clap::Subcommand)]
pub enum Command {
    /// Generate the benchmark input files
    Generate {
        /// The directory to write the corpus into
        #[arg(long, default_value = "data")]
        dir: PathBuf,
        /// Seed for the rng
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Run an experiment suite and export its results
    Run {
        /// The suite to run
        #[arg()]
        suite: Suite,
        /// The directory to load datasets from
        #[arg(long, default_value = "data")]
        dir: PathBuf,
        /// The directory to write CSV exports into
        #[arg(long, default_value = "results")]
        out: PathBuf,
        /// Seed for the rng
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// Available experiment suites
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Suite {
    /// Quicksort under every pivot strategy
    QuicksortPivots,
    /// Shellsort under every gap sequence
    ShellsortGaps,
    /// The full sorting algorithm comparison
    Sorts,
    /// Insert/search/delete timings for the basic structures
    Structures,
}

impl Suite {
    /// The labelled sort variants this suite times over the corpus, or
    /// `None` for the structures suite, which runs over generated data
    pub fn sort_variants(self) -> Option<Vec<(String, SortVariant)>> {
        match self {
            Suite::QuicksortPivots => Some(SortVariant::pivot_suite()),
            Suite::ShellsortGaps => Some(SortVariant::gap_suite()),
            Suite::Sorts => Some(SortVariant::sort_suite()),
            Suite::Structures => None,
        }
    }
}

impl std::fmt::Display for Suite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(clap::ValueEnum::to_possible_value(self).unwrap().get_name())
    }
}
