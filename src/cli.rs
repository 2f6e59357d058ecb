use clap::{Parser, Subcommand};

#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Args {
    /// Path to render config TOML
    #[arg(long, default_value = "tonewheel.toml")]
    pub config: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List rotation-distinct patterns for (n, k) and render them as strips
    Necklaces {
        /// Pattern length
        #[arg(long, default_value_t = 12)]
        n: usize,
        /// Number of set bits
        #[arg(long)]
        k: usize,
    },
    /// Per-k table of combination and necklace counts
    Census {
        #[arg(long, default_value_t = 12)]
        n: usize,
    },
    /// Family-summed overlap heatmap over every (k1, k2) pair
    OverlapGrid {
        #[arg(long, default_value_t = 12)]
        n: usize,
    },
    /// Per-pattern overlap counts between the k1 and k2 families
    Overlap {
        #[arg(long, default_value_t = 12)]
        n: usize,
        #[arg(long)]
        k1: usize,
        #[arg(long)]
        k2: usize,
    },
    /// Compare the (n, k) family against a known scale
    Compare {
        #[arg(long, default_value_t = 12)]
        n: usize,
        #[arg(long, default_value_t = 7)]
        k: usize,
        /// Known scale name fragment, e.g. "ionian" or "harmonic minor"
        #[arg(long, default_value = "ionian")]
        scale: String,
    },
}
