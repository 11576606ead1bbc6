//! Command line.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::Level;

use crate::color::NamedColor;
use crate::games::dodge::Variant;

#[derive(Parser, Debug)]
#[command(name = "fb-arcade")]
#[command(version, about = "Pixel arcade on a 320x240 RGB565 surface, shown in the terminal", long_about = None)]
pub struct Cli {
    /// Write logs to this file (nothing is logged without it)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Most verbose level written to the log file
    #[arg(long, global = true, default_value_t = Level::INFO)]
    pub log_level: Level,

    /// Seed the game RNG for a reproducible run
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Dodge the pipes (KEY1 jumps; KEY2 jumps for the second player in duel)
    Flappy {
        #[arg(long, value_enum, default_value_t = Variant::Scored)]
        variant: Variant,
    },

    /// Grid snake (KEY1 turns left, KEY2 turns right, either starts)
    Snake,

    /// A hex digit walking across six slots (switches pick it, KEY1 reverses)
    Ticker,

    /// Draws the rasterizer demo sequence
    Showcase {
        /// Background of the first step
        #[arg(long, value_enum, ignore_case = true, default_value_t = NamedColor::Gray)]
        color: NamedColor,
    },
}
