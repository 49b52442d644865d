use std::path::PathBuf;

use clap::{ArgAction, Parser};

use passforge::pass::config::{MAX_LENGTH, MAX_QUANTITY, MIN_LENGTH, MIN_QUANTITY};

/// Generate passwords that contain every selected character type.
///
/// Run without arguments for the interactive menu.
#[derive(Debug, Default, Parser)]
#[command(name = "passforge", version, about, long_about = None)]
pub struct CliFlags {
    /// Characters per password (4-128, default 20)
    #[arg(short, long, value_name = "N", env = "PASSFORGE_LENGTH", value_parser = parse_length)]
    pub length: Option<usize>,

    /// How many passwords to generate (1-50, default 1)
    #[arg(short, long, value_name = "N", env = "PASSFORGE_NUMBER", value_parser = parse_quantity)]
    pub number: Option<usize>,

    /// Leave out lowercase letters
    #[arg(long)]
    pub no_lower: bool,

    /// Leave out uppercase letters
    #[arg(long)]
    pub no_upper: bool,

    /// Leave out digits
    #[arg(long)]
    pub no_numbers: bool,

    /// Leave out symbols
    #[arg(long)]
    pub no_symbols: bool,

    /// Drop look-alikes: i l L I | 1 o O 0
    #[arg(long)]
    pub exclude_similar: bool,

    /// Drop ambiguous symbols: { } [ ] ( ) / \ ' " ~ , ; . < >
    #[arg(long)]
    pub exclude_ambiguous: bool,

    /// Append strength label and score to each password
    #[arg(short, long)]
    pub strength: bool,

    /// Emit a JSON array of passwords with their assessments
    #[arg(long, conflicts_with = "strength")]
    pub json: bool,

    /// Score passwords read from stdin (one per line) instead of generating
    #[arg(short, long, conflicts_with_all = ["board", "output"])]
    pub analyze: bool,

    /// Copy to clipboard instead of printing
    #[arg(short, long, conflicts_with = "output")]
    pub board: bool,

    /// Write to FILE (a directory gets passforge.txt)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Seed for reproducible output. Never use seeded passwords as secrets.
    #[arg(long, value_name = "N", env = "PASSFORGE_SEED")]
    pub seed: Option<u64>,

    /// Suppress everything except passwords
    #[arg(short, long)]
    pub quiet: bool,

    /// More diagnostics on stderr (repeat for more)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

fn parse_bounded(s: &str, min: usize, max: usize) -> Result<usize, String> {
    let n: usize = s.trim().parse().map_err(|_| format!("invalid number: {s}"))?;
    if (min..=max).contains(&n) {
        Ok(n)
    } else {
        Err(format!("must be between {min} and {max}"))
    }
}

fn parse_length(s: &str) -> Result<usize, String> {
    parse_bounded(s, MIN_LENGTH, MAX_LENGTH)
}

fn parse_quantity(s: &str) -> Result<usize, String> {
    parse_bounded(s, MIN_QUANTITY, MAX_QUANTITY)
}
