//! Run settings: generation options plus where the results go.
//!
//! Built from defaults, then env vars and flags (clap merges those two).
//! Nothing is persisted between runs.

use std::path::{Path, PathBuf};

use passforge::pass::GenerationConfig;
use passforge::source::Source;

use crate::cli::CliFlags;

const DEFAULT_FILE_NAME: &str = "passforge.txt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Terminal,
    File(PathBuf),
    Clipboard,
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub generation: GenerationConfig,
    pub source: Source,
    pub destination: Destination,
    pub show_strength: bool,
    pub json: bool,
}

impl Settings {
    pub fn from_flags(flags: &CliFlags) -> Self {
        let defaults = GenerationConfig::default();
        let generation = GenerationConfig {
            length: flags.length.unwrap_or(defaults.length),
            // CLI default, not the interactive default (3)
            quantity: flags.number.unwrap_or(1),
            lowercase: !flags.no_lower,
            uppercase: !flags.no_upper,
            numbers: !flags.no_numbers,
            symbols: !flags.no_symbols,
            exclude_similar: flags.exclude_similar,
            exclude_ambiguous: flags.exclude_ambiguous,
        };

        let destination = match (&flags.output, flags.board) {
            (Some(path), _) => Destination::File(output_path(path)),
            (None, true) => Destination::Clipboard,
            (None, false) => Destination::Terminal,
        };

        Self {
            generation,
            source: Source::from_seed(flags.seed),
            destination,
            show_strength: flags.strength,
            json: flags.json,
        }
    }
}

/// Directories (or a trailing `/` / `.`) get the default file name.
fn output_path(path: &Path) -> PathBuf {
    let raw = path.to_string_lossy();
    if raw == "." || raw.ends_with('/') || path.is_dir() {
        path.join(DEFAULT_FILE_NAME)
    } else {
        path.to_path_buf()
    }
}
