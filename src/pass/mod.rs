//! Password generation and strength assessment.

pub mod charset;
pub mod config;
mod generate;
pub mod strength;

pub use config::{ConfigOption, GenerationConfig};
pub use generate::{generate, generate_batch, generate_with};
pub use strength::{Assessment, CrackTime, Strength, entropy, score};
