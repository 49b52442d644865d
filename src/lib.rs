//! Password generation with guaranteed character classes, strength scoring
//! and entropy estimates.
//!
//! [`pass`] is the pure core. [`session`] is the state a front end keeps
//! between generations, and [`source`] picks the random source.

pub mod pass;
pub mod source;
pub mod session;

pub use pass::{Assessment, GenerationConfig, generate, generate_with, score};
