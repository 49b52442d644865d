//! State a front end keeps between generations.
//!
//! The core in [`crate::pass`] is stateless. Everything that outlives a single
//! call (the current batch, which entries are revealed, what was copied) lives
//! in a [`Session`] owned by the caller.

use std::collections::{BTreeSet, VecDeque};

use chrono::{DateTime, Local};
use rand::Rng;
use zeroize::Zeroizing;

use crate::pass::{self, CrackTime, GenerationConfig};

pub const HISTORY_LIMIT: usize = 50;

/// Indices revealed when a session starts.
const INITIALLY_VISIBLE: std::ops::Range<usize> = 0..10;

pub struct HistoryEntry {
    pub password: Zeroizing<String>,
    pub copied_at: DateTime<Local>,
    pub score: u8,
}

/// Copied passwords, newest first, at most [`HISTORY_LIMIT`] entries.
#[derive(Default)]
pub struct CopyHistory {
    entries: VecDeque<HistoryEntry>,
}

impl CopyHistory {
    pub fn push(&mut self, password: &str) {
        self.entries.push_front(HistoryEntry {
            password: Zeroizing::new(password.to_owned()),
            copied_at: Local::now(),
            score: pass::score(password),
        });
        self.entries.truncate(HISTORY_LIMIT);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// "No passwords copied yet" / "1 password saved" / "N passwords saved".
    pub fn summary(&self) -> String {
        match self.len() {
            0 => "No passwords copied yet".to_string(),
            1 => "1 password saved".to_string(),
            n => format!("{n} passwords saved"),
        }
    }
}

/// Stats for the first password of the batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub length: usize,
    pub entropy_bits: u32,
    pub crack_time: CrackTime,
}

impl Stats {
    /// `None` for an empty password.
    pub fn of(password: &str, config: &GenerationConfig) -> Option<Self> {
        if password.is_empty() {
            return None;
        }
        let entropy_bits = pass::entropy(password, config);
        Some(Self {
            length: config.length,
            entropy_bits,
            crack_time: CrackTime::from_entropy(entropy_bits),
        })
    }
}

pub struct Session {
    pub config: GenerationConfig,
    passwords: Vec<Zeroizing<String>>,
    visible: BTreeSet<usize>,
    copied: Option<usize>,
    history: CopyHistory,
}

impl Session {
    pub fn new(config: GenerationConfig) -> Self {
        Self {
            config,
            passwords: Vec::new(),
            visible: INITIALLY_VISIBLE.collect(),
            copied: None,
            history: CopyHistory::default(),
        }
    }

    /// Replace the batch with `config.quantity` fresh passwords.
    pub fn regenerate<R: Rng>(&mut self, rng: &mut R) {
        self.passwords = pass::generate_batch(&self.config, rng)
            .into_iter()
            .map(Zeroizing::new)
            .collect();
        self.copied = None;
    }

    pub fn passwords(&self) -> impl Iterator<Item = &str> {
        self.passwords.iter().map(|p| p.as_str())
    }

    pub fn password(&self, index: usize) -> Option<&str> {
        self.passwords.get(index).map(|p| p.as_str())
    }

    pub fn len(&self) -> usize {
        self.passwords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.passwords.is_empty()
    }

    pub fn is_visible(&self, index: usize) -> bool {
        self.visible.contains(&index)
    }

    pub fn toggle_visibility(&mut self, index: usize) {
        if !self.visible.remove(&index) {
            self.visible.insert(index);
        }
    }

    pub fn copied(&self) -> Option<usize> {
        self.copied
    }

    /// Mark `index` as copied and log it in the history. Returns the password
    /// so the caller can hand it to the clipboard. Empty passwords (no class
    /// selected) are never recorded.
    pub fn record_copy(&mut self, index: usize) -> Option<&str> {
        let password = self.passwords.get(index).filter(|p| !p.is_empty())?;
        self.history.push(password);
        self.copied = Some(index);
        Some(password.as_str())
    }

    /// Every password of the batch, one per line.
    pub fn copy_all(&self) -> Zeroizing<String> {
        Zeroizing::new(
            self.passwords
                .iter()
                .map(|p| p.as_str())
                .collect::<Vec<_>>()
                .join("\n"),
        )
    }

    pub fn history(&self) -> &CopyHistory {
        &self.history
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// `None` when the batch is empty or its first password is.
    pub fn stats(&self) -> Option<Stats> {
        Stats::of(self.passwords.first()?, &self.config)
    }
}
