//! Strength scoring, entropy and crack-time estimates.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use super::charset::{self, CharClass};
use super::config::GenerationConfig;

pub const MAX_SCORE: u8 = 9;

/// Additive score, one point per criterion met, capped at [`MAX_SCORE`].
pub fn score(password: &str) -> u8 {
    if password.is_empty() {
        return 0;
    }

    let len = password.chars().count();
    let has = |class: CharClass| password.chars().any(|c| CharClass::of(c) == class);
    let distinct = password.chars().collect::<HashSet<_>>().len();

    let criteria = [
        len >= 8,
        len >= 12,
        len >= 16,
        len >= 24,
        has(CharClass::Lowercase),
        has(CharClass::Uppercase),
        has(CharClass::Digit),
        has(CharClass::Symbol),
        distinct as f64 >= len as f64 * 0.7,
    ];

    let points = criteria.iter().filter(|&&met| met).count() as u8;
    points.min(MAX_SCORE)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Strength {
    #[serde(rename = "Very Weak")]
    VeryWeak,
    Weak,
    Fair,
    Strong,
    #[serde(rename = "Very Strong")]
    VeryStrong,
}

impl Strength {
    pub fn classify(score: u8) -> Self {
        match score {
            0..=2 => Strength::VeryWeak,
            3..=4 => Strength::Weak,
            5..=6 => Strength::Fair,
            7..=8 => Strength::Strong,
            _ => Strength::VeryStrong,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Strength::VeryWeak => "Very Weak",
            Strength::Weak => "Weak",
            Strength::Fair => "Fair",
            Strength::Strong => "Strong",
            Strength::VeryStrong => "Very Strong",
        }
    }

    /// Lit segments of a five-segment meter for `score`.
    pub fn meter(score: u8) -> usize {
        usize::from(score.div_ceil(2)).min(5)
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Estimated entropy in whole bits: `round(len * log2(pool))`.
///
/// The pool is the nominal size of the classes enabled in `config`, not the
/// filtered pool the generator actually drew from.
pub fn entropy(password: &str, config: &GenerationConfig) -> u32 {
    let pool = charset::size(config);
    if pool == 0 {
        return 0;
    }
    let bits = password.chars().count() as f64 * (pool as f64).log2();
    bits.round() as u32
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum CrackTime {
    Instantly,
    Seconds,
    Minutes,
    Hours,
    Days,
    Years,
    Millennia,
    #[serde(rename = "Millions of years")]
    MillionsOfYears,
    Eternity,
}

impl CrackTime {
    pub fn from_entropy(bits: u32) -> Self {
        match bits {
            0..30 => CrackTime::Instantly,
            30..40 => CrackTime::Seconds,
            40..50 => CrackTime::Minutes,
            50..60 => CrackTime::Hours,
            60..70 => CrackTime::Days,
            70..80 => CrackTime::Years,
            80..100 => CrackTime::Millennia,
            100..128 => CrackTime::MillionsOfYears,
            _ => CrackTime::Eternity,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CrackTime::Instantly => "Instantly",
            CrackTime::Seconds => "Seconds",
            CrackTime::Minutes => "Minutes",
            CrackTime::Hours => "Hours",
            CrackTime::Days => "Days",
            CrackTime::Years => "Years",
            CrackTime::Millennia => "Millennia",
            CrackTime::MillionsOfYears => "Millions of years",
            CrackTime::Eternity => "Eternity",
        }
    }
}

impl fmt::Display for CrackTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Everything the analyzer says about one password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    pub score: u8,
    pub strength: Strength,
    pub entropy_bits: u32,
    pub crack_time: CrackTime,
}

impl Assessment {
    pub fn of(password: &str, config: &GenerationConfig) -> Self {
        let score = score(password);
        let entropy_bits = entropy(password, config);
        Self {
            score,
            strength: Strength::classify(score),
            entropy_bits,
            crack_time: CrackTime::from_entropy(entropy_bits),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lowercase_only() -> GenerationConfig {
        GenerationConfig {
            uppercase: false,
            numbers: false,
            symbols: false,
            ..Default::default()
        }
    }

    #[test]
    fn empty_scores_zero() {
        assert_eq!(score(""), 0);
    }

    #[test]
    fn counts_each_criterion() {
        // length < 8, lowercase, all distinct
        assert_eq!(score("abc"), 2);
        // length >= 8, lowercase, 1/8 distinct
        assert_eq!(score("aaaaaaaa"), 2);
        // every length tier, every class, all distinct
        assert_eq!(score("abcdefghijklmnopqrstuvwxyzABCD0!"), 9);
        assert_eq!(score("Ab1!"), 5);
    }

    #[test]
    fn distinct_ratio_is_inclusive() {
        // 7 distinct of 10 is exactly 0.7
        assert_eq!(score("abcdefgaaa"), 3);
        assert_eq!(score("abcdefaaaa"), 2);
    }

    #[test]
    fn non_ascii_counts_as_symbol() {
        assert_eq!(score("é"), 2);
    }

    #[test]
    fn classify_boundaries() {
        assert_eq!(Strength::classify(0).label(), "Very Weak");
        assert_eq!(Strength::classify(2).label(), "Very Weak");
        assert_eq!(Strength::classify(3).label(), "Weak");
        assert_eq!(Strength::classify(4).label(), "Weak");
        assert_eq!(Strength::classify(5).label(), "Fair");
        assert_eq!(Strength::classify(6).label(), "Fair");
        assert_eq!(Strength::classify(7).label(), "Strong");
        assert_eq!(Strength::classify(8).label(), "Strong");
        assert_eq!(Strength::classify(9).label(), "Very Strong");
    }

    #[test]
    fn meter_rounds_up() {
        assert_eq!(Strength::meter(0), 0);
        assert_eq!(Strength::meter(1), 1);
        assert_eq!(Strength::meter(4), 2);
        assert_eq!(Strength::meter(9), 5);
    }

    #[test]
    fn entropy_of_eight_lowercase() {
        assert_eq!(entropy("aaaaaaaa", &lowercase_only()), 38);
    }

    #[test]
    fn entropy_uses_nominal_pool() {
        let filtered = GenerationConfig {
            exclude_similar: true,
            exclude_ambiguous: true,
            ..Default::default()
        };
        // 20 * log2(91) = 130.15
        assert_eq!(entropy(&"x".repeat(20), &filtered), 130);
        assert_eq!(
            entropy(&"x".repeat(20), &filtered),
            entropy(&"x".repeat(20), &GenerationConfig::default())
        );
    }

    #[test]
    fn entropy_zero_without_classes() {
        let config = GenerationConfig {
            lowercase: false,
            ..lowercase_only()
        };
        assert_eq!(entropy("whatever", &config), 0);
        assert_eq!(entropy("", &GenerationConfig::default()), 0);
    }

    #[test]
    fn crack_time_breakpoints() {
        assert_eq!(CrackTime::from_entropy(0), CrackTime::Instantly);
        assert_eq!(CrackTime::from_entropy(29).label(), "Instantly");
        assert_eq!(CrackTime::from_entropy(30).label(), "Seconds");
        assert_eq!(CrackTime::from_entropy(49), CrackTime::Minutes);
        assert_eq!(CrackTime::from_entropy(50), CrackTime::Hours);
        assert_eq!(CrackTime::from_entropy(69), CrackTime::Days);
        assert_eq!(CrackTime::from_entropy(79), CrackTime::Years);
        assert_eq!(CrackTime::from_entropy(99), CrackTime::Millennia);
        assert_eq!(CrackTime::from_entropy(127).label(), "Millions of years");
        assert_eq!(CrackTime::from_entropy(128).label(), "Eternity");
        assert_eq!(CrackTime::from_entropy(u32::MAX), CrackTime::Eternity);
    }

    #[test]
    fn crack_time_is_monotonic() {
        let buckets: Vec<_> = (0..200).map(CrackTime::from_entropy).collect();
        assert!(buckets.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn assessment_bundles_everything() {
        let assessment = Assessment::of("aaaaaaaa", &lowercase_only());
        assert_eq!(assessment.score, 2);
        assert_eq!(assessment.strength, Strength::VeryWeak);
        assert_eq!(assessment.entropy_bits, 38);
        assert_eq!(assessment.crack_time, CrackTime::Seconds);

        let json = serde_json::to_value(assessment).unwrap();
        assert_eq!(json["strength"], "Very Weak");
        assert_eq!(json["crackTime"], "Seconds");
        assert_eq!(json["entropyBits"], 38);
    }
}
