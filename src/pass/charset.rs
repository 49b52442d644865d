//! Character set building for password generation.

use super::config::GenerationConfig;

const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?/~`";

/// Look-alike characters dropped from letter and digit pools.
pub const SIMILAR: &[char] = &['i', 'l', 'L', 'I', '|', '1', 'o', 'O', '0'];

/// Punctuation dropped from the symbol pool.
pub const AMBIGUOUS: &[char] = &[
    '{', '}', '[', ']', '(', ')', '/', '\\', '\'', '"', '~', ',', ';', '.', '<', '>',
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CharClass {
    Lowercase,
    Uppercase,
    Digit,
    Symbol,
}

impl CharClass {
    pub const ALL: [CharClass; 4] = [
        CharClass::Lowercase,
        CharClass::Uppercase,
        CharClass::Digit,
        CharClass::Symbol,
    ];

    /// Unfiltered character set for this class.
    pub fn base(self) -> &'static str {
        match self {
            CharClass::Lowercase => LOWERCASE,
            CharClass::Uppercase => UPPERCASE,
            CharClass::Digit => DIGITS,
            CharClass::Symbol => SYMBOLS,
        }
    }

    /// Size of the unfiltered set, used for entropy estimates.
    pub fn nominal_size(self) -> usize {
        self.base().len()
    }

    /// Class of any char. Everything outside `[a-zA-Z0-9]` counts as a symbol.
    pub fn of(c: char) -> CharClass {
        if c.is_ascii_lowercase() {
            CharClass::Lowercase
        } else if c.is_ascii_uppercase() {
            CharClass::Uppercase
        } else if c.is_ascii_digit() {
            CharClass::Digit
        } else {
            CharClass::Symbol
        }
    }

    fn excluded(self, config: &GenerationConfig) -> &'static [char] {
        match self {
            CharClass::Symbol if config.exclude_ambiguous => AMBIGUOUS,
            CharClass::Symbol => &[],
            _ if config.exclude_similar => SIMILAR,
            _ => &[],
        }
    }
}

/// Filtered pool for one class. Order follows the base set.
pub fn pool(class: CharClass, config: &GenerationConfig) -> Vec<char> {
    let excluded = class.excluded(config);
    class
        .base()
        .chars()
        .filter(|c| !excluded.contains(c))
        .collect()
}

/// Filtered pools of every enabled class, in class order.
pub fn pools(config: &GenerationConfig) -> Vec<(CharClass, Vec<char>)> {
    config
        .enabled_classes()
        .map(|class| (class, pool(class, config)))
        .collect()
}

/// All enabled pools concatenated, grouped by class.
pub fn build(config: &GenerationConfig) -> Vec<char> {
    pools(config).into_iter().flat_map(|(_, chars)| chars).collect()
}

/// Nominal charset size (for entropy calculation). Ignores exclusion filters.
pub fn size(config: &GenerationConfig) -> usize {
    config.enabled_classes().map(CharClass::nominal_size).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn only(class: CharClass) -> GenerationConfig {
        GenerationConfig {
            lowercase: class == CharClass::Lowercase,
            uppercase: class == CharClass::Uppercase,
            numbers: class == CharClass::Digit,
            symbols: class == CharClass::Symbol,
            ..Default::default()
        }
    }

    #[test]
    fn base_sizes() {
        assert_eq!(CharClass::Lowercase.nominal_size(), 26);
        assert_eq!(CharClass::Uppercase.nominal_size(), 26);
        assert_eq!(CharClass::Digit.nominal_size(), 10);
        assert_eq!(CharClass::Symbol.nominal_size(), 29);
    }

    #[test]
    fn similar_filter_hits_letters_and_digits() {
        let config = GenerationConfig {
            exclude_similar: true,
            ..Default::default()
        };
        let lower = pool(CharClass::Lowercase, &config);
        let upper = pool(CharClass::Uppercase, &config);
        let digits = pool(CharClass::Digit, &config);
        assert_eq!(lower.len(), 23);
        assert_eq!(upper.len(), 23);
        assert_eq!(digits, vec!['2', '3', '4', '5', '6', '7', '8', '9']);
        assert!(!lower.contains(&'l') && !upper.contains(&'O'));
    }

    #[test]
    fn similar_filter_leaves_symbols_alone() {
        let config = GenerationConfig {
            exclude_similar: true,
            ..only(CharClass::Symbol)
        };
        assert!(pool(CharClass::Symbol, &config).contains(&'|'));
    }

    #[test]
    fn ambiguous_filter_only_touches_symbols() {
        let config = GenerationConfig {
            exclude_ambiguous: true,
            ..Default::default()
        };
        let symbols = pool(CharClass::Symbol, &config);
        assert_eq!(symbols.iter().collect::<String>(), "!@#$%^&*_+-=|:?`");
        assert_eq!(pool(CharClass::Lowercase, &config).len(), 26);
    }

    #[test]
    fn build_groups_pools_by_class() {
        let config = GenerationConfig {
            symbols: false,
            ..Default::default()
        };
        let chars = build(&config);
        assert_eq!(chars.len(), 62);
        assert_eq!(chars[0], 'a');
        assert_eq!(chars[26], 'A');
        assert_eq!(chars[52], '0');
    }

    #[test]
    fn empty_when_nothing_enabled() {
        let config = GenerationConfig {
            lowercase: false,
            uppercase: false,
            numbers: false,
            symbols: false,
            ..Default::default()
        };
        assert!(build(&config).is_empty());
        assert_eq!(size(&config), 0);
    }

    #[test]
    fn nominal_size_ignores_filters() {
        let config = GenerationConfig {
            exclude_similar: true,
            exclude_ambiguous: true,
            ..Default::default()
        };
        assert_eq!(size(&config), 91);
        assert_eq!(size(&only(CharClass::Digit)), 10);
    }

    #[test]
    fn classifies_chars() {
        assert_eq!(CharClass::of('q'), CharClass::Lowercase);
        assert_eq!(CharClass::of('Q'), CharClass::Uppercase);
        assert_eq!(CharClass::of('7'), CharClass::Digit);
        assert_eq!(CharClass::of('~'), CharClass::Symbol);
        assert_eq!(CharClass::of('é'), CharClass::Symbol);
    }
}
