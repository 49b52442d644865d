//! Generation options.

use serde::{Deserialize, Serialize};

use super::charset::CharClass;

pub const MIN_LENGTH: usize = 4;
pub const MAX_LENGTH: usize = 128;
pub const MIN_QUANTITY: usize = 1;
pub const MAX_QUANTITY: usize = 50;

/// Options for one generation call.
///
/// The generator accepts any value here, including a zero-class config or a
/// length outside `MIN_LENGTH..=MAX_LENGTH`. Range checks only happen in the
/// setters, which is where user input comes in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub length: usize,
    pub lowercase: bool,
    pub uppercase: bool,
    pub numbers: bool,
    pub symbols: bool,
    pub exclude_similar: bool,
    pub exclude_ambiguous: bool,
    pub quantity: usize,
}

/// A boolean option that can be flipped from a menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigOption {
    Lowercase,
    Uppercase,
    Numbers,
    Symbols,
    ExcludeSimilar,
    ExcludeAmbiguous,
}

impl GenerationConfig {
    /// Whether `class` contributes to the pool.
    pub fn uses(&self, class: CharClass) -> bool {
        match class {
            CharClass::Lowercase => self.lowercase,
            CharClass::Uppercase => self.uppercase,
            CharClass::Digit => self.numbers,
            CharClass::Symbol => self.symbols,
        }
    }

    /// Enabled classes in fixed order: lowercase, uppercase, digit, symbol.
    pub fn enabled_classes(&self) -> impl Iterator<Item = CharClass> + '_ {
        CharClass::ALL.into_iter().filter(|&c| self.uses(c))
    }

    pub fn has_any_class(&self) -> bool {
        self.enabled_classes().next().is_some()
    }

    /// Set the length if it is within range. Returns false and leaves the
    /// config untouched otherwise.
    pub fn set_length(&mut self, length: usize) -> bool {
        if (MIN_LENGTH..=MAX_LENGTH).contains(&length) {
            self.length = length;
            true
        } else {
            false
        }
    }

    pub fn set_quantity(&mut self, quantity: usize) -> bool {
        if (MIN_QUANTITY..=MAX_QUANTITY).contains(&quantity) {
            self.quantity = quantity;
            true
        } else {
            false
        }
    }

    pub fn get(&self, option: ConfigOption) -> bool {
        match option {
            ConfigOption::Lowercase => self.lowercase,
            ConfigOption::Uppercase => self.uppercase,
            ConfigOption::Numbers => self.numbers,
            ConfigOption::Symbols => self.symbols,
            ConfigOption::ExcludeSimilar => self.exclude_similar,
            ConfigOption::ExcludeAmbiguous => self.exclude_ambiguous,
        }
    }

    pub fn toggle(&mut self, option: ConfigOption) {
        let flag = match option {
            ConfigOption::Lowercase => &mut self.lowercase,
            ConfigOption::Uppercase => &mut self.uppercase,
            ConfigOption::Numbers => &mut self.numbers,
            ConfigOption::Symbols => &mut self.symbols,
            ConfigOption::ExcludeSimilar => &mut self.exclude_similar,
            ConfigOption::ExcludeAmbiguous => &mut self.exclude_ambiguous,
        };
        *flag = !*flag;
    }
}

impl ConfigOption {
    pub const ALL: [ConfigOption; 6] = [
        ConfigOption::Lowercase,
        ConfigOption::Uppercase,
        ConfigOption::Numbers,
        ConfigOption::Symbols,
        ConfigOption::ExcludeSimilar,
        ConfigOption::ExcludeAmbiguous,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ConfigOption::Lowercase => "Lowercase (a-z)",
            ConfigOption::Uppercase => "Uppercase (A-Z)",
            ConfigOption::Numbers => "Numbers (0-9)",
            ConfigOption::Symbols => "Symbols (!@#$...)",
            ConfigOption::ExcludeSimilar => "Exclude similar (i l 1 L o 0 O)",
            ConfigOption::ExcludeAmbiguous => "Exclude ambiguous ({ } [ ] ( ) / \\ ...)",
        }
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            length: 20,
            lowercase: true,
            uppercase: true,
            numbers: true,
            symbols: true,
            exclude_similar: false,
            exclude_ambiguous: false,
            quantity: 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_stock_options() {
        let config = GenerationConfig::default();
        assert_eq!(config.length, 20);
        assert_eq!(config.quantity, 3);
        assert!(config.lowercase && config.uppercase && config.numbers && config.symbols);
        assert!(!config.exclude_similar && !config.exclude_ambiguous);
    }

    #[test]
    fn set_length_rejects_out_of_range() {
        let mut config = GenerationConfig::default();
        assert!(!config.set_length(3));
        assert!(!config.set_length(129));
        assert_eq!(config.length, 20);
        assert!(config.set_length(4));
        assert!(config.set_length(128));
        assert_eq!(config.length, 128);
    }

    #[test]
    fn set_quantity_rejects_out_of_range() {
        let mut config = GenerationConfig::default();
        assert!(!config.set_quantity(0));
        assert!(!config.set_quantity(MAX_QUANTITY + 1));
        assert!(config.set_quantity(10));
        assert_eq!(config.quantity, 10);
    }

    #[test]
    fn enabled_classes_keep_fixed_order() {
        let config = GenerationConfig {
            lowercase: false,
            ..Default::default()
        };
        let classes: Vec<_> = config.enabled_classes().collect();
        assert_eq!(
            classes,
            vec![CharClass::Uppercase, CharClass::Digit, CharClass::Symbol]
        );
    }

    #[test]
    fn toggle_flips_exactly_one_option() {
        let mut config = GenerationConfig::default();
        config.toggle(ConfigOption::ExcludeSimilar);
        assert!(config.exclude_similar);
        assert!(config.get(ConfigOption::Lowercase));
        for option in ConfigOption::ALL.into_iter().take(4) {
            config.toggle(option);
        }
        assert!(!config.has_any_class());
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let json = serde_json::to_value(GenerationConfig::default()).unwrap();
        assert_eq!(json["excludeSimilar"], false);
        assert_eq!(json["length"], 20);
    }
}
