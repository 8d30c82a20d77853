//! Plural-form selection for translation keys.
//!
//! English and most languages need a single counted form per key because the
//! translation itself handles singular vs plural ("%d years ago" only occurs for
//! two or more). Languages such as Russian and Ukrainian pick between three
//! forms depending on the last digits of the number, so their tables carry up to
//! three variants of every counted key, told apart by a suffix marker.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::locale::primary_language;

/// Grammatical form tag spliced into a counted translation key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PluralSuffix {
    /// "5 лет", also the only form for simple-plural languages
    Many,
    /// "2 года"
    Few,
    /// "1 год", "21 год"
    One,
}

impl PluralSuffix {
    /// Marker text inserted into the key
    pub fn marker(self) -> &'static str {
        match self {
            PluralSuffix::Many => "",
            PluralSuffix::Few => "_",
            PluralSuffix::One => "__",
        }
    }
}

/// Chooses the plural form for a count
pub trait PluralRule: Send + Sync {
    fn suffix(&self, value: u64) -> PluralSuffix;
}

/// One counted form for every number
#[derive(Debug, Clone, Copy, Default)]
pub struct SimplePlural;

impl PluralRule for SimplePlural {
    fn suffix(&self, _value: u64) -> PluralSuffix {
        PluralSuffix::Many
    }
}

/// One/few/many forms keyed on the last one and two digits (ru, uk)
#[derive(Debug, Clone, Copy, Default)]
pub struct EastSlavicPlural;

impl PluralRule for EastSlavicPlural {
    fn suffix(&self, value: u64) -> PluralSuffix {
        let xy = value % 100;
        let y = value % 10;

        if y == 0 || y > 4 || (xy > 10 && xy < 15) {
            return PluralSuffix::Many;
        }

        if y > 1 && y < 5 && (xy < 10 || xy > 20) {
            return PluralSuffix::Few;
        }

        if y == 1 && xy != 11 {
            return PluralSuffix::One;
        }

        PluralSuffix::Many
    }
}

/// Plural rules keyed by primary language subtag.
///
/// Languages without a registered rule use [`SimplePlural`].
#[derive(Clone)]
pub struct PluralRules {
    rules: HashMap<String, Arc<dyn PluralRule>>,
    fallback: Arc<dyn PluralRule>,
}

impl PluralRules {
    /// A registry with no language-specific rules
    pub fn empty() -> Self {
        Self {
            rules: HashMap::new(),
            fallback: Arc::new(SimplePlural),
        }
    }

    /// Register a rule for a language, replacing any previous one
    pub fn register(&mut self, language: &str, rule: impl PluralRule + 'static) {
        self.rules
            .insert(language.to_ascii_lowercase(), Arc::new(rule));
    }

    pub fn with_rule(mut self, language: &str, rule: impl PluralRule + 'static) -> Self {
        self.register(language, rule);
        self
    }

    /// Rule for a locale identifier such as `ru`, `uk-UA` or `ru_RU.UTF-8`
    pub fn rule_for(&self, locale: &str) -> &dyn PluralRule {
        self.rules
            .get(&primary_language(locale))
            .unwrap_or(&self.fallback)
            .as_ref()
    }

    pub fn suffix(&self, locale: &str, value: u64) -> PluralSuffix {
        self.rule_for(locale).suffix(value)
    }
}

impl Default for PluralRules {
    fn default() -> Self {
        Self::empty()
            .with_rule("ru", EastSlavicPlural)
            .with_rule("uk", EastSlavicPlural)
    }
}

impl fmt::Debug for PluralRules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut languages: Vec<_> = self.rules.keys().collect();
        languages.sort();
        f.debug_struct("PluralRules")
            .field("languages", &languages)
            .finish()
    }
}
