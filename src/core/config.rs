// src/core/config.rs
use crate::core::normalize::normalize;
use crate::core::types::{ColorList, KeywordEntry, OverrideEntry, PhraseEntry, TypeEntry};
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.6;

/// Immutable reference data driving the resolver.
///
/// Every dictionary is a `Vec` because iteration order decides ties: the
/// first exact, keyword, type, or override hit wins, and equal partial
/// scores keep the earlier phrase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolutionConfig {
    #[serde(default)]
    pub overrides: Vec<OverrideEntry>,
    pub phrases: Vec<PhraseEntry>,
    #[serde(default)]
    pub keywords: Vec<KeywordEntry>,
    #[serde(default)]
    pub types: Vec<TypeEntry>,
    /// Returned when a name is supplied but nothing matches.
    pub default_colors: ColorList,
    /// Returned when no name is supplied at all, or the product could not be fetched.
    pub baseline_colors: ColorList,
    #[serde(default = "default_threshold")]
    pub similarity_threshold: f64,
}

fn default_threshold() -> f64 {
    DEFAULT_SIMILARITY_THRESHOLD
}

impl ResolutionConfig {
    /// A config with no dictionaries: every name falls through to `default_colors`.
    pub fn new(default_colors: &[&str], baseline_colors: &[&str]) -> Self {
        Self {
            overrides: Vec::new(),
            phrases: Vec::new(),
            keywords: Vec::new(),
            types: Vec::new(),
            default_colors: default_colors.iter().map(|c| c.to_string()).collect(),
            baseline_colors: baseline_colors.iter().map(|c| c.to_string()).collect(),
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
        }
    }

    pub fn with_override(mut self, needle: &str, colors: &[&str]) -> Self {
        self.overrides.push(OverrideEntry::new(needle, colors));
        self
    }

    pub fn with_phrase(mut self, phrase: &str, colors: &[&str]) -> Self {
        self.phrases.push(PhraseEntry::new(phrase, colors));
        self
    }

    pub fn with_keyword(mut self, keyword: &str, colors: &[&str]) -> Self {
        self.keywords.push(KeywordEntry::new(keyword, colors));
        self
    }

    pub fn with_type(mut self, type_name: &str, colors: &[&str]) -> Self {
        self.types.push(TypeEntry::new(type_name, colors));
        self
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.similarity_threshold = threshold;
        self
    }

    /// Checks the invariants the resolver relies on to stay total: both
    /// fallbacks and every entry carry at least one color, every key is
    /// non-blank, and the threshold lies in `[0, 1]`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_colors.is_empty() {
            return Err(ConfigError::EmptyDefault);
        }
        if self.baseline_colors.is_empty() {
            return Err(ConfigError::EmptyBaseline);
        }
        if !(0.0..=1.0).contains(&self.similarity_threshold) {
            return Err(ConfigError::InvalidThreshold(self.similarity_threshold));
        }

        let keyed = self
            .overrides
            .iter()
            .map(|e| ("override", &e.needle, &e.colors))
            .chain(self.phrases.iter().map(|e| ("phrase", &e.phrase, &e.colors)))
            .chain(self.keywords.iter().map(|e| ("keyword", &e.keyword, &e.colors)))
            .chain(self.types.iter().map(|e| ("type", &e.type_name, &e.colors)));

        for (dictionary, key, colors) in keyed {
            // An empty key is a substring of every name.
            if normalize(key).is_empty() {
                return Err(ConfigError::EmptyKey { dictionary });
            }
            if colors.is_empty() {
                return Err(ConfigError::EmptyColors {
                    dictionary,
                    key: key.clone(),
                });
            }
        }
        Ok(())
    }
}

impl Default for ResolutionConfig {
    fn default() -> Self {
        Self::reference()
    }
}
