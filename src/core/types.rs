// src/core/types.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// An ordered list of canonical color tokens, e.g. `["dorado", "negro"]`.
/// Order is display order; consumers must not re-sort it.
pub type ColorList = Vec<String>;

/// A human-authored product-name variant and the colors it resolves to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhraseEntry {
    pub phrase: String,
    pub colors: ColorList,
}

/// A coarse keyword matched by substring containment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordEntry {
    pub keyword: String,
    pub colors: ColorList,
}

/// A broad product category (ring, tunnel, plug, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeEntry {
    pub type_name: String,
    pub colors: ColorList,
}

/// A pre-cascade check: any name containing `needle` short-circuits to
/// `colors` before exact matching is attempted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverrideEntry {
    pub needle: String,
    pub colors: ColorList,
}

macro_rules! entry_ctor {
    ($ty:ident, $key:ident) => {
        impl $ty {
            pub fn new(key: &str, colors: &[&str]) -> Self {
                Self {
                    $key: key.to_string(),
                    colors: colors.iter().map(|c| c.to_string()).collect(),
                }
            }
        }
    };
}

entry_ctor!(PhraseEntry, phrase);
entry_ctor!(KeywordEntry, keyword);
entry_ctor!(TypeEntry, type_name);
entry_ctor!(OverrideEntry, needle);

/// The stage of the cascade that produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResolutionTier {
    Override,
    Exact,
    Partial,
    Keyword,
    Type,
    Default,
    /// No product name was supplied at all; carries the baseline colors.
    MissingName,
}

impl fmt::Display for ResolutionTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ResolutionTier::Override => "override",
            ResolutionTier::Exact => "exact",
            ResolutionTier::Partial => "partial",
            ResolutionTier::Keyword => "keyword",
            ResolutionTier::Type => "type",
            ResolutionTier::Default => "default",
            ResolutionTier::MissingName => "missing-name",
        };
        f.write_str(name)
    }
}

/// Resolved colors together with the tier that produced them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub colors: ColorList,
    pub tier: ResolutionTier,
}

impl Resolution {
    pub fn new(colors: &[String], tier: ResolutionTier) -> Self {
        Self {
            colors: colors.to_vec(),
            tier,
        }
    }

    /// True when a dictionary entry (rather than a fallback) produced the colors.
    pub fn is_matched(&self) -> bool {
        !matches!(
            self.tier,
            ResolutionTier::Default | ResolutionTier::MissingName
        )
    }
}
