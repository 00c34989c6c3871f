use crate::core::config::ResolutionConfig;
use crate::core::normalize::normalize;
use crate::core::types::{ColorList, Resolution, ResolutionTier};
use crate::error::ConfigError;
use crate::fuzzy::similarity;
use tracing::debug;

/// Resolves a product display name to its ordered color list.
///
/// Tiers are tried in a fixed order and the first hit wins:
/// override, exact phrase, best partial phrase, keyword, product type,
/// then `default_colors`. Never fails and never returns an empty list for
/// a validated config.
pub fn resolve(raw_name: &str, config: &ResolutionConfig) -> Resolution {
    let name = normalize(raw_name);

    // 0. Overrides take precedence over phrase entries that share the needle.
    if let Some(entry) = config
        .overrides
        .iter()
        .find(|entry| name.contains(&normalize(&entry.needle)))
    {
        debug!(name = %name, needle = %entry.needle, "override match");
        return Resolution::new(&entry.colors, ResolutionTier::Override);
    }

    // 1. Exact phrase
    if let Some(entry) = config
        .phrases
        .iter()
        .find(|entry| normalize(&entry.phrase) == name)
    {
        debug!(name = %name, phrase = %entry.phrase, "exact match");
        return Resolution::new(&entry.colors, ResolutionTier::Exact);
    }

    // 2. Best partial phrase; ties keep the earlier entry.
    if let Some(colors) = best_partial_match(&name, config) {
        return Resolution::new(colors, ResolutionTier::Partial);
    }

    // 3. Keyword containment, first hit wins.
    if let Some(entry) = config
        .keywords
        .iter()
        .find(|entry| name.contains(&normalize(&entry.keyword)))
    {
        debug!(name = %name, keyword = %entry.keyword, "keyword match");
        return Resolution::new(&entry.colors, ResolutionTier::Keyword);
    }

    // 4. Product type containment, first hit wins.
    if let Some(entry) = config
        .types
        .iter()
        .find(|entry| name.contains(&normalize(&entry.type_name)))
    {
        debug!(name = %name, type_name = %entry.type_name, "type match");
        return Resolution::new(&entry.colors, ResolutionTier::Type);
    }

    debug!(name = %name, "no match, using default colors");
    Resolution::new(&config.default_colors, ResolutionTier::Default)
}

fn best_partial_match<'c>(name: &str, config: &'c ResolutionConfig) -> Option<&'c ColorList> {
    let mut best: Option<(&str, &ColorList, f64)> = None;

    for entry in &config.phrases {
        let score = similarity(name, &normalize(&entry.phrase));
        let best_score = best.map_or(0.0, |(_, _, s)| s);
        if score > best_score {
            best = Some((entry.phrase.as_str(), &entry.colors, score));
        }
    }

    match best {
        Some((phrase, colors, score)) if score > config.similarity_threshold => {
            debug!(name = %name, phrase = %phrase, score, "partial match");
            Some(colors)
        }
        _ => None,
    }
}

/// Convenience wrapper returning only the colors.
pub fn resolve_colors(raw_name: &str, config: &ResolutionConfig) -> ColorList {
    resolve(raw_name, config).colors
}

/// Resolution for a catalog record whose name may be absent.
///
/// `None` and the empty string yield `baseline_colors` tagged
/// `MissingName`, so callers can tell "no name" from "unmatched name".
pub fn resolve_product_name(name: Option<&str>, config: &ResolutionConfig) -> Resolution {
    match name {
        Some(name) if !name.is_empty() => resolve(name, config),
        _ => Resolution::new(&config.baseline_colors, ResolutionTier::MissingName),
    }
}

/// A validated config paired with the resolution entry points.
#[derive(Debug, Clone)]
pub struct AttributeResolver {
    config: ResolutionConfig,
}

impl AttributeResolver {
    pub fn new(config: ResolutionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Resolver over the compiled-in storefront dictionaries.
    pub fn reference() -> Self {
        Self {
            config: ResolutionConfig::reference(),
        }
    }

    pub fn config(&self) -> &ResolutionConfig {
        &self.config
    }

    pub fn resolve(&self, raw_name: &str) -> Resolution {
        resolve(raw_name, &self.config)
    }

    pub fn resolve_colors(&self, raw_name: &str) -> ColorList {
        resolve_colors(raw_name, &self.config)
    }

    pub fn resolve_product_name(&self, name: Option<&str>) -> Resolution {
        resolve_product_name(name, &self.config)
    }

    pub fn baseline(&self) -> Resolution {
        Resolution::new(&self.config.baseline_colors, ResolutionTier::MissingName)
    }
}

impl Default for AttributeResolver {
    fn default() -> Self {
        Self::reference()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn colors(list: &[&str]) -> ColorList {
        list.iter().map(|c| c.to_string()).collect()
    }

    fn small_config() -> ResolutionConfig {
        ResolutionConfig::new(&["Estándar"], &["negro", "azul", "blanco"])
            .with_override("plug", &["negro", "azul"])
            .with_phrase("labret corazón", &["dorado", "rosa"])
            .with_phrase("labret simple", &["cobre"])
            .with_keyword("corazon", &["rosa"])
            .with_type("labret", &["plateado"])
    }

    #[test]
    fn test_exact_match_ignores_accents() {
        let config = small_config();
        let result = resolve("LABRET CORAZON", &config);
        assert_eq!(result.tier, ResolutionTier::Exact);
        assert_eq!(result.colors, colors(&["dorado", "rosa"]));
    }

    #[test]
    fn test_override_runs_before_exact() {
        let config = small_config().with_phrase("plug doble", &["beige"]);
        let result = resolve("plug doble", &config);
        assert_eq!(result.tier, ResolutionTier::Override);
        assert_eq!(result.colors, colors(&["negro", "azul"]));
    }

    #[test]
    fn test_partial_beats_keyword() {
        // 2 of 3 tokens clears the threshold, 2 of 4 does not.
        let config = small_config();
        let result = resolve("labret corazón dorado", &config);
        assert_eq!(result.tier, ResolutionTier::Partial);
        assert_eq!(result.colors, colors(&["dorado", "rosa"]));

        let result = resolve("labret con corazon largo", &config);
        assert_eq!(result.tier, ResolutionTier::Keyword);
        assert_eq!(result.colors, colors(&["rosa"]));
    }

    #[test]
    fn test_type_then_default() {
        let config = small_config();
        let result = resolve("labret de titanio grabado", &config);
        assert_eq!(result.tier, ResolutionTier::Type);

        let result = resolve("collar", &config);
        assert_eq!(result.tier, ResolutionTier::Default);
        assert_eq!(result.colors, colors(&["Estándar"]));
        assert!(!result.is_matched());
    }

    #[test]
    fn test_missing_name_is_distinct_from_unmatched() {
        let config = small_config();
        let missing = resolve_product_name(None, &config);
        let empty = resolve_product_name(Some(""), &config);
        let unmatched = resolve_product_name(Some("collar"), &config);

        assert_eq!(missing.tier, ResolutionTier::MissingName);
        assert_eq!(missing.colors, colors(&["negro", "azul", "blanco"]));
        assert_eq!(empty, missing);
        assert_eq!(unmatched.tier, ResolutionTier::Default);
        assert_ne!(unmatched.colors, missing.colors);
    }

    #[test]
    fn test_whitespace_only_name_goes_through_cascade() {
        let result = resolve_product_name(Some("   "), &small_config());
        assert_eq!(result.tier, ResolutionTier::Default);
    }

    #[test]
    fn test_resolver_rejects_invalid_config() {
        let config = ResolutionConfig::new(&[], &["negro"]);
        assert_eq!(
            AttributeResolver::new(config).unwrap_err(),
            ConfigError::EmptyDefault
        );
    }
}
