use crate::core::resolver::AttributeResolver;
use crate::persistence::load_config;
use std::env;
use std::path::PathBuf;
use tracing::{info, warn};

pub const CONFIG_PATH_VAR: &str = "COLOR_CONFIG";
pub const SHOW_TIERS_VAR: &str = "COLOR_SHOW_TIERS";

/// Runtime settings for the resolver binary.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Settings {
    /// Dictionary file (`.json` or bincode snapshot); reference data when unset.
    pub config_path: Option<PathBuf>,
    pub show_tiers: bool,
}

impl Settings {
    pub fn load() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    pub fn from_vars<F>(var: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let config_path = var(CONFIG_PATH_VAR)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);
        if config_path.is_none() {
            info!("{CONFIG_PATH_VAR} not set, using reference dictionaries");
        }

        let show_tiers = match var(SHOW_TIERS_VAR).as_deref().map(str::trim) {
            None => false,
            Some("1") | Some("true") | Some("yes") => true,
            Some("0") | Some("false") | Some("no") | Some("") => false,
            Some(other) => {
                warn!("Invalid {SHOW_TIERS_VAR} value: {other}, using default: false");
                false
            }
        };

        Self {
            config_path,
            show_tiers,
        }
    }

    /// Builds the resolver. A dictionary file that cannot be loaded is
    /// reported and replaced by the reference data.
    pub fn resolver(&self) -> AttributeResolver {
        let Some(path) = &self.config_path else {
            return AttributeResolver::reference();
        };

        match load_config(path).map(AttributeResolver::new) {
            Ok(Ok(resolver)) => resolver,
            Ok(Err(e)) => {
                warn!(path = %path.display(), error = %e, "invalid dictionary, using reference data");
                AttributeResolver::reference()
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to load dictionary, using reference data");
                AttributeResolver::reference()
            }
        }
    }
}
