// src/lib.rs

pub mod c_api;
pub mod catalog;
pub mod core;
pub mod error;
pub mod fuzzy;
pub mod persistence;
pub mod settings;

pub use crate::core::config::ResolutionConfig;
pub use crate::core::normalize::normalize;
pub use crate::core::resolver::{resolve, resolve_colors, resolve_product_name, AttributeResolver};
pub use crate::core::types::{ColorList, Resolution, ResolutionTier};
pub use crate::error::{CatalogError, ConfigError, PersistenceError};
pub use crate::fuzzy::similarity;
