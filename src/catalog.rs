// File: src/catalog.rs
//! Seam to the product backend. Transport lives elsewhere; this module only
//! decides which colors a fetched (or unfetchable) product gets.

use crate::core::resolver::AttributeResolver;
use crate::core::types::Resolution;
use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// The subset of a backend product record the resolver cares about.
/// Field names follow the backend's JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    #[serde(default)]
    pub nombre: Option<String>,
    #[serde(default)]
    pub descripcion: Option<String>,
    #[serde(default)]
    pub precio: Option<f64>,
    #[serde(default)]
    pub categoria_id: Option<u64>,
    #[serde(default)]
    pub imagen: Option<String>,
}

impl Product {
    pub fn named(id: u64, nombre: &str) -> Self {
        Self {
            id,
            nombre: Some(nombre.to_string()),
            descripcion: None,
            precio: None,
            categoria_id: None,
            imagen: None,
        }
    }
}

/// Anything that can fetch a product record by id (REST client, fixture, cache).
pub trait ProductSource {
    fn fetch_product(&self, id: u64) -> Result<Product, CatalogError>;
}

/// Per-product color lookup on top of a `ProductSource`.
pub struct CatalogColors<S> {
    source: S,
    resolver: AttributeResolver,
}

impl<S: ProductSource> CatalogColors<S> {
    pub fn new(source: S, resolver: AttributeResolver) -> Self {
        Self { source, resolver }
    }

    /// Colors for the product with `id`. Fetch failures and nameless records
    /// both degrade to the baseline colors; the error itself stops here.
    pub fn product_colors(&self, id: u64) -> Resolution {
        match self.source.fetch_product(id) {
            Ok(product) => self.colors_for(&product),
            Err(e) => {
                warn!(product_id = id, error = %e, "product fetch failed, using baseline colors");
                self.resolver.baseline()
            }
        }
    }

    pub fn colors_for(&self, product: &Product) -> Resolution {
        let resolution = self.resolver.resolve_product_name(product.nombre.as_deref());
        debug!(
            product_id = product.id,
            tier = %resolution.tier,
            colors = ?resolution.colors,
            "resolved product colors"
        );
        resolution
    }

    pub fn resolver(&self) -> &AttributeResolver {
        &self.resolver
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::ResolutionConfig;
    use crate::core::types::ResolutionTier;
    use std::collections::HashMap;

    struct FixtureSource {
        products: HashMap<u64, Product>,
        failure: Option<CatalogError>,
    }

    impl ProductSource for FixtureSource {
        fn fetch_product(&self, id: u64) -> Result<Product, CatalogError> {
            if let Some(e) = &self.failure {
                return Err(e.clone());
            }
            self.products.get(&id).cloned().ok_or(CatalogError::NotFound(id))
        }
    }

    fn catalog(failure: Option<CatalogError>) -> CatalogColors<FixtureSource> {
        let mut products = HashMap::new();
        products.insert(1, Product::named(1, "Túnel Mandala"));
        products.insert(
            2,
            Product {
                nombre: None,
                ..Product::named(2, "")
            },
        );
        products.insert(3, Product::named(3, "collar de cuero"));
        let config = ResolutionConfig::new(&["Estándar"], &["negro", "azul", "blanco"])
            .with_phrase("tunel mandala", &["dorado", "plateado"]);
        CatalogColors::new(
            FixtureSource { products, failure },
            AttributeResolver::new(config).unwrap(),
        )
    }

    #[test]
    fn test_named_product_is_resolved() {
        let result = catalog(None).product_colors(1);
        assert_eq!(result.tier, ResolutionTier::Exact);
        assert_eq!(result.colors, vec!["dorado", "plateado"]);
    }

    #[test]
    fn test_nameless_product_gets_baseline() {
        let result = catalog(None).product_colors(2);
        assert_eq!(result.tier, ResolutionTier::MissingName);
        assert_eq!(result.colors, vec!["negro", "azul", "blanco"]);
    }

    #[test]
    fn test_unmatched_product_gets_default() {
        let result = catalog(None).product_colors(3);
        assert_eq!(result.tier, ResolutionTier::Default);
        assert_eq!(result.colors, vec!["Estándar"]);
    }

    #[test]
    fn test_fetch_failures_get_baseline() {
        assert_eq!(catalog(None).product_colors(99).tier, ResolutionTier::MissingName);

        let failures = [
            CatalogError::Network("connection refused".to_string()),
            CatalogError::Unauthorized,
            CatalogError::Malformed("missing field `id`".to_string()),
        ];
        for failure in failures {
            let catalog = catalog(Some(failure.clone()));
            let result = catalog.product_colors(1);
            assert_eq!(result, catalog.resolver().baseline(), "failure {failure}");
            assert_eq!(result.colors, vec!["negro", "azul", "blanco"]);
        }
    }

    #[test]
    fn test_product_deserializes_backend_json() {
        let product: Product =
            serde_json::from_str(r#"{ "id": 7, "nombre": "Plug doble", "precio": 12.5 }"#).unwrap();
        assert_eq!(product.nombre.as_deref(), Some("Plug doble"));
        assert_eq!(product.categoria_id, None);
    }
}
