// web_app/api/catalog.rs - In-memory product catalog
//
// The storefront serves its product list from a catalog seeded once at
// startup from a JSON file. The catalog is immutable after
// initialization, so reads are lock-free across Actix workers.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::OnceLock;

use crate::web_app::model::Product;

static CATALOG: OnceLock<Vec<Product>> = OnceLock::new();

/// Errors raised while seeding the catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read product file: {0}")]
    Io(#[from] std::io::Error),
    #[error("product file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("product file is missing the 'products' key")]
    MissingKey,
}

/// Initialize the global product catalog
///
/// Later calls are ignored; the first seed wins.
pub fn init_catalog(products: Vec<Product>) {
    tracing::info!("Initializing product catalog with {} entries", products.len());
    if CATALOG.set(products).is_err() {
        tracing::warn!("Product catalog already initialized");
    }
}

/// Snapshot of the catalog, in seed order
pub fn get_catalog() -> Option<Vec<Product>> {
    let products = CATALOG.get().cloned();
    if products.is_none() {
        tracing::warn!("Product catalog is empty!");
    }
    products
}

/// Load products from a seed file of the shape `{"products": [...]}`
pub fn load_products(path: impl AsRef<Path>) -> Result<Vec<Product>, CatalogError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let json: serde_json::Value = serde_json::from_reader(reader)?;
    let products_json = json.get("products").ok_or(CatalogError::MissingKey)?;
    let products: Vec<Product> = serde_json::from_value(products_json.clone())?;
    Ok(products)
}
