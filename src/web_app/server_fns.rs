// web_app/server_fns.rs - Leptos server function declarations
//
// These are the server function declarations that are accessible from both
// client (WASM) and server (native Rust). The #[server] macro automatically
// generates:
// - On server: The actual function implementation
// - On client: A stub that makes an HTTP request to the server
//
// IMPORTANT: This file must be compiled for BOTH ssr and hydrate features!

use leptos::prelude::*;
use leptos::server_fn::codec::GetUrl;

use crate::web_app::model::Product;

/// Product list for the storefront grid
///
/// Registered as `GET /api/products`. The success body is the JSON
/// array of products in catalog order; any transport failure,
/// non-success status, or unparseable body surfaces to the caller as a
/// single error value.
#[server(prefix = "/api", endpoint = "products", input = GetUrl)]
pub async fn fetch_products() -> Result<Vec<Product>, ServerFnError> {
    use crate::web_app::api::catalog;

    tracing::info!("Product list requested");

    let products = catalog::get_catalog()
        .ok_or_else(|| ServerFnError::new("Product catalog not available"))?;

    tracing::info!("Serving {} products", products.len());
    Ok(products)
}
