// web_app/model/mod.rs - Shared data models for client and server
//
// These structs are used throughout the application for type-safe
// communication between frontend and backend.

use serde::{Deserialize, Serialize};

/// A purchasable item as served by `GET /api/products`.
///
/// Field names are the wire format. Identifiers are assigned by the
/// backend and stable for the lifetime of a product; `price_in_cents`
/// is the minor-currency-unit price and must be non-negative.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub price_in_cents: i64,
    pub image_url: String,
}

/// Lifecycle of the product fetch as observed by the page.
///
/// A single tagged union instead of separate loading/error/data flags,
/// so a view can never observe a pending fetch and a captured error at
/// the same time. The page holds exactly one of these per mount.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ProductsState {
    /// No fetch has been started yet.
    #[default]
    Idle,
    /// The request is in flight.
    Loading,
    /// The request settled with a product list, in server order.
    Loaded(Vec<Product>),
    /// The request settled with a failure, collapsed to one message.
    Failed(String),
}

impl ProductsState {
    /// Map a resource read onto the fetch lifecycle.
    ///
    /// `None` means the request has not settled yet. Transport errors,
    /// non-success statuses, and unparseable bodies all arrive here as
    /// the error variant; an empty error message is coerced to a
    /// generic one.
    pub fn from_fetch<E>(value: Option<Result<Vec<Product>, E>>) -> Self
    where
        E: std::fmt::Display,
    {
        match value {
            None => ProductsState::Loading,
            Some(Ok(products)) => ProductsState::Loaded(products),
            Some(Err(e)) => {
                let message = e.to_string();
                if message.is_empty() {
                    ProductsState::Failed("unknown error".to_string())
                } else {
                    ProductsState::Failed(message)
                }
            }
        }
    }

    /// Whether the fetch has settled, successfully or not.
    pub fn is_settled(&self) -> bool {
        matches!(self, ProductsState::Loaded(_) | ProductsState::Failed(_))
    }

    /// The loaded products, if any.
    pub fn products(&self) -> Option<&[Product]> {
        match self {
            ProductsState::Loaded(products) => Some(products),
            _ => None,
        }
    }
}

/// Format a minor-unit price for display.
///
/// The display value is the price divided by 100 with two decimal
/// places: 1050 cents renders as "$10.50".
pub fn format_price(cents: i64) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}
