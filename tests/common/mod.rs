// tests/common/mod.rs - Shared helpers for integration tests

#![allow(dead_code)]

use vibe_store::web_app::model::Product;

/// Products in a fixed server order; ids deliberately non-sequential
/// so order-preservation tests cannot pass by accident.
pub fn sample_products() -> Vec<Product> {
    vec![
        Product {
            id: 42,
            name: "Blossom Ceramic Mug".to_string(),
            price_in_cents: 1850,
            image_url: "https://img.example/mug.jpg".to_string(),
        },
        Product {
            id: 7,
            name: "Pastel Linen Throw".to_string(),
            price_in_cents: 4200,
            image_url: "https://img.example/throw.jpg".to_string(),
        },
        Product {
            id: 19,
            name: "Lavender Soy Candle".to_string(),
            price_in_cents: 1299,
            image_url: "https://img.example/candle.jpg".to_string(),
        },
    ]
}

/// The JSON array from the fetch scenario in the page contract.
pub fn scenario_json() -> &'static str {
    r#"[{"id":1,"name":"A","price_in_cents":500,"image_url":"x"}]"#
}
