// lib.rs - Root module for the vibe_store library
//
// The library is compiled twice: natively for the SSR server (ssr
// feature) and to WASM for client-side hydration (hydrate feature).

/// The web_app module contains the whole storefront application
pub mod web_app;

cfg_if::cfg_if! {
    if #[cfg(feature = "hydrate")] {
        use wasm_bindgen::prelude::wasm_bindgen;

        /// WASM entry point: hydrate the server-rendered page
        #[wasm_bindgen]
        pub fn hydrate() {
            use crate::web_app::App;

            console_error_panic_hook::set_once();
            leptos::mount::hydrate_body(App);
        }
    }
}
