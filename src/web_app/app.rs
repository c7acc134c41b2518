// web_app/app.rs - Root application component
//
// This is the entry point for the Leptos application.
// It sets up routing, the active theme, and the component tree.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::web_app::pages::HomePage;
use crate::web_app::theme::StoreTheme;

/// Root application component
///
/// Sets up:
/// - Meta tags
/// - The storefront theme, provided once for the whole tree
/// - Router with routes
#[component]
pub fn App() -> impl IntoView {
    // Provide meta context for <Title>, <Meta>, etc.
    provide_meta_context();

    // One logical page; the skin is a context value.
    provide_context(StoreTheme::decorated());

    view! {
        // HTML meta tags
        <Title text="Vibe Store" />
        <Meta name="description" content="A storefront for hand-picked quality goods" />
        <Meta name="viewport" content="width=device-width, initial-scale=1" />

        // Stylesheet link (Tailwind CSS)
        <Stylesheet id="leptos" href="/pkg/vibe_store.css" />

        // Router setup
        <Router>
            <main class="min-h-screen">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </main>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-100 flex items-center justify-center">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-gray-300 mb-4">"404"</h1>
                <p class="text-xl text-gray-600 mb-8">"Page not found"</p>
                <a
                    href="/"
                    class="px-6 py-3 bg-gray-900 text-white rounded-lg hover:bg-gray-700 transition-colors"
                >
                    "Back to the Store"
                </a>
            </div>
        </div>
    }
}
