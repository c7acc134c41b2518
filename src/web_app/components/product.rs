// web_app/components/product.rs - Product display components
//
// Components for displaying products:
// - ProductCard: Grid card for one product
// - ProductSkeleton: Placeholder shown while the list loads
// - ProductGrid / SkeletonGrid: Grid layouts

use leptos::prelude::*;

use crate::web_app::model::{format_price, Product};
use crate::web_app::theme::StoreTheme;

/// Number of skeleton placeholders shown while the product list loads.
/// Fixed regardless of the eventual result size.
pub const SKELETON_COUNT: usize = 8;

/// Product card for the storefront grid
///
/// A pure function of one product: image, name, formatted price, and a
/// static add-to-cart control. No state and no side effects.
#[component]
pub fn ProductCard(
    /// The product to display
    product: Product,
) -> impl IntoView {
    let theme = use_context::<StoreTheme>().unwrap_or_default();
    let price_display = format_price(product.price_in_cents);

    view! {
        <div class=theme.card>
            <div class="aspect-square overflow-hidden rounded-t-xl bg-gray-100">
                <img
                    src=product.image_url.clone()
                    alt=product.name.clone()
                    class="w-full h-full object-cover transition-transform duration-300 hover:scale-105"
                />
            </div>
            <div class="p-6">
                <h3 class=theme.card_title>{product.name.clone()}</h3>
                <p class=theme.card_price>{price_display}</p>
            </div>
            <div class="p-6 pt-0">
                <button type="button" class=theme.card_button>
                    "Add to Cart"
                </button>
            </div>
        </div>
    }
}

/// Skeleton placeholder matching the card layout
///
/// Image block, two text bars, and a button bar, all pulsing.
#[component]
pub fn ProductSkeleton() -> impl IntoView {
    let theme = use_context::<StoreTheme>().unwrap_or_default();

    view! {
        <div class=theme.card>
            <div class=format!("aspect-square w-full rounded-t-xl {}", theme.skeleton_block)></div>
            <div class="p-6">
                <div class=format!("h-6 w-3/4 mb-3 rounded-full {}", theme.skeleton_block)></div>
                <div class=format!("h-8 w-1/2 rounded-full {}", theme.skeleton_block)></div>
            </div>
            <div class="p-6 pt-0">
                <div class=format!("h-12 w-full rounded-xl {}", theme.skeleton_block)></div>
            </div>
        </div>
    }
}

/// Product grid
///
/// One card per product, rendered in the order the server returned
/// them, keyed by the stable product id.
#[component]
pub fn ProductGrid(
    /// Products to display, in server order
    products: Vec<Product>,
) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-8">
            <For
                each=move || products.clone()
                key=|product| product.id
                children=move |product| view! { <ProductCard product=product /> }
            />
        </div>
    }
}

/// Skeleton grid shown while the product list loads
#[component]
pub fn SkeletonGrid() -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-8">
            {(0..SKELETON_COUNT)
                .map(|_| view! { <ProductSkeleton /> })
                .collect_view()}
        </div>
    }
}
