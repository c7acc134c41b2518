// web_app/pages/home.rs - Storefront home page
//
// The page controller: issues the product fetch once per mount and
// renders one of three mutually exclusive views (skeletons, grid,
// error) from the fetch state.

use leptos::prelude::*;

use crate::web_app::components::*;
use crate::web_app::model::ProductsState;
use crate::web_app::server_fns::fetch_products;
use crate::web_app::theme::StoreTheme;

/// Storefront home page
///
/// Composes the hero section, the product grid, and the footer. The
/// product list is fetched exactly once per mount: the resource source
/// is the unit value, which never changes, so there is no refetch and
/// no polling. When the page unmounts before the request settles, the
/// resource is disposed with the reactive scope and the late result is
/// discarded.
#[component]
pub fn HomePage() -> impl IntoView {
    let theme = use_context::<StoreTheme>().unwrap_or_default();

    let products = Resource::new(|| (), |_| async move { fetch_products().await });

    view! {
        <div class=theme.page>
            // Hero section
            <section class=theme.hero>
                <div class="max-w-7xl mx-auto text-center">
                    <Badge class=theme.hero_badge>"Featured Collection"</Badge>
                    <h1 class=theme.hero_title>"Discover the Good Life"</h1>
                    <p class=theme.hero_tagline>
                        "Hand-picked quality goods to add color and taste to your everyday."
                    </p>
                    <Button class=theme.cta_button>"Start Shopping"</Button>
                </div>
            </section>

            // Products section
            <section class="py-20 px-4 sm:px-6 lg:px-8">
                <div class="max-w-7xl mx-auto">
                    <div class="text-center mb-16">
                        <h2 class=theme.section_heading>"Popular Products"</h2>
                        <p class="text-xl text-gray-600 max-w-2xl mx-auto">
                            "Every item is carefully selected, quality guaranteed."
                        </p>
                    </div>

                    <Suspense fallback=move || view! { <SkeletonGrid /> }>
                        {move || match ProductsState::from_fetch(products.get()) {
                            ProductsState::Idle | ProductsState::Loading => {
                                view! { <SkeletonGrid /> }.into_any()
                            }
                            ProductsState::Failed(message) => {
                                view! { <ErrorDisplay error=message /> }.into_any()
                            }
                            ProductsState::Loaded(list) => {
                                view! { <ProductGrid products=list /> }.into_any()
                            }
                        }}
                    </Suspense>
                </div>
            </section>

            // Footer
            <footer class=theme.footer>
                <div class="max-w-7xl mx-auto text-center">
                    <p>"© 2024 Vibe Store. Bringing you a delightful shopping experience."</p>
                </div>
            </footer>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use crate::web_app::model::{Product, ProductsState};

    #[test]
    fn test_lifecycle_order() {
        // The resource transitions None -> Some exactly once; the view
        // derived from it moves Loading -> settled and never back.
        let pending = ProductsState::from_fetch::<String>(None);
        assert_eq!(pending, ProductsState::Loading);

        let settled = ProductsState::from_fetch::<String>(Some(Ok(vec![])));
        assert!(settled.is_settled());
    }

    #[test]
    fn test_failure_replaces_grid() {
        let state = ProductsState::from_fetch(Some(Err::<Vec<Product>, _>(
            "failed to fetch products".to_string(),
        )));
        assert!(state.products().is_none());
        assert!(matches!(state, ProductsState::Failed(_)));
    }

    #[test]
    fn test_success_yields_one_card_per_product() {
        let list: Vec<Product> = (1..=3)
            .map(|id| Product {
                id,
                name: format!("P{id}"),
                price_in_cents: 100,
                image_url: String::new(),
            })
            .collect();

        let state = ProductsState::from_fetch::<String>(Some(Ok(list.clone())));
        let products = state.products().unwrap();
        assert_eq!(products.len(), 3);
        assert_eq!(
            products.iter().map(|p| p.id).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }
}
