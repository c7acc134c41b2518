// web_app/components/common.rs - Reusable UI components
//
// These are small, composable components used throughout the application.
// Philosophy: Pure, stateless components that receive all data via props.

use leptos::prelude::*;

use crate::web_app::theme::StoreTheme;

/// Badge component
///
/// A small rounded label, styled by the caller.
#[component]
pub fn Badge(
    children: Children,
    /// CSS classes for the badge
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <span class=format!("inline-block {}", class)>
            {children()}
        </span>
    }
}

/// Button component
///
/// A styled button. The click handler is optional; a button without one
/// is a static call-to-action.
#[component]
pub fn Button(
    children: Children,
    /// Click handler
    #[prop(optional)]
    on_click: Option<Callback<()>>,
    /// Whether the button is disabled
    #[prop(default = false)]
    disabled: bool,
    /// Button type (submit, button, reset)
    #[prop(default = "button")]
    button_type: &'static str,
    /// CSS classes for the button
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <button
            type=button_type
            disabled=disabled
            class=class
            on:click=move |_| {
                if let Some(handler) = on_click {
                    handler.run(());
                }
            }
        >
            {children()}
        </button>
    }
}

/// Error display component
///
/// The single error view shown when the product fetch fails. It
/// replaces the grid entirely; no partial list is rendered beside it.
#[component]
pub fn ErrorDisplay(
    /// The error message to display
    error: String,
) -> impl IntoView {
    let theme = use_context::<StoreTheme>().unwrap_or_default();

    view! {
        <div class="text-center py-12">
            <div class=theme.error_panel>
                <p class=theme.error_text>
                    "Something went wrong while loading products: " {error}
                </p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_class_construction() {
        // The badge prepends its base class to the caller's classes.
        let class = "bg-pink-200/70 text-pink-800";
        let combined = format!("inline-block {}", class);
        assert!(combined.starts_with("inline-block "));
        assert!(combined.contains("bg-pink-200/70"));
    }

    #[test]
    fn test_error_panel_classes_present() {
        let theme = StoreTheme::default();
        assert!(theme.error_panel.contains("border"));
        assert!(!theme.error_text.is_empty());
    }
}
