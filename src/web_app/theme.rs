// web_app/theme.rs - Presentation variants for the storefront
//
// One logical page, two visual skins. Components read the active theme
// from context and apply its class fragments; none of the fetch or
// render logic depends on which skin is in use.

/// Class table for a storefront skin.
///
/// Every field is a Tailwind class fragment applied by exactly one
/// slot in the page or its components.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StoreTheme {
    pub page: &'static str,
    pub hero: &'static str,
    pub hero_badge: &'static str,
    pub hero_title: &'static str,
    pub hero_tagline: &'static str,
    pub cta_button: &'static str,
    pub section_heading: &'static str,
    pub card: &'static str,
    pub card_title: &'static str,
    pub card_price: &'static str,
    pub card_button: &'static str,
    pub skeleton_block: &'static str,
    pub error_panel: &'static str,
    pub error_text: &'static str,
    pub footer: &'static str,
}

impl StoreTheme {
    /// Plain skin: neutral grays, no animation.
    pub fn standard() -> Self {
        Self {
            page: "min-h-screen bg-gray-50",
            hero: "bg-white border-b border-gray-200 py-20 px-4 sm:px-6 lg:px-8",
            hero_badge: "mb-6 bg-gray-100 text-gray-700 px-4 py-2 text-sm font-medium rounded-full",
            hero_title: "text-5xl font-bold text-gray-900 sm:text-6xl md:text-7xl mb-6",
            hero_tagline: "text-xl text-gray-600 max-w-4xl mx-auto mb-10 leading-relaxed",
            cta_button: "text-lg px-10 py-4 rounded-full bg-gray-900 text-white font-semibold \
                         hover:bg-gray-700 transition-colors",
            section_heading: "text-4xl font-bold text-gray-900 mb-6",
            card: "bg-white rounded-xl shadow-sm hover:shadow-lg transition-all duration-300 \
                   border border-gray-100 overflow-hidden",
            card_title: "text-xl font-bold text-gray-900 mb-3",
            card_price: "text-2xl font-bold text-gray-700",
            card_button: "w-full py-3 rounded-xl bg-gray-900 text-white font-semibold \
                          hover:bg-gray-700 transition-colors",
            skeleton_block: "bg-gray-200 animate-pulse",
            error_panel: "bg-red-50 border border-red-200 rounded-2xl p-8 max-w-md mx-auto",
            error_text: "text-red-700 text-lg",
            footer: "bg-white border-t border-gray-200 py-16 px-4 sm:px-6 lg:px-8 \
                     text-gray-500 text-lg",
        }
    }

    /// Ornamental skin: pink and purple gradients with float animations.
    pub fn decorated() -> Self {
        Self {
            page: "min-h-screen gradient-bg",
            hero: "bg-gradient-to-br from-pink-50/80 to-purple-50/80 backdrop-blur-sm \
                   py-20 px-4 sm:px-6 lg:px-8",
            hero_badge: "mb-6 bg-pink-200/70 text-pink-800 px-4 py-2 text-sm font-medium \
                         rounded-full",
            hero_title: "text-5xl font-bold text-pink-700 sm:text-6xl md:text-7xl mb-6 \
                         float-animation",
            hero_tagline: "text-xl text-gray-700 max-w-4xl mx-auto mb-10 leading-relaxed",
            cta_button: "text-lg px-10 py-4 rounded-full text-white font-semibold border-0 \
                         bg-gradient-to-r from-pink-400 to-purple-400 hover:shadow-lg \
                         transition-all",
            section_heading: "text-4xl font-bold text-pink-700 mb-6",
            card: "bg-white/90 rounded-xl border-2 border-pink-200/50 shadow-sm \
                   hover:shadow-lg hover:-translate-y-2 transition-all duration-300 \
                   overflow-hidden float-animation",
            card_title: "text-xl font-bold text-pink-700 mb-3",
            card_price: "text-2xl font-bold text-purple-600",
            card_button: "w-full py-3 rounded-xl text-white font-semibold border-0 \
                          bg-gradient-to-r from-pink-400 to-purple-400 hover:shadow-lg \
                          transition-all",
            skeleton_block: "bg-pink-100/50 animate-pulse",
            error_panel: "bg-pink-100/80 border border-pink-300/50 rounded-2xl p-8 \
                          max-w-md mx-auto",
            error_text: "text-pink-700 text-lg",
            footer: "bg-gradient-to-t from-pink-100/50 to-transparent border-t \
                     border-pink-200/30 py-16 px-4 sm:px-6 lg:px-8 text-gray-500 text-lg",
        }
    }
}

impl Default for StoreTheme {
    fn default() -> Self {
        Self::standard()
    }
}
