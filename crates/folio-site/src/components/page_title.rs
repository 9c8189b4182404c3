use dioxus::prelude::*;

use crate::state::SiteContext;

/// Centered section heading shared by the content pages.
#[component]
pub fn PageTitle(text: String) -> Element {
    let ctx = use_context::<SiteContext>();
    let palette = ctx.palette();

    rsx! {
        h2 {
            class: "page-title",
            style: "color: {palette.primary}; text-shadow: 0 2px 16px {palette.primary}44;",
            "{text}"
        }
    }
}
