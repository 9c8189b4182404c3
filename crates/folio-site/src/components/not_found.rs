use dioxus::prelude::*;

use crate::state::SiteContext;

/// Shown for any path outside the route table.
#[component]
pub fn NotFoundPage() -> Element {
    let mut ctx = use_context::<SiteContext>();
    let path = ctx.navigator.read().current_path().to_string();
    let can_go_back = ctx.navigator.read().can_go_back();
    let palette = ctx.palette();

    rsx! {
        section { class: "page not-found-page",
            h2 { class: "page-title", style: "color: {palette.primary};", "Page not found" }
            p { class: "not-found-path", "Nothing lives at {path}." }
            if can_go_back {
                button {
                    class: "cta-secondary",
                    style: "border-color: {palette.secondary}; color: {palette.secondary}; margin-right: 12px;",
                    onclick: move |_| ctx.back(),
                    "Go Back"
                }
            }
            button {
                class: "cta-secondary",
                style: "border-color: {palette.accent}; color: {palette.accent};",
                onclick: move |_| ctx.navigate("/"),
                "Back to About"
            }
        }
    }
}
