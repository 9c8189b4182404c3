//! Theme wrapper for the site.
//!
//! The mode itself lives in [`SiteContext`]; this module applies it to
//! the DOM and exposes the toggle button.

use dioxus::prelude::*;

use crate::state::SiteContext;

/// Root wrapper that applies the current mode.
///
/// Also owns the pointer and window-size listeners that feed the
/// background parallax.
#[component]
pub fn ThemedRoot(children: Element) -> Element {
    let mut ctx = use_context::<SiteContext>();
    let mode = ctx.mode();
    let palette = ctx.palette();

    rsx! {
        div {
            class: "themed-root",
            "data-theme": "{mode.css_value()}",
            style: "background-color: {palette.background}; color: {palette.text_primary};",
            onmousemove: move |evt| {
                let point = evt.client_coordinates();
                ctx.pointer_moved(point.x, point.y);
            },
            // Fixed to the window edges so it reports the window size.
            div {
                class: "window-gauge",
                onresize: move |evt| {
                    if let Ok(size) = evt.get_border_box_size() {
                        ctx.window_resized(size.width, size.height);
                    }
                },
            }
            {children}
        }
    }
}

/// Light/dark toggle shown in the navigation bar.
#[component]
pub fn ThemeToggle() -> Element {
    let mut ctx = use_context::<SiteContext>();
    let mode = ctx.mode();

    rsx! {
        button {
            class: "theme-toggle",
            title: "{mode.toggle_label()}",
            "aria-label": "{mode.toggle_label()}",
            onclick: move |_| ctx.toggle_theme(),
            if mode.is_dark() { "☀" } else { "☾" }
        }
    }
}
