//! Top navigation bar.

use dioxus::prelude::*;
use folio_core::content::PROFILE;
use folio_core::Route;

use crate::state::SiteContext;
use crate::theme::ThemeToggle;

use super::icons::ModeIcon;

/// Brand, page links, resume download and the theme toggle.
#[component]
pub fn Navbar() -> Element {
    let mut ctx = use_context::<SiteContext>();
    let current = ctx.route();
    let dark = ctx.is_dark();
    let palette = ctx.palette();
    let resume_url = ctx.config.read().resume_url.clone();

    rsx! {
        nav {
            class: "navbar",
            style: "background: {palette.glass};",

            button {
                class: "navbar-brand",
                title: "Home",
                onclick: move |_| ctx.navigate("/"),
                span {
                    class: "navbar-monogram",
                    style: "background: {palette.accent_gradient};",
                    "{PROFILE.monogram}"
                }
                ModeIcon { dark }
                span { class: "navbar-name", "{PROFILE.name}" }
            }

            div { class: "navbar-links",
                for route in Route::nav_routes() {
                    {
                        let path = route.path().unwrap_or("/");
                        let class = if route == current {
                            "nav-link active"
                        } else {
                            "nav-link"
                        };

                        rsx! {
                            button {
                                key: "{path}",
                                class: "{class}",
                                onclick: move |_| ctx.navigate(path),
                                "{route.label()}"
                            }
                        }
                    }
                }
            }

            div { class: "navbar-actions",
                a {
                    class: "resume-button",
                    href: "{resume_url}",
                    download: "",
                    style: "background: {palette.accent_gradient};",
                    "Resume"
                }
                ThemeToggle {}
            }
        }
    }
}
