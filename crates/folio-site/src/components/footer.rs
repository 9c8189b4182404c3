//! Site footer.

use chrono::Datelike;
use dioxus::prelude::*;
use folio_core::content::PROFILE;

use crate::state::SiteContext;

use super::icons::{ModeIcon, SocialLinkRow};

#[component]
pub fn Footer() -> Element {
    let ctx = use_context::<SiteContext>();
    let dark = ctx.is_dark();
    let palette = ctx.palette();
    let year = chrono::Local::now().year();

    rsx! {
        footer {
            class: "footer",
            style: "background: {palette.glass}; color: {palette.text_secondary};",
            div { class: "footer-brand",
                ModeIcon { dark, size: 16 }
                span { "{PROFILE.name}" }
            }
            SocialLinkRow { links: PROFILE.links }
            div { class: "footer-copyright",
                "© {year} {PROFILE.name}. All rights reserved."
            }
        }
    }
}
