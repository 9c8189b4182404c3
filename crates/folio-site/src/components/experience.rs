//! Experience page: a vertical timeline.

use dioxus::prelude::*;
use folio_core::content::EXPERIENCE;

use crate::state::SiteContext;

use super::page_title::PageTitle;

#[component]
pub fn ExperiencePage() -> Element {
    let ctx = use_context::<SiteContext>();
    let palette = ctx.palette();

    rsx! {
        section { class: "page experience-page",
            PageTitle { text: "Experience" }

            ol { class: "timeline",
                for item in EXPERIENCE.iter() {
                    li { key: "{item.role}-{item.company}", class: "timeline-item",
                        span {
                            class: "timeline-dot",
                            style: "background: {palette.accent}; box-shadow: 0 0 12px {palette.accent};",
                        }
                        div {
                            class: "glass-card timeline-card",
                            style: "background: {palette.paper};",
                            div { class: "timeline-period", style: "color: {palette.secondary};",
                                "{item.period}"
                            }
                            h3 { class: "timeline-role", style: "color: {palette.primary};", "{item.role}" }
                            div { class: "timeline-company", "{item.company}" }
                            p { class: "timeline-description", "{item.description}" }
                        }
                    }
                }
            }
        }
    }
}
