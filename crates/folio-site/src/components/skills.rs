//! Skills page: grouped technology badges.

use dioxus::prelude::*;
use folio_core::content::SKILL_GROUPS;

use crate::state::SiteContext;

use super::page_title::PageTitle;

#[component]
pub fn SkillsPage() -> Element {
    let ctx = use_context::<SiteContext>();
    let palette = ctx.palette();

    rsx! {
        section { class: "page skills-page",
            PageTitle { text: "Skills" }

            div { class: "skill-groups",
                for (i, group) in SKILL_GROUPS.iter().enumerate() {
                    div {
                        key: "{group.label}",
                        class: "glass-card skill-group",
                        style: "background: {palette.paper}; animation-delay: {i * 120}ms;",

                        h3 { class: "skill-group-label", style: "color: {palette.secondary};",
                            "{group.label}"
                        }
                        div { class: "skill-badges",
                            for skill in group.skills.iter() {
                                span {
                                    key: "{skill.name}",
                                    class: "skill-badge",
                                    title: "{skill.name}",
                                    style: "border-color: {skill.color}; box-shadow: 0 0 10px {skill.color}55;",
                                    span { class: "skill-dot", style: "background: {skill.color};" }
                                    "{skill.name}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
