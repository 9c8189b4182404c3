//! Projects page.

use dioxus::prelude::*;
use folio_core::content::{Project, PROJECTS};

use crate::state::SiteContext;

use super::page_title::PageTitle;

#[component]
pub fn ProjectsPage() -> Element {
    rsx! {
        section { class: "page projects-page",
            PageTitle { text: "Projects" }
            div { class: "project-grid",
                for project in PROJECTS.iter() {
                    ProjectCard { key: "{project.title}", project: *project }
                }
            }
        }
    }
}

/// One project, with links only for the ones that are published.
#[component]
fn ProjectCard(project: Project) -> Element {
    let ctx = use_context::<SiteContext>();
    let palette = ctx.palette();

    rsx! {
        article {
            class: "glass-card project-card",
            style: "background: {palette.paper};",
            h3 { class: "project-title", style: "color: {palette.primary};", "{project.title}" }
            p { class: "project-description", "{project.description}" }

            if project.github_link().is_some() || project.demo_link().is_some() {
                div { class: "project-links",
                    if let Some(url) = project.github_link() {
                        a { class: "project-link", href: "{url}", target: "_blank", rel: "noopener",
                            "GitHub"
                        }
                    }
                    if let Some(url) = project.demo_link() {
                        a { class: "project-link", href: "{url}", target: "_blank", rel: "noopener",
                            "Live Demo"
                        }
                    }
                }
            }
        }
    }
}
