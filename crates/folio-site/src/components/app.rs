//! Root app component: context, layout and page selection.

use dioxus::prelude::*;
use folio_core::{LogSink, Route};

use crate::config::launch_config;
use crate::state::{SinkHandle, SiteContext};
use crate::theme::ThemedRoot;

use super::about::AboutPage;
use super::background::ParticleBackground;
use super::contact::ContactPage;
use super::experience::ExperiencePage;
use super::footer::Footer;
use super::navbar::Navbar;
use super::not_found::NotFoundPage;
use super::projects::ProjectsPage;
use super::skills::SkillsPage;

/// Root application component.
#[component]
pub fn App() -> Element {
    use_context_provider(|| SiteContext::new(launch_config()));
    use_context_provider(|| SinkHandle::new(LogSink));

    rsx! {
        ThemedRoot {
            ParticleBackground {}
            div { class: "site-shell",
                Navbar {}
                main { class: "site-main",
                    RoutedPage {}
                }
                Footer {}
            }
        }
    }
}

/// Renders exactly one page for the current route.
#[component]
fn RoutedPage() -> Element {
    let ctx = use_context::<SiteContext>();
    let route = ctx.route();

    match route {
        Route::About => rsx! { AboutPage {} },
        Route::Skills => rsx! { SkillsPage {} },
        Route::Projects => rsx! { ProjectsPage {} },
        Route::Experience => rsx! { ExperiencePage {} },
        Route::Contact => rsx! { ContactPage {} },
        Route::NotFound => rsx! { NotFoundPage {} },
    }
}
