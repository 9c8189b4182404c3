//! Small inline SVG icons.

use dioxus::prelude::*;
use folio_core::content::SocialLinks;

/// Ray segments of the sun glyph, in an 18x18 box.
const SUN_GLYPH_RAYS: [(f64, f64, f64, f64); 8] = [
    (9.0, 0.0, 9.0, 4.0),
    (9.0, 14.0, 9.0, 18.0),
    (0.0, 9.0, 4.0, 9.0),
    (14.0, 9.0, 18.0, 9.0),
    (3.0, 3.0, 5.5, 5.5),
    (12.5, 12.5, 15.0, 15.0),
    (3.0, 15.0, 5.5, 12.5),
    (12.5, 5.5, 15.0, 3.0),
];

/// Moon in dark mode, sun in light mode.
#[component]
pub fn ModeIcon(dark: bool, #[props(default = 18)] size: u32) -> Element {
    rsx! {
        svg {
            class: "mode-icon",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 18 18",
            if dark {
                circle { cx: "9", cy: "9", r: "7", fill: "#ffe066", opacity: "0.7" }
                circle { cx: "12", cy: "7", r: "2.5", fill: "#232946" }
            } else {
                circle { cx: "9", cy: "9", r: "7", fill: "#FFD600", opacity: "0.7" }
                g { stroke: "#FF9800", stroke_width: "2",
                    for (x1, y1, x2, y2) in SUN_GLYPH_RAYS {
                        line { x1: "{x1}", y1: "{y1}", x2: "{x2}", y2: "{y2}" }
                    }
                }
            }
        }
    }
}

#[component]
fn LinkedInIcon() -> Element {
    rsx! {
        svg { width: "22", height: "22", view_box: "0 0 24 24", fill: "currentColor",
            path { d: "M20.45 20.45h-3.56v-5.57c0-1.33-.02-3.04-1.85-3.04-1.85 0-2.14 1.45-2.14 2.94v5.67H9.35V9h3.41v1.56h.05c.48-.9 1.64-1.85 3.37-1.85 3.6 0 4.27 2.37 4.27 5.46v6.28zM5.34 7.43a2.06 2.06 0 1 1 0-4.13 2.06 2.06 0 0 1 0 4.13zM7.12 20.45H3.56V9h3.56v11.45zM22.22 0H1.77C.79 0 0 .77 0 1.73v20.54C0 23.23.79 24 1.77 24h20.45c.98 0 1.78-.77 1.78-1.73V1.73C24 .77 23.2 0 22.22 0z" }
        }
    }
}

#[component]
fn GitHubIcon() -> Element {
    rsx! {
        svg { width: "22", height: "22", view_box: "0 0 24 24", fill: "currentColor",
            path { d: "M12 .3a12 12 0 0 0-3.8 23.4c.6.1.8-.3.8-.6v-2c-3.3.7-4-1.6-4-1.6-.6-1.4-1.4-1.8-1.4-1.8-1-.7.1-.7.1-.7 1.2.1 1.8 1.2 1.8 1.2 1 1.8 2.8 1.3 3.5 1 0-.8.4-1.3.7-1.6-2.7-.3-5.5-1.3-5.5-6 0-1.2.5-2.3 1.3-3.1-.2-.4-.6-1.6 0-3.2 0 0 1-.3 3.4 1.2a11.5 11.5 0 0 1 6 0c2.3-1.5 3.3-1.2 3.3-1.2.6 1.6.2 2.8.1 3.2.8.8 1.3 1.9 1.3 3.2 0 4.6-2.8 5.6-5.5 5.9.5.4.9 1.1.9 2.2v3.3c0 .3.2.7.8.6A12 12 0 0 0 12 .3" }
        }
    }
}

#[component]
fn MailIcon() -> Element {
    rsx! {
        svg { width: "22", height: "22", view_box: "0 0 24 24", fill: "currentColor",
            path { d: "M20 4H4c-1.1 0-2 .9-2 2v12c0 1.1.9 2 2 2h16c1.1 0 2-.9 2-2V6c0-1.1-.9-2-2-2zm0 4-8 5-8-5V6l8 5 8-5v2z" }
        }
    }
}

/// LinkedIn, GitHub and email links. Used by the footer and the contact page.
#[component]
pub fn SocialLinkRow(links: SocialLinks, #[props(default)] large: bool) -> Element {
    let class = if large { "social-links social-links-large" } else { "social-links" };

    rsx! {
        div { class: "{class}",
            a {
                class: "social-link",
                href: "{links.linkedin}",
                target: "_blank",
                rel: "noopener",
                title: "LinkedIn",
                LinkedInIcon {}
            }
            a {
                class: "social-link",
                href: "{links.github}",
                target: "_blank",
                rel: "noopener",
                title: "GitHub",
                GitHubIcon {}
            }
            a {
                class: "social-link",
                href: "{links.mailto()}",
                title: "Email",
                MailIcon {}
            }
        }
    }
}
