//! About page: hero scene, summary highlights and call to action.

use std::f64::consts::TAU;

use dioxus::prelude::*;
use folio_core::content::PROFILE;
use folio_core::Palette;

use crate::state::SiteContext;

const HERO_STARS: usize = 18;
const HERO_RAYS: usize = 12;

#[component]
pub fn AboutPage() -> Element {
    let mut ctx = use_context::<SiteContext>();
    let dark = ctx.is_dark();
    let palette = ctx.palette();
    let resume_url = ctx.config.read().resume_url.clone();

    rsx! {
        section { class: "page about-page",
            div { class: "hero",
                if dark {
                    NightScene {}
                } else {
                    DayScene {}
                }

                VertexBadge { palette: *palette }

                h1 {
                    class: "hero-name typing",
                    style: "color: {palette.primary};",
                    "{PROFILE.name}"
                }
                h2 { class: "hero-headline", "{PROFILE.headline}" }
            }

            div {
                class: "glass-card summary-card",
                style: "background: {palette.paper};",
                p { class: "summary-text", "{PROFILE.summary}" }

                div { class: "highlight-row",
                    for (i, highlight) in PROFILE.highlights.iter().enumerate() {
                        {
                            let color = if i % 2 == 0 { palette.primary } else { palette.secondary };

                            rsx! {
                                div { key: "{highlight.title}", class: "highlight-card",
                                    h3 { style: "color: {color};", "{highlight.title}" }
                                    p { "{highlight.body}" }
                                }
                            }
                        }
                    }
                }
            }

            div {
                class: "cta-card",
                style: "background: {palette.body_gradient};",
                h3 { style: "color: {palette.primary};", "{PROFILE.call_to_action}" }
                div { class: "cta-actions",
                    a {
                        class: "cta-primary",
                        href: "{resume_url}",
                        download: "",
                        style: "background: {palette.accent_gradient};",
                        "Download Resume"
                    }
                    button {
                        class: "cta-secondary",
                        style: "border-color: {palette.accent}; color: {palette.accent};",
                        onclick: move |_| ctx.navigate("/contact"),
                        "Contact Me"
                    }
                }
            }
        }
    }
}

/// Moon and a fixed row of stars.
#[component]
fn NightScene() -> Element {
    rsx! {
        svg { class: "hero-scene night", width: "100%", height: "100%",
            view_box: "0 0 1440 320", preserve_aspect_ratio: "xMidYMid slice", fill: "none",
            circle { cx: "1200", cy: "80", r: "48", fill: "#ffe066", opacity: "0.7" }
            circle { cx: "1220", cy: "70", r: "18", fill: "#232946" }
            for i in 0..HERO_STARS {
                {
                    let cx = 80 + i * 70;
                    let cy = 40 + (i % 3) * 30;
                    let r = 2 + (i % 2);
                    let opacity = 0.7 - (i % 3) as f64 * 0.2;

                    rsx! {
                        circle { key: "{i}", cx: "{cx}", cy: "{cy}", r: "{r}", fill: "#fff", opacity: "{opacity:.1}" }
                    }
                }
            }
        }
    }
}

/// Sun with rays and two clouds.
#[component]
fn DayScene() -> Element {
    rsx! {
        svg { class: "hero-scene day", width: "100%", height: "100%",
            view_box: "0 0 1440 320", preserve_aspect_ratio: "xMidYMid slice", fill: "none",
            circle { cx: "220", cy: "80", r: "48", fill: "#FFD600", opacity: "0.7" }
            for i in 0..HERO_RAYS {
                {
                    let angle = i as f64 / HERO_RAYS as f64 * TAU;
                    let x2 = 220.0 + 70.0 * angle.cos();
                    let y2 = 80.0 + 70.0 * angle.sin();

                    rsx! {
                        line { key: "{i}", x1: "220", y1: "80", x2: "{x2:.1}", y2: "{y2:.1}",
                            stroke: "#FF9800", stroke_width: "3", opacity: "0.18" }
                    }
                }
            }
            ellipse { class: "cloud", cx: "400", cy: "120", rx: "60", ry: "18", fill: "#fff", opacity: "0.18" }
            ellipse { class: "cloud", cx: "470", cy: "110", rx: "30", ry: "10", fill: "#fff", opacity: "0.12" }
        }
    }
}

/// Pulsing triangle above the name.
#[component]
fn VertexBadge(palette: Palette) -> Element {
    rsx! {
        svg { class: "vertex-badge", width: "160", height: "160", view_box: "0 0 160 160", fill: "none",
            polygon {
                class: "vertex-shape",
                points: "80,20 140,140 20,140",
                fill: "{palette.primary}",
                style: "filter: drop-shadow(0 0 8px {palette.primary});",
            }
        }
    }
}
