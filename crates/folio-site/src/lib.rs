//! Folio: a personal portfolio as a Dioxus desktop app.
//!
//! Pages, layout and the animated background live in [`components`];
//! renderer-free logic comes from `folio_core`.

pub mod components;
pub mod config;
pub mod state;
pub mod theme;

/// Site stylesheet, injected into the window head at launch.
pub const SITE_CSS: &str = include_str!("style.css");

/// Web font used for headings and body text.
pub const FONT_LINK: &str = r#"<link rel="stylesheet" href="https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;600;700&display=swap">"#;
