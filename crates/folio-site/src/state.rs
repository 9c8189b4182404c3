//! Site-wide state provided through Dioxus context.

use std::sync::Arc;

use dioxus::prelude::*;
use folio_core::{parallax_offset, ContactSink, Navigator, Palette, Route, ThemeMode, ThemeState, Viewport};

use crate::config::SiteConfig;

/// Shared state provided by the root component.
///
/// Every page reads the theme from here; only the navigation bar toggles it.
#[derive(Clone, Copy)]
pub struct SiteContext {
    pub theme: Signal<ThemeState>,
    pub navigator: Signal<Navigator>,
    pub config: Signal<SiteConfig>,
    /// Size of the window; pointer coordinates are measured against it.
    pub viewport: Signal<Viewport>,
    /// Background offset driven by the pointer.
    pub parallax: Signal<(f64, f64)>,
}

impl SiteContext {
    pub fn new(config: SiteConfig) -> Self {
        let viewport = Viewport::new(config.window.width, config.window.height);
        Self {
            theme: Signal::new(ThemeState::new(config.theme)),
            navigator: Signal::new(Navigator::new(&config.initial_route)),
            viewport: Signal::new(viewport),
            parallax: Signal::new((0.0, 0.0)),
            config: Signal::new(config),
        }
    }

    pub fn mode(&self) -> ThemeMode {
        self.theme.read().mode()
    }

    pub fn is_dark(&self) -> bool {
        self.mode().is_dark()
    }

    pub fn palette(&self) -> &'static Palette {
        self.mode().palette()
    }

    pub fn toggle_theme(&mut self) {
        self.theme.write().toggle();
    }

    pub fn route(&self) -> Route {
        self.navigator.read().route()
    }

    pub fn navigate(&mut self, path: &str) {
        self.navigator.write().navigate(path);
    }

    pub fn back(&mut self) {
        self.navigator.write().back();
    }

    pub fn window_resized(&mut self, width: f64, height: f64) {
        let window = Viewport::new(width, height);
        if !window.is_empty() && *self.viewport.peek() != window {
            self.viewport.set(window);
        }
    }

    pub fn pointer_moved(&mut self, x: f64, y: f64) {
        let viewport = *self.viewport.peek();
        self.parallax.set(parallax_offset(viewport, x, y));
    }
}

/// Shared handle to the contact delivery backend.
///
/// Equality is by pointer identity so it can be passed as a prop.
#[derive(Clone)]
pub struct SinkHandle(pub Arc<dyn ContactSink>);

impl SinkHandle {
    pub fn new(sink: impl ContactSink + 'static) -> Self {
        Self(Arc::new(sink))
    }
}

impl PartialEq for SinkHandle {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}
