//! Renderer-free logic for the Folio portfolio site.
//!
//! Everything here can be exercised without a window or a webview:
//! - [`theme`]: dark/light mode state and the color palettes for each mode
//! - [`routes`]: the ordered route table and a small navigator with history
//! - [`contact`]: contact form state, validation and delivery
//! - [`particles`]: the star/sun background simulation and parallax mapping
//! - [`frame_loop`]: a cancellable frame ticker bound to a drop guard
//! - [`content`]: the static portfolio content rendered by the pages

pub mod contact;
pub mod content;
pub mod error;
pub mod frame_loop;
pub mod particles;
pub mod routes;
pub mod theme;

pub use contact::{
    validate, AckTimer, Acknowledgment, ContactForm, ContactSink, ContactValues, Field, FieldError,
    FieldErrors, FormPhase, LogSink, ACK_DURATION, ACK_MESSAGE, MIN_MESSAGE_LEN,
};
pub use error::{ContactError, ParseThemeError};
pub use frame_loop::{frame_loop, FrameLoopGuard, FrameTick, FrameTicker, FRAME_INTERVAL};
pub use particles::{
    layer_viewport, parallax_offset, Particle, ParticleField, ParticleKind, Ray, Sprite, Viewport,
    LAYER_BLEED,
};
pub use routes::{normalize_path, Navigator, Route, ROUTE_TABLE};
pub use theme::{Palette, ThemeMode, ThemeState};
