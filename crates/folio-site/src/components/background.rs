//! Full-viewport animated background: stars at night, suns by day.

use dioxus::prelude::*;
use folio_core::{
    frame_loop, layer_viewport, FrameLoopGuard, ParticleField, ParticleKind, Viewport, LAYER_BLEED,
};

use crate::state::SiteContext;

/// Animated particle layer behind all content.
///
/// The field is reseeded whenever the theme changes. The frame loop is
/// owned through a [`FrameLoopGuard`]: replacing the guard (theme change)
/// or dropping it (unmount) stops the previous loop.
#[component]
pub fn ParticleBackground() -> Element {
    let ctx = use_context::<SiteContext>();
    let window = ctx.viewport;
    let animate = ctx.config.read().animate;

    let mut field = use_signal(|| {
        ParticleField::seed(ctx.mode(), layer_viewport(*window.peek()), &mut rand::rng())
    });
    let mut elapsed_ms = use_signal(|| 0.0_f64);
    // Dropped with the component, which stops the loop.
    let mut frame_guard = use_signal(|| None::<FrameLoopGuard>);

    use_effect(move || {
        let mode = ctx.theme.read().mode();
        let layer = layer_viewport(*window.peek());
        field.set(ParticleField::seed(mode, layer, &mut rand::rng()));

        if !animate {
            return;
        }

        let (guard, ticker) = frame_loop();
        // Replacing the old guard cancels the previous loop.
        frame_guard.set(Some(guard));
        spawn(async move {
            ticker
                .run(move |tick| {
                    field.write().step();
                    elapsed_ms.set(tick.elapsed_ms());
                })
                .await;
        });
    });

    // Window resizes move the wrap bounds; an empty field is seeded late.
    use_effect(move || {
        let layer = layer_viewport(*window.read());
        if layer.is_empty() || field.peek().viewport() == layer {
            return;
        }
        if field.peek().is_empty() {
            let mode = ctx.theme.peek().mode();
            field.set(ParticleField::seed(mode, layer, &mut rand::rng()));
        } else {
            field.write().resize(layer);
        }
    });

    let palette = ctx.palette();
    let (offset_x, offset_y) = *ctx.parallax.read();
    let field_read = field.read();
    let kind = field_read.kind();
    let sprites = field_read.sprites(*elapsed_ms.read());
    let Viewport { width, height } = field_read.viewport();

    rsx! {
        div {
            class: "particle-layer",
            style: "inset: -{LAYER_BLEED}px; background-color: {palette.sky}; transform: translate({offset_x}px, {offset_y}px);",

            svg {
                class: "particle-svg",
                width: "100%",
                height: "100%",
                view_box: "0 0 {width} {height}",
                preserve_aspect_ratio: "none",

                for (i, sprite) in sprites.iter().enumerate() {
                    {
                        let glow = format!("drop-shadow(0 0 {:.1}px {})", sprite.glow, sprite.color);
                        let class = match kind {
                            ParticleKind::Star => "particle star",
                            ParticleKind::Sun => "particle sun",
                        };

                        rsx! {
                            g { key: "{i}", class: "{class}",
                                for ray in sprite.rays.iter() {
                                    line {
                                        x1: "{sprite.x}",
                                        y1: "{sprite.y}",
                                        x2: "{ray.x2}",
                                        y2: "{ray.y2}",
                                        stroke: "{sprite.color}",
                                        stroke_width: "2",
                                        opacity: "0.18",
                                    }
                                }
                                circle {
                                    cx: "{sprite.x}",
                                    cy: "{sprite.y}",
                                    r: "{sprite.radius}",
                                    fill: "{sprite.color}",
                                    opacity: "{sprite.opacity}",
                                    style: "filter: {glow};",
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
