//! Full-viewport confetti overlay.
//!
//! ARCHITECTURE
//! ============
//! Mounted once at the app root, above the router. Each bump of
//! `CelebrationState::run_seq` starts a fresh `ConfettiRun` driven by a
//! `spawn_local` loop; a newer run or unmounting the app ends the loop.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::state::celebration::CelebrationState;

#[cfg(feature = "hydrate")]
use std::sync::Arc;
#[cfg(feature = "hydrate")]
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;

#[cfg(feature = "hydrate")]
use crate::util::confetti::ConfettiRun;
#[cfg(feature = "hydrate")]
use crate::util::viewport::current_viewport;

/// Frame interval for the particle loop (~60 fps).
#[cfg(feature = "hydrate")]
const FRAME_MS: u64 = 16;

#[component]
pub fn ConfettiCanvas() -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    #[cfg(feature = "hydrate")]
    {
        let celebration = expect_context::<RwSignal<CelebrationState>>();
        let alive = Arc::new(AtomicBool::new(true));
        let current_run = Arc::new(AtomicU64::new(0));

        let alive_effect = alive.clone();
        Effect::new(move || {
            let state = celebration.get();
            if !state.has_started() || current_run.load(Ordering::Relaxed) == state.run_seq {
                return;
            }
            current_run.store(state.run_seq, Ordering::Relaxed);
            leptos::task::spawn_local(run_confetti(
                canvas_ref,
                state.run_seq,
                current_run.clone(),
                alive_effect.clone(),
            ));
        });
        on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }
    view! {
        <canvas
            class="confetti-canvas"
            node_ref=canvas_ref
            aria-hidden="true"
        ></canvas>
    }
}

#[cfg(feature = "hydrate")]
async fn run_confetti(
    canvas_ref: NodeRef<leptos::html::Canvas>,
    run_seq: u64,
    current_run: Arc<AtomicU64>,
    alive: Arc<AtomicBool>,
) {
    let Some(canvas) = canvas_ref.get_untracked() else {
        return;
    };
    let Some(ctx) = context_2d(&canvas) else {
        log::warn!("confetti canvas has no 2d context");
        return;
    };

    log::info!("confetti run {run_seq} started");
    let mut run = ConfettiRun::default();
    let mut sampler = js_sys::Math::random;
    let started_ms = js_sys::Date::now();

    let (width, height) = loop {
        if !alive.load(Ordering::Relaxed) || current_run.load(Ordering::Relaxed) != run_seq {
            return;
        }
        let (width, height) = fit_to_viewport(&canvas);
        let elapsed_ms = (js_sys::Date::now() - started_ms).max(0.0);
        run.tick(elapsed_ms, width, height, &mut sampler);
        paint(&ctx, &run, width, height);
        if run.is_finished(elapsed_ms) {
            break (width, height);
        }
        gloo_timers::future::sleep(std::time::Duration::from_millis(FRAME_MS)).await;
    };

    ctx.clear_rect(0.0, 0.0, width, height);
    log::info!("confetti run {run_seq} finished");
}

#[cfg(feature = "hydrate")]
fn context_2d(canvas: &web_sys::HtmlCanvasElement) -> Option<web_sys::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()?
        .dyn_into::<web_sys::CanvasRenderingContext2d>()
        .ok()
}

/// Match the backing store to the viewport and return its size in px.
#[cfg(feature = "hydrate")]
fn fit_to_viewport(canvas: &web_sys::HtmlCanvasElement) -> (f64, f64) {
    let Some(viewport) = current_viewport() else {
        return (f64::from(canvas.width()), f64::from(canvas.height()));
    };
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    {
        let width = viewport.width.round().max(1.0) as u32;
        let height = viewport.height.round().max(1.0) as u32;
        if canvas.width() != width {
            canvas.set_width(width);
        }
        if canvas.height() != height {
            canvas.set_height(height);
        }
    }
    (f64::from(canvas.width()), f64::from(canvas.height()))
}

#[cfg(feature = "hydrate")]
fn paint(ctx: &web_sys::CanvasRenderingContext2d, run: &ConfettiRun, width: f64, height: f64) {
    ctx.clear_rect(0.0, 0.0, width, height);
    for particle in run.particles() {
        let [(x0, y0), (x1, y1), (x2, y2), (x3, y3)] = particle.quad();
        ctx.set_global_alpha(particle.opacity());
        ctx.set_fill_style_str(particle.color);
        ctx.begin_path();
        ctx.move_to(x0, y0);
        ctx.line_to(x1, y1);
        ctx.line_to(x2, y2);
        ctx.line_to(x3, y3);
        ctx.close_path();
        ctx.fill();
    }
    ctx.set_global_alpha(1.0);
}
