//! One-shot particle burst drawn on a throwaway canvas.

use crate::error::{report, LandingError};
use crate::geometry::Point;
use crate::timer::{BrowserScheduler, Scheduler};
use std::cell::RefCell;
use std::f64::consts::{PI, TAU};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Downward acceleration in px/ms²
const GRAVITY: f64 = 0.0012;
/// Velocity kept per 16 ms frame
const DRAG_PER_FRAME: f64 = 0.985;
const FRAME_MS: f64 = 16.0;
/// Share of the burst spent fading out
const FADE_SHARE: f64 = 0.3;
const PALETTE: [u16; 6] = [8, 38, 152, 199, 265, 330];

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub angle: f64,
    pub spin: f64,
    pub size: f64,
    pub hue: u16,
}

impl Particle {
    /// Launch from `origin` in an upward fan. `random` yields values in `0..1`.
    pub fn launch(origin: Point, mut random: impl FnMut() -> f64) -> Self {
        let heading = -PI / 2.0 + (random() - 0.5) * PI * 1.2;
        let speed = 0.25 + random() * 0.55;
        let pick = (random() * PALETTE.len() as f64) as usize;
        Self {
            x: origin.x,
            y: origin.y,
            vx: heading.cos() * speed,
            vy: heading.sin() * speed,
            angle: random() * TAU,
            spin: (random() - 0.5) * 0.02,
            size: 5.0 + random() * 5.0,
            hue: PALETTE[pick.min(PALETTE.len() - 1)],
        }
    }

    pub fn step(&mut self, dt_ms: f64) {
        if dt_ms <= 0.0 {
            return;
        }
        self.vy += GRAVITY * dt_ms;
        let drag = DRAG_PER_FRAME.powf(dt_ms / FRAME_MS);
        self.vx *= drag;
        self.vy *= drag;
        self.x += self.vx * dt_ms;
        self.y += self.vy * dt_ms;
        self.angle += self.spin * dt_ms;
    }

    pub fn color(&self, alpha: f64) -> String {
        format!("hsla({}, 90%, 60%, {alpha:.3})", self.hue)
    }
}

#[derive(Debug, Clone)]
pub struct Burst {
    particles: Vec<Particle>,
    elapsed_ms: f64,
    duration_ms: f64,
}

impl Burst {
    pub fn new(
        origin: Point,
        count: usize,
        duration_ms: f64,
        mut random: impl FnMut() -> f64,
    ) -> Self {
        Self {
            particles: (0..count)
                .map(|_| Particle::launch(origin, &mut random))
                .collect(),
            elapsed_ms: 0.0,
            duration_ms,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn step(&mut self, dt_ms: f64) {
        let dt_ms = dt_ms.max(0.0);
        self.elapsed_ms += dt_ms;
        for particle in &mut self.particles {
            particle.step(dt_ms);
        }
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed_ms >= self.duration_ms
    }

    /// Opacity: fully opaque, then a linear fade over the last part of the burst.
    pub fn alpha(&self) -> f64 {
        if self.duration_ms <= 0.0 {
            return 0.0;
        }
        let fade_start = self.duration_ms * (1.0 - FADE_SHARE);
        if self.elapsed_ms <= fade_start {
            return 1.0;
        }
        ((self.duration_ms - self.elapsed_ms) / (self.duration_ms - fade_start)).clamp(0.0, 1.0)
    }
}

/// Fire a burst at `origin`. Failures only cost the effect.
pub fn burst(origin: Point, count: usize, duration_ms: f64) {
    report("confetti", launch(origin, count, duration_ms));
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

fn launch(origin: Point, count: usize, duration_ms: f64) -> Result<(), LandingError> {
    let window = web_sys::window().ok_or_else(|| LandingError::Dom("no window".into()))?;
    let document = window
        .document()
        .ok_or_else(|| LandingError::Dom("no document".into()))?;
    let body = document
        .body()
        .ok_or_else(|| LandingError::Dom("no body".into()))?;

    let canvas: HtmlCanvasElement = document
        .create_element("canvas")?
        .dyn_into()
        .map_err(|_| LandingError::Dom("created element is not a canvas".into()))?;
    let width = window.inner_width()?.as_f64().unwrap_or(0.0);
    let height = window.inner_height()?.as_f64().unwrap_or(0.0);
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);
    canvas.set_class_name("confetti-canvas");
    canvas.set_attribute("aria-hidden", "true")?;
    canvas.set_attribute(
        "style",
        "position:fixed;inset:0;pointer-events:none;z-index:9999",
    )?;

    // Only attach once drawing is possible, so a failed lookup leaves no overlay behind
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| LandingError::Dom("2d context unavailable".into()))?
        .dyn_into()
        .map_err(|_| LandingError::Dom("unexpected context type".into()))?;
    body.append_child(&canvas)?;

    let mut state = Burst::new(origin, count, duration_ms, js_sys::Math::random);
    let mut last_frame: Option<f64> = None;

    let frame: FrameCallback = Rc::new(RefCell::new(None));
    let next = frame.clone();
    *frame.borrow_mut() = Some(Closure::wrap(Box::new(move |now: f64| {
        let dt = last_frame.map_or(0.0, |t| now - t);
        last_frame = Some(now);
        state.step(dt);
        draw(&ctx, &state, width, height);

        if state.is_finished() {
            canvas.remove();
            // A closure cannot be dropped while it runs; retire it on the next tick
            let retired = next.borrow_mut().take();
            BrowserScheduler.schedule(0, Box::new(move || drop(retired)));
            return;
        }
        request_frame(&next);
    }) as Box<dyn FnMut(f64)>));

    request_frame(&frame);
    Ok(())
}

fn request_frame(frame: &FrameCallback) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Some(callback) = frame.borrow().as_ref() {
        let _ = window.request_animation_frame(callback.as_ref().unchecked_ref());
    }
}

fn draw(ctx: &CanvasRenderingContext2d, burst: &Burst, width: f64, height: f64) {
    ctx.clear_rect(0.0, 0.0, width, height);
    let alpha = burst.alpha();
    for p in burst.particles() {
        ctx.save();
        let _ = ctx.translate(p.x, p.y);
        let _ = ctx.rotate(p.angle);
        ctx.set_fill_style_str(&p.color(alpha));
        ctx.fill_rect(-p.size / 2.0, -p.size / 4.0, p.size, p.size / 2.0);
        ctx.restore();
    }
}
