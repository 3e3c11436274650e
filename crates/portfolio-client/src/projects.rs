use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;

use portfolio_common::backdrop::{Mounted, ProjectFieldBackdrop};
use portfolio_common::content::Portfolio;
use portfolio_common::interaction::{HoverTracker, MediaCommand};
use portfolio_common::particles::{gradient_rotation, FloatingField, Projected, FIELD_PARTICLE_COUNT};
use portfolio_common::viewport::{CursorPosition, Viewport};
use rand::Rng;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlElement, HtmlMediaElement, Window};

use crate::dom::{self, DomListener};
use crate::runtime::MotionRuntime;

pub struct ProjectsMotion {
    window: Window,
    backdrop: Mounted<ProjectFieldBackdrop>,
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
    gradient: Option<HtmlElement>,
    _hover_listeners: Vec<DomListener>,
}

impl ProjectsMotion {
    pub fn mount<R: Rng>(
        runtime: &MotionRuntime,
        window: &Window,
        document: &Document,
        rng: &mut R,
    ) -> Result<Option<Self>, JsValue> {
        let Some(canvas) = document.get_element_by_id("project-field") else {
            return Ok(None);
        };
        let canvas: HtmlCanvasElement = canvas.dyn_into()?;
        let context: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d canvas context unavailable"))?
            .dyn_into()?;
        let gradient = document
            .query_selector("[data-field-gradient]")?
            .map(|el| el.dyn_into::<HtmlElement>())
            .transpose()?;

        let field = FloatingField::generate(FIELD_PARTICLE_COUNT, rng);
        let backdrop = Mounted::mount(
            runtime.registry(),
            ProjectFieldBackdrop::new(field, Viewport::default()),
        );

        Ok(Some(Self {
            window: window.clone(),
            backdrop,
            canvas,
            context,
            gradient,
            _hover_listeners: hover_playback(document)?,
        }))
    }

    pub fn frame(&mut self, dt: f64) -> Result<(), JsValue> {
        let rect = self.canvas.get_bounding_client_rect();
        let viewport = Viewport::new(rect.width(), rect.height());
        let resized = self.backdrop.with(|field| {
            field.set_bounds(CursorPosition::new(rect.left(), rect.top()), viewport);
            field.frame(dt);
            field.take_resized()
        });

        let ratio = self.window.device_pixel_ratio();
        let width = (viewport.width * ratio).round() as u32;
        let height = (viewport.height * ratio).round() as u32;
        if resized || self.canvas.width() != width || self.canvas.height() != height {
            self.canvas.set_width(width);
            self.canvas.set_height(height);
        }

        if let Some(gradient) = &self.gradient {
            let turn = self.backdrop.with(|field| gradient_rotation(field.elapsed()));
            gradient
                .style()
                .set_property("--gradient-turn", &format!("{turn:.3}rad"))?;
        }

        let on_screen = rect.bottom() > 0.0 && rect.top() < dom::window_viewport(&self.window).height;
        if on_screen && !viewport.is_empty() {
            self.paint(viewport, ratio)?;
        }
        Ok(())
    }

    fn paint(&self, viewport: Viewport, ratio: f64) -> Result<(), JsValue> {
        let ctx = &self.context;
        ctx.set_transform(ratio, 0.0, 0.0, ratio, 0.0, 0.0)?;
        ctx.clear_rect(0.0, 0.0, viewport.width, viewport.height);

        self.backdrop.with(|backdrop| {
            let field = backdrop.field();
            let mut visible: Vec<(usize, Projected)> = (0..field.particles.len())
                .filter_map(|i| field.project(i, viewport).map(|p| (i, p)))
                .collect();
            // Far to near.
            visible.sort_by(|a, b| b.1.depth.total_cmp(&a.1.depth));

            for (i, projected) in visible {
                let particle = &field.particles[i];
                let spin = particle.rotation.0 + particle.rotation.1;
                let points = outline(particle.kind.outline_sides(), &projected, spin);
                let Some(&(x0, y0)) = points.first() else {
                    continue;
                };

                ctx.begin_path();
                ctx.move_to(x0, y0);
                for &(x, y) in &points[1..] {
                    ctx.line_to(x, y);
                }
                ctx.close_path();

                ctx.set_global_alpha(projected.opacity());
                ctx.set_shadow_color(&particle.glow());
                ctx.set_shadow_blur(projected.radius);
                ctx.set_fill_style_str(&particle.color());
                ctx.fill();
                ctx.set_shadow_blur(0.0);
                ctx.set_stroke_style_str("rgba(255, 255, 255, 0.35)");
                ctx.stroke();
            }
        });
        ctx.set_global_alpha(1.0);
        Ok(())
    }
}

/// Screen-space outline of a polyhedron silhouette as a regular polygon.
fn outline(sides: usize, at: &Projected, spin: f64) -> Vec<(f64, f64)> {
    if sides < 3 {
        return Vec::new();
    }
    (0..sides)
        .map(|k| {
            let theta = spin + k as f64 * TAU / sides as f64;
            (at.x + at.radius * theta.cos(), at.y + at.radius * theta.sin())
        })
        .collect()
}

/// Hover listeners for every project card; videos play on enter and rewind
/// on leave.
fn hover_playback(document: &Document) -> Result<Vec<DomListener>, JsValue> {
    let tracker = Rc::new(RefCell::new(HoverTracker::new(
        Portfolio::get().projects.iter().map(|p| p.media),
    )));
    let mut listeners = Vec::new();

    for card in dom::elements(document.query_selector_all("[data-project]")?) {
        let Some(index) = dom::index_attr(&card, "data-project") else {
            continue;
        };
        let video = card
            .query_selector("[data-project-video]")?
            .and_then(|el| el.dyn_into::<HtmlMediaElement>().ok());

        let enter = {
            let tracker = Rc::clone(&tracker);
            let video = video.clone();
            DomListener::new(card.as_ref(), "mouseenter", move |_| {
                let command = tracker.borrow_mut().pointer_enter(index);
                apply(video.as_ref(), command);
            })?
        };
        let leave = {
            let tracker = Rc::clone(&tracker);
            DomListener::new(card.as_ref(), "mouseleave", move |_| {
                let command = tracker.borrow_mut().pointer_leave(index);
                apply(video.as_ref(), command);
            })?
        };
        listeners.push(enter);
        listeners.push(leave);
    }
    Ok(listeners)
}

fn apply(video: Option<&HtmlMediaElement>, command: Option<MediaCommand>) {
    let (Some(video), Some(command)) = (video, command) else {
        return;
    };
    match command {
        MediaCommand::Play => {
            // Rejected when the browser blocks playback; the poster frame stays.
            let _ = video.play();
        }
        MediaCommand::PauseAndRewind => {
            let _ = video.pause();
            video.set_current_time(0.0);
        }
    }
}
