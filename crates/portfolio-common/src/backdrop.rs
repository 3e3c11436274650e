/// Decorative backgrounds and their listener lifetimes.
///
/// A backdrop is mounted against a [`ListenerRegistry`]; the returned
/// [`Mounted`] owns the listener handles. Dropping it unmounts the backdrop
/// and removes every listener it registered.
use std::cell::RefCell;
use std::rc::Rc;

use tracing::debug;

use crate::listeners::{EventKind, ListenerHandle, ListenerRegistry, WindowEvent};
use crate::motion::{SpringConfig, SpringFollower};
use crate::particles::FloatingField;
use crate::viewport::{CursorPosition, Viewport};

pub trait Backdrop: 'static {
    const NAME: &'static str;

    fn listens_to(&self) -> &'static [EventKind];

    fn handle(&mut self, event: &WindowEvent);
}

pub struct Mounted<B: Backdrop> {
    state: Rc<RefCell<B>>,
    _listeners: Vec<ListenerHandle>,
}

impl<B: Backdrop> Mounted<B> {
    pub fn mount(registry: &ListenerRegistry, backdrop: B) -> Self {
        let kinds = backdrop.listens_to();
        let state = Rc::new(RefCell::new(backdrop));
        let listeners: Vec<ListenerHandle> = kinds
            .iter()
            .map(|&kind| {
                let weak = Rc::downgrade(&state);
                registry.listen(kind, move |event| {
                    let Some(state) = weak.upgrade() else {
                        return;
                    };
                    // Skip events that arrive while the host is painting.
                    if let Ok(mut backdrop) = state.try_borrow_mut() {
                        backdrop.handle(event);
                    };
                })
            })
            .collect();
        debug!(backdrop = B::NAME, listeners = listeners.len(), "backdrop mounted");
        Self {
            state,
            _listeners: listeners,
        }
    }

    pub fn with<R>(&self, f: impl FnOnce(&mut B) -> R) -> R {
        f(&mut self.state.borrow_mut())
    }
}

impl<B: Backdrop> Drop for Mounted<B> {
    fn drop(&mut self) {
        debug!(backdrop = B::NAME, "backdrop unmounted");
    }
}

/// Hero glow that trails the cursor on a damped spring.
///
/// The glow is positioned inside the hero section, so the cursor is kept in
/// window coordinates and re-measured from the section origin whenever
/// either one moves.
pub struct HeroBackdrop {
    glow: SpringFollower,
    origin: CursorPosition,
    cursor: Option<CursorPosition>,
}

impl HeroBackdrop {
    /// The glow starts at the viewport center.
    pub fn new(viewport: Viewport) -> Self {
        let center = CursorPosition::new(viewport.width / 2.0, viewport.height / 2.0);
        Self {
            glow: SpringFollower::new(SpringConfig::CURSOR_GLOW, center),
            origin: CursorPosition::default(),
            cursor: None,
        }
    }

    /// Top-left corner of the hero section in window coordinates.
    pub fn set_origin(&mut self, origin: CursorPosition) {
        if origin != self.origin {
            self.origin = origin;
            self.retarget();
        }
    }

    /// Advance `dt` seconds and return the glow center.
    pub fn frame(&mut self, dt: f64) -> CursorPosition {
        self.glow.step(dt)
    }

    pub fn glow(&self) -> CursorPosition {
        self.glow.position()
    }

    /// No motion left; the host can skip repainting.
    pub fn is_settled(&self) -> bool {
        self.glow.is_at_rest()
    }

    fn retarget(&mut self) {
        if let Some(cursor) = self.cursor {
            self.glow.set_target(cursor.relative_to(self.origin));
        }
    }
}

impl Backdrop for HeroBackdrop {
    const NAME: &'static str = "hero";

    fn listens_to(&self) -> &'static [EventKind] {
        &[EventKind::PointerMove]
    }

    fn handle(&mut self, event: &WindowEvent) {
        if let WindowEvent::PointerMove(cursor) = event {
            self.cursor = Some(*cursor);
            self.retarget();
        }
    }
}

/// The projects section's floating polyhedra.
///
/// The field is drawn into a canvas that scrolls with the page, so pointer
/// events (window coordinates) are shifted by the canvas origin before hit
/// testing. The host refreshes the bounds every frame with [`set_bounds`].
///
/// [`set_bounds`]: ProjectFieldBackdrop::set_bounds
pub struct ProjectFieldBackdrop {
    field: FloatingField,
    origin: CursorPosition,
    viewport: Viewport,
    cursor_ndc: Option<(f64, f64)>,
    hovered: Option<usize>,
    elapsed: f64,
    resized: bool,
}

impl ProjectFieldBackdrop {
    pub fn new(field: FloatingField, viewport: Viewport) -> Self {
        Self {
            field,
            origin: CursorPosition::default(),
            viewport,
            cursor_ndc: None,
            hovered: None,
            elapsed: 0.0,
            resized: true,
        }
    }

    pub fn field(&self) -> &FloatingField {
        &self.field
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Canvas top-left in window coordinates and its size.
    pub fn set_bounds(&mut self, origin: CursorPosition, viewport: Viewport) {
        self.origin = origin;
        self.viewport = viewport;
    }

    /// True once after each window resize (and initially), when the canvas
    /// backing store needs resizing.
    pub fn take_resized(&mut self) -> bool {
        std::mem::take(&mut self.resized)
    }

    pub fn frame(&mut self, dt: f64) {
        self.elapsed += dt.max(0.0);
        self.field.step(self.elapsed, self.cursor_ndc, self.hovered);
    }
}

impl Backdrop for ProjectFieldBackdrop {
    const NAME: &'static str = "project-field";

    fn listens_to(&self) -> &'static [EventKind] {
        &[EventKind::PointerMove, EventKind::Resize]
    }

    fn handle(&mut self, event: &WindowEvent) {
        match *event {
            WindowEvent::PointerMove(cursor) => {
                let local = cursor.relative_to(self.origin);
                self.cursor_ndc = Some(self.viewport.to_ndc(local));
                self.hovered = self.field.hit_test(local.x, local.y, self.viewport);
            }
            WindowEvent::Resize(_) => self.resized = true,
        }
    }
}
