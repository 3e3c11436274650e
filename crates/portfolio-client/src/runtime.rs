/// The page-wide motion runtime.
///
/// Built once at startup and handed to each section mount by reference.
/// It owns the only real window listeners (pointer and resize), forwarding
/// them into a [`ListenerRegistry`], and the single IntersectionObserver
/// that flips `[data-reveal]` elements to `.revealed` the first time they
/// scroll into view. Dropping it removes the window listeners, disconnects
/// the observer and takes the `motion` class off `<html>` so nothing is
/// left hidden.
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use portfolio_common::listeners::{ListenerRegistry, WindowEvent};
use portfolio_common::viewport::CursorPosition;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    MouseEvent, Window,
};

use crate::dom::{self, DomListener};

const MOTION_CLASS: &str = "motion";
const REVEALED_CLASS: &str = "revealed";
const REVEAL_THRESHOLD: f64 = 0.1;
/// Frames longer than this (background tabs) are clamped.
const MAX_FRAME_SECS: f64 = 0.1;

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

pub struct MotionRuntime {
    registry: ListenerRegistry,
    document: Document,
    observer: IntersectionObserver,
    _observer_callback: ObserverCallback,
    _window_listeners: Vec<DomListener>,
}

impl MotionRuntime {
    pub fn new(window: &Window, document: &Document) -> Result<Self, JsValue> {
        let registry = ListenerRegistry::new();

        let pointer = {
            let registry = registry.clone();
            DomListener::new(window.as_ref(), "mousemove", move |event| {
                if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
                    let cursor = CursorPosition::new(f64::from(mouse.client_x()), f64::from(mouse.client_y()));
                    registry.dispatch(&WindowEvent::PointerMove(cursor));
                }
            })?
        };
        let resize = {
            let registry = registry.clone();
            let win = window.clone();
            DomListener::new(window.as_ref(), "resize", move |_| {
                registry.dispatch(&WindowEvent::Resize(dom::window_viewport(&win)));
            })?
        };

        let callback: ObserverCallback = Closure::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    let _ = target.class_list().add_1(REVEALED_CLASS);
                    // Entrances play once.
                    observer.unobserve(&target);
                }
            },
        );
        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

        Ok(Self {
            registry,
            document: document.clone(),
            observer,
            _observer_callback: callback,
            _window_listeners: vec![pointer, resize],
        })
    }

    pub fn registry(&self) -> &ListenerRegistry {
        &self.registry
    }

    /// Observe every `[data-reveal]` element inside `root`.
    pub fn reveal_within(&self, root: &Element) -> Result<usize, JsValue> {
        let targets = dom::elements(root.query_selector_all("[data-reveal]")?);
        for target in &targets {
            self.observer.observe(target);
        }
        Ok(targets.len())
    }

    /// Switch the stylesheet into animated mode. Call after all reveal
    /// targets are observed.
    pub fn enable(&self) -> Result<(), JsValue> {
        if let Some(root) = self.document.document_element() {
            root.class_list().add_1(MOTION_CLASS)?;
        }
        Ok(())
    }
}

impl Drop for MotionRuntime {
    fn drop(&mut self) {
        // Sections unmount first; anything left here outlived its owner.
        if !self.registry.is_empty() {
            dom::log("motion runtime dropped with listeners still registered");
        }
        self.observer.disconnect();
        if let Some(root) = self.document.document_element() {
            let _ = root.class_list().remove_1(MOTION_CLASS);
        }
    }
}

/// requestAnimationFrame loop; the callback gets seconds since the last frame.
///
/// Dropping the loop cancels the pending frame before the closure is freed.
pub struct AnimationLoop {
    window: Window,
    pending: Rc<Cell<Option<i32>>>,
    _closure: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>,
}

impl AnimationLoop {
    pub fn start<F>(window: &Window, mut tick: F) -> Result<Self, JsValue>
    where
        F: FnMut(f64) + 'static,
    {
        let closure: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
        let pending = Rc::new(Cell::new(None));

        let weak = Rc::downgrade(&closure);
        let next = Rc::clone(&pending);
        let win = window.clone();
        let mut last: Option<f64> = None;
        *closure.borrow_mut() = Some(Closure::new(move |now: f64| {
            let dt = last.map_or(0.0, |prev| ((now - prev) / 1000.0).clamp(0.0, MAX_FRAME_SECS));
            last = Some(now);
            next.set(None);
            tick(dt);

            let Some(slot) = weak.upgrade() else {
                return;
            };
            let slot = slot.borrow();
            if let Some(callback) = slot.as_ref() {
                next.set(win.request_animation_frame(callback.as_ref().unchecked_ref()).ok());
            }
        }));

        let first = match closure.borrow().as_ref() {
            Some(callback) => Some(window.request_animation_frame(callback.as_ref().unchecked_ref())?),
            None => None,
        };
        pending.set(first);

        Ok(Self {
            window: window.clone(),
            pending,
            _closure: closure,
        })
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        if let Some(id) = self.pending.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
    }
}
