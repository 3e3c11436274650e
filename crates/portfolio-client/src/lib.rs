//! Portfolio browser client
//!
//! Progressive enhancement over the server-rendered page: scroll reveals,
//! the hero glow and typewriter, the projects field and the certificate
//! modals. Everything it touches is optional; the page reads fine without it.

mod achievements;
mod dom;
mod hero;
mod projects;
mod runtime;

use std::cell::RefCell;
use std::rc::Rc;

use portfolio_common::listeners::EventKind;
use portfolio_common::section::Section;
use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

use achievements::AchievementModals;
use dom::DomListener;
use hero::HeroMotion;
use projects::ProjectsMotion;
use runtime::{AnimationLoop, MotionRuntime};

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let page = Page::mount(&window, &document)
        .inspect_err(|e| dom::error("portfolio client failed to start", e))?;
    let page = Rc::new(RefCell::new(Some(page)));

    let frames = {
        let page = Rc::clone(&page);
        AnimationLoop::start(&window, move |dt| {
            let mut slot = page.borrow_mut();
            let Some(current) = slot.as_mut() else {
                return;
            };
            if let Err(e) = current.frame(dt) {
                dom::error("frame failed, stopping decoration", &e);
                slot.take();
            }
        })?
    };

    // Lives for the rest of the document; the page state goes on pagehide.
    let mut session = Some((frames, page));
    let pagehide = DomListener::new(window.as_ref(), "pagehide", move |_| {
        if let Some((frames, page)) = session.take() {
            drop(frames);
            page.borrow_mut().take();
            dom::log("portfolio client unmounted");
        }
    })?;
    std::mem::forget(pagehide);

    dom::log("portfolio client ready");
    Ok(())
}

/// Every mounted section plus the runtime they share.
///
/// Field order is drop order: sections go first, then the runtime, which
/// removes the window listeners and the `motion` class.
struct Page {
    hero: Option<HeroMotion>,
    projects: Option<ProjectsMotion>,
    modals: AchievementModals,
    runtime: MotionRuntime,
}

impl Page {
    fn mount(window: &Window, document: &Document) -> Result<Self, JsValue> {
        let runtime = MotionRuntime::new(window, document)?;

        let mut observed = 0;
        for section in Section::ALL {
            if let Some(root) = document.get_element_by_id(section.id()) {
                observed += runtime.reveal_within(&root)?;
            }
        }

        let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
        let mut rng = StdRng::seed_from_u64(seed);

        let hero = HeroMotion::mount(&runtime, document, dom::window_viewport(window))?;
        let projects = ProjectsMotion::mount(&runtime, window, document, &mut rng)?;
        let modals = AchievementModals::mount(document)?;

        runtime.enable()?;
        let registry = runtime.registry();
        dom::log(&format!(
            "motion enabled: {observed} reveal targets, {} modals, hero={}, field={}, \
             {} pointer and {} resize listeners",
            modals.len(),
            hero.is_some(),
            projects.is_some(),
            registry.listener_count(EventKind::PointerMove),
            registry.listener_count(EventKind::Resize)
        ));

        Ok(Self {
            hero,
            projects,
            modals,
            runtime,
        })
    }

    fn frame(&mut self, dt: f64) -> Result<(), JsValue> {
        if let Some(hero) = self.hero.as_mut() {
            hero.frame(dt)?;
        }
        if let Some(projects) = self.projects.as_mut() {
            projects.frame(dt)?;
        }
        self.modals.frame(dt);
        Ok(())
    }
}
