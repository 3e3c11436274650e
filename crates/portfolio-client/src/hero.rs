use std::time::Duration;

use portfolio_common::backdrop::{HeroBackdrop, Mounted};
use portfolio_common::content::Portfolio;
use portfolio_common::typewriter::{Typewriter, TypewriterTiming};
use portfolio_common::viewport::{CursorPosition, Viewport};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::runtime::MotionRuntime;

/// Cursor glow and the role typewriter.
pub struct HeroMotion {
    backdrop: Mounted<HeroBackdrop>,
    bounds: Element,
    glow: HtmlElement,
    painted: bool,
    roles: Element,
    typewriter: Typewriter,
    shown: String,
}

impl HeroMotion {
    /// `None` when the hero markup is not on the page.
    pub fn mount(
        runtime: &MotionRuntime,
        document: &Document,
        viewport: Viewport,
    ) -> Result<Option<Self>, JsValue> {
        let (Some(glow), Some(roles)) = (
            document.query_selector("[data-hero-glow]")?,
            document.query_selector("[data-typewriter]")?,
        ) else {
            return Ok(None);
        };
        let glow: HtmlElement = glow.dyn_into()?;
        let bounds = glow.parent_element().unwrap_or_else(|| glow.clone().into());

        let typewriter = Typewriter::new(Portfolio::get().profile.roles, TypewriterTiming::default());
        let shown = typewriter.text();
        roles.set_text_content(Some(&shown));

        Ok(Some(Self {
            backdrop: Mounted::mount(runtime.registry(), HeroBackdrop::new(viewport)),
            bounds,
            glow,
            painted: false,
            roles,
            typewriter,
            shown,
        }))
    }

    pub fn frame(&mut self, dt: f64) -> Result<(), JsValue> {
        let rect = self.bounds.get_bounding_client_rect();
        let (center, moved) = self.backdrop.with(|hero| {
            hero.set_origin(CursorPosition::new(rect.left(), rect.top()));
            let moved = !hero.is_settled();
            (hero.frame(dt), moved)
        });
        if moved || !self.painted {
            let style = self.glow.style();
            style.set_property("--glow-x", &format!("{:.1}px", center.x))?;
            style.set_property("--glow-y", &format!("{:.1}px", center.y))?;
            self.painted = true;
        }

        let text = self.typewriter.tick(Duration::from_secs_f64(dt));
        if text != self.shown {
            self.roles.set_text_content(Some(&text));
            self.shown = text;
        }
        Ok(())
    }
}
