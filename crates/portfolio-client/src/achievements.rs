use std::cell::RefCell;
use std::rc::Rc;

use portfolio_common::interaction::ModalPresence;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::dom::{self, DomListener};

struct CardModal {
    presence: ModalPresence,
    overlay: HtmlElement,
    image: Option<HtmlElement>,
    shown: bool,
}

impl CardModal {
    fn opened(&mut self) {
        self.overlay.set_hidden(false);
        self.shown = true;
        self.paint();
    }

    fn paint(&self) {
        let _ = self
            .overlay
            .style()
            .set_property("opacity", &format!("{:.3}", self.presence.opacity()));
        if let Some(image) = &self.image {
            let _ = image
                .style()
                .set_property("transform", &format!("scale({:.4})", self.presence.scale()));
        }
    }

    fn frame(&mut self, dt: f64) {
        if !self.shown {
            return;
        }
        self.presence.step(dt);
        self.paint();
        if !self.presence.is_visible() {
            self.overlay.set_hidden(true);
            self.shown = false;
        }
    }
}

/// One modal per achievement card with an image preview.
pub struct AchievementModals {
    cards: Vec<Rc<RefCell<CardModal>>>,
    _listeners: Vec<DomListener>,
}

impl AchievementModals {
    pub fn mount(document: &Document) -> Result<Self, JsValue> {
        let mut cards = Vec::new();
        let mut listeners = Vec::new();

        for opener in dom::elements(document.query_selector_all("[data-modal-open]")?) {
            let Some(index) = dom::index_attr(&opener, "data-modal-open") else {
                continue;
            };
            let Some(overlay) = document.query_selector(&format!("[data-modal=\"{index}\"]"))? else {
                continue;
            };
            let overlay: HtmlElement = overlay.dyn_into()?;
            let image = overlay
                .query_selector(".modal-image")?
                .and_then(|el| el.dyn_into::<HtmlElement>().ok());
            let close = overlay.query_selector(&format!("[data-modal-close=\"{index}\"]"))?;

            let card = Rc::new(RefCell::new(CardModal {
                presence: ModalPresence::new(),
                overlay: overlay.clone(),
                image,
                shown: false,
            }));

            listeners.push({
                let card = Rc::clone(&card);
                DomListener::new(opener.as_ref(), "click", move |event| {
                    // The link to the full image is the no-script fallback.
                    event.prevent_default();
                    let mut card = card.borrow_mut();
                    if card.presence.preview_clicked() {
                        card.opened();
                    }
                })?
            });

            // Clicks on the image bubble here too.
            listeners.push({
                let card = Rc::clone(&card);
                DomListener::new(overlay.as_ref(), "click", move |_| {
                    card.borrow_mut().presence.overlay_clicked();
                })?
            });

            if let Some(close) = close {
                listeners.push({
                    let card = Rc::clone(&card);
                    DomListener::new(close.as_ref(), "click", move |event| {
                        event.stop_propagation();
                        card.borrow_mut().presence.close_clicked();
                    })?
                });
            }

            cards.push(card);
        }

        Ok(Self {
            cards,
            _listeners: listeners,
        })
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Advance the entrance or exit of every modal on screen.
    pub fn frame(&self, dt: f64) {
        for card in &self.cards {
            if let Ok(mut card) = card.try_borrow_mut() {
                card.frame(dt);
            }
        }
    }
}
