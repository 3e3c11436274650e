/// Window-event fan-out with handle-scoped registrations.
///
/// The host installs one listener per event kind on the real window and
/// forwards events through [`ListenerRegistry::dispatch`]. Components hold
/// [`ListenerHandle`]s; dropping a handle deregisters its callback, so a
/// component that is dropped can never be called again.
///
/// Everything runs on one thread, so the registry is `Rc<RefCell<_>>`.
use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::viewport::{CursorPosition, Viewport};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    PointerMove,
    Resize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WindowEvent {
    PointerMove(CursorPosition),
    Resize(Viewport),
}

impl WindowEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            WindowEvent::PointerMove(_) => EventKind::PointerMove,
            WindowEvent::Resize(_) => EventKind::Resize,
        }
    }
}

type Callback = Rc<RefCell<dyn FnMut(&WindowEvent)>>;

struct Entry {
    id: u64,
    kind: EventKind,
    callback: Callback,
}

#[derive(Default)]
struct Inner {
    next_id: u64,
    entries: Vec<Entry>,
}

#[derive(Clone, Default)]
pub struct ListenerRegistry {
    inner: Rc<RefCell<Inner>>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn listen<F>(&self, kind: EventKind, callback: F) -> ListenerHandle
    where
        F: FnMut(&WindowEvent) + 'static,
    {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.entries.push(Entry {
            id,
            kind,
            callback: Rc::new(RefCell::new(callback)),
        });
        ListenerHandle {
            id,
            registry: Rc::downgrade(&self.inner),
        }
    }

    /// Invoke every live listener for the event's kind. Returns how many ran.
    ///
    /// Callbacks are snapshotted first, so a callback may register or drop
    /// handles while the dispatch is running. A listener removed mid-dispatch
    /// is skipped.
    pub fn dispatch(&self, event: &WindowEvent) -> usize {
        let kind = event.kind();
        let snapshot: Vec<(u64, Callback)> = self
            .inner
            .borrow()
            .entries
            .iter()
            .filter(|e| e.kind == kind)
            .map(|e| (e.id, Rc::clone(&e.callback)))
            .collect();

        let mut invoked = 0;
        for (id, callback) in snapshot {
            if !self.is_live(id) {
                continue;
            }
            // A callback that re-enters dispatch for its own kind is skipped
            // rather than double-borrowed.
            if let Ok(mut f) = callback.try_borrow_mut() {
                f(event);
                invoked += 1;
            }
        }
        invoked
    }

    pub fn listener_count(&self, kind: EventKind) -> usize {
        self.inner
            .borrow()
            .entries
            .iter()
            .filter(|e| e.kind == kind)
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.borrow().entries.is_empty()
    }

    fn is_live(&self, id: u64) -> bool {
        self.inner.borrow().entries.iter().any(|e| e.id == id)
    }
}

/// Registration token. Dropping it removes the listener.
#[must_use = "dropping the handle removes the listener immediately"]
pub struct ListenerHandle {
    id: u64,
    registry: Weak<RefCell<Inner>>,
}

impl Drop for ListenerHandle {
    fn drop(&mut self) {
        let Some(inner) = self.registry.upgrade() else {
            return;
        };
        // Move the entry out before dropping it so a callback's own Drop
        // can touch the registry.
        let removed = {
            let mut inner = inner.borrow_mut();
            inner
                .entries
                .iter()
                .position(|e| e.id == self.id)
                .map(|pos| inner.entries.remove(pos))
        };
        drop(removed);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    fn pointer(x: f64, y: f64) -> WindowEvent {
        WindowEvent::PointerMove(CursorPosition::new(x, y))
    }

    #[test]
    fn dispatch_reaches_only_matching_kind() {
        let registry = ListenerRegistry::new();
        let moves = Rc::new(Cell::new(0));
        let resizes = Rc::new(Cell::new(0));

        let m = Rc::clone(&moves);
        let _a = registry.listen(EventKind::PointerMove, move |_| m.set(m.get() + 1));
        let r = Rc::clone(&resizes);
        let _b = registry.listen(EventKind::Resize, move |_| r.set(r.get() + 1));

        assert_eq!(registry.dispatch(&pointer(1.0, 2.0)), 1);
        assert_eq!(moves.get(), 1);
        assert_eq!(resizes.get(), 0);

        registry.dispatch(&WindowEvent::Resize(Viewport::new(10.0, 10.0)));
        assert_eq!(resizes.get(), 1);
    }

    #[test]
    fn dropping_handle_deregisters() {
        let registry = ListenerRegistry::new();
        let calls = Rc::new(Cell::new(0));
        let c = Rc::clone(&calls);
        let handle = registry.listen(EventKind::PointerMove, move |_| c.set(c.get() + 1));
        assert_eq!(registry.listener_count(EventKind::PointerMove), 1);

        drop(handle);
        assert_eq!(registry.listener_count(EventKind::PointerMove), 0);
        assert_eq!(registry.dispatch(&pointer(0.0, 0.0)), 0);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn listener_dropped_mid_dispatch_is_skipped() {
        let registry = ListenerRegistry::new();
        let victim_calls = Rc::new(Cell::new(0));
        let slot: Rc<RefCell<Option<ListenerHandle>>> = Rc::new(RefCell::new(None));

        let s = Rc::clone(&slot);
        let _killer = registry.listen(EventKind::PointerMove, move |_| {
            s.borrow_mut().take();
        });
        let v = Rc::clone(&victim_calls);
        *slot.borrow_mut() =
            Some(registry.listen(EventKind::PointerMove, move |_| v.set(v.get() + 1)));

        assert_eq!(registry.dispatch(&pointer(0.0, 0.0)), 1);
        assert_eq!(victim_calls.get(), 0);
        assert_eq!(registry.listener_count(EventKind::PointerMove), 1);
    }

    #[test]
    fn handle_outliving_registry_is_harmless() {
        let registry = ListenerRegistry::new();
        let handle = registry.listen(EventKind::Resize, |_| {});
        drop(registry);
        drop(handle);
    }
}
