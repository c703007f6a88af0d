//! The per-row "⋮" menu on the list pages.
//!
//! One panel per page. Opening it records the selected record and places the
//! panel below and to the left of the trigger. While it is open a
//! document-level pointer-down listener is registered; a pointer-down outside
//! the panel closes the menu and removes the listener.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use shelf_core::types::ItemId;

use crate::geometry::{Point, Rect};
use crate::listeners::{Document, ListenerGuard, PointerListener};

pub const PANEL_OFFSET_X: f64 = -150.0;
pub const PANEL_OFFSET_Y: f64 = 5.0;
pub const PANEL_WIDTH: f64 = 160.0;
pub const PANEL_HEIGHT: f64 = 96.0;

/// Panel box for a trigger at `trigger`: `(left - 150, bottom + 5)`, 160 × 96.
pub fn panel_rect(trigger: Rect) -> Rect {
    Rect::new(
        trigger.left + PANEL_OFFSET_X,
        trigger.bottom() + PANEL_OFFSET_Y,
        PANEL_WIDTH,
        PANEL_HEIGHT,
    )
}

#[derive(Default)]
struct MenuState {
    open: Option<OpenMenu>,
    outside_click: Option<ListenerGuard>,
}

struct OpenMenu {
    selected: ItemId,
    panel: Rect,
}

fn lock(state: &Mutex<MenuState>) -> MutexGuard<'_, MenuState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Closes the menu on a pointer-down outside the panel.
struct OutsideClick {
    state: Weak<Mutex<MenuState>>,
}

impl PointerListener for OutsideClick {
    fn on_pointer_down(&self, at: Point) {
        let Some(state) = self.state.upgrade() else {
            return;
        };
        let released = {
            let mut guard = lock(&state);
            let outside = guard
                .open
                .as_ref()
                .is_some_and(|menu| !menu.panel.contains(at));
            if outside {
                guard.open = None;
                guard.outside_click.take()
            } else {
                None
            }
        };
        // Dropped with the state lock released; this deregisters us.
        drop(released);
    }
}

pub struct ContextMenu {
    document: Document,
    state: Arc<Mutex<MenuState>>,
}

impl ContextMenu {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            state: Arc::default(),
        }
    }

    /// Open for `selected`. Opening again while open retargets the panel and
    /// keeps the single listener.
    pub fn open(&self, selected: ItemId, trigger: Rect) {
        let mut state = lock(&self.state);
        state.open = Some(OpenMenu {
            selected,
            panel: panel_rect(trigger),
        });
        if state.outside_click.is_none() {
            let listener = Arc::new(OutsideClick {
                state: Arc::downgrade(&self.state),
            });
            state.outside_click = Some(self.document.add_pointer_listener(listener));
        }
    }

    pub fn close(&self) {
        let released = {
            let mut state = lock(&self.state);
            state.open = None;
            state.outside_click.take()
        };
        drop(released);
    }

    pub fn is_open(&self) -> bool {
        lock(&self.state).open.is_some()
    }

    pub fn selected(&self) -> Option<ItemId> {
        lock(&self.state).open.as_ref().map(|menu| menu.selected)
    }

    pub fn panel(&self) -> Option<Rect> {
        lock(&self.state).open.as_ref().map(|menu| menu.panel)
    }
}

impl Drop for ContextMenu {
    fn drop(&mut self) {
        self.close();
    }
}

#[cfg(test)]
mod tests {
    use shelf_core::types::new_item_id;

    use super::*;

    fn trigger() -> Rect {
        Rect::new(400.0, 100.0, 24.0, 24.0)
    }

    #[test]
    fn panel_sits_below_and_left_of_trigger() {
        let panel = panel_rect(trigger());
        assert_eq!(panel, Rect::new(250.0, 129.0, 160.0, 96.0));
    }

    #[test]
    fn outside_pointer_down_closes_and_deregisters() {
        let document = Document::new();
        let menu = ContextMenu::new(document.clone());
        menu.open(new_item_id(), trigger());
        assert_eq!(document.listener_count(), 1);

        document.pointer_down(Point::new(10.0, 10.0));

        assert!(!menu.is_open());
        assert_eq!(document.listener_count(), 0);
    }

    #[test]
    fn inside_pointer_down_keeps_menu_open() {
        let document = Document::new();
        let menu = ContextMenu::new(document.clone());
        let id = new_item_id();
        menu.open(id, trigger());

        document.pointer_down(Point::new(300.0, 150.0));

        assert_eq!(menu.selected(), Some(id));
        assert_eq!(document.listener_count(), 1);
    }

    #[test]
    fn reopening_retargets_without_a_second_listener() {
        let document = Document::new();
        let menu = ContextMenu::new(document.clone());
        let second = new_item_id();
        menu.open(new_item_id(), trigger());
        menu.open(second, Rect::new(400.0, 300.0, 24.0, 24.0));

        assert_eq!(menu.selected(), Some(second));
        assert_eq!(menu.panel().map(|p| p.top), Some(329.0));
        assert_eq!(document.listener_count(), 1);
    }

    #[test]
    fn close_and_drop_release_the_listener() {
        let document = Document::new();
        let menu = ContextMenu::new(document.clone());
        menu.open(new_item_id(), trigger());
        menu.close();
        assert_eq!(document.listener_count(), 0);

        menu.open(new_item_id(), trigger());
        drop(menu);
        assert_eq!(document.listener_count(), 0);
    }

    #[test]
    fn pointer_down_while_closed_is_ignored() {
        let document = Document::new();
        let menu = ContextMenu::new(document.clone());
        document.pointer_down(Point::new(0.0, 0.0));
        assert!(!menu.is_open());
    }
}
