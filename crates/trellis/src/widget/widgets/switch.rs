//! Toggle switch widget.

use trellis_core::Signal;

use crate::geometry::{Point, Rect};
use crate::widget::WidgetCore;

/// An on/off toggle switch.
pub struct Switch {
    core: WidgetCore,
    toggled_on: bool,
    show_hints: bool,

    /// Emitted with the new state when toggled by input.
    pub toggled: Signal<bool>,
}

impl Switch {
    pub fn new(pos: Point) -> Self {
        Self {
            core: WidgetCore::new(Rect::new(pos.x, pos.y, 44.0, 22.0)),
            toggled_on: false,
            show_hints: false,
            toggled: Signal::new(),
        }
    }

    /// Show on/off hint text next to the switch.
    pub fn with_hints(mut self) -> Self {
        self.show_hints = true;
        self
    }

    pub(crate) fn core(&self) -> &WidgetCore {
        &self.core
    }

    pub(crate) fn core_mut(&mut self) -> &mut WidgetCore {
        &mut self.core
    }

    pub fn is_on(&self) -> bool {
        self.toggled_on
    }

    pub fn shows_hints(&self) -> bool {
        self.show_hints
    }

    /// Set the state programmatically. Does not emit `toggled`.
    pub fn set_on(&mut self, on: bool) {
        if self.toggled_on != on {
            self.toggled_on = on;
            self.core.mark_dirty();
        }
    }

    pub(crate) fn flip(&mut self) -> bool {
        self.toggled_on = !self.toggled_on;
        self.core.mark_dirty();
        self.toggled_on
    }
}

static_assertions::assert_impl_all!(Switch: Send, Sync);
