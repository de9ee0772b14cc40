//! Checkbox widget.

use trellis_core::Signal;

use crate::geometry::{Point, Rect};
use crate::widget::metrics;
use crate::widget::WidgetCore;

/// Side length of the check square.
const BOX_SIZE: f32 = 16.0;

/// A two-state checkbox with a trailing label.
pub struct Checkbox {
    core: WidgetCore,
    label: String,
    checked: bool,

    /// Emitted with the new state whenever the box is toggled by input.
    pub toggled: Signal<bool>,
}

impl Checkbox {
    /// Create an unchecked checkbox at the given position.
    pub fn new(label: impl Into<String>, pos: Point) -> Self {
        let label = label.into();
        let rect = Rect::new(
            pos.x,
            pos.y,
            BOX_SIZE + 6.0 + metrics::text_width(&label),
            metrics::LINE_HEIGHT,
        );
        Self {
            core: WidgetCore::new(rect),
            label,
            checked: false,
            toggled: Signal::new(),
        }
    }

    pub(crate) fn core(&self) -> &WidgetCore {
        &self.core
    }

    pub(crate) fn core_mut(&mut self) -> &mut WidgetCore {
        &mut self.core
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    /// Set the state programmatically. Does not emit `toggled`.
    pub fn set_checked(&mut self, checked: bool) {
        if self.checked != checked {
            self.checked = checked;
            self.core.mark_dirty();
        }
    }

    /// Flip the state and report the new value. Used by dispatch, which
    /// then emits `toggled`.
    pub(crate) fn flip(&mut self) -> bool {
        self.checked = !self.checked;
        self.core.mark_dirty();
        self.checked
    }
}

static_assertions::assert_impl_all!(Checkbox: Send, Sync);
