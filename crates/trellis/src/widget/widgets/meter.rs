//! Gauge meter widget.

use crate::geometry::Rect;
use crate::widget::WidgetCore;

/// A labeled gauge showing a value from 0 to 100.
pub struct Meter {
    core: WidgetCore,
    value: i64,
    label: String,
}

impl Meter {
    pub fn new(rect: Rect, label: impl Into<String>) -> Self {
        Self {
            core: WidgetCore::new(rect),
            value: 0,
            label: label.into(),
        }
    }

    pub(crate) fn core(&self) -> &WidgetCore {
        &self.core
    }

    pub(crate) fn core_mut(&mut self) -> &mut WidgetCore {
        &mut self.core
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Set the gauge value, clamped to 0–100.
    pub fn set_value(&mut self, value: i64) {
        let clamped = value.clamp(0, 100);
        if self.value != clamped {
            self.value = clamped;
            self.core.mark_dirty();
        }
    }
}

static_assertions::assert_impl_all!(Meter: Send, Sync);
