//! Progress bar widget.

use crate::geometry::Rect;
use crate::widget::WidgetCore;

/// A horizontal progress indicator, 0–100.
pub struct ProgressBar {
    core: WidgetCore,
    value: i64,
}

impl ProgressBar {
    pub fn new(rect: Rect) -> Self {
        Self {
            core: WidgetCore::new(rect),
            value: 0,
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

    /// Set the progress value, clamped to 0–100.
    pub fn update(&mut self, value: i64) {
        let clamped = value.clamp(0, 100);
        if self.value != clamped {
            self.value = clamped;
            self.core.mark_dirty();
        }
    }
}

static_assertions::assert_impl_all!(ProgressBar: Send, Sync);
