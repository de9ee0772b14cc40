//! Slider widget.

use trellis_core::Signal;

use crate::geometry::{Point, Rect};
use crate::widget::WidgetCore;

/// Thickness of the slider track box.
const TRACK_THICKNESS: f32 = 20.0;

/// Slider axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SliderOrientation {
    #[default]
    Horizontal,
    Vertical,
}

/// A draggable value slider.
///
/// `value_changed` fires on every value change caused by input — both the
/// initial press and each motion step while dragging. Programmatic
/// [`set_value`](Slider::set_value) does not emit.
pub struct Slider {
    core: WidgetCore,
    value: i64,
    min_value: i64,
    max_value: i64,
    show_hints: bool,
    orientation: SliderOrientation,

    /// Emitted with the new value on user-driven changes.
    pub value_changed: Signal<i64>,
}

impl Slider {
    /// Create a horizontal slider of the given track length, starting at
    /// `min_value`.
    pub fn new(pos: Point, length: f32, min_value: i64, max_value: i64) -> Self {
        debug_assert!(min_value < max_value);
        Self {
            core: WidgetCore::new(Rect::new(pos.x, pos.y, length, TRACK_THICKNESS)),
            value: min_value,
            min_value,
            max_value,
            show_hints: false,
            orientation: SliderOrientation::Horizontal,
            value_changed: Signal::new(),
        }
    }

    /// Switch the slider to a vertical track of the same length.
    pub fn vertical(mut self) -> Self {
        let rect = self.core.rect();
        self.core.resize(TRACK_THICKNESS, rect.width());
        self.orientation = SliderOrientation::Vertical;
        self
    }

    /// Show min/max hint text next to the track.
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

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn range(&self) -> (i64, i64) {
        (self.min_value, self.max_value)
    }

    pub fn orientation(&self) -> SliderOrientation {
        self.orientation
    }

    pub fn shows_hints(&self) -> bool {
        self.show_hints
    }

    /// Set the value, clamped to the slider's range. Does not emit.
    pub fn set_value(&mut self, value: i64) {
        let clamped = value.clamp(self.min_value, self.max_value);
        if self.value != clamped {
            self.value = clamped;
            self.core.mark_dirty();
        }
    }

    /// The value corresponding to a pointer position on the track.
    pub(crate) fn value_at(&self, point: Point) -> i64 {
        let rect = self.core.rect();
        let fraction = match self.orientation {
            SliderOrientation::Horizontal => (point.x - rect.left()) / rect.width(),
            SliderOrientation::Vertical => (point.y - rect.top()) / rect.height(),
        }
        .clamp(0.0, 1.0);
        let span = (self.max_value - self.min_value) as f32;
        self.min_value + (fraction * span).round() as i64
    }
}

static_assertions::assert_impl_all!(Slider: Send, Sync);
