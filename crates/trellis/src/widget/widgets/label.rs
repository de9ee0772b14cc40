//! Static text label.

use crate::geometry::{Color, Point, Rect};
use crate::widget::metrics;
use crate::widget::WidgetCore;

/// A non-interactive text label.
pub struct Label {
    core: WidgetCore,
    text: String,
    font_size: f32,
    /// Custom color overriding the theme's neutral role.
    color: Option<Color>,
}

impl Label {
    /// Create a label at the given position. The bounding box is derived
    /// from the text and font size.
    pub fn new(text: impl Into<String>, pos: Point, font_size: f32) -> Self {
        let text = text.into();
        let rect = Self::bounds_for(&text, pos, font_size);
        Self {
            core: WidgetCore::new(rect),
            text,
            font_size,
            color: None,
        }
    }

    fn bounds_for(text: &str, pos: Point, font_size: f32) -> Rect {
        let scale = font_size / metrics::LINE_HEIGHT;
        Rect::new(
            pos.x,
            pos.y,
            metrics::text_width(text) * scale,
            font_size,
        )
    }

    pub(crate) fn core(&self) -> &WidgetCore {
        &self.core
    }

    pub(crate) fn core_mut(&mut self) -> &mut WidgetCore {
        &mut self.core
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the text, recomputing the bounding box in place.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        let rect = Self::bounds_for(&self.text, self.core.pos(), self.font_size);
        self.core.resize(rect.width(), rect.height());
        self.core.mark_dirty();
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    /// Custom color, if one overrides the theme.
    pub fn color(&self) -> Option<Color> {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = Some(color);
        self.core.mark_dirty();
    }
}

static_assertions::assert_impl_all!(Label: Send, Sync);
