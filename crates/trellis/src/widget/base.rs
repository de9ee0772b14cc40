//! The common widget header.
//!
//! Every concrete widget embeds a [`WidgetCore`]: position, size, the
//! stored visibility flag, and the dirty flag the draw step consults. The
//! kind tag lives in the [`Widget`](super::Widget) enum variant and is
//! therefore immutable by construction.

use crate::geometry::{Point, Rect, Size};

/// Common state shared by all widget kinds.
///
/// `visible` is the widget's *stored* flag; whether it actually
/// participates in hit-testing and drawing is decided per pass by combining
/// this flag with ancestor scope state (see
/// [`Registry::effectively_visible`](crate::window::Registry::effectively_visible)).
#[derive(Debug, Clone)]
pub struct WidgetCore {
    /// Position and size in window coordinates.
    rect: Rect,
    /// The stored visibility flag.
    visible: bool,
    /// Whether the widget's appearance changed since it was last painted.
    needs_redraw: bool,
}

impl WidgetCore {
    /// Create a header with the given geometry, visible and dirty.
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            visible: true,
            needs_redraw: true,
        }
    }

    /// The widget's bounding rectangle in window coordinates.
    #[inline]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Position of the top-left corner.
    #[inline]
    pub fn pos(&self) -> Point {
        self.rect.origin
    }

    /// The widget's size.
    #[inline]
    pub fn size(&self) -> Size {
        self.rect.size
    }

    /// Move the widget to the specified position.
    ///
    /// Marks the widget dirty; never touches pixels.
    pub fn move_to(&mut self, x: f32, y: f32) {
        let pos = Point::new(x, y);
        if self.rect.origin != pos {
            self.rect.origin = pos;
            self.needs_redraw = true;
        }
    }

    /// Resize the widget.
    pub fn resize(&mut self, width: f32, height: f32) {
        let size = Size::new(width, height);
        if self.rect.size != size {
            self.rect.size = size;
            self.needs_redraw = true;
        }
    }

    /// The stored visibility flag.
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Set the stored visibility flag.
    pub fn set_visible(&mut self, visible: bool) {
        if self.visible != visible {
            self.visible = visible;
            self.needs_redraw = true;
        }
    }

    /// Check if a point (in window coordinates) is inside the widget.
    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        self.rect.contains(point)
    }

    /// Whether the widget needs repainting.
    #[inline]
    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    /// Mark the widget as needing a repaint.
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Clear the dirty flag (called by the draw step after painting).
    pub(crate) fn clear_dirty(&mut self) {
        self.needs_redraw = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_and_resize_mark_dirty() {
        let mut core = WidgetCore::new(Rect::new(0.0, 0.0, 10.0, 10.0));
        core.clear_dirty();

        core.move_to(5.0, 5.0);
        assert!(core.needs_redraw());
        assert_eq!(core.pos(), Point::new(5.0, 5.0));

        core.clear_dirty();
        core.resize(20.0, 30.0);
        assert!(core.needs_redraw());
        assert_eq!(core.size(), Size::new(20.0, 30.0));
    }

    #[test]
    fn test_no_op_mutations_stay_clean() {
        let mut core = WidgetCore::new(Rect::new(1.0, 2.0, 3.0, 4.0));
        core.clear_dirty();

        core.move_to(1.0, 2.0);
        core.resize(3.0, 4.0);
        core.set_visible(true);
        assert!(!core.needs_redraw());
    }
}
