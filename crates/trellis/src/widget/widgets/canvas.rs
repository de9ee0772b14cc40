//! Canvas widget.
//!
//! The canvas retains a list of drawing operations as plain data; the draw
//! surface replays them when painting. The toolkit itself never rasterizes.

use trellis_core::Signal;

use crate::geometry::{Color, Point, Rect};
use crate::widget::WidgetCore;

/// One retained drawing operation.
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasOp {
    /// A rectangle, optionally filled and rounded.
    Rect {
        rect: Rect,
        color: Color,
        filled: bool,
        rounded: bool,
        thickness: f32,
        corner_radius: f32,
    },
    /// A line segment.
    Line { from: Point, to: Point, color: Color },
    /// An elliptical arc inside the given box, angles in degrees.
    Arc {
        center: Point,
        width: f32,
        height: f32,
        start_angle: f32,
        end_angle: f32,
    },
    /// Set the foreground color for subsequent operations.
    SetForeground { color: Color },
}

/// A free-drawing area with a retained operation list.
pub struct Canvas {
    core: WidgetCore,
    ops: Vec<CanvasOp>,

    /// Emitted with the click position in canvas-local coordinates.
    pub clicked: Signal<Point>,
}

impl Canvas {
    pub fn new(rect: Rect) -> Self {
        Self {
            core: WidgetCore::new(rect),
            ops: Vec::new(),
            clicked: Signal::new(),
        }
    }

    pub(crate) fn core(&self) -> &WidgetCore {
        &self.core
    }

    pub(crate) fn core_mut(&mut self) -> &mut WidgetCore {
        &mut self.core
    }

    /// The retained operations, in draw order.
    pub fn ops(&self) -> &[CanvasOp] {
        &self.ops
    }

    /// Append a rectangle operation. Coordinates are canvas-local.
    pub fn draw_rectangle(
        &mut self,
        rect: Rect,
        color: Color,
        filled: bool,
        rounded: bool,
        thickness: f32,
        corner_radius: f32,
    ) {
        self.ops.push(CanvasOp::Rect {
            rect,
            color,
            filled,
            rounded,
            thickness,
            corner_radius,
        });
        self.core.mark_dirty();
    }

    /// Append a line operation.
    pub fn draw_line(&mut self, from: Point, to: Point, color: Color) {
        self.ops.push(CanvasOp::Line { from, to, color });
        self.core.mark_dirty();
    }

    /// Append an arc operation.
    pub fn draw_arc(
        &mut self,
        center: Point,
        width: f32,
        height: f32,
        start_angle: f32,
        end_angle: f32,
    ) {
        self.ops.push(CanvasOp::Arc {
            center,
            width,
            height,
            start_angle,
            end_angle,
        });
        self.core.mark_dirty();
    }

    /// Append a foreground-color change.
    pub fn set_foreground(&mut self, color: Color) {
        self.ops.push(CanvasOp::SetForeground { color });
        self.core.mark_dirty();
    }
}

static_assertions::assert_impl_all!(Canvas: Send, Sync);
