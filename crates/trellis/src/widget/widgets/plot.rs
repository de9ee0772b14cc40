//! Plot widget.
//!
//! The plot holds series data and axis metadata; interpreting and drawing
//! it belongs to the surface.

use crate::geometry::Rect;
use crate::widget::WidgetCore;

/// How a plot's data should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlotKind {
    #[default]
    Line,
    Bar,
    Scatter,
}

/// Series data and axis metadata for a [`Plot`].
#[derive(Debug, Clone, Default)]
pub struct PlotData {
    pub kind: PlotKind,
    pub title: String,
    pub x_data: Vec<f32>,
    pub y_data: Vec<f32>,
    pub x_label: String,
    pub y_label: String,
    pub x_step: f32,
    pub y_step: f32,
    /// Per-bar labels for bar plots.
    pub bar_labels: Vec<String>,
}

impl PlotData {
    /// The data's x range, if there is any data.
    pub fn x_range(&self) -> Option<(f32, f32)> {
        min_max(&self.x_data)
    }

    /// The data's y range, if there is any data.
    pub fn y_range(&self) -> Option<(f32, f32)> {
        min_max(&self.y_data)
    }
}

fn min_max(data: &[f32]) -> Option<(f32, f32)> {
    if data.is_empty() {
        return None;
    }
    let mut min = f32::INFINITY;
    let mut max = f32::NEG_INFINITY;
    for &v in data {
        min = min.min(v);
        max = max.max(v);
    }
    Some((min, max))
}

/// A data plot.
pub struct Plot {
    core: WidgetCore,
    data: PlotData,
}

impl Plot {
    pub fn new(rect: Rect, data: PlotData) -> Self {
        Self {
            core: WidgetCore::new(rect),
            data,
        }
    }

    pub(crate) fn core(&self) -> &WidgetCore {
        &self.core
    }

    pub(crate) fn core_mut(&mut self) -> &mut WidgetCore {
        &mut self.core
    }

    pub fn data(&self) -> &PlotData {
        &self.data
    }

    /// Replace the plot's data wholesale.
    pub fn update_data(&mut self, data: PlotData) {
        self.data = data;
        self.core.mark_dirty();
    }
}

static_assertions::assert_impl_all!(Plot: Send, Sync);
