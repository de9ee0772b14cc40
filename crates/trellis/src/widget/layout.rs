//! Declarative layout engine.
//!
//! A [`Layout`] is itself a widget; its children are *referenced*, not
//! owned — they live in the window's collections and stay independently
//! addressable for event dispatch. The engine is not reactive: geometry is
//! applied only when `build` runs, and adding children without rebuilding
//! leaves them at their previous positions by contract.
//!
//! Sizing is top-down, pre-order: the layout's own rectangle is fixed
//! first, then divided among children in a single pass. A nested layout is
//! positioned, built recursively, and only then does the parent read its
//! extent to advance the cursor — bottom-up size negotiation is
//! deliberately not supported.

use crate::error::{Error, Result};
use crate::geometry::Rect;
use crate::widget::{Widget, WidgetCore, WidgetId, WidgetStore};

/// Arrangement rule for a [`Layout`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutKind {
    /// Children run left to right; each keeps its own width and is
    /// stretched to the layout's inner height.
    Horizontal,
    /// Children run top to bottom; each keeps its own height and is
    /// stretched to the layout's inner width.
    Vertical,
    /// Children fill `rows × cols` cells in row-major insertion order and
    /// are resized to the cell.
    Grid { rows: usize, cols: usize },
}

/// A widget that positions other widgets.
pub struct Layout {
    core: WidgetCore,
    kind: LayoutKind,
    padding: f32,
    margin: f32,
    children: Vec<WidgetId>,
}

impl Layout {
    /// Create an empty layout covering `rect`.
    pub fn new(kind: LayoutKind, rect: Rect) -> Self {
        Self {
            core: WidgetCore::new(rect),
            kind,
            padding: 0.0,
            margin: 0.0,
            children: Vec::new(),
        }
    }

    /// Set the gap between consecutive children.
    pub fn with_padding(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }

    /// Set the inset between the layout's edge and its children.
    pub fn with_margin(mut self, margin: f32) -> Self {
        self.margin = margin;
        self
    }

    pub(crate) fn core(&self) -> &WidgetCore {
        &self.core
    }

    pub(crate) fn core_mut(&mut self) -> &mut WidgetCore {
        &mut self.core
    }

    pub fn kind(&self) -> LayoutKind {
        self.kind
    }

    pub fn padding(&self) -> f32 {
        self.padding
    }

    pub fn margin(&self) -> f32 {
        self.margin
    }

    pub fn set_padding(&mut self, padding: f32) {
        self.padding = padding;
    }

    pub fn set_margin(&mut self, margin: f32) {
        self.margin = margin;
    }

    /// The referenced children, in insertion order.
    pub fn children(&self) -> &[WidgetId] {
        &self.children
    }

    pub(crate) fn push_child(&mut self, child: WidgetId) {
        self.children.push(child);
    }
}

static_assertions::assert_impl_all!(Layout: Send, Sync);

/// Run the geometry pass for `layout_id` over the widgets in `store`.
///
/// Only the position and size of referenced children are mutated. Building
/// an unchanged layout twice produces identical geometry.
pub(crate) fn build<S: WidgetStore>(store: &mut S, layout_id: WidgetId) -> Result<()> {
    let (kind, rect, padding, margin, children) = {
        let widget = store.get(layout_id).ok_or(Error::WidgetNotFound(layout_id))?;
        let Widget::Layout(layout) = widget else {
            return Err(Error::KindMismatch {
                expected: crate::widget::WidgetKind::Layout,
                actual: widget.kind(),
            });
        };
        (
            layout.kind,
            layout.core.rect(),
            layout.padding,
            layout.margin,
            layout.children.clone(),
        )
    };

    if children.is_empty() {
        return Ok(());
    }

    match kind {
        LayoutKind::Horizontal => {
            let inner_height = rect.height() - 2.0 * margin;
            let mut cursor = rect.left() + margin;
            for child_id in children {
                let advance = place_in_row(store, child_id, cursor, rect.top() + margin, inner_height, true)?;
                cursor += advance + padding;
            }
        }
        LayoutKind::Vertical => {
            let inner_width = rect.width() - 2.0 * margin;
            let mut cursor = rect.top() + margin;
            for child_id in children {
                let advance = place_in_row(store, child_id, rect.left() + margin, cursor, inner_width, false)?;
                cursor += advance + padding;
            }
        }
        LayoutKind::Grid { rows, cols } => {
            let cells = rows * cols;
            if children.len() > cells {
                // Documented policy: excess children are not placed and
                // keep whatever geometry they had.
                tracing::warn!(
                    target: "trellis::layout",
                    dropped = children.len() - cells,
                    rows,
                    cols,
                    "grid layout has more children than cells"
                );
            }
            let cell_width = (rect.width() - 2.0 * margin) / cols as f32;
            let cell_height = (rect.height() - 2.0 * margin) / rows as f32;
            for (i, child_id) in children.into_iter().take(cells).enumerate() {
                let col = i % cols;
                let row = i / cols;
                let x = rect.left() + margin + col as f32 * cell_width;
                let y = rect.top() + margin + row as f32 * cell_height;

                let (is_layout, _) = child_header(store, child_id)?;
                {
                    let core = store
                        .get_mut(child_id)
                        .ok_or(Error::WidgetNotFound(child_id))?
                        .core_mut();
                    core.move_to(x, y);
                    core.resize(cell_width, cell_height);
                }
                if is_layout {
                    build(store, child_id)?;
                }
            }
        }
    }

    Ok(())
}

/// Place one child at a row/column cursor position.
///
/// For `horizontal` rows the child is stretched to `cross_extent` in height
/// and its width is returned as the cursor advance; vertical is the mirror
/// image. Nested layouts are positioned and rebuilt instead of stretched,
/// and their own extent drives the advance.
fn place_in_row<S: WidgetStore>(
    store: &mut S,
    child_id: WidgetId,
    x: f32,
    y: f32,
    cross_extent: f32,
    horizontal: bool,
) -> Result<f32> {
    let (is_layout, _) = child_header(store, child_id)?;

    {
        let core = store
            .get_mut(child_id)
            .ok_or(Error::WidgetNotFound(child_id))?
            .core_mut();
        core.move_to(x, y);
        if !is_layout {
            let size = core.size();
            if horizontal {
                core.resize(size.width, cross_extent);
            } else {
                core.resize(cross_extent, size.height);
            }
        }
    }

    if is_layout {
        build(store, child_id)?;
    }

    let rect = store
        .get(child_id)
        .ok_or(Error::WidgetNotFound(child_id))?
        .core()
        .rect();
    Ok(if horizontal { rect.width() } else { rect.height() })
}

fn child_header<S: WidgetStore>(store: &S, child_id: WidgetId) -> Result<(bool, Rect)> {
    let widget = store.get(child_id).ok_or(Error::WidgetNotFound(child_id))?;
    Ok((matches!(widget, Widget::Layout(_)), widget.core().rect()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::widgets::Button;
    use slotmap::SlotMap;

    type Store = SlotMap<WidgetId, Widget>;

    fn button(store: &mut Store, width: f32, height: f32) -> WidgetId {
        store.insert(Button::new("b", Rect::new(0.0, 0.0, width, height)).into())
    }

    fn add_child(store: &mut Store, layout_id: WidgetId, child: WidgetId) {
        let Some(Widget::Layout(layout)) = store.get_mut(layout_id) else {
            panic!("not a layout");
        };
        layout.push_child(child);
    }

    fn rect_of(store: &Store, id: WidgetId) -> Rect {
        store.get(id).unwrap().core().rect()
    }

    #[test]
    fn test_horizontal_row_arithmetic() {
        // Width 300, padding 10, margin 5, three default-size buttons:
        // the first starts at x + 5, each next 10 past the previous right edge.
        let mut store = Store::with_key();
        let layout_id = store.insert(
            Layout::new(LayoutKind::Horizontal, Rect::new(0.0, 0.0, 300.0, 60.0))
                .with_padding(10.0)
                .with_margin(5.0)
                .into(),
        );
        let children: Vec<_> = (0..3).map(|_| button(&mut store, 80.0, 30.0)).collect();
        for &child in &children {
            add_child(&mut store, layout_id, child);
        }

        build(&mut store, layout_id).unwrap();

        assert_eq!(rect_of(&store, children[0]), Rect::new(5.0, 5.0, 80.0, 50.0));
        assert_eq!(rect_of(&store, children[1]), Rect::new(95.0, 5.0, 80.0, 50.0));
        assert_eq!(rect_of(&store, children[2]), Rect::new(185.0, 5.0, 80.0, 50.0));
    }

    #[test]
    fn test_vertical_is_the_mirror_image() {
        let mut store = Store::with_key();
        let layout_id = store.insert(
            Layout::new(LayoutKind::Vertical, Rect::new(10.0, 20.0, 200.0, 300.0))
                .with_padding(4.0)
                .with_margin(6.0)
                .into(),
        );
        let a = button(&mut store, 80.0, 30.0);
        let b = button(&mut store, 80.0, 30.0);
        add_child(&mut store, layout_id, a);
        add_child(&mut store, layout_id, b);

        build(&mut store, layout_id).unwrap();

        // Width stretches to the inner width; own heights are kept.
        assert_eq!(rect_of(&store, a), Rect::new(16.0, 26.0, 188.0, 30.0));
        assert_eq!(rect_of(&store, b), Rect::new(16.0, 60.0, 188.0, 30.0));
    }

    #[test]
    fn test_grid_row_major_cells() {
        let mut store = Store::with_key();
        let layout_id = store.insert(
            Layout::new(
                LayoutKind::Grid { rows: 2, cols: 2 },
                Rect::new(0.0, 0.0, 220.0, 120.0),
            )
            .with_margin(10.0)
            .into(),
        );
        let children: Vec<_> = (0..4).map(|_| button(&mut store, 10.0, 10.0)).collect();
        for &child in &children {
            add_child(&mut store, layout_id, child);
        }

        build(&mut store, layout_id).unwrap();

        // Cells are 100x50, row-major from the top-left.
        assert_eq!(rect_of(&store, children[0]), Rect::new(10.0, 10.0, 100.0, 50.0));
        assert_eq!(rect_of(&store, children[1]), Rect::new(110.0, 10.0, 100.0, 50.0));
        assert_eq!(rect_of(&store, children[2]), Rect::new(10.0, 60.0, 100.0, 50.0));
        assert_eq!(rect_of(&store, children[3]), Rect::new(110.0, 60.0, 100.0, 50.0));
    }

    #[test]
    fn test_grid_overflow_leaves_excess_untouched() {
        let mut store = Store::with_key();
        let layout_id = store.insert(
            Layout::new(
                LayoutKind::Grid { rows: 2, cols: 2 },
                Rect::new(0.0, 0.0, 200.0, 100.0),
            )
            .into(),
        );
        let mut children: Vec<_> = (0..4).map(|_| button(&mut store, 10.0, 10.0)).collect();
        let extra = store.insert(Button::new("x", Rect::new(999.0, 999.0, 7.0, 7.0)).into());
        children.push(extra);
        for &child in &children {
            add_child(&mut store, layout_id, child);
        }

        build(&mut store, layout_id).unwrap();

        // rows*cols children are placed; the fifth keeps its geometry and
        // the last cell is not overwritten by it.
        assert_eq!(rect_of(&store, extra), Rect::new(999.0, 999.0, 7.0, 7.0));
        assert_eq!(rect_of(&store, children[3]), Rect::new(100.0, 50.0, 100.0, 50.0));
    }

    #[test]
    fn test_build_is_idempotent() {
        let mut store = Store::with_key();
        let layout_id = store.insert(
            Layout::new(LayoutKind::Horizontal, Rect::new(3.0, 7.0, 300.0, 60.0))
                .with_padding(9.0)
                .with_margin(4.0)
                .into(),
        );
        let children: Vec<_> = (0..3).map(|i| button(&mut store, 40.0 + i as f32, 20.0)).collect();
        for &child in &children {
            add_child(&mut store, layout_id, child);
        }

        build(&mut store, layout_id).unwrap();
        let first: Vec<Rect> = children.iter().map(|&c| rect_of(&store, c)).collect();

        build(&mut store, layout_id).unwrap();
        let second: Vec<Rect> = children.iter().map(|&c| rect_of(&store, c)).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_nested_layout_recurses_before_cursor_advances() {
        let mut store = Store::with_key();
        let outer = store.insert(
            Layout::new(LayoutKind::Horizontal, Rect::new(0.0, 0.0, 400.0, 100.0))
                .with_padding(10.0)
                .into(),
        );
        let leading = button(&mut store, 50.0, 30.0);
        let inner = store.insert(
            Layout::new(LayoutKind::Vertical, Rect::new(0.0, 0.0, 120.0, 100.0)).into(),
        );
        let nested_child = button(&mut store, 20.0, 20.0);
        let trailing = button(&mut store, 50.0, 30.0);

        add_child(&mut store, outer, leading);
        add_child(&mut store, outer, inner);
        add_child(&mut store, outer, trailing);
        add_child(&mut store, inner, nested_child);

        build(&mut store, outer).unwrap();

        // The nested layout is positioned at the cursor, keeps its size,
        // and its child is laid out relative to the new position.
        assert_eq!(rect_of(&store, inner).origin, crate::geometry::Point::new(60.0, 0.0));
        assert_eq!(rect_of(&store, nested_child), Rect::new(60.0, 0.0, 120.0, 20.0));
        // The trailing widget starts after the nested layout's extent.
        assert_eq!(rect_of(&store, trailing).left(), 190.0);
    }

    #[test]
    fn test_empty_layout_is_a_no_op() {
        let mut store = Store::with_key();
        let layout_id =
            store.insert(Layout::new(LayoutKind::Horizontal, Rect::new(0.0, 0.0, 10.0, 10.0)).into());
        assert!(build(&mut store, layout_id).is_ok());
    }

    #[test]
    fn test_build_on_non_layout_is_kind_mismatch() {
        let mut store = Store::with_key();
        let id = button(&mut store, 10.0, 10.0);
        assert!(matches!(
            build(&mut store, id),
            Err(Error::KindMismatch { .. })
        ));
    }
}
