//! Scrollable item list widget.

use trellis_core::Signal;

use crate::error::{Error, Result};
use crate::geometry::{Point, Rect};
use crate::widget::WidgetCore;

/// One entry in a [`List`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    pub title: String,
    pub description: String,
}

/// A vertically scrolling list of titled items.
///
/// `clear_items` is the only supported runtime removal anywhere in the
/// toolkit — it empties the list's internal item array, never the widget
/// itself.
pub struct List {
    core: WidgetCore,
    items: Vec<ListItem>,
    scroll_offset: f32,
    item_spacing: f32,
    show_separator: bool,
    hovered_item: Option<usize>,

    /// Emitted with the index of a clicked item.
    pub item_activated: Signal<usize>,
}

impl List {
    pub fn new(rect: Rect) -> Self {
        Self {
            core: WidgetCore::new(rect),
            items: Vec::new(),
            scroll_offset: 0.0,
            item_spacing: 40.0,
            show_separator: true,
            hovered_item: None,
            item_activated: Signal::new(),
        }
    }

    pub(crate) fn core(&self) -> &WidgetCore {
        &self.core
    }

    pub(crate) fn core_mut(&mut self) -> &mut WidgetCore {
        &mut self.core
    }

    pub fn items(&self) -> &[ListItem] {
        &self.items
    }

    /// Append an item.
    pub fn add_item(&mut self, title: impl Into<String>, description: impl Into<String>) {
        self.items.push(ListItem {
            title: title.into(),
            description: description.into(),
        });
        self.core.mark_dirty();
    }

    /// Replace the item at `index`.
    pub fn update_item(
        &mut self,
        index: usize,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<()> {
        let len = self.items.len();
        let item = self.items.get_mut(index).ok_or(Error::IndexOutOfRange {
            what: "list items",
            index,
            len,
        })?;
        item.title = title.into();
        item.description = description.into();
        self.core.mark_dirty();
        Ok(())
    }

    /// Remove every item. The widget itself stays registered.
    pub fn clear_items(&mut self) {
        self.items.clear();
        self.scroll_offset = 0.0;
        self.hovered_item = None;
        self.core.mark_dirty();
    }

    pub fn show_separator(&mut self, show: bool) {
        if self.show_separator != show {
            self.show_separator = show;
            self.core.mark_dirty();
        }
    }

    pub fn has_separator(&self) -> bool {
        self.show_separator
    }

    /// Row height, which doubles as the per-item spacing unit.
    pub fn item_spacing(&self) -> f32 {
        self.item_spacing
    }

    pub fn set_item_spacing(&mut self, spacing: f32) {
        self.item_spacing = spacing.max(1.0);
        self.core.mark_dirty();
    }

    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    pub fn hovered_item(&self) -> Option<usize> {
        self.hovered_item
    }

    pub(crate) fn set_hovered_item(&mut self, item: Option<usize>) -> bool {
        if self.hovered_item != item {
            self.hovered_item = item;
            self.core.mark_dirty();
            true
        } else {
            false
        }
    }

    /// Scroll by a wheel delta (positive scrolls up), clamped so the list
    /// never scrolls past its content.
    pub(crate) fn scroll_by(&mut self, delta: f32) -> bool {
        let content_height = self.items.len() as f32 * self.item_spacing;
        let max_offset = (content_height - self.core.rect().height()).max(0.0);
        let new_offset = (self.scroll_offset - delta).clamp(0.0, max_offset);
        if (new_offset - self.scroll_offset).abs() > f32::EPSILON {
            self.scroll_offset = new_offset;
            self.core.mark_dirty();
            true
        } else {
            false
        }
    }

    /// The item row at a pointer position, accounting for scroll.
    pub(crate) fn item_at(&self, point: Point) -> Option<usize> {
        let rect = self.core.rect();
        if !rect.contains(point) {
            return None;
        }
        let index = ((point.y - rect.top() + self.scroll_offset) / self.item_spacing) as usize;
        (index < self.items.len()).then_some(index)
    }
}

static_assertions::assert_impl_all!(List: Send, Sync);
