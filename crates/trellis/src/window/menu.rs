//! Window menu bar.
//!
//! A window carries at most one menu: an ordered row of top-level entries
//! along the top edge, each with an ordered list of leaf elements. At most
//! one entry is open at a time — opening one closes its siblings — and
//! while an entry is open the menu captures pointer events ahead of normal
//! hit-testing (with the usual close-then-fallthrough on an outside click).

use trellis_core::Signal;

use crate::geometry::{Point, Rect};
use crate::widget::metrics;

/// Height of the menu bar strip.
pub(crate) const MENU_BAR_HEIGHT: f32 = 25.0;

/// Height of one element row in an open entry.
pub(crate) const MENU_ELEMENT_HEIGHT: f32 = 25.0;

/// Horizontal padding inside an entry title.
const ENTRY_PADDING: f32 = 8.0;

/// A leaf menu element.
pub struct MenuElement {
    title: String,

    /// Emitted when the element is clicked.
    pub activated: Signal<()>,
}

impl MenuElement {
    pub fn title(&self) -> &str {
        &self.title
    }
}

/// A top-level menu entry with its dropdown of elements.
pub struct MenuEntry {
    title: String,
    elements: Vec<MenuElement>,
    open: bool,
    hovered_element: Option<usize>,
}

impl MenuEntry {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn elements(&self) -> &[MenuElement] {
        &self.elements
    }

    /// Typed access to one element.
    pub fn element(&self, index: usize) -> Option<&MenuElement> {
        self.elements.get(index)
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// The element row the pointer is over; presentational state for the
    /// drawer's highlight.
    pub fn hovered_element(&self) -> Option<usize> {
        self.hovered_element
    }
}

/// The menu bar of a window.
pub struct Menu {
    entries: Vec<MenuEntry>,
}

impl Menu {
    pub(crate) fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    pub fn entry(&self, index: usize) -> Option<&MenuEntry> {
        self.entries.get(index)
    }

    /// The index of the open entry, if any.
    pub fn open_entry(&self) -> Option<usize> {
        self.entries.iter().position(|e| e.open)
    }

    pub(crate) fn push_entry(&mut self, title: String) -> usize {
        self.entries.push(MenuEntry {
            title,
            elements: Vec::new(),
            open: false,
            hovered_element: None,
        });
        self.entries.len() - 1
    }

    pub(crate) fn push_element(&mut self, entry: usize, title: String) -> Option<usize> {
        let entry = self.entries.get_mut(entry)?;
        entry.elements.push(MenuElement {
            title,
            activated: Signal::new(),
        });
        Some(entry.elements.len() - 1)
    }

    pub(crate) fn entry_count(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn element_count(&self, entry: usize) -> Option<usize> {
        self.entries.get(entry).map(|e| e.elements.len())
    }

    /// Open entry `index`, closing every sibling. Returns whether anything
    /// changed.
    pub(crate) fn open(&mut self, index: usize) -> bool {
        if index >= self.entries.len() || self.entries[index].open {
            return false;
        }
        for (i, entry) in self.entries.iter_mut().enumerate() {
            entry.open = i == index;
            if !entry.open {
                entry.hovered_element = None;
            }
        }
        true
    }

    /// Close any open entry. Returns whether one was open.
    pub(crate) fn close_all(&mut self) -> bool {
        let was_open = self.open_entry().is_some();
        for entry in &mut self.entries {
            entry.open = false;
            entry.hovered_element = None;
        }
        was_open
    }

    pub(crate) fn set_hovered_element(&mut self, entry: usize, element: Option<usize>) -> bool {
        match self.entries.get_mut(entry) {
            Some(e) if e.hovered_element != element => {
                e.hovered_element = element;
                true
            }
            _ => false,
        }
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    /// The title rect of entry `index` on the bar: entries pack left to
    /// right, sized by their titles.
    pub(crate) fn entry_rect(&self, index: usize) -> Rect {
        let mut x = 0.0;
        for entry in &self.entries[..index] {
            x += metrics::text_width(&entry.title) + 2.0 * ENTRY_PADDING;
        }
        let width = metrics::text_width(&self.entries[index].title) + 2.0 * ENTRY_PADDING;
        Rect::new(x, 0.0, width, MENU_BAR_HEIGHT)
    }

    /// The rect of element row `element` under entry `entry` while open.
    /// Rows share the width of the widest element in the entry.
    pub(crate) fn element_rect(&self, entry: usize, element: usize) -> Rect {
        let entry_rect = self.entry_rect(entry);
        let width = self.entries[entry]
            .elements
            .iter()
            .map(|e| metrics::text_width(&e.title) + 2.0 * ENTRY_PADDING)
            .fold(entry_rect.width(), f32::max);
        Rect::new(
            entry_rect.left(),
            MENU_BAR_HEIGHT + element as f32 * MENU_ELEMENT_HEIGHT,
            width,
            MENU_ELEMENT_HEIGHT,
        )
    }

    /// The entry whose title rect contains `point`, if any.
    pub(crate) fn entry_at(&self, point: Point) -> Option<usize> {
        (0..self.entries.len()).find(|&i| self.entry_rect(i).contains(point))
    }

    /// The element row of the open entry containing `point`, if any.
    pub(crate) fn open_element_at(&self, point: Point) -> Option<(usize, usize)> {
        let entry = self.open_entry()?;
        let count = self.entries[entry].elements.len();
        (0..count)
            .find(|&j| self.element_rect(entry, j).contains(point))
            .map(|j| (entry, j))
    }
}
