//! Dropdown (option picker) widget.

use trellis_core::Signal;

use crate::geometry::{Point, Rect};
use crate::widget::WidgetCore;

/// A closed/open option picker.
///
/// While open, the dropdown captures pointer events ahead of normal
/// hit-testing: clicks on an option row select it, and a click anywhere
/// else closes the dropdown and then falls through to whatever widget is
/// under the pointer — in the same dispatch pass.
pub struct Dropdown {
    core: WidgetCore,
    options: Vec<String>,
    selected: usize,
    open: bool,
    hovered_option: Option<usize>,

    /// Emitted with the index of the newly selected option.
    pub selection_changed: Signal<usize>,
}

impl Dropdown {
    /// Create a dropdown with the given options; option 0 starts selected.
    pub fn new(rect: Rect, options: Vec<String>) -> Self {
        Self {
            core: WidgetCore::new(rect),
            options,
            selected: 0,
            open: false,
            hovered_option: None,
            selection_changed: Signal::new(),
        }
    }

    pub(crate) fn core(&self) -> &WidgetCore {
        &self.core
    }

    pub(crate) fn core_mut(&mut self) -> &mut WidgetCore {
        &mut self.core
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Replace the option list. The selection resets to option 0 and an
    /// open list closes.
    pub fn set_options(&mut self, options: Vec<String>) {
        self.options = options;
        self.selected = 0;
        self.open = false;
        self.hovered_option = None;
        self.core.mark_dirty();
    }

    /// Index of the currently selected option.
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// The currently selected option's text.
    pub fn selected_option(&self) -> Option<&str> {
        self.options.get(self.selected).map(String::as_str)
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// The option row the pointer is over while the list is open.
    pub fn hovered_option(&self) -> Option<usize> {
        self.hovered_option
    }

    pub(crate) fn set_open(&mut self, open: bool) {
        if self.open != open {
            self.open = open;
            if !open {
                self.hovered_option = None;
            }
            self.core.mark_dirty();
        }
    }

    pub(crate) fn set_hovered_option(&mut self, option: Option<usize>) -> bool {
        if self.hovered_option != option {
            self.hovered_option = option;
            self.core.mark_dirty();
            true
        } else {
            false
        }
    }

    /// Select option `index`. Does not emit; dispatch emits after closing.
    pub(crate) fn select(&mut self, index: usize) -> bool {
        if index >= self.options.len() || self.selected == index {
            return false;
        }
        self.selected = index;
        self.core.mark_dirty();
        true
    }

    /// The on-screen rectangle of option row `index` while open: rows stack
    /// directly below the closed box, each of the box's own height.
    pub(crate) fn option_rect(&self, index: usize) -> Rect {
        let rect = self.core.rect();
        Rect::new(
            rect.left(),
            rect.top() + rect.height() * (index as f32 + 1.0),
            rect.width(),
            rect.height(),
        )
    }

    /// The option row containing `point`, if any.
    pub(crate) fn option_at(&self, point: Point) -> Option<usize> {
        (0..self.options.len()).find(|&i| self.option_rect(i).contains(point))
    }

    /// The full open-list footprint (closed box plus all option rows).
    pub(crate) fn open_bounds(&self) -> Rect {
        let rect = self.core.rect();
        Rect::new(
            rect.left(),
            rect.top(),
            rect.width(),
            rect.height() * (self.options.len() as f32 + 1.0),
        )
    }
}

static_assertions::assert_impl_all!(Dropdown: Send, Sync);
