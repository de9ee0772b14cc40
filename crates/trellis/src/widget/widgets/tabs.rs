//! Tab widget: named exclusive visibility groups.
//!
//! Tabs follow the same state machine as
//! [`Container`](super::Container) — exactly one tab active, inactive tabs'
//! widgets excluded from dispatch and drawing while keeping their state —
//! plus a tab strip the user clicks to switch, and an optional sidebar
//! presentation that can be opened and closed.

use trellis_core::Signal;

use crate::error::{Error, Result};
use crate::geometry::{Point, Rect};
use crate::widget::{WidgetCore, WidgetId};

/// Height of the tab strip along the top edge.
pub(crate) const TAB_BAR_HEIGHT: f32 = 30.0;

/// One page of a [`Tabs`] widget.
pub struct TabPage {
    name: String,
    children: Vec<WidgetId>,
}

impl TabPage {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn children(&self) -> &[WidgetId] {
        &self.children
    }
}

/// A tabbed page switcher.
pub struct Tabs {
    core: WidgetCore,
    pages: Vec<TabPage>,
    active: usize,
    sidebar: bool,
    sidebar_open: bool,

    /// Emitted with the index of the newly active tab.
    pub active_changed: Signal<usize>,
}

impl Tabs {
    pub fn new(rect: Rect) -> Self {
        Self {
            core: WidgetCore::new(rect),
            pages: Vec::new(),
            active: 0,
            sidebar: false,
            sidebar_open: false,
            active_changed: Signal::new(),
        }
    }

    /// Present the tab strip as a collapsible sidebar.
    pub fn sidebar(mut self) -> Self {
        self.sidebar = true;
        self
    }

    pub(crate) fn core(&self) -> &WidgetCore {
        &self.core
    }

    pub(crate) fn core_mut(&mut self) -> &mut WidgetCore {
        &mut self.core
    }

    /// Append an empty tab and return its id. The first tab created
    /// becomes the active one.
    pub fn insert_tab(&mut self, name: impl Into<String>) -> usize {
        self.pages.push(TabPage {
            name: name.into(),
            children: Vec::new(),
        });
        self.core.mark_dirty();
        self.pages.len() - 1
    }

    pub fn pages(&self) -> &[TabPage] {
        &self.pages
    }

    pub fn active_tab(&self) -> usize {
        self.active
    }

    /// Make tab `tab` the active one. Same contract as
    /// [`Container::set_active`](super::Container::set_active); does not
    /// emit — dispatch and the window wrapper emit `active_changed` after a
    /// real switch.
    pub fn set_active(&mut self, tab: usize) -> Result<bool> {
        if tab >= self.pages.len() {
            return Err(Error::IndexOutOfRange {
                what: "tabs",
                index: tab,
                len: self.pages.len(),
            });
        }
        if self.active == tab {
            return Ok(false);
        }
        self.active = tab;
        self.core.mark_dirty();
        Ok(true)
    }

    pub fn is_sidebar(&self) -> bool {
        self.sidebar
    }

    pub fn is_sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    /// Open the sidebar strip (sidebar mode only).
    pub fn sidebar_open(&mut self) {
        if self.sidebar && !self.sidebar_open {
            self.sidebar_open = true;
            self.core.mark_dirty();
        }
    }

    /// Close the sidebar strip (sidebar mode only).
    pub fn sidebar_close(&mut self) {
        if self.sidebar && self.sidebar_open {
            self.sidebar_open = false;
            self.core.mark_dirty();
        }
    }

    pub(crate) fn push_child(&mut self, tab: usize, child: WidgetId) -> Result<()> {
        let len = self.pages.len();
        let page = self.pages.get_mut(tab).ok_or(Error::IndexOutOfRange {
            what: "tabs",
            index: tab,
            len,
        })?;
        page.children.push(child);
        Ok(())
    }

    /// The tab referencing `child`, if any.
    pub(crate) fn tab_of(&self, child: WidgetId) -> Option<usize> {
        self.pages.iter().position(|p| p.children.contains(&child))
    }

    /// The tab-strip header rect for tab `index`: headers run left to
    /// right along the widget's top edge, equally sized.
    pub(crate) fn header_rect(&self, index: usize) -> Rect {
        let rect = self.core.rect();
        let count = self.pages.len().max(1) as f32;
        let width = rect.width() / count;
        Rect::new(
            rect.left() + width * index as f32,
            rect.top(),
            width,
            TAB_BAR_HEIGHT,
        )
    }

    /// The tab whose header contains `point`, if any.
    pub(crate) fn header_at(&self, point: Point) -> Option<usize> {
        (0..self.pages.len()).find(|&i| self.header_rect(i).contains(point))
    }
}

static_assertions::assert_impl_all!(Tabs: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_tab_active() {
        let mut tabs = Tabs::new(Rect::new(0.0, 0.0, 300.0, 200.0));
        let home = tabs.insert_tab("Home");
        tabs.insert_tab("Settings");
        assert_eq!(tabs.active_tab(), home);
    }

    #[test]
    fn test_header_hit() {
        let mut tabs = Tabs::new(Rect::new(0.0, 0.0, 300.0, 200.0));
        tabs.insert_tab("a");
        tabs.insert_tab("b");
        tabs.insert_tab("c");

        assert_eq!(tabs.header_at(Point::new(50.0, 10.0)), Some(0));
        assert_eq!(tabs.header_at(Point::new(150.0, 10.0)), Some(1));
        assert_eq!(tabs.header_at(Point::new(299.0, 10.0)), Some(2));
        // Below the strip is page area, not a header.
        assert_eq!(tabs.header_at(Point::new(50.0, 100.0)), None);
    }

    #[test]
    fn test_sidebar_toggle_only_in_sidebar_mode() {
        let mut tabs = Tabs::new(Rect::ZERO);
        tabs.sidebar_open();
        assert!(!tabs.is_sidebar_open());

        let mut side = Tabs::new(Rect::ZERO).sidebar();
        side.sidebar_open();
        assert!(side.is_sidebar_open());
        side.sidebar_close();
        assert!(!side.is_sidebar_open());
    }
}
