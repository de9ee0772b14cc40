//! Embedded web view widget.
//!
//! Opaque to the toolkit: it holds a URL and a refresh flag for whatever
//! embedding the platform provides.

use crate::geometry::Rect;
use crate::widget::WidgetCore;

pub struct Webview {
    core: WidgetCore,
    url: String,
    needs_refresh: bool,
}

impl Webview {
    pub fn new(rect: Rect, url: impl Into<String>) -> Self {
        Self {
            core: WidgetCore::new(rect),
            url: url.into(),
            needs_refresh: true,
        }
    }

    pub(crate) fn core(&self) -> &WidgetCore {
        &self.core
    }

    pub(crate) fn core_mut(&mut self) -> &mut WidgetCore {
        &mut self.core
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn set_url(&mut self, url: impl Into<String>) {
        self.url = url.into();
        self.needs_refresh = true;
        self.core.mark_dirty();
    }

    pub fn needs_refresh(&self) -> bool {
        self.needs_refresh
    }

    pub fn mark_refreshed(&mut self) {
        self.needs_refresh = false;
    }
}

static_assertions::assert_impl_all!(Webview: Send, Sync);
