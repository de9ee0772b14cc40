//! File drop target widget.

use trellis_core::Signal;

use crate::geometry::Rect;
use crate::widget::WidgetCore;

/// A rectangular file drop target.
///
/// A drop inside the bounds records the file, flips `is_file_dropped`, and
/// emits `file_dropped` with the `(mime, path)` pair. [`clear`](Self::clear)
/// resets the message and flag without unregistering the widget.
pub struct DropSurface {
    core: WidgetCore,
    default_message: String,
    message: String,
    file_dropped_flag: bool,

    /// Emitted with `(mime, path)` when a file lands on the surface.
    pub file_dropped: Signal<(String, String)>,
}

impl DropSurface {
    pub fn new(rect: Rect, default_message: impl Into<String>) -> Self {
        let default_message = default_message.into();
        Self {
            core: WidgetCore::new(rect),
            message: default_message.clone(),
            default_message,
            file_dropped_flag: false,
            file_dropped: Signal::new(),
        }
    }

    pub(crate) fn core(&self) -> &WidgetCore {
        &self.core
    }

    pub(crate) fn core_mut(&mut self) -> &mut WidgetCore {
        &mut self.core
    }

    /// The message the surface currently displays.
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_file_dropped(&self) -> bool {
        self.file_dropped_flag
    }

    /// Reset to the default message and clear the dropped flag.
    pub fn clear(&mut self) {
        self.message = self.default_message.clone();
        self.file_dropped_flag = false;
        self.core.mark_dirty();
    }

    /// Record a drop. Returns the display name shown on the surface.
    pub(crate) fn accept_drop(&mut self, path: &str) {
        // Show just the file name, not the whole path.
        let name = path.rsplit(['/', '\\']).next().unwrap_or(path);
        self.message = name.to_string();
        self.file_dropped_flag = true;
        self.core.mark_dirty();
    }
}

static_assertions::assert_impl_all!(DropSurface: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accept_and_clear() {
        let mut surface = DropSurface::new(Rect::new(0.0, 0.0, 100.0, 100.0), "Drop here");
        assert_eq!(surface.message(), "Drop here");

        surface.accept_drop("/tmp/archive.zip");
        assert!(surface.is_file_dropped());
        assert_eq!(surface.message(), "archive.zip");

        surface.clear();
        assert!(!surface.is_file_dropped());
        assert_eq!(surface.message(), "Drop here");
    }
}
