//! Image widget.

use trellis_core::Signal;

use crate::geometry::Rect;
use crate::widget::WidgetCore;

/// A clickable image.
///
/// The toolkit stores only the path and a texture slot; decoding and upload
/// are the surface's business. `needs_refresh` tells the surface the source
/// changed since it last uploaded.
pub struct Image {
    core: WidgetCore,
    path: String,
    texture_id: u32,
    needs_refresh: bool,

    /// Emitted when the image is clicked.
    pub clicked: Signal<()>,
}

impl Image {
    pub fn new(rect: Rect, path: impl Into<String>) -> Self {
        Self {
            core: WidgetCore::new(rect),
            path: path.into(),
            texture_id: 0,
            needs_refresh: true,
            clicked: Signal::new(),
        }
    }

    pub(crate) fn core(&self) -> &WidgetCore {
        &self.core
    }

    pub(crate) fn core_mut(&mut self) -> &mut WidgetCore {
        &mut self.core
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Point the widget at a different image source.
    pub fn set_path(&mut self, path: impl Into<String>) {
        self.path = path.into();
        self.needs_refresh = true;
        self.core.mark_dirty();
    }

    pub fn needs_refresh(&self) -> bool {
        self.needs_refresh
    }

    /// The surface's texture handle for this image.
    pub fn texture_id(&self) -> u32 {
        self.texture_id
    }

    /// Record the surface's uploaded texture and clear the refresh flag.
    pub fn set_texture_id(&mut self, id: u32) {
        self.texture_id = id;
        self.needs_refresh = false;
    }
}

static_assertions::assert_impl_all!(Image: Send, Sync);
