//! Push button widget.

use trellis_core::Signal;

use crate::geometry::Rect;
use crate::widget::WidgetCore;

/// A clickable push button.
///
/// The `clicked` signal fires on pointer press inside the button's bounds
/// (while enabled); the pressed visual state is cleared again on release.
///
/// # Example
///
/// ```
/// use trellis::widgets::Button;
///
/// let button = Button::new("OK", trellis::geometry::Rect::new(10.0, 10.0, 80.0, 30.0));
/// button.clicked.connect(|_| println!("pressed"));
/// ```
pub struct Button {
    core: WidgetCore,
    label: String,
    enabled: bool,
    highlighted: bool,
    pressed: bool,
    hovered: bool,

    /// Emitted when the button is activated by a pointer press.
    pub clicked: Signal<()>,
}

impl Button {
    /// Create a button with the given label and geometry.
    pub fn new(label: impl Into<String>, rect: Rect) -> Self {
        Self {
            core: WidgetCore::new(rect),
            label: label.into(),
            enabled: true,
            highlighted: false,
            pressed: false,
            hovered: false,
            clicked: Signal::new(),
        }
    }

    pub(crate) fn core(&self) -> &WidgetCore {
        &self.core
    }

    pub(crate) fn core_mut(&mut self) -> &mut WidgetCore {
        &mut self.core
    }

    /// The button's label text.
    pub fn text(&self) -> &str {
        &self.label
    }

    /// Replace the label text.
    pub fn set_text(&mut self, label: impl Into<String>) {
        self.label = label.into();
        self.core.mark_dirty();
    }

    /// Whether the button accepts input.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enable or disable the button. A disabled button stays visible but
    /// is skipped by dispatch.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled != enabled {
            self.enabled = enabled;
            self.core.mark_dirty();
        }
    }

    /// Whether the button is drawn with the highlight accent.
    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    /// Toggle the highlight accent.
    pub fn set_highlighted(&mut self, highlighted: bool) {
        if self.highlighted != highlighted {
            self.highlighted = highlighted;
            self.core.mark_dirty();
        }
    }

    /// Whether the pointer is currently over the button.
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Whether the button is currently held down.
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    pub(crate) fn set_hovered(&mut self, hovered: bool) -> bool {
        if self.hovered != hovered {
            self.hovered = hovered;
            self.core.mark_dirty();
            true
        } else {
            false
        }
    }

    pub(crate) fn set_pressed(&mut self, pressed: bool) {
        if self.pressed != pressed {
            self.pressed = pressed;
            self.core.mark_dirty();
        }
    }
}

static_assertions::assert_impl_all!(Button: Send, Sync);
