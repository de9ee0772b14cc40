//! Capability traits for the excluded collaborators.
//!
//! The toolkit owns widget storage, layout, visibility, and event routing;
//! everything that touches pixels or the platform is consumed through the
//! traits in this module. The contract runs one way: by the time the
//! toolkit hands a widget to [`DrawSurface::paint`], its geometry is final
//! and it is effectively visible — the surface never re-checks either.

use std::time::Duration;

use trellis_core::Event;

use crate::error::Result;
use crate::geometry::{Color, Size};
use crate::theme::Theme;
use crate::widget::Widget;

/// Index of a window within an [`App`](crate::app::App).
///
/// The backend tags each event with the window it belongs to; multi-window
/// operation multiplexes at the poll step only.
pub type WindowIndex = usize;

/// The platform capability: raw input in, frames out.
pub trait Backend {
    /// Block for up to `timeout` waiting for the next platform event.
    ///
    /// `None` timeout means block indefinitely. Returns `None` when the
    /// timeout elapsed without an event (the run loop then services
    /// timers). Coordinates in returned events must already be normalized
    /// to the target window's space.
    fn poll_event(&mut self, timeout: Option<Duration>) -> Option<(WindowIndex, Event)>;

    /// Present the most recently drawn frame for a window.
    fn present(&mut self, window: WindowIndex);
}

/// The rendering capability.
///
/// One `begin_frame`/`paint`.../`end_frame` cycle per window redraw. The
/// toolkit calls `paint` once per effectively-visible widget, in
/// registration order (back to front), so the surface can paint in call
/// order without any z sorting of its own.
pub trait DrawSurface {
    /// Start a frame for a window of the given size, cleared to `clear`.
    fn begin_frame(&mut self, window: WindowIndex, size: Size, clear: Color);

    /// Paint a single widget with the window's active theme.
    fn paint(&mut self, widget: &Widget, theme: &Theme);

    /// Finish the frame started by `begin_frame`.
    fn end_frame(&mut self, window: WindowIndex);
}

/// The theme-loading capability.
///
/// Parsing lives entirely behind this trait; the toolkit only honors the
/// success/failure of the result.
pub trait ThemeProvider {
    /// Load a theme from an opaque source string (a path, inline JSON —
    /// whatever the provider understands).
    fn load(&self, source: &str) -> Result<Theme>;
}
