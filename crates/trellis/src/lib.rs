//! Trellis — a retained-mode GUI widget toolkit.
//!
//! Applications register typed widgets (buttons, textboxes, layouts, tabs,
//! menus, sliders, ...) with a [`Window`](window::Window); the toolkit owns
//! their storage, computes their geometry from declarative layouts, decides
//! which widgets are live at any moment, routes every input event to the
//! single responsible widget, and tracks when a redraw is owed.
//!
//! What Trellis deliberately does *not* do: rasterize pixels, parse theme
//! files, or talk to the platform. Those arrive through the capability
//! traits in [`backend`] — a [`DrawSurface`](backend::DrawSurface) paints,
//! a [`Backend`](backend::Backend) supplies normalized input and presents
//! frames, and a [`ThemeProvider`](backend::ThemeProvider) loads color
//! themes.
//!
//! # Architecture
//!
//! - [`window::Registry`] — per-window arena of widgets plus the unified
//!   registration-order sequence that defines draw order and dispatch
//!   order (later registration = on top).
//! - [`widget::layout`] — the horizontal/vertical/grid geometry engine.
//! - [`widgets::Container`] / [`widgets::Tabs`] — exclusive visibility
//!   groups; effective visibility is computed per pass, never cached.
//! - `window::dispatch` — the capture-priority event router: modal message
//!   box, then open dropdown, then open menu, then reverse-order
//!   hit-testing.
//! - [`app::App`] — the single-threaded run loop multiplexing windows,
//!   timers, and redraws.
//!
//! # Example
//!
//! ```
//! use trellis::geometry::Rect;
//! use trellis::widget::{Layout, LayoutKind};
//! use trellis::widgets::Button;
//! use trellis::window::Window;
//!
//! let mut window = Window::new("demo", 400.0, 300.0, true);
//!
//! let row = window
//!     .register(Layout::new(
//!         LayoutKind::Horizontal,
//!         Rect::new(0.0, 0.0, 300.0, 60.0),
//!     ).with_padding(10.0).with_margin(5.0))
//!     .unwrap();
//!
//! let ok = window
//!     .add_layout_child(row, Button::new("OK", Rect::new(0.0, 0.0, 80.0, 30.0)))
//!     .unwrap();
//! window.registry().button(ok).unwrap().clicked.connect(|_| {
//!     println!("pressed");
//! });
//!
//! window.build_layout(row).unwrap();
//! assert_eq!(window.registry().button(ok).unwrap().text(), "OK");
//! ```

pub mod app;
pub mod backend;
pub mod error;
pub mod geometry;
pub mod theme;
pub mod widget;
pub mod window;

pub use widget::widgets;

/// The commonly used names in one import.
pub mod prelude {
    pub use crate::app::App;
    pub use crate::backend::{Backend, DrawSurface, ThemeProvider, WindowIndex};
    pub use crate::error::{Error, Result};
    pub use crate::geometry::{Color, Point, Rect, Size};
    pub use crate::theme::Theme;
    pub use crate::widget::{Layout, LayoutKind, Widget, WidgetId, WidgetKind};
    pub use crate::widgets::*;
    pub use crate::window::{
        DispatchResult, MessageBox, MessageBoxKind, Registry, RegistryConfig, Window, WindowKind,
    };
    pub use trellis_core::{Event, Key, PointerButton, Signal, TimerId, TimerManager};
}
