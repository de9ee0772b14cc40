//! Concrete widget kinds.
//!
//! Each widget is a plain struct embedding a
//! [`WidgetCore`](crate::widget::WidgetCore) plus its own state and
//! notification signals. Construction never needs a window; a widget only
//! starts participating in layout, dispatch, and drawing once it is
//! registered (see [`Window::register`](crate::window::Window::register)).

mod button;
mod canvas;
mod checkbox;
mod container;
mod drop_surface;
mod dropdown;
mod image;
mod label;
mod list;
mod meter;
mod plot;
mod progress_bar;
mod radio_group;
mod slider;
mod switch;
mod tabs;
mod textbox;
mod webview;

pub use button::Button;
pub use canvas::{Canvas, CanvasOp};
pub use checkbox::Checkbox;
pub use container::Container;
pub use drop_surface::DropSurface;
pub use dropdown::Dropdown;
pub use image::Image;
pub use label::Label;
pub use list::{List, ListItem};
pub use meter::Meter;
pub use plot::{Plot, PlotData, PlotKind};
pub use progress_bar::ProgressBar;
pub use radio_group::{RadioGroup, RadioMember};
pub use slider::{Slider, SliderOrientation};
pub use switch::Switch;
pub use tabs::{TabPage, Tabs};
pub use textbox::Textbox;
pub use webview::Webview;
