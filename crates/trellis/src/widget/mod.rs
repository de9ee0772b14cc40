//! The widget model.
//!
//! Widgets are a closed set of concrete kinds aggregated behind the
//! [`Widget`] tagged enum, stored in an arena and addressed by stable
//! [`WidgetId`] handles. Layouts, containers, and tabs hold handles, never
//! pointers, so reference cycles and teardown-order bugs cannot arise.
//!
//! A widget is created by its kind's constructor without any window, then
//! registered into exactly one window. Until it is registered it is a
//! perfectly valid value the caller owns — it just never draws or receives
//! events.

pub(crate) mod base;
pub mod layout;
pub(crate) mod metrics;
pub mod widgets;

pub use base::WidgetCore;
pub use layout::{Layout, LayoutKind};

use slotmap::new_key_type;

use self::widgets::{
    Button, Canvas, Checkbox, Container, DropSurface, Dropdown, Image, Label, List, Meter, Plot,
    ProgressBar, RadioGroup, Slider, Switch, Tabs, Textbox, Webview,
};

new_key_type! {
    /// A stable handle to a widget registered in a window.
    ///
    /// Handles stay valid for the lifetime of the owning window; a handle
    /// presented to the wrong window (or fabricated) resolves to a reported
    /// [`WidgetNotFound`](crate::error::Error::WidgetNotFound), never to
    /// undefined behavior.
    pub struct WidgetId;
}

/// The closed enumeration of widget kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetKind {
    Button,
    Label,
    Checkbox,
    RadioGroup,
    Slider,
    Dropdown,
    Textbox,
    Layout,
    List,
    Canvas,
    Plot,
    Image,
    DropSurface,
    Tabs,
    Meter,
    Container,
    Switch,
    Webview,
    ProgressBar,
}

/// A registered widget of any kind.
///
/// The variant is the kind tag; it cannot change after construction.
pub enum Widget {
    Button(Button),
    Label(Label),
    Checkbox(Checkbox),
    RadioGroup(RadioGroup),
    Slider(Slider),
    Dropdown(Dropdown),
    Textbox(Textbox),
    Layout(Layout),
    List(List),
    Canvas(Canvas),
    Plot(Plot),
    Image(Image),
    DropSurface(DropSurface),
    Tabs(Tabs),
    Meter(Meter),
    Container(Container),
    Switch(Switch),
    Webview(Webview),
    ProgressBar(ProgressBar),
}

impl Widget {
    /// The widget's kind tag.
    pub fn kind(&self) -> WidgetKind {
        match self {
            Self::Button(_) => WidgetKind::Button,
            Self::Label(_) => WidgetKind::Label,
            Self::Checkbox(_) => WidgetKind::Checkbox,
            Self::RadioGroup(_) => WidgetKind::RadioGroup,
            Self::Slider(_) => WidgetKind::Slider,
            Self::Dropdown(_) => WidgetKind::Dropdown,
            Self::Textbox(_) => WidgetKind::Textbox,
            Self::Layout(_) => WidgetKind::Layout,
            Self::List(_) => WidgetKind::List,
            Self::Canvas(_) => WidgetKind::Canvas,
            Self::Plot(_) => WidgetKind::Plot,
            Self::Image(_) => WidgetKind::Image,
            Self::DropSurface(_) => WidgetKind::DropSurface,
            Self::Tabs(_) => WidgetKind::Tabs,
            Self::Meter(_) => WidgetKind::Meter,
            Self::Container(_) => WidgetKind::Container,
            Self::Switch(_) => WidgetKind::Switch,
            Self::Webview(_) => WidgetKind::Webview,
            Self::ProgressBar(_) => WidgetKind::ProgressBar,
        }
    }

    /// The common header shared by every kind.
    pub fn core(&self) -> &WidgetCore {
        match self {
            Self::Button(w) => w.core(),
            Self::Label(w) => w.core(),
            Self::Checkbox(w) => w.core(),
            Self::RadioGroup(w) => w.core(),
            Self::Slider(w) => w.core(),
            Self::Dropdown(w) => w.core(),
            Self::Textbox(w) => w.core(),
            Self::Layout(w) => w.core(),
            Self::List(w) => w.core(),
            Self::Canvas(w) => w.core(),
            Self::Plot(w) => w.core(),
            Self::Image(w) => w.core(),
            Self::DropSurface(w) => w.core(),
            Self::Tabs(w) => w.core(),
            Self::Meter(w) => w.core(),
            Self::Container(w) => w.core(),
            Self::Switch(w) => w.core(),
            Self::Webview(w) => w.core(),
            Self::ProgressBar(w) => w.core(),
        }
    }

    /// Mutable access to the common header.
    pub fn core_mut(&mut self) -> &mut WidgetCore {
        match self {
            Self::Button(w) => w.core_mut(),
            Self::Label(w) => w.core_mut(),
            Self::Checkbox(w) => w.core_mut(),
            Self::RadioGroup(w) => w.core_mut(),
            Self::Slider(w) => w.core_mut(),
            Self::Dropdown(w) => w.core_mut(),
            Self::Textbox(w) => w.core_mut(),
            Self::Layout(w) => w.core_mut(),
            Self::List(w) => w.core_mut(),
            Self::Canvas(w) => w.core_mut(),
            Self::Plot(w) => w.core_mut(),
            Self::Image(w) => w.core_mut(),
            Self::DropSurface(w) => w.core_mut(),
            Self::Tabs(w) => w.core_mut(),
            Self::Meter(w) => w.core_mut(),
            Self::Container(w) => w.core_mut(),
            Self::Switch(w) => w.core_mut(),
            Self::Webview(w) => w.core_mut(),
            Self::ProgressBar(w) => w.core_mut(),
        }
    }
}

macro_rules! widget_from {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for Widget {
                fn from(w: $ty) -> Self {
                    Self::$variant(w)
                }
            }
        )*
    };
}

widget_from! {
    Button(Button),
    Label(Label),
    Checkbox(Checkbox),
    RadioGroup(RadioGroup),
    Slider(Slider),
    Dropdown(Dropdown),
    Textbox(Textbox),
    Layout(Layout),
    List(List),
    Canvas(Canvas),
    Plot(Plot),
    Image(Image),
    DropSurface(DropSurface),
    Tabs(Tabs),
    Meter(Meter),
    Container(Container),
    Switch(Switch),
    Webview(Webview),
    ProgressBar(ProgressBar),
}

/// Access to widget storage by handle.
///
/// The layout engine and dispatch are written against this trait rather
/// than a concrete container, so tests can run them over a bare arena.
pub trait WidgetStore {
    /// Get an immutable reference to a widget by its ID.
    fn get(&self, id: WidgetId) -> Option<&Widget>;

    /// Get a mutable reference to a widget by its ID.
    fn get_mut(&mut self, id: WidgetId) -> Option<&mut Widget>;
}

impl WidgetStore for slotmap::SlotMap<WidgetId, Widget> {
    fn get(&self, id: WidgetId) -> Option<&Widget> {
        slotmap::SlotMap::get(self, id)
    }

    fn get_mut(&mut self, id: WidgetId) -> Option<&mut Widget> {
        slotmap::SlotMap::get_mut(self, id)
    }
}

static_assertions::assert_impl_all!(Widget: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Point, Rect};

    #[test]
    fn test_kind_tags() {
        let widget: Widget = Button::new("ok", Rect::ZERO).into();
        assert_eq!(widget.kind(), WidgetKind::Button);

        let widget: Widget = Label::new("hi", Point::ZERO, 14.0).into();
        assert_eq!(widget.kind(), WidgetKind::Label);
    }

    #[test]
    fn test_common_header_ops_are_kind_independent() {
        let mut widget: Widget = Slider::new(Point::ZERO, 100.0, 0, 10).into();
        widget.core_mut().move_to(7.0, 9.0);
        widget.core_mut().set_visible(false);
        assert_eq!(widget.core().pos(), Point::new(7.0, 9.0));
        assert!(!widget.core().is_visible());
    }
}
