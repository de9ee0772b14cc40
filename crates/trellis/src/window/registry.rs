//! Per-window widget storage.
//!
//! The registry is one arena holding every widget, a per-kind ordered
//! collection of handles, and the unified sequence used for draw order and
//! dispatch order. Every registered widget appears exactly once in its kind
//! collection and exactly once in the unified sequence, in registration
//! order — insertion order is the initial (and only) z-order, with later
//! registrations drawing and hit-testing on top.
//!
//! There is no single-widget removal: widgets live until the window is
//! dropped, which frees the arena wholesale. Layouts, containers, and tabs
//! reference widgets by handle, so teardown order cannot dangle.

use std::collections::HashMap;

use slotmap::{SecondaryMap, SlotMap};

use crate::error::{Error, Result};
use crate::widget::widgets::{
    Button, Canvas, Checkbox, Container, DropSurface, Dropdown, Image, Label, List, Meter, Plot,
    ProgressBar, RadioGroup, Slider, Switch, Tabs, Textbox, Webview,
};
use crate::widget::{Layout, Widget, WidgetId, WidgetKind, WidgetStore};

/// Capacity limits for a window's bounded collections.
///
/// These replace the fixed-size arrays of classic embedded toolkits with
/// explicit configuration: collections grow dynamically up to the ceiling,
/// and hitting a ceiling is a reported
/// [`CapacityExceeded`](crate::error::Error::CapacityExceeded) with no
/// mutation — never a silent truncation.
#[derive(Debug, Clone, Copy)]
pub struct RegistryConfig {
    /// Maximum widgets per kind collection.
    pub max_widgets_per_kind: usize,
    /// Maximum member buttons in one radio group.
    pub max_radio_members: usize,
    /// Maximum top-level menu entries.
    pub max_menu_entries: usize,
    /// Maximum elements per menu entry.
    pub max_menu_elements: usize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            max_widgets_per_kind: 100,
            max_radio_members: 10,
            max_menu_entries: 10,
            max_menu_elements: 10,
        }
    }
}

/// The widget storage of one window.
pub struct Registry {
    /// Backing storage for every widget.
    arena: SlotMap<WidgetId, Widget>,
    /// Per-kind collections, in registration order.
    by_kind: HashMap<WidgetKind, Vec<WidgetId>>,
    /// The unified sequence: every widget, in registration order.
    order: Vec<WidgetId>,
    /// child -> owning container/tabs widget.
    scope_of: SecondaryMap<WidgetId, WidgetId>,
    /// child -> owning layout widget.
    layout_of: SecondaryMap<WidgetId, WidgetId>,
    config: RegistryConfig,
}

impl Registry {
    pub fn new(config: RegistryConfig) -> Self {
        Self {
            arena: SlotMap::with_key(),
            by_kind: HashMap::new(),
            order: Vec::new(),
            scope_of: SecondaryMap::new(),
            layout_of: SecondaryMap::new(),
            config,
        }
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Register a widget, appending it to its kind collection and the
    /// unified sequence.
    ///
    /// Fails with `CapacityExceeded` (and drops nothing, mutates nothing)
    /// once the kind's ceiling is reached.
    pub fn register(&mut self, widget: impl Into<Widget>) -> Result<WidgetId> {
        let widget = widget.into();
        let kind = widget.kind();

        let kind_list = self.by_kind.entry(kind).or_default();
        if kind_list.len() >= self.config.max_widgets_per_kind {
            return Err(Error::CapacityExceeded {
                what: kind_name(kind),
                capacity: self.config.max_widgets_per_kind,
            });
        }

        let id = self.arena.insert(widget);
        kind_list.push(id);
        self.order.push(id);
        tracing::trace!(target: "trellis::registry", ?id, ?kind, "widget registered");
        Ok(id)
    }

    /// Whether `id` resolves to a widget in this registry.
    pub fn contains(&self, id: WidgetId) -> bool {
        self.arena.contains_key(id)
    }

    /// Total number of registered widgets.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// The unified sequence, in registration order (draw order; reverse it
    /// for dispatch order).
    pub fn ids_in_order(&self) -> &[WidgetId] {
        &self.order
    }

    /// The handles of one kind, in registration order.
    pub fn ids_of_kind(&self, kind: WidgetKind) -> &[WidgetId] {
        self.by_kind.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Untyped access by handle.
    pub fn widget(&self, id: WidgetId) -> Result<&Widget> {
        self.arena.get(id).ok_or(Error::WidgetNotFound(id))
    }

    /// Untyped mutable access by handle.
    pub fn widget_mut(&mut self, id: WidgetId) -> Result<&mut Widget> {
        self.arena.get_mut(id).ok_or(Error::WidgetNotFound(id))
    }

    // =========================================================================
    // Scope and layout membership
    // =========================================================================

    /// Record that `owner` (a container or tabs widget) references `child`.
    ///
    /// A widget may be referenced by at most one visibility group, and a
    /// group may not become its own ancestor.
    pub(crate) fn bind_scope(&mut self, owner: WidgetId, child: WidgetId) -> Result<()> {
        if child == owner || self.scope_of.contains_key(child) {
            return Err(Error::ScopeConflict(child));
        }
        // Walk up from the owner; finding `child` there would close a cycle.
        let mut cursor = self.scope_of.get(owner).copied();
        while let Some(ancestor) = cursor {
            if ancestor == child {
                return Err(Error::ScopeConflict(child));
            }
            cursor = self.scope_of.get(ancestor).copied();
        }
        self.scope_of.insert(child, owner);
        Ok(())
    }

    /// Record that `layout` references `child`.
    ///
    /// A widget may be referenced by at most one layout.
    pub(crate) fn bind_layout(&mut self, layout: WidgetId, child: WidgetId) -> Result<()> {
        if child == layout || self.layout_of.contains_key(child) {
            return Err(Error::LayoutConflict(child));
        }
        let mut cursor = self.layout_of.get(layout).copied();
        while let Some(ancestor) = cursor {
            if ancestor == child {
                return Err(Error::LayoutConflict(child));
            }
            cursor = self.layout_of.get(ancestor).copied();
        }
        self.layout_of.insert(child, layout);
        Ok(())
    }

    /// Whether a widget is effectively visible: its own stored flag AND
    /// every visibility group referencing it (transitively) is active and
    /// itself effectively visible.
    ///
    /// Computed on demand at dispatch/draw time; never cached.
    pub fn effectively_visible(&self, id: WidgetId) -> bool {
        let Some(widget) = self.arena.get(id) else {
            return false;
        };
        if !widget.core().is_visible() {
            return false;
        }
        match self.scope_of.get(id) {
            None => true,
            Some(&owner) => {
                let in_active_group = match self.arena.get(owner) {
                    Some(Widget::Container(container)) => {
                        container.group_of(id) == Some(container.active_group())
                    }
                    Some(Widget::Tabs(tabs)) => tabs.tab_of(id) == Some(tabs.active_tab()),
                    _ => false,
                };
                in_active_group && self.effectively_visible(owner)
            }
        }
    }

    /// Whether any widget's appearance changed since the last paint.
    pub(crate) fn any_dirty(&self) -> bool {
        self.arena.values().any(|w| w.core().needs_redraw())
    }

    /// Clear every widget's dirty flag (after a full repaint).
    pub(crate) fn clear_dirty(&mut self) {
        for widget in self.arena.values_mut() {
            widget.core_mut().clear_dirty();
        }
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new(RegistryConfig::default())
    }
}

impl WidgetStore for Registry {
    fn get(&self, id: WidgetId) -> Option<&Widget> {
        self.arena.get(id)
    }

    fn get_mut(&mut self, id: WidgetId) -> Option<&mut Widget> {
        self.arena.get_mut(id)
    }
}

pub(crate) fn kind_name(kind: WidgetKind) -> &'static str {
    match kind {
        WidgetKind::Button => "buttons",
        WidgetKind::Label => "labels",
        WidgetKind::Checkbox => "checkboxes",
        WidgetKind::RadioGroup => "radio groups",
        WidgetKind::Slider => "sliders",
        WidgetKind::Dropdown => "dropdowns",
        WidgetKind::Textbox => "textboxes",
        WidgetKind::Layout => "layouts",
        WidgetKind::List => "lists",
        WidgetKind::Canvas => "canvases",
        WidgetKind::Plot => "plots",
        WidgetKind::Image => "images",
        WidgetKind::DropSurface => "drop surfaces",
        WidgetKind::Tabs => "tab widgets",
        WidgetKind::Meter => "meters",
        WidgetKind::Container => "containers",
        WidgetKind::Switch => "switches",
        WidgetKind::Webview => "webviews",
        WidgetKind::ProgressBar => "progress bars",
    }
}

macro_rules! typed_accessors {
    ($( $name:ident / $name_mut:ident => $variant:ident($ty:ty) ),* $(,)?) => {
        impl Registry {
            $(
                #[doc = concat!("Typed access to a registered [`", stringify!($variant), "`](crate::widgets::", stringify!($variant), ").")]
                pub fn $name(&self, id: WidgetId) -> Result<&$ty> {
                    match self.arena.get(id) {
                        Some(Widget::$variant(w)) => Ok(w),
                        Some(other) => Err(Error::KindMismatch {
                            expected: WidgetKind::$variant,
                            actual: other.kind(),
                        }),
                        None => Err(Error::WidgetNotFound(id)),
                    }
                }

                #[doc = concat!("Typed mutable access to a registered [`", stringify!($variant), "`](crate::widgets::", stringify!($variant), ").")]
                pub fn $name_mut(&mut self, id: WidgetId) -> Result<&mut $ty> {
                    match self.arena.get_mut(id) {
                        Some(Widget::$variant(w)) => Ok(w),
                        Some(other) => Err(Error::KindMismatch {
                            expected: WidgetKind::$variant,
                            actual: other.kind(),
                        }),
                        None => Err(Error::WidgetNotFound(id)),
                    }
                }
            )*
        }
    };
}

typed_accessors! {
    button / button_mut => Button(Button),
    label / label_mut => Label(Label),
    checkbox / checkbox_mut => Checkbox(Checkbox),
    radio_group / radio_group_mut => RadioGroup(RadioGroup),
    slider / slider_mut => Slider(Slider),
    dropdown / dropdown_mut => Dropdown(Dropdown),
    textbox / textbox_mut => Textbox(Textbox),
    layout / layout_mut => Layout(Layout),
    list / list_mut => List(List),
    canvas / canvas_mut => Canvas(Canvas),
    plot / plot_mut => Plot(Plot),
    image / image_mut => Image(Image),
    drop_surface / drop_surface_mut => DropSurface(DropSurface),
    tabs / tabs_mut => Tabs(Tabs),
    meter / meter_mut => Meter(Meter),
    container / container_mut => Container(Container),
    switch / switch_mut => Switch(Switch),
    webview / webview_mut => Webview(Webview),
    progress_bar / progress_bar_mut => ProgressBar(ProgressBar),
}
