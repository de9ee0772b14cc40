//! Window lifecycle and composition.
//!
//! A [`Window`] owns all of its widgets (via the [`Registry`]), its menu,
//! its active theme, and the dispatch state (focus, hover, captures). The
//! window never draws: it tracks *when* a redraw is owed and hands its
//! unified widget sequence to the draw surface in registration order.

mod dispatch;
mod menu;
mod message_box;
mod registry;

pub use dispatch::DispatchResult;
pub use menu::{Menu, MenuElement, MenuEntry};
pub use message_box::{MessageBox, MessageBoxKind};
pub use registry::{Registry, RegistryConfig};

use trellis_core::Event;

use crate::error::{Error, Result};
use crate::geometry::{Point, Rect, Size};
use crate::theme::Theme;
use crate::widget::{layout, Widget, WidgetId};

/// Regular application window, or the modal message-box flavor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowKind {
    Regular,
    /// A modal message box: while visible it exclusively captures its
    /// application's input.
    MessageBox,
}

/// An on-screen virtual keyboard binding.
///
/// When installed, dispatch shows the keyboard while a textbox holds focus
/// and hides it on defocus. At most one binding exists per window.
#[derive(Debug, Clone)]
pub struct VirtualKeyboard {
    pub rect: Rect,
    pub visible: bool,
}

/// A top-level window.
pub struct Window {
    kind: WindowKind,
    title: String,
    size: Size,
    visible: bool,
    closed: bool,
    resizable: bool,
    decorations: bool,
    debug_overlay: bool,
    continuous_redraw: bool,
    redraw_requested: bool,

    registry: Registry,
    menu: Option<Menu>,
    theme: Theme,
    virtual_keyboard: Option<VirtualKeyboard>,

    // Dispatch state (see `dispatch.rs`).
    pub(crate) focused_textbox: Option<WidgetId>,
    pub(crate) hovered: Option<WidgetId>,
    pub(crate) pressed_button: Option<WidgetId>,
    pub(crate) active_slider: Option<WidgetId>,
    pub(crate) current_event: Option<Event>,
}

impl Window {
    /// Create a window with the default registry configuration.
    pub fn new(title: impl Into<String>, width: f32, height: f32, visible: bool) -> Self {
        Self::with_config(title, width, height, visible, RegistryConfig::default())
    }

    /// Create a window with explicit capacity configuration.
    pub fn with_config(
        title: impl Into<String>,
        width: f32,
        height: f32,
        visible: bool,
        config: RegistryConfig,
    ) -> Self {
        Self {
            kind: WindowKind::Regular,
            title: title.into(),
            size: Size::new(width, height),
            visible,
            closed: false,
            resizable: true,
            decorations: true,
            debug_overlay: false,
            continuous_redraw: false,
            redraw_requested: true,
            registry: Registry::new(config),
            menu: None,
            theme: Theme::default(),
            virtual_keyboard: None,
            focused_textbox: None,
            hovered: None,
            pressed_button: None,
            active_slider: None,
            current_event: None,
        }
    }

    pub(crate) fn message_box(title: impl Into<String>, width: f32, height: f32) -> Self {
        let mut window = Self::new(title, width, height, false);
        window.kind = WindowKind::MessageBox;
        window.resizable = false;
        window.decorations = false;
        window
    }

    // =========================================================================
    // Window attributes
    // =========================================================================

    pub fn kind(&self) -> WindowKind {
        self.kind
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Show or hide the window.
    pub fn set_visible(&mut self, visible: bool) {
        if self.visible != visible {
            self.visible = visible;
            self.request_redraw();
        }
    }

    /// Whether the window has been closed by the platform or the user.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn is_resizable(&self) -> bool {
        self.resizable
    }

    pub fn set_resizable(&mut self, resizable: bool) {
        self.resizable = resizable;
    }

    pub fn has_decorations(&self) -> bool {
        self.decorations
    }

    pub fn set_decorations(&mut self, decorations: bool) {
        self.decorations = decorations;
    }

    pub fn debug_overlay_enabled(&self) -> bool {
        self.debug_overlay
    }

    /// Toggle the diagnostic overlay the surface may draw on top.
    pub fn enable_debug_overlay(&mut self, enabled: bool) {
        if self.debug_overlay != enabled {
            self.debug_overlay = enabled;
            self.request_redraw();
        }
    }

    /// Redraw every frame regardless of dirty state.
    pub fn set_continuous_redraw(&mut self) {
        self.continuous_redraw = true;
    }

    /// Mark the window as owing a redraw.
    pub fn request_redraw(&mut self) {
        self.redraw_requested = true;
    }

    /// Whether a redraw is owed (continuous mode, an explicit request, or
    /// any widget marked dirty).
    pub fn needs_redraw(&self) -> bool {
        self.continuous_redraw || self.redraw_requested || self.registry.any_dirty()
    }

    /// Reset redraw bookkeeping after the surface painted a frame.
    pub fn clear_redraw(&mut self) {
        self.redraw_requested = false;
        self.registry.clear_dirty();
    }

    // =========================================================================
    // Theme
    // =========================================================================

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Apply a theme by value swap. Everything repaints.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.request_redraw();
    }

    // =========================================================================
    // Widgets
    // =========================================================================

    /// Register a widget into this window.
    ///
    /// The widget joins its kind collection and the unified sequence in
    /// registration order; later registrations draw on top and hit-test
    /// first.
    pub fn register(&mut self, widget: impl Into<Widget>) -> Result<WidgetId> {
        self.registry.register(widget)
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut Registry {
        &mut self.registry
    }

    /// The textbox currently holding keyboard focus, if any.
    pub fn focused_textbox(&self) -> Option<WidgetId> {
        self.focused_textbox
    }

    /// The event currently being dispatched. Only valid (Some) while a
    /// dispatch pass is running.
    pub fn current_event(&self) -> Option<&Event> {
        self.current_event.as_ref()
    }

    // =========================================================================
    // Layout composition
    // =========================================================================

    /// Append `child` to `layout`'s child list, registering the widget into
    /// this window so it stays independently addressable for dispatch.
    ///
    /// Returns the child's handle. The new geometry only applies after
    /// [`build_layout`](Self::build_layout) runs again.
    pub fn add_layout_child(
        &mut self,
        layout_id: WidgetId,
        child: impl Into<Widget>,
    ) -> Result<WidgetId> {
        // Validate the target before registering anything.
        self.registry.layout(layout_id)?;
        let child_id = self.registry.register(child)?;
        self.registry.bind_layout(layout_id, child_id)?;
        self.registry.layout_mut(layout_id)?.push_child(child_id);
        Ok(child_id)
    }

    /// Reference an already-registered widget from a layout.
    pub fn adopt_layout_child(&mut self, layout_id: WidgetId, child_id: WidgetId) -> Result<()> {
        self.registry.layout(layout_id)?;
        self.registry.widget(child_id)?;
        self.registry.bind_layout(layout_id, child_id)?;
        self.registry.layout_mut(layout_id)?.push_child(child_id);
        Ok(())
    }

    /// Run the geometry pass for a layout (and, recursively, any nested
    /// layouts it references).
    ///
    /// The engine is not reactive: this must be re-invoked after adding
    /// children or resizing the layout for the new geometry to apply.
    pub fn build_layout(&mut self, layout_id: WidgetId) -> Result<()> {
        layout::build(&mut self.registry, layout_id)
    }

    // =========================================================================
    // Container / tabs composition
    // =========================================================================

    /// Register `child` and reference it from sub-container `group` of
    /// `container`.
    pub fn add_container_child(
        &mut self,
        container_id: WidgetId,
        group: usize,
        child: impl Into<Widget>,
    ) -> Result<WidgetId> {
        // Validate the group up front so a bad index registers nothing.
        self.registry.container(container_id)?.children_of(group)?;
        let child_id = self.registry.register(child)?;
        self.registry.bind_scope(container_id, child_id)?;
        self.registry
            .container_mut(container_id)?
            .push_child(group, child_id)?;
        Ok(child_id)
    }

    /// Register `child` and reference it from tab `tab` of `tabs`.
    pub fn add_tab_child(
        &mut self,
        tabs_id: WidgetId,
        tab: usize,
        child: impl Into<Widget>,
    ) -> Result<WidgetId> {
        let tabs = self.registry.tabs(tabs_id)?;
        if tab >= tabs.pages().len() {
            return Err(Error::IndexOutOfRange {
                what: "tabs",
                index: tab,
                len: tabs.pages().len(),
            });
        }
        let child_id = self.registry.register(child)?;
        self.registry.bind_scope(tabs_id, child_id)?;
        self.registry.tabs_mut(tabs_id)?.push_child(tab, child_id)?;
        Ok(child_id)
    }

    /// Switch the active sub-container of a container.
    pub fn set_active_container(&mut self, container_id: WidgetId, group: usize) -> Result<()> {
        if self.registry.container_mut(container_id)?.set_active(group)? {
            self.request_redraw();
        }
        Ok(())
    }

    /// Switch the active tab of a tab widget, emitting `active_changed` on
    /// a real switch.
    pub fn set_active_tab(&mut self, tabs_id: WidgetId, tab: usize) -> Result<()> {
        if self.registry.tabs_mut(tabs_id)?.set_active(tab)? {
            self.registry.tabs(tabs_id)?.active_changed.emit(tab);
            self.request_redraw();
        }
        Ok(())
    }

    // =========================================================================
    // Radio groups
    // =========================================================================

    /// Add a member button to a radio group, bounded by the configured
    /// per-group capacity. Returns the member's index.
    pub fn add_radio_member(
        &mut self,
        group_id: WidgetId,
        pos: Point,
        label: impl Into<String>,
    ) -> Result<usize> {
        let capacity = self.registry.config().max_radio_members;
        let group = self.registry.radio_group_mut(group_id)?;
        if group.members().len() >= capacity {
            return Err(Error::CapacityExceeded {
                what: "radio group members",
                capacity,
            });
        }
        Ok(group.push_member(pos, label.into()))
    }

    // =========================================================================
    // Menu
    // =========================================================================

    /// Attach an empty menu bar to the window (idempotent).
    pub fn set_menu(&mut self) -> &mut Menu {
        if self.menu.is_none() {
            self.menu = Some(Menu::new());
            self.request_redraw();
        }
        self.menu.as_mut().expect("menu just installed")
    }

    pub fn menu(&self) -> Option<&Menu> {
        self.menu.as_ref()
    }

    /// Add a top-level menu entry, bounded by the configured capacity.
    pub fn add_menu_entry(&mut self, title: impl Into<String>) -> Result<usize> {
        let capacity = self.registry.config().max_menu_entries;
        let menu = self.menu.as_mut().ok_or(Error::IndexOutOfRange {
            what: "menu entries",
            index: 0,
            len: 0,
        })?;
        if menu.entry_count() >= capacity {
            return Err(Error::CapacityExceeded {
                what: "menu entries",
                capacity,
            });
        }
        self.redraw_requested = true;
        Ok(menu.push_entry(title.into()))
    }

    /// Add a leaf element to menu entry `entry`, bounded by the configured
    /// capacity.
    pub fn add_menu_element(&mut self, entry: usize, title: impl Into<String>) -> Result<usize> {
        let capacity = self.registry.config().max_menu_elements;
        let menu = self.menu.as_mut().ok_or(Error::IndexOutOfRange {
            what: "menu entries",
            index: entry,
            len: 0,
        })?;
        let len = menu.element_count(entry).ok_or(Error::IndexOutOfRange {
            what: "menu entries",
            index: entry,
            len: menu.entry_count(),
        })?;
        if len >= capacity {
            return Err(Error::CapacityExceeded {
                what: "menu elements",
                capacity,
            });
        }
        self.redraw_requested = true;
        Ok(menu
            .push_element(entry, title.into())
            .expect("entry index validated above"))
    }

    // =========================================================================
    // Virtual keyboard
    // =========================================================================

    /// Install a virtual keyboard binding. Dispatch shows it while a
    /// textbox holds focus.
    pub fn install_virtual_keyboard(&mut self, rect: Rect) {
        self.virtual_keyboard = Some(VirtualKeyboard {
            rect,
            visible: false,
        });
    }

    pub fn virtual_keyboard(&self) -> Option<&VirtualKeyboard> {
        self.virtual_keyboard.as_ref()
    }

    pub(crate) fn set_virtual_keyboard_visible(&mut self, visible: bool) {
        if let Some(vk) = &mut self.virtual_keyboard {
            if vk.visible != visible {
                vk.visible = visible;
                self.redraw_requested = true;
            }
        }
    }

    pub(crate) fn menu_mut(&mut self) -> Option<&mut Menu> {
        self.menu.as_mut()
    }

    pub(crate) fn mark_closed(&mut self) {
        self.closed = true;
        self.visible = false;
    }

    pub(crate) fn set_size(&mut self, size: Size) {
        if self.size != size {
            self.size = size;
            self.request_redraw();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::widgets::{Button, Container, RadioGroup, Tabs};
    use crate::widget::{Layout, LayoutKind};

    #[test]
    fn test_layout_child_is_registered_for_dispatch() {
        let mut window = Window::new("t", 400.0, 300.0, true);
        let layout_id = window
            .register(Layout::new(LayoutKind::Horizontal, Rect::new(0.0, 0.0, 300.0, 50.0)))
            .unwrap();
        let child = window
            .add_layout_child(layout_id, Button::new("a", Rect::new(0.0, 0.0, 80.0, 30.0)))
            .unwrap();

        // Present in the unified sequence even though geometry is layout-managed.
        assert!(window.registry().ids_in_order().contains(&child));
        assert_eq!(window.registry().layout(layout_id).unwrap().children(), &[child]);
    }

    #[test]
    fn test_add_container_child_bad_group_registers_nothing() {
        let mut window = Window::new("t", 400.0, 300.0, true);
        let container_id = window
            .register(Container::new(Rect::new(0.0, 0.0, 400.0, 300.0)))
            .unwrap();
        // No groups inserted yet.
        let before = window.registry().len();
        let err = window
            .add_container_child(container_id, 0, Button::new("x", Rect::ZERO))
            .unwrap_err();
        assert!(matches!(err, Error::IndexOutOfRange { .. }));
        assert_eq!(window.registry().len(), before);
    }

    #[test]
    fn test_radio_member_capacity() {
        let mut window = Window::with_config(
            "t",
            100.0,
            100.0,
            true,
            RegistryConfig {
                max_radio_members: 2,
                ..RegistryConfig::default()
            },
        );
        let group = window.register(RadioGroup::new()).unwrap();
        window.add_radio_member(group, Point::ZERO, "a").unwrap();
        window.add_radio_member(group, Point::new(0.0, 24.0), "b").unwrap();

        let err = window
            .add_radio_member(group, Point::new(0.0, 48.0), "c")
            .unwrap_err();
        assert!(matches!(err, Error::CapacityExceeded { capacity: 2, .. }));
        assert_eq!(
            window.registry().radio_group(group).unwrap().members().len(),
            2
        );
    }

    #[test]
    fn test_menu_capacities() {
        let mut window = Window::with_config(
            "t",
            100.0,
            100.0,
            true,
            RegistryConfig {
                max_menu_entries: 1,
                max_menu_elements: 1,
                ..RegistryConfig::default()
            },
        );
        window.set_menu();
        let file = window.add_menu_entry("File").unwrap();
        assert!(matches!(
            window.add_menu_entry("Edit"),
            Err(Error::CapacityExceeded { .. })
        ));

        window.add_menu_element(file, "Quit").unwrap();
        assert!(matches!(
            window.add_menu_element(file, "Open"),
            Err(Error::CapacityExceeded { .. })
        ));
    }

    #[test]
    fn test_set_active_tab_emits_on_real_switch_only() {
        use std::sync::atomic::{AtomicUsize, Ordering};
        use std::sync::Arc;

        let mut window = Window::new("t", 400.0, 300.0, true);
        let tabs_id = window
            .register({
                let mut tabs = Tabs::new(Rect::new(0.0, 0.0, 300.0, 200.0));
                tabs.insert_tab("a");
                tabs.insert_tab("b");
                tabs
            })
            .unwrap();

        let fired = Arc::new(AtomicUsize::new(0));
        let fired_clone = fired.clone();
        window
            .registry()
            .tabs(tabs_id)
            .unwrap()
            .active_changed
            .connect(move |_| {
                fired_clone.fetch_add(1, Ordering::SeqCst);
            });

        window.set_active_tab(tabs_id, 1).unwrap();
        window.set_active_tab(tabs_id, 1).unwrap(); // no-op
        assert_eq!(fired.load(Ordering::SeqCst), 1);

        assert!(window.set_active_tab(tabs_id, 9).is_err());
    }
}
