//! Event dispatch and focus routing.
//!
//! One event is routed to completion before the next is accepted; dispatch
//! never suspends mid-pass, and every callback a widget fires runs
//! synchronously inside the pass that triggered it.
//!
//! Pointer events resolve their target in a fixed priority order:
//!
//! 1. Modal capture — handled one level up by the
//!    [`App`](crate::app::App), which routes every event to a visible
//!    message-box window when one exists.
//! 2. Open-dropdown capture: the open option list is tested first; a click
//!    outside it closes the list and *falls through* to normal hit-testing
//!    of the same event, in the same pass.
//! 3. Open-menu capture, with the same close-then-fallthrough rule.
//! 4. The menu bar itself.
//! 5. Normal hit-testing over the unified sequence in reverse registration
//!    order (most recently registered first), restricted to effectively
//!    visible widgets. Overlap ties go to the later registration — drawn
//!    last, on top, hit first.
//!
//! Key events route exclusively to the focused textbox; scroll to the
//! topmost list under the pointer; file drops to the topmost drop surface
//! containing the drop point. Anything unmatched is dropped silently.

use trellis_core::{Event, Key, PointerButton};

use crate::geometry::Point;
use crate::widget::{Widget, WidgetId, WidgetKind};

use super::{Window, WindowKind};

/// Result of dispatching an event to a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchResult {
    /// The event found a responsible widget (or capture state) and was
    /// delivered.
    Accepted,
    /// No widget matched; the event was dropped. Not an error.
    Ignored,
}

impl DispatchResult {
    pub fn was_handled(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

/// Outcome of a capture test (open dropdown / open menu).
enum Capture {
    Handled,
    /// The capture state was closed by an outside click; the event
    /// re-enters normal hit-testing in the same pass.
    FallThrough,
}

impl Window {
    /// Dispatch one event to completion.
    ///
    /// The window's `current_event` slot holds the event for the duration
    /// of the pass and is cleared before returning.
    #[tracing::instrument(skip_all, target = "trellis::dispatch", level = "trace")]
    pub fn handle_event(&mut self, event: &Event) -> DispatchResult {
        // Window-state events are honored even while hidden; input is not.
        match *event {
            Event::WindowResized { width, height } => {
                self.set_size(crate::geometry::Size::new(width, height));
                return DispatchResult::Accepted;
            }
            Event::CloseRequested => {
                self.mark_closed();
                return DispatchResult::Accepted;
            }
            _ => {}
        }
        if !self.is_visible() {
            return DispatchResult::Ignored;
        }

        self.current_event = Some(event.clone());
        let result = match *event {
            Event::PointerPressed { x, y, button } => {
                if button == PointerButton::Primary {
                    self.dispatch_press(Point::new(x, y))
                } else {
                    DispatchResult::Ignored
                }
            }
            Event::PointerReleased { button, .. } => {
                if button == PointerButton::Primary {
                    self.dispatch_release()
                } else {
                    DispatchResult::Ignored
                }
            }
            Event::PointerMoved { x, y } => self.dispatch_move(Point::new(x, y)),
            Event::Scroll { x, y, delta } => self.dispatch_scroll(Point::new(x, y), delta),
            Event::KeyPressed { key } => self.dispatch_key(key),
            Event::FileDropped {
                x,
                y,
                ref mime,
                ref path,
            } => self.dispatch_drop(Point::new(x, y), mime, path),
            // Handled above, before the visibility gate.
            Event::WindowResized { .. } | Event::CloseRequested => DispatchResult::Accepted,
            // Timer fan-out happens in the app; a window has no timer state.
            Event::TimerFired { .. } => DispatchResult::Ignored,
        };
        self.current_event = None;
        result
    }

    // =========================================================================
    // Pointer press
    // =========================================================================

    fn dispatch_press(&mut self, point: Point) -> DispatchResult {
        // Step 2: open-dropdown capture.
        if let Some(dropdown_id) = self.open_dropdown() {
            match self.press_captured_dropdown(dropdown_id, point) {
                Capture::Handled => return DispatchResult::Accepted,
                Capture::FallThrough => {}
            }
        }

        // Step 3: open-menu capture.
        if self.menu().is_some_and(|m| m.open_entry().is_some()) {
            match self.press_captured_menu(point) {
                Capture::Handled => return DispatchResult::Accepted,
                Capture::FallThrough => {}
            }
        }

        // The menu bar sits above all widgets.
        if let Some(menu) = self.menu_mut() {
            if let Some(entry) = menu.entry_at(point) {
                menu.open(entry);
                self.request_redraw();
                return DispatchResult::Accepted;
            }
        }

        // Step 4: normal hit-testing.
        match self.hit_test(point) {
            Some(target) => self.activate(target, point),
            None => {
                // A click on empty space still defocuses (flushing) any
                // focused textbox, then drops.
                self.defocus_textbox();
                DispatchResult::Ignored
            }
        }
    }

    fn press_captured_dropdown(&mut self, dropdown_id: WidgetId, point: Point) -> Capture {
        let Ok(dropdown) = self.registry_mut().dropdown_mut(dropdown_id) else {
            return Capture::FallThrough;
        };
        if let Some(index) = dropdown.option_at(point) {
            dropdown.select(index);
            dropdown.set_open(false);
            dropdown.selection_changed.emit(index);
            Capture::Handled
        } else if dropdown.core().rect().contains(point) {
            // A click on the closed box itself toggles the list shut.
            dropdown.set_open(false);
            Capture::Handled
        } else {
            // Outside click: close, then re-evaluate this same event
            // against whatever lies under the pointer.
            dropdown.set_open(false);
            tracing::trace!(target: "trellis::dispatch", "outside click closed dropdown, falling through");
            Capture::FallThrough
        }
    }

    fn press_captured_menu(&mut self, point: Point) -> Capture {
        let Some(menu) = self.menu_mut() else {
            return Capture::FallThrough;
        };
        if let Some((entry, element)) = menu.open_element_at(point) {
            menu.close_all();
            self.request_redraw();
            if let Some(leaf) = self
                .menu()
                .and_then(|m| m.entry(entry))
                .and_then(|e| e.element(element))
            {
                leaf.activated.emit(());
            }
            Capture::Handled
        } else if let Some(entry) = menu.entry_at(point) {
            // Clicking the open entry's title closes it; clicking a
            // sibling's title swaps the open entry (mutual exclusion).
            if menu.entry(entry).is_some_and(|e| e.is_open()) {
                menu.close_all();
            } else {
                menu.open(entry);
            }
            self.request_redraw();
            Capture::Handled
        } else {
            menu.close_all();
            self.request_redraw();
            tracing::trace!(target: "trellis::dispatch", "outside click closed menu, falling through");
            Capture::FallThrough
        }
    }

    /// Deliver a press to the widget that won hit-testing.
    fn activate(&mut self, target: WidgetId, point: Point) -> DispatchResult {
        // Step 5: a press anywhere but the focused textbox transfers focus
        // away, flushing its pending edit first.
        if self.focused_textbox != Some(target) {
            self.defocus_textbox();
        }

        let is_message_box = self.kind() == WindowKind::MessageBox;
        let mut focus_gained = false;
        let mut dismiss_message_box = false;

        match self.registry_mut().widget_mut(target) {
            Ok(Widget::Button(button)) => {
                if button.is_enabled() {
                    button.set_pressed(true);
                    button.clicked.emit(());
                    self.pressed_button = Some(target);
                    // A message box is dismissed by any of its buttons.
                    dismiss_message_box = is_message_box;
                }
            }
            Ok(Widget::Checkbox(checkbox)) => {
                let state = checkbox.flip();
                checkbox.toggled.emit(state);
            }
            Ok(Widget::Switch(switch)) => {
                let state = switch.flip();
                switch.toggled.emit(state);
            }
            Ok(Widget::RadioGroup(group)) => {
                // Step 6: mutual exclusion applies before the callback runs.
                if let Some(index) = group.member_at(point) {
                    group.select(index);
                    group.selection_changed.emit(index);
                }
            }
            Ok(Widget::Slider(slider)) => {
                let value = slider.value_at(point);
                let changed = value != slider.value();
                slider.set_value(value);
                if changed {
                    slider.value_changed.emit(value);
                }
                self.active_slider = Some(target);
            }
            Ok(Widget::Dropdown(dropdown)) => {
                dropdown.set_open(true);
            }
            Ok(Widget::Textbox(textbox)) => {
                textbox.set_focused(true);
                textbox.set_cursor_from_point(point);
                self.focused_textbox = Some(target);
                focus_gained = true;
            }
            Ok(Widget::List(list)) => {
                if let Some(index) = list.item_at(point) {
                    list.item_activated.emit(index);
                }
            }
            Ok(Widget::Canvas(canvas)) => {
                let origin = canvas.core().pos();
                canvas
                    .clicked
                    .emit(Point::new(point.x - origin.x, point.y - origin.y));
            }
            Ok(Widget::Image(image)) => {
                image.clicked.emit(());
            }
            Ok(Widget::Tabs(tabs)) => {
                if let Some(tab) = tabs.header_at(point) {
                    if tabs.set_active(tab).unwrap_or(false) {
                        tabs.active_changed.emit(tab);
                    }
                }
            }
            // Labels, meters, plots, progress bars, webviews, and drop
            // surfaces are legitimate hit targets that consume the press
            // without an action of their own.
            Ok(_) => {}
            Err(_) => return DispatchResult::Ignored,
        }

        if focus_gained {
            self.set_virtual_keyboard_visible(true);
        }
        if dismiss_message_box {
            self.set_visible(false);
        }
        DispatchResult::Accepted
    }

    // =========================================================================
    // Pointer release / move
    // =========================================================================

    fn dispatch_release(&mut self) -> DispatchResult {
        let mut handled = false;
        if let Some(id) = self.pressed_button.take() {
            if let Ok(button) = self.registry_mut().button_mut(id) {
                button.set_pressed(false);
            }
            handled = true;
        }
        if self.active_slider.take().is_some() {
            handled = true;
        }
        if handled {
            DispatchResult::Accepted
        } else {
            DispatchResult::Ignored
        }
    }

    fn dispatch_move(&mut self, point: Point) -> DispatchResult {
        // An active slider drag captures all motion.
        if let Some(slider_id) = self.active_slider {
            if let Ok(slider) = self.registry_mut().slider_mut(slider_id) {
                let value = slider.value_at(point);
                if value != slider.value() {
                    slider.set_value(value);
                    slider.value_changed.emit(value);
                }
            }
            return DispatchResult::Accepted;
        }

        // Option-row highlight while a dropdown is open.
        if let Some(dropdown_id) = self.open_dropdown() {
            if let Ok(dropdown) = self.registry_mut().dropdown_mut(dropdown_id) {
                let over = dropdown.option_at(point);
                dropdown.set_hovered_option(over);
            }
            return DispatchResult::Accepted;
        }

        // Element highlight while a menu entry is open.
        if let Some(menu) = self.menu_mut() {
            if let Some(entry) = menu.open_entry() {
                let element = menu.open_element_at(point).map(|(_, element)| element);
                if menu.set_hovered_element(entry, element) {
                    self.request_redraw();
                }
                return DispatchResult::Accepted;
            }
        }

        // Plain hover tracking.
        let target = self.hit_test(point);
        if target != self.hovered {
            if let Some(old) = self.hovered {
                match self.registry_mut().widget_mut(old) {
                    Ok(Widget::Button(button)) => {
                        button.set_hovered(false);
                    }
                    Ok(Widget::List(list)) => {
                        list.set_hovered_item(None);
                    }
                    _ => {}
                }
            }
            if let Some(new) = target {
                if let Ok(Widget::Button(button)) = self.registry_mut().widget_mut(new) {
                    button.set_hovered(true);
                }
            }
            self.hovered = target;
        }

        // Per-row hover inside a hovered list.
        if let Some(id) = target {
            if let Ok(Widget::List(list)) = self.registry_mut().widget_mut(id) {
                let item = list.item_at(point);
                list.set_hovered_item(item);
            }
        }

        if target.is_some() {
            DispatchResult::Accepted
        } else {
            DispatchResult::Ignored
        }
    }

    // =========================================================================
    // Scroll / keys / drops
    // =========================================================================

    fn dispatch_scroll(&mut self, point: Point, delta: f32) -> DispatchResult {
        let target = self
            .registry()
            .ids_in_order()
            .iter()
            .rev()
            .copied()
            .find(|&id| {
                matches!(self.registry().widget(id), Ok(Widget::List(_)))
                    && self.registry().effectively_visible(id)
                    && self
                        .registry()
                        .widget(id)
                        .map(|w| w.core().contains(point))
                        .unwrap_or(false)
            });
        let Some(list_id) = target else {
            return DispatchResult::Ignored;
        };
        if let Ok(list) = self.registry_mut().list_mut(list_id) {
            list.scroll_by(delta);
        }
        DispatchResult::Accepted
    }

    fn dispatch_key(&mut self, key: Key) -> DispatchResult {
        // Keys route exclusively to the focused textbox; no focus target
        // means the event is dropped.
        let Some(textbox_id) = self.focused_textbox else {
            return DispatchResult::Ignored;
        };
        match key {
            Key::Escape => {
                self.defocus_textbox();
                return DispatchResult::Accepted;
            }
            Key::Tab => return DispatchResult::Ignored,
            _ => {}
        }
        let Ok(textbox) = self.registry_mut().textbox_mut(textbox_id) else {
            return DispatchResult::Ignored;
        };
        match key {
            Key::Char(ch) => textbox.insert_char(ch),
            Key::Backspace => textbox.delete_back(),
            Key::Delete => textbox.delete_forward(),
            Key::Left => textbox.move_cursor_left(),
            Key::Right => textbox.move_cursor_right(),
            Key::Home => textbox.move_cursor_home(),
            Key::End => textbox.move_cursor_end(),
            Key::Enter => {
                if textbox.has_pending_edit() {
                    let text = textbox.text().to_string();
                    textbox.commit_edit();
                    textbox.text_changed.emit(text);
                }
            }
            // Escape and Tab were consumed before the textbox borrow.
            Key::Escape | Key::Tab => {}
        }
        DispatchResult::Accepted
    }

    fn dispatch_drop(&mut self, point: Point, mime: &str, path: &str) -> DispatchResult {
        let target = self
            .registry()
            .ids_in_order()
            .iter()
            .rev()
            .copied()
            .find(|&id| {
                matches!(self.registry().widget(id), Ok(Widget::DropSurface(_)))
                    && self.registry().effectively_visible(id)
                    && self
                        .registry()
                        .widget(id)
                        .map(|w| w.core().contains(point))
                        .unwrap_or(false)
            });
        let Some(surface_id) = target else {
            return DispatchResult::Ignored;
        };
        if let Ok(surface) = self.registry_mut().drop_surface_mut(surface_id) {
            surface.accept_drop(path);
            surface
                .file_dropped
                .emit((mime.to_string(), path.to_string()));
        }
        DispatchResult::Accepted
    }

    // =========================================================================
    // Shared helpers
    // =========================================================================

    /// The widget under `point`, searching the unified sequence topmost
    /// first and skipping anything not effectively visible.
    ///
    /// Layouts and containers are positioning/scoping structures, not
    /// input targets; they are transparent to hit-testing.
    pub(crate) fn hit_test(&self, point: Point) -> Option<WidgetId> {
        for &id in self.registry().ids_in_order().iter().rev() {
            let Ok(widget) = self.registry().widget(id) else {
                continue;
            };
            if matches!(widget.kind(), WidgetKind::Layout | WidgetKind::Container) {
                continue;
            }
            if !self.registry().effectively_visible(id) {
                continue;
            }
            if widget.core().contains(point) {
                return Some(id);
            }
        }
        None
    }

    /// The currently open dropdown, if any.
    fn open_dropdown(&self) -> Option<WidgetId> {
        self.registry()
            .ids_of_kind(WidgetKind::Dropdown)
            .iter()
            .copied()
            .find(|&id| {
                self.registry()
                    .dropdown(id)
                    .map(|d| d.is_open())
                    .unwrap_or(false)
            })
    }

    /// Drop keyboard focus, flushing the textbox's pending edit.
    pub(crate) fn defocus_textbox(&mut self) {
        let Some(id) = self.focused_textbox.take() else {
            return;
        };
        if let Ok(textbox) = self.registry_mut().textbox_mut(id) {
            if textbox.has_pending_edit() {
                let text = textbox.text().to_string();
                textbox.commit_edit();
                textbox.text_changed.emit(text);
            }
            textbox.set_focused(false);
        }
        self.set_virtual_keyboard_visible(false);
    }
}
