//! The application run loop.
//!
//! An [`App`] multiplexes any number of windows over one [`Backend`]. The
//! loop is single-threaded and reactive: block on the platform for the next
//! event (bounded by the nearest timer deadline), run exactly one dispatch
//! pass to completion, drain expired timers through the same path, then
//! repaint whichever windows owe a redraw. Nothing runs concurrently;
//! callbacks fire synchronously inside the pass that triggered them.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use trellis_core::{Event, Signal, TimerId, TimerManager};

use crate::backend::{Backend, DrawSurface, WindowIndex};
use crate::theme::Theme;
use crate::window::{Window, WindowKind};

/// An application: a set of windows, the timer source, and the process-wide
/// default theme.
pub struct App {
    windows: Vec<Window>,
    timers: TimerManager,
    /// Per-timer notification signals, emitted when the timer fires.
    timer_hooks: HashMap<TimerId, Arc<Signal<()>>>,
    /// Read-only after startup; applied to windows that don't override it.
    default_theme: Theme,
}

impl App {
    pub fn new() -> Self {
        Self {
            windows: Vec::new(),
            timers: TimerManager::new(),
            timer_hooks: HashMap::new(),
            default_theme: Theme::default(),
        }
    }

    /// Load the process-wide default theme. Call once at startup, before
    /// windows are added; existing windows are not retouched.
    pub fn set_default_theme(&mut self, theme: Theme) {
        self.default_theme = theme;
    }

    pub fn default_theme(&self) -> &Theme {
        &self.default_theme
    }

    /// Take ownership of a window. Returns its index for event routing.
    ///
    /// The window inherits the app default theme unless one was already
    /// applied to it.
    pub fn add_window(&mut self, mut window: Window) -> WindowIndex {
        if *window.theme() == Theme::default() {
            window.set_theme(self.default_theme);
        }
        self.windows.push(window);
        self.windows.len() - 1
    }

    pub fn window(&self, index: WindowIndex) -> Option<&Window> {
        self.windows.get(index)
    }

    pub fn window_mut(&mut self, index: WindowIndex) -> Option<&mut Window> {
        self.windows.get_mut(index)
    }

    pub fn window_count(&self) -> usize {
        self.windows.len()
    }

    // =========================================================================
    // Timers
    // =========================================================================

    /// Start a one-shot timer. Connect to
    /// [`timer_signal`](Self::timer_signal) to observe the fire.
    pub fn start_one_shot(&mut self, duration: Duration) -> TimerId {
        self.timers.start_one_shot(duration)
    }

    /// Start a repeating timer.
    pub fn start_repeating(&mut self, interval: Duration) -> TimerId {
        self.timers.start_repeating(interval)
    }

    /// Stop a timer.
    pub fn stop_timer(&mut self, id: TimerId) -> trellis_core::Result<()> {
        self.timer_hooks.remove(&id);
        self.timers.stop(id)
    }

    /// The notification signal for a timer, created on first use.
    pub fn timer_signal(&mut self, id: TimerId) -> Arc<Signal<()>> {
        self.timer_hooks.entry(id).or_default().clone()
    }

    // =========================================================================
    // Event routing
    // =========================================================================

    /// Route one event to the responsible window and dispatch it.
    ///
    /// Modal capture happens here, ahead of everything else: while any
    /// message-box window is visible, it exclusively receives input (the
    /// topmost one if several are). Non-input events (resize, close) still
    /// reach their own window.
    pub fn route_event(&mut self, index: WindowIndex, event: &Event) {
        let target = if is_input(event) {
            self.modal_window().unwrap_or(index)
        } else {
            index
        };
        if let Some(window) = self.windows.get_mut(target) {
            window.handle_event(event);
        }
    }

    /// The topmost visible message-box window, if any.
    fn modal_window(&self) -> Option<WindowIndex> {
        self.windows
            .iter()
            .enumerate()
            .rev()
            .find(|(_, w)| w.kind() == WindowKind::MessageBox && w.is_visible())
            .map(|(i, _)| i)
    }

    /// Drain expired timers through their notification signals.
    fn service_timers(&mut self) {
        for event in self.timers.process_expired() {
            if let Event::TimerFired { id } = event {
                if let Some(signal) = self.timer_hooks.get(&id) {
                    signal.emit(());
                }
            }
        }
    }

    // =========================================================================
    // Run loop
    // =========================================================================

    /// Run until every window has been closed.
    pub fn run<B: Backend, S: DrawSurface>(&mut self, backend: &mut B, surface: &mut S) {
        tracing::debug!(target: "trellis::app", windows = self.windows.len(), "run loop starting");
        while self.windows.iter().any(|w| !w.is_closed()) {
            let timeout = self.timers.time_until_next();
            if let Some((index, event)) = backend.poll_event(timeout) {
                self.route_event(index, &event);
            }
            self.service_timers();
            self.redraw_windows(backend, surface);
        }
        tracing::debug!(target: "trellis::app", "run loop finished");
    }

    /// Repaint every visible window that owes a redraw.
    ///
    /// Widgets are handed to the surface in registration order (back to
    /// front), restricted to the effectively visible; geometry is final by
    /// the time the surface sees it.
    pub fn redraw_windows<B: Backend, S: DrawSurface>(&mut self, backend: &mut B, surface: &mut S) {
        for (index, window) in self.windows.iter_mut().enumerate() {
            if !window.is_visible() || !window.needs_redraw() {
                continue;
            }
            surface.begin_frame(index, window.size(), window.theme().base);
            for &id in window.registry().ids_in_order() {
                if !window.registry().effectively_visible(id) {
                    continue;
                }
                if let Ok(widget) = window.registry().widget(id) {
                    surface.paint(widget, window.theme());
                }
            }
            surface.end_frame(index);
            backend.present(index);
            window.clear_redraw();
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether an event is user input subject to modal capture.
fn is_input(event: &Event) -> bool {
    !matches!(
        event,
        Event::WindowResized { .. } | Event::CloseRequested | Event::TimerFired { .. }
    )
}
