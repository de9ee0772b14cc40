//! Modal message boxes.
//!
//! A message box is an ordinary [`Window`] of kind
//! [`WindowKind::MessageBox`](super::WindowKind::MessageBox) pre-populated
//! with its message label and dismiss button. While one is visible, the
//! [`App`](crate::app::App) routes every input event to it — the owning
//! windows receive nothing until it is dismissed. Pressing any of its
//! buttons emits `option_chosen` and hides the window.

use std::sync::Arc;

use trellis_core::Signal;

use crate::error::Result;
use crate::geometry::{Point, Rect};
use crate::widget::widgets::{Button, Label};

use super::Window;

/// The flavor of a message box, reflected in its accent color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageBoxKind {
    Success,
    Info,
    Fail,
}

const WIDTH: f32 = 320.0;
const HEIGHT: f32 = 150.0;

/// A modal message-box window under construction.
pub struct MessageBox {
    window: Window,
    kind: MessageBoxKind,

    /// Emitted with the chosen option index when a button dismisses the
    /// box (0 for OK).
    pub option_chosen: Arc<Signal<i32>>,
}

impl MessageBox {
    /// Build a hidden message box with a title, message, and OK button.
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        kind: MessageBoxKind,
    ) -> Result<Self> {
        let mut window = Window::message_box(title, WIDTH, HEIGHT);

        let accent = match kind {
            MessageBoxKind::Success => window.theme().success,
            MessageBoxKind::Info => window.theme().info,
            MessageBoxKind::Fail => window.theme().danger,
        };
        let mut label = Label::new(message, Point::new(20.0, 50.0), 14.0);
        label.set_color(accent);
        window.register(label)?;

        let ok_id = window.register(Button::new(
            "OK",
            Rect::new(WIDTH / 2.0 - 40.0, HEIGHT - 45.0, 80.0, 30.0),
        ))?;

        let option_chosen = Arc::new(Signal::new());
        let signal = option_chosen.clone();
        window
            .registry()
            .button(ok_id)?
            .clicked
            .connect(move |_| signal.emit(0));

        Ok(Self {
            window,
            kind,
            option_chosen,
        })
    }

    pub fn kind(&self) -> MessageBoxKind {
        self.kind
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn window_mut(&mut self) -> &mut Window {
        &mut self.window
    }

    /// Make the box visible; it starts capturing input once its app sees
    /// it.
    pub fn show(&mut self) {
        self.window.set_visible(true);
    }

    /// Surrender the underlying window (e.g. to
    /// [`App::add_window`](crate::app::App::add_window)). Clone
    /// `option_chosen` first if you still need the notification.
    pub fn into_window(self) -> Window {
        self.window
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use trellis_core::{Event, PointerButton};

    #[test]
    fn test_button_press_emits_option_and_hides() {
        let mut msgbox = MessageBox::new("Oops", "Something failed", MessageBoxKind::Fail).unwrap();
        let chosen = Arc::new(Mutex::new(Vec::new()));
        let chosen_clone = chosen.clone();
        msgbox.option_chosen.connect(move |&option| {
            chosen_clone.lock().push(option);
        });

        msgbox.show();
        assert!(msgbox.window().is_visible());

        // Press the OK button (centered near the bottom edge).
        let result = msgbox.window_mut().handle_event(&Event::PointerPressed {
            x: WIDTH / 2.0,
            y: HEIGHT - 30.0,
            button: PointerButton::Primary,
        });
        assert!(result.was_handled());
        assert_eq!(*chosen.lock(), vec![0]);
        assert!(!msgbox.window().is_visible());
    }
}
