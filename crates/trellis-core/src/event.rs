//! Input event types for the Trellis dispatch loop.
//!
//! The platform backend normalizes raw input into these events; the run
//! loop feeds them, one at a time, through a window's dispatch pass. Timer
//! expiry is funneled through the same vocabulary so that timers and user
//! input share a single dispatch path.

use crate::timer::TimerId;

/// A pointer (mouse/touch) button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// The primary button (usually left).
    Primary,
    /// The secondary button (usually right).
    Secondary,
    /// The middle button.
    Middle,
}

/// A key press, reduced to what textbox editing needs.
///
/// Anything printable arrives as [`Key::Char`]; the remaining variants are
/// the editing keys a focused textbox handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// A printable character.
    Char(char),
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
    Enter,
    Escape,
    Tab,
}

/// An event delivered to a window's dispatch pass.
///
/// Coordinates are in the window's normalized space, matching widget
/// bounds (the backend is responsible for any DPI or viewport mapping).
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// The pointer moved.
    PointerMoved {
        x: f32,
        y: f32,
    },

    /// A pointer button was pressed.
    PointerPressed {
        x: f32,
        y: f32,
        button: PointerButton,
    },

    /// A pointer button was released.
    PointerReleased {
        x: f32,
        y: f32,
        button: PointerButton,
    },

    /// The scroll wheel moved. Positive `delta` scrolls up.
    Scroll {
        x: f32,
        y: f32,
        delta: f32,
    },

    /// A key was pressed.
    KeyPressed {
        key: Key,
    },

    /// A file was dropped onto the window.
    FileDropped {
        x: f32,
        y: f32,
        mime: String,
        path: String,
    },

    /// A timer managed by [`TimerManager`](crate::TimerManager) expired.
    TimerFired {
        id: TimerId,
    },

    /// The window was resized by the platform.
    WindowResized {
        width: f32,
        height: f32,
    },

    /// The platform asked the window to close.
    CloseRequested,
}

impl Event {
    /// The pointer position carried by this event, if it has one.
    pub fn position(&self) -> Option<(f32, f32)> {
        match *self {
            Self::PointerMoved { x, y }
            | Self::PointerPressed { x, y, .. }
            | Self::PointerReleased { x, y, .. }
            | Self::Scroll { x, y, .. }
            | Self::FileDropped { x, y, .. } => Some((x, y)),
            _ => None,
        }
    }

    /// Whether this is a pointer-family event.
    pub fn is_pointer(&self) -> bool {
        matches!(
            self,
            Self::PointerMoved { .. } | Self::PointerPressed { .. } | Self::PointerReleased { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_extraction() {
        let event = Event::PointerPressed {
            x: 10.0,
            y: 20.0,
            button: PointerButton::Primary,
        };
        assert_eq!(event.position(), Some((10.0, 20.0)));
        assert!(event.is_pointer());

        let event = Event::KeyPressed { key: Key::Enter };
        assert_eq!(event.position(), None);
        assert!(!event.is_pointer());
    }
}
