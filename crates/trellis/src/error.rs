//! Error types for the widget toolkit.
//!
//! Every condition here is recoverable and reported to the immediate
//! caller; the toolkit has no global error channel and nothing in it is
//! fatal by design. Passing a stale handle yields [`Error::WidgetNotFound`]
//! rather than undefined behavior.

use crate::widget::{WidgetId, WidgetKind};

/// Result type alias for toolkit operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the widget toolkit.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A bounded collection refused an insertion.
    ///
    /// Raised when a per-kind widget ceiling, a radio group, or a menu
    /// reaches its configured capacity. The refused insertion leaves the
    /// existing state unchanged.
    #[error("Capacity of {capacity} exceeded for {what}")]
    CapacityExceeded { what: &'static str, capacity: usize },

    /// The widget handle does not resolve to a live widget in this window.
    #[error("Widget {0:?} not found in this window")]
    WidgetNotFound(WidgetId),

    /// A typed accessor was used on a widget of a different kind.
    #[error("Expected a {expected:?} widget, found {actual:?}")]
    KindMismatch {
        expected: WidgetKind,
        actual: WidgetKind,
    },

    /// The widget is already referenced by another layout.
    ///
    /// A widget may belong to at most one layout at a time.
    #[error("Widget {0:?} already belongs to a layout")]
    LayoutConflict(WidgetId),

    /// The widget is already referenced by a container or tab group, or
    /// the requested membership would make a scope its own ancestor.
    #[error("Widget {0:?} already belongs to a visibility group")]
    ScopeConflict(WidgetId),

    /// An index into a container group, tab, list, or menu was out of range.
    #[error("Index {index} out of range for {what} of length {len}")]
    IndexOutOfRange {
        what: &'static str,
        index: usize,
        len: usize,
    },

    /// A theme failed to load from its provider.
    ///
    /// The caller must not use the partially-constructed theme.
    #[error("Failed to load theme: {0}")]
    ThemeLoad(String),
}
