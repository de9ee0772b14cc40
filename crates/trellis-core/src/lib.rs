//! Core systems for Trellis.
//!
//! This crate provides the foundational components of the Trellis widget
//! toolkit:
//!
//! - **Signal/Slot System**: Type-safe notification between widgets and
//!   application code
//! - **Input Events**: The normalized event vocabulary fed into dispatch
//! - **Timers**: One-shot and repeating timers that inject events into the
//!   same dispatch path as user input
//!
//! Trellis dispatch is single-threaded and synchronous: one event is routed
//! to completion before the next is accepted, and signal emission happens
//! inline on the dispatching thread. There is no queued or cross-thread
//! delivery in this crate.
//!
//! # Signal/Slot Example
//!
//! ```
//! use trellis_core::Signal;
//!
//! // Create a signal that passes a value to its slots
//! let value_changed = Signal::<i64>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! // Emit the signal
//! value_changed.emit(42);
//!
//! // Disconnect when done
//! value_changed.disconnect(conn_id);
//! ```
//!
//! # Timer Example
//!
//! ```
//! use trellis_core::TimerManager;
//! use std::time::Duration;
//!
//! let mut timers = TimerManager::new();
//! let _tick = timers.start_repeating(Duration::from_millis(16));
//!
//! // The run loop asks how long it may block, then drains expired timers
//! // into ordinary events.
//! let _deadline = timers.time_until_next();
//! let _events = timers.process_expired();
//! ```

mod error;
mod event;
pub mod logging;
pub mod signal;
mod timer;

pub use error::{CoreError, Result, SignalError, TimerError};
pub use event::{Event, Key, PointerButton};
pub use logging::PerfSpan;
pub use signal::{ConnectionGuard, ConnectionId, Signal};
pub use timer::{TimerId, TimerKind, TimerManager};
