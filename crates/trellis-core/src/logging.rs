//! Logging helpers for Trellis.
//!
//! Trellis logs through the `tracing` crate with per-module targets
//! (`trellis_core::signal`, `trellis::dispatch`, ...), so applications can
//! filter toolkit noise with an ordinary `EnvFilter` directive such as
//! `trellis=debug,trellis_core::timer=off`. This module adds the small
//! conveniences used throughout the workspace; subscriber installation is
//! left to the application.

/// An RAII guard for measuring the duration of an operation.
///
/// Creates an entered `tracing` span under the `trellis::perf` target; span
/// timing is reported by whatever subscriber the application installs.
///
/// # Example
///
/// ```
/// use trellis_core::PerfSpan;
///
/// fn build_all_layouts() {
///     let _span = PerfSpan::new("build_all_layouts");
///     // ... work measured by the span ...
/// }
/// ```
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create a new performance span.
    ///
    /// The span will be active until the guard is dropped.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::info_span!(target: "trellis::perf", "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}

/// Macros for common tracing patterns.
///
/// Wrappers around the `tracing` macros with consistent target naming.
#[macro_export]
macro_rules! trellis_trace {
    ($($arg:tt)*) => {
        tracing::trace!(target: "trellis_core", $($arg)*)
    };
}

#[macro_export]
macro_rules! trellis_debug {
    ($($arg:tt)*) => {
        tracing::debug!(target: "trellis_core", $($arg)*)
    };
}

#[macro_export]
macro_rules! trellis_warn {
    ($($arg:tt)*) => {
        tracing::warn!(target: "trellis_core", $($arg)*)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perf_span_creates_and_drops() {
        let _span = PerfSpan::new("test_operation");
    }

    #[test]
    fn test_macros_compile() {
        trellis_trace!("trace message");
        trellis_debug!(value = 1, "debug message");
        trellis_warn!("warn message");
    }
}
