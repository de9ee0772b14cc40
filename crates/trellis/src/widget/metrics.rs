//! Nominal text metrics.
//!
//! The toolkit sizes text-bearing widgets (labels, checkboxes, menu
//! entries) from a fixed nominal glyph cell, so geometry and hit-testing
//! are deterministic without a font rasterizer. The draw surface owns real
//! glyph metrics; these constants only have to be consistent with how the
//! surface lays its text out, not identical to it.

/// Nominal advance width of one glyph.
pub(crate) const CHAR_WIDTH: f32 = 8.0;

/// Nominal line height.
pub(crate) const LINE_HEIGHT: f32 = 20.0;

/// Nominal width of a run of text.
pub(crate) fn text_width(text: &str) -> f32 {
    text.chars().count() as f32 * CHAR_WIDTH
}
