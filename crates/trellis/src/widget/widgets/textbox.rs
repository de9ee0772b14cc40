//! Single-line text input widget.

use trellis_core::Signal;

use crate::geometry::{Point, Rect};
use crate::widget::metrics;
use crate::widget::WidgetCore;

/// A single-line text input.
///
/// At most one textbox per window holds keyboard focus; focus is
/// transferred by pointer press and every key event routes to the focused
/// textbox only. `text_changed` fires when an edit is flushed: on Enter,
/// and on focus loss if the text changed while focused.
pub struct Textbox {
    core: WidgetCore,
    text: String,
    placeholder: String,
    password: bool,
    focused: bool,
    cursor_pos: usize,
    scroll_offset: usize,
    /// Snapshot taken when focus was gained, to detect pending edits.
    text_at_focus: String,

    /// Emitted with the full text when an edit is flushed.
    pub text_changed: Signal<String>,
}

impl Textbox {
    pub fn new(rect: Rect, placeholder: impl Into<String>) -> Self {
        Self {
            core: WidgetCore::new(rect),
            text: String::new(),
            placeholder: placeholder.into(),
            password: false,
            focused: false,
            cursor_pos: 0,
            scroll_offset: 0,
            text_at_focus: String::new(),
            text_changed: Signal::new(),
        }
    }

    /// Mask the contents (password entry).
    pub fn password(mut self) -> Self {
        self.password = true;
        self
    }

    pub(crate) fn core(&self) -> &WidgetCore {
        &self.core
    }

    pub(crate) fn core_mut(&mut self) -> &mut WidgetCore {
        &mut self.core
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the contents programmatically. Does not emit `text_changed`.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor_pos = self.text.chars().count();
        self.scroll_offset = 0;
        self.core.mark_dirty();
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn is_password(&self) -> bool {
        self.password
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Cursor position in characters from the start of the text.
    pub fn cursor_pos(&self) -> usize {
        self.cursor_pos
    }

    pub(crate) fn set_focused(&mut self, focused: bool) {
        if self.focused != focused {
            self.focused = focused;
            if focused {
                self.text_at_focus = self.text.clone();
            }
            self.core.mark_dirty();
        }
    }

    /// Whether the text changed since focus was gained.
    pub(crate) fn has_pending_edit(&self) -> bool {
        self.focused && self.text != self.text_at_focus
    }

    /// Mark the current contents as flushed.
    pub(crate) fn commit_edit(&mut self) {
        self.text_at_focus = self.text.clone();
    }

    /// Place the cursor from a pointer position within the textbox.
    pub(crate) fn set_cursor_from_point(&mut self, point: Point) {
        let offset = ((point.x - self.core.rect().left()) / metrics::CHAR_WIDTH).max(0.0) as usize;
        self.cursor_pos = (self.scroll_offset + offset).min(self.text.chars().count());
        self.core.mark_dirty();
    }

    /// Insert a character at the cursor.
    pub(crate) fn insert_char(&mut self, ch: char) {
        let byte_pos = byte_index(&self.text, self.cursor_pos);
        self.text.insert(byte_pos, ch);
        self.cursor_pos += 1;
        self.core.mark_dirty();
    }

    /// Delete the character before the cursor (Backspace).
    pub(crate) fn delete_back(&mut self) {
        if self.cursor_pos > 0 {
            self.cursor_pos -= 1;
            let byte_pos = byte_index(&self.text, self.cursor_pos);
            self.text.remove(byte_pos);
            self.core.mark_dirty();
        }
    }

    /// Delete the character under the cursor (Delete).
    pub(crate) fn delete_forward(&mut self) {
        if self.cursor_pos < self.text.chars().count() {
            let byte_pos = byte_index(&self.text, self.cursor_pos);
            self.text.remove(byte_pos);
            self.core.mark_dirty();
        }
    }

    pub(crate) fn move_cursor_left(&mut self) {
        if self.cursor_pos > 0 {
            self.cursor_pos -= 1;
            self.core.mark_dirty();
        }
    }

    pub(crate) fn move_cursor_right(&mut self) {
        if self.cursor_pos < self.text.chars().count() {
            self.cursor_pos += 1;
            self.core.mark_dirty();
        }
    }

    pub(crate) fn move_cursor_home(&mut self) {
        self.cursor_pos = 0;
        self.core.mark_dirty();
    }

    pub(crate) fn move_cursor_end(&mut self) {
        self.cursor_pos = self.text.chars().count();
        self.core.mark_dirty();
    }
}

/// Byte offset of the `char_pos`-th character.
fn byte_index(text: &str, char_pos: usize) -> usize {
    text.char_indices()
        .nth(char_pos)
        .map(|(i, _)| i)
        .unwrap_or(text.len())
}

static_assertions::assert_impl_all!(Textbox: Send, Sync);
