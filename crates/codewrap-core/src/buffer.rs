//! Line buffers the engine reads and the caller mutates.
//!
//! The engine only ever needs four operations from a buffer: its line count, read access to one
//! line, and single-line insertion and removal. [`LineBuffer`] captures exactly that, so a host
//! can hand over whatever it already stores lines in.
//!
//! Two implementations ship with the crate:
//! - `Vec<String>`: one element per line, no terminators.
//! - [`RopeBuffer`]: whole-file text in a [`ropey::Rope`], for hosts that hold a document rather
//!   than a list of lines.

use ropey::Rope;
use std::borrow::Cow;

/// An ordered, index-addressable sequence of text lines.
///
/// Lines never include their terminator. Indices are zero-based.
pub trait LineBuffer {
    /// Number of lines.
    fn line_count(&self) -> usize;

    /// Text of line `index`, or `None` if out of range.
    fn line(&self, index: usize) -> Option<Cow<'_, str>>;

    /// Insert `text` as a new line at `index`, shifting later lines down.
    ///
    /// `index` may equal [`LineBuffer::line_count`] to append.
    ///
    /// # Panics
    ///
    /// Implementations may panic if `index > line_count()`.
    fn insert_line(&mut self, index: usize, text: &str);

    /// Remove line `index`, shifting later lines up.
    ///
    /// Buffers that cannot hold zero lines (such as [`RopeBuffer`]) keep one empty line when
    /// their only line is removed.
    ///
    /// # Panics
    ///
    /// Implementations may panic if `index >= line_count()`.
    fn remove_line(&mut self, index: usize);
}

impl LineBuffer for Vec<String> {
    fn line_count(&self) -> usize {
        self.len()
    }

    fn line(&self, index: usize) -> Option<Cow<'_, str>> {
        self.get(index).map(|line| Cow::Borrowed(line.as_str()))
    }

    fn insert_line(&mut self, index: usize, text: &str) {
        self.insert(index, text.to_string());
    }

    fn remove_line(&mut self, index: usize) {
        self.remove(index);
    }
}

/// Terminator written after lines that a [`RopeBuffer`] inserts.
///
/// Existing lines keep whatever terminator they were loaded with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    /// `"\n"`
    #[default]
    Lf,
    /// `"\r\n"`
    Crlf,
}

impl LineEnding {
    /// The ending most lines of `text` already use. Ties, and text without any newline, pick
    /// [`LineEnding::Lf`].
    pub fn majority_in(text: &str) -> Self {
        let newlines = text.matches('\n').count();
        let crlf = text.matches("\r\n").count();
        if crlf * 2 > newlines {
            Self::Crlf
        } else {
            Self::Lf
        }
    }

    /// The terminator itself.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::Crlf => "\r\n",
        }
    }
}

/// Split `text` into lines the way an editor does: N newlines yield N+1 lines, and a `'\r'`
/// before each `'\n'` is dropped. Only `'\n'` separates lines.
pub fn split_lines(text: &str) -> Vec<String> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
        .collect()
}

/// A rope-backed document buffer.
///
/// The rope holds the text exactly as loaded. Lines are separated by `'\n'` only, so the line
/// numbering agrees with [`split_lines`], including the final empty line after a trailing
/// newline. Each untouched line keeps its own terminator; inserted lines get
/// [`RopeBuffer::line_ending`].
///
/// A rope always has at least one line, so removing the only line leaves one empty line
/// instead of an empty buffer.
#[derive(Debug, Clone)]
pub struct RopeBuffer {
    rope: Rope,
    line_ending: LineEnding,
}

impl RopeBuffer {
    /// Load a buffer from whole-document text.
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            line_ending: LineEnding::majority_in(text),
        }
    }

    /// Terminator used for inserted lines.
    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    /// Override the terminator used for inserted lines.
    pub fn set_line_ending(&mut self, line_ending: LineEnding) {
        self.line_ending = line_ending;
    }

    /// Document text.
    pub fn to_text(&self) -> String {
        self.rope.to_string()
    }

    /// Number of characters, terminators included.
    pub fn char_count(&self) -> usize {
        self.rope.len_chars()
    }

    /// Length in chars of the terminator ending just before char `at`, if any.
    fn terminator_before(&self, at: usize) -> usize {
        if at == 0 || self.rope.char(at - 1) != '\n' {
            return 0;
        }
        if at >= 2 && self.rope.char(at - 2) == '\r' {
            2
        } else {
            1
        }
    }
}

impl LineBuffer for RopeBuffer {
    fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    fn line(&self, index: usize) -> Option<Cow<'_, str>> {
        if index >= self.rope.len_lines() {
            return None;
        }

        let mut text = self.rope.line(index).to_string();
        if text.ends_with('\n') {
            text.pop();
        }
        if text.ends_with('\r') {
            text.pop();
        }
        Some(Cow::Owned(text))
    }

    fn insert_line(&mut self, index: usize, text: &str) {
        let line_count = self.rope.len_lines();
        assert!(
            index <= line_count,
            "insert index {index} out of range for {line_count} lines"
        );

        let ending = self.line_ending.as_str();
        if index < line_count {
            let at = self.rope.line_to_char(index);
            self.rope.insert(at, &format!("{text}{ending}"));
        } else {
            // Appending after the last line: the new line needs a separator in front of it.
            let at = self.rope.len_chars();
            self.rope.insert(at, &format!("{ending}{text}"));
        }
    }

    fn remove_line(&mut self, index: usize) {
        let line_count = self.rope.len_lines();
        assert!(
            index < line_count,
            "remove index {index} out of range for {line_count} lines"
        );

        let start = self.rope.line_to_char(index);
        if index + 1 < line_count {
            let end = self.rope.line_to_char(index + 1);
            self.rope.remove(start..end);
        } else {
            // Last line: drop the terminator that separated it from the previous one.
            let start = start - self.terminator_before(start);
            self.rope.remove(start..self.rope.len_chars());
        }
    }
}
