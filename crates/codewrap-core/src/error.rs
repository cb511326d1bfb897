use crate::selection::LineRange;
use thiserror::Error;

/// Kind of bracket a rejected line ends with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BraceKind {
    /// `{` or `}`.
    Block,
    /// `[` or `]`.
    Array,
    /// `(` or `)`.
    Tuple,
}

impl BraceKind {
    /// Classify the final character of a trimmed line.
    pub fn from_suffix(line: &str) -> Option<Self> {
        match line.chars().next_back()? {
            '{' | '}' => Some(Self::Block),
            '[' | ']' => Some(Self::Array),
            '(' | ')' => Some(Self::Tuple),
            _ => None,
        }
    }
}

impl std::fmt::Display for BraceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BraceKind::Block => write!(f, "block"),
            BraceKind::Array => write!(f, "array"),
            BraceKind::Tuple => write!(f, "tuple"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Errors produced while planning or applying a toggle.
///
/// Every variant is terminal for the whole batch: the buffer is left untouched.
pub enum ToggleError {
    #[error("Directive literals must be non-empty single lines without surrounding whitespace.")]
    /// A [`codewrap_lang::DirectiveConfig`] could never match or would not write a single line.
    InvalidDirectives,

    #[error("Selection {range} is out of bounds for a buffer of {line_count} lines.")]
    /// The selection references a line the buffer does not have.
    OutOfBounds {
        /// The offending selection.
        range: LineRange,
        /// Number of lines in the buffer.
        line_count: usize,
    },

    #[error("Selection contains compilation block at line {line}.")]
    /// The selection overlaps an existing directive line.
    ContainsDirective {
        /// Zero-based line holding the directive.
        line: usize,
    },

    #[error("Selection contains {kind} braces at line {line}.")]
    /// A selected line ends with a brace, bracket or parenthesis.
    ContainsUnbalancedBrace {
        /// Zero-based line ending with the brace.
        line: usize,
        /// Which kind of brace was found.
        kind: BraceKind,
    },

    #[error("Selection {range} contains only blank lines.")]
    /// Every line of a selection on the insertion path is blank.
    EmptySelection {
        /// The offending selection.
        range: LineRange,
    },

    #[error("Selections {first} and {second} overlap.")]
    /// Two selections of the same batch share at least one line.
    OverlappingSelections {
        /// The earlier selection (by line).
        first: LineRange,
        /// The later selection (by line).
        second: LineRange,
    },

    #[error("Edit at line {index} is out of range for a buffer of {line_count} lines.")]
    /// A plan was applied to a buffer it was not computed for.
    InvalidEdit {
        /// Index of the edit that could not be applied.
        index: usize,
        /// Line count of the buffer at the time the edit would run.
        line_count: usize,
    },

    #[error("Line {line} shifted by {offset} falls before the start of the buffer.")]
    /// Offset tracking produced a negative line index.
    OffsetUnderflow {
        /// Original line index.
        line: usize,
        /// Net line delta of the edits queued before it.
        offset: isize,
    },
}
