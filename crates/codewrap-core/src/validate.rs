//! Selection validation.
//!
//! Every check here is a pure predicate over the buffer as it was handed to the engine; nothing
//! is queued until all selections of a batch have passed.

use crate::buffer::LineBuffer;
use crate::directive::is_directive;
use crate::error::{BraceKind, ToggleError};
use crate::selection::LineRange;
use codewrap_lang::DirectiveConfig;

/// Tunable validation behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ToggleOptions {
    /// Reject selections containing a line that ends with `{`, `}`, `[`, `]`, `(` or `)`.
    ///
    /// Such a line usually opens or closes a multi-line construct, and wrapping only part of it
    /// leaves the non-debug build unbalanced. Off by default.
    pub reject_unbalanced_braces: bool,
}

impl ToggleOptions {
    /// Options with the brace guard switched on.
    pub fn strict() -> Self {
        Self {
            reject_unbalanced_braces: true,
        }
    }
}

/// Validates selections against one buffer snapshot.
#[derive(Debug)]
pub struct SelectionValidator<'a, B: LineBuffer + ?Sized> {
    buffer: &'a B,
    config: &'a DirectiveConfig,
    options: ToggleOptions,
}

impl<'a, B: LineBuffer + ?Sized> SelectionValidator<'a, B> {
    /// Create a validator over `buffer`.
    pub fn new(buffer: &'a B, config: &'a DirectiveConfig, options: ToggleOptions) -> Self {
        Self {
            buffer,
            config,
            options,
        }
    }

    /// Checks that apply to both the wrap and unwrap paths: bounds, directives and (if enabled)
    /// brace suffixes, in that order.
    pub fn validate(&self, range: LineRange) -> Result<(), ToggleError> {
        self.check_bounds(range)?;
        self.check_directives(range)?;
        if self.options.reject_unbalanced_braces {
            self.check_braces(range)?;
        }
        Ok(())
    }

    /// Fails with [`ToggleError::OutOfBounds`] if either end lies past the last line.
    pub fn check_bounds(&self, range: LineRange) -> Result<(), ToggleError> {
        let line_count = self.buffer.line_count();
        if range.start >= line_count || range.end >= line_count {
            return Err(ToggleError::OutOfBounds { range, line_count });
        }
        Ok(())
    }

    /// Fails with [`ToggleError::ContainsDirective`] on the first selected directive line.
    pub fn check_directives(&self, range: LineRange) -> Result<(), ToggleError> {
        for line in range.lines() {
            if self.text(line).is_some_and(|text| is_directive(&text, self.config)) {
                return Err(ToggleError::ContainsDirective { line });
            }
        }
        Ok(())
    }

    /// Fails with [`ToggleError::ContainsUnbalancedBrace`] on the first selected line whose
    /// trimmed text ends with a brace, bracket or parenthesis.
    pub fn check_braces(&self, range: LineRange) -> Result<(), ToggleError> {
        for line in range.lines() {
            let Some(text) = self.text(line) else {
                continue;
            };
            if let Some(kind) = BraceKind::from_suffix(text.trim()) {
                return Err(ToggleError::ContainsUnbalancedBrace { line, kind });
            }
        }
        Ok(())
    }

    /// Fails with [`ToggleError::EmptySelection`] if every selected line is blank.
    ///
    /// Only meaningful on the wrap path.
    pub fn check_not_blank(&self, range: LineRange) -> Result<(), ToggleError> {
        let all_blank = range
            .lines()
            .all(|line| self.text(line).is_none_or(|text| text.trim().is_empty()));
        if all_blank {
            return Err(ToggleError::EmptySelection { range });
        }
        Ok(())
    }

    fn text(&self, line: usize) -> Option<std::borrow::Cow<'a, str>> {
        self.buffer.line(line)
    }
}
