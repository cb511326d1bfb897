//! The toggle engine.
//!
//! # Overview
//!
//! For each selection the engine decides whether to **unwrap** (the lines directly above and
//! below are the opening and closing directives) or **wrap** (insert both directives around
//! it), and queues exactly two line edits. Selections are given in the coordinates of the
//! buffer before the batch; the engine shifts each selection's indices by the net line delta of
//! everything queued before it, so the resulting [`EditPlan`] can be applied in one pass.
//!
//! # Example
//!
//! ```rust
//! use codewrap_core::{LineRange, ToggleEngine};
//!
//! let engine = ToggleEngine::default();
//! let mut lines: Vec<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();
//!
//! engine.toggle(&mut lines, &[LineRange::single(1)]).unwrap();
//! assert_eq!(lines, ["a", "#if DEBUG", "b", "#endif", "c"]);
//!
//! // The same lines are now wrapped, so toggling again removes the directives.
//! engine.toggle(&mut lines, &[LineRange::single(2)]).unwrap();
//! assert_eq!(lines, ["a", "b", "c"]);
//! ```

use crate::buffer::LineBuffer;
use crate::directive::{DirectiveKind, classify};
use crate::edit::EditPlan;
use crate::error::ToggleError;
use crate::selection::{LineRange, ascending_order, ensure_disjoint};
use crate::validate::{SelectionValidator, ToggleOptions};
use codewrap_lang::DirectiveConfig;

/// What the engine does with one selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleAction {
    /// Insert the opening directive above and the closing directive below.
    Wrap,
    /// Remove the directives directly above and below.
    Unwrap,
}

/// The outcome of a successful toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Applied {
    /// The edits, in the order they were (or must be) applied.
    pub plan: EditPlan,
    /// Where each selection's lines sit after the plan runs, in input order.
    pub selections: Vec<LineRange>,
    /// Number of selections that were wrapped.
    pub wrapped: usize,
    /// Number of selections that were unwrapped.
    pub unwrapped: usize,
}

/// Toggles conditional-compilation wrappers around line selections.
#[derive(Debug, Clone, Default)]
pub struct ToggleEngine {
    config: DirectiveConfig,
    options: ToggleOptions,
}

impl ToggleEngine {
    /// Create an engine for `config` with default options.
    ///
    /// Fails with [`ToggleError::InvalidDirectives`] if `config` is not
    /// [valid](DirectiveConfig::is_valid).
    pub fn new(config: DirectiveConfig) -> Result<Self, ToggleError> {
        if !config.is_valid() {
            return Err(ToggleError::InvalidDirectives);
        }
        Ok(Self {
            config,
            options: ToggleOptions::default(),
        })
    }

    /// Replace the validation options.
    pub fn with_options(mut self, options: ToggleOptions) -> Self {
        self.options = options;
        self
    }

    /// Directive literals in use.
    pub fn config(&self) -> &DirectiveConfig {
        &self.config
    }

    /// Validation options in use.
    pub fn options(&self) -> ToggleOptions {
        self.options
    }

    /// Returns `true` if `range` is directly enclosed by an opening and a closing directive.
    ///
    /// Out-of-range selections are never wrapped.
    pub fn is_wrapped<B: LineBuffer + ?Sized>(&self, buffer: &B, range: LineRange) -> bool {
        if range.start == 0 || range.end >= buffer.line_count().saturating_sub(1) {
            return false;
        }
        let kind_at = |line: usize| {
            buffer
                .line(line)
                .and_then(|text| classify(&text, &self.config))
        };
        kind_at(range.start - 1) == Some(DirectiveKind::Open)
            && kind_at(range.end + 1) == Some(DirectiveKind::End)
    }

    /// Validate `range` and decide whether it gets wrapped or unwrapped.
    pub fn decide<B: LineBuffer + ?Sized>(
        &self,
        buffer: &B,
        range: LineRange,
    ) -> Result<ToggleAction, ToggleError> {
        let validator = SelectionValidator::new(buffer, &self.config, self.options);
        validator.validate(range)?;

        if self.is_wrapped(buffer, range) {
            return Ok(ToggleAction::Unwrap);
        }

        validator.check_not_blank(range)?;
        Ok(ToggleAction::Wrap)
    }

    /// Compute the edits for `selections` without touching `buffer`.
    pub fn plan<B: LineBuffer + ?Sized>(
        &self,
        buffer: &B,
        selections: &[LineRange],
    ) -> Result<EditPlan, ToggleError> {
        self.prepare(buffer, selections).map(|applied| applied.plan)
    }

    /// Compute the edits for `selections` and apply them to `buffer`.
    ///
    /// On error nothing is applied.
    pub fn toggle<B: LineBuffer + ?Sized>(
        &self,
        buffer: &mut B,
        selections: &[LineRange],
    ) -> Result<Applied, ToggleError> {
        let applied = self.prepare(buffer, selections)?;
        applied.plan.apply(buffer)?;
        tracing::debug!(
            wrapped = applied.wrapped,
            unwrapped = applied.unwrapped,
            line_count = buffer.line_count(),
            "toggle applied"
        );
        Ok(applied)
    }

    /// Build the plan and post-edit selections.
    ///
    /// Selections are validated in input order so the first offending one is reported, then
    /// planned in ascending line order so offsets only ever accumulate from lines above.
    pub fn prepare<B: LineBuffer + ?Sized>(
        &self,
        buffer: &B,
        selections: &[LineRange],
    ) -> Result<Applied, ToggleError> {
        let mut actions = Vec::with_capacity(selections.len());
        for &range in selections {
            let action = self.decide(buffer, range).inspect_err(|err| {
                tracing::debug!(%range, %err, "selection rejected");
            })?;
            tracing::debug!(%range, ?action, "toggle decision");
            actions.push(action);
        }

        let order = ascending_order(selections);
        ensure_disjoint(selections, &order)?;

        let mut plan = EditPlan::new();
        let mut after = selections.to_vec();
        let mut wrapped = 0;
        let mut unwrapped = 0;

        for index in order {
            let range = selections[index];
            let offset = plan.offset();

            match actions[index] {
                ToggleAction::Unwrap => {
                    plan.remove(shift(range.start - 1, offset)?);
                    plan.remove(shift(range.end, offset)?);
                    after[index] = shift_range(range, offset - 1)?;
                    unwrapped += 1;
                }
                ToggleAction::Wrap => {
                    plan.insert(shift(range.start, offset)?, self.config.open.as_str());
                    plan.insert(shift(range.end + 2, offset)?, self.config.end.as_str());
                    after[index] = shift_range(range, offset + 1)?;
                    wrapped += 1;
                }
            }
        }

        tracing::debug!(edits = plan.len(), wrapped, unwrapped, "toggle planned");

        Ok(Applied {
            plan,
            selections: after,
            wrapped,
            unwrapped,
        })
    }
}

fn shift(line: usize, offset: isize) -> Result<usize, ToggleError> {
    line.checked_add_signed(offset)
        .ok_or(ToggleError::OffsetUnderflow { line, offset })
}

fn shift_range(range: LineRange, offset: isize) -> Result<LineRange, ToggleError> {
    range.shifted(offset).ok_or(ToggleError::OffsetUnderflow {
        line: range.start,
        offset,
    })
}

/// Toggle `#if DEBUG` wrappers in a plain line vector with the default engine.
pub fn toggle_debug(
    lines: &mut Vec<String>,
    selections: &[LineRange],
) -> Result<Applied, ToggleError> {
    ToggleEngine::default().toggle(lines, selections)
}
