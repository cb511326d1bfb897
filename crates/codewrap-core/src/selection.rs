//! Line-range selections.
//!
//! Selections are whole-line and inclusive on both ends, expressed in the coordinates of the
//! buffer *before* any edit of the current batch is applied.

use crate::error::ToggleError;

/// Inclusive, zero-based range of lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineRange {
    /// First selected line.
    pub start: usize,
    /// Last selected line (inclusive).
    pub end: usize,
}

impl LineRange {
    /// Create a range, normalizing an inverted pair so that `start <= end`.
    pub fn new(start: usize, end: usize) -> Self {
        Self {
            start: start.min(end),
            end: start.max(end),
        }
    }

    /// A range covering exactly one line.
    pub fn single(line: usize) -> Self {
        Self {
            start: line,
            end: line,
        }
    }

    /// Number of lines covered.
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// Always `false`; a range covers at least one line.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Iterate the covered line indices.
    pub fn lines(&self) -> std::ops::RangeInclusive<usize> {
        self.start..=self.end
    }

    /// Returns `true` if `line` lies within the range.
    pub fn contains(&self, line: usize) -> bool {
        self.start <= line && line <= self.end
    }

    /// Returns `true` if both ranges share at least one line.
    pub fn overlaps(&self, other: &LineRange) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Shift both ends by a signed line delta.
    pub(crate) fn shifted(&self, delta: isize) -> Option<Self> {
        Some(Self {
            start: self.start.checked_add_signed(delta)?,
            end: self.end.checked_add_signed(delta)?,
        })
    }
}

impl std::fmt::Display for LineRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}

impl From<std::ops::RangeInclusive<usize>> for LineRange {
    fn from(range: std::ops::RangeInclusive<usize>) -> Self {
        Self::new(*range.start(), *range.end())
    }
}

/// Order of `selections` by first line, as indices into the input slice.
pub(crate) fn ascending_order(selections: &[LineRange]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..selections.len()).collect();
    order.sort_by(|&a, &b| {
        selections[a]
            .start
            .cmp(&selections[b].start)
            .then_with(|| selections[a].end.cmp(&selections[b].end))
    });
    order
}

/// Reject a batch in which any two selections share a line.
///
/// `order` must list `selections` by ascending start line (see [`ascending_order`]); only
/// neighbours then need comparing.
pub(crate) fn ensure_disjoint(
    selections: &[LineRange],
    order: &[usize],
) -> Result<(), ToggleError> {
    for pair in order.windows(2) {
        let first = selections[pair[0]];
        let second = selections[pair[1]];
        if first.overlaps(&second) {
            return Err(ToggleError::OverlappingSelections { first, second });
        }
    }
    Ok(())
}
