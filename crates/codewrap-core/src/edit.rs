//! Line-level edit plans.
//!
//! A plan is an ordered list of single-line insertions and removals. Edits must be applied **in
//! order**: each index is expressed against the buffer as it exists after every earlier edit of
//! the same plan has been applied.

use crate::buffer::LineBuffer;
use crate::error::ToggleError;

/// One queued line edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingEdit {
    /// Insert `text` as a new line at `index`.
    Insert {
        /// Target line index at the time the edit is applied.
        index: usize,
        /// Line text, without terminator.
        text: String,
    },
    /// Remove the line at `index`.
    Remove {
        /// Target line index at the time the edit is applied.
        index: usize,
    },
}

impl PendingEdit {
    /// Target line index.
    pub fn index(&self) -> usize {
        match self {
            PendingEdit::Insert { index, .. } | PendingEdit::Remove { index } => *index,
        }
    }

    /// Net change in line count caused by this edit.
    pub fn line_delta(&self) -> isize {
        match self {
            PendingEdit::Insert { .. } => 1,
            PendingEdit::Remove { .. } => -1,
        }
    }

    /// Returns `true` for insertions.
    pub fn is_insert(&self) -> bool {
        matches!(self, PendingEdit::Insert { .. })
    }
}

/// An ordered batch of [`PendingEdit`]s.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditPlan {
    edits: Vec<PendingEdit>,
    inserted: usize,
    removed: usize,
}

impl EditPlan {
    /// Create an empty plan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an edit.
    pub fn push(&mut self, edit: PendingEdit) {
        if edit.is_insert() {
            self.inserted += 1;
        } else {
            self.removed += 1;
        }
        self.edits.push(edit);
    }

    /// Queue an insertion.
    pub fn insert(&mut self, index: usize, text: impl Into<String>) {
        self.push(PendingEdit::Insert {
            index,
            text: text.into(),
        });
    }

    /// Queue a removal.
    pub fn remove(&mut self, index: usize) {
        self.push(PendingEdit::Remove { index });
    }

    /// The queued edits, in application order.
    pub fn edits(&self) -> &[PendingEdit] {
        &self.edits
    }

    /// Consume the plan, returning its edits.
    pub fn into_edits(self) -> Vec<PendingEdit> {
        self.edits
    }

    /// Number of queued edits.
    pub fn len(&self) -> usize {
        self.edits.len()
    }

    /// Returns `true` if nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    /// Insertions queued so far minus removals queued so far.
    ///
    /// Added to the original-coordinate indices of the next selection so its edits land where
    /// the buffer will be after everything already queued has run.
    pub fn offset(&self) -> isize {
        self.inserted as isize - self.removed as isize
    }

    /// Check that every edit targets a valid index when the plan runs against a buffer of
    /// `line_count` lines.
    ///
    /// Returns the line count after the whole plan.
    pub fn check(&self, line_count: usize) -> Result<usize, ToggleError> {
        let mut count = line_count;
        for edit in &self.edits {
            match edit {
                PendingEdit::Insert { index, .. } if *index <= count => count += 1,
                PendingEdit::Remove { index } if *index < count => count -= 1,
                _ => {
                    return Err(ToggleError::InvalidEdit {
                        index: edit.index(),
                        line_count: count,
                    });
                }
            }
        }
        Ok(count)
    }

    /// Apply the plan to `buffer`, in order.
    ///
    /// The whole plan is checked first; on error the buffer is not touched.
    pub fn apply<B: LineBuffer + ?Sized>(&self, buffer: &mut B) -> Result<(), ToggleError> {
        self.check(buffer.line_count())?;
        for edit in &self.edits {
            tracing::trace!(?edit, "applying line edit");
            match edit {
                PendingEdit::Insert { index, text } => buffer.insert_line(*index, text),
                PendingEdit::Remove { index } => buffer.remove_line(*index),
            }
        }
        Ok(())
    }
}

impl IntoIterator for EditPlan {
    type Item = PendingEdit;
    type IntoIter = std::vec::IntoIter<PendingEdit>;

    fn into_iter(self) -> Self::IntoIter {
        self.edits.into_iter()
    }
}

impl<'a> IntoIterator for &'a EditPlan {
    type Item = &'a PendingEdit;
    type IntoIter = std::slice::Iter<'a, PendingEdit>;

    fn into_iter(self) -> Self::IntoIter {
        self.edits.iter()
    }
}
