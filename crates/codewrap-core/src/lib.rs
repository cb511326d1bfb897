#![warn(missing_docs)]
//! Codewrap Core - headless conditional-compilation toggling
//!
//! # Overview
//!
//! `codewrap-core` toggles a `#if DEBUG` … `#endif` wrapper around one or more selected line
//! ranges of a source buffer. It does not render anything and does not understand the wrapped
//! language; the host (an editor extension, the `codewrap` CLI, …) supplies the lines and the
//! selections and gets back an ordered batch of line edits.
//!
//! # Architecture Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  ToggleEngine (decide + plan + apply)       │  ← Public API
//! ├─────────────────────────────────────────────┤
//! │  SelectionValidator                         │  ← Bounds / directives / braces / blanks
//! ├─────────────────────────────────────────────┤
//! │  EditPlan (offset-tracked line edits)       │  ← Output format
//! ├─────────────────────────────────────────────┤
//! │  LineBuffer (Vec<String>, RopeBuffer)       │  ← Line access
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use codewrap_core::{LineRange, RopeBuffer, ToggleEngine};
//!
//! let mut buffer = RopeBuffer::from_text("a\nb\nc\nd\ne");
//! let engine = ToggleEngine::default();
//!
//! engine
//!     .toggle(&mut buffer, &[LineRange::single(0), LineRange::single(3)])
//!     .unwrap();
//!
//! assert_eq!(
//!     buffer.to_text(),
//!     "#if DEBUG\na\n#endif\nb\nc\n#if DEBUG\nd\n#endif\ne"
//! );
//! ```
//!
//! # Module Description
//!
//! - [`buffer`] - the [`LineBuffer`] trait, `Vec<String>` and rope-backed buffers
//! - [`directive`] - recognition of directive lines
//! - [`selection`] - inclusive line ranges
//! - [`validate`] - per-selection checks
//! - [`edit`] - ordered line edit plans
//! - [`toggle`] - the engine

pub mod buffer;
pub mod directive;
pub mod edit;
mod error;
pub mod selection;
pub mod toggle;
pub mod validate;

pub use buffer::{LineBuffer, LineEnding, RopeBuffer, split_lines};
pub use codewrap_lang::{DEBUG_ELSE, DEBUG_ELSEIF, DEBUG_ENDIF, DEBUG_IF, DirectiveConfig};
pub use directive::{DirectiveKind, classify, is_directive};
pub use edit::{EditPlan, PendingEdit};
pub use error::{BraceKind, ToggleError};
pub use selection::LineRange;
pub use toggle::{Applied, ToggleAction, ToggleEngine, toggle_debug};
pub use validate::{SelectionValidator, ToggleOptions};
