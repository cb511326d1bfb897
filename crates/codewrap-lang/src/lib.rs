#![warn(missing_docs)]
//! `codewrap-lang` - data-driven directive configuration for `codewrap-core`.
//!
//! This crate intentionally stays lightweight and does **not** parse any source language. It
//! provides the directive literals the toggle engine writes and recognizes, so hosts can point
//! the engine at a different conditional-compilation dialect without touching the engine itself.

use serde::{Deserialize, Serialize};

/// Opening directive written above a wrapped selection.
pub const DEBUG_IF: &str = "#if DEBUG";
/// Alternative-branch directive (`#elseif`).
pub const DEBUG_ELSEIF: &str = "#elseif";
/// Else-branch directive.
pub const DEBUG_ELSE: &str = "#else";
/// Closing directive written below a wrapped selection.
pub const DEBUG_ENDIF: &str = "#endif";

/// Directive literals for a given language.
///
/// All four literals are compared against whitespace-trimmed lines, case-sensitively. Only
/// `open` and `end` are ever written; `alternative` and `otherwise` are recognized so that
/// selections touching an existing multi-branch block can be rejected.
///
/// Missing fields fall back to the Swift literals when deserializing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectiveConfig {
    /// Opening directive (e.g. `#if DEBUG`).
    pub open: String,
    /// Alternative-branch directive (e.g. `#elseif`, `#elif`).
    pub alternative: String,
    /// Else-branch directive (e.g. `#else`).
    pub otherwise: String,
    /// Closing directive (e.g. `#endif`).
    pub end: String,
}

impl DirectiveConfig {
    /// Create a config from four explicit literals.
    pub fn new(
        open: impl Into<String>,
        alternative: impl Into<String>,
        otherwise: impl Into<String>,
        end: impl Into<String>,
    ) -> Self {
        Self {
            open: open.into(),
            alternative: alternative.into(),
            otherwise: otherwise.into(),
            end: end.into(),
        }
    }

    /// Swift conditional compilation (`#if DEBUG` / `#elseif` / `#else` / `#endif`).
    pub fn swift_debug() -> Self {
        Self::new(DEBUG_IF, DEBUG_ELSEIF, DEBUG_ELSE, DEBUG_ENDIF)
    }

    /// C# preprocessor (`#if DEBUG` / `#elif` / `#else` / `#endif`).
    pub fn csharp_debug() -> Self {
        Self::new(DEBUG_IF, "#elif", DEBUG_ELSE, DEBUG_ENDIF)
    }

    /// C/C++ preprocessor (`#ifdef DEBUG` / `#elif` / `#else` / `#endif`).
    pub fn c_debug() -> Self {
        Self::new("#ifdef DEBUG", "#elif", DEBUG_ELSE, DEBUG_ENDIF)
    }

    /// All four literals, in `open`, `alternative`, `otherwise`, `end` order.
    pub fn literals(&self) -> [&str; 4] {
        [
            self.open.as_str(),
            self.alternative.as_str(),
            self.otherwise.as_str(),
            self.end.as_str(),
        ]
    }

    /// Returns `true` if every literal is non-empty, single-line and already trimmed.
    ///
    /// A literal that fails this check could never match a trimmed buffer line, or would split
    /// into several lines when written.
    pub fn is_valid(&self) -> bool {
        self.literals()
            .iter()
            .all(|lit| !lit.is_empty() && lit.trim() == *lit && !lit.contains(['\n', '\r']))
    }
}

impl Default for DirectiveConfig {
    fn default() -> Self {
        Self::swift_debug()
    }
}
