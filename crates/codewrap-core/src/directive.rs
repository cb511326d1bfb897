//! Recognition of conditional-compilation directive lines.

use codewrap_lang::DirectiveConfig;

/// Which directive a line holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectiveKind {
    /// Opening directive (`#if DEBUG`).
    Open,
    /// Alternative branch (`#elseif`).
    Alternative,
    /// Else branch (`#else`).
    Else,
    /// Closing directive (`#endif`).
    End,
}

/// Classify `line` against `config`.
///
/// The line is trimmed of surrounding whitespace and then compared exactly (case-sensitive) with
/// each literal; partial matches such as `#if DEBUG && X` or `// #endif` are not directives.
pub fn classify(line: &str, config: &DirectiveConfig) -> Option<DirectiveKind> {
    let trimmed = line.trim();
    if trimmed == config.open {
        Some(DirectiveKind::Open)
    } else if trimmed == config.alternative {
        Some(DirectiveKind::Alternative)
    } else if trimmed == config.otherwise {
        Some(DirectiveKind::Else)
    } else if trimmed == config.end {
        Some(DirectiveKind::End)
    } else {
        None
    }
}

/// Returns `true` if `line` is any recognized directive.
pub fn is_directive(line: &str, config: &DirectiveConfig) -> bool {
    classify(line, config).is_some()
}
