//! Settings resolved from the config file and command-line flags.
//!
//! Precedence: `--preset` over the config file's `directives` over the Swift defaults. The brace
//! guard is on if either the config file or `--check-braces` enables it.

use crate::cli::CliArgs;
use anyhow::{Context, Result};
use codewrap_core::ToggleOptions;
use codewrap_lang::DirectiveConfig;
use serde::Deserialize;
use std::path::Path;

/// On-disk JSON config.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    /// Directive literals; missing fields fall back to Swift.
    pub directives: Option<DirectiveConfig>,
    /// Enable the brace guard.
    pub reject_unbalanced_braces: bool,
}

impl FileConfig {
    /// Parse a config from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("config is not valid JSON")
    }

    /// Read and parse a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("failed to load config {}", path.display()))
    }
}

/// Effective engine settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Directive literals.
    pub directives: DirectiveConfig,
    /// Validation options.
    pub options: ToggleOptions,
}

impl Settings {
    /// Merge `file` (if any) with command-line flags.
    pub fn resolve(args: &CliArgs, file: Option<FileConfig>) -> Self {
        let file = file.unwrap_or_default();

        let directives = match args.preset {
            Some(preset) => preset.directives(),
            None => file.directives.unwrap_or_default(),
        };

        Self {
            directives,
            options: ToggleOptions {
                reject_unbalanced_braces: args.check_braces || file.reject_unbalanced_braces,
            },
        }
    }

    /// Load the config file named by `--config` (if any) and merge it with the flags.
    pub fn from_args(args: &CliArgs) -> Result<Self> {
        let file = args.config.as_deref().map(FileConfig::load).transpose()?;
        let settings = Self::resolve(args, file);
        tracing::debug!(?settings, "resolved settings");
        Ok(settings)
    }
}
