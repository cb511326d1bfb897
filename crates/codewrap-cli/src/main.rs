//! `codewrap` - toggle `#if DEBUG` wrappers around line ranges of a source file.
//!
//! The tool plays the part an editor host would: it loads the buffer, hands the engine the
//! selections, and writes the edited text back out. A rejected selection leaves the input
//! untouched and exits with status 1.

mod cli;
mod config;
mod logging;

use anyhow::{Context, Result, bail};
use clap::Parser;
use cli::CliArgs;
use codewrap_core::{Applied, PendingEdit, RopeBuffer, ToggleEngine};
use config::Settings;
use serde_json::{Value, json};
use std::io::{Read, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = CliArgs::parse();
    logging::init(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("codewrap: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &CliArgs) -> Result<()> {
    if args.in_place && args.input_path().is_none() {
        bail!("--in-place needs a FILE to write to");
    }

    let settings = Settings::from_args(args)?;
    let engine = ToggleEngine::new(settings.directives)
        .context("invalid directive configuration")?
        .with_options(settings.options);

    let input = read_input(args)?;
    let mut buffer = RopeBuffer::from_text(&input);

    if args.plan {
        let applied = engine.prepare(&buffer, &args.lines)?;
        let mut stdout = std::io::stdout().lock();
        serde_json::to_writer_pretty(&mut stdout, &plan_to_json(&applied))?;
        writeln!(stdout)?;
        return Ok(());
    }

    let applied = engine.toggle(&mut buffer, &args.lines)?;
    tracing::info!(
        wrapped = applied.wrapped,
        unwrapped = applied.unwrapped,
        "toggled selections"
    );
    let output = buffer.to_text();

    match args.input_path() {
        Some(path) if args.in_place => std::fs::write(path, output)
            .with_context(|| format!("failed to write {}", path.display()))?,
        _ => std::io::stdout()
            .lock()
            .write_all(output.as_bytes())
            .context("failed to write to stdout")?,
    }

    Ok(())
}

fn read_input(args: &CliArgs) -> Result<String> {
    match args.input_path() {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(text)
        }
    }
}

/// JSON form of a plan: 0-based indices, in application order.
fn plan_to_json(applied: &Applied) -> Value {
    let edits: Vec<Value> = applied
        .plan
        .edits()
        .iter()
        .map(|edit| match edit {
            PendingEdit::Insert { index, text } => {
                json!({ "op": "insert", "index": index, "text": text })
            }
            PendingEdit::Remove { index } => json!({ "op": "remove", "index": index }),
        })
        .collect();

    let selections: Vec<Value> = applied
        .selections
        .iter()
        .map(|range| json!({ "start": range.start, "end": range.end }))
        .collect();

    json!({
        "edits": edits,
        "selections": selections,
        "wrapped": applied.wrapped,
        "unwrapped": applied.unwrapped,
    })
}
