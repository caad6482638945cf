// crates/repl_runner/src/lib.rs

//! Command-line host for the block locator: reads a source file, picks the
//! selected lines or the block under the cursor, and prints them or sends them
//! to an interactive interpreter.

pub mod config;
pub mod delivery;

use anyhow::{bail, Context, Result};
use block_locator::{
    code_for_selection, is_nothing_to_run, AnchorPolicy, Position, Selection, SourceDocument,
    TextDocument,
};
use std::fs;
use std::io;

use crate::config::{CodeTarget, RunnerConfig};
use crate::delivery::{CodeDelivery, ReplDelivery, WriterDelivery};

/// Extracts the code named by `target` from `source`.
///
/// Fails if the target refers to a line past the end of the source.
pub fn extract_code(source: &str, target: CodeTarget, policy: AnchorPolicy) -> Result<String> {
    let document = SourceDocument::from_text(source);
    let line_count = document.line_count();

    let last_line = match target {
        CodeTarget::Cursor { line } => line,
        CodeTarget::Lines { end, .. } => end,
    };
    if last_line >= line_count {
        bail!(
            "Line {} is past the end of the file ({} lines)",
            last_line + 1,
            line_count
        );
    }

    let selection = match target {
        CodeTarget::Cursor { line } => Selection::cursor(line, 0),
        CodeTarget::Lines { start, end } => {
            let end_len = document.line_at(end)?.char_count();
            Selection::new(Position::new(start, 0), Position::new(end, end_len))
        }
    };
    let code = code_for_selection(&document, &selection, policy)
        .context("Failed to extract code")?;
    Ok(code)
}

/// Outcome of a run, for callers that want to report it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The code was printed or sent.
    Delivered { lines: usize },
    /// The extracted code was blank, so nothing was delivered.
    NothingToRun,
}

/// Reads the configured file, extracts the code and delivers it.
pub fn run(config: &RunnerConfig) -> Result<RunOutcome> {
    let source = fs::read_to_string(&config.file)
        .with_context(|| format!("Error reading file {}", config.file.display()))?;
    log::debug!("runner configuration: {:?}", config);

    let code = extract_code(&source, config.target, config.policy)?;
    if is_nothing_to_run(&code) {
        log::warn!("extracted code is blank; nothing delivered");
        return Ok(RunOutcome::NothingToRun);
    }
    let lines = code.lines().count();

    if config.send {
        let mut repl = ReplDelivery::spawn(&config.interpreter_path, config.line_delay)?;
        repl.deliver(&code)?;
        let status = repl.finish()?;
        if !status.success() {
            bail!("Interpreter '{}' exited with {}", config.interpreter_path, status);
        }
    } else {
        WriterDelivery::new(io::stdout().lock()).deliver(&code)?;
    }
    Ok(RunOutcome::Delivered { lines })
}
