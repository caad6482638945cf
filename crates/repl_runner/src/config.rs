// crates/repl_runner/src/config.rs

use anyhow::{bail, Context, Result};
use block_locator::AnchorPolicy;
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable naming the interpreter to launch.
pub const INTERPRETER_ENV: &str = "PYTHON_REPL_RUNNER_INTERPRETER";
/// Environment variable with the pause, in milliseconds, between sent lines.
pub const LINE_DELAY_ENV: &str = "PYTHON_REPL_RUNNER_LINE_DELAY_MS";
pub const DEFAULT_INTERPRETER: &str = "python";

/// What part of the file to run. Line numbers are zero-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CodeTarget {
    /// A bare cursor on this line; the enclosing block is located.
    Cursor { line: usize },
    /// An explicit whole-line selection, inclusive.
    Lines { start: usize, end: usize },
}

/// Runtime configuration composed from CLI + environment. CLI values win.
#[derive(Clone, Debug)]
pub struct RunnerConfig {
    pub file: PathBuf,
    pub target: CodeTarget,
    pub policy: AnchorPolicy,
    pub send: bool,
    pub interpreter_path: String,
    pub line_delay: Duration,
}

/// Picks the interpreter: CLI value, else the environment value, else `python`.
pub fn resolve_interpreter(cli: Option<&str>, env_value: Option<String>) -> String {
    cli.map(str::to_string)
        .or_else(|| env_value.filter(|v| !v.trim().is_empty()))
        .unwrap_or_else(|| DEFAULT_INTERPRETER.to_string())
}

/// Picks the per-line delay: CLI value, else the environment value, else none.
pub fn resolve_line_delay(cli: Option<u64>, env_value: Option<String>) -> Result<Duration> {
    if let Some(ms) = cli {
        return Ok(Duration::from_millis(ms));
    }
    match env_value {
        Some(raw) => {
            let ms: u64 = raw
                .trim()
                .parse()
                .with_context(|| format!("Invalid {} value '{}'", LINE_DELAY_ENV, raw))?;
            Ok(Duration::from_millis(ms))
        }
        None => Ok(Duration::ZERO),
    }
}

/// Parses an inclusive, 1-based `START:END` (or single `N`) line span into a
/// zero-based `CodeTarget::Lines`.
pub fn parse_line_span(spec: &str) -> Result<CodeTarget> {
    let (start, end) = match spec.split_once(':') {
        Some((start, end)) => (start, end),
        None => (spec, spec),
    };
    let start: usize = start
        .trim()
        .parse()
        .with_context(|| format!("Invalid start line in '{}'", spec))?;
    let end: usize = end
        .trim()
        .parse()
        .with_context(|| format!("Invalid end line in '{}'", spec))?;
    if start == 0 || end == 0 {
        bail!("Line numbers start at 1, got '{}'", spec);
    }
    if end < start {
        bail!("Selection end comes before its start in '{}'", spec);
    }
    Ok(CodeTarget::Lines {
        start: start - 1,
        end: end - 1,
    })
}
