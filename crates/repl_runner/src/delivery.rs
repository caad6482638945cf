// crates/repl_runner/src/delivery.rs

use anyhow::{Context, Result};
use block_locator::get_indentation_level;
use once_cell::sync::Lazy;
use regex::Regex;
use std::io::Write;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread;
use std::time::Duration;

// Clauses that continue the compound statement above them at the same indentation.
static CONTINUATION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:else\s*:|elif\s|except\b|finally\s*:)").unwrap());

/// Splits `code` into the lines an interactive prompt should receive.
///
/// The prompt only ends a compound statement on a blank line, so one is
/// inserted before a top-level line that directly follows an indented one,
/// unless that line continues the statement (`else:`, `except ...:`).
pub fn interactive_lines(code: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut inside_block = false;
    for line in code.lines() {
        if line.trim().is_empty() {
            inside_block = false;
        } else if get_indentation_level(line) > 0 {
            inside_block = true;
        } else {
            if inside_block && !CONTINUATION_RE.is_match(line) {
                out.push("");
            }
            inside_block = false;
        }
        out.push(line);
    }
    out
}

/// Somewhere extracted code can be sent.
pub trait CodeDelivery {
    fn deliver(&mut self, code: &str) -> Result<()>;
}

/// Writes the code, followed by a newline, to any writer (stdout by default).
pub struct WriterDelivery<W: Write> {
    writer: W,
}

impl<W: Write> WriterDelivery<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> CodeDelivery for WriterDelivery<W> {
    fn deliver(&mut self, code: &str) -> Result<()> {
        writeln!(self.writer, "{}", code).context("Failed to write code")?;
        self.writer.flush().context("Failed to flush output")?;
        Ok(())
    }
}

/// Feeds code into an interactive interpreter's stdin, one line at a time.
///
/// The interpreter is started as `<interpreter> -i -q` so it reads statements
/// the way a terminal session would, even though stdin is a pipe.
pub struct ReplDelivery {
    interpreter: String,
    child: Child,
    line_delay: Duration,
}

impl ReplDelivery {
    pub fn spawn(interpreter: &str, line_delay: Duration) -> Result<Self> {
        let child = Command::new(interpreter)
            .args(["-i", "-q"])
            .stdin(Stdio::piped())
            .spawn()
            .with_context(|| format!("Failed to start interpreter '{}'", interpreter))?;
        log::info!("started interpreter {} (pid {})", interpreter, child.id());
        Ok(Self {
            interpreter: interpreter.to_string(),
            child,
            line_delay,
        })
    }

    /// Closes the interpreter's stdin and waits for it to exit.
    pub fn finish(mut self) -> Result<ExitStatus> {
        drop(self.child.stdin.take());
        let status = self
            .child
            .wait()
            .with_context(|| format!("Failed to wait on interpreter '{}'", self.interpreter))?;
        log::info!("interpreter {} exited with {}", self.interpreter, status);
        Ok(status)
    }
}

impl CodeDelivery for ReplDelivery {
    fn deliver(&mut self, code: &str) -> Result<()> {
        let stdin = self
            .child
            .stdin
            .as_mut()
            .context("Interpreter stdin is already closed")?;

        let mut sent = 0;
        for line in interactive_lines(code) {
            if sent > 0 && !self.line_delay.is_zero() {
                thread::sleep(self.line_delay);
            }
            writeln!(stdin, "{}", line).context("Failed to write to interpreter")?;
            stdin.flush().context("Failed to flush interpreter stdin")?;
            sent += 1;
        }
        // Close whatever compound statement the last lines left open.
        writeln!(stdin).context("Failed to write to interpreter")?;
        stdin.flush().context("Failed to flush interpreter stdin")?;

        log::info!("sent {} line(s) to {}", sent, self.interpreter);
        Ok(())
    }
}
