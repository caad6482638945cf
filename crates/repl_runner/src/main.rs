use anyhow::Result;
use clap::{Arg, ArgAction, Command};
use std::env;
use std::path::PathBuf;

use block_locator::AnchorPolicy;
use repl_runner::config::{
    parse_line_span, resolve_interpreter, resolve_line_delay, CodeTarget, RunnerConfig,
    INTERPRETER_ENV, LINE_DELAY_ENV,
};
use repl_runner::RunOutcome;

fn main() -> Result<()> {
    let matches = Command::new("run_selection")
        .version("0.1.0")
        .about("Runs selected lines, or the Python block under the cursor, in a Python REPL")
        .arg(
            Arg::new("file")
                .required(true)
                .value_parser(clap::value_parser!(PathBuf))
                .help("Python source file"),
        )
        .arg(
            Arg::new("line")
                .long("line")
                .num_args(1)
                .value_parser(clap::value_parser!(u64).range(1..))
                .required_unless_present("select")
                .conflicts_with("select")
                .help("1-based cursor line; the block containing it is run"),
        )
        .arg(
            Arg::new("select")
                .long("select")
                .num_args(1)
                .help("Inclusive 1-based line selection START:END, run verbatim"),
        )
        .arg(
            Arg::new("send")
                .long("send")
                .help("Send the code to an interactive interpreter instead of printing it")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("interpreter")
                .long("interpreter")
                .num_args(1)
                .help("Interpreter for --send (env PYTHON_REPL_RUNNER_INTERPRETER, else python)"),
        )
        .arg(
            Arg::new("line_delay_ms")
                .long("line-delay-ms")
                .num_args(1)
                .value_parser(clap::value_parser!(u64))
                .help("Pause between lines sent to the interpreter"),
        )
        .arg(
            Arg::new("innermost")
                .long("innermost")
                .help("Anchor at the innermost enclosing block instead of the top-level one")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose logging")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let verbose = matches.get_flag("verbose");
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let target = match matches.get_one::<String>("select") {
        Some(span) => parse_line_span(span)?,
        None => {
            // clap guarantees one of --line / --select is present.
            let line = matches.get_one::<u64>("line").copied().unwrap_or(1);
            CodeTarget::Cursor {
                line: (line - 1) as usize,
            }
        }
    };
    let policy = if matches.get_flag("innermost") {
        AnchorPolicy::Innermost
    } else {
        AnchorPolicy::Outermost
    };

    let config = RunnerConfig {
        file: matches
            .get_one::<PathBuf>("file")
            .cloned()
            .unwrap_or_default(),
        target,
        policy,
        send: matches.get_flag("send"),
        interpreter_path: resolve_interpreter(
            matches.get_one::<String>("interpreter").map(String::as_str),
            env::var(INTERPRETER_ENV).ok(),
        ),
        line_delay: resolve_line_delay(
            matches.get_one::<u64>("line_delay_ms").copied(),
            env::var(LINE_DELAY_ENV).ok(),
        )?,
    };

    match repl_runner::run(&config)? {
        RunOutcome::NothingToRun => eprintln!("No code to execute"),
        RunOutcome::Delivered { lines } if config.send => {
            eprintln!("Sent {} line(s) to {}", lines, config.interpreter_path)
        }
        RunOutcome::Delivered { .. } => {}
    }
    Ok(())
}
