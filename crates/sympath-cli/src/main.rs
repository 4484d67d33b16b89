//! Symbolic execution CLI.
//!
//! Provides the `sympath` binary: reads a source file containing one
//! function, executes it symbolically, and writes the final state of every
//! control-flow path to the output file. The default output is the text
//! state-list format; `--json` switches to a machine-readable rendering of
//! the same data.

use std::fs;
use std::path::PathBuf;
use std::process;

use clap::Parser;

use sympath_exec::{render_states, state_reports, ExecConfig, Executor};

/// Symbolic executor for a tiny C-like language.
#[derive(Parser)]
#[command(name = "sympath", about = "Symbolic executor for a tiny C-like language")]
struct Cli {
    /// Source file containing a single function.
    input: PathBuf,

    /// Destination file for the state list.
    output: PathBuf,

    /// Emit the state list as pretty-printed JSON instead of text.
    #[arg(long)]
    json: bool,

    /// Stop each path at its first `return` instead of continuing to the
    /// end of the body and re-evaluating the trailing return expression.
    #[arg(long)]
    stop_after_return: bool,
}

fn main() {
    let cli = Cli::parse();
    process::exit(run(&cli));
}

/// Execute the pipeline. Returns exit code: 0 = success, 1 = I/O or
/// syntax error.
fn run(cli: &Cli) -> i32 {
    let source = match fs::read_to_string(&cli.input) {
        Ok(text) => text,
        Err(e) => {
            eprintln!(
                "Error: failed to read input file '{}': {}",
                cli.input.display(),
                e
            );
            return 1;
        }
    };

    let func = match sympath_syntax::parse(&source) {
        Ok(func) => func,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    let config = ExecConfig {
        stop_after_return: cli.stop_after_return,
    };
    let states = Executor::new(&func, config).run();

    let rendered = if cli.json {
        match serde_json::to_string_pretty(&state_reports(&states)) {
            Ok(json) => json,
            Err(e) => {
                eprintln!("Error: failed to serialize states: {}", e);
                return 1;
            }
        }
    } else {
        render_states(&states)
    };

    if let Err(e) = fs::write(&cli.output, rendered) {
        eprintln!(
            "Error: failed to write output file '{}': {}",
            cli.output.display(),
            e
        );
        return 1;
    }

    0
}
