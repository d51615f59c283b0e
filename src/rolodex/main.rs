//! # Rolodex CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, and this file only
//! invokes `cli::run()` and handles process termination.
//!
//! - `cli/setup.rs`: clap definitions and the command list for `help`
//! - `cli/commands.rs`: context wiring, one-shot commands, error boundary
//! - `cli/repl.rs`: the interactive assistant loop
//! - `cli/render.rs`: terminal output

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
