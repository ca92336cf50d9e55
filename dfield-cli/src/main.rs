//! dfield CLI: compile, verify, list, and evaluate formulas.
//!
//! Exit codes:
//! - 0: Success
//! - 1: Input/decode/compile error
//! - 2: Verification failure
//! - 3: Evaluation error

mod commands;

use std::process;

use tracing_subscriber::{fmt, EnvFilter};

fn main() {
    init_logging();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let result = match args[1].as_str() {
        "compile" => commands::compile(&args[2..]),
        "eval" => commands::eval(&args[2..]),
        "run" => commands::run(&args[2..]),
        "verify" => commands::verify(&args[2..]),
        "list" => commands::list(&args[2..]),
        "--help" | "-h" | "help" => {
            print_usage();
            process::exit(0);
        }
        other => {
            eprintln!("error: unknown command '{other}'");
            eprintln!();
            print_usage();
            process::exit(1);
        }
    };

    if let Err(code) = result {
        process::exit(code);
    }
}

/// Log to stderr so stdout carries only results. `RUST_LOG` overrides the
/// default `warn` filter.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn print_usage() {
    eprintln!("Usage: dfield <command> [args]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  compile <formula> [-o output.dfb]          Compile a formula to a word file");
    eprintln!("  eval [formula] [x=1.5 ...] [--strict]      Compile and evaluate a formula");
    eprintln!("  run <input.dfb> [x=1.5 ...] [--strict]     Verify and evaluate a word file");
    eprintln!("  verify <formula>                           Check the register window statically");
    eprintln!("  list <formula>                             Print the compiled instructions");
    eprintln!();
    eprintln!("Without a formula, eval uses the default: {}", dfield_common::DEFAULT_FORMULA);
    eprintln!("--strict makes reading an unbound variable an error.");
}
