//! CLI command implementations.

use std::fs;

use dfield_common::{Program, DEFAULT_FORMULA};
use dfield_vm::{Binding, Machine};
use tracing::debug;

/// Compile a formula to a .dfb word file.
pub fn compile(args: &[String]) -> Result<(), i32> {
    if args.is_empty() {
        eprintln!("error: compile requires a formula");
        eprintln!("Usage: dfield compile <formula> [-o output.dfb]");
        return Err(1);
    }

    let source = &args[0];

    // Parse -o flag
    let output = if args.len() >= 3 && args[1] == "-o" {
        args[2].clone()
    } else {
        "formula.dfb".to_string()
    };

    let program = compile_source(source)?;

    let bytes = program.to_bytes().map_err(|e| {
        eprintln!("error: {e}");
        1
    })?;

    fs::write(&output, &bytes).map_err(|e| {
        eprintln!("error: cannot write '{output}': {e}");
        1
    })?;

    eprintln!(
        "compiled {} instructions ({} bytes) -> {output}",
        program.len(),
        bytes.len()
    );
    Ok(())
}

/// Compile and evaluate a formula, printing the result.
pub fn eval(args: &[String]) -> Result<(), i32> {
    let inputs = parse_eval_args(args)?;
    let source = inputs.positional.as_deref().unwrap_or(DEFAULT_FORMULA);

    let program = compile_source(source)?;
    execute(&program, &inputs)
}

/// Decode, verify and evaluate a .dfb word file.
pub fn run(args: &[String]) -> Result<(), i32> {
    let inputs = parse_eval_args(args)?;
    let Some(input) = inputs.positional.as_deref() else {
        eprintln!("error: run requires an input file");
        eprintln!("Usage: dfield run <input.dfb> [x=1.5 ...] [--strict]");
        return Err(1);
    };

    let program = read_binary(input)?;

    if let Err(errors) = dfield_verifier::verify(&program) {
        for e in &errors {
            eprintln!("error: {e}");
        }
        return Err(2);
    }

    execute(&program, &inputs)
}

/// Compile a formula and check its register window statically.
pub fn verify(args: &[String]) -> Result<(), i32> {
    if args.is_empty() {
        eprintln!("error: verify requires a formula");
        eprintln!("Usage: dfield verify <formula>");
        return Err(1);
    }

    let program = compile_source(&args[0])?;

    match dfield_verifier::verify(&program) {
        Ok(report) => {
            let variables = if report.variables.is_empty() {
                "none".to_string()
            } else {
                report
                    .variables
                    .iter()
                    .map(char::to_string)
                    .collect::<Vec<_>>()
                    .join(", ")
            };
            println!(
                "OK: {} instructions, max head {}, variables: {variables}",
                program.len(),
                report.max_head
            );
            Ok(())
        }
        Err(errors) => {
            for e in &errors {
                eprintln!("error: {e}");
            }
            Err(2)
        }
    }
}

/// Print the listing of a compiled formula.
pub fn list(args: &[String]) -> Result<(), i32> {
    if args.is_empty() {
        eprintln!("error: list requires a formula");
        eprintln!("Usage: dfield list <formula>");
        return Err(1);
    }

    let program = compile_source(&args[0])?;
    print!("{}", dfield_compiler::listing(&program));
    Ok(())
}

// ---- Helpers ----

/// Arguments shared by `eval` and `run`.
#[derive(Debug, Default, PartialEq)]
struct EvalArgs {
    positional: Option<String>,
    bindings: Vec<Binding>,
    strict: bool,
}

fn parse_eval_args(args: &[String]) -> Result<EvalArgs, i32> {
    let mut parsed = EvalArgs::default();

    for arg in args {
        if arg == "--strict" {
            parsed.strict = true;
        } else if let Some(binding) = parse_binding(arg) {
            parsed.bindings.push(binding);
        } else if parsed.positional.is_none() {
            parsed.positional = Some(arg.clone());
        } else {
            eprintln!("error: unexpected argument '{arg}'");
            return Err(1);
        }
    }

    Ok(parsed)
}

/// `x=1.5` binds `x`. Anything else, `t=sin` included, is not a binding.
fn parse_binding(arg: &str) -> Option<Binding> {
    let (name, value) = arg.split_once('=')?;
    let mut chars = name.chars();
    let letter = chars.next().filter(char::is_ascii_lowercase)?;
    if chars.next().is_some() {
        return None;
    }
    let value = value.parse::<f64>().ok()?;
    Some(Binding::new(letter, value))
}

fn execute(program: &Program, inputs: &EvalArgs) -> Result<(), i32> {
    let machine = if inputs.strict {
        Machine::strict()
    } else {
        Machine::new()
    };

    match machine.evaluate(program, &inputs.bindings) {
        Ok(value) => {
            println!("{value}");
            Ok(())
        }
        Err(e) => {
            eprintln!("evaluation error: {e}");
            Err(3)
        }
    }
}

fn compile_source(source: &str) -> Result<Program, i32> {
    dfield_compiler::compile(source).map_err(|e| {
        eprintln!("error: {e}");
        1
    })
}

fn read_binary(path: &str) -> Result<Program, i32> {
    let bytes = fs::read(path).map_err(|e| {
        eprintln!("error: cannot read '{path}': {e}");
        1
    })?;
    debug!(path, bytes = bytes.len(), "read word file");

    Program::from_bytes(&bytes).map_err(|e| {
        eprintln!("error: decode failed: {e}");
        1
    })
}
