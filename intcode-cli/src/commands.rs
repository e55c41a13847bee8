//! CLI command implementations.

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};

use intcode_common::Program;
use intcode_vm::{search::DEFAULT_TARGET, Interpreter, SearchConfig};

/// Flags that take a value; their values are not positional arguments.
const VALUE_FLAGS: [&str; 4] = ["--noun", "--verb", "--target", "--max"];

/// Run a program on the full instruction set.
pub fn run(args: &[String]) -> Result<(), i32> {
    let positional = positionals(args)?;
    let Some(path) = positional.first() else {
        eprintln!("error: run requires a program file");
        eprintln!("Usage: intcode run <program> [input] [--dump]");
        return Err(1);
    };
    let program = read_program(path)?;

    let input: Box<dyn BufRead> = match positional.get(1) {
        Some(input_path) => {
            let file = File::open(input_path).map_err(|e| {
                eprintln!("error: cannot read '{input_path}': {e}");
                1
            })?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(io::stdin().lock()),
    };

    let stdout = io::stdout();
    let mut vm = Interpreter::new(program, input, stdout.lock());
    if let Err(e) = vm.run() {
        eprintln!("runtime error: {e}");
        return Err(3);
    }

    if has_flag(args, "--dump") {
        let memory = vm.into_memory();
        println!("{memory}");
    }
    Ok(())
}

/// Run a program on the restricted set with two seeds and print address 0.
pub fn seed(args: &[String]) -> Result<(), i32> {
    let positional = positionals(args)?;
    let Some(path) = positional.first() else {
        eprintln!("error: seed requires a program file");
        eprintln!("Usage: intcode seed <program> [--noun N] [--verb V]");
        return Err(1);
    };
    let program = read_program(path)?;
    let noun = parse_flag(args, "--noun")?.unwrap_or(12);
    let verb = parse_flag(args, "--verb")?.unwrap_or(2);

    match intcode_vm::run_with_seeds(&program, noun, verb) {
        Ok(value) => {
            println!("{value}");
            Ok(())
        }
        Err(e) => {
            eprintln!("runtime error: {e}");
            Err(3)
        }
    }
}

/// Search noun/verb seeds for the pair that leaves a target at address 0.
pub fn search(args: &[String]) -> Result<(), i32> {
    let positional = positionals(args)?;
    let Some(path) = positional.first() else {
        eprintln!("error: search requires a program file");
        eprintln!("Usage: intcode search <program> [--target N] [--max N] [--verbose]");
        return Err(1);
    };
    let program = read_program(path)?;

    let mut config = SearchConfig {
        target: parse_flag(args, "--target")?.unwrap_or(DEFAULT_TARGET),
        ..SearchConfig::default()
    };
    if let Some(max) = parse_flag(args, "--max")? {
        if max < 0 {
            eprintln!("error: --max must not be negative");
            return Err(1);
        }
        config.range = 0..=max;
    }
    let verbose = has_flag(args, "--verbose");

    let result = intcode_vm::search_with(&program, &config, |noun, verb, value| {
        if verbose {
            eprintln!("n: {noun}, v: {verb} = {value}");
        }
    });

    match result {
        Ok(Some(hit)) => {
            println!(
                "noun {} and verb {} produce {}",
                hit.noun, hit.verb, hit.value
            );
            println!("100 * noun + verb = {}", hit.answer());
            Ok(())
        }
        Ok(None) => {
            eprintln!(
                "error: no noun/verb pair in {}..={} produces {}",
                config.range.start(),
                config.range.end(),
                config.target
            );
            Err(2)
        }
        Err(e) => {
            eprintln!("runtime error: {e}");
            Err(3)
        }
    }
}

/// Read and parse a program source file.
fn read_program(path: &str) -> Result<Program, i32> {
    let text = fs::read_to_string(path).map_err(|e| {
        eprintln!("error: cannot read '{path}': {e}");
        1
    })?;

    Program::parse(&text).map_err(|e| {
        eprintln!("error: invalid program: {e}");
        1
    })
}

/// Arguments that are neither flags nor flag values.
fn positionals(args: &[String]) -> Result<Vec<&str>, i32> {
    let mut out = Vec::new();
    let mut i = 0;
    while i < args.len() {
        let arg = args[i].as_str();
        if VALUE_FLAGS.contains(&arg) {
            i += 2;
            continue;
        }
        if arg.starts_with("--") && arg != "--dump" && arg != "--verbose" {
            eprintln!("error: unknown flag '{arg}'");
            return Err(1);
        }
        if !arg.starts_with("--") {
            out.push(arg);
        }
        i += 1;
    }
    Ok(out)
}

fn has_flag(args: &[String], name: &str) -> bool {
    args.iter().any(|a| a == name)
}

/// Parse an integer-valued flag.
fn parse_flag(args: &[String], name: &str) -> Result<Option<i64>, i32> {
    let Some(i) = args.iter().position(|a| a == name) else {
        return Ok(None);
    };
    let Some(raw) = args.get(i + 1) else {
        eprintln!("error: {name} requires a value");
        return Err(1);
    };
    raw.parse().map(Some).map_err(|_| {
        eprintln!("error: {name} expects an integer, got '{raw}'");
        1
    })
}
