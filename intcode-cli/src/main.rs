//! Intcode CLI — run programs and search noun/verb seeds.
//!
//! Exit codes:
//! - 0: Success
//! - 1: Usage, file or load error
//! - 2: Search exhausted without a match
//! - 3: Runtime error

mod commands;

use std::process;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let result = match args[1].as_str() {
        "run" => commands::run(&args[2..]),
        "seed" => commands::seed(&args[2..]),
        "search" => commands::search(&args[2..]),
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

fn print_usage() {
    eprintln!("Usage: intcode <command> [args]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  run <program> [input] [--dump]            Run with input from a file or stdin");
    eprintln!("  seed <program> [--noun N] [--verb V]      Run add/mul program with seeds, print address 0");
    eprintln!("  search <program> [--target N] [--max N] [--verbose]");
    eprintln!("                                            Find the noun/verb pair producing a target");
}
