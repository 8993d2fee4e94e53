//! clauf: front end for a small C subset.

use std::process::ExitCode;

use claufc::commands::{check_file, lex_file, parse_file, parse_file_args, CliOptions};

type FileCommand = fn(&str, &CliOptions) -> ExitCode;

fn main() -> ExitCode {
    claufc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return ExitCode::SUCCESS;
    }

    let command = args[1].as_str();
    let handler: FileCommand = match command {
        "check" => check_file as FileCommand,
        "parse" => parse_file,
        "lex" => lex_file,
        "help" | "--help" | "-h" => {
            print_usage();
            return ExitCode::SUCCESS;
        }
        "version" | "--version" | "-V" => {
            println!("clauf {}", env!("CARGO_PKG_VERSION"));
            return ExitCode::SUCCESS;
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            return ExitCode::FAILURE;
        }
    };

    match parse_file_args(&args[2..]) {
        Ok((path, options)) => handler(&path, &options),
        Err(message) => {
            eprintln!("error: {message}");
            eprintln!("Usage: clauf {command} <file.c> [--color=auto|always|never] [--error-limit=N]");
            ExitCode::FAILURE
        }
    }
}

fn print_usage() {
    println!("clauf - C subset front end");
    println!();
    println!("Usage: clauf <command> [options]");
    println!();
    println!("Commands:");
    println!("  check <file.c>      Parse and resolve names; report diagnostics");
    println!("  parse <file.c>      Print the AST of a valid file");
    println!("  lex <file.c>        Tokenize and display tokens");
    println!("  help                Show this help message");
    println!("  version             Show version information");
    println!();
    println!("Options:");
    println!("  --color=<mode>      Colored diagnostics: auto (default), always, never");
    println!("  --error-limit=<n>   Show at most n errors (0 = no limit)");
    println!();
    println!("Logging:");
    println!("  CLAUF_LOG=<filter>  Enable tracing output, e.g. CLAUF_LOG=clauf_parse=trace");
}
