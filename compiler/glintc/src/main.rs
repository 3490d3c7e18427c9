//! Glint CLI

use glintc::commands::{explain_error, lex_file, list_error_codes, parse_file, run_file};
use glintc::{init_tracing, parse_run_args, RunOptions};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "run" => match parse_run_args(&args[2..]) {
            Ok((path, options)) => run_file(&path, &options),
            Err(e) => {
                eprintln!("error: {e}");
                eprintln!("Usage: glint run <file.gl|-> [--plain|--html]");
                std::process::exit(1);
            }
        },
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: glint lex <file.gl|->");
                std::process::exit(1);
            }
            lex_file(&args[2]);
        }
        "parse" => {
            if args.len() < 3 {
                eprintln!("Usage: glint parse <file.gl|->");
                std::process::exit(1);
            }
            parse_file(&args[2]);
        }
        "explain" | "--explain" => {
            if args.len() < 3 {
                println!("Error codes:");
                print!("{}", list_error_codes());
                println!();
                println!("Run `glint explain <CODE>` for details.");
                return;
            }
            explain_error(&args[2]);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("glint {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            // A bare source path runs it with default options.
            if std::path::Path::new(command)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("gl"))
            {
                run_file(command, &RunOptions::default());
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                std::process::exit(1);
            }
        }
    }
}

fn print_usage() {
    println!("Glint: a tiny prefix-notation language");
    println!();
    println!("Usage: glint <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <file.gl|->      Evaluate a program (`-` reads stdin)");
    println!("  lex <file.gl|->      Tokenize and display tokens");
    println!("  parse <file.gl|->    Parse and display the syntax tree");
    println!("  explain [code]       Explain an error code (e.g., E1003)");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!("  <file.gl>            Shorthand for `run <file.gl>`");
    println!();
    println!("Run options:");
    println!("  --html               Span-tagged HTML markup (default)");
    println!("  --plain              Plain text, one statement per line");
    println!();
    println!("Environment:");
    println!("  RUST_LOG=<filter>    Enable logging, e.g. RUST_LOG=glint_eval=debug");
    println!("  GLINT_LOG_TREE=1     Show logged spans as a tree");
    println!();
    println!("Examples:");
    println!("  glint run main.gl");
    println!("  echo 'print + 1 2' | glint run - --plain");
    println!("  glint parse main.gl");
    println!("  glint explain E6003");
}
