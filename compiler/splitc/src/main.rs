//! splitc: comment-splitting scanner CLI.

use split_lexer_core::Granularity;
use splitc::commands::{lex_file, stats_file};

fn main() {
    splitc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "lex" => {
            let mut granularity = Granularity::Merged;
            let mut file_path = None;

            for arg in args.iter().skip(2) {
                if arg == "--lexemes" {
                    granularity = Granularity::Lexeme;
                } else if !arg.starts_with('-') && file_path.is_none() {
                    file_path = Some(arg.as_str());
                }
            }

            let Some(path) = file_path else {
                eprintln!("error: missing file path");
                eprintln!("Usage: splitc lex <file> [--lexemes]");
                std::process::exit(1);
            };
            lex_file(path, granularity);
        }
        "stats" => {
            if args.len() < 3 {
                eprintln!("Usage: splitc stats <file>");
                std::process::exit(1);
            }
            stats_file(&args[2]);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-v" => {
            println!("splitc {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("splitc: split source text into plain content and comments");
    println!();
    println!("Usage: splitc <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file>           Print every token with its span and text");
    println!("  stats <file>         Print token counts per kind and the final scan state");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Lex options:");
    println!("  --lexemes            Emit raw automaton lexemes instead of merged runs");
    println!();
    println!("Set RUST_LOG=split_lexer_core=trace to log every token.");
}
