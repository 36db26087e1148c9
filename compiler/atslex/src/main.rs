//! ATS2 lexer CLI
//!
//! Dumps the lexeme stream of a source file, for debugging the lexer and
//! inspecting how ATS2 text is split.

mod commands;

use std::sync::Once;

use commands::{lex_file, raw_file};

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber when `RUST_LOG` is set.
///
/// Example: `RUST_LOG=ats_lexer=trace atslex lex prelude.dats`.
fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true).with_writer(std::io::stderr))
                .with(filter)
                .init();
        }
    });
}

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: atslex lex <file.dats>");
                std::process::exit(1);
            }
            lex_file(&args[2]);
        }
        "raw" => {
            if args.len() < 3 {
                eprintln!("Usage: atslex raw <file.dats>");
                std::process::exit(1);
            }
            raw_file(&args[2]);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("atslex {}", env!("CARGO_PKG_VERSION"));
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
    println!("ATS2 lexer");
    println!();
    println!("Usage: atslex <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file>    Print the filtered lexemes (no whitespace or comments)");
    println!("  raw <file>    Print every raw lexeme, whitespace and comments included");
    println!("  help          Show this help message");
    println!("  version       Show version information");
    println!();
    println!("Sources are read as ISO-8859-15. Exits with status 1 on a lexical error.");
    println!("Set RUST_LOG (e.g. RUST_LOG=ats_lexer=debug) to enable tracing output.");
}
