//! Debug commands: `lex` and `raw` for inspecting lexeme streams.

use ats_lexer::{raw, tokenize, Terminal};

use super::{format_lexeme, line_col, read_file};

/// Lex a file and display the filtered lexeme stream.
pub fn lex_file(path: &str) {
    let source = read_file(path);
    let output = tokenize(&source);

    println!("Lexemes for '{}' ({} lexemes):", path, output.lexemes.len());
    for lexeme in &output.lexemes {
        println!("{}", format_lexeme(lexeme));
    }

    if let Some(error) = output.error {
        let (line, col) = line_col(&source, error.span.start);
        eprintln!("error: {path}:{line}:{col}: {}", error.kind);
        std::process::exit(1);
    }
}

/// Lex a file and display every raw lexeme, trivia included.
///
/// Unlike `lex`, keeps going past errors; all of them are reported.
pub fn raw_file(path: &str) {
    let source = read_file(path);
    let mut scanner = raw(&source);
    let mut errors = Vec::new();
    let mut count = 0usize;

    println!("Raw lexemes for '{path}':");
    while let Some(lexeme) = scanner.next() {
        println!("{}", format_lexeme(&lexeme));
        count += 1;
        if lexeme.tag == Terminal::Err {
            errors.push((lexeme.span, scanner.scan_error()));
        }
    }
    println!("({count} lexemes, {} errors)", errors.len());

    if errors.is_empty() {
        return;
    }
    for (span, cause) in &errors {
        let (line, col) = line_col(&source, span.start);
        match cause {
            Some(cause) => eprintln!("error: {path}:{line}:{col}: {cause}"),
            None => eprintln!("error: {path}:{line}:{col}: lexical error"),
        }
    }
    std::process::exit(1);
}
