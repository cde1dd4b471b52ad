// Flecha front end: tokenize a source file and dump the token stream.

use std::fs;
use std::path::Path;
use std::process;

use flecha::lexer::Tokenizer;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        let program_name = args.first().map(|s| s.as_str()).unwrap_or("flecha");
        eprintln!("Error: No input file provided");
        eprintln!();
        eprintln!("Usage: {} <file.fl>", program_name);
        eprintln!();
        eprintln!("Tokenizes the given Flecha source file and prints one");
        eprintln!("token per line. Lexical errors are reported with their");
        eprintln!("line and column.");
        process::exit(1);
    }

    let source_file = &args[1];

    if !Path::new(source_file).exists() {
        eprintln!("Error: File '{}' not found", source_file);
        process::exit(1);
    }

    let source = match fs::read_to_string(source_file) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("Error: Could not read '{}': {}", source_file, err);
            process::exit(1);
        }
    };

    let tokens = match Tokenizer::new(&source).tokenize() {
        Ok(tokens) => tokens,
        Err(err) => {
            eprintln!("Error: {}", err);
            process::exit(1);
        }
    };

    for token in &tokens {
        println!(
            "{:>4}:{:<4} {:?} {}",
            token.line, token.column, token.token_type, token
        );
    }
}
