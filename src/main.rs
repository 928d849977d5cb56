mod library;

use std::{fs, process};

use clap::Parser;
use library::{compile, settings::Stage};

// Command-line options
#[derive(Parser, Debug)]
#[command(about = "Three-address code translator for while programs")]
struct Args {
    #[arg(long, help = "Run the lexer, but stop before translation")]
    lex: bool,

    #[arg()]
    input: Option<String>,
}

fn main() {
    let args = Args::parse();

    let stage = if args.lex { Stage::Lex } else { Stage::Tac };

    let Some(input_file) = args.input else {
        eprintln!("Usage: <program> [options] <source-file>");
        process::exit(1);
    };

    let source = fs::read_to_string(&input_file).unwrap_or_else(|e| {
        eprintln!("Failed to read {}: {}", input_file, e);
        process::exit(1);
    });

    let output = compile::run(&stage, &source);

    // TAC on stdout, diagnostics on stderr
    for instruction in &output.instructions {
        println!("{}", instruction);
    }
    for diagnostic in &output.diagnostics {
        eprintln!("{}", diagnostic);
    }

    if !output.diagnostics.is_empty() {
        process::exit(1);
    }
}
