pub mod compile;
pub mod diagnostics;
pub mod lex;
pub mod loops;
pub mod settings;
pub mod tac;
pub mod tok_stream;
pub mod tokens;
pub mod translate;
pub mod unique_names;
