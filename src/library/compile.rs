use super::diagnostics::Diagnostic;
use super::lex::Lexer;
use super::settings::Stage;
use super::tac::Instruction;
use super::translate::Translator;

pub struct TranslationOutput {
    pub instructions: Vec<Instruction>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Drive one translation: lex, then translate, stopping early if a
/// partial stage was requested. Lexer and translator diagnostics are
/// merged into source-line order.
pub fn run(stage: &Stage, source: &str) -> TranslationOutput {
    let lexer = Lexer::new();
    let (tokens, mut diagnostics) = lexer.lex(source);

    if *stage == Stage::Lex {
        return TranslationOutput {
            instructions: vec![],
            diagnostics,
        };
    }

    let (instructions, translate_diagnostics) = Translator::new(tokens).run();
    diagnostics.extend(translate_diagnostics);
    diagnostics.sort_by_key(|d| d.line);

    TranslationOutput {
        instructions,
        diagnostics,
    }
}
