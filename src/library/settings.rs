#[derive(Clone, Debug, PartialEq)]
pub enum Stage {
    Lex,
    Tac,
}
