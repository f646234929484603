//! Lexer for guard formulas using logos

use logos::Logos;

use crate::error::Span;

#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\n\r]+")]
pub enum Token {
    // Constants
    #[token("true")]
    True,
    #[token("false")]
    False,

    // Connectives
    #[token("!")]
    Not,
    #[token("&")]
    And,
    #[token("|")]
    Or,
    #[token("^")]
    Xor,
    #[token("->")]
    Implies,
    #[token("<->")]
    Iff,

    #[token("(")]
    ParenOpen,
    #[token(")")]
    ParenClose,

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*", |lex| lex.slice().to_string())]
    Ident(String),
}

/// Lex a guard, keeping unrecognized input as `Err` so the parser can report it
pub fn lex(input: &str) -> impl Iterator<Item = (Result<Token, ()>, Span)> + '_ {
    Token::lexer(input).spanned()
}
