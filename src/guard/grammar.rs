//! Guard parser implementation using chumsky

use chumsky::input::{Stream, ValueInput};
use chumsky::prelude::*;

use crate::error::ParseError;
use crate::guard::ast::Guard;
use crate::guard::lexer::{self, Token};

/// Parse a guard formula
pub fn parse(input: &str) -> Result<Guard, Vec<ParseError>> {
    let len = input.len();

    let mut tokens = Vec::new();
    for (tok, span) in lexer::lex(input) {
        match tok {
            Ok(tok) => tokens.push((tok, SimpleSpan::from(span))),
            Err(()) => {
                let found = input.get(span.clone()).unwrap_or_default();
                return Err(vec![ParseError::Syntax {
                    span,
                    message: format!("Unexpected character '{}'", found),
                    expected: Vec::new(),
                }]);
            }
        }
    }

    let token_stream = Stream::from_iter(tokens)
        // Split (Token, SimpleSpan) into token and span parts
        .map((len..len).into(), |(t, s): (_, _)| (t, s));

    guard_parser()
        .parse(token_stream)
        .into_result()
        .map_err(|errs| errs.into_iter().map(|e| e.into()).collect())
}

fn guard_parser<'a, I>() -> impl Parser<'a, I, Guard, extra::Err<Rich<'a, Token>>> + Clone
where
    I: ValueInput<'a, Token = Token, Span = SimpleSpan>,
{
    recursive(|guard| {
        let atom = choice((
            just(Token::True).to(Guard::Const(true)),
            just(Token::False).to(Guard::Const(false)),
            select! { Token::Ident(name) => Guard::Var(name) },
            guard
                .clone()
                .delimited_by(just(Token::ParenOpen), just(Token::ParenClose)),
        ))
        .labelled("proposition");

        let unary = just(Token::Not)
            .repeated()
            .collect::<Vec<_>>()
            .then(atom)
            .map(|(nots, inner)| nots.iter().fold(inner, |g, _| Guard::not(g)));

        let conjunction = unary
            .separated_by(just(Token::And))
            .at_least(1)
            .collect::<Vec<_>>()
            .map(|operands| flatten(operands, Guard::And));

        let disjunction = conjunction
            .separated_by(just(Token::Or))
            .at_least(1)
            .collect::<Vec<_>>()
            .map(|operands| flatten(operands, Guard::Or));

        let exclusive = disjunction
            .clone()
            .then(
                just(Token::Xor)
                    .ignore_then(disjunction)
                    .repeated()
                    .collect::<Vec<_>>(),
            )
            .map(|(first, rest)| {
                rest.into_iter()
                    .fold(first, |lhs, rhs| Guard::Xor(Box::new(lhs), Box::new(rhs)))
            });

        let implication = exclusive
            .clone()
            .then(
                just(Token::Implies)
                    .ignore_then(exclusive)
                    .repeated()
                    .collect::<Vec<_>>(),
            )
            .map(|(first, rest)| fold_implication(first, rest));

        implication
            .clone()
            .then(
                just(Token::Iff)
                    .ignore_then(implication)
                    .repeated()
                    .collect::<Vec<_>>(),
            )
            .map(|(first, rest)| {
                rest.into_iter()
                    .fold(first, |lhs, rhs| Guard::Iff(Box::new(lhs), Box::new(rhs)))
            })
    })
}

/// Collapse a single-operand list, otherwise wrap it with the n-ary connective
fn flatten(operands: Vec<Guard>, join: fn(Vec<Guard>) -> Guard) -> Guard {
    match <[Guard; 1]>::try_from(operands) {
        Ok([single]) => single,
        Err(operands) => join(operands),
    }
}

/// `a -> b -> c` associates to the right: `a -> (b -> c)`
fn fold_implication(first: Guard, mut rest: Vec<Guard>) -> Guard {
    let Some(last) = rest.pop() else {
        return first;
    };
    let consequent = rest
        .into_iter()
        .rev()
        .fold(last, |acc, premise| Guard::Implies(Box::new(premise), Box::new(acc)));
    Guard::Implies(Box::new(first), Box::new(consequent))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn var(name: &str) -> Guard {
        Guard::var(name)
    }

    #[test]
    fn test_parse_constant() {
        assert_eq!(parse("true").unwrap(), Guard::Const(true));
        assert_eq!(parse("false").unwrap(), Guard::Const(false));
    }

    #[test]
    fn test_parse_single_proposition() {
        assert_eq!(parse("g2").unwrap(), var("g2"));
    }

    #[test]
    fn test_parse_negated_conjunction() {
        assert_eq!(
            parse("!g1 & !g3").unwrap(),
            Guard::And(vec![Guard::not(var("g1")), Guard::not(var("g3"))])
        );
    }

    #[test]
    fn test_parse_disjunction() {
        assert_eq!(
            parse("g1 | g3 | g4").unwrap(),
            Guard::Or(vec![var("g1"), var("g3"), var("g4")])
        );
    }

    #[test]
    fn test_and_binds_tighter_than_or() {
        assert_eq!(
            parse("a | b & c").unwrap(),
            Guard::Or(vec![var("a"), Guard::And(vec![var("b"), var("c")])])
        );
    }

    #[test]
    fn test_parentheses_override_precedence() {
        assert_eq!(
            parse("(a | b) & c").unwrap(),
            Guard::And(vec![Guard::Or(vec![var("a"), var("b")]), var("c")])
        );
    }

    #[test]
    fn test_double_negation() {
        assert_eq!(parse("!!a").unwrap(), Guard::not(Guard::not(var("a"))));
    }

    #[test]
    fn test_implication_is_right_associative() {
        assert_eq!(
            parse("a -> b -> c").unwrap(),
            Guard::Implies(
                Box::new(var("a")),
                Box::new(Guard::Implies(Box::new(var("b")), Box::new(var("c"))))
            )
        );
    }

    #[test]
    fn test_xor_and_iff() {
        assert_eq!(
            parse("a ^ b <-> c").unwrap(),
            Guard::Iff(
                Box::new(Guard::Xor(Box::new(var("a")), Box::new(var("b")))),
                Box::new(var("c"))
            )
        );
    }

    #[test]
    fn test_empty_guard_is_error() {
        assert!(parse("").is_err());
        assert!(parse("   ").is_err());
    }

    #[test]
    fn test_dangling_operator_is_error() {
        let errors = parse("g1 &").unwrap_err();
        assert!(!errors.is_empty());
    }

    #[test]
    fn test_unbalanced_parenthesis_is_error() {
        assert!(parse("(g1 | g2").is_err());
        assert!(parse("g1)").is_err());
    }

    #[test]
    fn test_unknown_character_reports_span() {
        let errors = parse("g1 # g2").unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].span(), &(3..4));
    }
}
