//! Propositional guard formulas
//!
//! Transition guards are stored as plain strings in the instance. This module
//! parses them back so generated instances can be checked by [`crate::lint`].

pub mod ast;
mod grammar;
pub mod lexer;

pub use ast::Guard;
pub use grammar::parse;
