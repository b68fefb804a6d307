//! Sprig source code parser
//!
//! This module transforms Sprig source text into an Abstract Syntax Tree (AST):
//! - [`token`]: Token kinds and the keyword table
//! - [`lexer`]: Tokenization (source text → tokens, one at a time)
//! - [`parse`]: The [`parse::Parser`] struct, its helpers and diagnostics
//! - [`ast`]: AST node definitions and canonical rendering
//!
//! # Language
//!
//! - Statements: `let <name> = <expr>;`, `return <expr>;`, bare expressions
//! - Expressions: identifiers, integers, prefix `!`/`-`, infix `+ - * / == != < >`,
//!   parenthesized groups
//! - `fn`, `true`, `false`, `if` and `else` are reserved but not parsed yet
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent parser with Pratt-style operator precedence,
//! dispatching on token kind through prefix and infix parse-function tables.

pub mod ast;
mod expressions;
pub mod lexer;
pub mod parse;
mod statements;
pub mod token;

#[cfg(test)]
mod property_tests;

pub use expressions::Precedence;
pub use parse::{parse, ParseError, Parser};
