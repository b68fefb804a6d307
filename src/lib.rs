//! # Introduction
//!
//! Sprig is the front end of a small expression-oriented language. It scans
//! source text into tokens and parses those tokens into an AST, collecting
//! diagnostics instead of stopping at the first mistake.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Lexer → Parser → AST (+ diagnostics)
//! ```
//!
//! 1. [`parser`] — the token model, the lexer, the AST and the Pratt parser.
//! 2. [`repl`] — a line-oriented loop that dumps tokens or parsed programs;
//!    used by the `sprig` binary.
//!
//! ## Example
//!
//! ```
//! use sprig::parser::Parser;
//!
//! let mut parser = Parser::new("let x = 1 + 2 * 3;");
//! let program = parser.parse_program();
//!
//! assert!(parser.errors().is_empty());
//! assert_eq!(program.to_string(), "let x = (1 + (2 * 3));");
//! ```
//!
//! There is no evaluator: the pipeline stops at a validated AST.

pub mod parser;
pub mod repl;
