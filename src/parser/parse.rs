//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct and core parsing infrastructure,
//! including the diagnostic type, token cursor helpers, the parse-function
//! registries, and the main parse entry point.
//!
//! # Parser Architecture
//!
//! The Parser is a recursive descent parser with Pratt-style expression parsing:
//! - This module: Parser struct, cursor helpers, and coordination
//! - `statements`: `let`, `return`, and expression statements
//! - `expressions`: prefix/infix parse functions and the precedence table
//!
//! # Error model
//!
//! Nothing here aborts a parse. Every problem becomes a [`ParseError`] pushed
//! onto an ordered list, the offending statement or expression is dropped, and
//! parsing carries on with the next statement. Callers must check
//! [`Parser::errors`] before trusting the returned [`Program`].

use rustc_hash::FxHashMap;
use thiserror::Error;
use tracing::{debug, trace};

use crate::parser::ast::*;
use crate::parser::lexer::Lexer;
use crate::parser::token::{Token, TokenKind};

/// A non-fatal diagnostic recorded while parsing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The lookahead token is not the one a grammar rule requires.
    #[error("expected next token to be {expected}, got {found}")]
    UnexpectedToken {
        expected: TokenKind,
        found: TokenKind,
    },

    /// The current token cannot start an expression.
    #[error("no prefix parse function for {0} found")]
    NoPrefixParseFn(TokenKind),

    /// An integer literal does not fit a 64-bit signed integer.
    #[error("could not parse {literal:?} as integer")]
    InvalidInteger { literal: String },

    /// Expressions nest deeper than [`MAX_NESTING_DEPTH`].
    #[error("expression nested too deeply")]
    TooDeep,
}

/// Deepest expression nesting the parser follows before giving up.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Parses the token at the cursor as the start of an expression.
pub(crate) type PrefixParseFn = fn(&mut Parser) -> Option<Expression>;

/// Extends an already parsed left operand; the cursor sits on the operator.
pub(crate) type InfixParseFn = fn(&mut Parser, Expression) -> Option<Expression>;

/// Recursive descent parser pulling tokens lazily from a [`Lexer`]
pub struct Parser {
    lexer: Lexer,
    pub(crate) cur_token: Token,
    pub(crate) peek_token: Token,
    errors: Vec<ParseError>,
    pub(crate) depth: usize,
    prefix_parse_fns: FxHashMap<TokenKind, PrefixParseFn>,
    infix_parse_fns: FxHashMap<TokenKind, InfixParseFn>,
}

impl Parser {
    pub fn new(source: &str) -> Self {
        Self::from_lexer(Lexer::new(source))
    }

    pub fn from_lexer(lexer: Lexer) -> Self {
        let mut parser = Self {
            lexer,
            cur_token: Token::eof(),
            peek_token: Token::eof(),
            errors: Vec::new(),
            depth: 0,
            prefix_parse_fns: FxHashMap::default(),
            infix_parse_fns: FxHashMap::default(),
        };
        parser.register_parse_fns();

        // Fill both the current and the lookahead slot
        parser.next_token();
        parser.next_token();

        parser
    }

    /// Parse the entire program
    ///
    /// Always returns a program. Statements that failed to parse are left out
    /// and reported through [`Parser::errors`].
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::new();

        while !self.cur_token_is(TokenKind::Eof) {
            if let Some(statement) = self.parse_statement() {
                program.statements.push(statement);
            }
            self.next_token();
        }

        trace!(
            statements = program.statements.len(),
            errors = self.errors.len(),
            "parsed program"
        );
        program
    }

    /// Diagnostics recorded so far, in the order they were found
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    pub fn into_errors(self) -> Vec<ParseError> {
        self.errors
    }

    // ===== Parse-function registries =====

    pub(crate) fn register_prefix(&mut self, kind: TokenKind, parse_fn: PrefixParseFn) {
        self.prefix_parse_fns.insert(kind, parse_fn);
    }

    pub(crate) fn register_infix(&mut self, kind: TokenKind, parse_fn: InfixParseFn) {
        self.infix_parse_fns.insert(kind, parse_fn);
    }

    pub(crate) fn prefix_parse_fn(&self, kind: TokenKind) -> Option<PrefixParseFn> {
        self.prefix_parse_fns.get(&kind).copied()
    }

    pub(crate) fn infix_parse_fn(&self, kind: TokenKind) -> Option<InfixParseFn> {
        self.infix_parse_fns.get(&kind).copied()
    }

    // ===== Helper methods =====

    pub(crate) fn next_token(&mut self) {
        let next = self.lexer.next_token();
        self.cur_token = std::mem::replace(&mut self.peek_token, next);
    }

    pub(crate) fn cur_token_is(&self, kind: TokenKind) -> bool {
        self.cur_token.kind == kind
    }

    pub(crate) fn peek_token_is(&self, kind: TokenKind) -> bool {
        self.peek_token.kind == kind
    }

    /// Advance only if the lookahead has the expected kind; otherwise record
    /// an error and leave the cursor where it is.
    pub(crate) fn expect_peek(&mut self, kind: TokenKind) -> bool {
        if self.peek_token_is(kind) {
            self.next_token();
            true
        } else {
            self.peek_error(kind);
            false
        }
    }

    fn peek_error(&mut self, expected: TokenKind) {
        self.record(ParseError::UnexpectedToken {
            expected,
            found: self.peek_token.kind,
        });
    }

    pub(crate) fn record(&mut self, error: ParseError) {
        debug!(%error, "parse error");
        self.errors.push(error);
    }
}

/// Parse `source` in one go, returning the program and its diagnostics.
pub fn parse(source: &str) -> (Program, Vec<ParseError>) {
    let mut parser = Parser::new(source);
    let program = parser.parse_program();
    (program, parser.into_errors())
}
