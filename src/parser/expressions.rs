//! Expression parsing implementation
//!
//! Expressions are parsed Pratt-style: each token kind that can start an
//! expression has a prefix parse function, each binary operator has an infix
//! parse function, and a precedence table decides how far the infix loop in
//! [`Parser::parse_expression`] keeps folding operands into the left side.
//!
//! # Supported Expressions
//!
//! - Identifiers and integer literals (decimal, `0x`, `0o`, `0b`, leading-zero octal)
//! - Prefix operators: `!`, `-`
//! - Infix operators: `+ - * / == != < >`, all left-associative
//! - Grouping with `( ... )`
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::ast::*;
use crate::parser::parse::{ParseError, Parser, MAX_NESTING_DEPTH};
use crate::parser::token::TokenKind;

/// Binding strength of operators, lowest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    Lowest,
    Equals,      // == !=
    LessGreater, // < >
    Sum,         // + -
    Product,     // * /
    Prefix,      // -x !x
    Call,        // f(x)
}

impl Precedence {
    /// Precedence of `kind` in infix position; anything unlisted is `Lowest`.
    pub fn of(kind: TokenKind) -> Self {
        match kind {
            TokenKind::Eq | TokenKind::NotEq => Precedence::Equals,
            TokenKind::Lt | TokenKind::Gt => Precedence::LessGreater,
            TokenKind::Plus | TokenKind::Minus => Precedence::Sum,
            TokenKind::Asterisk | TokenKind::Slash => Precedence::Product,
            _ => Precedence::Lowest,
        }
    }
}

impl Parser {
    /// Fill the prefix and infix registries
    pub(crate) fn register_parse_fns(&mut self) {
        self.register_prefix(TokenKind::Ident, Parser::parse_identifier);
        self.register_prefix(TokenKind::Int, Parser::parse_integer_literal);
        self.register_prefix(TokenKind::Bang, Parser::parse_prefix_expression);
        self.register_prefix(TokenKind::Minus, Parser::parse_prefix_expression);
        self.register_prefix(TokenKind::LParen, Parser::parse_grouped_expression);

        for kind in [
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Asterisk,
            TokenKind::Slash,
            TokenKind::Eq,
            TokenKind::NotEq,
            TokenKind::Lt,
            TokenKind::Gt,
        ] {
            self.register_infix(kind, Parser::parse_infix_expression);
        }
    }

    /// Parse an expression whose operators all bind tighter than `precedence`
    ///
    /// Records [`ParseError::TooDeep`] instead of recursing past
    /// [`MAX_NESTING_DEPTH`] nested expressions.
    pub(crate) fn parse_expression(&mut self, precedence: Precedence) -> Option<Expression> {
        if self.depth >= MAX_NESTING_DEPTH {
            self.record(ParseError::TooDeep);
            return None;
        }

        self.depth += 1;
        let expression = self.parse_expression_at(precedence);
        self.depth -= 1;
        expression
    }

    fn parse_expression_at(&mut self, precedence: Precedence) -> Option<Expression> {
        let Some(prefix) = self.prefix_parse_fn(self.cur_token.kind) else {
            self.record(ParseError::NoPrefixParseFn(self.cur_token.kind));
            return None;
        };
        let mut left = prefix(self)?;

        // Each fold nests `left` one level deeper
        let mut folds = 0;
        while !self.peek_token_is(TokenKind::Semicolon) && precedence < self.peek_precedence() {
            let Some(infix) = self.infix_parse_fn(self.peek_token.kind) else {
                return Some(left);
            };
            if self.depth + folds >= MAX_NESTING_DEPTH {
                self.record(ParseError::TooDeep);
                return None;
            }
            self.next_token();
            folds += 1;
            left = infix(self, left)?;
        }

        Some(left)
    }

    fn peek_precedence(&self) -> Precedence {
        Precedence::of(self.peek_token.kind)
    }

    fn cur_precedence(&self) -> Precedence {
        Precedence::of(self.cur_token.kind)
    }

    fn parse_identifier(&mut self) -> Option<Expression> {
        let ident = Identifier::new(self.cur_token.clone());
        Some(Expression::Identifier(ident))
    }

    fn parse_integer_literal(&mut self) -> Option<Expression> {
        let token = self.cur_token.clone();

        match parse_int_literal(&token.literal) {
            Some(value) => Some(Expression::IntegerLiteral { token, value }),
            None => {
                self.record(ParseError::InvalidInteger {
                    literal: token.literal,
                });
                None
            }
        }
    }

    /// Parse `!x` / `-x`; the operand binds tighter than any binary operator
    fn parse_prefix_expression(&mut self) -> Option<Expression> {
        let token = self.cur_token.clone();
        let operator = token.literal.clone();

        self.next_token();
        let right = self.parse_expression(Precedence::Prefix)?;

        Some(Expression::Prefix {
            token,
            operator,
            right: Box::new(right),
        })
    }

    fn parse_infix_expression(&mut self, left: Expression) -> Option<Expression> {
        let token = self.cur_token.clone();
        let operator = token.literal.clone();
        let precedence = self.cur_precedence();

        self.next_token();
        let right = self.parse_expression(precedence)?;

        Some(Expression::Infix {
            token,
            left: Box::new(left),
            operator,
            right: Box::new(right),
        })
    }

    /// Parse `( expr )`; the group itself leaves no node behind
    fn parse_grouped_expression(&mut self) -> Option<Expression> {
        self.next_token();
        let expression = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }
        Some(expression)
    }
}

/// Convert integer literal text to `i64`, detecting the base from its prefix.
///
/// `0x`/`0X` is hex, `0o`/`0O` and a bare leading `0` are octal, `0b`/`0B` is
/// binary, and everything else is decimal.
fn parse_int_literal(text: &str) -> Option<i64> {
    let (digits, radix) = match text.get(..2) {
        Some("0x" | "0X") => (&text[2..], 16),
        Some("0o" | "0O") => (&text[2..], 8),
        Some("0b" | "0B") => (&text[2..], 2),
        _ if text.len() > 1 && text.starts_with('0') => (&text[1..], 8),
        _ => (text, 10),
    };

    // from_str_radix accepts a leading sign, literals never carry one
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return None;
    }
    i64::from_str_radix(digits, radix).ok()
}
