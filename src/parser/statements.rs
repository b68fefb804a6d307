//! Statement parsing implementation
//!
//! # Grammar
//!
//! ```text
//! statement ::= let_stmt | return_stmt | expr_stmt
//! let_stmt  ::= "let" IDENT "=" expression [";"]
//! return_stmt ::= "return" expression [";"]
//! expr_stmt ::= expression [";"]
//! ```
//!
//! Each method starts with the cursor on the statement's first token and
//! leaves it on the statement's last token; [`Parser::parse_program`] steps
//! past it.

use crate::parser::ast::*;
use crate::parser::expressions::Precedence;
use crate::parser::parse::Parser;
use crate::parser::token::TokenKind;

impl Parser {
    /// Parse a statement
    pub(crate) fn parse_statement(&mut self) -> Option<Statement> {
        match self.cur_token.kind {
            TokenKind::Let => self.parse_let_statement(),
            TokenKind::Return => Some(self.parse_return_statement()),
            _ => Some(self.parse_expression_statement()),
        }
    }

    /// Parse `let <ident> = <expr>`; abandoned if the name or `=` is missing
    fn parse_let_statement(&mut self) -> Option<Statement> {
        let token = self.cur_token.clone();

        if !self.expect_peek(TokenKind::Ident) {
            return None;
        }
        let name = Identifier::new(self.cur_token.clone());

        if !self.expect_peek(TokenKind::Assign) {
            return None;
        }
        self.next_token();

        let value = self.parse_expression(Precedence::Lowest);
        self.skip_optional_semicolon();

        Some(Statement::Let { token, name, value })
    }

    fn parse_return_statement(&mut self) -> Statement {
        let token = self.cur_token.clone();
        self.next_token();

        let value = self.parse_expression(Precedence::Lowest);
        self.skip_optional_semicolon();

        Statement::Return { token, value }
    }

    fn parse_expression_statement(&mut self) -> Statement {
        let token = self.cur_token.clone();

        let expression = self.parse_expression(Precedence::Lowest);
        self.skip_optional_semicolon();

        Statement::Expression { token, expression }
    }

    fn skip_optional_semicolon(&mut self) {
        if self.peek_token_is(TokenKind::Semicolon) {
            self.next_token();
        }
    }
}
