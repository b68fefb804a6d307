// AST (Abstract Syntax Tree) definitions for the Sprig front end
//
// Every node keeps the token that introduced it. That token is only used for
// diagnostics and canonical rendering, never to drive parsing decisions.

use std::fmt;

use super::token::Token;

/// Behaviour shared by every AST node.
///
/// `Display` is the canonical rendering: spacing is normalized and every
/// prefix or infix expression is wrapped in parentheses, so the output is
/// stable for test assertions but not byte-identical to the source.
pub trait Node: fmt::Display {
    /// Literal text of the token that introduced this node
    fn token_literal(&self) -> &str;
}

/// Root of every parse; owns its statements in source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Program {
    pub fn new() -> Self {
        Program::default()
    }
}

impl Node for Program {
    fn token_literal(&self) -> &str {
        self.statements
            .first()
            .map_or("", |statement| statement.token_literal())
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, statement) in self.statements.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", statement)?;
        }
        Ok(())
    }
}

/// Statements
///
/// A child that failed to parse is `None`; the parser has already recorded a
/// diagnostic for it.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `let <name> = <value>;`
    Let {
        token: Token,
        name: Identifier,
        value: Option<Expression>,
    },
    /// `return <value>;`
    Return {
        token: Token,
        value: Option<Expression>,
    },
    /// A bare expression, semicolon optional
    Expression {
        token: Token,
        expression: Option<Expression>,
    },
}

impl Node for Statement {
    fn token_literal(&self) -> &str {
        match self {
            Statement::Let { token, .. }
            | Statement::Return { token, .. }
            | Statement::Expression { token, .. } => &token.literal,
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Let { token, name, value } => {
                write!(f, "{} {} = ", token.literal, name)?;
                if let Some(value) = value {
                    write!(f, "{}", value)?;
                }
                write!(f, ";")
            }
            Statement::Return { token, value } => {
                write!(f, "{} ", token.literal)?;
                if let Some(value) = value {
                    write!(f, "{}", value)?;
                }
                write!(f, ";")
            }
            Statement::Expression { expression, .. } => match expression {
                Some(expression) => write!(f, "{}", expression),
                None => Ok(()),
            },
        }
    }
}

/// A name, either bound by `let` or referenced in an expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    pub token: Token,
    pub value: String,
}

impl Identifier {
    pub fn new(token: Token) -> Self {
        let value = token.literal.clone();
        Self { token, value }
    }
}

impl Node for Identifier {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// Expressions
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Identifier(Identifier),
    IntegerLiteral {
        token: Token,
        value: i64,
    },
    /// `!x`, `-x`
    Prefix {
        token: Token,
        operator: String,
        right: Box<Expression>,
    },
    /// `left <op> right`
    Infix {
        token: Token,
        left: Box<Expression>,
        operator: String,
        right: Box<Expression>,
    },
}

impl Node for Expression {
    fn token_literal(&self) -> &str {
        match self {
            Expression::Identifier(ident) => ident.token_literal(),
            Expression::IntegerLiteral { token, .. }
            | Expression::Prefix { token, .. }
            | Expression::Infix { token, .. } => &token.literal,
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Identifier(ident) => write!(f, "{}", ident),
            Expression::IntegerLiteral { token, .. } => f.write_str(&token.literal),
            Expression::Prefix {
                operator, right, ..
            } => write!(f, "({}{})", operator, right),
            Expression::Infix {
                left,
                operator,
                right,
                ..
            } => write!(f, "({} {} {})", left, operator, right),
        }
    }
}
