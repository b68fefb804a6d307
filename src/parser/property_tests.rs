//! Property-based tests for the lexer and parser.
//!
//! 1. **Lexer never panics** and always ends with EOF
//! 2. **Identifiers** scan to one token whose kind comes from the keyword table
//! 3. **Digit runs** scan to one INT token and parse back to the same value
//! 4. **Parser never panics** on arbitrary input
//! 5. **Canonical rendering re-parses** to an AST of the same shape

use proptest::prelude::*;

use super::ast::*;
use super::lexer::Lexer;
use super::parse::parse;
use super::token::{lookup_ident, TokenKind};

// ============================================================================
// Generators
// ============================================================================

fn identifier() -> impl Strategy<Value = String> {
    "[a-zA-Z_]{1,16}"
}

fn is_plain_identifier(name: &str) -> bool {
    lookup_ident(name) == TokenKind::Ident
}

fn binding_name() -> impl Strategy<Value = String> {
    identifier()
        .prop_filter("not a keyword", |s| is_plain_identifier(s))
}

fn operand() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z_]{1,6}"
            .prop_filter("not a keyword", |s| is_plain_identifier(s)),
        (0i64..1_000_000).prop_map(|n| n.to_string()),
    ]
}

/// Source text for a well-formed expression
fn expression() -> impl Strategy<Value = String> {
    operand().prop_recursive(4, 32, 2, |inner| {
        prop_oneof![
            (prop::sample::select(vec!["!", "-"]), inner.clone())
                .prop_map(|(op, e)| format!("{}{}", op, e)),
            (
                inner.clone(),
                prop::sample::select(vec!["+", "-", "*", "/", "==", "!=", "<", ">"]),
                inner.clone(),
            )
                .prop_map(|(l, op, r)| format!("{} {} {}", l, op, r)),
            inner.prop_map(|e| format!("({})", e)),
        ]
    })
}

fn statement() -> impl Strategy<Value = String> {
    prop_oneof![
        (binding_name(), expression())
            .prop_map(|(name, e)| format!("let {} = {};", name, e)),
        expression().prop_map(|e| format!("return {};", e)),
        expression().prop_map(|e| format!("{};", e)),
    ]
}

/// Variant tree with literal values, ignoring the tokens that carried them
fn shape(program: &Program) -> Vec<String> {
    fn expr(e: &Expression) -> String {
        match e {
            Expression::Identifier(ident) => format!("Ident({})", ident.value),
            Expression::IntegerLiteral { value, .. } => format!("Int({})", value),
            Expression::Prefix {
                operator, right, ..
            } => format!("Prefix({}, {})", operator, expr(right)),
            Expression::Infix {
                left,
                operator,
                right,
                ..
            } => format!("Infix({}, {}, {})", expr(left), operator, expr(right)),
        }
    }
    fn opt(e: &Option<Expression>) -> String {
        e.as_ref().map_or_else(|| "None".to_string(), expr)
    }

    program
        .statements
        .iter()
        .map(|s| match s {
            Statement::Let { name, value, .. } => format!("Let({}, {})", name.value, opt(value)),
            Statement::Return { value, .. } => format!("Return({})", opt(value)),
            Statement::Expression { expression, .. } => format!("Expr({})", opt(expression)),
        })
        .collect()
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    #[test]
    fn lexer_never_panics(input in "\\PC{0,300}") {
        let tokens = Lexer::new(&input).tokenize();
        prop_assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
        prop_assert_eq!(tokens.iter().filter(|t| t.kind == TokenKind::Eof).count(), 1);
    }

    #[test]
    fn identifier_is_one_token(ident in identifier()) {
        let tokens = Lexer::new(&ident).tokenize();
        prop_assert_eq!(tokens.len(), 2);
        prop_assert_eq!(&tokens[0].literal, &ident);
        prop_assert_eq!(tokens[0].kind, lookup_ident(&ident));
    }

    #[test]
    fn digit_run_round_trips(value in 0i64..=i64::MAX) {
        let text = value.to_string();
        let tokens = Lexer::new(&text).tokenize();
        prop_assert_eq!(tokens[0].kind, TokenKind::Int);
        prop_assert_eq!(&tokens[0].literal, &text);

        let (program, errors) = parse(&text);
        prop_assert!(errors.is_empty());
        prop_assert_eq!(shape(&program), vec![format!("Expr(Int({}))", value)]);
    }

    #[test]
    fn parser_never_panics(input in "\\PC{0,300}") {
        let (program, _errors) = parse(&input);
        let _ = program.to_string();
    }

    #[test]
    fn canonical_rendering_reparses(statements in prop::collection::vec(statement(), 1..5)) {
        let source = statements.join("\n");
        let (program, errors) = parse(&source);
        prop_assert!(errors.is_empty(), "errors {:?} for {:?}", errors, source);
        prop_assert_eq!(program.statements.len(), statements.len());

        let rendered = program.to_string();
        let (reparsed, errors) = parse(&rendered);
        prop_assert!(errors.is_empty(), "errors {:?} for {:?}", errors, rendered);
        prop_assert_eq!(shape(&reparsed), shape(&program));
        prop_assert_eq!(reparsed.to_string(), rendered);
    }
}
