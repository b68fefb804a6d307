//! Line-oriented interactive loop
//!
//! Reads one line at a time, runs it through a fresh lexer (or parser), and
//! writes the result back out. Nothing is carried over between lines.

use std::fmt;
use std::io::{self, BufRead, Write};

use crossterm::style::{style, Stylize};
use tracing::debug;

use crate::parser::lexer::Lexer;
use crate::parser::parse::Parser;
use crate::parser::token::{Token, TokenKind};

pub const PROMPT: &str = ">> ";

/// What the loop prints for each line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// One `{Type:.. Literal:..}` line per token
    #[default]
    Tokens,
    /// The canonical rendering of the parsed program, or its diagnostics
    Ast,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Tokens => f.write_str("tokens"),
            Mode::Ast => f.write_str("ast"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ReplConfig {
    pub prompt: String,
    pub mode: Mode,
    /// Emit ANSI colours; only sensible when writing to a terminal
    pub color: bool,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: PROMPT.to_string(),
            mode: Mode::default(),
            color: false,
        }
    }
}

/// Run the loop until `input` is exhausted.
pub fn start<R: BufRead, W: Write>(
    input: R,
    output: &mut W,
    config: &ReplConfig,
) -> io::Result<()> {
    debug!(mode = %config.mode, "starting repl");
    let mut lines = input.lines();

    loop {
        write_prompt(output, config)?;
        output.flush()?;

        let Some(line) = lines.next() else {
            return Ok(());
        };
        let line = line?;

        match config.mode {
            Mode::Tokens => dump_tokens(&line, output, config)?,
            Mode::Ast => dump_program(&line, output, config)?,
        }
    }
}

fn write_prompt<W: Write>(output: &mut W, config: &ReplConfig) -> io::Result<()> {
    if config.color {
        write!(output, "{}", style(&config.prompt).dark_green().bold())
    } else {
        write!(output, "{}", config.prompt)
    }
}

/// Print every token of `line` up to, but not including, end of input.
pub fn dump_tokens<W: Write>(line: &str, output: &mut W, config: &ReplConfig) -> io::Result<()> {
    let mut lexer = Lexer::new(line);

    loop {
        let token = lexer.next_token();
        if token.kind == TokenKind::Eof {
            return Ok(());
        }
        write_token(&token, output, config)?;
    }
}

fn write_token<W: Write>(token: &Token, output: &mut W, config: &ReplConfig) -> io::Result<()> {
    if !config.color {
        return writeln!(output, "{}", token);
    }

    match token.kind {
        TokenKind::Illegal => writeln!(output, "{}", style(token).red()),
        kind if kind.is_keyword() => writeln!(output, "{}", style(token).blue()),
        TokenKind::Int => writeln!(output, "{}", style(token).yellow()),
        _ => writeln!(output, "{}", token),
    }
}

/// Parse `line` and print the canonical program, or the diagnostics if any.
pub fn dump_program<W: Write>(line: &str, output: &mut W, config: &ReplConfig) -> io::Result<()> {
    let mut parser = Parser::new(line);
    let program = parser.parse_program();

    if parser.errors().is_empty() {
        return writeln!(output, "{}", program);
    }

    writeln!(output, "parser errors:")?;
    for error in parser.errors() {
        let message = format!("\t{}", error);
        if config.color {
            writeln!(output, "{}", style(message).red())?;
        } else {
            writeln!(output, "{}", message)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(input: &str, config: &ReplConfig) -> String {
        let mut output = Vec::new();
        start(input.as_bytes(), &mut output, config).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_token_dump() {
        let output = run("let x = 5;\n", &ReplConfig::default());

        assert_eq!(
            output,
            ">> {Type:LET Literal:let}\n\
             {Type:IDENT Literal:x}\n\
             {Type:= Literal:=}\n\
             {Type:INT Literal:5}\n\
             {Type:; Literal:;}\n\
             >> "
        );
    }

    #[test]
    fn test_prompt_per_line() {
        let config = ReplConfig {
            prompt: "> ".to_string(),
            ..ReplConfig::default()
        };
        let output = run("a\n\nb\n", &config);

        assert_eq!(
            output,
            "> {Type:IDENT Literal:a}\n> > {Type:IDENT Literal:b}\n> "
        );
    }

    #[test]
    fn test_empty_input_only_prompts() {
        assert_eq!(run("", &ReplConfig::default()), ">> ");
    }

    #[test]
    fn test_ast_mode() {
        let config = ReplConfig {
            mode: Mode::Ast,
            ..ReplConfig::default()
        };
        let output = run("let x = -a * b;\nlet y 1;\n", &config);

        assert_eq!(
            output,
            ">> let x = ((-a) * b);\n\
             >> parser errors:\n\
             \texpected next token to be =, got INT\n\
             >> "
        );
    }

    #[test]
    fn test_colored_output_keeps_text() {
        let config = ReplConfig {
            color: true,
            ..ReplConfig::default()
        };
        let output = run("let\n", &config);

        assert!(output.contains("{Type:LET Literal:let}"));
        assert!(output.contains('\u{1b}'));
    }
}
