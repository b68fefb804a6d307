//! Lexer (tokenizer) for Sprig source code
//!
//! Converts raw source text into [`Token`]s one at a time. The parser pulls
//! tokens on demand through [`Lexer::next_token`]; [`Lexer::tokenize`] collects
//! the whole stream for callers that want it up front.
//!
//! Scanning is byte-oriented and only ASCII is classified. Any other byte,
//! including each byte of a multi-byte UTF-8 sequence, comes out as a single
//! [`TokenKind::Illegal`] token.

use super::token::{lookup_ident, Token, TokenKind};

/// Sentinel byte meaning "no more input".
const EOF_BYTE: u8 = 0;

/// Single-pass scanner over one source string
pub struct Lexer {
    input: Vec<u8>,
    position: usize,      // index of `ch`
    read_position: usize, // index of the byte after `ch`
    ch: u8,
}

impl Lexer {
    /// Create a new lexer positioned on the first byte of `input`.
    pub fn new(input: &str) -> Self {
        let mut lexer = Self {
            input: input.as_bytes().to_vec(),
            position: 0,
            read_position: 0,
            ch: EOF_BYTE,
        };
        lexer.read_char();
        lexer
    }

    /// Tokenize the entire input, ending with exactly one EOF token
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token();
            let done = token.kind == TokenKind::Eof;
            tokens.push(token);
            if done {
                break;
            }
        }

        tokens
    }

    /// Get next token
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let token = match self.ch {
            b'=' => self.one_or_two(TokenKind::Assign, TokenKind::Eq),
            b'!' => self.one_or_two(TokenKind::Bang, TokenKind::NotEq),
            b'+' => self.single(TokenKind::Plus),
            b'-' => self.single(TokenKind::Minus),
            b'*' => self.single(TokenKind::Asterisk),
            b'/' => self.single(TokenKind::Slash),
            b'<' => self.single(TokenKind::Lt),
            b'>' => self.single(TokenKind::Gt),
            b',' => self.single(TokenKind::Comma),
            b';' => self.single(TokenKind::Semicolon),
            b'(' => self.single(TokenKind::LParen),
            b')' => self.single(TokenKind::RParen),
            b'{' => self.single(TokenKind::LBrace),
            b'}' => self.single(TokenKind::RBrace),
            EOF_BYTE => Token::eof(),

            // Identifiers and numbers leave the cursor on the byte after them
            ch if is_letter(ch) => {
                let ident = self.read_while(is_letter);
                return Token::new(lookup_ident(&ident), ident);
            }
            ch if ch.is_ascii_digit() => {
                let number = self.read_while(|b| b.is_ascii_digit());
                return Token::new(TokenKind::Int, number);
            }

            _ => self.single(TokenKind::Illegal),
        };

        self.read_char();
        token
    }

    /// Token made of the current byte alone
    fn single(&self, kind: TokenKind) -> Token {
        Token::new(kind, char::from(self.ch).to_string())
    }

    /// `=`/`!` followed by `=` become `==`/`!=`
    fn one_or_two(&mut self, one: TokenKind, two: TokenKind) -> Token {
        if self.peek_char() != b'=' {
            return self.single(one);
        }

        let first = char::from(self.ch);
        self.read_char();
        let mut literal = String::with_capacity(2);
        literal.push(first);
        literal.push(char::from(self.ch));
        Token::new(two, literal)
    }

    /// Consume bytes while `accept` holds and return them as text.
    fn read_while(&mut self, accept: impl Fn(u8) -> bool) -> String {
        let start = self.position;
        while accept(self.ch) {
            self.read_char();
        }
        // Only ASCII bytes are accepted, so the slice is always valid UTF-8
        let bytes = &self.input[start..self.position];
        String::from_utf8_lossy(bytes).into_owned()
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.ch, b' ' | b'\t' | b'\n' | b'\r') {
            self.read_char();
        }
    }

    /// Advance to next byte
    fn read_char(&mut self) {
        self.ch = self
            .input
            .get(self.read_position)
            .copied()
            .unwrap_or(EOF_BYTE);
        self.position = self.read_position.min(self.input.len());
        self.read_position = (self.read_position + 1).min(self.input.len() + 1);
    }

    /// Peek at the byte after the current one without consuming
    fn peek_char(&self) -> u8 {
        self.input
            .get(self.read_position)
            .copied()
            .unwrap_or(EOF_BYTE)
    }
}

fn is_letter(ch: u8) -> bool {
    ch.is_ascii_alphabetic() || ch == b'_'
}
