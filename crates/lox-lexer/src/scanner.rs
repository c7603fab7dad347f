//! The scanner that produces tokens from source text.

use crate::report::{ErrorReporter, LexError};
use crate::token::{Literal, Token, TokenKind, keyword};

/// A scanner that tokenizes Lox source code.
///
/// The scanner borrows the full source text, walks it once left to right
/// with a single character of lookahead, and accumulates the output token
/// sequence. Malformed input is reported through the injected
/// [`ErrorReporter`] and skipped; scanning always runs to completion.
pub struct Scanner<'src> {
    source: &'src str,
    tokens: Vec<Token<'src>>,
    /// Byte offset of the first character of the lexeme being scanned
    start: usize,
    /// Byte offset of the next unconsumed character
    current: usize,
    /// 1-based line of the next unconsumed character
    line: u32,
    /// Line the current lexeme began on; tokens are tagged with this
    start_line: u32,
    errors: u32,
}

impl<'src> Scanner<'src> {
    /// Creates a new scanner for the given source code.
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            tokens: Vec::new(),
            start: 0,
            current: 0,
            line: 1,
            start_line: 1,
            errors: 0,
        }
    }

    /// Scans the entire source, returning the token sequence.
    ///
    /// The returned sequence is always terminated by exactly one
    /// [`TokenKind::Eof`] token with an empty lexeme. Lexical errors go to
    /// `reporter` and never abort the scan, so one call can surface any
    /// number of independent errors. Consumes the scanner: each instance
    /// performs exactly one pass.
    pub fn scan_tokens(mut self, reporter: &mut dyn ErrorReporter) -> Vec<Token<'src>> {
        while !self.is_at_end() {
            // We are at the beginning of the next lexeme.
            self.start = self.current;
            self.start_line = self.line;
            self.scan_token(reporter);
        }

        self.tokens
            .push(Token::new(TokenKind::Eof, "", Literal::None, self.line));
        tracing::debug!(
            tokens = self.tokens.len(),
            lines = self.line,
            errors = self.errors,
            "scan complete"
        );
        self.tokens
    }

    fn scan_token(&mut self, reporter: &mut dyn ErrorReporter) {
        let Some(c) = self.advance() else {
            return;
        };

        match c {
            // Single-character tokens
            '(' => self.add_token(TokenKind::LeftParen),
            ')' => self.add_token(TokenKind::RightParen),
            '{' => self.add_token(TokenKind::LeftBrace),
            '}' => self.add_token(TokenKind::RightBrace),
            ',' => self.add_token(TokenKind::Comma),
            '.' => self.add_token(TokenKind::Dot),
            '-' => self.add_token(TokenKind::Minus),
            '+' => self.add_token(TokenKind::Plus),
            ';' => self.add_token(TokenKind::Semicolon),
            '*' => self.add_token(TokenKind::Star),

            // One/two-character operators: the longer match always wins
            '!' => {
                let kind = if self.match_next('=') {
                    TokenKind::BangEqual
                } else {
                    TokenKind::Bang
                };
                self.add_token(kind);
            }
            '=' => {
                let kind = if self.match_next('=') {
                    TokenKind::EqualEqual
                } else {
                    TokenKind::Equal
                };
                self.add_token(kind);
            }
            '<' => {
                let kind = if self.match_next('=') {
                    TokenKind::LessEqual
                } else {
                    TokenKind::Less
                };
                self.add_token(kind);
            }
            '>' => {
                let kind = if self.match_next('=') {
                    TokenKind::GreaterEqual
                } else {
                    TokenKind::Greater
                };
                self.add_token(kind);
            }

            // Division or line comment
            '/' => {
                if self.match_next('/') {
                    // The newline is left for the main loop so line
                    // counting stays in one place.
                    while self.peek().is_some_and(|c| c != '\n') {
                        self.advance();
                    }
                } else {
                    self.add_token(TokenKind::Slash);
                }
            }

            // Insignificant whitespace
            ' ' | '\r' | '\t' => {}

            // Sole place the line counter advances
            '\n' => self.line += 1,

            // Literals
            '"' => self.string(reporter),
            '0'..='9' => self.number(),

            c if is_alpha(c) => self.identifier(),

            _ => {
                self.errors += 1;
                tracing::trace!(line = self.line, character = %c, "unexpected character");
                reporter.report(self.line, LexError::UnexpectedCharacter);
            }
        }
    }

    fn identifier(&mut self) {
        while self.peek().is_some_and(is_alpha_numeric) {
            self.advance();
        }

        let kind = keyword(self.lexeme()).unwrap_or(TokenKind::Identifier);
        self.add_token(kind);
    }

    fn number(&mut self) {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }

        // Consume a fractional part only when the dot is followed by a
        // digit; `123.` stays NUMBER then DOT.
        if self.peek() == Some('.') && self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
            while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.advance();
            }
        }

        // A maximal digit run with at most one interior dot always parses
        let value = self.lexeme().parse::<f64>().unwrap_or_default();
        self.add_literal(TokenKind::Number, Literal::Number(value));
    }

    fn string(&mut self, reporter: &mut dyn ErrorReporter) {
        // Strings may span lines; backslash has no special meaning
        while let Some(c) = self.peek() {
            if c == '"' {
                break;
            }
            if c == '\n' {
                self.line += 1;
            }
            self.advance();
        }

        if self.is_at_end() {
            self.errors += 1;
            tracing::trace!(line = self.line, "unterminated string");
            reporter.report(self.line, LexError::UnterminatedString);
            return;
        }

        // The closing quote
        self.advance();

        // Trim the surrounding quotes
        let value = &self.source[self.start + 1..self.current - 1];
        self.add_literal(TokenKind::String, Literal::Str(value));
    }

    fn match_next(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.current += expected.len_utf8();
            true
        } else {
            false
        }
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.source[self.current..].chars().next()?;
        self.current += ch.len_utf8();
        Some(ch)
    }

    fn peek(&self) -> Option<char> {
        self.source[self.current..].chars().next()
    }

    fn peek_next(&self) -> Option<char> {
        self.source[self.current..].chars().nth(1)
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    fn lexeme(&self) -> &'src str {
        &self.source[self.start..self.current]
    }

    fn add_token(&mut self, kind: TokenKind) {
        self.add_literal(kind, Literal::None);
    }

    fn add_literal(&mut self, kind: TokenKind, literal: Literal<'src>) {
        self.tokens
            .push(Token::new(kind, self.lexeme(), literal, self.start_line));
    }
}

/// Scans `source` to completion, returning the full token sequence.
///
/// Convenience for `Scanner::new(source).scan_tokens(reporter)`.
pub fn scan<'src>(source: &'src str, reporter: &mut dyn ErrorReporter) -> Vec<Token<'src>> {
    Scanner::new(source).scan_tokens(reporter)
}

/// Checks if a character can start an identifier.
fn is_alpha(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Checks if a character can continue an identifier.
fn is_alpha_numeric(c: char) -> bool {
    is_alpha(c) || c.is_ascii_digit()
}
