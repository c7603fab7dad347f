//! Error reporting for the Lox lexer.
//!
//! The scanner never fails outright: malformed input is surfaced through an
//! injected [`ErrorReporter`] and scanning continues from the next character.
//! Decoupling the sink from the scanner keeps diagnostics policy out of the
//! lexer and lets tests capture reports in memory.

use thiserror::Error;

/// A lexical error recovered during scanning.
///
/// The `Display` text of each variant is the canonical diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LexError {
    /// A character matched no scanning rule.
    #[error("Unexpected character.")]
    UnexpectedCharacter,
    /// Input ended inside an open string literal.
    #[error("Unterminated string.")]
    UnterminatedString,
}

/// Sink for lexical errors, invoked zero or more times per scan.
///
/// Reports never interrupt scanning; the scanner resumes from the next
/// unconsumed character after each one.
pub trait ErrorReporter {
    /// Called with the 1-based line of the error and the error itself.
    fn report(&mut self, line: u32, error: LexError);
}

/// A single captured report: the `(line, message)` pair handed to the sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// 1-based source line the error was reported at
    pub line: u32,
    /// The recovered error
    pub error: LexError,
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[line {}] Error: {}", self.line, self.error)
    }
}

/// Reporter that accumulates every diagnostic in memory.
///
/// Callers inspect the captured list after the scan to decide whether the
/// token sequence is usable downstream.
#[derive(Debug, Default)]
pub struct CollectingReporter {
    errors: Vec<Diagnostic>,
}

impl CollectingReporter {
    /// Creates an empty reporter.
    pub fn new() -> Self {
        Self::default()
    }

    /// The diagnostics captured so far, in report order.
    pub fn errors(&self) -> &[Diagnostic] {
        &self.errors
    }

    /// Consumes the reporter, yielding the captured diagnostics.
    pub fn into_errors(self) -> Vec<Diagnostic> {
        self.errors
    }
}

impl ErrorReporter for CollectingReporter {
    fn report(&mut self, line: u32, error: LexError) {
        self.errors.push(Diagnostic { line, error });
    }
}

/// Reporter that prints each diagnostic to stderr as `[line N] Error: ...`.
#[derive(Debug, Default)]
pub struct ConsoleReporter {
    had_error: bool,
}

impl ConsoleReporter {
    /// Creates a reporter that has seen no errors.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true once any error has been reported.
    pub fn had_error(&self) -> bool {
        self.had_error
    }
}

impl ErrorReporter for ConsoleReporter {
    fn report(&mut self, line: u32, error: LexError) {
        self.had_error = true;
        eprintln!("{}", Diagnostic { line, error });
    }
}
