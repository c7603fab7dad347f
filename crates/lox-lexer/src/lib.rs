// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # lox-lexer
//!
//! Lexical analysis (tokenization) for Lox source code.
//!
//! The scanner transforms Lox source text into a flat sequence of tokens
//! that can be consumed by the parser. It makes a single forward pass with
//! one character of lookahead, recovers from malformed input without
//! halting, and tracks 1-based line numbers for diagnostics.
//!
//! ## Structure
//!
//! - `scanner.rs` - Main `Scanner` struct that produces tokens
//! - `token.rs` - `Token`, `TokenKind`, and `Literal` definitions
//! - `report.rs` - `LexError` and the `ErrorReporter` seam
//!
//! ## Documentation Submodules
//!
//! - `operators` - One/two-character operator scanning
//! - `literals` - Number, string, and identifier literals
//!
//! ## Usage
//!
//! ```rust
//! use lox_lexer::{scan, CollectingReporter, TokenKind};
//!
//! let mut reporter = CollectingReporter::default();
//! let tokens = scan("var answer = 42;", &mut reporter);
//!
//! assert!(reporter.errors().is_empty());
//! assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod report;
mod scanner;
mod token;

// Documentation and test submodules
pub mod literals;
pub mod operators;

pub use report::{CollectingReporter, ConsoleReporter, Diagnostic, ErrorReporter, LexError};
pub use scanner::{Scanner, scan};
pub use token::{Literal, Token, TokenKind, keyword};
