//! Literal scanning documentation.
//!
//! This module documents the literal scanning logic in `scanner.rs`.
//! The lexer handles numeric, string, and identifier literals.
//!
//! ## Numeric Literals
//!
//! ```text
//! 42      -> NUMBER(42.0)
//! 3.14    -> NUMBER(3.14)
//! 123.    -> NUMBER(123.0) DOT   (dot not followed by a digit)
//! .5      -> DOT NUMBER(5.0)     (no leading-dot form)
//! -7      -> MINUS NUMBER(7.0)   (sign is a separate operator)
//! ```
//!
//! Method: `number`
//!
//! A number is a maximal run of ASCII digits, then at most one `.` that is
//! immediately followed by another digit, then another maximal digit run.
//! Every number is stored as a double-precision value. There is no integer
//! type, no exponent form, and no hex/octal/binary base.
//!
//! ## String Literals
//!
//! Method: `string`
//!
//! ```text
//! "hello"   -> STRING, literal is the text between the quotes
//! "a
//! b"        -> strings may span lines; the counter advances per newline
//! "a\nb"    -> backslash is an ordinary character, no escape sequences
//! ```
//!
//! An unclosed string reports "Unterminated string." at the line reached by
//! the end of input and emits no token.
//!
//! ## Identifiers and Keywords
//!
//! Method: `identifier`
//!
//! ### Identifier Rules
//!
//! - Start: `A-Z`, `a-z`, `_`
//! - Continue: start chars + `0-9`
//!
//! ASCII only; Unicode identifiers are out of the language's alphabet.
//!
//! ### Keyword Detection
//!
//! The scanner looks the finished lexeme up in the static reserved-word
//! table (exact, case-sensitive match):
//!
//! ```text
//! "class"    -> TokenKind::Class
//! "classify" -> TokenKind::Identifier
//! "Class"    -> TokenKind::Identifier
//! ```

// This module serves as documentation. The actual implementation is in scanner.rs.
