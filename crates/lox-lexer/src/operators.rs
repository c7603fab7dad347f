//! Operator scanning documentation.
//!
//! This module documents the operator scanning logic in `scanner.rs`.
//! The lexer handles two-character operators with one character of
//! lookahead; there is no longer form and no backtracking.
//!
//! ## Operator Categories
//!
//! ### Single-character punctuation
//!
//! `( ) { } , . - + ; *` each map directly to their own kind with no
//! lookahead.
//!
//! ### `=`-lookahead operators
//!
//! | Token | Variants |
//! |-------|----------|
//! | `!` | `!`, `!=` |
//! | `=` | `=`, `==` |
//! | `<` | `<`, `<=` |
//! | `>` | `>`, `>=` |
//!
//! ## Lookahead Logic
//!
//! Each of the four probes the next character for `=` and greedily takes
//! the two-character form when it is there:
//!
//! ```text
//! // For input "<="
//! scan_token():
//!   consume '<'
//!   match_next('=') succeeds -> consume it
//!   emit LessEqual
//! ```
//!
//! The longer match always wins, so `<=` is never `<` followed by `=`.
//!
//! ## Comment Handling
//!
//! The `/` character can start:
//! - Division: `a / b`
//! - Single-line comment: `// comment` (runs to end of line, no token)
//!
//! There is no block-comment form. The comment's trailing newline is left
//! unconsumed so the main loop performs the line increment.

// This module serves as documentation. The actual implementation is in scanner.rs.
