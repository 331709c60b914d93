//! SQL parser front-end with rich diagnostics.
//!
//! This library provides the token-cursor layer of a SQL parser: checkpointed
//! navigation over a tokenized statement, statement-text recording, literal
//! and interval-qualifier readers, and error reporting built on miette.
//!
//! The tokenizer itself lives upstream; the parser consumes an already
//! tokenized statement together with its source text.
//!
//! # Example
//!
//! ```
//! use sqlfront::{IntervalField, Parser, Token, TokenKind};
//!
//! let source = "HOUR TO SECOND";
//! let tokens = vec![
//!     Token::core_reserved(TokenKind::Hour, "HOUR", 0..4),
//!     Token::core_reserved(TokenKind::To, "TO", 5..7),
//!     Token::core_reserved(TokenKind::Second, "SECOND", 8..14),
//! ];
//!
//! let mut parser = Parser::new(tokens, source)?;
//! let descriptor = parser.read_interval_type(true)?;
//!
//! assert_eq!(descriptor.start_field, IntervalField::Hour);
//! assert_eq!(descriptor.end_field, IntervalField::Second);
//! assert_eq!(descriptor.precision, Some(9));
//! # Ok::<(), sqlfront::ParseError>(())
//! ```

pub mod diag;
pub mod interval;
pub mod ops;
pub mod parser;
pub mod source;
pub mod token;

// Re-export the parser driver and its cursor types.
pub use parser::{DateTimeLiteral, Mark, Parser};

// Re-export token and diagnostic types for convenience.
pub use diag::{ErrorCode, ParseError, ParseResult};
pub use interval::{IntervalField, IntervalType};
pub use ops::{ExprOp, expression_op_type, try_expression_op_type};
pub use source::TokenSource;
pub use token::{MalformedKind, Span, Token, TokenKind, TokenValue, ValueType};
