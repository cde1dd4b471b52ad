//! Minimal parser over the token sequence
//!
//! The grammar-level parser is early: the language currently has exactly
//! two expression productions — a literal becomes a [`crate::ast::Value`]
//! and an identifier becomes a [`crate::ast::Variable`] — plus
//! semicolon-terminated expression statements. The token-stream helpers
//! (`advance`/`check`/`match`/`consume`) are the part expected to survive
//! as the grammar grows.

pub mod parser;

pub use parser::{ParseError, Parser, PrimaryExpr};
