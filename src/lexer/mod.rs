//! Lexical analysis for Flecha source code
//!
//! Converts raw source text into a flat [`Token`] stream consumed by the
//! parser:
//! - [`token`]: the token record and its closed classification
//! - [`tokenizer`]: the character-level state machine
//! - [`errors`]: the lexical failure taxonomy
//!
//! The tokenizer is fail-fast: the first malformed construct aborts the
//! whole pass with a [`LexError`], and no partial token sequence is
//! returned. A successful pass always ends with exactly one end-of-input
//! token.

pub mod errors;
pub mod token;
pub mod tokenizer;

pub use errors::LexError;
pub use token::{Token, TokenType};
pub use tokenizer::Tokenizer;
