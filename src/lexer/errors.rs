//! Lexical failure taxonomy
//!
//! Every failure is fatal: the tokenizer stops at the first one and no
//! partial token sequence is returned. The display strings carry line and
//! column for the caller; the taxonomy itself is the enum.

use thiserror::Error;

/// All ways a tokenization pass can fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// End of input reached before a closing `"`.
    #[error("unterminated string literal starting at line {line}, column {column}")]
    UnterminatedString { line: usize, column: usize },

    /// End of input inside a character literal, or no closing quote after
    /// its one character.
    #[error("unterminated character literal starting at line {line}, column {column}")]
    UnterminatedCharLiteral { line: usize, column: usize },

    /// `''` with nothing between the quotes.
    #[error("empty character literal at line {line}, column {column}")]
    EmptyCharLiteral { line: usize, column: usize },

    /// More than one raw character between the quotes.
    #[error("character literal holds more than one character at line {line}, column {column}")]
    InvalidMultiCharLiteral { line: usize, column: usize },

    /// An escape outside the supported set in a character literal.
    #[error("invalid escape sequence '\\{escape}' at line {line}, column {column}")]
    InvalidEscapeSequence {
        escape: char,
        line: usize,
        column: usize,
    },

    /// A character no lexical rule accepts, including a lone `&`.
    #[error("unexpected character '{character}' at line {line}, column {column}")]
    UnexpectedCharacter {
        character: char,
        line: usize,
        column: usize,
    },
}
