//! Token record and classification
//!
//! A [`Token`] is an immutable `{type, lexeme, line, column}` record.
//! `line`/`column` mark the first character of the lexeme, both 1-based.
//! For string and character literals the lexeme holds the decoded contents:
//! quotes stripped and escape sequences resolved.

use rustc_hash::FxHashMap;
use std::fmt;
use std::sync::LazyLock;

/// All token categories the tokenizer can classify.
///
/// The set is closed: the tokenizer either resolves a lexeme to one of
/// these or fails with a [`crate::lexer::LexError`]. There is no
/// "unclassified" placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenType {
    // Primitive type keywords
    Int,
    Char,
    Bool,
    Float,
    String,
    Void,

    // Class and method keywords
    Strict,
    Method,
    Class,
    Construct,
    Destruct,
    Return,

    // Memory keywords
    Allot,
    Dellot,

    // Operators
    Equal,        // =
    Add,          // +
    Sub,          // -
    Mul,          // *
    Div,          // /
    Pow,          // **
    Xor,          // ^
    Mod,          // %
    Bang,         // !
    Compare,      // ==
    NotEqual,     // |=
    And,          // &&
    Or,           // ||
    Not,          // |
    Less,         // <
    LessEqual,    // <=
    Greater,      // >
    GreaterEqual, // >=

    // Punctuation
    LParen,   // (
    RParen,   // )
    LBracket, // [
    RBracket, // ]
    LCurly,   // {
    RCurly,   // }

    // Pointer operators. `DeclPtr` and `Deref` are the parser's contextual
    // readings of `Bang` and `Mul`; the tokenizer never emits them itself.
    DeclPtr,    // type! suffix
    Deref,      // *ptr
    AddressRef, // ?
    AssignVal,  // ->

    // Identifiers and literals
    Identifier,
    NumberLiteral,
    FloatLiteral,
    StringLiteral,
    CharLiteral,

    // Statement terminator
    SemiColon, // ;

    // End of input
    Eof,
}

/// Fixed, case-sensitive keyword table.
static KEYWORDS: LazyLock<FxHashMap<&'static str, TokenType>> = LazyLock::new(|| {
    FxHashMap::from_iter([
        ("int", TokenType::Int),
        ("char", TokenType::Char),
        ("bool", TokenType::Bool),
        ("float", TokenType::Float),
        ("string", TokenType::String),
        ("void", TokenType::Void),
        ("strict", TokenType::Strict),
        ("method", TokenType::Method),
        ("class", TokenType::Class),
        ("construct", TokenType::Construct),
        ("destruct", TokenType::Destruct),
        ("return", TokenType::Return),
        ("allot", TokenType::Allot),
        ("dellot", TokenType::Dellot),
    ])
});

impl TokenType {
    /// Looks up a word in the keyword table.
    pub fn keyword(word: &str) -> Option<TokenType> {
        KEYWORDS.get(word).copied()
    }
}

/// A classified lexeme with the source position of its first character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub token_type: TokenType,
    pub lexeme: String,
    pub line: usize,
    pub column: usize,
}

impl Token {
    pub fn new(token_type: TokenType, lexeme: impl Into<String>, line: usize, column: usize) -> Self {
        Token {
            token_type,
            lexeme: lexeme.into(),
            line,
            column,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.token_type {
            TokenType::Identifier => write!(f, "identifier '{}'", self.lexeme),
            TokenType::NumberLiteral => write!(f, "number literal {}", self.lexeme),
            TokenType::FloatLiteral => write!(f, "float literal {}", self.lexeme),
            TokenType::StringLiteral => write!(f, "string literal \"{}\"", self.lexeme),
            TokenType::CharLiteral => write!(f, "char literal '{}'", self.lexeme),
            TokenType::Eof => write!(f, "end of input"),
            _ => write!(f, "'{}'", self.lexeme),
        }
    }
}
