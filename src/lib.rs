//! # Introduction
//!
//! Flecha is a small, explicitly memory-aware programming language: manual
//! allocation is spelled `allot`/`dellot`, pointer declaration is a `!`
//! suffix on the type, `?` takes an address, and `->` assigns a value into
//! previously allocated storage.
//!
//! This crate is the language's front end: the tokenizer, the AST node
//! model, and the visitor protocol downstream passes build on.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Tokenizer → Tokens → Parser → AST → Visitor passes
//! ```
//!
//! 1. [`lexer`] — tokenises source text into a flat [`lexer::Token`]
//!    sequence, always terminated by a single end-of-input token.
//! 2. [`parser`] — the first token consumer; carries the two expression
//!    productions the language currently has.
//! 3. [`ast`] — the closed node hierarchy plus the [`ast::Visitor`]
//!    double-dispatch contract for printers, checkers, and future passes.
//! 4. [`memory`] — the runtime side of an `allot` request: a
//!    capacity-limited allocator fulfilling the size descriptors the AST
//!    carries.
//!
//! ## Example
//!
//! ```
//! use flecha::lexer::{TokenType, Tokenizer};
//!
//! let tokens = Tokenizer::new("int! my_var = allot(int)->42;")
//!     .tokenize()
//!     .unwrap();
//! assert_eq!(tokens.len(), 12);
//! assert_eq!(tokens.last().unwrap().token_type, TokenType::Eof);
//! ```

pub mod ast;
pub mod lexer;
pub mod memory;
pub mod parser;
