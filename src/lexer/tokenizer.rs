//! Tokenizer for Flecha source code
//!
//! A character-level state machine over an in-memory string. Each token
//! start is classified in a fixed order — string literal, character
//! literal, operator/punctuation (with one character of lookahead), number,
//! identifier/keyword — and anything left over is a hard
//! [`LexError::UnexpectedCharacter`].
//!
//! Lines and columns are 1-based; a newline resets the column to 1. Every
//! emitted token records the position of its first character.

use super::errors::LexError;
use super::token::{Token, TokenType};

/// The tokenizer state machine.
///
/// Holds the full source, a cursor, and the line/column of the cursor.
/// A single [`Tokenizer::tokenize`] call consumes the whole input; there is
/// no incremental or resumable mode.
pub struct Tokenizer {
    input: Vec<char>,
    position: usize,
    line: usize,
    column: usize,
}

impl Tokenizer {
    /// Create a tokenizer over the given source text.
    pub fn new(input: &str) -> Self {
        Tokenizer {
            input: input.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Tokenize the entire input.
    ///
    /// Returns every token in source order followed by exactly one
    /// [`TokenType::Eof`] token, or the first lexical failure.
    pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        loop {
            self.skip_whitespace();

            if self.is_at_end() {
                tokens.push(Token::new(TokenType::Eof, "", self.line, self.column));
                return Ok(tokens);
            }

            tokens.push(self.next_token()?);
        }
    }

    /// Scan the token starting at the cursor.
    fn next_token(&mut self) -> Result<Token, LexError> {
        let line = self.line;
        let column = self.column;

        // skip_whitespace already guaranteed a character is present
        let Some(ch) = self.advance() else {
            return Err(LexError::UnexpectedCharacter {
                character: '\0',
                line,
                column,
            });
        };

        match ch {
            '"' => self.string_literal(line, column),
            '\'' => self.char_literal(line, column),

            '0'..='9' => Ok(self.number_literal(ch, line, column)),
            'a'..='z' | 'A'..='Z' | '_' => Ok(self.identifier_or_keyword(ch, line, column)),

            // Two-character operators, one character of lookahead each.
            '-' => {
                if self.peek() == Some('>') {
                    self.advance();
                    Ok(Token::new(TokenType::AssignVal, "->", line, column))
                } else {
                    Ok(Token::new(TokenType::Sub, "-", line, column))
                }
            }
            '*' => {
                if self.peek() == Some('*') {
                    self.advance();
                    Ok(Token::new(TokenType::Pow, "**", line, column))
                } else {
                    Ok(Token::new(TokenType::Mul, "*", line, column))
                }
            }
            '=' => {
                if self.peek() == Some('=') {
                    self.advance();
                    Ok(Token::new(TokenType::Compare, "==", line, column))
                } else {
                    Ok(Token::new(TokenType::Equal, "=", line, column))
                }
            }
            '<' => {
                if self.peek() == Some('=') {
                    self.advance();
                    Ok(Token::new(TokenType::LessEqual, "<=", line, column))
                } else {
                    Ok(Token::new(TokenType::Less, "<", line, column))
                }
            }
            '>' => {
                if self.peek() == Some('=') {
                    self.advance();
                    Ok(Token::new(TokenType::GreaterEqual, ">=", line, column))
                } else {
                    Ok(Token::new(TokenType::Greater, ">", line, column))
                }
            }
            '&' => {
                // A lone '&' has no single-character reading.
                if self.peek() == Some('&') {
                    self.advance();
                    Ok(Token::new(TokenType::And, "&&", line, column))
                } else {
                    Err(LexError::UnexpectedCharacter {
                        character: '&',
                        line,
                        column,
                    })
                }
            }
            '|' => {
                if self.peek() == Some('=') {
                    self.advance();
                    Ok(Token::new(TokenType::NotEqual, "|=", line, column))
                } else if self.peek() == Some('|') {
                    self.advance();
                    Ok(Token::new(TokenType::Or, "||", line, column))
                } else {
                    Ok(Token::new(TokenType::Not, "|", line, column))
                }
            }

            ';' => Ok(Token::new(TokenType::SemiColon, ";", line, column)),
            '(' => Ok(Token::new(TokenType::LParen, "(", line, column)),
            ')' => Ok(Token::new(TokenType::RParen, ")", line, column)),
            '[' => Ok(Token::new(TokenType::LBracket, "[", line, column)),
            ']' => Ok(Token::new(TokenType::RBracket, "]", line, column)),
            '{' => Ok(Token::new(TokenType::LCurly, "{", line, column)),
            '}' => Ok(Token::new(TokenType::RCurly, "}", line, column)),
            '!' => Ok(Token::new(TokenType::Bang, "!", line, column)),
            '?' => Ok(Token::new(TokenType::AddressRef, "?", line, column)),
            '+' => Ok(Token::new(TokenType::Add, "+", line, column)),
            '/' => Ok(Token::new(TokenType::Div, "/", line, column)),
            '^' => Ok(Token::new(TokenType::Xor, "^", line, column)),
            '%' => Ok(Token::new(TokenType::Mod, "%", line, column)),

            other => Err(LexError::UnexpectedCharacter {
                character: other,
                line,
                column,
            }),
        }
    }

    /// Scan a string literal; the opening quote is already consumed.
    ///
    /// Recognised escapes are `\n`, `\t`, `\\` and `\"`; any other escaped
    /// character passes through literally.
    fn string_literal(&mut self, line: usize, column: usize) -> Result<Token, LexError> {
        let mut value = String::new();

        loop {
            match self.peek() {
                None => return Err(LexError::UnterminatedString { line, column }),
                Some('"') => {
                    self.advance();
                    return Ok(Token::new(TokenType::StringLiteral, value, line, column));
                }
                Some('\\') => {
                    self.advance();
                    let escaped = self
                        .advance()
                        .ok_or(LexError::UnterminatedString { line, column })?;
                    value.push(match escaped {
                        'n' => '\n',
                        't' => '\t',
                        '\\' => '\\',
                        '"' => '"',
                        other => other,
                    });
                }
                Some(ch) => {
                    value.push(ch);
                    self.advance();
                }
            }
        }
    }

    /// Scan a character literal; the opening quote is already consumed.
    ///
    /// Exactly one logical character: a raw character or one escape from
    /// `\n`, `\t`, `\\`, `\'`.
    fn char_literal(&mut self, line: usize, column: usize) -> Result<Token, LexError> {
        let value = match self.peek() {
            None => return Err(LexError::UnterminatedCharLiteral { line, column }),
            Some('\'') => return Err(LexError::EmptyCharLiteral { line, column }),
            Some('\\') => {
                self.advance();
                let escaped = self
                    .advance()
                    .ok_or(LexError::UnterminatedCharLiteral { line, column })?;
                match escaped {
                    'n' => '\n',
                    't' => '\t',
                    '\\' => '\\',
                    '\'' => '\'',
                    other => {
                        return Err(LexError::InvalidEscapeSequence {
                            escape: other,
                            line,
                            column,
                        })
                    }
                }
            }
            Some(ch) => {
                self.advance();
                ch
            }
        };

        match self.peek() {
            Some('\'') => {
                self.advance();
                Ok(Token::new(
                    TokenType::CharLiteral,
                    value.to_string(),
                    line,
                    column,
                ))
            }
            None => Err(LexError::UnterminatedCharLiteral { line, column }),
            Some(_) => Err(LexError::InvalidMultiCharLiteral { line, column }),
        }
    }

    /// Scan a numeric literal; the first digit is already consumed.
    ///
    /// A maximal digit run with at most one decimal point; a second point
    /// ends the literal.
    fn number_literal(&mut self, first_digit: char, line: usize, column: usize) -> Token {
        let mut lexeme = String::new();
        lexeme.push(first_digit);
        let mut has_decimal_point = false;

        while let Some(ch) = self.peek() {
            if ch.is_ascii_digit() {
                lexeme.push(ch);
                self.advance();
            } else if ch == '.' && !has_decimal_point {
                has_decimal_point = true;
                lexeme.push('.');
                self.advance();
            } else {
                break;
            }
        }

        let token_type = if has_decimal_point {
            TokenType::FloatLiteral
        } else {
            TokenType::NumberLiteral
        };
        Token::new(token_type, lexeme, line, column)
    }

    /// Scan an identifier or keyword; the first character is already
    /// consumed.
    fn identifier_or_keyword(&mut self, first_char: char, line: usize, column: usize) -> Token {
        let mut word = String::new();
        word.push(first_char);

        while let Some(ch) = self.peek() {
            if ch.is_ascii_alphanumeric() || ch == '_' {
                word.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        match TokenType::keyword(&word) {
            Some(token_type) => Token::new(token_type, word, line, column),
            None => Token::new(TokenType::Identifier, word, line, column),
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek() {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    /// Peek at the current character without consuming it.
    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    /// Consume the current character, maintaining line/column bookkeeping.
    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += 1;

        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        Some(ch)
    }

    fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenize(source: &str) -> Vec<Token> {
        Tokenizer::new(source).tokenize().unwrap()
    }

    #[test]
    fn empty_input_yields_single_eof() {
        let tokens = tokenize("");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].token_type, TokenType::Eof);
        assert_eq!((tokens[0].line, tokens[0].column), (1, 1));
    }

    #[test]
    fn records_position_of_first_character() {
        let tokens = tokenize("int  my_var");
        assert_eq!((tokens[0].line, tokens[0].column), (1, 1));
        assert_eq!((tokens[1].line, tokens[1].column), (1, 6));
    }

    #[test]
    fn newline_resets_column() {
        let tokens = tokenize("int\n  char");
        assert_eq!((tokens[0].line, tokens[0].column), (1, 1));
        assert_eq!((tokens[1].line, tokens[1].column), (2, 3));
    }

    #[test]
    fn two_character_operators_never_split() {
        let tokens = tokenize("->**==<=>=&&|||=");
        let types: Vec<TokenType> = tokens.iter().map(|t| t.token_type).collect();
        assert_eq!(
            types,
            vec![
                TokenType::AssignVal,
                TokenType::Pow,
                TokenType::Compare,
                TokenType::LessEqual,
                TokenType::GreaterEqual,
                TokenType::And,
                TokenType::Or,
                TokenType::NotEqual,
                TokenType::Eof,
            ]
        );
    }

    #[test]
    fn single_character_fallbacks() {
        let tokens = tokenize("- * = < > |");
        let types: Vec<TokenType> = tokens.iter().map(|t| t.token_type).collect();
        assert_eq!(
            types,
            vec![
                TokenType::Sub,
                TokenType::Mul,
                TokenType::Equal,
                TokenType::Less,
                TokenType::Greater,
                TokenType::Not,
                TokenType::Eof,
            ]
        );
    }

    #[test]
    fn lone_ampersand_is_an_error() {
        let err = Tokenizer::new("a & b").tokenize().unwrap_err();
        assert_eq!(
            err,
            LexError::UnexpectedCharacter {
                character: '&',
                line: 1,
                column: 3,
            }
        );
    }

    #[test]
    fn unknown_character_is_an_error() {
        let err = Tokenizer::new("int @").tokenize().unwrap_err();
        assert_eq!(
            err,
            LexError::UnexpectedCharacter {
                character: '@',
                line: 1,
                column: 5,
            }
        );
    }

    #[test]
    fn second_decimal_point_ends_the_literal() {
        let err = Tokenizer::new("1.2.3").tokenize().unwrap_err();
        // "1.2" scans as a float, then the orphan '.' fails
        assert_eq!(
            err,
            LexError::UnexpectedCharacter {
                character: '.',
                line: 1,
                column: 4,
            }
        );
    }

    #[test]
    fn string_keeps_unknown_escapes_literally() {
        let tokens = tokenize(r#""a\qb""#);
        assert_eq!(tokens[0].token_type, TokenType::StringLiteral);
        assert_eq!(tokens[0].lexeme, "aqb");
    }

    #[test]
    fn identifier_lexemes_rescan_to_the_same_token() {
        let first = tokenize("my_var allot x9");
        for token in first.iter().filter(|t| t.token_type != TokenType::Eof) {
            let again = tokenize(&token.lexeme);
            assert_eq!(again[0].token_type, token.token_type);
            assert_eq!(again[0].lexeme, token.lexeme);
        }
    }
}
