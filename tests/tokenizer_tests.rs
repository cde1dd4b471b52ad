// Tokenizer scenarios over the public API.

use pretty_assertions::assert_eq;

use flecha::lexer::{LexError, Token, TokenType, Tokenizer};

fn tokenize(source: &str) -> Vec<Token> {
    Tokenizer::new(source)
        .tokenize()
        .expect("tokenization failed")
}

fn tokenize_err(source: &str) -> LexError {
    Tokenizer::new(source)
        .tokenize()
        .expect_err("tokenization unexpectedly succeeded")
}

fn types_of(tokens: &[Token]) -> Vec<TokenType> {
    tokens.iter().map(|t| t.token_type).collect()
}

#[test]
fn recognizes_keywords() {
    let tokens = tokenize("int char bool");
    assert_eq!(tokens.len(), 4); // 3 keywords + EOF

    assert_eq!(tokens[0].token_type, TokenType::Int);
    assert_eq!(tokens[0].lexeme, "int");
    assert_eq!(tokens[1].token_type, TokenType::Char);
    assert_eq!(tokens[1].lexeme, "char");
    assert_eq!(tokens[2].token_type, TokenType::Bool);
    assert_eq!(tokens[2].lexeme, "bool");
    assert_eq!(tokens[3].token_type, TokenType::Eof);
}

#[test]
fn recognizes_the_whole_keyword_table() {
    let source = "int char bool float string void strict method class construct destruct return allot dellot";
    let tokens = tokenize(source);

    assert_eq!(
        types_of(&tokens),
        vec![
            TokenType::Int,
            TokenType::Char,
            TokenType::Bool,
            TokenType::Float,
            TokenType::String,
            TokenType::Void,
            TokenType::Strict,
            TokenType::Method,
            TokenType::Class,
            TokenType::Construct,
            TokenType::Destruct,
            TokenType::Return,
            TokenType::Allot,
            TokenType::Dellot,
            TokenType::Eof,
        ]
    );
}

#[test]
fn keywords_are_case_sensitive() {
    let tokens = tokenize("Int CHAR allot");
    assert_eq!(
        types_of(&tokens),
        vec![
            TokenType::Identifier,
            TokenType::Identifier,
            TokenType::Allot,
            TokenType::Eof,
        ]
    );
}

#[test]
fn recognizes_multi_character_operators() {
    let tokens = tokenize("-> ** == <=");
    assert_eq!(tokens.len(), 5); // 4 operators + EOF

    assert_eq!(tokens[0].token_type, TokenType::AssignVal);
    assert_eq!(tokens[0].lexeme, "->");
    assert_eq!(tokens[1].token_type, TokenType::Pow);
    assert_eq!(tokens[1].lexeme, "**");
    assert_eq!(tokens[2].token_type, TokenType::Compare);
    assert_eq!(tokens[2].lexeme, "==");
    assert_eq!(tokens[3].token_type, TokenType::LessEqual);
    assert_eq!(tokens[3].lexeme, "<=");
    assert_eq!(tokens[4].token_type, TokenType::Eof);
}

#[test]
fn recognizes_identifiers() {
    let tokens = tokenize("variable1 _v_ar2");
    assert_eq!(tokens.len(), 3); // 2 identifiers + EOF

    assert_eq!(tokens[0].token_type, TokenType::Identifier);
    assert_eq!(tokens[0].lexeme, "variable1");
    assert_eq!(tokens[1].token_type, TokenType::Identifier);
    assert_eq!(tokens[1].lexeme, "_v_ar2");
    assert_eq!(tokens[2].token_type, TokenType::Eof);
}

#[test]
fn recognizes_numbers() {
    let tokens = tokenize("123 0 3.14");
    assert_eq!(tokens.len(), 4); // 3 numbers + EOF

    assert_eq!(tokens[0].token_type, TokenType::NumberLiteral);
    assert_eq!(tokens[0].lexeme, "123");
    assert_eq!(tokens[1].token_type, TokenType::NumberLiteral);
    assert_eq!(tokens[1].lexeme, "0");
    assert_eq!(tokens[2].token_type, TokenType::FloatLiteral);
    assert_eq!(tokens[2].lexeme, "3.14");
    assert_eq!(tokens[3].token_type, TokenType::Eof);
}

#[test]
fn recognizes_special_characters() {
    let tokens = tokenize("! ? ( ) [ ] { }");
    assert_eq!(tokens.len(), 9); // 8 characters + EOF

    assert_eq!(
        types_of(&tokens),
        vec![
            TokenType::Bang,
            TokenType::AddressRef,
            TokenType::LParen,
            TokenType::RParen,
            TokenType::LBracket,
            TokenType::RBracket,
            TokenType::LCurly,
            TokenType::RCurly,
            TokenType::Eof,
        ]
    );
    assert_eq!(tokens[1].lexeme, "?");
}

#[test]
fn recognizes_complex_statements() {
    let tokens = tokenize("int! my_var = allot(int)->42;");
    assert_eq!(tokens.len(), 12); // 11 tokens + EOF

    let expected = [
        (TokenType::Int, "int"),
        (TokenType::Bang, "!"),
        (TokenType::Identifier, "my_var"),
        (TokenType::Equal, "="),
        (TokenType::Allot, "allot"),
        (TokenType::LParen, "("),
        (TokenType::Int, "int"),
        (TokenType::RParen, ")"),
        (TokenType::AssignVal, "->"),
        (TokenType::NumberLiteral, "42"),
        (TokenType::SemiColon, ";"),
        (TokenType::Eof, ""),
    ];
    for (token, (token_type, lexeme)) in tokens.iter().zip(expected) {
        assert_eq!(token.token_type, token_type);
        assert_eq!(token.lexeme, lexeme);
    }
}

#[test]
fn recognizes_string_literals() {
    let tokens = tokenize("\"Hello, World!\" \"This is a test.\" \"Escape \\\"quote\\\"\"");
    assert_eq!(tokens.len(), 4); // 3 string literals + EOF

    assert_eq!(tokens[0].token_type, TokenType::StringLiteral);
    assert_eq!(tokens[0].lexeme, "Hello, World!");
    assert_eq!(tokens[1].token_type, TokenType::StringLiteral);
    assert_eq!(tokens[1].lexeme, "This is a test.");
    assert_eq!(tokens[2].token_type, TokenType::StringLiteral);
    assert_eq!(tokens[2].lexeme, "Escape \"quote\"");
    assert_eq!(tokens[3].token_type, TokenType::Eof);
}

#[test]
fn recognizes_empty_string_literal() {
    let tokens = tokenize("\"\"");
    assert_eq!(tokens.len(), 2); // 1 empty string + EOF

    assert_eq!(tokens[0].token_type, TokenType::StringLiteral);
    assert_eq!(tokens[0].lexeme, "");
    assert_eq!(tokens[1].token_type, TokenType::Eof);
}

#[test]
fn string_with_newline_escape() {
    let tokens = tokenize("\"Line1\\nLine2\"");
    assert_eq!(tokens.len(), 2);

    assert_eq!(tokens[0].token_type, TokenType::StringLiteral);
    assert_eq!(tokens[0].lexeme, "Line1\nLine2");
}

#[test]
fn string_with_escaped_characters() {
    let tokens = tokenize("\"This is a \\\"test\\\" with \\n and \\t.\"");
    assert_eq!(tokens.len(), 2);

    assert_eq!(tokens[0].token_type, TokenType::StringLiteral);
    assert_eq!(tokens[0].lexeme, "This is a \"test\" with \n and \t.");
}

#[test]
fn unterminated_string_literal() {
    assert_eq!(
        tokenize_err("\"This string is not terminated"),
        LexError::UnterminatedString { line: 1, column: 1 }
    );
}

#[test]
fn recognizes_character_literals() {
    let tokens = tokenize("'a' '\\n' '\\''");
    assert_eq!(tokens.len(), 4); // 3 char literals + EOF

    assert_eq!(tokens[0].token_type, TokenType::CharLiteral);
    assert_eq!(tokens[0].lexeme, "a");
    assert_eq!(tokens[1].token_type, TokenType::CharLiteral);
    assert_eq!(tokens[1].lexeme, "\n");
    assert_eq!(tokens[2].token_type, TokenType::CharLiteral);
    assert_eq!(tokens[2].lexeme, "'");
    assert_eq!(tokens[3].token_type, TokenType::Eof);
}

#[test]
fn unterminated_character_literal() {
    assert_eq!(
        tokenize_err("'a"),
        LexError::UnterminatedCharLiteral { line: 1, column: 1 }
    );
}

#[test]
fn empty_character_literal() {
    assert_eq!(
        tokenize_err("''"),
        LexError::EmptyCharLiteral { line: 1, column: 1 }
    );
}

#[test]
fn invalid_multi_character_literal() {
    assert_eq!(
        tokenize_err("'ab'"),
        LexError::InvalidMultiCharLiteral { line: 1, column: 1 }
    );
}

#[test]
fn character_with_invalid_escape_sequence() {
    assert_eq!(
        tokenize_err("'\\x'"),
        LexError::InvalidEscapeSequence {
            escape: 'x',
            line: 1,
            column: 1,
        }
    );
}

#[test]
fn every_result_ends_with_exactly_one_eof() {
    let sources = [
        "",
        "   \n\t  ",
        "int",
        "int! my_var = allot(int)->42;",
        "\"text\" 'c' 1.5",
    ];

    for source in sources {
        let tokens = tokenize(source);
        let eof_count = tokens
            .iter()
            .filter(|t| t.token_type == TokenType::Eof)
            .count();
        assert_eq!(eof_count, 1, "source: {:?}", source);
        assert_eq!(tokens.last().unwrap().token_type, TokenType::Eof);
    }
}

#[test]
fn positions_restart_after_newlines() {
    let tokens = tokenize("int! x = allot(int);\ndellot(x);");

    let dellot = tokens
        .iter()
        .find(|t| t.token_type == TokenType::Dellot)
        .unwrap();
    assert_eq!((dellot.line, dellot.column), (2, 1));

    let lparen_after = tokens
        .iter()
        .filter(|t| t.token_type == TokenType::LParen)
        .nth(1)
        .unwrap();
    assert_eq!((lparen_after.line, lparen_after.column), (2, 7));
}

#[test]
fn logical_operators_and_lone_ampersand() {
    let tokens = tokenize("a && b || c |= d | e");
    assert_eq!(
        types_of(&tokens),
        vec![
            TokenType::Identifier,
            TokenType::And,
            TokenType::Identifier,
            TokenType::Or,
            TokenType::Identifier,
            TokenType::NotEqual,
            TokenType::Identifier,
            TokenType::Not,
            TokenType::Identifier,
            TokenType::Eof,
        ]
    );

    assert_eq!(
        tokenize_err("a & b"),
        LexError::UnexpectedCharacter {
            character: '&',
            line: 1,
            column: 3,
        }
    );
}

#[test]
fn rescanning_a_lexeme_reproduces_the_token() {
    let tokens = tokenize("int char allot my_var _v2 x9");

    for token in tokens.iter().filter(|t| t.token_type != TokenType::Eof) {
        let rescanned = tokenize(&token.lexeme);
        assert_eq!(rescanned[0].token_type, token.token_type);
        assert_eq!(rescanned[0].lexeme, token.lexeme);
    }
}
