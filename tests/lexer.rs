use intcalc::{
    ast::BinaryOperation,
    error::LexError,
    interpreter::{
        lexer::{Lexer, Token, TokenKind, TokenSource},
        rollback::RollbackLexer,
    },
    settings::{Settings, SettingsBuilder},
};

fn lexer() -> Lexer {
    Lexer::new(Settings::default().lexer_settings().clone())
}

fn lex(text: &str) -> Lexer {
    let mut lexer = lexer();
    lexer.reset(text);
    lexer
}

fn till_end(text: &str) -> Vec<Token> {
    let mut lexer = lex(text);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token()
                         .unwrap_or_else(|e| panic!("failed to lex {text:?}: {e}"));
        if token.is_end() {
            return tokens;
        }
        tokens.push(token);
    }
}

fn check_single(text: &str, kind: TokenKind, repr: &str) {
    let mut lexer = lex(text);
    assert_eq!(lexer.next_token().unwrap(), Token::new(kind, repr), "lexing {text:?}");
    assert!(lexer.next_token().unwrap().is_end(), "lexing {text:?}");
}

#[test]
fn empty_and_blank_input() {
    assert!(lex("").next_token().unwrap().is_end());
    assert!(lex("   ").next_token().unwrap().is_end());
    assert_eq!(lex("").next_token().unwrap().text(), "");
}

#[test]
fn numbers() {
    for decimal in ["0", "1", "2", "7", "9", "42353265", "123456789012345678901234567890"] {
        check_single(decimal, TokenKind::Number, decimal);
    }
}

#[test]
fn identifiers() {
    for name in ["a", "q", "bc", "def123", "Xy9"] {
        check_single(name, TokenKind::Identifier, name);
    }
}

#[test]
fn operations() {
    for op in ["+", "-", "/", "*", "**"] {
        check_single(op, TokenKind::Operation, op);
    }
}

#[test]
fn punctuation_has_empty_text() {
    check_single("(", TokenKind::LeftParen, "");
    check_single(")", TokenKind::RightParen, "");
    check_single("=", TokenKind::Assign, "");
}

#[test]
fn let_is_a_keyword_only_as_a_whole_word() {
    check_single("let", TokenKind::KeywordLet, "let");
    check_single("letter", TokenKind::Identifier, "letter");
    check_single("let2", TokenKind::Identifier, "let2");
}

#[test]
fn simple_expression() {
    assert_eq!(till_end("5+2"),
               vec![Token::new(TokenKind::Number, "5"),
                    Token::new(TokenKind::Operation, "+"),
                    Token::new(TokenKind::Number, "2")]);
}

#[test]
fn expression_with_parens_and_variable() {
    let tokens = till_end("(5 + x)*12");
    let kinds: Vec<TokenKind> = tokens.iter().map(Token::kind).collect();
    assert_eq!(kinds,
               vec![TokenKind::LeftParen,
                    TokenKind::Number,
                    TokenKind::Operation,
                    TokenKind::Identifier,
                    TokenKind::RightParen,
                    TokenKind::Operation,
                    TokenKind::Number]);
    assert_eq!(tokens[3].text(), "x");
    assert_eq!(tokens[6].text(), "12");
}

#[test]
fn declaration() {
    let kinds: Vec<TokenKind> = till_end("let x = 5").iter().map(Token::kind).collect();
    assert_eq!(kinds,
               vec![TokenKind::KeywordLet,
                    TokenKind::Identifier,
                    TokenKind::Assign,
                    TokenKind::Number]);
}

#[test]
fn operator_runs_are_munched_maximally() {
    assert_eq!(till_end("2**3")[1].text(), "**");
    assert_eq!(till_end("2* *3")[1].text(), "*");

    let mut lexer = lex("2 *** 3");
    lexer.next_token().unwrap();
    assert_eq!(lexer.next_token(),
               Err(LexError::IllegalOperation { repr: "***".to_string() }));

    let mut lexer = lex("--2");
    assert_eq!(lexer.next_token(),
               Err(LexError::IllegalOperation { repr: "--".to_string() }));
}

#[test]
fn reading_past_the_end_is_an_error() {
    let mut lexer = lex("1");
    lexer.next_token().unwrap();
    assert!(lexer.next_token().unwrap().is_end());
    assert!(matches!(lexer.next_token(), Err(LexError::TrailingInput { .. })));

    lexer.reset("2");
    assert_eq!(lexer.next_token().unwrap().text(), "2");
}

#[test]
fn number_merged_with_identifier() {
    assert_eq!(lex("12ab").next_token(),
               Err(LexError::NumberMergedWithIdentifier { text: "12a".to_string() }));
    assert!(lex("12 ab").next_token().is_ok());
}

#[test]
fn unexpected_characters_report_the_rest_of_the_line() {
    let mut lexer = lex("2 # 3");
    lexer.next_token().unwrap();
    assert_eq!(lexer.next_token(),
               Err(LexError::UnexpectedCharacter { rest: "# 3".to_string() }));

    assert!(matches!(lex("\t1").next_token(), Err(LexError::UnexpectedCharacter { .. })));
    assert!(matches!(lex("é").next_token(), Err(LexError::UnexpectedCharacter { .. })));
}

#[test]
fn last_token_tracks_reads() {
    let mut lexer = lex("a b");
    assert_eq!(lexer.last_token(), Err(LexError::NoTokenYet));

    lexer.next_token().unwrap();
    assert_eq!(lexer.last_token().unwrap().text(), "a");

    lexer.reset("c");
    assert_eq!(lexer.last_token(), Err(LexError::NoTokenYet));
}

#[test]
fn configured_symbols_drive_the_operator_alphabet() {
    let settings = SettingsBuilder::new().left_assoc([BinaryOperation::Plus])
                                         .right_assoc([BinaryOperation::Power])
                                         .binary_repr(BinaryOperation::Plus, "+")
                                         .binary_repr(BinaryOperation::Power, "^")
                                         .build()
                                         .unwrap();
    let mut lexer = Lexer::new(settings.lexer_settings().clone());

    lexer.reset("2^3");
    lexer.next_token().unwrap();
    assert_eq!(lexer.next_token().unwrap(), Token::new(TokenKind::Operation, "^"));

    lexer.reset("2*3");
    lexer.next_token().unwrap();
    assert!(matches!(lexer.next_token(), Err(LexError::UnexpectedCharacter { .. })));
}

#[test]
fn push_back_rereads_the_last_token() {
    let mut tokens = RollbackLexer::new(lexer());
    tokens.reset("1 + 2");

    let one = tokens.next_token().unwrap();
    tokens.push_back().unwrap();
    assert!(tokens.has_pending());
    assert_eq!(tokens.next_token().unwrap(), one);

    tokens.push_back().unwrap();
    assert_eq!(tokens.next_token().unwrap(), one);
    assert_eq!(tokens.next_token().unwrap().text(), "+");
}

#[test]
fn push_back_of_end_does_not_hit_trailing_input() {
    let mut tokens = RollbackLexer::new(lexer());
    tokens.reset("");

    assert!(tokens.next_token().unwrap().is_end());
    tokens.push_back().unwrap();
    assert!(tokens.next_token().unwrap().is_end());
    assert!(matches!(tokens.next_token(), Err(LexError::TrailingInput { .. })));
}

#[test]
fn push_back_misuse_is_reported() {
    let mut tokens = RollbackLexer::new(lexer());
    tokens.reset("1 2");
    assert_eq!(tokens.push_back(), Err(LexError::RollbackMisuse));

    tokens.next_token().unwrap();
    tokens.push_back().unwrap();
    assert_eq!(tokens.push_back(), Err(LexError::RollbackMisuse));

    tokens.reset("3");
    assert!(!tokens.has_pending());
    assert_eq!(tokens.next_token().unwrap().text(), "3");
}
