//! Property-based tests for the cursor and the token stream
//!
//! These tests use proptest to generate random inputs and verify that:
//! 1. Emitted tokens are exact byte slices of the input
//! 2. Cursor offsets stay ordered and on character boundaries
//! 3. Tokens arrive in the order the grammar emitted them

use proptest::prelude::*;
use statelex::{Capacity, Cursor, Lexer, LexerConfig, StateFn, Token, TokenType, Transition};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Class {
    Error,
    Alnum,
    Space,
    Other,
}

impl TokenType for Class {
    const ERROR: Self = Class::Error;
}

fn class_of(c: char) -> Class {
    if c.is_alphanumeric() {
        Class::Alnum
    } else if c.is_whitespace() {
        Class::Space
    } else {
        Class::Other
    }
}

/// Splits the input into maximal runs of one character class
fn lex_runs(lexer: &mut Lexer<Class>) -> Transition<Class> {
    let Some(first) = lexer.next() else {
        return None;
    };
    let class = class_of(first);
    lexer.accept_run(move |c: char| class_of(c) == class);
    lexer.emit(class);
    Some(StateFn::new(lex_runs))
}

fn runs(input: &str, capacity: usize) -> Vec<Token<Class>> {
    let config = LexerConfig {
        capacity: Capacity::Fixed(capacity),
    };
    Lexer::with_config("runs", input, StateFn::new(lex_runs), config)
        .start()
        .unwrap()
        .collect_tokens()
        .unwrap()
}

// =============================================================================
// STRATEGY GENERATORS
// =============================================================================

#[derive(Debug, Clone)]
enum Op {
    Next,
    Peek,
    Backup,
    Ignore,
    Accept(&'static str),
    AcceptRun(&'static str),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::Next),
        Just(Op::Peek),
        Just(Op::Backup),
        Just(Op::Ignore),
        Just(Op::Accept("abc")),
        Just(Op::Accept("é日")),
        Just(Op::AcceptRun("0123456789")),
        Just(Op::AcceptRun(" abcé")),
    ]
}

fn mixed_text() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-c0-9 é日+]{0,40}").unwrap()
}

// =============================================================================
// PROPERTIES
// =============================================================================

proptest! {
    #[test]
    fn prop_spans_match_input(input in any::<String>(), capacity in 1usize..8) {
        let tokens = runs(&input, capacity);

        let mut expected_at = 0;
        for token in &tokens {
            prop_assert_eq!(token.at, expected_at);
            prop_assert_eq!(&input[token.at..token.end()], token.value.as_str());
            prop_assert!(!token.value.is_empty());
            expected_at = token.end();
        }
        prop_assert_eq!(expected_at, input.len());
    }

    #[test]
    fn prop_adjacent_runs_differ(input in mixed_text()) {
        let tokens = runs(&input, 4);
        for pair in tokens.windows(2) {
            prop_assert_ne!(pair[0].kind, pair[1].kind);
        }
    }

    #[test]
    fn prop_cursor_offsets_stay_ordered(
        input in mixed_text(),
        ops in prop::collection::vec(op(), 0..60),
    ) {
        let mut cursor = Cursor::new(input.as_str());
        for op in ops {
            match op {
                Op::Next => {
                    cursor.next();
                }
                Op::Peek => {
                    let before = cursor.pos();
                    cursor.peek();
                    prop_assert_eq!(cursor.pos(), before);
                }
                // Backing up twice in a row is a contract violation
                Op::Backup => {
                    if cursor.can_backup() {
                        cursor.backup();
                    }
                }
                Op::Ignore => cursor.ignore(),
                Op::Accept(set) => {
                    cursor.accept(set);
                }
                Op::AcceptRun(set) => {
                    cursor.accept_run(set);
                }
            }

            prop_assert!(cursor.start() <= cursor.pos());
            prop_assert!(cursor.pos() <= input.len());
            prop_assert!(input.is_char_boundary(cursor.pos()));
            prop_assert_eq!(cursor.pending(), &input[cursor.start()..cursor.pos()]);
        }
    }

    #[test]
    fn prop_numbers_arrive_in_order(numbers in prop::collection::vec(0u32..100_000, 0..40)) {
        let input = numbers
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join("+");

        let values: Vec<String> = runs(&input, 1).into_iter().map(|t| t.value).collect();

        let mut expected = Vec::new();
        for (i, n) in numbers.iter().enumerate() {
            if i > 0 {
                expected.push("+".to_string());
            }
            expected.push(n.to_string());
        }
        prop_assert_eq!(values, expected);
    }
}
