use criterion::{black_box, criterion_group, criterion_main, Criterion};
use statelex::{Capacity, Lexer, LexerConfig, StateFn, TokenType, Transition};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Kind {
    Error,
    Ident,
    Number,
    Punct,
}

impl TokenType for Kind {
    const ERROR: Self = Kind::Error;
}

fn lex_token(lexer: &mut Lexer<Kind>) -> Transition<Kind> {
    if lexer.accept_run(char::is_whitespace) > 0 {
        lexer.ignore();
    }
    match lexer.next() {
        None => return None,
        Some(c) if c.is_alphabetic() => {
            lexer.accept_run(|c: char| c.is_alphanumeric() || c == '_');
            lexer.emit(Kind::Ident);
        }
        Some(c) if c.is_ascii_digit() => {
            lexer.accept_run('0'..='9');
            lexer.emit(Kind::Number);
        }
        Some(_) => lexer.emit(Kind::Punct),
    }
    Some(StateFn::new(lex_token))
}

fn lexer_benchmark(c: &mut Criterion) {
    let source = "let total = price * 42 + tax_rate / 7; ".repeat(200);

    c.bench_function("tokenize proportional queue", |b| {
        b.iter(|| {
            Lexer::new("bench", black_box(source.as_str()), StateFn::new(lex_token))
                .start()
                .unwrap()
                .count()
        })
    });

    c.bench_function("tokenize single slot queue", |b| {
        b.iter(|| {
            let config = LexerConfig {
                capacity: Capacity::Fixed(1),
            };
            Lexer::with_config(
                "bench",
                black_box(source.as_str()),
                StateFn::new(lex_token),
                config,
            )
            .start()
            .unwrap()
            .count()
        })
    });
}

criterion_group!(benches, lexer_benchmark);
criterion_main!(benches);
