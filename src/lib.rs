//! # Statelex - a state-function lexing engine
//!
//! A reusable, grammar-agnostic tokenizer core. Client code supplies a token
//! vocabulary and a graph of mutually-recursive state functions; the engine
//! owns the rune cursor, runs the state machine and delivers tokens through a
//! bounded queue.
//!
//! ## Quick Start
//!
//! ```rust
//! use statelex::{Lexer, StateFn, Transition};
//!
//! const NUMBER: i32 = 1;
//!
//! fn lex_numbers(lexer: &mut Lexer<i32>) -> Transition<i32> {
//!     if lexer.accept_run(' ') > 0 {
//!         lexer.ignore();
//!     }
//!     if lexer.accept_run('0'..='9') > 0 {
//!         lexer.emit(NUMBER);
//!         return Some(StateFn::new(lex_numbers));
//!     }
//!     match lexer.peek() {
//!         None => None,
//!         Some(c) => lexer.errorf(format!("unexpected {:?}", c)),
//!     }
//! }
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut tokens = Lexer::new("numbers", "7 42", StateFn::new(lex_numbers)).start()?;
//!
//! let first = tokens.next_token().unwrap();
//! assert_eq!((first.kind, first.at, first.value.as_str()), (NUMBER, 0, "7"));
//! let second = tokens.next_token().unwrap();
//! assert_eq!((second.at, second.value.as_str()), (2, "42"));
//! assert!(tokens.next_token().is_none());
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! StateFn → Lexer (cursor + emit) → bounded queue → Tokens → consumer
//! ```
//!
//! - [`Cursor`] - byte-accurate rune cursor with one rune of pushback
//! - [`Lexer`] - engine handle passed to state functions; emits tokens
//! - [`StateFn`] - one unit of grammar logic, returning the next one
//! - [`Tokens`] - pull-style consumer of the token stream
//!
//! ## Error Handling
//!
//! A grammar reports a lexical error with [`Lexer::errorf`]. The error travels
//! as the last token of the stream, carrying [`TokenType::ERROR`]. Consumers
//! either inspect tokens themselves or let [`Tokens::collect_tokens`] turn it
//! into [`Error::Lexical`].
//!
//! ## Logging
//!
//! The engine logs through [`tracing`]: scan start and end at `debug`, every
//! emitted token at `trace`. Install any subscriber to see them.

/// Version of the Statelex engine
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod error;
pub mod lexer;

// Re-export main types
pub use error::{Error, Result};
pub use lexer::{
    Capacity, Cursor, Lexer, LexerConfig, Outcome, RuneSet, SourcePos, StateFn, Token, TokenType,
    Tokens, Transition, MAX_CAPACITY,
};
