//! Lexical scanning engine
//!
//! A grammar is a set of state functions. Each one receives the [`Lexer`],
//! moves its rune cursor, emits tokens, and returns the next state. The driver
//! runs the states on a producer thread and hands tokens to the consumer
//! through a bounded queue exposed as [`Tokens`].
//!
//! ```
//! use statelex::{Lexer, StateFn, TokenType, Transition};
//!
//! #[derive(Debug, Clone, Copy, PartialEq)]
//! enum Calc {
//!     Error,
//!     Number,
//!     Plus,
//! }
//!
//! impl TokenType for Calc {
//!     const ERROR: Self = Calc::Error;
//! }
//!
//! fn lex_expr(lexer: &mut Lexer<Calc>) -> Transition<Calc> {
//!     if lexer.accept_run("0123456789") > 0 {
//!         lexer.emit(Calc::Number);
//!     }
//!     match lexer.next() {
//!         None => None,
//!         Some('+') => {
//!             lexer.emit(Calc::Plus);
//!             Some(StateFn::new(lex_expr))
//!         }
//!         Some(c) => lexer.errorf(format!("unexpected character {:?}", c)),
//!     }
//! }
//!
//! # fn main() -> statelex::Result<()> {
//! let tokens = Lexer::new("calc", "12+34", StateFn::new(lex_expr))
//!     .start()?
//!     .collect_tokens()?;
//! let values: Vec<&str> = tokens.iter().map(|t| t.value.as_str()).collect();
//! assert_eq!(values, ["12", "+", "34"]);
//! # Ok(())
//! # }
//! ```

mod channel;
mod config;
mod cursor;
mod engine;
mod state;
mod token;

pub use channel::Tokens;
pub use config::{Capacity, LexerConfig, MAX_CAPACITY};
pub use cursor::{Cursor, RuneSet};
pub use engine::{Lexer, Outcome};
pub use state::{StateFn, Transition};
pub use token::{SourcePos, Token, TokenType};
