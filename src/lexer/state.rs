use super::{Lexer, TokenType};
use std::fmt;

/// What a state function hands back to the driver: the next state, or `None`
/// to end the scan
pub type Transition<T> = Option<StateFn<T>>;

/// One unit of grammar logic
///
/// A state function reads from the lexer, optionally emits tokens, and returns
/// the state to run next. States are plain values, so a grammar may return
/// itself to loop, or any other state to switch lexical mode.
///
/// ```
/// use statelex::{Lexer, StateFn, Transition};
///
/// fn lex_word(lexer: &mut Lexer<i32>) -> Transition<i32> {
///     if lexer.accept_run(char::is_alphabetic) > 0 {
///         lexer.emit(1);
///     }
///     None
/// }
///
/// let lexer = Lexer::new("words", "hello", StateFn::new(lex_word));
/// let tokens = lexer.start().unwrap().collect_tokens().unwrap();
/// assert_eq!(tokens[0].value, "hello");
/// ```
pub struct StateFn<T: TokenType>(Box<dyn FnOnce(&mut Lexer<T>) -> Transition<T> + Send>);

impl<T: TokenType> StateFn<T> {
    /// Wraps a function or closure as a state
    pub fn new<F>(f: F) -> Self
    where
        F: FnOnce(&mut Lexer<T>) -> Transition<T> + Send + 'static,
    {
        StateFn(Box::new(f))
    }

    /// Runs the state once, consuming it
    pub(crate) fn run(self, lexer: &mut Lexer<T>) -> Transition<T> {
        (self.0)(lexer)
    }
}

impl<T: TokenType> fmt::Debug for StateFn<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("StateFn")
    }
}
