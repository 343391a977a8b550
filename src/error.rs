//! Error types for Statelex

use thiserror::Error;

/// Errors surfaced to the code consuming a token stream
///
/// Lexical errors travel through the token stream as ordinary tokens carrying
/// the reserved error kind. They only become an [`Error`] when a consumer asks
/// for it, e.g. through [`Tokens::collect_tokens`](crate::lexer::Tokens::collect_tokens).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The grammar signalled a lexical error
    ///
    /// **Triggered by:** a state function calling `errorf`
    /// **Example:** a numeric grammar fed `1@` reports the `@` at offset 1
    #[error("{name}: lexical error at offset {at}: {message}")]
    Lexical {
        /// Name the lexer was created with
        name: String,
        /// Byte offset of the span that was being assembled
        at: usize,
        /// Message built by the grammar
        message: String,
    },

    /// The producer thread could not be started
    #[error("{name}: failed to spawn lexer thread: {message}")]
    Spawn {
        /// Name the lexer was created with
        name: String,
        /// Underlying I/O error description
        message: String,
    },

    /// `start` was called on a lexer whose scan is already running
    ///
    /// **Triggered by:** a state function swapping the running lexer out with
    /// `std::mem::replace` and starting it. Swapping the running lexer is
    /// misuse: its queue closes and the scan ends as cancelled.
    #[error("{name}: lexer already started")]
    AlreadyStarted {
        /// Name the lexer was created with
        name: String,
    },

    /// A state function panicked on the producer thread
    #[error("{name}: lexer thread panicked")]
    ProducerPanicked {
        /// Name the lexer was created with
        name: String,
    },
}

impl Error {
    /// Create a lexical error
    pub fn lexical(name: impl Into<String>, at: usize, message: impl Into<String>) -> Self {
        Error::Lexical {
            name: name.into(),
            at,
            message: message.into(),
        }
    }

    /// Byte offset associated with the error, if any
    pub fn offset(&self) -> Option<usize> {
        match self {
            Error::Lexical { at, .. } => Some(*at),
            _ => None,
        }
    }
}

/// Result type for Statelex operations
pub type Result<T> = std::result::Result<T, Error>;
