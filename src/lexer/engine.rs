use super::channel::{self, Sink};
use super::{Cursor, LexerConfig, RuneSet, SourcePos, StateFn, Token, TokenType, Tokens, Transition};
use crate::error::{Error, Result};
use std::fmt;
use std::thread;
use tokio::sync::mpsc;

/// How a scan ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The grammar returned the terminal state
    Finished,
    /// The grammar reported a lexical error
    Failed,
    /// The consumer closed the stream before the grammar finished
    Cancelled,
}

/// The scanning engine handed to every state function
///
/// Owns the input, the rune cursor and the producer half of the token queue.
/// Created with [`Lexer::new`], then [`start`](Lexer::start)ed once; from then
/// on it lives on its own thread and is only reachable from state functions.
pub struct Lexer<T: TokenType> {
    /// Used in diagnostics only
    name: String,
    cursor: Cursor,
    sink: Sink<T>,
    capacity: usize,
    /// Receiver and initial state, until the scan starts
    pending: Option<(mpsc::Receiver<Token<T>>, StateFn<T>)>,
    /// Set once an error token went out
    failed: bool,
}

impl<T: TokenType> Lexer<T> {
    /// Creates a lexer with the default configuration
    ///
    /// Nothing is scanned until [`start`](Self::start) is called.
    pub fn new(name: impl Into<String>, input: impl Into<String>, initial: StateFn<T>) -> Self {
        Self::with_config(name, input, initial, LexerConfig::default())
    }

    /// Creates a lexer with an explicit configuration
    pub fn with_config(
        name: impl Into<String>,
        input: impl Into<String>,
        initial: StateFn<T>,
        config: LexerConfig,
    ) -> Self {
        let cursor = Cursor::new(input);
        let capacity = config.capacity.resolve(cursor.input().len());
        let (sink, rx) = channel::channel(capacity);

        Lexer {
            name: name.into(),
            cursor,
            sink,
            capacity,
            pending: Some((rx, initial)),
            failed: false,
        }
    }

    /// Spawns the producer thread and returns the token stream
    ///
    /// Fails with [`Error::AlreadyStarted`] for a lexer taken out of a running
    /// scan, and with [`Error::Spawn`] if the thread cannot be created.
    pub fn start(mut self) -> Result<Tokens<T>> {
        let Some((rx, initial)) = self.pending.take() else {
            return Err(Error::AlreadyStarted { name: self.name });
        };

        let name = self.name.clone();
        let capacity = self.capacity;
        tracing::debug!(
            name = %name,
            capacity,
            input_len = self.cursor.input().len(),
            "starting lexer"
        );

        let producer = thread::Builder::new()
            .name(format!("lexer:{}", name.replace('\0', "")))
            .spawn(move || self.drive(initial))
            .map_err(|e| Error::Spawn {
                name: name.clone(),
                message: e.to_string(),
            })?;

        Ok(Tokens::new(name, capacity, rx, producer))
    }

    /// Runs states until the grammar stops, fails, or the consumer leaves
    ///
    /// Consumes the lexer: dropping it drops the sink, which closes the queue.
    fn drive(mut self, initial: StateFn<T>) -> Outcome {
        let span = tracing::debug_span!("lexer", name = %self.name);
        let _enter = span.enter();

        let mut state = Some(initial);
        let outcome = loop {
            let Some(current) = state.take() else {
                break Outcome::Finished;
            };
            if self.sink.is_closed() {
                break Outcome::Cancelled;
            }

            state = current.run(&mut self);

            // Only a lexer that was never started still holds its receiver, so
            // a state function swapped the running one out. The consumer's
            // queue went with it.
            if self.pending.take().is_some() {
                tracing::warn!("running lexer was replaced by a state function");
                break Outcome::Cancelled;
            }
            if self.failed {
                break Outcome::Failed;
            }
        };

        tracing::debug!(tokens = self.sink.sent(), ?outcome, "lexer finished");
        outcome
    }

    // Cursor primitives

    /// Consumes and returns the next rune, `None` at end of input
    pub fn next(&mut self) -> Option<char> {
        self.cursor.next()
    }

    /// Returns the next rune without consuming it
    pub fn peek(&mut self) -> Option<char> {
        self.cursor.peek()
    }

    /// Steps back over the last rune read; allowed once per [`next`](Self::next)
    pub fn backup(&mut self) {
        self.cursor.backup()
    }

    /// Skips the pending span without emitting it
    pub fn ignore(&mut self) {
        self.cursor.ignore()
    }

    /// Consumes the next rune if it belongs to `valid`
    pub fn accept(&mut self, valid: impl RuneSet) -> bool {
        self.cursor.accept(valid)
    }

    /// Consumes runes while they belong to `valid`; returns how many
    pub fn accept_run(&mut self, valid: impl RuneSet) -> usize {
        self.cursor.accept_run(valid)
    }

    /// Name given at construction
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Read-only view of the cursor
    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    /// Current byte offset
    pub fn pos(&self) -> usize {
        self.cursor.pos()
    }

    /// Text scanned since the last emit or ignore
    pub fn pending(&self) -> &str {
        self.cursor.pending()
    }

    /// Line and column where the pending span begins
    pub fn position(&self) -> SourcePos {
        SourcePos::locate(self.cursor.input(), self.cursor.start())
    }

    // Emission

    /// Emits the pending span as a token of `kind`
    ///
    /// The next token starts where this one ends. An empty span is allowed and
    /// yields an empty token. After an error token, emits are dropped.
    ///
    /// Emitting [`TokenType::ERROR`] behaves like [`errorf`](Self::errorf) with
    /// the pending span as the message: the scan ends after the current state.
    pub fn emit(&mut self, kind: T) {
        let (at, text) = self.cursor.take_span();
        if self.failed {
            tracing::warn!(?kind, at, "dropping token emitted after a lexical error");
            return;
        }

        let token = Token::new(kind, at, text);
        if kind.is_error() {
            tracing::debug!(at, message = %token.value, "lexical error");
            self.failed = true;
        } else {
            tracing::trace!(?kind, at, value = %token.value, "emit");
        }
        self.sink.send(token);
    }

    /// Emits a lexical error token and ends the scan
    ///
    /// The token carries the reserved error kind, the start of the pending span
    /// and `message`. Returns the terminal state so a state function can
    /// `return lexer.errorf(..)`; the driver stops after the current state in
    /// any case, so the error token is always the last one.
    pub fn errorf(&mut self, message: impl fmt::Display) -> Transition<T> {
        let at = self.cursor.start();
        let message = message.to_string();

        if self.failed {
            tracing::warn!(at, %message, "dropping second lexical error");
        } else {
            tracing::debug!(at, %message, "lexical error");
            self.failed = true;
            self.sink.send(Token::new(T::ERROR, at, message));
        }
        None
    }
}

impl<T: TokenType> fmt::Debug for Lexer<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Lexer")
            .field("name", &self.name)
            .field("start", &self.cursor.start())
            .field("pos", &self.cursor.pos())
            .field("capacity", &self.capacity)
            .field("failed", &self.failed)
            .finish()
    }
}
