//! Bounded token queue between the producer thread and the consumer

use super::{Outcome, Token, TokenType};
use crate::error::{Error, Result};
use std::thread::JoinHandle;
use tokio::sync::mpsc;

/// Creates a queue holding at most `capacity` tokens
pub(crate) fn channel<T>(capacity: usize) -> (Sink<T>, mpsc::Receiver<Token<T>>) {
    let (tx, rx) = mpsc::channel(capacity);
    let sink = Sink {
        tx,
        sent: 0,
        closed: false,
    };
    (sink, rx)
}

/// Producer half of the token queue
///
/// Dropping the sink is what closes the queue, so it lives exactly as long as
/// the lexer that owns it.
#[derive(Debug)]
pub(crate) struct Sink<T> {
    tx: mpsc::Sender<Token<T>>,
    /// Tokens delivered so far
    sent: usize,
    /// Set once a send found the consumer gone
    closed: bool,
}

impl<T: TokenType> Sink<T> {
    /// Sends a token, blocking while the queue is full
    ///
    /// Returns `false` if the consumer closed the queue; the token is dropped.
    pub fn send(&mut self, token: Token<T>) -> bool {
        if self.closed {
            return false;
        }

        match self.tx.blocking_send(token) {
            Ok(()) => {
                self.sent += 1;
                true
            }
            Err(_) => {
                tracing::debug!(sent = self.sent, "consumer closed the token queue");
                self.closed = true;
                false
            }
        }
    }

    /// Whether the consumer has gone away
    pub fn is_closed(&self) -> bool {
        self.closed || self.tx.is_closed()
    }

    /// Number of tokens delivered
    pub fn sent(&self) -> usize {
        self.sent
    }
}

/// Consumer handle for a running scan
///
/// Tokens arrive in emission order. `None` from [`next_token`](Self::next_token)
/// or [`recv`](Self::recv) means the producer finished and the queue is
/// drained; inspect the last token to tell a clean finish from a lexical error.
///
/// Dropping the handle closes the queue, which stops the producer at its next
/// send or state transition.
#[derive(Debug)]
pub struct Tokens<T> {
    name: String,
    capacity: usize,
    rx: mpsc::Receiver<Token<T>>,
    producer: JoinHandle<Outcome>,
}

impl<T: TokenType> Tokens<T> {
    pub(crate) fn new(
        name: String,
        capacity: usize,
        rx: mpsc::Receiver<Token<T>>,
        producer: JoinHandle<Outcome>,
    ) -> Self {
        Tokens {
            name,
            capacity,
            rx,
            producer,
        }
    }

    /// Name of the lexer feeding this stream
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Maximum number of tokens buffered between producer and consumer
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Blocks until the next token is available
    ///
    /// # Panics
    ///
    /// Panics when called from inside an async runtime; use [`recv`](Self::recv)
    /// there.
    pub fn next_token(&mut self) -> Option<Token<T>> {
        self.rx.blocking_recv()
    }

    /// Waits for the next token without blocking the runtime
    pub async fn recv(&mut self) -> Option<Token<T>> {
        self.rx.recv().await
    }

    /// Stops the scan early
    ///
    /// Tokens already queued can still be read; nothing new will arrive.
    pub fn cancel(&mut self) {
        self.rx.close();
    }

    /// Cancels the scan if still running and waits for the producer thread
    ///
    /// Joining a stream that was not drained cancels it, possibly before the
    /// first state runs; read until `None` first to let the scan finish.
    pub fn join(mut self) -> Result<Outcome> {
        self.rx.close();
        let name = self.name;
        self.producer
            .join()
            .map_err(|_| Error::ProducerPanicked { name })
    }

    /// Drains the stream into a vector
    ///
    /// A trailing error token is turned into [`Error::Lexical`].
    pub fn collect_tokens(mut self) -> Result<Vec<Token<T>>> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token() {
            tokens.push(token);
        }

        let name = self.name.clone();
        self.join()?;

        match tokens.pop() {
            Some(last) if last.is_error() => Err(Error::lexical(name, last.at, last.value)),
            Some(last) => {
                tokens.push(last);
                Ok(tokens)
            }
            None => Ok(tokens),
        }
    }
}

impl<T: TokenType> Iterator for Tokens<T> {
    type Item = Token<T>;

    fn next(&mut self) -> Option<Token<T>> {
        self.next_token()
    }
}
