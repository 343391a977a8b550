use serde::{Deserialize, Serialize};
use std::fmt;

/// The token vocabulary of a grammar
///
/// The engine treats token kinds as opaque values and only knows about the
/// reserved [`ERROR`](TokenType::ERROR) kind. Grammars must not use that value
/// for a legitimate token category.
pub trait TokenType: Copy + PartialEq + fmt::Debug + Send + 'static {
    /// Kind carried by lexical error tokens
    const ERROR: Self;

    /// Whether this is the reserved error kind
    fn is_error(self) -> bool {
        self == Self::ERROR
    }
}

impl TokenType for i32 {
    const ERROR: Self = -1;
}

impl TokenType for i64 {
    const ERROR: Self = -1;
}

/// A single token produced by a scan
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token<T> {
    /// Kind assigned by the grammar
    pub kind: T,
    /// Byte offset where the token starts in the input
    pub at: usize,
    /// Literal text of the token, or the message of an error token
    pub value: String,
}

impl<T: TokenType> Token<T> {
    /// Creates a new token
    pub fn new(kind: T, at: usize, value: impl Into<String>) -> Self {
        Token {
            kind,
            at,
            value: value.into(),
        }
    }

    /// Whether this token reports a lexical error
    pub fn is_error(&self) -> bool {
        self.kind.is_error()
    }

    /// Byte offset just past the token's text
    ///
    /// Meaningless for error tokens, whose value is a message.
    pub fn end(&self) -> usize {
        self.at + self.value.len()
    }
}

impl<T: fmt::Debug> fmt::Display for Token<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}({:?}) at {}", self.kind, self.value, self.at)
    }
}

/// A human readable position in the input
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SourcePos {
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number in characters (1-indexed)
    pub column: usize,
}

impl SourcePos {
    /// Locates a byte offset of `input`
    ///
    /// Offsets past the end, or inside a multi-byte character, are clamped to
    /// the preceding character boundary.
    pub fn locate(input: &str, offset: usize) -> Self {
        let mut end = offset.min(input.len());
        while !input.is_char_boundary(end) {
            end -= 1;
        }

        let mut pos = SourcePos::default();
        for c in input[..end].chars() {
            if c == '\n' {
                pos.line += 1;
                pos.column = 1;
            } else {
                pos.column += 1;
            }
        }
        pos
    }
}

impl Default for SourcePos {
    fn default() -> Self {
        SourcePos { line: 1, column: 1 }
    }
}

impl fmt::Display for SourcePos {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}
