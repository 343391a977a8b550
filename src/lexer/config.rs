/// Largest queue size a lexer will use
///
/// The token channel cannot hold more permits than this; larger requests are
/// clamped.
pub const MAX_CAPACITY: usize = usize::MAX >> 3;

/// Size policy for the token queue between the producer and the consumer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Capacity {
    /// Half the input length in bytes, between 1 and [`MAX_CAPACITY`]
    ///
    /// Short inputs rarely block the producer, while pathological inputs still
    /// have bounded memory.
    #[default]
    Proportional,
    /// A fixed number of tokens, between 1 and [`MAX_CAPACITY`]
    Fixed(usize),
}

impl Capacity {
    /// Queue size for an input of `input_len` bytes
    pub fn resolve(self, input_len: usize) -> usize {
        match self {
            Capacity::Proportional => (input_len / 2).clamp(1, MAX_CAPACITY),
            Capacity::Fixed(n) => n.clamp(1, MAX_CAPACITY),
        }
    }
}

/// Configuration for a lexer
#[derive(Debug, Clone, Default)]
pub struct LexerConfig {
    /// Token queue size (default: proportional to the input)
    pub capacity: Capacity,
}
