use std::ops::RangeInclusive;

/// A set of acceptable runes for [`Cursor::accept`] and [`Cursor::accept_run`]
///
/// A `&str` is read as "any of these characters", which keeps grammar code
/// short: `lexer.accept_run("0123456789")`.
pub trait RuneSet {
    /// Whether `c` belongs to the set
    fn contains_rune(&self, c: char) -> bool;
}

impl RuneSet for &str {
    fn contains_rune(&self, c: char) -> bool {
        self.contains(c)
    }
}

impl RuneSet for char {
    fn contains_rune(&self, c: char) -> bool {
        *self == c
    }
}

impl RuneSet for &[char] {
    fn contains_rune(&self, c: char) -> bool {
        self.contains(&c)
    }
}

impl<const N: usize> RuneSet for [char; N] {
    fn contains_rune(&self, c: char) -> bool {
        self.contains(&c)
    }
}

impl RuneSet for RangeInclusive<char> {
    fn contains_rune(&self, c: char) -> bool {
        self.contains(&c)
    }
}

impl<F> RuneSet for F
where
    F: Fn(char) -> bool,
{
    fn contains_rune(&self, c: char) -> bool {
        self(c)
    }
}

/// Rune cursor over the input of one scan
///
/// Tracks the start of the pending span, the scan position and the width of
/// the last decoded rune. All offsets are byte offsets into the input, so the
/// pending span is always a valid `&str` slice.
///
/// `0 <= start <= pos <= input.len()` holds after every operation.
#[derive(Debug, Clone)]
pub struct Cursor {
    /// Text being scanned
    input: String,
    /// Start of the pending span
    start: usize,
    /// Current scan position
    pos: usize,
    /// Width of the last decoded rune; `None` once the pushback was used
    width: Option<usize>,
}

impl Cursor {
    /// Creates a cursor at the beginning of `input`
    pub fn new(input: impl Into<String>) -> Self {
        Cursor {
            input: input.into(),
            start: 0,
            pos: 0,
            width: None,
        }
    }

    /// The full input
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Byte offset where the pending span begins
    pub fn start(&self) -> usize {
        self.start
    }

    /// Current byte offset
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// The pending span, `input[start..pos]`
    pub fn pending(&self) -> &str {
        &self.input[self.start..self.pos]
    }

    /// Whether every byte of the input has been consumed
    pub fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Whether a [`backup`](Self::backup) is currently allowed
    pub fn can_backup(&self) -> bool {
        self.width.is_some()
    }

    /// Decodes and consumes the next rune
    ///
    /// Returns `None` at end of input. Reading past the end is idempotent: the
    /// position stays put and a following `backup` is a zero-width step.
    pub fn next(&mut self) -> Option<char> {
        match self.input[self.pos..].chars().next() {
            Some(c) => {
                let width = c.len_utf8();
                self.pos += width;
                self.width = Some(width);
                Some(c)
            }
            None => {
                self.width = Some(0);
                None
            }
        }
    }

    /// Returns the next rune without consuming it
    ///
    /// Uses up the pushback, so it must not be followed by [`backup`](Self::backup).
    pub fn peek(&mut self) -> Option<char> {
        let c = self.next();
        self.backup();
        c
    }

    /// Steps back over the rune returned by the last [`next`](Self::next)
    ///
    /// Only one step is available per `next`. A second `backup` in a row is a
    /// grammar bug: debug builds panic, release builds leave the position alone.
    pub fn backup(&mut self) {
        debug_assert!(
            self.width.is_some(),
            "backup called without an intervening next at offset {}",
            self.pos
        );
        if let Some(width) = self.width.take() {
            self.pos -= width;
        }
    }

    /// Drops the pending span without producing a token
    pub fn ignore(&mut self) {
        self.start = self.pos;
        self.width = None;
    }

    /// Consumes the next rune if it is in `valid`
    pub fn accept(&mut self, valid: impl RuneSet) -> bool {
        match self.next() {
            Some(c) if valid.contains_rune(c) => true,
            _ => {
                self.backup();
                false
            }
        }
    }

    /// Consumes runes while they are in `valid`, returning how many were taken
    ///
    /// Stops in front of the first rune outside the set, or at end of input.
    pub fn accept_run(&mut self, valid: impl RuneSet) -> usize {
        let mut count = 0;
        while let Some(c) = self.next() {
            if !valid.contains_rune(c) {
                break;
            }
            count += 1;
        }
        self.backup();
        count
    }

    /// Takes the pending span and starts a new one at the current position
    pub(crate) fn take_span(&mut self) -> (usize, &str) {
        let start = self.start;
        self.start = self.pos;
        self.width = None;
        (start, &self.input[start..self.pos])
    }
}
