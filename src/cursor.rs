//! Generic pull-based cursor.
//!
//! The tokenizing and parsing stages both follow the same cooperative
//! single-stepping protocol: a cursor holds at most one current element and
//! only moves when the caller asks it to. [`PullCursor`] implements that
//! protocol once, generically over any iterator; [`CharCursor`] is the
//! character-level instantiation the tokenizer and the standalone number
//! readers consume.
//!
//! ## Protocol
//!
//! A fresh cursor has not started and has no current element. The first
//! [`advance`](PullCursor::advance) moves onto the first element (if any);
//! each later `advance` moves one element forward. After exhaustion, `advance`
//! keeps returning `false`. Reading [`current`](PullCursor::current) before
//! the first `advance` is a programmer error and panics.
//!
//! ## Examples
//!
//! ```rust
//! use json_pull::CharCursor;
//!
//! let mut chars = CharCursor::for_text("ab");
//! assert!(!chars.has_started());
//!
//! assert!(chars.advance());
//! assert_eq!(chars.current(), Some(&'a'));
//!
//! assert!(chars.advance());
//! assert_eq!(chars.current(), Some(&'b'));
//!
//! assert!(!chars.advance());
//! assert_eq!(chars.current(), None);
//! assert!(!chars.advance());
//! ```

/// A peekable pull cursor over any iterator.
///
/// Holds at most one current element; the caller drives it one step at a time
/// via [`advance`](PullCursor::advance). Never blocks and never yields control
/// to other logical tasks.
#[derive(Debug, Clone)]
pub struct PullCursor<I: Iterator> {
    iter: I,
    current: Option<I::Item>,
    started: bool,
}

impl<I: Iterator> PullCursor<I> {
    /// Creates a cursor that has not yet started iterating.
    pub fn new(iter: I) -> Self {
        PullCursor {
            iter,
            current: None,
            started: false,
        }
    }

    /// Returns `true` once [`advance`](PullCursor::advance) has been called at
    /// least once.
    pub fn has_started(&self) -> bool {
        self.started
    }

    /// Returns `true` if the cursor holds a current element.
    pub fn has_current(&self) -> bool {
        self.current.is_some()
    }

    /// Returns the current element, or `None` after exhaustion.
    ///
    /// # Panics
    ///
    /// Panics if the cursor has not started.
    pub fn current(&self) -> Option<&I::Item> {
        assert!(self.started, "cursor read before the first advance");
        self.current.as_ref()
    }

    /// Moves to the next element. Returns whether a current element exists
    /// afterwards. Idempotent after exhaustion.
    pub fn advance(&mut self) -> bool {
        self.started = true;
        self.current = self.iter.next();
        self.current.is_some()
    }

    /// Takes the current element out of the cursor and moves to the next one.
    ///
    /// # Panics
    ///
    /// Panics if the cursor has not started.
    pub fn take_current(&mut self) -> Option<I::Item> {
        assert!(self.started, "cursor read before the first advance");
        let taken = self.current.take();
        self.current = self.iter.next();
        taken
    }
}

/// A pull cursor over a string's characters.
pub type CharCursor<'a> = PullCursor<std::str::Chars<'a>>;

impl<'a> PullCursor<std::str::Chars<'a>> {
    /// Creates a character cursor over `text`. The cursor has not started;
    /// call [`advance`](PullCursor::advance) to reach the first character.
    pub fn for_text(text: &'a str) -> Self {
        PullCursor::new(text.chars())
    }
}
