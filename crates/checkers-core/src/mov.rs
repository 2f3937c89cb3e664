//! Move representation.

use crate::Square;
use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::fmt;

/// The ordered squares of the pieces jumped by one move.
///
/// A side starts with 12 pieces, so no single move can jump more than 12.
/// Stored inline to keep [`Move`] `Copy`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CaptureList {
    squares: [Square; Self::MAX_CAPTURES],
    len: u8,
}

impl CaptureList {
    /// Maximum number of pieces one move can capture.
    pub const MAX_CAPTURES: usize = 12;

    /// Creates an empty capture list.
    #[inline]
    pub const fn new() -> Self {
        CaptureList {
            squares: [Square::new(0, 0); Self::MAX_CAPTURES],
            len: 0,
        }
    }

    /// Appends a captured square.
    #[inline]
    pub fn push(&mut self, sq: Square) {
        debug_assert!((self.len as usize) < Self::MAX_CAPTURES);
        self.squares[self.len as usize] = sq;
        self.len += 1;
    }

    /// Returns a copy of this list with `sq` appended.
    #[inline]
    pub fn with(mut self, sq: Square) -> Self {
        self.push(sq);
        self
    }

    /// Returns the number of captured squares.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    /// Returns true if nothing is captured.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the captured squares in jump order.
    #[inline]
    pub fn as_slice(&self) -> &[Square] {
        &self.squares[..self.len as usize]
    }

    /// Returns true if `sq` was captured.
    #[inline]
    pub fn contains(&self, sq: Square) -> bool {
        self.as_slice().contains(&sq)
    }
}

impl Default for CaptureList {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<Square> for CaptureList {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Self {
        let mut list = CaptureList::new();
        for sq in iter {
            list.push(sq);
        }
        list
    }
}

impl fmt::Debug for CaptureList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

/// What a move does, as a tagged view over [`Move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind<'a> {
    /// A non-capturing step or king slide.
    Plain,
    /// A jump (or chain of jumps) over `count` opponent pieces.
    Capture { count: u8, captured: &'a [Square] },
}

/// A checkers move: a piece travels from `from` to `to`, clearing every
/// square in its capture list.
///
/// One move may stand for a whole multi-jump chain; the capture list holds
/// every jumped square in order.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    from: Square,
    to: Square,
    captured: CaptureList,
}

impl Move {
    /// Creates a non-capturing move.
    #[inline]
    pub const fn plain(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            captured: CaptureList::new(),
        }
    }

    /// Creates a capturing move over the given squares.
    #[inline]
    pub const fn capture(from: Square, to: Square, captured: CaptureList) -> Self {
        Move { from, to, captured }
    }

    /// Returns the source square.
    #[inline]
    pub const fn from(&self) -> Square {
        self.from
    }

    /// Returns the destination square.
    #[inline]
    pub const fn to(&self) -> Square {
        self.to
    }

    /// Returns the jumped squares in order (empty for plain moves).
    #[inline]
    pub fn captured(&self) -> &[Square] {
        self.captured.as_slice()
    }

    /// Returns the number of pieces this move captures (0 for plain moves).
    #[inline]
    pub const fn capture_count(&self) -> u8 {
        self.captured.len
    }

    /// Returns true if this move captures at least one piece.
    #[inline]
    pub const fn is_capture(&self) -> bool {
        !self.captured.is_empty()
    }

    /// Returns the tagged view of this move.
    pub fn kind(&self) -> MoveKind<'_> {
        if self.is_capture() {
            MoveKind::Capture {
                count: self.capture_count(),
                captured: self.captured(),
            }
        } else {
            MoveKind::Plain
        }
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({})", self)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_capture() {
            write!(f, "{}x{}", self.from, self.to)?;
            for sq in self.captured() {
                write!(f, " {}", sq)?;
            }
            Ok(())
        } else {
            write!(f, "{}-{}", self.from, self.to)
        }
    }
}

impl Serialize for Move {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Move", 4)?;
        state.serialize_field("from", &self.from)?;
        state.serialize_field("to", &self.to)?;
        state.serialize_field("captures", &self.capture_count())?;
        state.serialize_field("captured", self.captured())?;
        state.end()
    }
}
