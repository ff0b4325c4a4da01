//! Coordinate type and the board bounds check.

use std::fmt;
use std::str::FromStr;

use crate::board::error::CoordinateError;

/// Number of squares along each axis.
pub const BOARD_SIZE: i32 = 8;

/// Smallest valid coordinate value (the board is 1-indexed).
pub const MIN_COORD: i32 = 1;

/// A direction or offset vector `(dx, dy)`.
pub type Vector = (i32, i32);

/// Returns true if `c` lies on the 8x8 board.
#[inline]
#[must_use]
pub const fn is_within_bounds(c: Coordinate) -> bool {
    c.x >= MIN_COORD && c.x <= BOARD_SIZE && c.y >= MIN_COORD && c.y <= BOARD_SIZE
}

/// A board square as an `(x, y)` pair.
///
/// The type itself does not enforce the board range: move generation builds
/// off-board candidates before discarding them. Use [`Coordinate::on_board`]
/// or `TryFrom` when a checked value is needed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    /// Create a coordinate without bounds checking.
    #[inline]
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Coordinate { x, y }
    }

    /// Create a coordinate only if it lies on the board.
    #[must_use]
    pub const fn on_board(x: i32, y: i32) -> Option<Self> {
        let c = Coordinate { x, y };
        if is_within_bounds(c) {
            Some(c)
        } else {
            None
        }
    }

    #[inline]
    #[must_use]
    pub const fn x(self) -> i32 {
        self.x
    }

    #[inline]
    #[must_use]
    pub const fn y(self) -> i32 {
        self.y
    }

    /// Translate by `(dx, dy)`. The result may be off the board.
    #[inline]
    #[must_use]
    pub const fn offset(self, v: Vector) -> Self {
        Coordinate {
            x: self.x + v.0,
            y: self.y + v.1,
        }
    }

    /// Translate by `step` multiples of `(dx, dy)`.
    #[inline]
    #[must_use]
    pub const fn step(self, v: Vector, step: i32) -> Self {
        Coordinate {
            x: self.x + v.0 * step,
            y: self.y + v.1 * step,
        }
    }

    /// Like [`Coordinate::offset`], but `None` if a component overflows.
    #[inline]
    #[must_use]
    pub fn checked_offset(self, v: Vector) -> Option<Self> {
        Some(Coordinate {
            x: self.x.checked_add(v.0)?,
            y: self.y.checked_add(v.1)?,
        })
    }

    /// Like [`Coordinate::step`], but `None` if a component overflows.
    #[inline]
    #[must_use]
    pub fn checked_step(self, v: Vector, step: i32) -> Option<Self> {
        Some(Coordinate {
            x: self.x.checked_add(v.0.checked_mul(step)?)?,
            y: self.y.checked_add(v.1.checked_mul(step)?)?,
        })
    }

    #[inline]
    #[must_use]
    pub const fn is_within_bounds(self) -> bool {
        is_within_bounds(self)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<Coordinate> for (i32, i32) {
    fn from(c: Coordinate) -> Self {
        (c.x, c.y)
    }
}

impl TryFrom<(i32, i32)> for Coordinate {
    type Error = CoordinateError;

    fn try_from((x, y): (i32, i32)) -> Result<Self, Self::Error> {
        Coordinate::on_board(x, y).ok_or(CoordinateError::OutOfBounds { x, y })
    }
}

impl FromStr for Coordinate {
    type Err = CoordinateError;

    /// Accepts `x,y` or `(x, y)`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CoordinateError::InvalidNotation {
            text: s.to_string(),
        };

        let trimmed = s.trim();
        let inner = trimmed
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .unwrap_or(trimmed);

        let (x, y) = inner.split_once(',').ok_or_else(invalid)?;
        let x = x.trim().parse::<i32>().map_err(|_| invalid())?;
        let y = y.trim().parse::<i32>().map_err(|_| invalid())?;

        Coordinate::try_from((x, y))
    }
}
