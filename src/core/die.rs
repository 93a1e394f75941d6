//! A die backed by a shared random source.
//!
//! A roll draws one value from the source over the die's draw range and
//! reduces it: `(value mod sides) + 1`. When the draw range is not a multiple
//! of `sides` the reduction is biased. With the default range `[1, 10]` a
//! six-sided die shows faces 2-5 twice as often as 1 and 6.

use std::fmt;
use std::rc::Rc;

use tracing::trace;

use super::rng::SharedSource;
use crate::error::GameError;

/// Default inclusive range of raw values drawn for each roll.
pub const DEFAULT_DRAW_RANGE: (i64, i64) = (1, 10);

/// A die with a fixed number of sides.
///
/// Cloning a die shares its random source.
#[derive(Clone)]
pub struct Die {
    sides: i64,
    draw_low: i64,
    draw_high: i64,
    source: SharedSource,
}

impl Die {
    /// Create a die using the default draw range.
    pub fn new(sides: i64, source: SharedSource) -> Result<Self, GameError> {
        let (low, high) = DEFAULT_DRAW_RANGE;
        Self::with_draw_range(sides, low, high, source)
    }

    /// Create a die that draws raw values from `[low, high]`.
    pub fn with_draw_range(
        sides: i64,
        low: i64,
        high: i64,
        source: SharedSource,
    ) -> Result<Self, GameError> {
        if sides <= 0 {
            return Err(GameError::InvalidSides(sides));
        }
        if low > high {
            return Err(GameError::InvalidDrawRange { low, high });
        }
        Ok(Self {
            sides,
            draw_low: low,
            draw_high: high,
            source,
        })
    }

    /// Number of sides.
    #[must_use]
    pub fn sides(&self) -> i64 {
        self.sides
    }

    /// Inclusive range raw values are drawn from.
    #[must_use]
    pub fn draw_range(&self) -> (i64, i64) {
        (self.draw_low, self.draw_high)
    }

    /// Check whether two dice draw from the same source.
    #[must_use]
    pub fn shares_source_with(&self, other: &Die) -> bool {
        Rc::ptr_eq(&self.source, &other.source)
    }

    /// Roll the die. Always returns a value in `[1, sides]`.
    pub fn roll(&self) -> i64 {
        let raw = self.source.borrow_mut().next(self.draw_low, self.draw_high);
        let face = raw.rem_euclid(self.sides) + 1;
        trace!(raw, face, sides = self.sides, "die rolled");
        face
    }
}

impl fmt::Debug for Die {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Die")
            .field("sides", &self.sides)
            .field("draw_low", &self.draw_low)
            .field("draw_high", &self.draw_high)
            .finish_non_exhaustive()
    }
}
