// src/models/average_length.rs
use std::fmt;

/// Number of decimal places kept in an average.
pub const SCALE: u32 = 3;

const FACTOR: u128 = 10_u128.pow(SCALE);

/// A non-negative decimal with exactly three decimal places, stored as thousandths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct AverageLength {
    thousandths: u64,
}

impl AverageLength {
    #[inline]
    #[must_use]
    pub const fn from_thousandths(thousandths: u64) -> Self {
        Self { thousandths }
    }

    /// Divides `total` by `count`, rounding half-up to three decimal places.
    ///
    /// Returns `None` when `count` is zero.
    #[inline]
    #[must_use]
    pub fn from_ratio(total: u64, count: u64) -> Option<Self> {
        if count == 0 {
            return None;
        }
        let numerator = u128::from(total) * FACTOR;
        let divisor = u128::from(count);
        // floor(n / d + 1/2) == floor((2n + d) / 2d)
        let rounded = (numerator * 2 + divisor) / (divisor * 2);
        Some(Self {
            thousandths: u64::try_from(rounded).unwrap_or(u64::MAX),
        })
    }

    #[inline]
    #[must_use]
    pub const fn thousandths(&self) -> u64 {
        self.thousandths
    }

    #[inline]
    #[must_use]
    #[allow(clippy::cast_precision_loss, reason = "Precision not critical")]
    pub fn as_f64(&self) -> f64 {
        self.thousandths as f64 / 1000.0
    }
}

impl fmt::Display for AverageLength {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:03}", self.thousandths / 1000, self.thousandths % 1000)
    }
}
