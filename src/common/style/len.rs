use std::fmt;

use crate::common::unit::{EMUS_PER_CM, EMUS_PER_INCH, EMUS_PER_PT};

/// Length measurement with units.
///
/// Slide geometry is stored in EMUs (English Metric Units), the native unit
/// of DrawingML.
///
/// # Examples
///
/// ```rust
/// use deckbook::common::Length;
///
/// let length = Length::from_inches(1.0);
/// assert_eq!(length.emus(), 914_400);
/// assert_eq!(length.points(), 72.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Length {
    /// 1 inch = 914,400 EMUs, 1 cm = 360,000 EMUs, 1 pt = 12,700 EMUs
    emus: i64,
}

impl Length {
    pub const ZERO: Length = Length::from_emus(0);

    #[inline]
    pub const fn from_emus(emus: i64) -> Self {
        Self { emus }
    }

    #[inline]
    pub fn from_inches(inches: f64) -> Self {
        Self {
            emus: (inches * EMUS_PER_INCH as f64).round() as i64,
        }
    }

    #[inline]
    pub fn from_cm(cm: f64) -> Self {
        Self {
            emus: (cm * EMUS_PER_CM as f64).round() as i64,
        }
    }

    #[inline]
    pub fn from_points(points: f64) -> Self {
        Self {
            emus: (points * EMUS_PER_PT as f64).round() as i64,
        }
    }

    #[inline]
    pub const fn emus(&self) -> i64 {
        self.emus
    }

    #[inline]
    pub fn inches(&self) -> f64 {
        self.emus as f64 / EMUS_PER_INCH as f64
    }

    #[inline]
    pub fn cm(&self) -> f64 {
        self.emus as f64 / EMUS_PER_CM as f64
    }

    /// Convert to points (1/72 inch).
    #[inline]
    pub fn points(&self) -> f64 {
        self.emus as f64 / EMUS_PER_PT as f64
    }

    /// Whether the length is strictly greater than zero.
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.emus > 0
    }

    /// Split this length into `parts` pieces that sum back to the whole.
    ///
    /// The remainder EMUs go to the leading pieces, one each.
    pub fn split_even(&self, parts: usize) -> Vec<Length> {
        if parts == 0 {
            return Vec::new();
        }
        let base = self.emus / parts as i64;
        let remainder = (self.emus % parts as i64) as usize;
        (0..parts)
            .map(|i| Length::from_emus(base + i64::from(i < remainder)))
            .collect()
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}\"", self.inches())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_round_trip() {
        assert_eq!(Length::from_inches(2.0).inches(), 2.0);
        assert_eq!(Length::from_cm(2.54).emus(), 914_400);
        assert_eq!(Length::from_points(18.0).emus(), 228_600);
    }

    #[test]
    fn test_split_even_preserves_total() {
        let total = Length::from_emus(1_000_003);
        let parts = total.split_even(4);
        assert_eq!(parts.len(), 4);
        assert_eq!(parts.iter().map(Length::emus).sum::<i64>(), 1_000_003);
        assert_eq!(parts[0].emus(), 250_001);
        assert_eq!(parts[3].emus(), 250_000);
        assert!(total.split_even(0).is_empty());
    }

    #[test]
    fn test_display_in_inches() {
        assert_eq!(Length::from_inches(1.5).to_string(), "1.50\"");
    }
}
