//! Percentage rates.
//!
//! Rates arrive from users as whole-number percents (`12.0` means 12%). [`Rate`]
//! carries that unit in its type so evaluators never divide by 100 by hand.

use serde::{Deserialize, Serialize};

/// An annual rate expressed as a whole-number percent.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rate(f64);

impl Rate {
    /// Zero percent.
    pub const ZERO: Self = Self(0.0);

    /// Build a rate from a whole-number percent (`8.5` for 8.5%).
    pub const fn from_percent(percent: f64) -> Self {
        Self(percent)
    }

    /// The rate as a whole-number percent.
    pub const fn as_percent(self) -> f64 {
        self.0
    }

    /// The rate as a fraction (`0.085` for 8.5%).
    pub fn as_fraction(self) -> f64 {
        self.0 / 100.0
    }

    /// One-period growth (or discount) factor, `1 + r`.
    pub fn growth_factor(self) -> f64 {
        1.0 + self.as_fraction()
    }

    /// Capital Asset Pricing Model: `rf + beta * (rm - rf)`.
    pub fn capm(risk_free: Self, beta: f64, market_return: Self) -> Self {
        Self(risk_free.0 + beta * (market_return.0 - risk_free.0))
    }
}

impl std::ops::Sub for Rate {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl std::fmt::Display for Rate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "{:.*}%", p, self.0),
            None => write!(f, "{}%", self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_and_fraction() {
        let r = Rate::from_percent(12.0);
        assert_eq!(r.as_percent(), 12.0);
        assert!((r.as_fraction() - 0.12).abs() < 1e-15);
        assert!((r.growth_factor() - 1.12).abs() < 1e-15);
    }

    #[test]
    fn test_subtraction_stays_in_percent() {
        let spread = Rate::from_percent(12.0) - Rate::from_percent(8.0);
        assert_eq!(spread.as_percent(), 4.0);
        assert!((spread.as_fraction() - 0.04).abs() < 1e-15);
    }

    #[test]
    fn test_capm() {
        let coe = Rate::capm(Rate::from_percent(6.5), 1.0, Rate::from_percent(12.0));
        assert_eq!(coe.as_percent(), 12.0);

        let defensive = Rate::capm(Rate::from_percent(4.0), 0.5, Rate::from_percent(10.0));
        assert!((defensive.as_percent() - 7.0).abs() < 1e-12);
    }

    #[test]
    fn test_ordering() {
        assert!(Rate::from_percent(10.0) > Rate::from_percent(3.0));
        assert!(Rate::from_percent(f64::NAN).partial_cmp(&Rate::ZERO).is_none());
    }

    #[test]
    fn test_display() {
        assert_eq!(Rate::from_percent(12.5).to_string(), "12.5%");
        assert_eq!(format!("{:.2}", Rate::from_percent(12.0)), "12.00%");
    }

    #[test]
    fn test_serde_transparent() {
        let json = serde_json::to_string(&Rate::from_percent(8.5)).unwrap();
        assert_eq!(json, "8.5");
        let back: Rate = serde_json::from_str("8.5").unwrap();
        assert_eq!(back, Rate::from_percent(8.5));
    }
}
