//! Money type for representing rupiah amounts
//!
//! Internally stores amounts in sen (hundredths of a rupiah, i64) to avoid
//! floating-point drift when summing. On the wire an amount is a plain JSON
//! number of rupiah, which is what the ledger blob holds.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Largest magnitude in rupiah, for user input and stored values alike
pub const MAX_RUPIAH: i64 = 90_000_000_000_000;

const MAX_SEN: i64 = MAX_RUPIAH * 100;

/// A monetary amount stored as sen (hundredths of a rupiah)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from sen
    ///
    /// # Examples
    /// ```
    /// use kas_kelas::models::Money;
    /// let amount = Money::from_sen(500_050); // Rp 5.000,50
    /// assert_eq!(amount.rupiah(), 5000);
    /// ```
    pub const fn from_sen(sen: i64) -> Self {
        Self(sen)
    }

    /// Largest amount that can be stored and read back
    pub const MAX: Self = Self(MAX_SEN);

    /// Create a Money amount from whole rupiah
    pub const fn from_rupiah(rupiah: i64) -> Self {
        Self(rupiah * 100)
    }

    /// Convert a floating-point rupiah value, rounding to the nearest sen
    ///
    /// Returns `None` for NaN, infinities and magnitudes that don't fit.
    pub fn from_rupiah_f64(value: f64) -> Option<Self> {
        if !value.is_finite() || value.abs() > MAX_RUPIAH as f64 {
            return None;
        }
        Some(Self((value * 100.0).round() as i64))
    }

    pub const fn zero() -> Self {
        Self(0)
    }

    pub const fn sen(&self) -> i64 {
        self.0
    }

    /// Whole rupiah portion (truncated toward zero)
    pub const fn rupiah(&self) -> i64 {
        self.0 / 100
    }

    /// Sen portion (0-99)
    pub const fn sen_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    pub const fn abs(&self) -> Self {
        Self(self.0.saturating_abs())
    }

    /// Amount as a floating-point rupiah value (for charts and exports)
    pub fn as_rupiah_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Parse a money amount from user input
    ///
    /// Accepts formats: "5000", "5000.50", "Rp 5000", "Rp5000", "-2000".
    /// A `.` is a decimal point here, as in a plain number field. Magnitudes
    /// above [`MAX_RUPIAH`] are out of range.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let original = s;
        let s = s.trim();

        let (negative, s) = match s.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, s),
        };

        let s = s
            .strip_prefix("Rp")
            .or_else(|| s.strip_prefix("rp"))
            .unwrap_or(s)
            .trim_start();

        if s.is_empty() || !s.chars().all(|c| c.is_ascii_digit() || c == '.') {
            return Err(MoneyParseError::InvalidFormat(original.to_string()));
        }

        let sen = match s.split_once('.') {
            Some((whole, frac)) => {
                if frac.contains('.') || whole.is_empty() {
                    return Err(MoneyParseError::InvalidFormat(original.to_string()));
                }
                let whole: i64 = whole
                    .parse()
                    .map_err(|_| MoneyParseError::InvalidFormat(original.to_string()))?;

                // Pad or truncate the fraction to 2 digits
                let frac_sen: i64 = match frac.len() {
                    0 => 0,
                    1 => frac.parse::<i64>().unwrap_or(0) * 10,
                    _ => frac[..2].parse().unwrap_or(0),
                };

                whole
                    .checked_mul(100)
                    .and_then(|w| w.checked_add(frac_sen))
                    .ok_or_else(|| MoneyParseError::OutOfRange(original.to_string()))?
            }
            None => s
                .parse::<i64>()
                .map_err(|_| MoneyParseError::InvalidFormat(original.to_string()))?
                .checked_mul(100)
                .ok_or_else(|| MoneyParseError::OutOfRange(original.to_string()))?,
        };

        if sen > MAX_SEN {
            return Err(MoneyParseError::OutOfRange(original.to_string()));
        }

        Ok(Self(if negative { -sen } else { sen }))
    }

    /// Format with a currency symbol, id-ID style ("Rp 1.234.567,50")
    ///
    /// The sen part is only shown when it is non-zero.
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        let whole = group_thousands(self.rupiah().unsigned_abs());
        if self.sen_part() == 0 {
            format!("{}{} {}", sign, symbol, whole)
        } else {
            format!("{}{} {},{:02}", sign, symbol, whole, self.sen_part())
        }
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with_symbol("Rp"))
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.sen_part() == 0 {
            serializer.serialize_i64(self.rupiah())
        } else {
            serializer.serialize_f64(self.as_rupiah_f64())
        }
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Money::from_rupiah_f64(value)
            .ok_or_else(|| serde::de::Error::custom(format!("amount out of range: {}", value)))
    }
}

// Arithmetic saturates at the i64 bounds instead of overflowing

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.saturating_neg())
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
    OutOfRange(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
            MoneyParseError::OutOfRange(s) => write!(f, "Amount out of range: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_sen() {
        let m = Money::from_sen(500_050);
        assert_eq!(m.sen(), 500_050);
        assert_eq!(m.rupiah(), 5000);
        assert_eq!(m.sen_part(), 50);
    }

    #[test]
    fn test_from_rupiah_f64() {
        assert_eq!(Money::from_rupiah_f64(5000.0), Some(Money::from_rupiah(5000)));
        assert_eq!(Money::from_rupiah_f64(0.125), Some(Money::from_sen(13)));
        assert_eq!(Money::from_rupiah_f64(f64::NAN), None);
        assert_eq!(Money::from_rupiah_f64(f64::INFINITY), None);
        assert_eq!(Money::from_rupiah_f64(1e300), None);
        assert_eq!(Money::from_rupiah_f64(MAX_RUPIAH as f64), Some(Money::MAX));
        assert_eq!(Money::from_rupiah_f64(MAX_RUPIAH as f64 + 1.0), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_rupiah(5000).to_string(), "Rp 5.000");
        assert_eq!(Money::from_rupiah(0).to_string(), "Rp 0");
        assert_eq!(Money::from_rupiah(-2000).to_string(), "-Rp 2.000");
        assert_eq!(Money::from_rupiah(1_234_567).to_string(), "Rp 1.234.567");
        assert_eq!(Money::from_sen(123_450).to_string(), "Rp 1.234,50");
        assert_eq!(Money::from_rupiah(999).to_string(), "Rp 999");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_rupiah(1000);
        let b = Money::from_rupiah(500);

        assert_eq!(a + b, Money::from_rupiah(1500));
        assert_eq!(a - b, Money::from_rupiah(500));
        assert_eq!(-a, Money::from_rupiah(-1000));
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("5000").unwrap(), Money::from_rupiah(5000));
        assert_eq!(Money::parse("Rp 5000").unwrap(), Money::from_rupiah(5000));
        assert_eq!(Money::parse("Rp5000").unwrap(), Money::from_rupiah(5000));
        assert_eq!(Money::parse("-2000").unwrap(), Money::from_rupiah(-2000));
        assert_eq!(Money::parse("10.5").unwrap(), Money::from_sen(1050));
        assert_eq!(Money::parse("0.05").unwrap(), Money::from_sen(5));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("").is_err());
        assert!(Money::parse("Rp").is_err());
        assert!(Money::parse("1.2.3").is_err());
        assert!(Money::parse("12a").is_err());
    }

    #[test]
    fn test_parse_range_matches_storage() {
        assert_eq!(Money::parse("90000000000000").unwrap(), Money::MAX);
        assert_eq!(
            Money::parse("90000000000000.01"),
            Err(MoneyParseError::OutOfRange("90000000000000.01".into()))
        );
        assert_eq!(
            Money::parse("100000000000000"),
            Err(MoneyParseError::OutOfRange("100000000000000".into()))
        );
        assert!(Money::parse("-100000000000000").is_err());
    }

    #[test]
    fn test_arithmetic_saturates() {
        let huge = Money::from_sen(i64::MAX - 1);
        assert_eq!(huge + Money::MAX, Money::from_sen(i64::MAX));
        assert_eq!(-huge - Money::MAX, Money::from_sen(i64::MIN));
        assert_eq!(Money::from_sen(i64::MIN).abs(), Money::from_sen(i64::MAX));
        assert_eq!(-Money::from_sen(i64::MIN), Money::from_sen(i64::MAX));
    }

    #[test]
    fn test_sum() {
        let total: Money = vec![
            Money::from_rupiah(100),
            Money::from_rupiah(200),
            Money::from_rupiah(300),
        ]
        .into_iter()
        .sum();
        assert_eq!(total, Money::from_rupiah(600));
    }

    #[test]
    fn test_serialization() {
        assert_eq!(serde_json::to_string(&Money::from_rupiah(5000)).unwrap(), "5000");
        assert_eq!(serde_json::to_string(&Money::from_sen(1050)).unwrap(), "10.5");

        let deserialized: Money = serde_json::from_str("5000").unwrap();
        assert_eq!(deserialized, Money::from_rupiah(5000));
        let deserialized: Money = serde_json::from_str("2500.75").unwrap();
        assert_eq!(deserialized, Money::from_sen(250_075));
    }
}
