use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::ParseError;

/// Largest number of fractional digits an `i64` mantissa can carry.
const MAX_SCALE: u32 = 18;

/// Expense amount as an exact decimal: `mantissa / 10^scale`.
///
/// Amounts are never stored as floating point; `as_major` exists only for
/// collaborators that expect a plain number. Trailing fractional zeros are
/// dropped on construction, so `20`, `20.0` and `20,00` compare equal.
///
/// # Examples
///
/// ```rust
/// use engine::Amount;
///
/// let amount: Amount = "20,5".parse().unwrap();
/// assert_eq!(amount.cents(), 2050);
/// assert_eq!(amount.to_string(), "20.50");
/// ```
///
/// The separator found is always the decimal point, and every fractional digit
/// is kept:
///
/// ```rust
/// use engine::Amount;
///
/// assert_eq!("1.234".parse::<Amount>().unwrap().to_string(), "1.234");
/// assert!("0,004".parse::<Amount>().unwrap().is_positive());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Amount {
    mantissa: i64,
    scale: u32,
}

impl Amount {
    /// Creates an amount from integer cents.
    #[must_use]
    pub fn from_cents(cents: i64) -> Self {
        Self::normalized(cents, 2)
    }

    fn normalized(mut mantissa: i64, mut scale: u32) -> Self {
        while scale > 0 && mantissa % 10 == 0 {
            mantissa /= 10;
            scale -= 1;
        }
        Self { mantissa, scale }
    }

    /// Digits of the amount without the decimal point.
    #[must_use]
    pub const fn mantissa(self) -> i64 {
        self.mantissa
    }

    /// Number of fractional digits.
    #[must_use]
    pub const fn scale(self) -> u32 {
        self.scale
    }

    /// Value in cents, rounded half-up when the amount is finer than a cent.
    #[must_use]
    pub fn cents(self) -> i64 {
        if self.scale <= 2 {
            self.mantissa * 10_i64.pow(2 - self.scale)
        } else {
            let divisor = 10_i64.pow(self.scale - 2);
            self.mantissa.saturating_add(divisor / 2) / divisor
        }
    }

    /// Returns `true` if the amount is strictly greater than zero.
    #[must_use]
    pub const fn is_positive(self) -> bool {
        self.mantissa > 0
    }

    /// Value in major units (`300.0` for `R$300`).
    #[must_use]
    pub fn as_major(self) -> f64 {
        self.mantissa as f64 / 10_f64.powi(self.scale as i32)
    }
}

impl fmt::Display for Amount {
    /// At least two decimals (`20.00`); finer amounts keep all their digits.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let divisor = 10_i64.pow(self.scale);
        let units = self.mantissa / divisor;
        let width = self.scale.max(2);
        let frac = (self.mantissa % divisor) * 10_i64.pow(width - self.scale);
        write!(f, "{units}.{frac:0width$}", width = width as usize)
    }
}

impl FromStr for Amount {
    type Err = ParseError;

    /// Parses a captured numeric token.
    ///
    /// Accepts `.` or `,` as the decimal separator (never as a thousands
    /// separator). Signs are not accepted: an expense amount is a magnitude.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseError::InvalidAmount(format!("\"{}\" não é um valor válido", s.trim()));
        let overflow = || ParseError::InvalidAmount("valor grande demais".to_string());

        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::MissingAmount);
        }

        let normalized = trimmed.replace(',', ".");
        let mut parts = normalized.split('.');
        let units_str = parts.next().ok_or_else(invalid)?;
        let frac_str = parts.next().unwrap_or("").trim_end_matches('0');
        if parts.next().is_some() {
            return Err(invalid());
        }

        if units_str.is_empty() || !units_str.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }
        if !frac_str.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }

        let scale = u32::try_from(frac_str.len()).map_err(|_| overflow())?;
        if scale > MAX_SCALE {
            return Err(overflow());
        }
        let units: i64 = units_str.parse().map_err(|_| overflow())?;
        let frac: i64 = if frac_str.is_empty() {
            0
        } else {
            frac_str.parse().map_err(|_| overflow())?
        };

        let mantissa = units
            .checked_mul(10_i64.pow(scale))
            .and_then(|v| v.checked_add(frac))
            .ok_or_else(overflow)?;

        Ok(Amount::normalized(mantissa, scale))
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_major())
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let major = f64::deserialize(deserializer)?;
        if !major.is_finite() || major < 0.0 {
            return Err(serde::de::Error::custom("amount must be a non-negative number"));
        }
        major
            .to_string()
            .parse()
            .map_err(|err: ParseError| serde::de::Error::custom(err.to_string()))
    }
}
