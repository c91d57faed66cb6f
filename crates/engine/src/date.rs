use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Expense date as written in the message, `dd/mm/yyyy`.
///
/// The digit groups are kept as captured; `31/02/2024` is a valid
/// `ExpenseDate`. Use [`ExpenseDate::to_naive`] when a real calendar date is
/// needed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ExpenseDate {
    pub day: u8,
    pub month: u8,
    pub year: u16,
}

impl ExpenseDate {
    #[must_use]
    pub const fn new(day: u8, month: u8, year: u16) -> Self {
        Self { day, month, year }
    }

    /// Date used when the message carries none.
    #[must_use]
    pub fn from_naive(date: NaiveDate) -> Self {
        Self {
            // chrono guarantees day in 1..=31 and month in 1..=12
            day: date.day() as u8,
            month: date.month() as u8,
            year: u16::try_from(date.year()).unwrap_or_default(),
        }
    }

    /// Calendar date, if the captured digits describe one.
    #[must_use]
    pub fn to_naive(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(
            i32::from(self.year),
            u32::from(self.month),
            u32::from(self.day),
        )
    }

    /// Parses a `dd/mm/yyyy` token. Only the shape is checked.
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        let mut parts = token.trim().split('/');
        let day = parts.next()?;
        let month = parts.next()?;
        let year = parts.next()?;
        if parts.next().is_some() || day.len() != 2 || month.len() != 2 || year.len() != 4 {
            return None;
        }
        if !(day.chars().chain(month.chars()).chain(year.chars())).all(|c| c.is_ascii_digit()) {
            return None;
        }
        Some(Self {
            day: day.parse().ok()?,
            month: month.parse().ok()?,
            year: year.parse().ok()?,
        })
    }
}

impl fmt::Display for ExpenseDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}/{:04}", self.day, self.month, self.year)
    }
}

impl Serialize for ExpenseDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ExpenseDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        ExpenseDate::parse(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("expected dd/mm/yyyy, got {raw}")))
    }
}
