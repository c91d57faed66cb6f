//! Expense extraction engine.
//!
//! Turns one free-text message such as
//! `"Gastei R$300 no Posto ABC para abastecer o carro, paguei com débito em 20/05/2024."`
//! into a typed [`ExpenseRecord`], or a [`ParseError`] when no amount can be
//! found.
//!
//! The engine is a pure function of the text and the processing date: it does
//! no I/O and keeps no state between calls.
//!
//! ```rust
//! use chrono::NaiveDate;
//!
//! let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
//! let record = engine::extract("Gastei R$20 no mercado", today).unwrap();
//! assert_eq!(record.amount.cents(), 2000);
//! assert_eq!(record.category, "mercado");
//! assert_eq!(record.date.to_string(), "01/06/2024");
//! ```

use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;

pub use currency::Currency;
pub use date::ExpenseDate;
pub use error::ParseError;
pub use extractors::Captures;
pub use money::Amount;
pub use record::{DEFAULT_CATEGORY, ExpenseRecord, ExpenseStatus, PaymentMethod};
pub use sheet::SheetRow;

mod assemble;
mod currency;
mod date;
mod error;
pub mod extractors;
mod money;
mod record;
pub mod reply;
mod sheet;
mod util;

/// Extracts an expense from `text`, using `today` when the message has no date.
///
/// # Errors
///
/// Returns [`ParseError`] when the message carries no usable amount.
pub fn extract(text: &str, today: NaiveDate) -> Result<ExpenseRecord, ParseError> {
    assemble::assemble(Captures::scan(text), today)
}

/// Source of the processing date used for messages without a date.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Clock {
    /// Host local time.
    #[default]
    Local,
    /// Current date in the given time zone.
    Tz(Tz),
    /// Always the same date.
    Fixed(NaiveDate),
}

impl Clock {
    #[must_use]
    pub fn today(self) -> NaiveDate {
        match self {
            Clock::Local => chrono::Local::now().date_naive(),
            Clock::Tz(tz) => Utc::now().with_timezone(&tz).date_naive(),
            Clock::Fixed(date) => date,
        }
    }
}

/// Extraction entry point for callers that want logging and a date source.
///
/// `Engine` is cheap to copy and can be shared freely between threads.
#[derive(Clone, Copy, Debug, Default)]
pub struct Engine {
    clock: Clock,
}

impl Engine {
    /// Return a builder for `Engine`.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    /// Extracts an expense, dating it with the engine's clock when needed.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] when the message carries no usable amount.
    /// The caller shows it to the user; re-running on the same text gives the
    /// same error.
    pub fn extract(&self, text: &str) -> Result<ExpenseRecord, ParseError> {
        match extract(text, self.clock.today()) {
            Ok(record) => {
                tracing::debug!(
                    "extracted expense: amount={} category={} date={} currency={}",
                    record.amount,
                    record.category,
                    record.date,
                    record.currency
                );
                Ok(record)
            }
            Err(err) => {
                tracing::warn!("could not extract expense: {err}");
                Err(err)
            }
        }
    }
}

/// The builder for `Engine`
#[derive(Default)]
pub struct EngineBuilder {
    clock: Clock,
}

impl EngineBuilder {
    /// Date source for messages without an explicit date.
    pub fn clock(mut self, clock: Clock) -> EngineBuilder {
        self.clock = clock;
        self
    }

    /// Use the current date in `tz`.
    pub fn timezone(self, tz: Tz) -> EngineBuilder {
        self.clock(Clock::Tz(tz))
    }

    /// Construct `Engine`
    pub fn build(self) -> Engine {
        Engine { clock: self.clock }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_dates_undated_messages() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        let engine = Engine::builder().clock(Clock::Fixed(date)).build();
        let record = engine.extract("Almoço R$35 hoje").unwrap();
        assert_eq!(record.date.to_string(), "31/01/2024");
    }

    #[test]
    fn explicit_date_wins_over_clock() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        let engine = Engine::builder().clock(Clock::Fixed(date)).build();
        let record = engine.extract("R$10 em 20/05/2024").unwrap();
        assert_eq!(record.date.to_string(), "20/05/2024");
    }

    #[test]
    fn engine_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Engine>();
    }

    #[test]
    fn timezone_clock_is_used() {
        let engine = Engine::builder().timezone(chrono_tz::America::Sao_Paulo).build();
        assert_eq!(engine.clock(), Clock::Tz(chrono_tz::America::Sao_Paulo));
    }
}
