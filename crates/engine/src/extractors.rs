//! Field extractors.
//!
//! Every extractor is a pure function over the **whole** message. Nothing is
//! consumed between extractors, so one span may satisfy several fields (the
//! same `no Posto ABC` feeds category, location and supplier). That overlap
//! is kept as is: [`Captures`] stores each result independently and nothing
//! downstream tries to disambiguate it.
//!
//! Cue words anchoring the matches:
//!
//! | field | cues |
//! |---|---|
//! | amount | `R$`, `reais`, `rs` (before or after the number) |
//! | category | `no`, `em`, `com`, `para` |
//! | description | `para`, `sobre`, `descrição`, `em` |
//! | location | `no`, `em` |
//! | supplier | `na`, `no` |
//! | payment method | `paguei`/`pago` + `com`/`em`/`no`/`na` |
//! | installments | `Nx`, optionally after `em` |
//! | currency | `BRL`, `USD`, `EUR` |
//! | status | `pendente`, `a pagar`, `agendado`/`agendada` |

use regex::Regex;

use crate::{Currency, ExpenseDate, ExpenseStatus, PaymentMethod};

mod amount;
mod spans;
mod tokens;

pub use amount::amount;
pub use spans::{description, location, supplier};
pub use tokens::{category, currency, date, installments, payment_method, status};

/// Raw output of every extractor for one message.
///
/// `None` means "no match"; defaults are applied later, during assembly.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Captures<'a> {
    /// Numeric token of the amount, separator untouched (`"1.234"`, `"20,5"`).
    pub amount: Option<&'a str>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub date: Option<ExpenseDate>,
    pub payment_method: Option<PaymentMethod>,
    pub installments: Option<u32>,
    pub location: Option<String>,
    pub supplier: Option<String>,
    pub currency: Option<Currency>,
    pub status: Option<ExpenseStatus>,
}

impl<'a> Captures<'a> {
    /// Runs all extractors against the same input.
    #[must_use]
    pub fn scan(text: &'a str) -> Self {
        Self {
            amount: amount(text),
            category: category(text),
            description: description(text),
            date: date(text),
            payment_method: payment_method(text),
            installments: installments(text),
            location: location(text),
            supplier: supplier(text),
            currency: currency(text),
            status: status(text),
        }
    }
}

/// Compiles one of the constant patterns below.
#[allow(clippy::expect_used)]
fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("extractor pattern must compile")
}
