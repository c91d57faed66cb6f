//! The structured expense produced from one message.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Amount, Currency, ExpenseDate};

/// Category used when the message has no category cue.
pub const DEFAULT_CATEGORY: &str = "outros";

/// How the expense was paid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[serde(rename = "débito")]
    Debito,
    #[serde(rename = "crédito")]
    Credito,
    #[serde(rename = "pix")]
    Pix,
    #[serde(rename = "dinheiro")]
    Dinheiro,
    #[serde(rename = "transferência bancária")]
    TransferenciaBancaria,
}

impl PaymentMethod {
    /// Lower-case Portuguese label, as users write it.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            PaymentMethod::Debito => "débito",
            PaymentMethod::Credito => "crédito",
            PaymentMethod::Pix => "pix",
            PaymentMethod::Dinheiro => "dinheiro",
            PaymentMethod::TransferenciaBancaria => "transferência bancária",
        }
    }

    /// Maps an accent-folded, lower-case key (see `util::normalize_key`).
    pub(crate) fn from_key(key: &str) -> Option<Self> {
        match key {
            "debito" => Some(PaymentMethod::Debito),
            "credito" => Some(PaymentMethod::Credito),
            "pix" => Some(PaymentMethod::Pix),
            "dinheiro" => Some(PaymentMethod::Dinheiro),
            "transferencia bancaria" => Some(PaymentMethod::TransferenciaBancaria),
            _ => None,
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Settlement state of the expense.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseStatus {
    #[default]
    Pago,
    Pendente,
    Agendado,
}

impl ExpenseStatus {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            ExpenseStatus::Pago => "pago",
            ExpenseStatus::Pendente => "pendente",
            ExpenseStatus::Agendado => "agendado",
        }
    }
}

impl fmt::Display for ExpenseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One expense, as extracted from a single message.
///
/// `amount` is always positive. Optional fields are `None` when the message
/// did not mention them; they are never empty strings.
///
/// `notes`, `tags`, `geolocation`, `receipt_link`, `recurrence` and
/// `budget_alignment` are filled in later by the user and are always empty
/// right after extraction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    pub amount: Amount,
    pub category: String,
    pub date: ExpenseDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<PaymentMethod>,
    pub installments_number: u32,
    pub installment: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplier: Option<String>,
    pub currency: Currency,
    pub expense_status: ExpenseStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geolocation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receipt_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurrence: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget_alignment: Option<String>,
}
