//! Defaulting and validation: turns raw [`Captures`] into an [`ExpenseRecord`].

use chrono::NaiveDate;

use crate::{
    Amount, ExpenseDate, ExpenseRecord, ParseError, extractors::Captures, record::DEFAULT_CATEGORY,
};

/// Applies the field defaults and checks the amount.
///
/// The amount is the only mandatory field; everything else falls back to its
/// default. No cross-field checks are made.
pub(crate) fn assemble(captures: Captures<'_>, today: NaiveDate) -> Result<ExpenseRecord, ParseError> {
    let raw_amount = captures.amount.ok_or(ParseError::MissingAmount)?;
    let amount: Amount = raw_amount.parse()?;
    if !amount.is_positive() {
        return Err(ParseError::InvalidAmount(
            "o valor deve ser maior que zero".to_string(),
        ));
    }

    let installments_number = captures.installments.unwrap_or(0);

    Ok(ExpenseRecord {
        amount,
        category: captures
            .category
            .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
        date: captures
            .date
            .unwrap_or_else(|| ExpenseDate::from_naive(today)),
        description: captures.description,
        payment_method: captures.payment_method,
        installments_number,
        installment: installments_number > 1,
        location: captures.location,
        supplier: captures.supplier,
        currency: captures.currency.unwrap_or_default(),
        expense_status: captures.status.unwrap_or_default(),
        notes: None,
        tags: Vec::new(),
        geolocation: None,
        receipt_link: None,
        recurrence: None,
        budget_alignment: None,
    })
}
