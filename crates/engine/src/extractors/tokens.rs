//! Extractors that capture a single token from a fixed shape or vocabulary.

use std::sync::LazyLock;

use regex::Regex;

use super::compile;
use crate::{Currency, ExpenseDate, ExpenseStatus, PaymentMethod, util::normalize_key};

pub(super) static DATE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"\b(\d{2})/(\d{2})/(\d{4})\b"));
pub(super) static INSTALLMENTS: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)(?:\bem\s+)?\b(\d+)x\b"));

static CATEGORY: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)\b(?:no|em|com|para)\s+(\p{L}\w*)"));
static PAYMENT_METHOD: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"(?i)\b(?:paguei|pago)\s+(?:com|em|no|na)\s+(?:(?:o|a)\s+)?(?:cart[ãa]o\s+(?:de\s+)?)?(d[ée]bito|cr[ée]dito|pix|dinheiro|transfer[êe]ncia\s+banc[áa]ria)\b",
    )
});
static CURRENCY: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)\b(BRL|USD|EUR)\b"));
static STATUS: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)\b(pendente|a\s+pagar|agendad[oa])\b"));

/// First word after a category cue, lower-cased.
///
/// The word must start with a letter, so `em 20/05/2024` is not a category.
#[must_use]
pub fn category(text: &str) -> Option<String> {
    CATEGORY
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_lowercase())
}

/// First `dd/mm/yyyy` token. Calendar correctness is not checked.
#[must_use]
pub fn date(text: &str) -> Option<ExpenseDate> {
    DATE.find_iter(text)
        .find_map(|m| ExpenseDate::parse(m.as_str()))
}

#[must_use]
pub fn payment_method(text: &str) -> Option<PaymentMethod> {
    let caps = PAYMENT_METHOD.captures(text)?;
    let key = normalize_key(caps.get(1)?.as_str())?;
    PaymentMethod::from_key(&key)
}

/// Installment count from the first `Nx` token.
#[must_use]
pub fn installments(text: &str) -> Option<u32> {
    INSTALLMENTS
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

#[must_use]
pub fn currency(text: &str) -> Option<Currency> {
    CURRENCY
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| Currency::try_from(m.as_str()).ok())
}

#[must_use]
pub fn status(text: &str) -> Option<ExpenseStatus> {
    let caps = STATUS.captures(text)?;
    let key = normalize_key(caps.get(1)?.as_str())?;
    match key.as_str() {
        "pendente" | "a pagar" => Some(ExpenseStatus::Pendente),
        "agendado" | "agendada" => Some(ExpenseStatus::Agendado),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_is_first_word_after_cue() {
        assert_eq!(category("Gastei R$20 no mercado").as_deref(), Some("mercado"));
        assert_eq!(
            category("Despesa de R$150 com Combustível").as_deref(),
            Some("combustível")
        );
        assert_eq!(category("Almoço R$35 hoje"), None);
    }

    #[test]
    fn category_skips_numeric_words() {
        assert_eq!(
            category("R$50 em 20/05/2024 para farmácia").as_deref(),
            Some("farmácia")
        );
    }

    #[test]
    fn date_matches_shape_only() {
        assert_eq!(date("pago em 20/05/2024."), Some(ExpenseDate::new(20, 5, 2024)));
        assert_eq!(date("em 99/99/2024"), Some(ExpenseDate::new(99, 99, 2024)));
        assert_eq!(date("em 2024-05-20"), None);
    }

    #[test]
    fn payment_method_vocabulary() {
        assert_eq!(
            payment_method("paguei com débito"),
            Some(PaymentMethod::Debito)
        );
        assert_eq!(payment_method("pago em dinheiro"), Some(PaymentMethod::Dinheiro));
        assert_eq!(payment_method("Paguei com PIX"), Some(PaymentMethod::Pix));
        assert_eq!(
            payment_method("paguei no cartão de crédito"),
            Some(PaymentMethod::Credito)
        );
        assert_eq!(
            payment_method("paguei com transferência bancária ontem"),
            Some(PaymentMethod::TransferenciaBancaria)
        );
    }

    #[test]
    fn payment_method_without_accents() {
        assert_eq!(payment_method("paguei com debito"), Some(PaymentMethod::Debito));
        assert_eq!(
            payment_method("pago com transferencia bancaria"),
            Some(PaymentMethod::TransferenciaBancaria)
        );
    }

    #[test]
    fn payment_method_needs_verb_cue() {
        assert_eq!(payment_method("no débito"), None);
        assert_eq!(payment_method("paguei com cheque"), None);
    }

    #[test]
    fn installments_count() {
        assert_eq!(installments("TV por R$2000 em 10x"), Some(10));
        assert_eq!(installments("R$90 3x no cartão"), Some(3));
        assert_eq!(installments("R$90 à vista"), None);
        assert_eq!(installments("3 x"), None);
    }

    #[test]
    fn currency_codes() {
        assert_eq!(currency("US$ 20 usd hotel"), Some(Currency::Usd));
        assert_eq!(currency("50 EUR jantar"), Some(Currency::Eur));
        assert_eq!(currency("R$20 no mercado"), None);
    }

    #[test]
    fn status_cues() {
        assert_eq!(status("conta de luz R$120 pendente"), Some(ExpenseStatus::Pendente));
        assert_eq!(status("R$80 a pagar dia 10"), Some(ExpenseStatus::Pendente));
        assert_eq!(status("boleto agendado R$300"), Some(ExpenseStatus::Agendado));
        assert_eq!(status("R$20 no mercado"), None);
    }
}
