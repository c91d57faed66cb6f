//! Extractors that capture a run of free text after a cue word.
//!
//! A span starts right after its cue and stops at the next cue word of any
//! field, at a clause break (`,` or `;`), or at the end of the message.

use std::sync::LazyLock;

use regex::Regex;

use super::compile;
use crate::util::clean_span;

static SPAN_END: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)[,;]|\b(?:no|na|em|com|para|sobre|descri[çc][ãa]o)\b"));

static DESCRIPTION_CUE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)\b(?:para|sobre|descri[çc][ãa]o:?|em)\s+"));
static LOCATION_CUE: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)\b(?:no|em)\s+"));
static SUPPLIER_CUE: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)\b(?:na|no)\s+"));

/// Free-text purpose of the expense (`para abastecer o carro`).
#[must_use]
pub fn description(text: &str) -> Option<String> {
    first_span(&DESCRIPTION_CUE, text, |_| true)
}

/// Where the expense happened. Must start with a letter.
#[must_use]
pub fn location(text: &str) -> Option<String> {
    first_span(&LOCATION_CUE, text, starts_with_letter)
}

/// Who was paid. Must start with a letter.
///
/// Shares the `no` cue with [`location`]; both may return the same span.
#[must_use]
pub fn supplier(text: &str) -> Option<String> {
    first_span(&SUPPLIER_CUE, text, starts_with_letter)
}

fn starts_with_letter(span: &str) -> bool {
    span.chars().next().is_some_and(char::is_alphabetic)
}

fn first_span(cue: &Regex, text: &str, accept: impl Fn(&str) -> bool) -> Option<String> {
    cue.find_iter(text).find_map(|m| {
        let rest = &text[m.end()..];
        let end = SPAN_END.find(rest).map_or(rest.len(), |stop| stop.start());
        clean_span(&rest[..end]).filter(|span| accept(span))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: &str = "Gastei R$300 no Posto ABC para abastecer o carro com combustível comum, paguei com débito em 20/05/2024.";

    #[test]
    fn description_stops_at_next_cue() {
        assert_eq!(description(FULL).as_deref(), Some("abastecer o carro"));
        assert_eq!(
            description("R$45 sobre o presente da Ana").as_deref(),
            Some("o presente da Ana")
        );
        assert_eq!(
            description("R$10 descrição: café da manhã").as_deref(),
            Some("café da manhã")
        );
    }

    #[test]
    fn description_absent_without_cue() {
        assert_eq!(description("Almoço R$35 hoje"), None);
    }

    #[test]
    fn location_and_supplier_share_span() {
        assert_eq!(location(FULL).as_deref(), Some("Posto ABC"));
        assert_eq!(supplier(FULL).as_deref(), Some("Posto ABC"));
    }

    #[test]
    fn supplier_uses_na_cue() {
        assert_eq!(
            supplier("R$12 na Padaria Central em Pinheiros").as_deref(),
            Some("Padaria Central")
        );
        assert_eq!(
            location("R$12 na Padaria Central em Pinheiros").as_deref(),
            Some("Pinheiros")
        );
    }

    #[test]
    fn location_skips_dates() {
        assert_eq!(location("R$50 em 20/05/2024 no shopping").as_deref(), Some("shopping"));
        assert_eq!(location("R$50 em 20/05/2024"), None);
    }

    #[test]
    fn trailing_punctuation_is_trimmed() {
        assert_eq!(location("Gastei R$20 no mercado.").as_deref(), Some("mercado"));
    }
}
