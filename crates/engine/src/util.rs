//! Internal text helpers shared by the extractors.
//!
//! These are **not** part of the public API.

use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

/// Lower-cases, strips accents and collapses non-alphanumerics to one space.
///
/// `"Transferência  Bancária"` becomes `"transferencia bancaria"`.
pub(crate) fn normalize_key(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    let mut out = String::new();
    let mut prev_space = false;
    for ch in trimmed.nfkd() {
        if is_combining_mark(ch) {
            continue;
        }
        if ch.is_alphanumeric() {
            for lower in ch.to_lowercase() {
                out.push(lower);
            }
            prev_space = false;
        } else if !out.is_empty() && !prev_space {
            out.push(' ');
            prev_space = true;
        }
    }
    let normalized = out.trim();
    if normalized.is_empty() {
        None
    } else {
        Some(normalized.to_string())
    }
}

/// Trims whitespace and trailing sentence punctuation; empty spans are absent.
pub(crate) fn clean_span(value: &str) -> Option<String> {
    let cleaned = value
        .trim()
        .trim_end_matches([',', '.', ';', ':', '!', '?'])
        .trim_end();
    (!cleaned.is_empty()).then(|| cleaned.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_key_folds_accents_and_spacing() {
        assert_eq!(
            normalize_key("Transferência   Bancária").as_deref(),
            Some("transferencia bancaria")
        );
        assert_eq!(normalize_key("DÉBITO").as_deref(), Some("debito"));
        assert_eq!(normalize_key("  ").as_deref(), None);
    }

    #[test]
    fn clean_span_strips_trailing_punctuation() {
        assert_eq!(clean_span(" Posto ABC ").as_deref(), Some("Posto ABC"));
        assert_eq!(clean_span("combustível comum,").as_deref(), Some("combustível comum"));
        assert_eq!(clean_span(" . ").as_deref(), None);
    }
}
