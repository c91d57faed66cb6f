use std::{ops::Range, sync::LazyLock};

use regex::{Match, Regex};

use super::{
    compile,
    tokens::{DATE, INSTALLMENTS},
};

/// A whole numeric run, separators included (`1.234,56`).
static NUMBER: LazyLock<Regex> = LazyLock::new(|| compile(r"\d+(?:[.,]\d+)*"));
static CUE_BEFORE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)(?:R\$|\breais|\brs)\s*$"));
static CUE_AFTER: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)^\s*(?:reais|rs)\b"));

/// Finds the amount token.
///
/// Precedence, first hit wins:
/// 1. the earliest number carrying a currency cue (`R$20`, `20 reais`);
/// 2. the first bare number.
///
/// Numbers glued to letters (`abc12`, `12kg`), or that belong to a
/// `dd/mm/yyyy` date or an `Nx` installments token, are never amounts.
///
/// The first separator is the decimal point; anything from a second
/// separator on is dropped (`1.234,56` yields `1.234`).
#[must_use]
pub fn amount(text: &str) -> Option<&str> {
    let reserved: Vec<Range<usize>> = DATE
        .find_iter(text)
        .chain(INSTALLMENTS.find_iter(text))
        .map(|m| m.range())
        .collect();

    let candidates: Vec<Match<'_>> = NUMBER
        .find_iter(text)
        .filter(|m| {
            !reserved
                .iter()
                .any(|r| r.start < m.end() && m.start() < r.end)
        })
        .filter(|m| standalone(text, m))
        .collect();

    let chosen = candidates
        .iter()
        .find(|m| CUE_BEFORE.is_match(&text[..m.start()]) || CUE_AFTER.is_match(&text[m.end()..]))
        .or_else(|| candidates.first())?;

    Some(decimal_part(chosen.as_str()))
}

fn standalone(text: &str, m: &Match<'_>) -> bool {
    let before = text[..m.start()].chars().next_back();
    let after = text[m.end()..].chars().next();
    !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
}

fn decimal_part(token: &str) -> &str {
    let second_separator = token
        .match_indices(['.', ','])
        .nth(1)
        .map_or(token.len(), |(idx, _)| idx);
    &token[..second_separator]
}
