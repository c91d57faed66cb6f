//! The error the engine can return.
//!
//! Only the amount is mandatory, so [`ParseError`] is raised exclusively when
//! no usable amount is found. Every other missing field is defaulted.
//!
//! The `Display` text is written for the person who sent the message: it is
//! shown back to them verbatim (see [`crate::reply::error_reply`]).
use thiserror::Error;

/// Failure to turn a message into an expense.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Valor não encontrado na mensagem.")]
    MissingAmount,
    #[error("Valor inválido: {0}")]
    InvalidAmount(String),
}
