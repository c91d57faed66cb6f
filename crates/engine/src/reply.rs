//! Texts sent back to the person who submitted the expense.

use crate::{ExpenseRecord, ExpenseStatus, ParseError};

/// Format hint appended to every error reply.
pub const FORMAT_HINT: &str = "Envie no formato: 'Gastei R$50 no mercado hoje'";

pub const START_TEXT: &str = "Olá! Envie uma despesa no formato: 'Gastei R$20 no mercado'.";

pub const HELP_TEXT: &str = "\
✨ Como usar:
Envie suas despesas como:
- 'Gastei R$20 no mercado'
- 'Despesa de R$150 com combustível'
- 'Almoço R$35 hoje'
- 'Gastei R$300 no Posto ABC para abastecer o carro, paguei com débito em 20/05/2024'
- 'TV R$2000 em 10x no crédito'

📝 Formato aceito:
Valor | Categoria | Data (opcional, dd/mm/aaaa)
Opcionais: descrição (para/sobre), pagamento (paguei com débito, crédito, pix, dinheiro, \
transferência bancária), parcelas (3x), local/fornecedor (no/na), moeda (BRL, USD, EUR)";

/// Confirmation shown after a successful extraction.
#[must_use]
pub fn confirmation(record: &ExpenseRecord) -> String {
    let mut text = format!(
        "💰 Despesa Registrada!\nValor: {}{}\nCategoria: {}\nData: {}",
        record.currency.symbol(),
        record.amount,
        title_case(&record.category),
        record.date
    );

    if let Some(description) = &record.description {
        text.push_str(&format!("\nDescrição: {description}"));
    }
    if let Some(method) = record.payment_method {
        text.push_str(&format!("\nPagamento: {}", title_case(method.label())));
    }
    if record.installment {
        text.push_str(&format!("\nParcelas: {}x", record.installments_number));
    }
    if let Some(location) = &record.location {
        text.push_str(&format!("\nLocal: {location}"));
    }
    if let Some(supplier) = &record.supplier {
        text.push_str(&format!("\nFornecedor: {supplier}"));
    }
    if record.expense_status != ExpenseStatus::Pago {
        text.push_str(&format!("\nStatus: {}", title_case(record.expense_status.label())));
    }
    text
}

/// Reply for a message that could not be turned into an expense.
#[must_use]
pub fn error_reply(err: &ParseError) -> String {
    format!("❌ Erro: {err}\n{FORMAT_HINT}")
}

fn title_case(value: &str) -> String {
    value
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
