//! Presentation-ready string helpers for ledger data.
//!
//! The core never touches view details; these helpers produce plain strings
//! that a presentation layer can place wherever it renders transactions and
//! totals.

use crate::ledger::{Transaction, TransactionFilter, TransactionKind};

/// Formats a monetary value with two decimal places.
pub fn amount(value: f64) -> String {
    format!("{value:.2}")
}

/// Formats a transaction's amount with its direction sign, e.g. `+5000.00`
/// for income and `-1500.00` for expense.
pub fn signed_amount(transaction: &Transaction) -> String {
    let sign = match transaction.kind {
        TransactionKind::Income => '+',
        TransactionKind::Expense => '-',
    };
    format!("{sign}{:.2}", transaction.amount)
}

/// Caption line combining a transaction's kind and creation date.
pub fn entry_line(transaction: &Transaction) -> String {
    format!("{} • {}", transaction.kind, transaction.date)
}

/// Copy shown when a listing comes back empty under the given filter.
pub fn empty_state_message(filter: TransactionFilter) -> &'static str {
    match filter {
        TransactionFilter::All => "No transactions yet. Add your first transaction to get started!",
        TransactionFilter::Income => "No income transactions found.",
        TransactionFilter::Expense => "No expense transactions found.",
    }
}
