use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::LedgerError;

/// Ledger-assigned transaction identifier.
///
/// Ids come from a monotonically increasing counter owned by the ledger, so
/// they are unique within a session and ordering by id matches creation order.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[serde(transparent)]
pub struct TransactionId(pub u64);

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Whether a transaction adds money to the session balance or takes it out.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn label(&self) -> &'static str {
        match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TransactionKind {
    type Err = LedgerError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        if value.eq_ignore_ascii_case("income") {
            Ok(TransactionKind::Income)
        } else if value.eq_ignore_ascii_case("expense") {
            Ok(TransactionKind::Expense)
        } else {
            Err(LedgerError::Validation(format!(
                "Unknown transaction kind: {value:?}"
            )))
        }
    }
}

/// A single recorded income or expense event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: TransactionId,
    pub description: String,
    pub amount: f64,
    pub kind: TransactionKind,
    pub date: NaiveDate,
}

/// Validated input for creating a transaction or replacing its editable
/// fields.
///
/// A draft can only be built through its validating constructors, so holding
/// one proves the description is non-empty after trimming and the amount is a
/// positive finite number. Ledger mutations accept drafts instead of raw
/// fields, which keeps validation strictly ahead of any state change.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionDraft {
    description: String,
    amount: f64,
    kind: TransactionKind,
}

impl TransactionDraft {
    /// Validates the given fields and builds a draft from them.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::Validation`] when the trimmed description is
    /// empty or the amount is not a positive finite number.
    pub fn new(
        description: &str,
        amount: f64,
        kind: TransactionKind,
    ) -> Result<Self, LedgerError> {
        let description = description.trim();
        if description.is_empty() {
            return Err(LedgerError::Validation(
                "Description must not be empty".into(),
            ));
        }
        if !amount.is_finite() || amount <= 0.0 {
            return Err(LedgerError::Validation(format!(
                "Amount must be a positive number, got {amount}"
            )));
        }
        Ok(Self {
            description: description.to_owned(),
            amount,
            kind,
        })
    }

    /// Builds a draft from raw form input, as submitted by a presentation
    /// layer: the amount arrives as user-entered text and the kind as the
    /// selected option's label.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::Validation`] when the amount text is not a
    /// number, the kind label is unknown, or the parsed fields fail the same
    /// checks as [`TransactionDraft::new`].
    pub fn parse(description: &str, amount: &str, kind: &str) -> Result<Self, LedgerError> {
        let amount: f64 = amount.trim().parse().map_err(|_| {
            LedgerError::Validation(format!("Amount is not a number: {amount:?}"))
        })?;
        let kind = kind.parse()?;
        Self::new(description, amount, kind)
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    /// Replaces the editable fields of `transaction`, leaving its id and
    /// creation date untouched.
    pub(crate) fn apply_to(self, transaction: &mut Transaction) {
        transaction.description = self.description;
        transaction.amount = self.amount;
        transaction.kind = self.kind;
    }

    pub(crate) fn into_transaction(self, id: TransactionId, date: NaiveDate) -> Transaction {
        Transaction {
            id,
            description: self.description,
            amount: self.amount,
            kind: self.kind,
            date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_parses_case_insensitively() {
        assert_eq!(
            " Income ".parse::<TransactionKind>().unwrap(),
            TransactionKind::Income
        );
        assert_eq!(
            "EXPENSE".parse::<TransactionKind>().unwrap(),
            TransactionKind::Expense
        );
    }

    #[test]
    fn kind_rejects_unknown_labels() {
        let err = "transfer"
            .parse::<TransactionKind>()
            .expect_err("unknown kind must fail");
        assert!(
            matches!(err, LedgerError::Validation(ref message) if message.contains("transfer")),
            "unexpected error: {err:?}"
        );
    }

    #[test]
    fn draft_trims_description() {
        let draft = TransactionDraft::new("  Salary  ", 5000.0, TransactionKind::Income)
            .expect("valid draft");
        assert_eq!(draft.description(), "Salary");
    }

    #[test]
    fn draft_rejects_blank_description() {
        let err = TransactionDraft::new("   ", 10.0, TransactionKind::Income)
            .expect_err("blank description must fail");
        assert!(matches!(err, LedgerError::Validation(_)));
    }

    #[test]
    fn draft_rejects_non_positive_and_non_finite_amounts() {
        for amount in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            let result = TransactionDraft::new("Rent", amount, TransactionKind::Expense);
            assert!(result.is_err(), "amount {amount} must be rejected");
        }
    }

    #[test]
    fn parse_accepts_raw_form_values() {
        let draft = TransactionDraft::parse("Groceries", " 42.50 ", "expense").expect("valid form");
        assert_eq!(draft.amount(), 42.5);
        assert_eq!(draft.kind(), TransactionKind::Expense);
    }

    #[test]
    fn parse_rejects_non_numeric_amount() {
        let err = TransactionDraft::parse("Groceries", "lots", "expense")
            .expect_err("non-numeric amount must fail");
        assert!(
            matches!(err, LedgerError::Validation(ref message) if message.contains("lots")),
            "unexpected error: {err:?}"
        );
    }
}
