use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::LedgerError;

use super::transaction::{Transaction, TransactionDraft, TransactionId, TransactionKind};

/// View-selection criterion restricting which transactions are listed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransactionFilter {
    #[default]
    All,
    Income,
    Expense,
}

impl TransactionFilter {
    pub fn matches(&self, transaction: &Transaction) -> bool {
        match self {
            TransactionFilter::All => true,
            TransactionFilter::Income => transaction.kind == TransactionKind::Income,
            TransactionFilter::Expense => transaction.kind == TransactionKind::Expense,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TransactionFilter::All => "all",
            TransactionFilter::Income => "income",
            TransactionFilter::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TransactionFilter {
    type Err = LedgerError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        if value.eq_ignore_ascii_case("all") {
            Ok(TransactionFilter::All)
        } else {
            value.parse::<TransactionKind>().map(Into::into)
        }
    }
}

impl From<TransactionKind> for TransactionFilter {
    fn from(kind: TransactionKind) -> Self {
        match kind {
            TransactionKind::Income => TransactionFilter::Income,
            TransactionKind::Expense => TransactionFilter::Expense,
        }
    }
}

/// Aggregate income, expense, and net balance derived from a ledger.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct LedgerTotals {
    pub income: f64,
    pub expense: f64,
    pub net: f64,
}

/// Session-scoped collection of transactions plus the active list filter.
///
/// The ledger owns its transactions exclusively and hands out either borrows
/// or copies, so the id-uniqueness and validation invariants cannot be broken
/// from outside.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ledger {
    pub id: Uuid,
    pub name: String,
    transactions: Vec<Transaction>,
    filter: TransactionFilter,
    next_id: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Ledger {
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            transactions: Vec::new(),
            filter: TransactionFilter::default(),
            next_id: 1,
            created_at: now,
            updated_at: now,
        }
    }

    /// Records a new transaction and returns a copy of the created record.
    ///
    /// The ledger assigns the next id and stamps today's calendar date; both
    /// are immutable for the rest of the transaction's life.
    pub fn add(&mut self, draft: TransactionDraft) -> Transaction {
        let id = self.next_transaction_id();
        let transaction = draft.into_transaction(id, Local::now().date_naive());
        self.transactions.push(transaction.clone());
        self.touch();
        transaction
    }

    /// Replaces the description, amount, and kind of the transaction
    /// identified by `id`, preserving its id and original creation date.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::TransactionNotFound`] when no transaction has
    /// that id; the ledger is left unchanged.
    pub fn update(
        &mut self,
        id: TransactionId,
        draft: TransactionDraft,
    ) -> Result<Transaction, LedgerError> {
        let transaction = self
            .transactions
            .iter_mut()
            .find(|transaction| transaction.id == id)
            .ok_or(LedgerError::TransactionNotFound(id))?;
        draft.apply_to(transaction);
        let updated = transaction.clone();
        self.touch();
        Ok(updated)
    }

    /// Removes the transaction identified by `id`, returning the removed
    /// record. Remaining transactions keep their ids and relative order.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::TransactionNotFound`] when no transaction has
    /// that id; the ledger is left unchanged.
    pub fn remove(&mut self, id: TransactionId) -> Result<Transaction, LedgerError> {
        let index = self
            .transactions
            .iter()
            .position(|transaction| transaction.id == id)
            .ok_or(LedgerError::TransactionNotFound(id))?;
        let removed = self.transactions.remove(index);
        self.touch();
        Ok(removed)
    }

    /// Looks up a transaction by id, without side effects. The presentation
    /// layer uses this to pre-populate an edit form.
    pub fn transaction(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions
            .iter()
            .find(|transaction| transaction.id == id)
    }

    /// Returns the transactions matching `filter`, most recently created
    /// first (descending id order).
    pub fn list(&self, filter: TransactionFilter) -> Vec<&Transaction> {
        let mut entries: Vec<&Transaction> = self
            .transactions
            .iter()
            .filter(|transaction| filter.matches(transaction))
            .collect();
        entries.sort_by(|a, b| b.id.cmp(&a.id));
        entries
    }

    /// Returns the transactions matching the session's active filter.
    pub fn list_active(&self) -> Vec<&Transaction> {
        self.list(self.filter)
    }

    /// Computes aggregate totals by folding over the current transactions.
    /// Recomputed from scratch on every call; n stays small in practice.
    pub fn totals(&self) -> LedgerTotals {
        let mut totals = LedgerTotals::default();
        for transaction in &self.transactions {
            match transaction.kind {
                TransactionKind::Income => totals.income += transaction.amount,
                TransactionKind::Expense => totals.expense += transaction.amount,
            }
        }
        totals.net = totals.income - totals.expense;
        totals
    }

    /// The session's active list filter. Changing it is view state, so it
    /// does not count as a ledger mutation.
    pub fn filter(&self) -> TransactionFilter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: TransactionFilter) {
        self.filter = filter;
    }

    /// Iterates over all transactions in insertion order.
    pub fn transactions(&self) -> impl Iterator<Item = &Transaction> {
        self.transactions.iter()
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    fn next_transaction_id(&mut self) -> TransactionId {
        let id = TransactionId(self.next_id);
        self.next_id += 1;
        id
    }
}
