//! Ledger domain models and the session ledger itself.

#[allow(clippy::module_inception)]
pub mod ledger;
pub mod transaction;

pub use ledger::{Ledger, LedgerTotals, TransactionFilter};
pub use transaction::{Transaction, TransactionDraft, TransactionId, TransactionKind};
