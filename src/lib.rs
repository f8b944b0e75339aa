#![doc(test(attr(deny(warnings))))]

//! Finance Core offers the in-memory ledger primitives that power a
//! session-scoped personal finance tracker: recording income and expense
//! transactions, deriving aggregate totals, and filtering entries for display.

pub mod errors;
pub mod format;
pub mod ledger;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Finance Core tracing initialized.");
    });
}
