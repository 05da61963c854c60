//! Listing ledger: at most one active listing per (collection, item).

mod create;
mod ledger;
pub mod types;
mod views;

pub use ledger::ListingLedger;
pub use types::*;
