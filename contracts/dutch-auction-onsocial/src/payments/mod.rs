//! Payment rail: seller payouts, buyer refunds, and the proceeds fallback
//! for payouts that bounce.

mod methods;
mod proceeds;

pub use proceeds::{NearPaymentRail, ProceedsLedger};

use near_sdk::AccountId;

use crate::AuctionError;

pub trait PaymentRail {
    /// Delivers `amount` of the buyer's attached payment to `to`.
    fn pay(&mut self, from: &AccountId, to: &AccountId, amount: u128) -> Result<(), AuctionError>;

    /// Returns unused payment to the buyer. Only called once the sale is committed.
    fn refund(&mut self, to: &AccountId, amount: u128);
}
