//! Purchase and settlement of listings.

mod engine;
mod purchase;

pub use engine::settle;

use near_sdk::json_types::U128;
use near_sdk::{AccountId, near};

/// Outcome of a successful purchase.
#[near(serializers = [json])]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settlement {
    pub buyer_id: AccountId,
    pub seller_id: AccountId,
    pub collection_id: String,
    pub token_id: String,
    /// Amount delivered to the seller.
    pub price: U128,
    /// Part of the payment returned to the buyer.
    pub refund: U128,
}
