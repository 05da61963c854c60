use near_sdk::json_types::U128;
use near_sdk::{AccountId, near};

/// Sellable offer for exactly one (collection, item) pair. Immutable once stored.
#[near(serializers = [borsh, json])]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Listing {
    pub seller_id: AccountId,
    pub collection_id: String,
    pub token_id: String,
    /// yoctoNEAR; price at `start_time`.
    pub price_floor: U128,
    /// yoctoNEAR; price at `end_time`.
    pub price_ceiling: U128,
    /// Block timestamp (ns).
    pub start_time: u64,
    /// Block timestamp (ns); inclusive.
    pub end_time: u64,
}

impl Listing {
    pub fn quote_at(&self, now: u64) -> Result<u128, crate::AuctionError> {
        crate::pricing::quote(
            self.price_floor.0,
            self.price_ceiling.0,
            self.start_time,
            self.end_time,
            now,
        )
    }
}
