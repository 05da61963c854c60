use near_sdk::json_types::U128;
use near_sdk::store::{IterableMap, IterableSet, LookupMap};
use near_sdk::{AccountId, BorshStorageKey, Gas, NearToken, PanicOnDefault, Promise, env, near};

pub mod constants;
mod errors;
mod guards;

mod config;
mod events;

mod listing;
pub mod pricing;
mod payments;
mod registry;
mod settlement;

mod admin;
mod upgrade;


pub use config::AuctionConfig;
pub use constants::*;
pub use errors::AuctionError;
pub use listing::{Listing, ListingLedger};
pub use payments::{NearPaymentRail, PaymentRail, ProceedsLedger};
pub use pricing::quote;
pub use registry::{ItemLedger, ItemRegistry};
pub use settlement::{Settlement, settle};

#[near]
#[derive(BorshStorageKey)]
pub enum StorageKey {
    Listings,
    ListingsBySeller,
    ListingsBySellerInner { account_id_hash: Vec<u8> },
    ItemOwners,
    Proceeds,
}

#[near(
    contract_state,
    contract_metadata(
        version = "0.1.0",
        link = "https://github.com/OnSocial-Labs/onsocial-protocol",
        standard(standard = "nep297", version = "1.0.0"),
    )
)]
#[derive(PanicOnDefault)]
pub struct Contract {
    pub version: String,

    pub owner_id: AccountId,
    pub config: AuctionConfig,

    pub listings: ListingLedger,
    // Ownership authority consulted by `list` and `buy`; never cached in listings.
    pub items: ItemLedger,
    pub proceeds: ProceedsLedger,
}
