//! Item ownership authority.
//!
//! Settlement and listing only reach ownership through [`ItemRegistry`]; the
//! contract binds it to the in-contract [`ItemLedger`].

mod ledger;
mod methods;

pub use ledger::ItemLedger;

use near_sdk::AccountId;

use crate::AuctionError;

pub trait ItemRegistry {
    /// Current holder, or `None` for an unknown item.
    fn owner_of(&self, collection_id: &str, token_id: &str) -> Option<AccountId>;

    /// Moves the item from `from` to `to`. Fails without side effects when
    /// `from` is not the current holder.
    fn transfer(
        &mut self,
        collection_id: &str,
        token_id: &str,
        from: &AccountId,
        to: &AccountId,
    ) -> Result<(), AuctionError>;
}
