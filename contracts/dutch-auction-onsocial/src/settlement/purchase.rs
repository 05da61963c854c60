use super::{Settlement, settle};
use crate::*;

#[near]
impl Contract {
    /// Buys a listing with the attached deposit at the current block price.
    /// Any deposit above that price is refunded.
    #[payable]
    #[handle_result]
    pub fn buy(&mut self, collection_id: String, token_id: String) -> Result<Settlement, AuctionError> {
        let buyer_id = env::predecessor_account_id();
        let payment = env::attached_deposit().as_yoctonear();
        self.internal_buy(&buyer_id, &collection_id, &token_id, payment, env::block_timestamp())
    }
}

impl Contract {
    pub(crate) fn internal_buy(
        &mut self,
        buyer_id: &AccountId,
        collection_id: &str,
        token_id: &str,
        payment: u128,
        now: u64,
    ) -> Result<Settlement, AuctionError> {
        let mut rail = NearPaymentRail;
        let settlement = settle(
            &mut self.listings,
            &mut self.items,
            &mut rail,
            buyer_id,
            collection_id,
            token_id,
            payment,
            now,
        )?;
        events::emit_item_transferred(
            &settlement.seller_id,
            &settlement.buyer_id,
            &settlement.collection_id,
            &settlement.token_id,
        );
        events::emit_listing_purchased(&settlement);
        Ok(settlement)
    }
}
