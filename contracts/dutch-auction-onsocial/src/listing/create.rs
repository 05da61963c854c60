use crate::*;

#[near]
impl Contract {
    /// Lists an item the caller owns. No funds move.
    #[handle_result]
    pub fn list(
        &mut self,
        collection_id: String,
        token_id: String,
        price_floor: U128,
        price_ceiling: U128,
        start_time: u64,
        end_time: u64,
    ) -> Result<Listing, AuctionError> {
        let seller_id = env::predecessor_account_id();
        let listing = Listing {
            seller_id,
            collection_id,
            token_id,
            price_floor,
            price_ceiling,
            start_time,
            end_time,
        };
        self.internal_list(listing)
    }
}

impl Contract {
    pub(crate) fn internal_list(&mut self, listing: Listing) -> Result<Listing, AuctionError> {
        let replaced_seller_id = self
            .listings
            .list(&self.items, &self.config, listing.clone())?;
        events::emit_listing_created(&listing, replaced_seller_id.as_ref());
        Ok(listing)
    }
}
