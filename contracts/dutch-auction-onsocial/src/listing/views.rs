use crate::*;

#[near]
impl Contract {
    pub fn get_listing(&self, collection_id: String, token_id: String) -> Option<Listing> {
        self.listings.get(&collection_id, &token_id).cloned()
    }

    pub fn get_listing_count(&self) -> u32 {
        self.listings.len()
    }

    pub fn get_listings(&self, from_index: Option<u32>, limit: Option<u32>) -> Vec<Listing> {
        let start = from_index.unwrap_or(0) as usize;
        let limit = self.config.page_limit(limit);

        self.listings
            .iter()
            .skip(start)
            .take(limit)
            .cloned()
            .collect()
    }

    pub fn get_listings_by_seller(
        &self,
        seller_id: AccountId,
        from_index: Option<u32>,
        limit: Option<u32>,
    ) -> Vec<Listing> {
        let start = from_index.unwrap_or(0) as usize;
        let limit = self.config.page_limit(limit);

        self.listings
            .by_seller(&seller_id, start, limit)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn get_listing_count_by_seller(&self, seller_id: AccountId) -> u32 {
        self.listings.count_by_seller(&seller_id)
    }
}
