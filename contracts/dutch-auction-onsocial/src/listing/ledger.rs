use crate::guards::{check_collection_id, check_token_id, hash_account_id, make_item_id};
use crate::registry::ItemRegistry;
use crate::*;

/// Keyed listing store. Handed to the settlement engine by `&mut`, which is
/// what serializes purchases of the same key.
#[near(serializers = [borsh])]
pub struct ListingLedger {
    listings: IterableMap<String, Listing>,
    by_seller: LookupMap<AccountId, IterableSet<String>>,
}

impl ListingLedger {
    pub fn new() -> Self {
        Self {
            listings: IterableMap::new(StorageKey::Listings),
            by_seller: LookupMap::new(StorageKey::ListingsBySeller),
        }
    }

    /// Validates `listing` against the registry and stores it.
    /// Returns the seller of a stale listing that was replaced, if any.
    pub fn list<R: ItemRegistry>(
        &mut self,
        registry: &R,
        config: &AuctionConfig,
        listing: Listing,
    ) -> Result<Option<AccountId>, AuctionError> {
        check_collection_id(&listing.collection_id, config.max_id_len)?;
        check_token_id(&listing.token_id, config.max_id_len)?;

        let owner = registry.owner_of(&listing.collection_id, &listing.token_id);
        if owner.as_ref() != Some(&listing.seller_id) {
            return Err(AuctionError::Unauthorized(
                "Only the item owner can list it".into(),
            ));
        }

        if listing.price_floor.0 >= listing.price_ceiling.0 {
            return Err(AuctionError::InvalidPrice);
        }
        if listing.end_time <= listing.start_time {
            return Err(AuctionError::InvalidWindow);
        }
        if let Some(max_window) = config.max_window_ns {
            if listing.end_time - listing.start_time > max_window {
                return Err(AuctionError::InvalidWindow);
            }
        }

        // The caller owns the item, so an existing listing by anyone else is stale.
        let replaced_seller_id = match self.get(&listing.collection_id, &listing.token_id) {
            Some(existing) if existing.seller_id == listing.seller_id => {
                return Err(AuctionError::AlreadyListed);
            }
            Some(existing) => Some(existing.seller_id.clone()),
            None => None,
        };

        if replaced_seller_id.is_some() {
            self.remove(&listing.collection_id, &listing.token_id);
        }
        self.insert(listing);
        Ok(replaced_seller_id)
    }

    pub fn get(&self, collection_id: &str, token_id: &str) -> Option<&Listing> {
        self.listings.get(&make_item_id(collection_id, token_id))
    }

    pub fn contains(&self, collection_id: &str, token_id: &str) -> bool {
        self.listings.contains_key(&make_item_id(collection_id, token_id))
    }

    pub fn len(&self) -> u32 {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Listing> {
        self.listings.values()
    }

    pub fn by_seller(&self, seller_id: &AccountId, start: usize, limit: usize) -> Vec<&Listing> {
        let Some(ids) = self.by_seller.get(seller_id) else {
            return vec![];
        };
        ids.iter()
            .skip(start)
            .take(limit)
            .filter_map(|id| self.listings.get(id))
            .collect()
    }

    pub fn count_by_seller(&self, seller_id: &AccountId) -> u32 {
        self.by_seller.get(seller_id).map(|ids| ids.len()).unwrap_or(0)
    }

    fn insert(&mut self, listing: Listing) {
        let listing_id = make_item_id(&listing.collection_id, &listing.token_id);
        let seller_id = listing.seller_id.clone();
        self.listings.insert(listing_id.clone(), listing);

        let mut ids = self.by_seller.remove(&seller_id).unwrap_or_else(|| {
            IterableSet::new(StorageKey::ListingsBySellerInner {
                account_id_hash: hash_account_id(&seller_id),
            })
        });
        ids.insert(listing_id);
        self.by_seller.insert(seller_id, ids);
    }

    /// Only the settlement engine and stale-listing replacement delete records.
    pub(crate) fn remove(&mut self, collection_id: &str, token_id: &str) -> Option<Listing> {
        let listing_id = make_item_id(collection_id, token_id);
        let listing = self.listings.remove(&listing_id)?;

        if let Some(mut ids) = self.by_seller.remove(&listing.seller_id) {
            ids.remove(&listing_id);
            if !ids.is_empty() {
                self.by_seller.insert(listing.seller_id.clone(), ids);
            }
        }
        Some(listing)
    }
}

impl Default for ListingLedger {
    fn default() -> Self {
        Self::new()
    }
}
