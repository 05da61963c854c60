use super::ItemRegistry;
use crate::guards::make_item_id;
use crate::*;

#[near(serializers = [borsh])]
pub struct ItemLedger {
    owners: LookupMap<String, AccountId>,
}

impl ItemLedger {
    pub fn new() -> Self {
        Self {
            owners: LookupMap::new(StorageKey::ItemOwners),
        }
    }

    pub(crate) fn register(
        &mut self,
        collection_id: &str,
        token_id: &str,
        owner_id: AccountId,
    ) -> Result<(), AuctionError> {
        let item_id = make_item_id(collection_id, token_id);
        if self.owners.contains_key(&item_id) {
            return Err(AuctionError::InvalidInput("Item already registered".into()));
        }
        self.owners.insert(item_id, owner_id);
        Ok(())
    }
}

impl Default for ItemLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemRegistry for ItemLedger {
    fn owner_of(&self, collection_id: &str, token_id: &str) -> Option<AccountId> {
        self.owners.get(&make_item_id(collection_id, token_id)).cloned()
    }

    fn transfer(
        &mut self,
        collection_id: &str,
        token_id: &str,
        from: &AccountId,
        to: &AccountId,
    ) -> Result<(), AuctionError> {
        let item_id = make_item_id(collection_id, token_id);
        let owner = self
            .owners
            .get(&item_id)
            .ok_or_else(AuctionError::item_not_found)?;
        if owner != from {
            return Err(AuctionError::Unauthorized(format!(
                "{} does not hold {}",
                from, item_id
            )));
        }
        self.owners.insert(item_id, to.clone());
        Ok(())
    }
}
