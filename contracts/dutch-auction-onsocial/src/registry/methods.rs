use super::ItemRegistry;
use crate::guards::check_one_yocto;
use crate::*;

#[near]
impl Contract {
    /// Contract owner only; the registry has no other way to create items.
    #[payable]
    #[handle_result]
    pub fn register_item(
        &mut self,
        collection_id: String,
        token_id: String,
        owner_id: AccountId,
    ) -> Result<(), AuctionError> {
        check_one_yocto()?;
        let caller = env::predecessor_account_id();
        self.check_contract_owner(&caller)?;
        self.internal_register_item(&caller, &collection_id, &token_id, owner_id)
    }

    /// Holder only. Does not touch listings; a listing left behind by the
    /// previous holder fails at settlement and may be replaced by the new one.
    #[payable]
    #[handle_result]
    pub fn transfer_item(
        &mut self,
        collection_id: String,
        token_id: String,
        receiver_id: AccountId,
    ) -> Result<(), AuctionError> {
        check_one_yocto()?;
        let sender_id = env::predecessor_account_id();
        self.internal_transfer_item(&sender_id, &collection_id, &token_id, &receiver_id)
    }

    pub fn item_owner(&self, collection_id: String, token_id: String) -> Option<AccountId> {
        self.items.owner_of(&collection_id, &token_id)
    }
}

impl Contract {
    pub(crate) fn internal_register_item(
        &mut self,
        registrar_id: &AccountId,
        collection_id: &str,
        token_id: &str,
        owner_id: AccountId,
    ) -> Result<(), AuctionError> {
        self.check_item_ids(collection_id, token_id)?;
        self.items.register(collection_id, token_id, owner_id.clone())?;
        events::emit_item_registered(registrar_id, &owner_id, collection_id, token_id);
        Ok(())
    }

    pub(crate) fn internal_transfer_item(
        &mut self,
        sender_id: &AccountId,
        collection_id: &str,
        token_id: &str,
        receiver_id: &AccountId,
    ) -> Result<(), AuctionError> {
        if sender_id == receiver_id {
            return Err(AuctionError::InvalidInput(
                "Sender and receiver must differ".into(),
            ));
        }
        self.items
            .transfer(collection_id, token_id, sender_id, receiver_id)?;
        events::emit_item_transferred(sender_id, receiver_id, collection_id, token_id);
        Ok(())
    }
}
