use crate::*;

pub(crate) fn hash_account_id(account_id: &AccountId) -> Vec<u8> {
    env::sha256(account_id.as_bytes())
}

pub(crate) fn check_one_yocto() -> Result<(), AuctionError> {
    if env::attached_deposit().as_yoctonear() != ONE_YOCTO.as_yoctonear() {
        return Err(AuctionError::InsufficientDeposit(
            "Requires attached deposit of exactly 1 yoctoNEAR".into(),
        ));
    }
    Ok(())
}

/// Key shared by the listing ledger and the item ledger.
pub(crate) fn make_item_id(collection_id: &str, token_id: &str) -> String {
    format!("{}{}{}", collection_id, DELIMETER, token_id)
}

pub(crate) fn check_collection_id(collection_id: &str, max_len: u32) -> Result<(), AuctionError> {
    if collection_id.is_empty()
        || collection_id.len() > max_len as usize
        || collection_id.contains(DELIMETER)
    {
        return Err(AuctionError::InvalidCollection);
    }
    Ok(())
}

pub(crate) fn check_token_id(token_id: &str, max_len: u32) -> Result<(), AuctionError> {
    if token_id.is_empty() {
        return Err(AuctionError::InvalidInput("Token ID must not be empty".into()));
    }
    if token_id.len() > max_len as usize {
        return Err(AuctionError::InvalidInput(format!(
            "Token ID too long (max {} characters)",
            max_len
        )));
    }
    Ok(())
}

impl Contract {
    pub(crate) fn check_contract_owner(&self, actor_id: &AccountId) -> Result<(), AuctionError> {
        if actor_id != &self.owner_id {
            return Err(AuctionError::only_owner("contract owner"));
        }
        Ok(())
    }

    pub(crate) fn check_item_ids(&self, collection_id: &str, token_id: &str) -> Result<(), AuctionError> {
        check_collection_id(collection_id, self.config.max_id_len)?;
        check_token_id(token_id, self.config.max_id_len)
    }
}
