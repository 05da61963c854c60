use near_sdk::AccountId;

use super::Category;
use super::builder::EventBuilder;

pub fn emit_item_registered(
    registrar_id: &AccountId,
    owner_id: &AccountId,
    collection_id: &str,
    token_id: &str,
) {
    EventBuilder::new(Category::Item, "item_registered", registrar_id)
        .account("owner_id", owner_id)
        .item(collection_id, token_id)
        .emit();
}

pub fn emit_item_transferred(
    old_owner_id: &AccountId,
    new_owner_id: &AccountId,
    collection_id: &str,
    token_id: &str,
) {
    EventBuilder::new(Category::Item, "item_transferred", old_owner_id)
        .account("old_owner_id", old_owner_id)
        .account("new_owner_id", new_owner_id)
        .item(collection_id, token_id)
        .emit();
}
