use near_sdk::AccountId;

use super::Category;
use super::builder::EventBuilder;
use crate::AuctionConfig;

pub fn emit_contract_upgraded(contract_id: &AccountId, old_version: &str, new_version: &str) {
    EventBuilder::new(Category::Contract, "contract_upgrade", contract_id)
        .text("old_version", old_version)
        .text("new_version", new_version)
        .emit();
}

pub fn emit_owner_transferred(old_owner: &AccountId, new_owner: &AccountId) {
    EventBuilder::new(Category::Contract, "owner_transferred", old_owner)
        .account("old_owner", old_owner)
        .account("new_owner", new_owner)
        .emit();
}

pub fn emit_config_updated(owner_id: &AccountId, config: &AuctionConfig) {
    EventBuilder::new(Category::Contract, "config_updated", owner_id)
        .count("max_id_len", config.max_id_len)
        .count("max_page_size", config.max_page_size)
        .maybe_nanos("max_window_ns", config.max_window_ns)
        .emit();
}
