use near_sdk::AccountId;

use super::Category;
use super::builder::EventBuilder;

pub fn emit_seller_paid(seller_id: &AccountId, buyer_id: &AccountId, amount: u128) {
    EventBuilder::new(Category::Proceeds, "seller_paid", seller_id)
        .account("seller_id", seller_id)
        .account("buyer_id", buyer_id)
        .yocto("amount", amount)
        .emit();
}

pub fn emit_excess_refunded(buyer_id: &AccountId, amount: u128) {
    EventBuilder::new(Category::Proceeds, "excess_refunded", buyer_id)
        .account("buyer_id", buyer_id)
        .yocto("amount", amount)
        .emit();
}

/// A payout bounced and is now held as withdrawable proceeds.
pub fn emit_proceeds_credited(account_id: &AccountId, amount: u128, new_balance: u128) {
    EventBuilder::new(Category::Proceeds, "proceeds_credited", account_id)
        .account("account_id", account_id)
        .yocto("amount", amount)
        .yocto("new_balance", new_balance)
        .emit();
}

pub fn emit_proceeds_withdrawn(account_id: &AccountId, amount: u128) {
    EventBuilder::new(Category::Proceeds, "proceeds_withdrawn", account_id)
        .account("account_id", account_id)
        .yocto("amount", amount)
        .emit();
}
