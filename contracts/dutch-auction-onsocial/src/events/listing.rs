use near_sdk::AccountId;

use super::Category;
use super::builder::EventBuilder;
use crate::listing::Listing;
use crate::settlement::Settlement;

pub fn emit_listing_created(listing: &Listing, replaced_seller_id: Option<&AccountId>) {
    EventBuilder::new(Category::Listing, "listing_created", &listing.seller_id)
        .account("seller_id", &listing.seller_id)
        .item(&listing.collection_id, &listing.token_id)
        .yocto("price_floor", listing.price_floor.0)
        .yocto("price_ceiling", listing.price_ceiling.0)
        .nanos("start_time", listing.start_time)
        .nanos("end_time", listing.end_time)
        .maybe_account("replaced_seller_id", replaced_seller_id)
        .emit();
}

pub fn emit_listing_purchased(settlement: &Settlement) {
    EventBuilder::new(Category::Listing, "listing_purchased", &settlement.buyer_id)
        .account("buyer_id", &settlement.buyer_id)
        .account("seller_id", &settlement.seller_id)
        .item(&settlement.collection_id, &settlement.token_id)
        .yocto("price", settlement.price.0)
        .yocto("refund", settlement.refund.0)
        .emit();
}
