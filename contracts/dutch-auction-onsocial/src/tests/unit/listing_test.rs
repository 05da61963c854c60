use crate::tests::test_utils::*;
use crate::*;
use near_sdk::json_types::U128;
use near_sdk::testing_env;

fn list_as(contract: &mut Contract, listing: Listing) -> Result<Listing, AuctionError> {
    testing_env!(context(listing.seller_id.clone()).build());
    contract.list(
        listing.collection_id,
        listing.token_id,
        listing.price_floor,
        listing.price_ceiling,
        listing.start_time,
        listing.end_time,
    )
}

// --- Happy path ---

#[test]
fn list_then_get_returns_supplied_fields() {
    let mut contract = contract_with_item();
    let stored = list_as(&mut contract, default_listing()).unwrap();
    assert_eq!(stored, default_listing());

    let fetched = contract
        .get_listing(COLLECTION.into(), TOKEN.into())
        .expect("listing should exist");
    assert_eq!(fetched, default_listing());
}

#[test]
fn list_emits_created_event_with_all_fields() {
    let mut contract = contract_with_item();
    list_as(&mut contract, default_listing()).unwrap();

    let events = events_with_operation("listing_created");
    assert_eq!(events.len(), 1);
    let data = &events[0]["data"][0];
    assert_eq!(events[0]["event"], "LISTING_UPDATE");
    assert_eq!(data["seller_id"], seller().to_string());
    assert_eq!(data["collection_id"], COLLECTION);
    assert_eq!(data["token_id"], TOKEN);
    assert_eq!(data["price_floor"], ONE_NEAR.to_string());
    assert_eq!(data["price_ceiling"], (5 * ONE_NEAR).to_string());
    assert_eq!(data["start_time"], T0.to_string());
    assert_eq!(data["end_time"], (T0 + FIVE_DAYS_NS).to_string());
    assert!(data.get("replaced_seller_id").is_none());
}

#[test]
fn list_moves_no_funds() {
    let mut contract = contract_with_item();
    list_as(&mut contract, default_listing()).unwrap();
    assert_eq!(transferred_to(&seller()), 0);
    assert_eq!(contract.proceeds_of(seller()), U128(0));
    assert_eq!(contract.item_owner(COLLECTION.into(), TOKEN.into()), Some(seller()));
}

#[test]
fn list_window_in_the_past_is_accepted() {
    let mut contract = contract_with_item();
    let mut listing = default_listing();
    listing.start_time = 10;
    listing.end_time = 20;
    assert!(list_as(&mut contract, listing).is_ok());
}

// --- Validation ---

#[test]
fn empty_collection_rejected() {
    let mut contract = contract_with_item();
    let mut listing = default_listing();
    listing.collection_id = String::new();
    assert_eq!(list_as(&mut contract, listing).unwrap_err(), AuctionError::InvalidCollection);
}

#[test]
fn collection_with_delimiter_rejected() {
    let mut contract = contract_with_item();
    let mut listing = default_listing();
    listing.collection_id = "gen:esis".into();
    assert_eq!(list_as(&mut contract, listing).unwrap_err(), AuctionError::InvalidCollection);
}

#[test]
fn oversized_collection_rejected() {
    let mut contract = contract_with_item();
    let mut listing = default_listing();
    listing.collection_id = "c".repeat(DEFAULT_MAX_ID_LEN as usize + 1);
    assert_eq!(list_as(&mut contract, listing).unwrap_err(), AuctionError::InvalidCollection);
}

#[test]
fn empty_token_id_rejected() {
    let mut contract = contract_with_item();
    let mut listing = default_listing();
    listing.token_id = String::new();
    assert!(matches!(
        list_as(&mut contract, listing).unwrap_err(),
        AuctionError::InvalidInput(_)
    ));
}

#[test]
fn collection_checked_before_ownership() {
    let mut contract = new_contract();
    let mut listing = default_listing();
    listing.collection_id = String::new();
    listing.seller_id = other();
    assert_eq!(list_as(&mut contract, listing).unwrap_err(), AuctionError::InvalidCollection);
}

#[test]
fn non_owner_cannot_list() {
    let mut contract = contract_with_item();
    let mut listing = default_listing();
    listing.seller_id = other();
    assert!(matches!(
        list_as(&mut contract, listing).unwrap_err(),
        AuctionError::Unauthorized(_)
    ));
    assert!(contract.get_listing(COLLECTION.into(), TOKEN.into()).is_none());
}

#[test]
fn unregistered_item_cannot_be_listed() {
    let mut contract = new_contract();
    assert!(matches!(
        list_as(&mut contract, default_listing()).unwrap_err(),
        AuctionError::Unauthorized(_)
    ));
}

#[test]
fn ownership_checked_before_price() {
    let mut contract = contract_with_item();
    let mut listing = default_listing();
    listing.seller_id = other();
    listing.price_ceiling = listing.price_floor;
    assert!(matches!(
        list_as(&mut contract, listing).unwrap_err(),
        AuctionError::Unauthorized(_)
    ));
}

#[test]
fn equal_prices_rejected() {
    let mut contract = contract_with_item();
    let mut listing = default_listing();
    listing.price_ceiling = listing.price_floor;
    assert_eq!(list_as(&mut contract, listing).unwrap_err(), AuctionError::InvalidPrice);
}

#[test]
fn zero_zero_prices_rejected() {
    let mut contract = contract_with_item();
    let mut listing = default_listing();
    listing.price_floor = U128(0);
    listing.price_ceiling = U128(0);
    assert_eq!(list_as(&mut contract, listing).unwrap_err(), AuctionError::InvalidPrice);
}

#[test]
fn floor_above_ceiling_rejected() {
    let mut contract = contract_with_item();
    let mut listing = default_listing();
    listing.price_floor = U128(6 * ONE_NEAR);
    assert_eq!(list_as(&mut contract, listing).unwrap_err(), AuctionError::InvalidPrice);
}

#[test]
fn zero_floor_is_allowed() {
    let mut contract = contract_with_item();
    let mut listing = default_listing();
    listing.price_floor = U128(0);
    assert!(list_as(&mut contract, listing).is_ok());
}

#[test]
fn equal_times_rejected() {
    let mut contract = contract_with_item();
    let mut listing = default_listing();
    listing.end_time = listing.start_time;
    assert_eq!(list_as(&mut contract, listing).unwrap_err(), AuctionError::InvalidWindow);
}

#[test]
fn end_before_start_rejected() {
    let mut contract = contract_with_item();
    let mut listing = default_listing();
    listing.end_time = listing.start_time - 1;
    assert_eq!(list_as(&mut contract, listing).unwrap_err(), AuctionError::InvalidWindow);
}

#[test]
fn price_checked_before_window() {
    let mut contract = contract_with_item();
    let mut listing = default_listing();
    listing.price_ceiling = listing.price_floor;
    listing.end_time = listing.start_time;
    assert_eq!(list_as(&mut contract, listing).unwrap_err(), AuctionError::InvalidPrice);
}

#[test]
fn window_longer_than_configured_max_rejected() {
    let mut contract = contract_with_item();
    contract.config.max_window_ns = Some(FIVE_DAYS_NS - 1);
    assert_eq!(
        list_as(&mut contract, default_listing()).unwrap_err(),
        AuctionError::InvalidWindow
    );

    contract.config.max_window_ns = Some(FIVE_DAYS_NS);
    assert!(list_as(&mut contract, default_listing()).is_ok());
}

#[test]
fn rejected_list_leaves_ledger_unchanged() {
    let mut contract = contract_with_item();
    let mut listing = default_listing();
    listing.price_ceiling = listing.price_floor;
    let _ = list_as(&mut contract, listing);
    assert_eq!(contract.get_listing_count(), 0);
    assert!(events_with_operation("listing_created").is_empty());
}

// --- Re-listing ---

#[test]
fn relisting_own_active_item_rejected() {
    let mut contract = contract_with_listing();
    let mut again = default_listing();
    again.price_ceiling = U128(9 * ONE_NEAR);
    assert_eq!(list_as(&mut contract, again).unwrap_err(), AuctionError::AlreadyListed);

    let stored = contract.get_listing(COLLECTION.into(), TOKEN.into()).unwrap();
    assert_eq!(stored.price_ceiling, U128(5 * ONE_NEAR));
}

#[test]
fn new_holder_replaces_stale_listing() {
    let mut contract = contract_with_listing();
    testing_env!(context_with_deposit(seller(), 1).build());
    contract
        .transfer_item(COLLECTION.into(), TOKEN.into(), other())
        .unwrap();

    let mut fresh = default_listing();
    fresh.seller_id = other();
    fresh.price_floor = U128(2 * ONE_NEAR);
    list_as(&mut contract, fresh.clone()).unwrap();

    assert_eq!(contract.get_listing(COLLECTION.into(), TOKEN.into()), Some(fresh));
    assert_eq!(contract.get_listing_count(), 1);
    assert_eq!(contract.get_listing_count_by_seller(seller()), 0);
    assert_eq!(contract.get_listing_count_by_seller(other()), 1);

    let events = events_with_operation("listing_created");
    assert_eq!(events[0]["data"][0]["replaced_seller_id"], seller().to_string());
}

// --- Ledger against a mock registry ---

#[test]
fn ledger_consults_registry_for_ownership() {
    testing_env!(context(seller()).build());
    let mut ledger = ListingLedger::new();
    let config = AuctionConfig::default();

    let registry = MockRegistry::with_item(COLLECTION, TOKEN, other());
    let err = ledger.list(&registry, &config, default_listing()).unwrap_err();
    assert!(matches!(err, AuctionError::Unauthorized(_)));
    assert!(ledger.is_empty());

    let registry = MockRegistry::with_item(COLLECTION, TOKEN, seller());
    assert_eq!(ledger.list(&registry, &config, default_listing()).unwrap(), None);
    assert!(ledger.contains(COLLECTION, TOKEN));
    assert_eq!(ledger.get(COLLECTION, TOKEN), Some(&default_listing()));
}
