use super::Settlement;
use crate::payments::PaymentRail;
use crate::registry::ItemRegistry;
use crate::*;

/// Buys the listing at `(collection_id, token_id)` for `buyer_id`.
///
/// Order of effects: ownership transfer, seller payment, excess refund,
/// listing removal. Every check runs before the first effect. If the payment
/// step fails the ownership transfer is undone, so on any `Err` the ledger,
/// the registry and the rail are exactly as they were.
#[allow(clippy::too_many_arguments)]
pub fn settle<R: ItemRegistry, P: PaymentRail>(
    ledger: &mut ListingLedger,
    registry: &mut R,
    rail: &mut P,
    buyer_id: &AccountId,
    collection_id: &str,
    token_id: &str,
    payment: u128,
    now: u64,
) -> Result<Settlement, AuctionError> {
    let listing = ledger
        .get(collection_id, token_id)
        .cloned()
        .ok_or_else(AuctionError::listing_not_found)?;

    if buyer_id == &listing.seller_id {
        return Err(AuctionError::InvalidInput(
            "Cannot purchase your own listing".into(),
        ));
    }

    let price = listing.quote_at(now)?;
    if payment < price {
        return Err(AuctionError::InsufficientPayment(format!(
            "required {}, got {}",
            price, payment
        )));
    }

    registry
        .transfer(collection_id, token_id, &listing.seller_id, buyer_id)
        .map_err(|e| AuctionError::TransferFailed(format!("item transfer: {}", e)))?;

    if let Err(e) = rail.pay(buyer_id, &listing.seller_id, price) {
        registry
            .transfer(collection_id, token_id, buyer_id, &listing.seller_id)
            .map_err(|undo| {
                AuctionError::InternalError(format!(
                    "payment failed ({}) and item transfer could not be undone ({})",
                    e, undo
                ))
            })?;
        return Err(AuctionError::TransferFailed(format!("payment: {}", e)));
    }

    let refund = payment - price;
    rail.refund(buyer_id, refund);

    ledger.remove(collection_id, token_id);

    Ok(Settlement {
        buyer_id: buyer_id.clone(),
        seller_id: listing.seller_id,
        collection_id: listing.collection_id,
        token_id: listing.token_id,
        price: U128(price),
        refund: U128(refund),
    })
}
