//! Linear price schedule.
//!
//! The price starts at `price_floor` when the window opens and climbs to
//! `price_ceiling` when it closes. Both ends of the window are inclusive.

use crate::*;
use primitive_types::U256;

/// Instantaneous price at `now`.
///
/// `floor + (ceiling - floor) * (now - start) / (end - start)`, with a 256-bit
/// intermediate product and truncating division. Pure: no contract state, no
/// host calls, any consistent time unit.
pub fn quote(
    price_floor: u128,
    price_ceiling: u128,
    start_time: u64,
    end_time: u64,
    now: u64,
) -> Result<u128, AuctionError> {
    if end_time <= start_time {
        return Err(AuctionError::InvalidWindow);
    }
    if price_floor > price_ceiling {
        return Err(AuctionError::InvalidPrice);
    }
    if now < start_time {
        return Err(AuctionError::NotStarted);
    }
    if now > end_time {
        return Err(AuctionError::Expired);
    }

    let elapsed = U256::from(now - start_time);
    let window = U256::from(end_time - start_time);
    let span = U256::from(price_ceiling - price_floor);
    // elapsed <= window, so the step never exceeds span and fits back in u128.
    let step = (span * elapsed / window).as_u128();
    Ok(price_floor + step)
}

#[near]
impl Contract {
    /// Quote for an arbitrary schedule at the current block timestamp.
    #[handle_result]
    pub fn get_price(
        &self,
        price_floor: U128,
        price_ceiling: U128,
        start_time: u64,
        end_time: u64,
    ) -> Result<U128, AuctionError> {
        quote(
            price_floor.0,
            price_ceiling.0,
            start_time,
            end_time,
            env::block_timestamp(),
        )
        .map(U128)
    }

    /// Quote for a stored listing at the current block timestamp.
    #[handle_result]
    pub fn get_listing_price(
        &self,
        collection_id: String,
        token_id: String,
    ) -> Result<U128, AuctionError> {
        let listing = self
            .listings
            .get(&collection_id, &token_id)
            .ok_or_else(AuctionError::listing_not_found)?;
        listing.quote_at(env::block_timestamp()).map(U128)
    }
}
