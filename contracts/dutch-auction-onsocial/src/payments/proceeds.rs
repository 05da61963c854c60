use super::PaymentRail;
use crate::*;

/// Seller payouts that bounced, in yoctoNEAR. Withdrawable by the account.
#[near(serializers = [borsh])]
pub struct ProceedsLedger {
    balances: LookupMap<AccountId, u128>,
}

impl ProceedsLedger {
    pub fn new() -> Self {
        Self {
            balances: LookupMap::new(StorageKey::Proceeds),
        }
    }

    pub fn balance_of(&self, account_id: &AccountId) -> u128 {
        self.balances.get(account_id).copied().unwrap_or(0)
    }

    pub(crate) fn credit(&mut self, account_id: &AccountId, amount: u128) -> Result<u128, AuctionError> {
        let new_balance = self
            .balance_of(account_id)
            .checked_add(amount)
            .ok_or_else(|| AuctionError::TransferFailed("Proceeds balance overflow".into()))?;
        self.balances.insert(account_id.clone(), new_balance);
        Ok(new_balance)
    }

    /// Removes and returns the full balance.
    pub(crate) fn take(&mut self, account_id: &AccountId) -> u128 {
        self.balances.remove(account_id).unwrap_or(0)
    }
}

impl Default for ProceedsLedger {
    fn default() -> Self {
        Self::new()
    }
}

/// Sends `amount` to `account_id`. If the transfer bounces, `on_payout_resolved`
/// credits it to the account's proceeds balance.
pub(crate) fn payout(account_id: &AccountId, amount: u128) -> Promise {
    Promise::new(account_id.clone())
        .transfer(NearToken::from_yoctonear(amount))
        .then(
            Contract::ext(env::current_account_id())
                .with_static_gas(Gas::from_tgas(GAS_PAYOUT_CALLBACK_TGAS))
                .on_payout_resolved(account_id.clone(), U128(amount)),
        )
}

/// Binds [`PaymentRail`] to the contract: the seller gets the price as a
/// direct transfer, excess deposit goes straight back to the buyer.
pub struct NearPaymentRail;

impl PaymentRail for NearPaymentRail {
    fn pay(&mut self, from: &AccountId, to: &AccountId, amount: u128) -> Result<(), AuctionError> {
        if amount > 0 {
            let _ = payout(to, amount);
        }
        events::emit_seller_paid(to, from, amount);
        Ok(())
    }

    fn refund(&mut self, to: &AccountId, amount: u128) {
        if amount > 0 {
            let _ = Promise::new(to.clone()).transfer(NearToken::from_yoctonear(amount));
            events::emit_excess_refunded(to, amount);
        }
    }
}
