use super::proceeds::payout;
use crate::guards::check_one_yocto;
use crate::*;

#[near]
impl Contract {
    pub fn proceeds_of(&self, account_id: AccountId) -> U128 {
        U128(self.proceeds.balance_of(&account_id))
    }

    /// Sends the caller's full proceeds balance; re-credited if the transfer fails.
    #[payable]
    #[handle_result]
    pub fn withdraw_proceeds(&mut self) -> Result<Promise, AuctionError> {
        check_one_yocto()?;
        let account_id = env::predecessor_account_id();
        let amount = self.internal_take_proceeds(&account_id)?;
        Ok(payout(&account_id, amount))
    }

    // Must not panic: the amount already left the contract's books.
    #[private]
    pub fn on_payout_resolved(&mut self, account_id: AccountId, amount: U128) -> bool {
        let delivered =
            env::promise_results_count() == 1 && env::promise_result_checked(0, 0).is_ok();
        self.internal_resolve_payout(&account_id, amount.0, delivered)
    }
}

impl Contract {
    pub(crate) fn internal_take_proceeds(&mut self, account_id: &AccountId) -> Result<u128, AuctionError> {
        let amount = self.proceeds.take(account_id);
        if amount == 0 {
            return Err(AuctionError::NotFound("No proceeds to withdraw".into()));
        }
        events::emit_proceeds_withdrawn(account_id, amount);
        Ok(amount)
    }

    pub(crate) fn internal_resolve_payout(
        &mut self,
        account_id: &AccountId,
        amount: u128,
        delivered: bool,
    ) -> bool {
        if delivered {
            return true;
        }
        match self.proceeds.credit(account_id, amount) {
            Ok(new_balance) => {
                events::emit_proceeds_credited(account_id, amount, new_balance);
            }
            Err(e) => env::log_str(&format!("Proceeds credit failed: {}", e)),
        }
        false
    }
}
