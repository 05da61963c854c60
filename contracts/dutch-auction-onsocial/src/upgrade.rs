use crate::constants::GAS_MIGRATE_TGAS;
use crate::guards::check_one_yocto;
use crate::*;

#[near]
impl Contract {
    pub fn get_version(&self) -> &str {
        &self.version
    }

    /// Deploys the wasm passed as raw input and chains `migrate` on it.
    #[handle_result]
    pub fn update_contract(&self) -> Result<Promise, AuctionError> {
        check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        let code = env::input()
            .filter(|code| !code.is_empty())
            .ok_or_else(|| AuctionError::InvalidInput("Missing contract code".into()))?;

        Ok(Promise::new(env::current_account_id())
            .deploy_contract(code)
            .function_call(
                "migrate".to_string(),
                vec![],
                NearToken::from_near(0),
                Gas::from_tgas(GAS_MIGRATE_TGAS),
            )
            .as_return())
    }

    #[private]
    #[init(ignore_state)]
    pub fn migrate() -> Self {
        let Some(mut contract) = env::state_read::<Self>() else {
            env::panic_str("No contract state to migrate");
        };
        contract.internal_migrate(env!("CARGO_PKG_VERSION"));
        contract
    }
}

impl Contract {
    /// Layout is unchanged across released versions, so only the version moves.
    pub(crate) fn internal_migrate(&mut self, new_version: &str) {
        let old_version = std::mem::replace(&mut self.version, new_version.to_string());
        events::emit_contract_upgraded(&env::current_account_id(), &old_version, &self.version);
    }
}
