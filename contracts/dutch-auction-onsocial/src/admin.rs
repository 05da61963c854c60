use crate::*;

#[near]
impl Contract {
    #[init]
    pub fn new(owner_id: AccountId, config: Option<AuctionConfig>) -> Self {
        let config = config.unwrap_or_default();
        if let Err(msg) = config.validate() {
            env::panic_str(msg);
        }
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            owner_id,
            config,
            listings: ListingLedger::new(),
            items: ItemLedger::new(),
            proceeds: ProceedsLedger::new(),
        }
    }

    #[payable]
    #[handle_result]
    pub fn transfer_ownership(&mut self, new_owner: AccountId) -> Result<(), AuctionError> {
        crate::guards::check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        if new_owner == self.owner_id {
            return Err(AuctionError::InvalidInput(
                "New owner must differ from current owner".to_string(),
            ));
        }
        let old_owner = self.owner_id.clone();
        self.owner_id = new_owner;
        events::emit_owner_transferred(&old_owner, &self.owner_id);
        Ok(())
    }

    pub fn get_owner(&self) -> &AccountId {
        &self.owner_id
    }

    pub fn get_config(&self) -> &AuctionConfig {
        &self.config
    }

    #[payable]
    #[handle_result]
    pub fn update_config(&mut self, config: AuctionConfig) -> Result<(), AuctionError> {
        crate::guards::check_one_yocto()?;
        let caller = env::predecessor_account_id();
        self.check_contract_owner(&caller)?;
        config
            .validate_update(&self.config)
            .map_err(|msg| AuctionError::InvalidInput(msg.to_string()))?;
        self.config = config;
        events::emit_config_updated(&caller, &self.config);
        Ok(())
    }
}
