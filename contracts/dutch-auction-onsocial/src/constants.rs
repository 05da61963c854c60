use near_sdk::NearToken;

pub const DEFAULT_MAX_ID_LEN: u32 = 256;
pub const DEFAULT_MAX_PAGE_SIZE: u32 = 100;
pub const DEFAULT_PAGE_SIZE: u32 = 50;

// Storage key invariant: delimiter is rejected inside collection ids, so "{collection}:{token}" is unambiguous.
pub const DELIMETER: &str = ":";
pub const ONE_YOCTO: NearToken = NearToken::from_yoctonear(1);

pub const GAS_MIGRATE_TGAS: u64 = 200;
pub const GAS_PAYOUT_CALLBACK_TGAS: u64 = 10;
