use near_sdk_macros::NearSchema;

#[derive(NearSchema, near_sdk::FunctionError)]
#[abi(json)]
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub enum AuctionError {
    /// Collection id is empty, oversized, or contains the key delimiter.
    InvalidCollection,
    InvalidInput(String),
    Unauthorized(String),
    /// `price_floor >= price_ceiling`.
    InvalidPrice,
    /// `end_time <= start_time`, or the window exceeds the configured maximum.
    InvalidWindow,
    /// The caller already has an active listing for this item.
    AlreadyListed,
    NotFound(String),
    NotStarted,
    Expired,
    InsufficientPayment(String),
    InsufficientDeposit(String),
    /// Item registry or payment rail refused a settlement step; nothing was applied.
    TransferFailed(String),
    InternalError(String),
}

impl std::fmt::Display for AuctionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCollection => write!(f, "Invalid collection"),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            Self::InvalidPrice => write!(f, "Invalid price: floor must be below ceiling"),
            Self::InvalidWindow => write!(f, "Invalid window: end must be after start"),
            Self::AlreadyListed => write!(f, "Item is already listed"),
            Self::NotFound(msg) => write!(f, "Not found: {}", msg),
            Self::NotStarted => write!(f, "Sale has not started"),
            Self::Expired => write!(f, "Sale has ended"),
            Self::InsufficientPayment(msg) => write!(f, "Insufficient payment: {}", msg),
            Self::InsufficientDeposit(msg) => write!(f, "Insufficient deposit: {}", msg),
            Self::TransferFailed(msg) => write!(f, "Transfer failed: {}", msg),
            Self::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl AuctionError {
    pub fn listing_not_found() -> Self {
        Self::NotFound("No active listing".into())
    }
    pub fn item_not_found() -> Self {
        Self::NotFound("Item not registered".into())
    }
    pub fn only_owner(what: &str) -> Self {
        Self::Unauthorized(format!("Only {} can perform this action", what))
    }
}
