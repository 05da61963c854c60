mod builder;

mod contract;
mod item;
mod listing;
mod proceeds;

pub use contract::*;
pub use item::*;
pub use listing::*;
pub use proceeds::*;

pub(crate) const STANDARD: &str = "onsocial";
pub(crate) const VERSION: &str = "1.0.0";
pub(crate) const PREFIX: &str = "EVENT_JSON:";

/// Value of the `event` field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Category {
    Listing,
    Item,
    Proceeds,
    Contract,
}

impl Category {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Self::Listing => "LISTING_UPDATE",
            Self::Item => "ITEM_UPDATE",
            Self::Proceeds => "PROCEEDS_UPDATE",
            Self::Contract => "CONTRACT_UPDATE",
        }
    }
}
