use near_sdk::serde_json::{Map, Value, json};
use near_sdk::{AccountId, env};

use super::{Category, PREFIX, STANDARD, VERSION};

/// One `EVENT_JSON` line with a single `data` entry.
///
/// yoctoNEAR amounts and nanosecond timestamps are written as decimal strings;
/// JSON numbers lose precision above 2^53.
pub(crate) struct EventBuilder {
    category: Category,
    data: Map<String, Value>,
}

impl EventBuilder {
    pub(crate) fn new(category: Category, operation: &str, author: &AccountId) -> Self {
        let mut data = Map::new();
        data.insert("operation".into(), operation.into());
        data.insert("author".into(), author.as_str().into());
        Self { category, data }
    }

    pub(crate) fn account(mut self, key: &str, account_id: &AccountId) -> Self {
        self.data.insert(key.into(), account_id.as_str().into());
        self
    }

    pub(crate) fn maybe_account(self, key: &str, account_id: Option<&AccountId>) -> Self {
        match account_id {
            Some(account_id) => self.account(key, account_id),
            None => self,
        }
    }

    /// Adds `collection_id` and `token_id`.
    pub(crate) fn item(mut self, collection_id: &str, token_id: &str) -> Self {
        self.data.insert("collection_id".into(), collection_id.into());
        self.data.insert("token_id".into(), token_id.into());
        self
    }

    pub(crate) fn yocto(mut self, key: &str, amount: u128) -> Self {
        self.data.insert(key.into(), amount.to_string().into());
        self
    }

    pub(crate) fn nanos(mut self, key: &str, timestamp: u64) -> Self {
        self.data.insert(key.into(), timestamp.to_string().into());
        self
    }

    pub(crate) fn maybe_nanos(self, key: &str, timestamp: Option<u64>) -> Self {
        match timestamp {
            Some(timestamp) => self.nanos(key, timestamp),
            None => self,
        }
    }

    pub(crate) fn count(mut self, key: &str, value: u32) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub(crate) fn text(mut self, key: &str, value: &str) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub(crate) fn emit(self) {
        let event = json!({
            "standard": STANDARD,
            "version": VERSION,
            "event": self.category.as_str(),
            "data": [Value::Object(self.data)],
        });
        env::log_str(&format!("{PREFIX}{event}"));
    }
}
