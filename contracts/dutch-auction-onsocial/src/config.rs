use near_sdk::near;

use crate::constants::{DEFAULT_MAX_ID_LEN, DEFAULT_MAX_PAGE_SIZE};

#[near(serializers = [borsh, json])]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuctionConfig {
    /// Upper bound on collection and token id length, in bytes.
    #[serde(default = "default_max_id_len")]
    pub max_id_len: u32,
    /// Cap applied to `limit` in paginated views.
    #[serde(default = "default_max_page_size")]
    pub max_page_size: u32,
    /// Longest allowed `end_time - start_time`, in ns. `None` = unbounded.
    #[serde(default)]
    pub max_window_ns: Option<u64>,
}

fn default_max_id_len() -> u32 { DEFAULT_MAX_ID_LEN }
fn default_max_page_size() -> u32 { DEFAULT_MAX_PAGE_SIZE }

impl Default for AuctionConfig {
    fn default() -> Self {
        Self {
            max_id_len: default_max_id_len(),
            max_page_size: default_max_page_size(),
            max_window_ns: None,
        }
    }
}

impl AuctionConfig {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.max_id_len == 0 || self.max_page_size == 0 {
            return Err("Limits must be non-zero");
        }
        if self.max_window_ns == Some(0) {
            return Err("max_window_ns must be non-zero when set");
        }
        Ok(())
    }

    /// Id length may only grow so existing listings stay addressable.
    pub fn validate_update(&self, current: &AuctionConfig) -> Result<(), &'static str> {
        self.validate()?;
        if self.max_id_len < current.max_id_len {
            return Err("max_id_len can only be increased");
        }
        Ok(())
    }

    pub(crate) fn page_limit(&self, limit: Option<u32>) -> usize {
        limit
            .unwrap_or(crate::constants::DEFAULT_PAGE_SIZE)
            .min(self.max_page_size) as usize
    }
}
