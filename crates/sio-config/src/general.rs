//! General client configuration.

use serde::{Deserialize, Serialize};

/// Default number of neighbours returned by `search`.
const fn default_search_k() -> u32 {
    5
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Default `k` for similarity search when the flag is omitted.
    #[serde(default = "default_search_k")]
    pub default_search_k: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_search_k: default_search_k(),
        }
    }
}
