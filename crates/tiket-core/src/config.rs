//! Client configuration.

use serde::{Deserialize, Serialize};

/// Default ticketing API base URL, overridable via config.toml.
pub const DEFAULT_API_URL: &str = "https://hmc1.rml.co.id/api-ticketing-gs/api";

/// Default unauthenticated customer-reference endpoint.
pub const DEFAULT_CUSTOMER_API_URL: &str = "https://hmc1.rml.co.id/api-customer-gs/api/data";

/// Configuration for the API client, persisted as config.toml.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the ticketing API (bearer-authenticated endpoints)
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Full URL of the customer-reference endpoint (no auth)
    #[serde(default = "default_customer_api_url")]
    pub customer_api_url: String,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_customer_api_url() -> String {
    DEFAULT_CUSTOMER_API_URL.to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            customer_api_url: default_customer_api_url(),
        }
    }
}
