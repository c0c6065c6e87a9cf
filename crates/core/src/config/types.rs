use serde::{Deserialize, Serialize};

use crate::raffle::{DEFAULT_LOCK_COUNT, DEFAULT_NAMES};

/// Root configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub auth: AuthConfig,
    #[serde(default)]
    pub raffle: RaffleConfig,
    #[serde(default)]
    pub payment: PaymentConfig,
}

/// Raffle pool configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RaffleConfig {
    /// Ticket display names, one per ticket, in id order.
    #[serde(default = "default_names")]
    pub names: Vec<String>,

    /// How many tickets the system pre-locks at creation.
    #[serde(default = "default_lock_count")]
    pub lock_count: usize,
}

impl Default for RaffleConfig {
    fn default() -> Self {
        Self {
            names: default_names(),
            lock_count: default_lock_count(),
        }
    }
}

fn default_names() -> Vec<String> {
    DEFAULT_NAMES.clone()
}

fn default_lock_count() -> usize {
    DEFAULT_LOCK_COUNT
}

/// Authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    pub method: AuthMethod,
    /// Admin email (required when method = "static")
    #[serde(default)]
    pub email: Option<String>,
    /// Admin password (required when method = "static")
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AuthMethod {
    None,
    Static,
    // Future: Oidc
}

/// Payment configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PaymentConfig {
    /// PIX key shown to buyers (copia-e-cola code, email or phone).
    #[serde(default = "default_pix_key")]
    pub pix_key: String,
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            pix_key: default_pix_key(),
        }
    }
}

fn default_pix_key() -> String {
    "12345678900".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raffle::POOL_SIZE;

    #[test]
    fn test_raffle_config_defaults() {
        let config = RaffleConfig::default();
        assert_eq!(config.names.len(), POOL_SIZE);
        assert_eq!(config.lock_count, DEFAULT_LOCK_COUNT);
    }

    #[test]
    fn test_auth_method_serialization() {
        let json = serde_json::to_string(&AuthMethod::Static).unwrap();
        assert_eq!(json, r#""static""#);

        let deserialized: AuthMethod = serde_json::from_str(r#""none""#).unwrap();
        assert_eq!(deserialized, AuthMethod::None);
    }
}
