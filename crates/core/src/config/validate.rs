use super::{types::Config, ConfigError};
use crate::raffle::POOL_SIZE;

/// Validate configuration
/// Currently validates:
/// - Auth section exists (enforced by serde)
/// - Static auth carries both email and password
/// - Raffle name list has exactly one name per ticket
/// - Lock count fits in the pool
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    use crate::config::AuthMethod;

    if config.auth.method == AuthMethod::Static
        && (config.auth.email.is_none() || config.auth.password.is_none())
    {
        return Err(ConfigError::ValidationError(
            "auth.email and auth.password must be set when auth.method is \"static\"".to_string(),
        ));
    }

    if config.raffle.names.len() != POOL_SIZE {
        return Err(ConfigError::ValidationError(format!(
            "raffle.names must contain exactly {} entries, got {}",
            POOL_SIZE,
            config.raffle.names.len()
        )));
    }

    if config.raffle.lock_count > POOL_SIZE {
        return Err(ConfigError::ValidationError(format!(
            "raffle.lock_count cannot exceed {}",
            POOL_SIZE
        )));
    }

    Ok(())
}
