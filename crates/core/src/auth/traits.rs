use thiserror::Error;

use super::types::{Credentials, Identity};

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Authentication required")]
    NotAuthenticated,

    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

pub trait Authenticator: Send + Sync {
    /// Authenticate submitted credentials and return the identity
    fn authenticate(&self, credentials: &Credentials) -> Result<Identity, AuthError>;

    /// Name of this authentication method
    fn method_name(&self) -> &'static str;
}
