mod none;
mod static_credentials;
mod traits;
mod types;

pub use none::*;
pub use static_credentials::*;
pub use traits::*;
pub use types::*;

use crate::config::AuthConfig;

/// Factory function to create authenticator from config
pub fn create_authenticator(config: &AuthConfig) -> Result<Box<dyn Authenticator>, AuthError> {
    use crate::config::AuthMethod;

    match config.method {
        AuthMethod::None => Ok(Box::new(NoneAuthenticator::new())),
        AuthMethod::Static => {
            let email = config.email.clone().ok_or_else(|| {
                AuthError::ConfigurationError(
                    "email must be set when using Static auth method".to_string(),
                )
            })?;
            let password = config.password.clone().ok_or_else(|| {
                AuthError::ConfigurationError(
                    "password must be set when using Static auth method".to_string(),
                )
            })?;
            Ok(Box::new(StaticAuthenticator::new(email, password)))
        }
    }
}
