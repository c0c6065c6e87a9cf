//! No-op authentication (single-operator setups).

use super::{AuthError, Authenticator, Credentials, Identity};

/// Authenticator that accepts any login attempt.
#[derive(Debug, Default)]
pub struct NoneAuthenticator;

impl NoneAuthenticator {
    pub fn new() -> Self {
        Self
    }
}

impl Authenticator for NoneAuthenticator {
    fn authenticate(&self, _credentials: &Credentials) -> Result<Identity, AuthError> {
        Ok(Identity::anonymous())
    }

    fn method_name(&self) -> &'static str {
        "none"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_accepts_anything() {
        let auth = NoneAuthenticator::new();
        let identity = auth
            .authenticate(&Credentials::new("whoever", "whatever"))
            .unwrap();
        assert_eq!(identity.user_id, "anonymous");
        assert_eq!(auth.method_name(), "none");
    }
}
