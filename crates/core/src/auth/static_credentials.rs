//! Static credential authentication.

use super::{AuthError, Authenticator, Credentials, Identity};

/// Authenticator that validates logins against one configured
/// email/password pair.
///
/// The pair comes from configuration rather than being baked into the
/// binary; a future method can delegate to a real identity service.
pub struct StaticAuthenticator {
    email: String,
    password: String,
}

impl StaticAuthenticator {
    pub fn new(email: String, password: String) -> Self {
        Self { email, password }
    }
}

impl Authenticator for StaticAuthenticator {
    fn authenticate(&self, credentials: &Credentials) -> Result<Identity, AuthError> {
        // Constant-time comparison to prevent timing attacks
        let email_ok = constant_time_eq(credentials.email.as_bytes(), self.email.as_bytes());
        let password_ok =
            constant_time_eq(credentials.password.as_bytes(), self.password.as_bytes());

        if email_ok && password_ok {
            Ok(Identity {
                user_id: self.email.clone(),
                method: "static".to_string(),
            })
        } else {
            Err(AuthError::InvalidCredentials(
                "Unknown email or wrong password".to_string(),
            ))
        }
    }

    fn method_name(&self) -> &'static str {
        "static"
    }
}

/// Constant-time byte comparison to prevent timing attacks.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut result = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        result |= x ^ y;
    }
    result == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_auth() -> StaticAuthenticator {
        StaticAuthenticator::new("admin@example.com".to_string(), "hunter2".to_string())
    }

    #[test]
    fn test_valid_credentials() {
        let auth = make_auth();
        let identity = auth
            .authenticate(&Credentials::new("admin@example.com", "hunter2"))
            .unwrap();
        assert_eq!(identity.user_id, "admin@example.com");
        assert_eq!(identity.method, "static");
    }

    #[test]
    fn test_wrong_password() {
        let auth = make_auth();
        let result = auth.authenticate(&Credentials::new("admin@example.com", "wrong"));
        assert!(matches!(result, Err(AuthError::InvalidCredentials(_))));
    }

    #[test]
    fn test_wrong_email() {
        let auth = make_auth();
        let result = auth.authenticate(&Credentials::new("other@example.com", "hunter2"));
        assert!(matches!(result, Err(AuthError::InvalidCredentials(_))));
    }

    #[test]
    fn test_constant_time_eq() {
        assert!(constant_time_eq(b"abc", b"abc"));
        assert!(!constant_time_eq(b"abc", b"abd"));
        assert!(!constant_time_eq(b"abc", b"abcd"));
        assert!(constant_time_eq(b"", b""));
    }
}
