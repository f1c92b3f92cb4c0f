//! Account credentials for the SmartPOST self-service API.

/// SmartPOST account credentials.
///
/// Sent as the `<authentication>` block at the head of every request
/// document.
#[derive(Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct Credentials {
    /// The self-service account username.
    pub username: String,
    /// The self-service account password.
    pub password: String,
}

impl Credentials {
    /// Create credentials from a username and password.
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}
