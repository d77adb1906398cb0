// src/auth/session.rs
use std::error::Error;
use std::fmt;
use std::sync::Arc;

/// A signed-in user as seen by the portal. Owned by the session provider;
/// views only observe whether one is present.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub user_id: String,
    pub expires_at: i64,
}

/// Short-lived bearer token derived from a session.
#[derive(Clone, PartialEq)]
pub struct Credential {
    token: String,
    expires_at: i64,
}

impl Credential {
    pub fn new(token: impl Into<String>, expires_at: i64) -> Self {
        Self {
            token: token.into(),
            expires_at,
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn is_expired(&self, now: i64) -> bool {
        self.expires_at <= now
    }
}

// Keep tokens out of logs.
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("token", &"<redacted>")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AuthError {
    InvalidCredential(String),
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::InvalidCredential(msg) => write!(f, "Invalid credential: {msg}"),
        }
    }
}

impl Error for AuthError {}

/// Called with the current session whenever it changes (and once on subscribe).
pub type SessionListener = Arc<dyn Fn(Option<&Session>) + Send + Sync>;

/// The external authentication provider, as far as the views care.
pub trait SessionProvider: Send + Sync {
    /// Registers `listener` and immediately calls it with the current state.
    /// The listener stays registered until the returned guard is dropped.
    fn on_session_change(&self, listener: SessionListener) -> Subscription;

    /// Bearer credential for the current session, if any and not expired.
    fn current_credential(&self) -> Option<Credential>;

    fn sign_out(&self) -> Result<(), AuthError>;
}

/// Unsubscribes its listener when dropped.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce() + Send>>,
}

impl Subscription {
    pub fn new(cancel: impl FnOnce() + Send + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// A subscription with nothing to undo.
    pub fn detached() -> Self {
        Self { cancel: None }
    }

    #[cfg(test)]
    pub fn unsubscribe(mut self) {
        self.cancel_now();
    }

    fn cancel_now(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel_now();
    }
}
