// src/auth/store.rs
use crate::auth::session::{
    AuthError, Credential, Session, SessionListener, SessionProvider, Subscription,
};
use crate::auth::token::{hash_token, new_session_token, TokenHash};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Lifetime of a browser session, in seconds.
    pub session_ttl_secs: i64,
    /// Lifetime of the bearer credential handed in at sign-in, in seconds.
    pub credential_ttl_secs: i64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            session_ttl_secs: 60 * 60 * 24 * 7, // 7 days
            credential_ttl_secs: 60 * 60,
        }
    }
}

struct StoredSession {
    session: Session,
    credential: Credential,
}

#[derive(Default)]
struct StoreInner {
    sessions: HashMap<TokenHash, StoredSession>,
    listeners: HashMap<TokenHash, Vec<(u64, SessionListener)>>,
    next_listener_id: u64,
}

/// In-memory session provider keyed by the browser's session cookie.
/// Cheap to clone; clones share state.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<Mutex<StoreInner>>,
    cfg: SessionConfig,
}

impl SessionStore {
    pub fn new(cfg: SessionConfig) -> Self {
        Self {
            inner: Arc::new(Mutex::new(StoreInner::default())),
            cfg,
        }
    }

    pub fn session_ttl_secs(&self) -> i64 {
        self.cfg.session_ttl_secs
    }

    fn lock(&self) -> MutexGuard<'_, StoreInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Records a credential already issued by the identity provider and
    /// returns the raw cookie token for the new session.
    pub fn sign_in(&self, user_id: &str, credential: &str, now: i64) -> Result<String, AuthError> {
        let user_id = user_id.trim();
        if user_id.is_empty() {
            return Err(AuthError::InvalidCredential("missing user".into()));
        }
        let credential = credential.trim();
        if credential.is_empty() || credential.chars().any(char::is_whitespace) {
            return Err(AuthError::InvalidCredential("malformed credential".into()));
        }

        // Nothing refreshes the credential, so the session cannot outlive it.
        let credential_expires_at = now + self.cfg.credential_ttl_secs;
        let session_expires_at = (now + self.cfg.session_ttl_secs).min(credential_expires_at);

        let raw_token = new_session_token();
        let stored = StoredSession {
            session: Session {
                user_id: user_id.to_string(),
                expires_at: session_expires_at,
            },
            credential: Credential::new(credential, credential_expires_at),
        };

        let mut inner = self.lock();
        let listeners = Self::sweep_expired(&mut inner, now);
        inner.sessions.insert(hash_token(&raw_token), stored);
        drop(inner);

        notify(&listeners, None);
        tracing::info!(user_id, "session created");

        Ok(raw_token)
    }

    /// Drops every expired session and returns the listeners still watching them.
    fn sweep_expired(inner: &mut StoreInner, now: i64) -> Vec<SessionListener> {
        let expired: Vec<TokenHash> = inner
            .sessions
            .iter()
            .filter(|(_, stored)| stored.session.expires_at <= now)
            .map(|(key, _)| *key)
            .collect();
        if expired.is_empty() {
            return Vec::new();
        }

        for key in &expired {
            inner.sessions.remove(key);
        }
        tracing::debug!(count = expired.len(), "expired sessions swept");

        let inner = &*inner;
        expired
            .iter()
            .flat_map(|key| Self::listeners_for(inner, key))
            .collect()
    }

    /// Session provider bound to one browser cookie, evaluated at `now`.
    pub fn provider(&self, raw_token: Option<&str>, now: i64) -> CookieSession {
        CookieSession {
            store: self.clone(),
            key: raw_token.map(hash_token),
            now,
        }
    }

    /// Current session for `key`, dropping it (and telling listeners) once expired.
    fn session(&self, key: &TokenHash, now: i64) -> Option<Session> {
        let mut inner = self.lock();
        match inner.sessions.get(key) {
            None => return None,
            Some(stored) if stored.session.expires_at > now => {
                return Some(stored.session.clone());
            }
            Some(_) => {}
        }

        inner.sessions.remove(key);
        let listeners = Self::listeners_for(&inner, key);
        drop(inner);
        tracing::debug!("session expired");
        notify(&listeners, None);
        None
    }

    fn credential(&self, key: &TokenHash, now: i64) -> Option<Credential> {
        self.session(key, now)?;
        self.lock()
            .sessions
            .get(key)
            .map(|stored| stored.credential.clone())
            .filter(|credential| !credential.is_expired(now))
    }

    fn subscribe(&self, key: TokenHash, listener: SessionListener) -> Subscription {
        let id = {
            let mut inner = self.lock();
            let id = inner.next_listener_id;
            inner.next_listener_id += 1;
            inner
                .listeners
                .entry(key)
                .or_default()
                .push((id, Arc::clone(&listener)));
            id
        };

        let store = self.clone();
        Subscription::new(move || store.unsubscribe(&key, id))
    }

    fn unsubscribe(&self, key: &TokenHash, id: u64) {
        let mut inner = self.lock();
        if let Some(list) = inner.listeners.get_mut(key) {
            list.retain(|(listener_id, _)| *listener_id != id);
            if list.is_empty() {
                inner.listeners.remove(key);
            }
        }
    }

    fn remove(&self, key: &TokenHash) {
        let mut inner = self.lock();
        let removed = inner.sessions.remove(key);
        let listeners = Self::listeners_for(&inner, key);
        drop(inner);

        if let Some(stored) = removed {
            tracing::info!(user_id = %stored.session.user_id, "session signed out");
            notify(&listeners, None);
        }
    }

    fn listeners_for(inner: &StoreInner, key: &TokenHash) -> Vec<SessionListener> {
        inner
            .listeners
            .get(key)
            .map(|list| list.iter().map(|(_, l)| Arc::clone(l)).collect())
            .unwrap_or_default()
    }

    #[cfg(test)]
    pub fn listener_count(&self) -> usize {
        self.lock().listeners.values().map(Vec::len).sum()
    }

    #[cfg(test)]
    pub fn session_count(&self) -> usize {
        self.lock().sessions.len()
    }
}

// Listeners run outside the store lock so they may call back into it.
fn notify(listeners: &[SessionListener], session: Option<&Session>) {
    for listener in listeners {
        listener(session);
    }
}

/// `SessionProvider` view of one cookie at one instant.
pub struct CookieSession {
    store: SessionStore,
    key: Option<TokenHash>,
    now: i64,
}

impl SessionProvider for CookieSession {
    fn on_session_change(&self, listener: SessionListener) -> Subscription {
        let Some(key) = self.key else {
            listener(None);
            return Subscription::detached();
        };

        let subscription = self.store.subscribe(key, Arc::clone(&listener));
        let current = self.store.session(&key, self.now);
        listener(current.as_ref());
        subscription
    }

    fn current_credential(&self) -> Option<Credential> {
        let key = self.key.as_ref()?;
        self.store.credential(key, self.now)
    }

    fn sign_out(&self) -> Result<(), AuthError> {
        if let Some(key) = &self.key {
            self.store.remove(key);
        }
        Ok(())
    }
}
