//! Session lifecycle
//!
//! One explicit object owns the stored token and everything derived from it.
//! Derivations are pure functions of the token string, so the session state
//! is a snapshot recomputed wholesale on each read; nothing is cached across
//! a login, logout or eviction.

use common::error::StorageResult;
use common::storage::TokenStore;
use tracing::{info, warn};

use crate::claims;
use crate::permissions::Permissions;
use crate::roles::RoleSet;

/// Snapshot of everything derived from the stored token
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    /// The raw bearer token
    pub token: Option<String>,
    /// Subject claim, the user's email
    pub subject: Option<String>,
    /// Numeric user id (`userId` claim, falling back to `id`)
    pub user_id: Option<i64>,
    /// Roles extracted from the token
    pub roles: RoleSet,
    /// Capability flags derived from the roles
    pub permissions: Permissions,
}

impl SessionState {
    /// The logged-out state: no token, no roles, no capabilities
    pub fn anonymous() -> Self {
        Self::default()
    }

    fn from_token(token: &str) -> Self {
        let claims = claims::decode(token);
        let roles = RoleSet::new(
            claims
                .as_ref()
                .map(|c| c.role_names())
                .unwrap_or_default(),
        );
        let permissions = Permissions::from_roles(&roles);

        SessionState {
            token: Some(token.to_string()),
            subject: claims.as_ref().and_then(|c| c.sub.clone()),
            user_id: claims.as_ref().and_then(|c| c.numeric_user_id()),
            roles,
            permissions,
        }
    }

    /// Whether a token is attached to this snapshot
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// Session manager owning the token slot lifecycle
///
/// Construct one per context over an injected [`TokenStore`]; clones share
/// the same slot. The slot has a single writer (login/logout) and any number
/// of readers, each deriving from a whole-string snapshot.
#[derive(Clone)]
pub struct SessionManager {
    store: TokenStore,
}

impl SessionManager {
    /// Create a new session manager
    pub fn new(store: TokenStore) -> Self {
        SessionManager { store }
    }

    /// Read the slot once at startup
    ///
    /// An expired stored token is evicted here, so the app starts logged
    /// out instead of presenting stale access.
    pub fn initialize(&self) -> SessionState {
        let state = self.state();
        match &state.subject {
            Some(subject) => info!("Session restored for {}", subject),
            None => info!("No stored session"),
        }
        state
    }

    /// Store a freshly issued token and derive the new session state
    ///
    /// The token is stored as-is; an undecodable one degrades to a snapshot
    /// with no subject or roles, and the next read evicts it.
    pub fn login(&self, token: &str) -> StorageResult<SessionState> {
        self.store.save(token)?;
        let state = SessionState::from_token(token);
        match &state.subject {
            Some(subject) => info!("Session started for {}", subject),
            None => warn!("Session started with an undecodable token"),
        }
        Ok(state)
    }

    /// Clear the slot and with it all derived state
    pub fn logout(&self) -> StorageResult<()> {
        self.store.clear()?;
        info!("Session ended");
        Ok(())
    }

    /// Current snapshot, evicting an expired stored token
    pub fn state(&self) -> SessionState {
        let Some(token) = self.store.load() else {
            return SessionState::anonymous();
        };

        if claims::is_expired(&token) {
            warn!("Stored token is expired, clearing session");
            if let Err(e) = self.store.clear() {
                warn!("Failed to clear expired token: {}", e);
            }
            return SessionState::anonymous();
        }

        SessionState::from_token(&token)
    }

    /// The stored bearer token, if a live one is present
    pub fn token(&self) -> Option<String> {
        self.state().token
    }

    /// Whether a live token is stored
    pub fn is_authenticated(&self) -> bool {
        self.state().is_authenticated()
    }
}
