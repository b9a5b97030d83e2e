//! # Session Store
//!
//! Per-browser-session key/value storage, keyed by the opaque session
//! identifier delivered via cookie. The cart lives here between the
//! create-payment request and the return redirect.
//!
//! The controller depends only on the `SessionStore` trait, not on any
//! concrete session middleware, so tests can inject their own store.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Session key under which the serialized cart is stored
pub const CART_KEY: &str = "cart";

/// Session key marking a payment as already executed for this session
pub const COMPLETED_PAYMENT_KEY: &str = "completed_payment";

/// Per-session key/value storage.
///
/// Each request reads and writes only its own session entry, so no
/// cross-session coordination is needed.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Read a value for a session, if present
    async fn get(&self, session_id: &str, key: &str) -> Option<Value>;

    /// Write a value for a session, creating the session entry on first use
    async fn set(&self, session_id: &str, key: &str, value: Value);

    /// Remove a value for a session
    async fn remove(&self, session_id: &str, key: &str);
}

/// Type alias for a shared session store (dynamic dispatch)
pub type BoxedSessionStore = Arc<dyn SessionStore>;

/// In-memory session store.
///
/// Sessions live for the life of the process; there is no expiry sweep.
/// This is the transient storage the flow calls for, and doubles as the
/// test substitute.
#[derive(Clone, Default)]
pub struct MemorySessionStore {
    sessions: Arc<RwLock<HashMap<String, HashMap<String, Value>>>>,
}

impl MemorySessionStore {
    /// Creates a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of sessions with at least one value
    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn get(&self, session_id: &str, key: &str) -> Option<Value> {
        let sessions = self.sessions.read().await;
        sessions.get(session_id).and_then(|entry| entry.get(key).cloned())
    }

    async fn set(&self, session_id: &str, key: &str, value: Value) {
        let mut sessions = self.sessions.write().await;
        sessions
            .entry(session_id.to_string())
            .or_default()
            .insert(key.to_string(), value);
    }

    async fn remove(&self, session_id: &str, key: &str) {
        let mut sessions = self.sessions.write().await;
        if let Some(entry) = sessions.get_mut(session_id) {
            entry.remove(key);
        }
    }
}
