//! Session lifecycle for the Interact service.
//!
//! Responsys enforces a hard cap on concurrently active sessions per account,
//! so the one property this module guards carefully is deterministic release:
//! `disconnect` always clears the held handle, logout failures are tolerated,
//! and expired handles are abandoned before a fresh login.

use crate::endpoint::Credentials;
use crate::error::{ACCOUNT_FAULT, Error, Result};
use crate::transport::{Call, Transport};
use interact_protocol::LoginResult;
use parking_lot::Mutex;
use serde_json::Value;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// How long the service keeps a session alive, per Responsys documentation.
pub const DEFAULT_SESSION_LIFETIME: Duration = Duration::from_secs(600);

/// A held session handle plus the time it was opened.
struct SessionState {
    id: Arc<str>,
    opened_at: Instant,
}

impl SessionState {
    fn is_expired(&self, lifetime: Duration) -> bool {
        self.opened_at.elapsed() >= lifetime
    }
}

/// Owns the remote session: at most one active handle at a time.
///
/// All remote traffic goes through [`Session::call`], which attaches the
/// current handle; calls issued without a connected session fail with
/// [`Error::NotConnected`] before touching the transport.
pub struct Session {
    transport: Arc<dyn Transport>,
    credentials: Credentials,
    lifetime: Duration,
    state: Mutex<Option<SessionState>>,
}

impl Session {
    /// Creates a disconnected session over the given transport.
    pub fn new(credentials: Credentials, transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            credentials,
            lifetime: DEFAULT_SESSION_LIFETIME,
            state: Mutex::new(None),
        }
    }

    /// Overrides the assumed remote session lifetime.
    pub fn with_lifetime(mut self, lifetime: Duration) -> Self {
        self.lifetime = lifetime;
        self
    }

    /// The credentials this session authenticates with.
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Whether a session handle is currently held.
    pub fn connected(&self) -> bool {
        self.state.lock().is_some()
    }

    /// The held session handle, if any.
    pub fn session_id(&self) -> Option<Arc<str>> {
        self.state.lock().as_ref().map(|state| Arc::clone(&state.id))
    }

    /// Logs in and stores the returned session handle.
    ///
    /// A held handle that has not expired is reused without a second login.
    /// An expired handle is logged out first (failure tolerated) to avoid
    /// tripping the account's concurrent-session cap.
    pub async fn connect(&self) -> Result<Arc<str>> {
        let existing = {
            let state = self.state.lock();
            state
                .as_ref()
                .map(|s| (Arc::clone(&s.id), s.is_expired(self.lifetime)))
        };

        if let Some((id, expired)) = existing {
            if !expired {
                tracing::debug!("reusing live session");
                return Ok(id);
            }
            tracing::debug!("abandoning expired session before login");
            self.logout_quietly(id).await;
            self.state.lock().take();
        }

        let login_call = Call::new(
            "login",
            vec![
                Value::String(self.credentials.username().to_string()),
                Value::String(self.credentials.password().to_string()),
            ],
        );

        let response = self.transport.invoke(login_call).await.map_err(|error| {
            match error {
                Error::Remote { code, message } if code == ACCOUNT_FAULT => {
                    tracing::error!("login failed, invalid username or password");
                    Error::Auth(message)
                }
                other => other,
            }
        })?;

        let login: LoginResult = serde_json::from_value(response)?;
        let id: Arc<str> = Arc::from(login.session_id.as_str());
        *self.state.lock() = Some(SessionState {
            id: Arc::clone(&id),
            opened_at: Instant::now(),
        });

        tracing::debug!(username = self.credentials.username(), "session opened");
        Ok(id)
    }

    /// Logs out and clears the held handle.
    ///
    /// Logout failure is reported but never prevents the local clear. Calling
    /// this without a held session is a no-op, so it is safe to call
    /// unconditionally during cleanup.
    pub async fn disconnect(&self) {
        let Some(state) = self.state.lock().take() else {
            return;
        };
        self.logout_quietly(state.id).await;
        tracing::debug!("session closed");
    }

    /// Executes a named remote operation bound to the current session.
    ///
    /// Returns the structured response unchanged; remote faults propagate with
    /// their code and message intact.
    pub async fn call(&self, method: &str, args: Vec<Value>) -> Result<Value> {
        let session_id = self.session_id().ok_or(Error::NotConnected)?;
        tracing::debug!(method, "dispatching call");
        self.transport
            .invoke(Call::new(method, args).with_session(session_id))
            .await
    }

    /// Executes a named remote operation without binding a session.
    ///
    /// Used by the certificate-auth handshake, which runs before a session
    /// exists.
    pub async fn call_unbound(&self, method: &str, args: Vec<Value>) -> Result<Value> {
        tracing::debug!(method, "dispatching unbound call");
        self.transport.invoke(Call::new(method, args)).await
    }

    async fn logout_quietly(&self, session_id: Arc<str>) {
        let logout = Call::new("logout", Vec::new()).with_session(session_id);
        if let Err(error) = self.transport.invoke(logout).await {
            tracing::warn!(%error, "logout call failed, session may not have been terminated");
        }
    }
}
