//! The connection-managed Interact client.

use interact_protocol::{LoginResult, ServerAuthResult};
use interact_runtime::{Credentials, Result, Session, Transport};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

/// Client for the Responsys Interact API.
///
/// Owns a single remote session: [`connect`](Self::connect) logs in and
/// stores the returned handle, every typed operation dispatches bound to that
/// handle, and [`disconnect`](Self::disconnect) releases it. The SOAP round
/// trips themselves go through the injected [`Transport`].
pub struct InteractClient {
    session: Session,
}

impl InteractClient {
    /// Creates a disconnected client over the given transport.
    pub fn new(credentials: Credentials, transport: Arc<dyn Transport>) -> Self {
        Self {
            session: Session::new(credentials, transport),
        }
    }

    /// Overrides the assumed remote session lifetime (default 600 s).
    pub fn session_lifetime(mut self, lifetime: Duration) -> Self {
        self.session = self.session.with_lifetime(lifetime);
        self
    }

    /// The credentials this client authenticates with.
    pub fn credentials(&self) -> &Credentials {
        self.session.credentials()
    }

    /// Whether a session handle is currently held.
    pub fn connected(&self) -> bool {
        self.session.connected()
    }

    /// Logs in to the Interact service and stores the session handle.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Auth`](interact_runtime::Error::Auth) if the service
    /// rejects the credentials and
    /// [`Error::Transport`](interact_runtime::Error::Transport) if the
    /// endpoint is unreachable.
    pub async fn connect(&self) -> Result<()> {
        self.session.connect().await?;
        Ok(())
    }

    /// Logs out and clears the session handle.
    ///
    /// A no-op when disconnected; logout failures are reported but never
    /// prevent the handle from being cleared locally.
    pub async fn disconnect(&self) {
        self.session.disconnect().await;
    }

    /// Connects, runs `body`, and disconnects on every exit path.
    ///
    /// The session is released exactly once whether the body succeeds or
    /// fails, which keeps long-running jobs from exhausting the account's
    /// concurrent-session cap.
    pub async fn with_session<'a, T, F, Fut>(&'a self, body: F) -> Result<T>
    where
        F: FnOnce(&'a Self) -> Fut,
        Fut: Future<Output = Result<T>> + 'a,
    {
        self.connect().await?;
        let result = body(self).await;
        self.disconnect().await;
        result
    }

    /// Executes a named remote operation and returns the raw response.
    ///
    /// Escape hatch for operations without a typed wrapper; the typed methods
    /// are preferred where they exist.
    pub async fn invoke(&self, method: &str, args: Vec<Value>) -> Result<Value> {
        self.session.call(method, args).await
    }

    /// `loginWithCertificate` call: certificate-based session establishment.
    ///
    /// Dispatched outside any held session; the returned handle is not stored.
    pub async fn login_with_certificate(
        &self,
        encrypted_server_challenge: &str,
    ) -> Result<LoginResult> {
        let response = self
            .session
            .call_unbound(
                "loginWithCertificate",
                vec![Value::String(encrypted_server_challenge.to_string())],
            )
            .await?;
        serde_json::from_value(response).map_err(Into::into)
    }

    /// `authenticateServer` call: first half of the certificate handshake.
    pub async fn authenticate_server(
        &self,
        username: &str,
        client_challenge: &str,
    ) -> Result<ServerAuthResult> {
        let response = self
            .session
            .call_unbound(
                "authenticateServer",
                vec![
                    Value::String(username.to_string()),
                    Value::String(client_challenge.to_string()),
                ],
            )
            .await?;
        serde_json::from_value(response).map_err(Into::into)
    }

    /// Dispatches a session-bound call and deserializes the response.
    pub(crate) async fn call<R: DeserializeOwned>(
        &self,
        method: &str,
        args: Vec<Value>,
    ) -> Result<R> {
        let response = self.session.call(method, args).await?;
        serde_json::from_value(response).map_err(Into::into)
    }
}

/// Serializes one positional argument to its wire shape.
pub(crate) fn arg<T: Serialize>(value: &T) -> Result<Value> {
    serde_json::to_value(value).map_err(Into::into)
}

/// Responses that collapse one-element arrays into a bare object.
///
/// The SOAP layer returns either a single result object or a list of them for
/// the delete/merge/trigger operations; this normalizes both to a `Vec`.
#[derive(serde::Deserialize)]
#[serde(untagged)]
pub(crate) enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    pub(crate) fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::Many(items) => items,
            OneOrMany::One(item) => vec![item],
        }
    }
}
