//! Error types for the Interact runtime.

use thiserror::Error;

/// Result type alias for runtime operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Fault code the service reports for rejected credentials.
pub const ACCOUNT_FAULT: &str = "AccountFault";
/// Fault code for table-level failures.
pub const TABLE_FAULT: &str = "TableFault";
/// Fault code for list-level failures.
pub const LIST_FAULT: &str = "ListFault";
/// Fault code for exceeding the account's API rate limit.
pub const API_LIMIT_EXCEEDED: &str = "API_LIMIT_EXCEEDED";

/// Errors that can occur when talking to the Interact service.
#[derive(Debug, Error)]
pub enum Error {
    /// The service rejected the credentials during login.
    #[error("authentication rejected: {0}")]
    Auth(String),

    /// The endpoint was unreachable or the connection dropped.
    #[error("transport error: {0}")]
    Transport(String),

    /// An operation requiring a session was attempted without one.
    #[error("not connected: no active Interact session")]
    NotConnected,

    /// The service executed the call but returned an application-level fault.
    ///
    /// `code` is the remote fault name (e.g. "TableFault"); both fields are
    /// preserved exactly as the service reported them.
    #[error("{code}: {message}")]
    Remote { code: String, message: String },

    /// The pod qualifier does not name a known service endpoint.
    #[error("unknown pod: {0}")]
    UnknownPod(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Returns the fault code if this is a Remote error.
    pub fn fault_code(&self) -> Option<&str> {
        match self {
            Error::Remote { code, .. } => Some(code),
            _ => None,
        }
    }

    /// Returns true if the service reported an account-level fault.
    pub fn is_account_fault(&self) -> bool {
        self.fault_code() == Some(ACCOUNT_FAULT)
    }

    /// Returns true if the service reported a table-level fault.
    pub fn is_table_fault(&self) -> bool {
        self.fault_code() == Some(TABLE_FAULT)
    }

    /// Returns true if the service reported a list-level fault.
    pub fn is_list_fault(&self) -> bool {
        self.fault_code() == Some(LIST_FAULT)
    }

    /// Returns true if the account's API rate limit was exceeded.
    pub fn is_api_limit(&self) -> bool {
        self.fault_code() == Some(API_LIMIT_EXCEEDED)
    }
}
