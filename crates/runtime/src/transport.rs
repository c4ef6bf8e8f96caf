//! Remote-call seam for the Interact service.
//!
//! The SOAP envelope encoding and HTTP round trip live behind the
//! [`Transport`] trait; this crate only deals in operation names, structured
//! JSON arguments, and structured faults. Production transports are
//! constructed against the URLs from [`crate::endpoint::Pod`]; tests use
//! in-process implementations.

use crate::error::Result;
use serde_json::Value;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// A single remote operation, ready for the transport.
#[derive(Debug, Clone)]
pub struct Call {
    /// Remote operation name as defined by the WSDL (e.g. `mergeListMembers`)
    pub method: String,
    /// Positional arguments, already serialized to their wire shapes
    pub args: Vec<Value>,
    /// Session handle to attach as the SOAP session header, when one is held
    pub session_id: Option<Arc<str>>,
}

impl Call {
    /// Creates a call with no session attached.
    pub fn new(method: impl Into<String>, args: Vec<Value>) -> Self {
        Self {
            method: method.into(),
            args,
            session_id: None,
        }
    }

    /// Attaches a session handle to the call.
    pub fn with_session(mut self, session_id: Arc<str>) -> Self {
        self.session_id = Some(session_id);
        self
    }
}

/// Future returned by [`Transport::invoke`].
pub type TransportFuture<'a> = Pin<Box<dyn Future<Output = Result<Value>> + Send + 'a>>;

/// The remote-call mechanism the session layer is built on.
///
/// Implementations execute a named remote operation against the service and
/// surface outcomes as:
///
/// - `Ok(value)` - the structured response body, unchanged
/// - `Err(Error::Transport)` - the endpoint was unreachable or the connection
///   dropped mid-call
/// - `Err(Error::Remote { code, message })` - the service executed the call
///   but reported a fault; code and message are preserved verbatim
pub trait Transport: Send + Sync {
    /// Executes the call and awaits the structured response.
    fn invoke(&self, call: Call) -> TransportFuture<'_>;
}
