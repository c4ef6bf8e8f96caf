//! Interact Runtime - Session lifecycle, transport seam, and endpoint registry
//!
//! This crate provides the low-level infrastructure for communicating with the
//! Responsys Interact web service:
//!
//! - **Endpoints**: Resolving a pod qualifier to its WSDL and service URLs
//! - **Transport**: The seam through which named remote operations are
//!   executed against the service
//! - **Session**: Login/logout lifecycle and per-call session binding
//! - **Errors**: The error types shared by the whole client stack
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐
//! │   interact-rs    │  Typed operations (mergeListMembers, ...)
//! └────────┬─────────┘
//!          │ dispatches through
//! ┌────────▼─────────┐
//! │ interact-runtime │  This crate
//! │  ┌────────────┐  │
//! │  │  Session   │  │  connect / disconnect / call
//! │  └────────────┘  │
//! │  ┌────────────┐  │
//! │  │ Transport  │  │  SOAP round trips (external implementation)
//! │  └────────────┘  │
//! └──────────────────┘
//! ```
//!
//! # Decoupling via Transport
//!
//! The SOAP encoding itself is not part of this crate. The [`Transport`] trait
//! is the boundary: implementations take a [`Call`] (operation name, JSON
//! arguments, optional session handle) and return the structured response or a
//! structured fault. This keeps the session logic testable without a network.

pub mod endpoint;
pub mod error;
pub mod session;
pub mod transport;

// Re-export key types at crate root
pub use endpoint::{Credentials, Pod};
pub use error::{ACCOUNT_FAULT, API_LIMIT_EXCEEDED, Error, LIST_FAULT, Result, TABLE_FAULT};
pub use session::{DEFAULT_SESSION_LIFETIME, Session};
pub use transport::{Call, Transport, TransportFuture};
