//! interact: Rust client for the Responsys Interact API
//!
//! This crate provides a connection-managed wrapper around the Interact SOAP
//! service. It authenticates, exposes one typed method per remote operation,
//! and releases the session deterministically.
//!
//! # Examples
//!
//! ## Explicit lifecycle
//!
//! ```ignore
//! use interact::{Credentials, InteractClient, InteractObject, ListMergeRule, Pod, RecordData};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let credentials = Credentials::new("user", "pass", Pod::Interact2);
//!     let client = InteractClient::new(credentials, transport);
//!
//!     client.connect().await?;
//!     let list = InteractObject::new("contacts", "newsletter");
//!     let result = client
//!         .merge_list_members(&list, &records, &ListMergeRule::default())
//!         .await?;
//!     println!("inserted {}", result.insert_count);
//!     client.disconnect().await;
//!     Ok(())
//! }
//! ```
//!
//! ## Scoped sessions
//!
//! Responsys limits the number of active sessions per account, so prefer
//! [`InteractClient::with_session`], which disconnects on every exit path:
//!
//! ```ignore
//! let result = client
//!     .with_session(|client| async move {
//!         client
//!             .merge_list_members(&list, &records, &ListMergeRule::default())
//!             .await
//!     })
//!     .await?;
//! ```

mod client;
mod events;
mod folders;
mod lists;
mod tables;

pub use client::InteractClient;

// Re-export the wire types for convenience
pub use interact_protocol::{
    CustomEvent, DeleteResult, EmailFormat, Field, FieldType, FolderResult, InteractObject,
    ListMergeRule, LoginResult, MatchOperator, MergeResult, OptionalData, PermissionStatus,
    QueryColumn, Recipient, RecipientData, RecipientResult, Record, RecordData, ServerAuthResult,
    TriggerResult, UpdateOnMatch,
};

// Re-export interact-protocol and interact-runtime for direct access
pub use interact_protocol;
pub use interact_runtime;

// Re-export the runtime surface callers need to construct and drive a client
pub use interact_runtime::{
    Call, Credentials, DEFAULT_SESSION_LIFETIME, Error, Pod, Result, Transport, TransportFuture,
};
