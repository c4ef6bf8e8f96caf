//! Wire types for the Responsys Interact SOAP API.
//!
//! This crate contains the serde-serializable types exchanged with the
//! Interact web service. They represent the "protocol layer" - the shapes of
//! data as they appear on the wire, with SOAP's camelCase attribute names.
//!
//! # Design Philosophy
//!
//! Types in this crate are:
//! - **Pure data**: No behavior beyond serialization/deserialization and
//!   small accessors over the wire data
//! - **1:1 with the service contract**: Match the shapes defined by the
//!   Interact WSDL
//! - **Stable**: Changes only when the wire contract changes
//!
//! Higher-level ergonomic APIs are built on top of these types in
//! `interact-rs`.

pub mod records;
pub mod results;
pub mod types;

pub use records::*;
pub use results::*;
pub use types::*;
