//! Result types returned by Interact operations.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Result of the `login` call: the session handle for subsequent requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResult {
    pub session_id: String,
}

/// Result of the `authenticateServer` certificate-auth handshake.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerAuthResult {
    pub auth_session_id: String,
    pub encrypted_client_challenge: String,
    pub server_challenge: String,
}

/// Outcome of a merge operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeResult {
    pub insert_count: u32,
    pub update_count: u32,
    pub rejected_count: u32,
    pub total_count: u32,
    #[serde(default)]
    pub error_message: Option<String>,
}

fn failed_record_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"Record (\d+) =").unwrap())
}

impl MergeResult {
    /// Indices of rejected records, parsed from the service's error message.
    ///
    /// The service reports rejections as `Record N = ...` fragments inside
    /// `error_message`; an empty or absent message yields an empty list.
    pub fn failed_records(&self) -> Vec<usize> {
        let Some(message) = self.error_message.as_deref() else {
            return Vec::new();
        };
        failed_record_pattern()
            .captures_iter(message)
            .filter_map(|caps| caps[1].parse().ok())
            .collect()
    }
}

/// Per-recipient outcome of RIID-returning merges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipientResult {
    pub recipient_id: i64,
    #[serde(default)]
    pub error_message: Option<String>,
}

/// Per-record outcome of a delete operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResult {
    pub success: bool,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub exception_code: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
}

/// Per-recipient outcome of `triggerCustomEvent`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriggerResult {
    pub recipient_id: i64,
    pub success: bool,
    #[serde(default)]
    pub error_message: Option<String>,
}

/// A folder entry from `listFolders`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderResult {
    pub name: String,
}
