//! Folder management operations.

use crate::client::{InteractClient, OneOrMany};
use interact_protocol::FolderResult;
use interact_runtime::Result;

impl InteractClient {
    /// `listFolders` call: lists the account's content folders.
    pub async fn list_folders(&self) -> Result<Vec<FolderResult>> {
        let response: OneOrMany<FolderResult> = self.call("listFolders", Vec::new()).await?;
        Ok(response.into_vec())
    }
}
