//! List management operations.

use crate::client::{InteractClient, OneOrMany, arg};
use interact_protocol::{
    DeleteResult, InteractObject, ListMergeRule, MergeResult, QueryColumn, RecipientResult,
    RecordData, UpdateOnMatch,
};
use interact_runtime::Result;
use serde::Deserialize;
use serde_json::Value;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct MergeRiidResponse {
    recipient_result: RecipientResult,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RetrieveListResponse {
    record_data: RecordData,
}

impl InteractClient {
    /// `mergeListMembers` call: inserts or updates list members according to
    /// the merge rule.
    pub async fn merge_list_members(
        &self,
        list: &InteractObject,
        record_data: &RecordData,
        merge_rule: &ListMergeRule,
    ) -> Result<MergeResult> {
        self.call(
            "mergeListMembers",
            vec![arg(list)?, arg(record_data)?, arg(merge_rule)?],
        )
        .await
    }

    /// `mergeListMembersRIID` call: like
    /// [`merge_list_members`](Self::merge_list_members), but reports the
    /// affected recipient's RIID.
    pub async fn merge_list_members_riid(
        &self,
        list: &InteractObject,
        record_data: &RecordData,
        merge_rule: &ListMergeRule,
    ) -> Result<RecipientResult> {
        let response: MergeRiidResponse = self
            .call(
                "mergeListMembersRIID",
                vec![arg(list)?, arg(record_data)?, arg(merge_rule)?],
            )
            .await?;
        Ok(response.recipient_result)
    }

    /// `deleteListMembers` call: removes the members matching `ids_to_delete`
    /// in `query_column`.
    pub async fn delete_list_members(
        &self,
        list: &InteractObject,
        query_column: QueryColumn,
        ids_to_delete: &[String],
    ) -> Result<Vec<DeleteResult>> {
        let response: OneOrMany<DeleteResult> = self
            .call(
                "deleteListMembers",
                vec![arg(list)?, arg(&query_column)?, arg(&ids_to_delete)?],
            )
            .await?;
        Ok(response.into_vec())
    }

    /// `retrieveListMembers` call: fetches `field_list` columns for the
    /// members matching `ids_to_retrieve`.
    pub async fn retrieve_list_members(
        &self,
        list: &InteractObject,
        query_column: QueryColumn,
        field_list: &[String],
        ids_to_retrieve: &[String],
    ) -> Result<RecordData> {
        let response: RetrieveListResponse = self
            .call(
                "retrieveListMembers",
                vec![
                    arg(list)?,
                    arg(&query_column)?,
                    arg(&field_list)?,
                    arg(&ids_to_retrieve)?,
                ],
            )
            .await?;
        Ok(response.record_data)
    }

    /// `mergeIntoProfileExtension` call: merges records into a profile
    /// extension table, reporting per-recipient results.
    pub async fn merge_into_profile_extension(
        &self,
        profile_extension: &InteractObject,
        record_data: &RecordData,
        match_column: &str,
        insert_on_no_match: bool,
        update_on_match: UpdateOnMatch,
    ) -> Result<Vec<RecipientResult>> {
        let response: OneOrMany<RecipientResult> = self
            .call(
                "mergeIntoProfileExtension",
                vec![
                    arg(profile_extension)?,
                    arg(record_data)?,
                    Value::String(match_column.to_string()),
                    arg(&insert_on_no_match)?,
                    arg(&update_on_match)?,
                ],
            )
            .await?;
        Ok(response.into_vec())
    }

    /// `deleteProfileExtensionMembers` call.
    pub async fn delete_profile_extension_members(
        &self,
        profile_extension: &InteractObject,
        query_column: QueryColumn,
        ids_to_delete: &[String],
    ) -> Result<Vec<DeleteResult>> {
        let response: OneOrMany<DeleteResult> = self
            .call(
                "deleteProfileExtensionMembers",
                vec![
                    arg(profile_extension)?,
                    arg(&query_column)?,
                    arg(&ids_to_delete)?,
                ],
            )
            .await?;
        Ok(response.into_vec())
    }

    /// `retrieveProfileExtensionRecords` call.
    pub async fn retrieve_profile_extension_records(
        &self,
        profile_extension: &InteractObject,
        query_column: QueryColumn,
        field_list: &[String],
        ids_to_retrieve: &[String],
    ) -> Result<RecordData> {
        self.call(
            "retrieveProfileExtensionRecords",
            vec![
                arg(profile_extension)?,
                arg(&query_column)?,
                arg(&field_list)?,
                arg(&ids_to_retrieve)?,
            ],
        )
        .await
    }
}
