//! Table management operations.

use crate::client::{InteractClient, OneOrMany, arg};
use interact_protocol::{
    DeleteResult, Field, InteractObject, MergeResult, QueryColumn, RecordData, UpdateOnMatch,
};
use interact_runtime::Result;

impl InteractClient {
    /// `createTable` call. Returns true on success.
    pub async fn create_table(&self, table: &InteractObject, fields: &[Field]) -> Result<bool> {
        self.call("createTable", vec![arg(table)?, arg(&fields)?])
            .await
    }

    /// `createTableWithPK` call: creates a table with the named primary-key
    /// columns. Returns true on success.
    pub async fn create_table_with_pk(
        &self,
        table: &InteractObject,
        fields: &[Field],
        primary_keys: &[String],
    ) -> Result<bool> {
        self.call(
            "createTableWithPK",
            vec![arg(table)?, arg(&fields)?, arg(&primary_keys)?],
        )
        .await
    }

    /// `deleteTable` call. Returns true on success.
    pub async fn delete_table(&self, table: &InteractObject) -> Result<bool> {
        self.call("deleteTable", vec![arg(table)?]).await
    }

    /// `truncateTable` call: removes all records, keeping the table. Returns
    /// true on success.
    pub async fn truncate_table(&self, table: &InteractObject) -> Result<bool> {
        self.call("truncateTable", vec![arg(table)?]).await
    }

    /// `deleteTableRecords` call.
    pub async fn delete_table_records(
        &self,
        table: &InteractObject,
        query_column: QueryColumn,
        ids_to_delete: &[String],
    ) -> Result<Vec<DeleteResult>> {
        let response: OneOrMany<DeleteResult> = self
            .call(
                "deleteTableRecords",
                vec![arg(table)?, arg(&query_column)?, arg(&ids_to_delete)?],
            )
            .await?;
        Ok(response.into_vec())
    }

    /// `mergeTableRecords` call: merges records matching on the named
    /// columns.
    pub async fn merge_table_records(
        &self,
        table: &InteractObject,
        record_data: &RecordData,
        match_column_names: &[String],
    ) -> Result<MergeResult> {
        self.call(
            "mergeTableRecords",
            vec![arg(table)?, arg(record_data)?, arg(&match_column_names)?],
        )
        .await
    }

    /// `mergeTableRecordsWithPK` call: merges records matching on the table's
    /// primary key.
    pub async fn merge_table_records_with_pk(
        &self,
        table: &InteractObject,
        record_data: &RecordData,
        insert_on_no_match: bool,
        update_on_match: UpdateOnMatch,
    ) -> Result<MergeResult> {
        self.call(
            "mergeTableRecordsWithPK",
            vec![
                arg(table)?,
                arg(record_data)?,
                arg(&insert_on_no_match)?,
                arg(&update_on_match)?,
            ],
        )
        .await
    }

    /// `retrieveTableRecords` call.
    pub async fn retrieve_table_records(
        &self,
        table: &InteractObject,
        query_column: QueryColumn,
        field_list: &[String],
        ids_to_retrieve: &[String],
    ) -> Result<RecordData> {
        self.call(
            "retrieveTableRecords",
            vec![
                arg(table)?,
                arg(&query_column)?,
                arg(&field_list)?,
                arg(&ids_to_retrieve)?,
            ],
        )
        .await
    }
}
