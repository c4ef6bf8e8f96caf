//! Request types used across the wire.
//!
//! These mirror the Interact WSDL's input types. Field names serialize with
//! the SOAP camelCase convention.

use serde::{Deserialize, Serialize};

/// Reference to an object (list, table, or profile extension) inside a
/// Responsys folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractObject {
    /// Folder containing the object
    pub folder_name: String,
    /// Name of the list or table inside the folder
    pub object_name: String,
}

impl InteractObject {
    /// Creates a reference from folder and object names.
    pub fn new(folder_name: impl Into<String>, object_name: impl Into<String>) -> Self {
        Self {
            folder_name: folder_name.into(),
            object_name: object_name.into(),
        }
    }
}

/// Column used to match records in query and delete operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QueryColumn {
    Riid,
    EmailAddress,
    CustomerId,
    MobileNumber,
}

/// Operator combining multiple merge-rule match columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchOperator {
    /// Single match column (default)
    #[default]
    None,
    And,
    Or,
}

/// What to do when a merge matches an existing record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UpdateOnMatch {
    /// Overwrite all fields of the matched record (default)
    #[default]
    ReplaceAll,
    NoUpdate,
}

/// Permission status applied to newly inserted list members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PermissionStatus {
    #[default]
    Optin,
    Optout,
}

/// Merge behavior for `mergeListMembers`.
///
/// `Default` carries the service's conventional settings; override individual
/// fields as needed:
///
/// ```ignore
/// let rule = ListMergeRule {
///     match_column_name_1: "Email_Address_".into(),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListMergeRule {
    /// Insert records that match no existing member
    pub insert_on_no_match: bool,
    /// Update behavior for matched records
    pub update_on_match: UpdateOnMatch,
    /// Primary match column
    #[serde(rename = "matchColumnName1")]
    pub match_column_name_1: String,
    /// Optional second match column
    #[serde(rename = "matchColumnName2", skip_serializing_if = "Option::is_none")]
    pub match_column_name_2: Option<String>,
    /// Optional third match column
    #[serde(rename = "matchColumnName3", skip_serializing_if = "Option::is_none")]
    pub match_column_name_3: Option<String>,
    /// Operator combining the match columns
    pub match_operator: MatchOperator,
    /// Value representing an opted-in member
    pub optin_value: String,
    /// Value representing an opted-out member
    pub optout_value: String,
    /// Value representing HTML email format
    pub html_value: String,
    /// Value representing text email format
    pub text_value: String,
    /// Channel-empty rejection flag
    pub reject_record_if_channel_empty: String,
    /// Permission status for inserted members
    pub default_permission_status: PermissionStatus,
}

impl Default for ListMergeRule {
    fn default() -> Self {
        Self {
            insert_on_no_match: true,
            update_on_match: UpdateOnMatch::ReplaceAll,
            match_column_name_1: "Customer_Id_".to_string(),
            match_column_name_2: None,
            match_column_name_3: None,
            match_operator: MatchOperator::None,
            optin_value: "I".to_string(),
            optout_value: "O".to_string(),
            html_value: "H".to_string(),
            text_value: "T".to_string(),
            reject_record_if_channel_empty: "E".to_string(),
            default_permission_status: PermissionStatus::Optin,
        }
    }
}

/// Column type for table creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FieldType {
    Str25,
    Str50,
    Str100,
    Str255,
    Str500,
    Str4000,
    Integer,
    Number,
    Timestamp,
}

/// Column definition for `createTable` / `createTableWithPK`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    /// Column name
    pub field_name: String,
    /// Column type
    pub field_type: FieldType,
}

impl Field {
    /// Creates a column definition.
    pub fn new(field_name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            field_name: field_name.into(),
            field_type,
        }
    }
}

/// Email format for a recipient of a triggered event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EmailFormat {
    #[default]
    #[serde(rename = "TEXT_FORMAT")]
    Text,
    #[serde(rename = "HTML_FORMAT")]
    Html,
    #[serde(rename = "MULTIPART_FORMAT")]
    Multipart,
    #[serde(rename = "NO_FORMAT")]
    None,
}

/// Target recipient of a triggered custom event.
///
/// At least one of `recipient_id`, `customer_id`, `email_address`, or
/// `mobile_number` must identify the member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipient {
    /// List the recipient belongs to
    pub list_name: InteractObject,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile_number: Option<String>,
    pub email_format: EmailFormat,
}

impl Recipient {
    /// Creates a recipient identified by customer id, with the default text
    /// email format.
    pub fn by_customer_id(list_name: InteractObject, customer_id: impl Into<String>) -> Self {
        Self {
            list_name,
            recipient_id: None,
            customer_id: Some(customer_id.into()),
            email_address: None,
            mobile_number: None,
            email_format: EmailFormat::default(),
        }
    }

    /// Creates a recipient identified by RIID.
    pub fn by_recipient_id(list_name: InteractObject, recipient_id: i64) -> Self {
        Self {
            list_name,
            recipient_id: Some(recipient_id),
            customer_id: None,
            email_address: None,
            mobile_number: None,
            email_format: EmailFormat::default(),
        }
    }
}

/// Name/value pair attached to a triggered event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionalData {
    pub name: String,
    pub value: serde_json::Value,
}

/// Recipient plus optional event data for `triggerCustomEvent`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipientData {
    pub recipient: Recipient,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub optional_data: Vec<OptionalData>,
}

impl RecipientData {
    /// Creates recipient data with no optional fields.
    pub fn new(recipient: Recipient) -> Self {
        Self {
            recipient,
            optional_data: Vec::new(),
        }
    }

    /// Attaches a named data value.
    pub fn with_data(mut self, name: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.optional_data.push(OptionalData {
            name: name.into(),
            value: value.into(),
        });
        self
    }
}

/// Custom event definition for `triggerCustomEvent`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomEvent {
    pub event_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_string_data_mapping: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_date_data_mapping: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_number_data_mapping: Option<String>,
}

impl CustomEvent {
    /// Creates an event with just a name.
    pub fn new(event_name: impl Into<String>) -> Self {
        Self {
            event_name: event_name.into(),
            event_id: None,
            event_string_data_mapping: None,
            event_date_data_mapping: None,
            event_number_data_mapping: None,
        }
    }
}
