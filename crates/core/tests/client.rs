//! End-to-end tests for the client against a scripted in-process transport.

use interact::{
    Call, Credentials, CustomEvent, Error, InteractClient, InteractObject, ListMergeRule, Pod,
    QueryColumn, Recipient, RecipientData, Record, RecordData, Result, Transport, TransportFuture,
};
use parking_lot::Mutex;
use serde_json::{Value, json};
use std::collections::VecDeque;
use std::sync::Arc;

/// Transport that replays scripted responses and records every call.
struct ScriptedTransport {
    calls: Mutex<Vec<Call>>,
    responses: Mutex<VecDeque<Result<Value>>>,
}

impl ScriptedTransport {
    fn new(responses: Vec<Result<Value>>) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            responses: Mutex::new(responses.into()),
        })
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    fn methods(&self) -> Vec<String> {
        self.calls.lock().iter().map(|c| c.method.clone()).collect()
    }
}

impl Transport for ScriptedTransport {
    fn invoke(&self, call: Call) -> TransportFuture<'_> {
        self.calls.lock().push(call);
        let response = self
            .responses
            .lock()
            .pop_front()
            .unwrap_or_else(|| panic!("transport called more times than scripted"));
        Box::pin(async move { response })
    }
}

fn client_over(transport: &Arc<ScriptedTransport>) -> InteractClient {
    InteractClient::new(
        Credentials::new("user", "pass", Pod::Interact2),
        Arc::clone(transport) as Arc<dyn Transport>,
    )
}

fn login_ok(session_id: &str) -> Result<Value> {
    Ok(json!({"sessionId": session_id}))
}

fn logout_ok() -> Result<Value> {
    Ok(json!(true))
}

#[tokio::test]
async fn invoke_without_connect_fails_without_network() {
    let transport = ScriptedTransport::new(vec![]);
    let client = client_over(&transport);

    let error = client.invoke("listFolders", vec![]).await.unwrap_err();
    assert!(matches!(error, Error::NotConnected));
    assert!(transport.calls().is_empty());
}

#[tokio::test]
async fn connect_then_disconnect_leaves_client_unusable() {
    let transport = ScriptedTransport::new(vec![login_ok("s1"), logout_ok()]);
    let client = client_over(&transport);

    client.connect().await.unwrap();
    assert!(client.connected());
    client.disconnect().await;
    assert!(!client.connected());

    let error = client.invoke("listFolders", vec![]).await.unwrap_err();
    assert!(matches!(error, Error::NotConnected));
}

#[tokio::test]
async fn disconnect_twice_is_idempotent() {
    let transport = ScriptedTransport::new(vec![login_ok("s1"), logout_ok()]);
    let client = client_over(&transport);

    client.connect().await.unwrap();
    client.disconnect().await;
    client.disconnect().await;

    assert_eq!(transport.methods(), vec!["login", "logout"]);
}

#[tokio::test]
async fn merge_list_members_forwards_args_and_parses_result() {
    let transport = ScriptedTransport::new(vec![
        login_ok("s1"),
        Ok(json!({
            "insertCount": 2,
            "updateCount": 1,
            "rejectedCount": 0,
            "totalCount": 3,
            "errorMessage": null,
        })),
    ]);
    let client = client_over(&transport);

    let list = InteractObject::new("contacts", "newsletter");
    let records = RecordData::new(
        vec!["Customer_Id_".to_string()],
        vec![Record::new(vec![json!("1")])],
    );
    let rule = ListMergeRule::default();

    client.connect().await.unwrap();
    let result = client
        .merge_list_members(&list, &records, &rule)
        .await
        .unwrap();
    assert_eq!(result.insert_count, 2);
    assert_eq!(result.total_count, 3);

    let calls = transport.calls();
    let call = &calls[1];
    assert_eq!(call.method, "mergeListMembers");
    assert_eq!(call.session_id.as_deref(), Some("s1"));
    assert_eq!(call.args.len(), 3);
    assert_eq!(call.args[0]["folderName"], "contacts");
    assert_eq!(call.args[1]["fieldNames"][0], "Customer_Id_");
    assert_eq!(call.args[2]["matchColumnName1"], "Customer_Id_");
}

#[tokio::test]
async fn remote_fault_surfaces_with_code_and_message() {
    let transport = ScriptedTransport::new(vec![
        login_ok("s1"),
        Err(Error::Remote {
            code: "ListFault".to_string(),
            message: "list does not exist".to_string(),
        }),
    ]);
    let client = client_over(&transport);

    client.connect().await.unwrap();
    let error = client
        .delete_list_members(
            &InteractObject::new("contacts", "missing"),
            QueryColumn::Riid,
            &["1".to_string()],
        )
        .await
        .unwrap_err();

    assert!(error.is_list_fault());
    assert!(matches!(error, Error::Remote { message, .. } if message == "list does not exist"));
}

#[tokio::test]
async fn with_session_disconnects_after_success() {
    let transport = ScriptedTransport::new(vec![
        login_ok("s1"),
        Ok(json!([{"name": "inbox"}])),
        logout_ok(),
    ]);
    let client = client_over(&transport);

    let folders = client
        .with_session(|client| async move { client.list_folders().await })
        .await
        .unwrap();

    assert_eq!(folders.len(), 1);
    assert_eq!(folders[0].name, "inbox");
    assert!(!client.connected());
    assert_eq!(transport.methods(), vec!["login", "listFolders", "logout"]);
}

#[tokio::test]
async fn with_session_disconnects_exactly_once_when_body_fails() {
    let transport = ScriptedTransport::new(vec![
        login_ok("s1"),
        Err(Error::Remote {
            code: "TableFault".to_string(),
            message: "boom".to_string(),
        }),
        logout_ok(),
    ]);
    let client = client_over(&transport);

    let error = client
        .with_session(|client| async move {
            client
                .delete_table(&InteractObject::new("folder", "table"))
                .await
        })
        .await
        .unwrap_err();

    assert!(error.is_table_fault());
    assert!(!client.connected());
    // login, failing deleteTable, and exactly one logout
    assert_eq!(transport.methods(), vec!["login", "deleteTable", "logout"]);
}

#[tokio::test]
async fn with_session_skips_body_when_connect_fails() {
    let transport = ScriptedTransport::new(vec![Err(Error::Transport(
        "connection refused".to_string(),
    ))]);
    let client = client_over(&transport);

    let error = client
        .with_session(|client| async move { client.list_folders().await })
        .await
        .unwrap_err();

    assert!(matches!(error, Error::Transport(_)));
    assert_eq!(transport.methods(), vec!["login"]);
}

#[tokio::test]
async fn delete_list_members_normalizes_single_result() {
    let transport = ScriptedTransport::new(vec![
        login_ok("s1"),
        Ok(json!({"success": true, "id": "200"})),
    ]);
    let client = client_over(&transport);

    client.connect().await.unwrap();
    let results = client
        .delete_list_members(
            &InteractObject::new("contacts", "newsletter"),
            QueryColumn::CustomerId,
            &["200".to_string()],
        )
        .await
        .unwrap();

    assert_eq!(results.len(), 1);
    assert!(results[0].success);
    assert_eq!(results[0].id.as_deref(), Some("200"));

    let calls = transport.calls();
    assert_eq!(calls[1].args[1], json!("CUSTOMER_ID"));
    assert_eq!(calls[1].args[2], json!(["200"]));
}

#[tokio::test]
async fn delete_table_records_keeps_multiple_results() {
    let transport = ScriptedTransport::new(vec![
        login_ok("s1"),
        Ok(json!([
            {"success": true, "id": "1"},
            {"success": false, "errorMessage": "not found", "exceptionCode": "NO_RECIPIENT_FOUND"},
        ])),
    ]);
    let client = client_over(&transport);

    client.connect().await.unwrap();
    let results = client
        .delete_table_records(
            &InteractObject::new("folder", "table"),
            QueryColumn::Riid,
            &["1".to_string(), "2".to_string()],
        )
        .await
        .unwrap();

    assert_eq!(results.len(), 2);
    assert!(!results[1].success);
    assert_eq!(results[1].exception_code.as_deref(), Some("NO_RECIPIENT_FOUND"));
}

#[tokio::test]
async fn retrieve_list_members_unwraps_record_data() {
    let transport = ScriptedTransport::new(vec![
        login_ok("s1"),
        Ok(json!({
            "recordData": {
                "fieldNames": ["RIID_", "EMAIL_ADDRESS_"],
                "records": [{"fieldValues": ["7", "a@example.com"]}],
            }
        })),
    ]);
    let client = client_over(&transport);

    client.connect().await.unwrap();
    let data = client
        .retrieve_list_members(
            &InteractObject::new("contacts", "newsletter"),
            QueryColumn::Riid,
            &["RIID_".to_string(), "EMAIL_ADDRESS_".to_string()],
            &["7".to_string()],
        )
        .await
        .unwrap();

    assert_eq!(data.len(), 1);
    assert_eq!(data.value(0, "EMAIL_ADDRESS_"), Some(&json!("a@example.com")));
}

#[tokio::test]
async fn retrieve_table_records_parses_bare_record_data() {
    let transport = ScriptedTransport::new(vec![
        login_ok("s1"),
        Ok(json!({
            "fieldNames": ["CUSTOMER_ID_"],
            "records": [{"fieldValues": ["42"]}],
        })),
    ]);
    let client = client_over(&transport);

    client.connect().await.unwrap();
    let data = client
        .retrieve_table_records(
            &InteractObject::new("folder", "table"),
            QueryColumn::CustomerId,
            &["CUSTOMER_ID_".to_string()],
            &["42".to_string()],
        )
        .await
        .unwrap();

    assert_eq!(data.value(0, "CUSTOMER_ID_"), Some(&json!("42")));
}

#[tokio::test]
async fn trigger_custom_event_serializes_recipients() {
    let transport = ScriptedTransport::new(vec![
        login_ok("s1"),
        Ok(json!([{"recipientId": 9, "success": true, "errorMessage": null}])),
    ]);
    let client = client_over(&transport);

    let event = CustomEvent::new("welcome");
    let recipient =
        Recipient::by_customer_id(InteractObject::new("contacts", "newsletter"), "cust-9");
    let recipient_data = vec![RecipientData::new(recipient).with_data("DISCOUNT", "10%")];

    client.connect().await.unwrap();
    let results = client
        .trigger_custom_event(&event, &recipient_data)
        .await
        .unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].recipient_id, 9);
    assert!(results[0].success);

    let calls = transport.calls();
    assert_eq!(calls[1].args[0]["eventName"], "welcome");
    assert_eq!(calls[1].args[1][0]["recipient"]["customerId"], "cust-9");
    assert_eq!(calls[1].args[1][0]["optionalData"][0]["name"], "DISCOUNT");
}

#[tokio::test]
async fn authenticate_server_dispatches_without_session() {
    let transport = ScriptedTransport::new(vec![Ok(json!({
        "authSessionId": "auth-1",
        "encryptedClientChallenge": "enc",
        "serverChallenge": "srv",
    }))]);
    let client = client_over(&transport);

    let result = client
        .authenticate_server("user", "challenge")
        .await
        .unwrap();
    assert_eq!(result.auth_session_id, "auth-1");

    let calls = transport.calls();
    assert_eq!(calls[0].method, "authenticateServer");
    assert!(calls[0].session_id.is_none());
    assert_eq!(calls[0].args, vec![json!("user"), json!("challenge")]);
}
