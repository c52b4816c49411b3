//! Dispatch behavior tests against a recording mock transport: marshaling
//! rules, credential handling, and outcome mapping, all without a network.

mod common;

use serde_json::json;
use std::sync::Arc;

use common::{registry_with, registry_without_token, MockTransport, TEST_TOKEN};
use noko_mcp_server::config::CredentialProvider;
use noko_mcp_server::noko::{HttpMethod, NokoClient, ResponseBody, ToolRoute};

fn text_of(result: &noko_mcp_server::mcp::content::ToolResult) -> &str {
    &result.content[0].text
}

#[tokio::test]
async fn unknown_tool_is_an_error_without_network() {
    let transport = MockTransport::respond(200, "{}");
    let registry = registry_with(transport.clone());

    let result = registry.call_tool("bogus-tool", None).await;

    assert!(result.is_error);
    assert!(text_of(&result).contains("'bogus-tool' not found"));
    assert_eq!(transport.request_count(), 0);
}

#[tokio::test]
async fn missing_credential_is_an_error_without_network() {
    let transport = MockTransport::respond(200, "{}");
    let registry = registry_without_token(transport.clone());

    let result = registry
        .call_tool("list-entries", Some(json!({ "from": "2023-12-01" })))
        .await;

    assert!(result.is_error);
    assert!(text_of(&result).contains("NOKO_API_TOKEN"));
    assert_eq!(transport.request_count(), 0);
}

#[tokio::test]
async fn get_request_carries_token_and_query() {
    let transport = MockTransport::respond(200, r#"{"entries": []}"#);
    let registry = registry_with(transport.clone());

    let result = registry
        .call_tool(
            "list-entries",
            Some(json!({ "from": "2023-12-01", "to": "2023-12-31" })),
        )
        .await;
    assert!(!result.is_error);

    let requests = transport.requests();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(request.method, HttpMethod::Get);
    assert_eq!(request.url, "https://noko.test/v2/entries");
    assert_eq!(request.token, TEST_TOKEN);
    assert!(request.body.is_none());
    assert!(request
        .query
        .contains(&("from".to_string(), "2023-12-01".to_string())));
    assert!(request
        .query
        .contains(&("to".to_string(), "2023-12-31".to_string())));
}

#[tokio::test]
async fn state_all_is_not_forwarded() {
    let transport = MockTransport::respond(200, r#"{"projects": []}"#);
    let registry = registry_with(transport.clone());

    registry
        .call_tool("list-projects", Some(json!({ "state": "all" })))
        .await;

    let requests = transport.requests();
    assert!(requests[0].query.iter().all(|(key, _)| key != "state"));
}

#[tokio::test]
async fn array_arguments_expand_to_bracketed_params() {
    let transport = MockTransport::respond(200, r#"{"entries": []}"#);
    let registry = registry_with(transport.clone());

    registry
        .call_tool("list-entries", Some(json!({ "user_ids": [1, 2] })))
        .await;

    let query = &transport.requests()[0].query;
    assert!(query.contains(&("user_ids[]".to_string(), "1".to_string())));
    assert!(query.contains(&("user_ids[]".to_string(), "2".to_string())));
}

#[tokio::test]
async fn period_preset_expands_to_dates() {
    let transport = MockTransport::respond(200, r#"{"entries": []}"#);
    let registry = registry_with(transport.clone());

    registry
        .call_tool("list-entries", Some(json!({ "period": "past_week" })))
        .await;

    let query = &transport.requests()[0].query;
    assert!(query.iter().any(|(key, _)| key == "from"));
    assert!(query.iter().any(|(key, _)| key == "to"));
    assert!(query.iter().all(|(key, _)| key != "period"));
}

#[tokio::test]
async fn post_body_is_forwarded_verbatim() {
    let transport = MockTransport::respond(201, r#"{"entry": {"id": 1}}"#);
    let registry = registry_with(transport.clone());

    let arguments = json!({
        "date": "2023-12-14",
        "minutes": 60,
        "description": "Test entry",
        "project_id": 123
    });
    let result = registry
        .call_tool("create-entry", Some(arguments.clone()))
        .await;
    assert!(!result.is_error);

    let requests = transport.requests();
    let request = &requests[0];
    assert_eq!(request.method, HttpMethod::Post);
    assert_eq!(request.url, "https://noko.test/v2/entries");
    assert!(request.query.is_empty());
    assert_eq!(request.body, Some(arguments));
}

#[tokio::test]
async fn created_entry_body_is_preserved() {
    let transport = MockTransport::respond(
        201,
        r#"{"entry": {"id": 1, "minutes": 60, "description": "Test entry"}}"#,
    );
    let client = NokoClient::with_parts(
        common::TEST_BASE_URL.to_string(),
        transport,
        Arc::new(common::FixedToken),
    );

    let success = client
        .call(&ToolRoute::post("/entries"), Some(json!({ "minutes": 60 })))
        .await
        .unwrap();

    assert_eq!(success.status, 201);
    assert_eq!(
        success.body,
        ResponseBody::Json(
            json!({ "entry": { "id": 1, "minutes": 60, "description": "Test entry" } })
        )
    );
}

#[tokio::test]
async fn upstream_rejection_carries_status_and_message() {
    let transport = MockTransport::respond(422, r#"{"error": "Invalid date"}"#);
    let registry = registry_with(transport);

    let result = registry
        .call_tool("create-entry", Some(json!({ "date": "bogus" })))
        .await;

    assert!(result.is_error);
    assert!(text_of(&result).contains("422"));
    assert!(text_of(&result).contains("Invalid date"));
}

#[tokio::test]
async fn transport_failure_becomes_structured_error() {
    let transport = MockTransport::fail("connection refused");
    let registry = registry_with(transport);

    let result = registry.call_tool("list-users", None).await;

    assert!(result.is_error);
    assert!(text_of(&result).contains("connection refused"));
}

#[tokio::test]
async fn empty_success_body_renders_sentinel() {
    let transport = MockTransport::respond(204, "");
    let registry = registry_with(transport);

    let result = registry.call_tool("list-projects", None).await;

    assert!(!result.is_error);
    assert_eq!(text_of(&result), "Success (no content)");
}

#[tokio::test]
async fn link_header_surfaces_pagination() {
    let transport = MockTransport::respond_with_headers(
        200,
        &[(
            "link",
            "<https://noko.test/v2/users?page=2>; rel=\"next\"",
        )],
        r#"[{"id": 9}]"#,
    );
    let registry = registry_with(transport);

    let result = registry.call_tool("list-users", None).await;

    assert!(!result.is_error);
    assert!(text_of(&result).contains("pagination"));
    assert!(text_of(&result).contains("https://noko.test/v2/users?page=2"));
}

#[test]
fn credential_providers_answer_consistently() {
    assert_eq!(common::FixedToken.api_token().as_deref(), Some(TEST_TOKEN));
    assert!(common::NoToken.api_token().is_none());
}
