//! MCP Service - Core JSON-RPC 2.0 request handler.

use log::{info, warn};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::mcp::resources::{self, ResourceDescriptor};
use crate::mcp::rpc::{RpcRequest, RpcResponse};
use crate::mcp::tools::{ToolDescriptor, ToolRegistry};

pub const PROTOCOL_VERSION: &str = "2024-11-05";

/// Core MCP request handler. Stateless across requests; the registry is
/// shared read-only.
#[derive(Clone)]
pub struct McpService {
    registry: Arc<ToolRegistry>,
}

impl McpService {
    pub fn new(registry: ToolRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }

    /// Dispatch one JSON-RPC request. `None` means a notification that
    /// needs no response.
    pub async fn handle_request(&self, request: RpcRequest) -> Option<RpcResponse> {
        if request.jsonrpc != "2.0" {
            warn!("received unsupported jsonrpc version: {}", request.jsonrpc);
            return Some(RpcResponse::invalid_request(
                request.id,
                "Unsupported jsonrpc version (expected 2.0)",
            ));
        }

        let RpcRequest {
            method, params, id, ..
        } = request;

        match method.as_str() {
            "initialize" => Some(self.handle_initialize(id, params)),
            "tools/list" => Some(self.handle_list_tools(id)),
            "tools/call" => Some(self.handle_call_tool(id, params).await),
            "resources/list" => Some(self.handle_resources_list(id)),
            "resources/read" => Some(self.handle_resources_read(id, params).await),
            "resources/templates/list" => Some(self.handle_resource_templates_list(id)),
            "prompts/list" => Some(self.handle_prompts_list(id)),
            "prompts/get" => Some(self.handle_prompts_get(id, params)),
            "ping" => Some(RpcResponse::success(id, json!({ "ok": true }))),
            method if method.starts_with("notifications/") => {
                info!("received client notification: {}", method);
                None
            }
            other => Some(RpcResponse::method_not_found(id, other)),
        }
    }

    fn handle_initialize(&self, id: Option<Value>, params: Option<Value>) -> RpcResponse {
        let parsed: InitializeParams = match parse_params(params) {
            Ok(value) => value,
            Err(message) => return RpcResponse::invalid_params(id, message),
        };

        info!(
            "client requested initialization: {} v{}",
            parsed.client_info.name,
            parsed
                .client_info
                .version
                .unwrap_or_else(|| "unknown".into())
        );

        let result = InitializeResult {
            protocol_version: PROTOCOL_VERSION.to_string(),
            server_info: ImplementationInfo {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                title: Some("Noko MCP Server".to_string()),
            },
            capabilities: ServerCapabilities {
                tools: ListChangedCapability {
                    list_changed: false,
                },
                resources: ListChangedCapability {
                    list_changed: false,
                },
            },
        };

        match serde_json::to_value(result) {
            Ok(value) => RpcResponse::success(id, value),
            Err(err) => RpcResponse::error(id, -32603, err.to_string()),
        }
    }

    fn handle_list_tools(&self, id: Option<Value>) -> RpcResponse {
        let payload = ListToolsResult {
            tools: self.registry.list_tools(),
            next_cursor: None,
        };
        match serde_json::to_value(payload) {
            Ok(value) => RpcResponse::success(id, value),
            Err(err) => RpcResponse::error(id, -32603, err.to_string()),
        }
    }

    async fn handle_call_tool(&self, id: Option<Value>, params: Option<Value>) -> RpcResponse {
        let parsed: CallToolParams = match parse_params(params) {
            Ok(value) => value,
            Err(message) => return RpcResponse::invalid_params(id, message),
        };

        let result = self
            .registry
            .call_tool(&parsed.name, parsed.arguments)
            .await;
        match serde_json::to_value(result) {
            Ok(value) => RpcResponse::success(id, value),
            Err(err) => RpcResponse::error(id, -32603, err.to_string()),
        }
    }

    fn handle_resources_list(&self, id: Option<Value>) -> RpcResponse {
        let payload = ListResourcesResult {
            resources: resources::resource_definitions(),
            next_cursor: None,
        };
        match serde_json::to_value(payload) {
            Ok(value) => RpcResponse::success(id, value),
            Err(err) => RpcResponse::error(id, -32603, err.to_string()),
        }
    }

    async fn handle_resources_read(&self, id: Option<Value>, params: Option<Value>) -> RpcResponse {
        let parsed: ResourceReadParams = match parse_params(params) {
            Ok(value) => value,
            Err(message) => return RpcResponse::invalid_params(id, message),
        };

        match self.registry.read_resource(&parsed.uri).await {
            Some(text) => RpcResponse::success(
                id,
                json!({
                    "contents": [{
                        "uri": parsed.uri,
                        "mimeType": "application/json",
                        "text": text,
                    }]
                }),
            ),
            None => RpcResponse::error(id, -32000, format!("Resource '{}' not found.", parsed.uri)),
        }
    }

    fn handle_resource_templates_list(&self, id: Option<Value>) -> RpcResponse {
        RpcResponse::success(id, json!({ "resourceTemplates": [] }))
    }

    fn handle_prompts_list(&self, id: Option<Value>) -> RpcResponse {
        RpcResponse::success(id, json!({ "prompts": [] }))
    }

    fn handle_prompts_get(&self, id: Option<Value>, params: Option<Value>) -> RpcResponse {
        let parsed: PromptGetParams = match parse_params(params) {
            Ok(value) => value,
            Err(message) => return RpcResponse::invalid_params(id, message),
        };
        RpcResponse::error(id, -32001, format!("Prompt '{}' not available.", parsed.name))
    }
}

// ============================================================================
// Request/Response types
// ============================================================================

#[derive(Debug, Deserialize)]
#[allow(dead_code)]
struct InitializeParams {
    #[serde(rename = "protocolVersion")]
    protocol_version: String,
    #[serde(rename = "clientInfo")]
    client_info: ClientInfo,
}

#[derive(Debug, Deserialize)]
struct ClientInfo {
    name: String,
    #[serde(default)]
    version: Option<String>,
}

#[derive(Debug, Serialize)]
struct InitializeResult {
    #[serde(rename = "protocolVersion")]
    protocol_version: String,
    #[serde(rename = "serverInfo")]
    server_info: ImplementationInfo,
    capabilities: ServerCapabilities,
}

#[derive(Debug, Serialize)]
struct ImplementationInfo {
    name: String,
    version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
}

#[derive(Debug, Serialize)]
struct ServerCapabilities {
    tools: ListChangedCapability,
    resources: ListChangedCapability,
}

#[derive(Debug, Serialize)]
struct ListChangedCapability {
    #[serde(rename = "listChanged")]
    list_changed: bool,
}

#[derive(Debug, Serialize)]
struct ListToolsResult {
    tools: Vec<ToolDescriptor>,
    #[serde(rename = "nextCursor")]
    #[serde(skip_serializing_if = "Option::is_none")]
    next_cursor: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CallToolParams {
    name: String,
    #[serde(default)]
    arguments: Option<Value>,
}

#[derive(Debug, Serialize)]
struct ListResourcesResult {
    resources: Vec<ResourceDescriptor>,
    #[serde(rename = "nextCursor")]
    #[serde(skip_serializing_if = "Option::is_none")]
    next_cursor: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ResourceReadParams {
    uri: String,
}

#[derive(Debug, Deserialize)]
struct PromptGetParams {
    name: String,
}

fn parse_params<T: DeserializeOwned>(params: Option<Value>) -> Result<T, String> {
    serde_json::from_value(params.unwrap_or(Value::Null)).map_err(|err| err.to_string())
}
