//! Tool registry - central routing for MCP tools.
//!
//! Holds the fixed descriptor list and the name → upstream route table,
//! cross-checked at startup so a mismatch is a configuration error instead
//! of a call-time 404.

use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

use crate::mcp::content::ToolResult;
use crate::mcp::resources;
use crate::noko::{CallError, NokoClient, ToolRoute};

use super::entries;
use super::projects;
use super::users;

/// Tool descriptor conforming to the MCP specification.
#[derive(Debug, Clone, Serialize)]
pub struct ToolDescriptor {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

/// Descriptor/route table divergence, fatal at startup.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("tool '{0}' has a route but no descriptor")]
    MissingDescriptor(String),
    #[error("tool '{0}' has a descriptor but no route")]
    MissingRoute(String),
}

/// Central registry for all MCP tools. Read-only after construction.
pub struct ToolRegistry {
    tools: Vec<ToolDescriptor>,
    routes: HashMap<&'static str, ToolRoute>,
    client: NokoClient,
}

fn routes() -> HashMap<&'static str, ToolRoute> {
    HashMap::from([
        (entries::LIST_ENTRIES_TOOL, ToolRoute::get("/entries")),
        (entries::CREATE_ENTRY_TOOL, ToolRoute::post("/entries")),
        (projects::LIST_PROJECTS_TOOL, ToolRoute::get("/projects")),
        (users::LIST_USERS_TOOL, ToolRoute::get("/users")),
    ])
}

impl ToolRegistry {
    /// Build the registry, verifying that descriptors and routes cover
    /// exactly the same tool names.
    pub fn new(client: NokoClient) -> Result<Self, RegistryError> {
        let tools = vec![
            entries::list_entries_descriptor(),
            entries::create_entry_descriptor(),
            projects::list_projects_descriptor(),
            users::list_users_descriptor(),
        ];
        let routes = routes();

        for name in routes.keys() {
            if !tools.iter().any(|tool| tool.name == *name) {
                return Err(RegistryError::MissingDescriptor(name.to_string()));
            }
        }
        for tool in &tools {
            if !routes.contains_key(tool.name.as_str()) {
                return Err(RegistryError::MissingRoute(tool.name.clone()));
            }
        }

        Ok(Self {
            tools,
            routes,
            client,
        })
    }

    /// List all available tools per MCP spec. Deterministic across calls.
    pub fn list_tools(&self) -> Vec<ToolDescriptor> {
        self.tools.clone()
    }

    /// Call a tool by name with the given arguments.
    ///
    /// Every failure mode is folded into an `isError` result; nothing
    /// escapes as a fault.
    pub async fn call_tool(&self, name: &str, arguments: Option<Value>) -> ToolResult {
        let Some(route) = self.routes.get(name) else {
            return ToolResult::error(CallError::ToolNotFound(name.to_string()).to_string());
        };

        match self.client.call(route, arguments).await {
            Ok(success) => ToolResult::success_text(success.render()),
            Err(err) => {
                log::warn!("tool '{}' failed: {}", name, err);
                ToolResult::error(err.to_string())
            }
        }
    }

    /// Read a resource URI by performing the matching GET dispatch with no
    /// arguments. `None` for URIs this server does not serve.
    ///
    /// Upstream failures come back as readable text rather than a protocol
    /// error, mirroring tool-call behavior.
    pub async fn read_resource(&self, uri: &str) -> Option<String> {
        let path = resources::resource_path(uri)?;
        let route = ToolRoute::get(path);

        let text = match self.client.call(&route, None).await {
            Ok(success) => success.render(),
            Err(err) => format!("Error reading {uri}: {err}"),
        };
        Some(text)
    }
}
