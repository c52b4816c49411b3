//! Read-only MCP resources mirroring the GET tools.

use serde::Serialize;

pub const ENTRIES_URI: &str = "noko://entries";
pub const PROJECTS_URI: &str = "noko://projects";
pub const USERS_URI: &str = "noko://users";

/// Resource descriptor conforming to the MCP specification.
#[derive(Debug, Clone, Serialize)]
pub struct ResourceDescriptor {
    pub uri: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "mimeType")]
    pub mime_type: String,
}

fn descriptor(uri: &str, name: &str, description: &str) -> ResourceDescriptor {
    ResourceDescriptor {
        uri: uri.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        mime_type: "application/json".to_string(),
    }
}

/// The fixed resource list advertised by `resources/list`.
pub fn resource_definitions() -> Vec<ResourceDescriptor> {
    vec![
        descriptor(ENTRIES_URI, "entries", "List of time entries"),
        descriptor(PROJECTS_URI, "projects", "List of all Noko projects"),
        descriptor(USERS_URI, "users", "List of all Noko users"),
    ]
}

/// Map a resource URI to its upstream GET path.
pub fn resource_path(uri: &str) -> Option<&'static str> {
    match uri {
        ENTRIES_URI => Some("/entries"),
        PROJECTS_URI => Some("/projects"),
        USERS_URI => Some("/users"),
        _ => None,
    }
}
