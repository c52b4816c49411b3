//! Tool for browsing projects.

use serde_json::json;

use super::registry::ToolDescriptor;

pub const LIST_PROJECTS_TOOL: &str = "list-projects";

pub fn list_projects_descriptor() -> ToolDescriptor {
    ToolDescriptor {
        name: LIST_PROJECTS_TOOL.to_string(),
        description: "List all available projects".to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "state": {
                    "type": "string",
                    "enum": ["active", "archived", "all"],
                    "description": "Filter projects by state. Use 'all' to not filter by state."
                },
                "per_page": {
                    "type": "integer",
                    "description": "Number of results per page (1-1000, default: 30)"
                },
                "page": {
                    "type": "integer",
                    "description": "Page number (starts at 1)"
                }
            }
        }),
    }
}
