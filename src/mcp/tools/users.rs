//! Tool for browsing users.

use serde_json::json;

use super::registry::ToolDescriptor;

pub const LIST_USERS_TOOL: &str = "list-users";

pub fn list_users_descriptor() -> ToolDescriptor {
    ToolDescriptor {
        name: LIST_USERS_TOOL.to_string(),
        description: "List all users".to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "state": {
                    "type": "string",
                    "enum": ["active", "suspended", "all"],
                    "description": "Filter users by their account state. Use 'all' to not filter by state."
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
