//! Tools for reading and creating time entries.

use serde_json::json;

use super::registry::ToolDescriptor;

pub const LIST_ENTRIES_TOOL: &str = "list-entries";
pub const CREATE_ENTRY_TOOL: &str = "create-entry";

pub fn list_entries_descriptor() -> ToolDescriptor {
    ToolDescriptor {
        name: LIST_ENTRIES_TOOL.to_string(),
        description: concat!(
            "List time entries with optional filters and pagination. ",
            "Filter by date range (from/to or a period preset), by user, ",
            "or by project."
        )
        .to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "from": {
                    "type": "string",
                    "description": "Only include entries from or after this date (YYYY-MM-DD)"
                },
                "to": {
                    "type": "string",
                    "description": "Only include entries on or before this date (YYYY-MM-DD)"
                },
                "period": {
                    "type": "string",
                    "enum": ["past_week", "past_month", "current_week", "current_month"],
                    "description": "Date range preset, expanded to from/to locally. Explicit from/to win."
                },
                "user_ids": {
                    "type": "array",
                    "items": { "type": "integer" },
                    "description": "Filter by user IDs"
                },
                "project_ids": {
                    "type": "array",
                    "items": { "type": "integer" },
                    "description": "Filter by project IDs"
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

pub fn create_entry_descriptor() -> ToolDescriptor {
    ToolDescriptor {
        name: CREATE_ENTRY_TOOL.to_string(),
        description: "Create a new time entry".to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "date": {
                    "type": "string",
                    "description": "Entry date (YYYY-MM-DD)"
                },
                "minutes": {
                    "type": "integer",
                    "description": "Duration in minutes"
                },
                "description": {
                    "type": "string",
                    "description": "Description of the work performed"
                },
                "project_id": {
                    "type": "integer",
                    "description": "ID of the project this entry belongs to"
                },
                "user_id": {
                    "type": "integer",
                    "description": "ID of the user this entry belongs to (defaults to the authenticated user)"
                },
                "billable": {
                    "type": "boolean",
                    "description": "Whether this entry is billable (defaults to the project's billable setting)"
                },
                "tags": {
                    "type": "array",
                    "items": { "type": "string" },
                    "description": "Tags to associate with this entry"
                }
            },
            "required": ["date", "minutes", "description"]
        }),
    }
}
