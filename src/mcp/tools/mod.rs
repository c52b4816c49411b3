//! MCP tool definitions and the registry that routes them.

pub mod entries;
pub mod projects;
pub mod registry;
pub mod users;

pub use registry::{RegistryError, ToolDescriptor, ToolRegistry};
