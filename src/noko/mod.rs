//! Client layer for the Noko time-tracking API.
//!
//! Translates tool invocations into single HTTP requests and upstream
//! responses back into uniform results.

pub mod client;
pub mod error;
pub mod request;
pub mod response;

pub use client::{HttpTransport, NokoClient, OutboundRequest, ReqwestTransport, UpstreamResponse};
pub use error::{CallError, TransportError};
pub use request::{HttpMethod, ToolRoute};
pub use response::{ApiSuccess, ResponseBody};
