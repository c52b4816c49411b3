//! Response translation - upstream HTTP responses to tool-visible results.

use serde_json::{json, Map, Value};
use std::collections::HashMap;

/// Rendered placeholder for responses with no body (204, some 201s).
pub const NO_CONTENT: &str = "Success (no content)";

/// Body of a successful upstream response.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    Json(Value),
    Text(String),
    Empty,
}

/// A successful upstream exchange, ready to be rendered for the caller.
#[derive(Debug, Clone)]
pub struct ApiSuccess {
    pub status: u16,
    pub body: ResponseBody,
}

impl ApiSuccess {
    /// Format the body for display.
    ///
    /// A flat key→value object renders as one `key: value` line per entry;
    /// any other JSON renders pretty-printed; raw text renders as-is.
    pub fn render(&self) -> String {
        match &self.body {
            ResponseBody::Empty => NO_CONTENT.to_string(),
            ResponseBody::Text(text) => text.clone(),
            ResponseBody::Json(value) => match value.as_object() {
                Some(map) if is_flat(map) => render_flat(map),
                _ => serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string()),
            },
        }
    }
}

/// Build the success outcome for a `< 400` response.
///
/// The body is kept as parsed JSON when it parses, raw text otherwise.
/// When Noko sends pagination links in a `Link` header, the body is wrapped
/// as `{data, pagination}` so the caller sees the page URLs.
pub fn map_success(status: u16, headers: &HashMap<String, String>, body: &str) -> ApiSuccess {
    let parsed = match (parse_body(body), headers.get("link")) {
        (ResponseBody::Json(value), Some(link)) => {
            let links = parse_link_header(link);
            if links.is_empty() {
                ResponseBody::Json(value)
            } else {
                ResponseBody::Json(json!({
                    "data": value,
                    "pagination": Value::Object(links),
                }))
            }
        }
        (parsed, _) => parsed,
    };

    ApiSuccess {
        status,
        body: parsed,
    }
}

/// Best-effort message extraction for a `>= 400` response.
///
/// Prefers the JSON body's `error` field, falls back to the raw text.
pub fn error_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        match value.get("error") {
            Some(Value::String(message)) => return message.clone(),
            Some(other) => return other.to_string(),
            None => {}
        }
    }
    body.to_string()
}

fn parse_body(body: &str) -> ResponseBody {
    if body.trim().is_empty() {
        return ResponseBody::Empty;
    }
    match serde_json::from_str::<Value>(body) {
        Ok(value) => ResponseBody::Json(value),
        Err(_) => ResponseBody::Text(body.to_string()),
    }
}

/// Parse an RFC 5988 `Link` header into a rel → url object.
fn parse_link_header(header: &str) -> Map<String, Value> {
    let mut links = Map::new();

    for part in header.split(',') {
        let mut sections = part.split(';');
        let Some(url_part) = sections.next() else {
            continue;
        };
        let url = url_part.trim().trim_start_matches('<').trim_end_matches('>');

        for attr in sections {
            let attr = attr.trim();
            if let Some(rel) = attr.strip_prefix("rel=") {
                let rel = rel.trim_matches('"');
                if !rel.is_empty() && !url.is_empty() {
                    links.insert(rel.to_string(), Value::String(url.to_string()));
                }
            }
        }
    }

    links
}

fn is_flat(map: &Map<String, Value>) -> bool {
    map.values()
        .all(|value| !matches!(value, Value::Array(_) | Value::Object(_)))
}

fn render_flat(map: &Map<String, Value>) -> String {
    map.iter()
        .map(|(key, value)| match value {
            Value::String(s) => format!("{key}: {s}"),
            other => format!("{key}: {other}"),
        })
        .collect::<Vec<_>>()
        .join("\n")
}
