//! Request translation - tool arguments to outbound HTTP shape.
//!
//! GET routes carry their arguments as query parameters with the Noko
//! conventions applied (array expansion, filter sentinels); POST routes
//! forward the argument object verbatim as the JSON body.

use serde_json::{Map, Value};
use std::fmt;

use crate::util::date_ranges::DateRange;

/// The only verbs the fixed route table uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpMethod::Get => write!(f, "GET"),
            HttpMethod::Post => write!(f, "POST"),
        }
    }
}

/// One tool's fixed upstream destination.
#[derive(Debug, Clone, Copy)]
pub struct ToolRoute {
    pub method: HttpMethod,
    pub path: &'static str,
}

impl ToolRoute {
    pub const fn get(path: &'static str) -> Self {
        Self {
            method: HttpMethod::Get,
            path,
        }
    }

    pub const fn post(path: &'static str) -> Self {
        Self {
            method: HttpMethod::Post,
            path,
        }
    }
}

/// Translate a GET tool's arguments into query parameters.
///
/// Rules, applied uniformly to every GET tool:
/// - `state: "all"` is dropped; upstream treats a missing `state` as "no
///   filter" and rejects the literal value.
/// - Null values are dropped.
/// - An array under key `k` expands into repeated `k[]` parameters with
///   string-coerced elements (the Noko array convention).
/// - Scalars pass through unchanged.
pub fn query_params(args: &Map<String, Value>) -> Vec<(String, String)> {
    let mut params = Vec::new();

    for (key, value) in args {
        if key == "state" && matches!(value, Value::String(s) if s == "all") {
            continue;
        }

        match value {
            Value::Null => {}
            Value::Array(items) => {
                let array_key = format!("{key}[]");
                for item in items {
                    params.push((array_key.clone(), scalar_to_string(item)));
                }
            }
            other => params.push((key.clone(), scalar_to_string(other))),
        }
    }

    params
}

/// Expand a `period` preset into explicit `from`/`to` dates, in place.
///
/// Explicitly supplied dates win over the preset. The `period` key itself
/// is always removed; Noko does not understand it.
pub fn expand_period(args: &mut Map<String, Value>) {
    let Some(period) = args.remove("period") else {
        return;
    };

    let Some(name) = period.as_str() else {
        log::warn!("ignoring non-string period argument: {period}");
        return;
    };

    match DateRange::for_period(name) {
        Some(range) => {
            args.entry("from")
                .or_insert_with(|| Value::String(range.from));
            args.entry("to").or_insert_with(|| Value::String(range.to));
        }
        None => log::warn!("ignoring unknown period preset '{name}'"),
    }
}

fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
