//! MCP server for the Noko time-tracking API.
//!
//! Exposes four fixed Noko endpoints as MCP tools over a stateless
//! JSON-RPC HTTP endpoint; each tool call becomes exactly one upstream
//! request.

use actix_cors::Cors;
use actix_web::{http::header, web, App, HttpServer};
use actix_web_prometheus::PrometheusMetricsBuilder;
use std::sync::Arc;

pub mod config;
pub mod mcp;
pub mod noko;
pub mod util;

pub use crate::config::{CredentialProvider, EnvCredentials, NokoConfig};
pub use crate::mcp::{McpService, McpState};
pub use crate::noko::NokoClient;

use crate::mcp::tools::ToolRegistry;

/// Run the server until shutdown.
///
/// Reads configuration from the environment (`.env` supported), wires the
/// registry and dispatcher, and serves `/mcp` plus Prometheus metrics at
/// `/metrics`.
pub async fn run() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let noko_config = NokoConfig::from_env();
    log::info!("Proxying Noko API at {}", noko_config.base_url);

    if EnvCredentials.api_token().is_none() {
        log::warn!("NOKO_API_TOKEN is not set; every tool call will fail until it is configured");
    }

    let registry = match ToolRegistry::new(NokoClient::new(&noko_config)) {
        Ok(registry) => registry,
        Err(err) => {
            log::error!("Tool registry is misconfigured: {}", err);
            std::process::exit(1);
        }
    };

    let state = web::Data::new(Arc::new(McpState::new(McpService::new(registry))));

    let prometheus = PrometheusMetricsBuilder::new("noko_mcp_server")
        .endpoint("/metrics")
        .build()
        .expect("Failed to create Prometheus metrics middleware");

    let port = std::env::var("PORT")
        .ok()
        .and_then(|raw| raw.parse::<u16>().ok())
        .unwrap_or(8080);

    log::info!("Starting MCP server at http://0.0.0.0:{port}/mcp");

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["POST", "OPTIONS"])
            .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
            .max_age(3600);

        App::new()
            .wrap(prometheus.clone())
            .wrap(cors)
            .app_data(state.clone())
            .configure(mcp::config)
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
