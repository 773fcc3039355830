//! Nichecraft Web Server
//!
//! Axum-based REST API for the Nichecraft digital product studio.
//!
//! Endpoints (all under `/api`):
//! - `POST /generate` - streams generation progress as server-sent events
//! - `POST /research` - ranked market opportunities for a category
//! - `GET /product-types` - catalog of generatable product types
//! - `GET /health` - liveness probe
//!
//! The browser UI is served from an optional static directory.

use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer, services::ServeDir, set_header::SetResponseHeaderLayer, trace::TraceLayer,
};
use tracing::{error, info, warn};

use nichecraft_core::{GenerationPipeline, InsightMatcher, StudioConfig};

mod handlers;

/// Env var holding comma-separated allowed CORS origins
pub const ALLOWED_ORIGINS_ENV: &str = "NICHECRAFT_ALLOWED_ORIGINS";

/// Server configuration
#[derive(Clone, Default)]
pub struct ServerConfig {
    /// Allowed CORS origins (empty = same-origin only)
    pub allowed_origins: Vec<String>,
    /// Simulation timings and placeholders
    pub studio: StudioConfig,
}

impl ServerConfig {
    pub fn new(studio: StudioConfig) -> Self {
        Self {
            allowed_origins: vec![],
            studio,
        }
    }

    /// Read allowed origins from `NICHECRAFT_ALLOWED_ORIGINS`
    pub fn with_origins_from_env(mut self) -> Self {
        let raw = std::env::var(ALLOWED_ORIGINS_ENV).unwrap_or_default();
        self.allowed_origins = parse_origins(&raw);
        self
    }
}

/// Parse a comma-separated list of origins, skipping blanks
pub fn parse_origins(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Shared application state
pub struct AppState {
    pub config: ServerConfig,
    pub matcher: InsightMatcher,
    pub pipeline: GenerationPipeline,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        let pipeline = GenerationPipeline::new(config.studio.generation.clone());
        Self {
            config,
            matcher: InsightMatcher::new(),
            pipeline,
        }
    }
}

/// Create the application router
pub fn create_router(static_dir: Option<&str>, config: ServerConfig) -> Router {
    let state = Arc::new(AppState::new(config.clone()));

    let api_routes = Router::new()
        .route("/health", get(handlers::health))
        .route("/product-types", get(handlers::list_product_types))
        .route("/generate", post(handlers::generate_product))
        .route("/research", post(handlers::run_research));

    let methods = [Method::GET, Method::POST, Method::OPTIONS];
    let cors = if config.allowed_origins.is_empty() {
        // Restrictive default: only allow same-origin
        CorsLayer::new()
            .allow_methods(methods)
            .allow_headers([header::CONTENT_TYPE])
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|o| match o.parse() {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!(origin = %o, "Ignoring invalid CORS origin");
                    None
                }
            })
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(methods)
            .allow_headers([header::CONTENT_TYPE])
    };

    // CSP: restrict scripts to same-origin, allow inline styles, allow blob: for images
    let csp_value = HeaderValue::from_static(
        "default-src 'self'; script-src 'self'; style-src 'self' 'unsafe-inline'; img-src 'self' blob: data:; font-src 'self'; connect-src 'self'; frame-ancestors 'none'"
    );

    let mut app = Router::new()
        .nest("/api", api_routes)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::CONTENT_SECURITY_POLICY,
            csp_value,
        ));

    if let Some(dir) = static_dir {
        app = app.fallback_service(ServeDir::new(dir));
    }

    app
}

/// Start the server with custom configuration
pub async fn serve_with_config(
    host: &str,
    port: u16,
    static_dir: Option<&str>,
    config: ServerConfig,
) -> anyhow::Result<()> {
    info!(
        step_delay_ms = config.studio.generation.step_delay.as_millis() as u64,
        research_delay_ms = config.studio.research.delay.as_millis() as u64,
        "Studio timings"
    );

    let app = create_router(static_dir, config);
    let addr = format!("{}:{}", host, port);

    info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// ============================================================================
// Error Handling
// ============================================================================

/// Application error type with proper HTTP status codes
pub struct AppError {
    status: StatusCode,
    message: String,
    internal: Option<anyhow::Error>,
}

impl AppError {
    pub fn bad_request(msg: &str) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: msg.to_string(),
            internal: None,
        }
    }

    pub fn internal(msg: &str) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: msg.to_string(),
            internal: None,
        }
    }

    /// Attach the underlying cause (logged, never sent to the client)
    pub fn with_source(mut self, err: impl Into<anyhow::Error>) -> Self {
        self.internal = Some(err.into());
        self
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let Some(err) = &self.internal {
            error!(error = %err, message = %self.message, "Internal error");
        }

        let body = Json(serde_json::json!({
            "error": self.message
        }));

        (self.status, body).into_response()
    }
}

#[cfg(test)]
mod tests;
