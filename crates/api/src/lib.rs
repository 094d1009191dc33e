pub mod error;
pub mod extractors;
pub mod routes;
pub mod state;

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderValue, Method, header},
    routing::{get, post, put},
};
use state::AppState;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::warn;

pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.settings.app.cors_origins);

    // Session routes
    let session_routes = Router::new()
        .route("/sign-in", post(routes::session::sign_in))
        .route("/sign-out", post(routes::session::sign_out))
        .route("/me", get(routes::session::me));

    // Organization routes
    let organization_routes = Router::new()
        .route(
            "/",
            get(routes::organization::list).post(routes::organization::create),
        )
        .route("/{organization_id}", get(routes::organization::get))
        .route("/{organization_id}/project", post(routes::project::create));

    // Project routes
    let project_routes = Router::new()
        .route("/{project_id}", get(routes::project::get))
        .route("/{project_id}/status", put(routes::project::update_status))
        .route("/{project_id}/activity", post(routes::project::add_activity));

    // Compose API
    let api = Router::new()
        .nest("/session", session_routes)
        .nest("/organization", organization_routes)
        .nest("/project", project_routes)
        .route("/dashboard", get(routes::dashboard::board));

    // Health check
    let health = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api", api)
        .merge(health)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// With no configured origins any origin may call the API, but browsers
/// will not send the session cookie cross-origin; such clients use the
/// Bearer token. Configured origins are allowed credentials, so the cookie
/// session works from them.
fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::new()
            .allow_methods(Any)
            .allow_headers(Any)
            .allow_origin(Any);
    }

    let parsed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(%origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    // Credentials rule out wildcards, so methods and headers are listed.
    CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .allow_origin(AllowOrigin::list(parsed))
        .allow_credentials(true)
}

async fn health_check(State(state): State<AppState>) -> Json<serde_json::Value> {
    let store = if state.catalog.is_live() { "live" } else { "degraded" };
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "store": store,
    }))
}
