//! API Router with Swagger UI

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    extract::FromRef,
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::domain::RepositoryProvider;
use crate::interfaces::http::common::ErrorResponse;
use crate::interfaces::http::dto::{
    CreateTimeEntryRequest, LoginRequest, LoginResponse, LoginRole, TimeEntryDto,
};
use crate::interfaces::http::request_id::request_id_middleware;

use super::handlers::{auth, fallback, health, root, time_entries};

/// Unified router state. Axum extracts the specific handler state via `FromRef`.
#[derive(Clone)]
pub struct AppState {
    pub repos: Arc<dyn RepositoryProvider>,
    pub static_index: Option<Arc<PathBuf>>,
}

impl AppState {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self {
            repos,
            static_index: None,
        }
    }

    pub fn with_static_index(mut self, path: Option<PathBuf>) -> Self {
        self.static_index = path.map(Arc::new);
        self
    }
}

impl FromRef<AppState> for time_entries::TimeEntryAppState {
    fn from_ref(s: &AppState) -> Self {
        time_entries::TimeEntryAppState {
            repos: Arc::clone(&s.repos),
        }
    }
}

impl FromRef<AppState> for root::RootState {
    fn from_ref(s: &AppState) -> Self {
        root::RootState {
            static_index: s.static_index.clone(),
        }
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        root::root,
        health::health_check,
        time_entries::list_time_entries,
        time_entries::create_time_entry,
        auth::login,
    ),
    components(
        schemas(
            ErrorResponse,
            root::RootResponse,
            health::HealthResponse,
            TimeEntryDto,
            CreateTimeEntryRequest,
            LoginRequest,
            LoginResponse,
            LoginRole,
        )
    ),
    tags(
        (name = "Health", description = "Landing and liveness endpoints"),
        (name = "Time Entries", description = "Recorded work time"),
        (name = "Authentication", description = "Placeholder role login, no credential check"),
    ),
    info(
        title = "Worklogger API",
        version = "0.1.0",
        description = "REST API for recording and listing work time entries",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
pub fn create_api_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    Router::new()
        // Swagger UI
        .merge(swagger_routes)
        // Landing + health
        .route("/", get(root::root).fallback(fallback::get_only))
        .route(
            "/health",
            get(health::health_check).fallback(fallback::get_only),
        )
        // Time entries
        .route(
            "/timeentries",
            get(time_entries::list_time_entries)
                .post(time_entries::create_time_entry)
                .fallback(fallback::get_or_post),
        )
        // Auth
        .route(
            "/api/v1/login",
            post(auth::login).fallback(fallback::post_only),
        )
        .fallback(fallback::not_found)
        .with_state(state)
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_id_middleware))
}

// ── Tests ──────────────────────────────────────────────────────
