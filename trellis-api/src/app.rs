/// Application state and router builder
///
/// This module defines the shared application state and provides
/// a function to build the Axum router with all routes and middleware.
///
/// # Example
///
/// ```no_run
/// use trellis_api::{app::AppState, config::Config};
/// use sqlx::PgPool;
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// let pool = PgPool::connect(&config.database.url).await?;
/// let state = AppState::new(pool, config);
/// let app = trellis_api::app::build_router(state);
/// # Ok(())
/// # }
/// ```

use crate::config::Config;
use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

/// Shared application state
///
/// Cloned for each request handler via Axum's `State` extractor. The pool
/// is the only shared resource; there is no other cross-request state.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: PgPool,

    /// Application configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates new application state
    pub fn new(db: PgPool, config: Config) -> Self {
        Self {
            db,
            config: Arc::new(config),
        }
    }
}

/// Builds the complete Axum router with all routes and middleware
///
/// # Architecture
///
/// ```text
/// /
/// ├── /health                              # Health check
/// ├── /users                               # GET list, POST create
/// ├── /boards                              # GET list, POST create (transactional)
/// ├── /boards/:board_id/lists              # GET list, POST create
/// ├── /lists/:list_id/cards                # GET list, POST create
/// ├── /cards/:card_id/users                # GET owner (404 when unassigned)
/// └── /cards/:card_id/users/:user_id       # POST assign owner
/// ```
///
/// # Middleware Stack
///
/// 1. Logging (tower-http TraceLayer)
/// 2. CORS (tower-http CorsLayer)
pub fn build_router(state: AppState) -> Router {
    use crate::routes;

    let resource_routes = Router::new()
        .route("/health", get(routes::health::health_check))
        .route(
            "/users",
            get(routes::users::list_users).post(routes::users::create_user),
        )
        .route(
            "/boards",
            get(routes::boards::list_boards).post(routes::boards::create_board),
        )
        .route(
            "/boards/:board_id/lists",
            get(routes::lists::list_lists).post(routes::lists::create_list),
        )
        .route(
            "/lists/:list_id/cards",
            get(routes::cards::list_cards).post(routes::cards::create_card),
        )
        .route("/cards/:card_id/users", get(routes::card_users::get_card_owner))
        .route(
            "/cards/:card_id/users/:user_id",
            post(routes::card_users::assign_card_owner),
        );

    // Configure CORS based on environment
    let cors = if state.config.api.cors_origins.contains(&"*".to_string()) {
        CorsLayer::permissive()
    } else {
        let origins: Vec<HeaderValue> = state
            .config
            .api
            .cors_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE])
            .max_age(std::time::Duration::from_secs(3600))
    };

    resource_routes
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors)
        .with_state(state)
}
