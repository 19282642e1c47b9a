// [library] Axum web framework routing components
use axum::{
    extract::FromRef,
    http::{
        header::{ACCEPT, CONTENT_TYPE},
        HeaderValue, Method,
    },
    routing::{delete, get},
    Router,
};

// [library] Tower ecosystem - CORS middleware
use tower_http::cors::CorsLayer;

// [business] Import application modules for dependency injection and routing
use crate::{
    config::Config,
    db::Database,
    web::{
        create_participants_handler, create_winner_handler, delete_participant_handler,
        export_participants_handler, list_participants_handler, list_winners_handler,
        ping_handler, test_db_handler,
    },
};

// [business] Application state combining the pool and configuration
#[derive(Debug, Clone)]
pub struct AppState {
    pub db: Database,
    pub config: Config,
}

impl AppState {
    pub fn new(db: Database, config: Config) -> Self {
        Self { db, config }
    }
}

// [library] Implement FromRef to allow Axum to extract Database from AppState
impl FromRef<AppState> for Database {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db.clone()
    }
}

impl FromRef<AppState> for Config {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.config.clone()
    }
}

// [security] CORS restricted to the configured allow-list
// Origins that fail to parse as header values are dropped
pub fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([ACCEPT, CONTENT_TYPE])
}

// [business] Create the HTTP application router with every raffle endpoint
pub fn create_app_router(db: Database, config: Config) -> Router {
    let cors = cors_layer(&config.allowed_origins);
    let app_state = AppState::new(db, config);

    Router::new()
        // [business] Participants - one row per raffle number
        .route(
            "/participantes",
            get(list_participants_handler).post(create_participants_handler),
        )
        .route("/participantes/:id", delete(delete_participant_handler))
        // [business] Winners - append-only
        .route(
            "/ganadores",
            get(list_winners_handler).post(create_winner_handler),
        )
        // [business] Download of the participant table
        .route("/api/datos", get(export_participants_handler))
        // [business] Diagnostics
        .route("/api/test-db", get(test_db_handler))
        .route("/api/ping", get(ping_handler))
        .with_state(app_state)
        .layer(cors)
}
