use super::{handlers, state::AppState};
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

/// Creates the Axum router with all the application routes.
pub fn create_router(app_state: AppState) -> Router {
    let pages = handlers::page_routes(&app_state.config.pages_dir, &app_state.config.static_dir);

    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/chat", post(handlers::chat_handler))
        .route("/search_medicine", post(handlers::search_medicine_handler))
        .route(
            "/search_by_filename",
            post(handlers::search_by_filename_handler),
        )
        .merge(pages)
        .with_state(app_state)
        .layer(TraceLayer::new_for_http())
}
