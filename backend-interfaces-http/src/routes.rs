use axum::routing::{get, post};
use axum::Router;

use backend_application::AppState;

use crate::handlers::{ops_handlers, query_handlers, update_handlers};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api", get(ops_handlers::health))
        .route("/api/health", get(ops_handlers::health))
        .route("/api/update", post(update_handlers::apply_update))
        .route("/api/accounts", get(query_handlers::list_accounts))
        .route("/api/inventory", get(query_handlers::combined_inventory))
        .route("/api/stats", get(query_handlers::fleet_stats))
        .route("/api/metrics", get(ops_handlers::metrics_prometheus))
        .fallback(ops_handlers::unknown_endpoint)
        .with_state(state)
}
