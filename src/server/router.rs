//! Router construction

use axum::routing::post;
use axum::Router;
use tower_http::trace::TraceLayer;

use super::handlers::{charge_card, method_not_allowed, AppState};

/// Build the service router:
/// - POST /charge - price and charge a submitted order form
/// - any other verb on /charge - 405 without touching the pricing engine
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/charge", post(charge_card).fallback(method_not_allowed))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
