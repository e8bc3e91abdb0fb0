use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::config::{create_cors_layer, create_security_headers_layer};
use crate::handlers::bookings::{create_booking, get_booking};
use crate::handlers::callbacks::{chillpay_callback, payment_callback};
use crate::handlers::health_check;
use crate::handlers::templates::expand_template;
use crate::AppState;

pub fn create_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/bookings", post(create_booking))
        .route("/bookings/:id", get(get_booking))
        .route("/payment-callback", post(payment_callback))
        .route("/chillpay-callback", get(chillpay_callback))
        .route("/event-templates/:id/expand", post(expand_template))
        .layer(TraceLayer::new_for_http())
        .layer(create_security_headers_layer())
        .layer(create_cors_layer())
        .with_state(state)
}
