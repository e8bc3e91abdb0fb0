use std::env;

pub mod cors;
pub mod security;

pub use cors::create_cors_layer;
pub use security::create_security_headers_layer;

/// Runtime configuration, built once at startup and threaded through
/// `AppState`. Nothing in the request path reads the environment directly.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    /// Browser landing page for GET-style gateway callbacks. The callback
    /// handler appends `status` and `message` query parameters.
    pub confirmation_page_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "postgres://localhost/ringside".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3001),
            confirmation_page_url: env::var("CONFIRMATION_PAGE_URL")
                .unwrap_or_else(|_| "http://localhost:3000/booking-confirmation".to_string()),
        }
    }
}
