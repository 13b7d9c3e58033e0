//! Bookings Admin - Main Entry Point
//!
//! Configures the fullstack server: Dioxus app plus the REST routes.
//! Uses dioxus::serve() pattern for dx serve compatibility.

use booking_admin::app::App;

// Server entry point - NO #[tokio::main], dioxus::serve() creates its own runtime
#[cfg(feature = "server")]
fn main() {
    use booking_admin::config::{self, ServerConfig};
    use booking_admin::handlers::{health_handler, list_bookings_handler};
    use dioxus::server::axum::routing::get;
    use tower_http::trace::TraceLayer;

    // Initialize tracing BEFORE dioxus::serve
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // dx passes its own arguments, so only the environment is read here
    let config = match ServerConfig::from_env().and_then(config::init) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!(
        upstream = %config.bookings_url(),
        cache_ttl_secs = config.cache_ttl_secs,
        "Starting Bookings Admin..."
    );

    dioxus::serve(|| async move {
        let router = dioxus::server::router(App)
            .route("/api/health", get(health_handler))
            .route("/api/bookings", get(list_bookings_handler))
            .layer(TraceLayer::new_for_http());

        Ok(router)
    });
}

// WASM entry point (browser) - no server feature
#[cfg(all(not(feature = "server"), target_arch = "wasm32"))]
fn main() {
    web_sys::console::log_1(&"[WASM] Bookings Admin - WASM initialized!".into());
    dioxus::launch(App);
}

// Native client (desktop) - no server feature, not WASM
#[cfg(all(not(feature = "server"), not(target_arch = "wasm32")))]
fn main() {
    dioxus::launch(App);
}
