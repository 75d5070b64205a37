use std::net::SocketAddr;
use std::sync::Arc;

use tower_http::cors::{Any, CorsLayer};
use tracing::info;
use tracing_subscriber::EnvFilter;

use taskboard_server::app_state::AppState;
use taskboard_server::data_access::data_context::DataContext;
use taskboard_server::map_routes;
use taskboard_server::settings::Settings;
use taskboard_server::slack::SlackNotifier;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // ── Settings & storage ─────────────────────────────────────
    let settings = Settings::load().expect("Failed to load settings");

    let data_context = DataContext::new(&settings.database_path)
        .expect("Failed to open task database");

    // ── Shared state ───────────────────────────────────────────
    let notifier = Arc::new(SlackNotifier::from_settings(&settings));
    let state = Arc::new(AppState {
        data_context,
        notifier,
    });

    // ── Router ─────────────────────────────────────────────────
    let app = map_routes(state).layer(
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    );

    // ── Start ──────────────────────────────────────────────────
    let addr: SocketAddr = format!("{}:{}", settings.tcp_socket_binding, settings.tcp_socket_port)
        .parse()
        .expect("Invalid socket binding in settings");

    info!("Server running on http://{addr}");
    info!("  Tasks:  http://{addr}/tasks");
    info!("  Health: http://{addr}/health/check_status");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    axum::serve(listener, app).await.expect("Server error");
}
