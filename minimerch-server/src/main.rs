use std::net::SocketAddr;

use minimerch_server::schedule::ScheduleConfig;
use minimerch_server::web::{AppState, create_router};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Address to listen on when MINIMERCH_ADDR is not set.
const DEFAULT_ADDR: SocketAddr = SocketAddr::new(
    std::net::IpAddr::V4(std::net::Ipv4Addr::LOCALHOST),
    3000,
);

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Listen address from environment
    let addr = match std::env::var("MINIMERCH_ADDR") {
        Ok(value) => value.parse().unwrap_or_else(|e| {
            warn!(%value, error = %e, "invalid MINIMERCH_ADDR, using default");
            DEFAULT_ADDR
        }),
        Err(_) => DEFAULT_ADDR,
    };

    let config = ScheduleConfig::default();
    info!(
        weekday_hours = ?config.weekday_hours,
        sunday_hours = ?config.sunday_hours,
        min_advance_days = config.min_advance_days,
        "booking configuration"
    );

    let state = AppState::new(config);
    let app = create_router(state);

    info!("MiniMerch server listening on http://{addr}");
    info!("API Endpoints:");
    info!("  GET  /health                 - Health check");
    info!("  GET  /api/cpf/validate       - Validate a CPF");
    info!("  GET  /api/schedule/slots     - Bookable slots for a date");
    info!("  GET  /api/schedule/calendar  - Booking calendar for a month");
    info!("  POST /api/registrations      - Submit registration form");
    info!("  POST /api/appointments       - Submit appointment form");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listen address");
    axum::serve(listener, app).await.expect("Server error");
}
