//! Farrowcam demo shell
//!
//! Builds the seeded farrowing house fleet and emits a one-shot status
//! report: structured log lines plus a JSON fleet summary.

use farrowcam::seed;
use farrowcam::state::AppConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // Load .env if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "farrowcam=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting farrowcam v{}", env!("CARGO_PKG_VERSION"));

    let config = AppConfig::default();
    tracing::info!(
        event_capacity = config.event_capacity,
        recent_events_limit = config.recent_events_limit,
        "Configuration loaded"
    );

    let state = seed::demo_state(config)?;

    let summary = state.fleet_summary();
    tracing::info!(
        cameras = summary.total_cameras,
        active = summary.status.active,
        alerting = summary.status.alerting,
        inactive = summary.status.inactive,
        "Camera fleet loaded"
    );

    let network = state.connections.network_info();
    tracing::info!(
        network = %network.network_name,
        ip_address = %network.ip_address,
        bandwidth_mbps = network.bandwidth_mbps,
        online = summary.connectivity.online,
        weak = summary.connectivity.weak,
        offline = summary.connectivity.offline,
        average_signal = summary.connectivity.average_signal,
        "Connectivity summarized"
    );

    for event in state.events.latest(state.config.recent_events_limit) {
        tracing::debug!(
            event_id = event.id,
            camera_id = event.camera_id,
            kind = %event.kind,
            timestamp = %event.timestamp,
            "Recent pen event"
        );
    }

    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}
