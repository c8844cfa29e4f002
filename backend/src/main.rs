//! Backend entry-point: loads settings, seeds the dataset and serves the API.

mod server;

use std::sync::Arc;

use actix_web::web;
use mockable::{Clock, DefaultClock};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerConfig, create_server};
use zoe_api::inbound::http::health::HealthState;
use zoe_api::outbound::memory::seeded_state;
use zoe_api::seed::load_dataset;
use zoe_api::settings::ServerSettings;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings =
        ServerSettings::load().map_err(|err| std::io::Error::other(err.to_string()))?;
    let clock: Arc<dyn Clock> = Arc::new(DefaultClock);
    let dataset = load_dataset(&settings, clock.utc()).map_err(std::io::Error::other)?;
    let config = ServerConfig::from_settings(&settings)?;
    info!(
        addr = %config.bind_addr(),
        latency_ms = settings.latency().as_millis(),
        "starting server"
    );

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, seeded_state(dataset, clock), config)?;
    server.await
}
