//! Tracing and error-report setup for hosts embedding the client.

use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Install color-eyre and a layered tracing subscriber.
///
/// The filter comes from `RUST_LOG`, defaulting to `info`. Call at most
/// once per process.
pub fn init() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .with(ErrorLayer::default())
        .try_init()?;

    Ok(())
}
