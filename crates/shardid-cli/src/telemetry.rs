//! Console logging for the CLI.
//!
//! Events go to stderr so that stdout carries only reports and can be piped.
//! The level is controlled with `RUST_LOG` and defaults to `warn`, which
//! surfaces rejected tokens and nothing else.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

pub fn init_telemetry() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .try_init()?;
    Ok(())
}
