//! Placeholder entry point for the SARSA agent
//!
//! The agent is a library; training loops live with their environments.
//! This binary only installs logging.

use tracing::Level;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let env_filter = EnvFilter::builder()
        .with_default_directive(Level::INFO.into())
        .from_env_lossy();

    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    tracing::debug!(
        version = env!("CARGO_PKG_VERSION"),
        "sarsa-agent has no default action"
    );

    Ok(())
}
