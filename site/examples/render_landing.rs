//! Render the landing page to disk.
//!
//! Run with: `cargo run --example render_landing -- dist/index.html`
//!
//! Set `RUST_LOG=debug` to see render events.

use morr_site::{write_landing, SiteConfig};
use tracing::info;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".parse().unwrap_or_default()),
        )
        .init();

    let output_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "dist/index.html".to_string());

    let config = SiteConfig::default();
    write_landing(&output_path, &config)?;

    info!("Theme config:\n{}", config.theme.to_json()?);
    Ok(())
}
