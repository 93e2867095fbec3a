//! Renders an emoji glyph to a mask and prints it to the terminal.
//!
//! Usage: `mask_preview [GLYPH] [WIDTH] [HEIGHT]`

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(coverage_nightly, coverage(off))]

use anyhow::{Context, Result};
use snakelle::constants::DEFAULT_BOARD_SIZE;
use snakelle::mask::generate_mask;
use tracing::info;
use tracing_error::ErrorLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .finish()
        .with(ErrorLayer::default());
    tracing::subscriber::set_global_default(subscriber).context("Could not set global default subscriber")?;

    let mut args = std::env::args().skip(1);
    let glyph = args.next().unwrap_or_else(|| "🍎".to_string());
    let width = match args.next() {
        Some(raw) => raw.parse().context("WIDTH must be an integer")?,
        None => DEFAULT_BOARD_SIZE.x,
    };
    let height = match args.next() {
        Some(raw) => raw.parse().context("HEIGHT must be an integer")?,
        None => DEFAULT_BOARD_SIZE.y,
    };

    let mask = generate_mask(&glyph, width, height)?;
    info!(glyph = %glyph, width, height, cells = mask.count(), "Generated mask");
    print!("{mask}");

    Ok(())
}
