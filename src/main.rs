//! Render the banded gradient icon into `gradient.png` in the current directory
#![deny(warnings)]

use sinebands::*;
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

type Error = Box<dyn std::error::Error>;

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_span_events(FmtSpan::CLOSE)
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = GradientConfig::default();
    let image = render(&config)?;

    tracing::debug_span!("[save]", file = OUTPUT_FILE).in_scope(|| image.save_png(OUTPUT_FILE))?;
    println!("Image written to {OUTPUT_FILE}");

    Ok(())
}
