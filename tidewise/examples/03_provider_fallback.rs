mod common;
use std::sync::Arc;
use std::time::Duration;

use common::init_tracing;
use tidewise::{Capability, Tidewise};
use tidewise_mock::MockConnector;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    // A feed that serves placeholder heights, one that stalls, and a good one.
    let placeholder = Arc::new(MockConnector::named("placeholder", "DUMMY"));
    let stalled = Arc::new(MockConnector::named("stalled", "TIMEOUT"));
    let harmonics = Arc::new(MockConnector::named("harmonics", "8461490"));

    let tw = Tidewise::builder()
        .with_connector(harmonics.clone())
        .with_connector(placeholder.clone())
        .with_connector(stalled.clone())
        // try the unreliable feeds first for tides to show the fallback
        .prefer_for(
            Capability::TidePredictions,
            &[placeholder, stalled, harmonics],
        )
        .provider_timeout(Duration::from_millis(100))
        .build()?;

    // Run with RUST_LOG=tidewise=warn to see each skipped provider.
    let report = tw.tide_report(chrono::Utc::now()).await?;
    println!("Tide predictions served by: {}", report.provider);

    // Pressure keeps registration order, so harmonics answers directly.
    let pressure = tw.pressure_report(chrono::Utc::now()).await?;
    println!("Pressure served by: {}", pressure.provider);

    Ok(())
}
