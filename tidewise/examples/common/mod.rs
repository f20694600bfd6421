#![allow(dead_code)]

use std::sync::Arc;

use tidewise::TidewiseConnector;
use tracing_subscriber::EnvFilter;

/// Connector for the station named by `TIDEWISE_STATION`, or the mock default.
///
/// Only the bundled stations carry data; any other id answers "not found".
#[must_use]
pub fn get_connector() -> Arc<dyn TidewiseConnector> {
    match std::env::var("TIDEWISE_STATION") {
        Ok(station) => {
            println!("--- (Using mock station {station}) ---");
            let station: &'static str = Box::leak(station.into_boxed_str());
            Arc::new(tidewise_mock::MockConnector::for_station(station))
        }
        Err(_) => Arc::new(tidewise_mock::MockConnector::new()),
    }
}

/// Log to stderr, filtered by `RUST_LOG` (e.g. `RUST_LOG=tidewise=debug`).
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

/// Render a derived value, or "N/A" when it is unavailable.
pub fn or_na<T>(d: tidewise::Derived<T>, f: impl FnOnce(T) -> String) -> String {
    d.available().map_or_else(|| "N/A".to_string(), f)
}
