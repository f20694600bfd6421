mod common;
use common::{get_connector, init_tracing, or_na};
use tidewise::Tidewise;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let tw = Tidewise::builder().with_connector(get_connector()).build()?;

    // Observations and forecast are fetched concurrently; a missing forecast
    // only removes the stitched series.
    let report = tw.pressure_report(chrono::Utc::now()).await?;

    println!(
        "Barometer: {}",
        or_na(report.reading, |r| format!(
            "{:.2} inHg ({})",
            r.current.value,
            or_na(r.trend, |t| format!("{t:?}").to_lowercase())
        ))
    );
    println!(
        "3h ago:    {}",
        or_na(report.lookback, |lb| match lb.at {
            Some(at) => format!("{:.2} inHg at {}", lb.value, at.format("%H:%M")),
            None => format!("{:.2} inHg (estimated)", lb.value),
        })
    );

    match report.stitched.available() {
        Some(st) => {
            println!("Actual + forecast:");
            for (i, s) in st.forecast.iter().enumerate() {
                let mark = if st.is_synthesized(i) { " (filled)" } else { "" };
                println!("  {} {:.2}{mark}", s.ts.format("%H:%M"), s.value);
            }
        }
        None => println!(
            "Forecast unavailable: {}",
            report
                .forecast_error
                .map_or_else(|| "no data".to_string(), |e| e.to_string())
        ),
    }

    Ok(())
}
