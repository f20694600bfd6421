mod common;
use common::{get_connector, init_tracing, or_na};
use tidewise::{ExtremumKind, Tidewise};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    // 1. Register a connector (TIDEWISE_STATION picks a bundled station).
    let tw = Tidewise::builder().with_connector(get_connector()).build()?;

    // 2. Fetch predictions around now and run the engine over them.
    let report = tw.tide_report(chrono::Utc::now()).await?;
    println!(
        "Tide report from {} ({} samples kept, {} implausible dropped)",
        report.provider, report.stats.kept, report.stats.implausible
    );

    // Times are shown in the station's zone when the feed supplies one.
    let tz = report.series.timezone().unwrap_or(chrono_tz::UTC);

    // 3. Current height and direction.
    println!(
        "Now: {}",
        or_na(report.reading, |r| format!(
            "{:.2} ft, {}",
            r.current.value,
            or_na(r.trend, |t| format!("{t:?}").to_lowercase())
        ))
    );

    // 4. Next high and low; extrapolated values are marked with '~'.
    for (label, next) in [("high", report.next_high), ("low", report.next_low)] {
        println!(
            "Next {label}: {}",
            or_na(next, |n| format!(
                "{}{:.2} ft at {}",
                if n.is_extrapolated() { "~" } else { "" },
                n.value,
                n.ts.with_timezone(&tz).format("%a %H:%M %Z")
            ))
        );
    }

    // 5. Every detected high in the window.
    if let Some(extrema) = report.extrema.available() {
        println!("Highs ({:?} rule):", extrema.rule);
        for e in extrema.of_kind(ExtremumKind::High) {
            println!(
                "  {} {:.2} ft",
                e.ts.with_timezone(&tz).format("%a %H:%M"),
                e.value
            );
        }
    }

    Ok(())
}
