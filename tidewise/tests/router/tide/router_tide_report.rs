use std::f64::consts::PI;
use std::sync::Arc;

use chrono::TimeDelta;
use proptest::prelude::*;
use tidewise::{
    Capability, ExtremumKind, Period, Projection, Shortfall, Tidewise,
    TidewiseError,
};
use tidewise_mock::{MockBehavior, MockConnector};

use crate::helpers::{dynamic, feet_every_6min, now};

fn mock_tidewise() -> Tidewise {
    Tidewise::builder()
        .with_connector(Arc::new(MockConnector::new()))
        .build()
        .unwrap()
}

#[tokio::test]
async fn report_from_mock_station_has_observed_next_extrema() {
    let tw = mock_tidewise();
    let report = tw.tide_report(now()).await.unwrap();

    assert_eq!(report.provider.as_str(), "tidewise-mock");
    assert_eq!(report.as_of, now());
    assert!(report.stats.kept > 0);
    assert_eq!(report.stats.kept, report.series.len());
    assert_eq!(report.series.timezone(), Some(chrono_tz::America::New_York));

    let extrema = report.extrema.as_ref().available().unwrap();
    assert!(extrema.count(ExtremumKind::High) >= 8);
    assert!(extrema.count(ExtremumKind::Low) >= 8);

    let high = report.next_high.available().unwrap();
    let low = report.next_low.available().unwrap();
    for next in [high, low] {
        assert_eq!(next.projection, Projection::Observed);
        assert!(next.ts > now());
        assert!(next.ts <= now() + TimeDelta::hours(13));
    }
    assert!(high.value > low.value);

    let reading = report.reading.available().unwrap();
    // last prediction strictly before now on the 6-minute grid
    assert_eq!(reading.current.ts, now() - TimeDelta::minutes(6));
    assert!(reading.trend.is_available());
}

#[tokio::test]
async fn metric_station_is_reported_in_feet() {
    let tw = Tidewise::builder()
        .with_connector(Arc::new(MockConnector::for_station("9414290")))
        .build()
        .unwrap();
    let report = tw.tide_report(now()).await.unwrap();
    let max = report
        .series
        .iter()
        .map(|s| s.value)
        .fold(f64::NEG_INFINITY, f64::max);
    // peak is about 1.8 m, so feet must read above 2
    assert!(max > 2.0);
}

#[tokio::test]
async fn next_extrema_are_extrapolated_past_a_stale_window() {
    let period_min = 745.0;
    // highs near -400 min, lows near -772 and -28 (the latter past the data)
    let values: Vec<f64> = (0..141)
        .map(|i| {
            let t = -900.0 + 6.0 * f64::from(i);
            2.0 + 2.0 * (2.0 * PI * (t + 400.0) / period_min).cos()
        })
        .collect();
    let (stale, ctl) = dynamic("stale");
    ctl.set_behavior(
        Capability::TidePredictions,
        MockBehavior::Return(feet_every_6min(-900, &values)),
    )
    .await;

    let tw = Tidewise::builder().with_connector(stale).build().unwrap();
    let report = tw.tide_report(now()).await.unwrap();
    let period = Period::semi_diurnal().as_delta();

    let extrema = report.extrema.as_ref().available().unwrap();
    let first_high = extrema.of_kind(ExtremumKind::High).next().copied().unwrap();
    let high = report.next_high.available().unwrap();
    assert!(high.is_extrapolated());
    assert!(high.ts > now() && high.ts <= now() + period);
    assert_eq!((high.ts - first_high.ts).num_seconds() % period.num_seconds(), 0);
    assert_eq!(high.value, first_high.value);

    let reading = report.reading.available().unwrap();
    assert_eq!(reading.current.ts, crate::helpers::at(-60));
}

#[tokio::test]
async fn report_without_any_high_says_so() {
    // monotonic fall: the strict rule finds no interior extremum
    let values: Vec<f64> = (0..20).map(|i| 5.0 - 0.1 * f64::from(i)).collect();
    let (falling, ctl) = dynamic("falling");
    ctl.set_behavior(
        Capability::TidePredictions,
        MockBehavior::Return(feet_every_6min(-60, &values)),
    )
    .await;
    let tw = Tidewise::builder().with_connector(falling).build().unwrap();
    let report = tw.tide_report(now()).await.unwrap();
    assert_eq!(
        report.next_high.shortfall(),
        Some(Shortfall::NoExtremumAvailable)
    );
    assert_eq!(
        report.reading.available().unwrap().trend,
        tidewise::Derived::Available(tidewise::TrendLabel::Falling)
    );
}

#[tokio::test]
async fn chain_failure_fails_the_report() {
    let tw = Tidewise::builder()
        .with_connector(Arc::new(MockConnector::for_station("FAIL")))
        .build()
        .unwrap();
    let err = tw.tide_report(now()).await.unwrap_err();
    assert!(matches!(err, TidewiseError::AllProvidersFailed(_)));
    let parts = err.flatten();
    assert!(matches!(
        &parts[0],
        TidewiseError::Connector { connector, .. } if connector == "tidewise-mock"
    ));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn next_high_is_always_after_now(offset_min in 0i64..(7 * 24 * 60)) {
        let tw = mock_tidewise();
        let at = now() + TimeDelta::minutes(offset_min);
        let report = tokio_test::block_on(tw.tide_report(at)).unwrap();
        let high = report.next_high.available().unwrap();
        let low = report.next_low.available().unwrap();
        prop_assert!(high.ts > at);
        prop_assert!(low.ts > at);
        prop_assert_eq!(high.kind, ExtremumKind::High);
    }
}
