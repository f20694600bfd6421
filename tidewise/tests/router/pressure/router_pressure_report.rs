use std::sync::Arc;

use chrono::TimeDelta;
use tidewise::{Capability, Shortfall, Tidewise, TidewiseError, Unit};
use tidewise_mock::{MockBehavior, MockConnector};

use crate::helpers::{dynamic, now, raw};

#[tokio::test]
async fn report_from_mock_station() {
    let tw = Tidewise::builder()
        .with_connector(Arc::new(MockConnector::new()))
        .build()
        .unwrap();
    let report = tw.pressure_report(now()).await.unwrap();

    assert_eq!(report.provider.as_str(), "tidewise-mock");
    assert_eq!(
        report.forecast_provider.as_ref().map(|k| k.as_str()),
        Some("tidewise-mock")
    );
    assert!(report.forecast_error.is_none());
    assert!(report.actual.iter().all(|s| (28.0..32.0).contains(&s.value)));
    assert!(report.actual.last().unwrap().ts <= now());

    let lb = report.lookback.available().unwrap();
    assert!(!lb.is_fallback());
    assert_eq!(lb.at, Some(now() - TimeDelta::hours(3)));

    let st = report.stitched.available().unwrap();
    assert!(!st.synthesized.is_empty());
    assert!(st.points().all(|s| s.value.is_finite()));
    assert_eq!(st.bridge[0], *report.actual.last().unwrap());
}

#[tokio::test]
async fn missing_forecast_degrades_only_the_stitched_series() {
    let (obs, ctl) = dynamic("obs");
    ctl.set_behavior(
        Capability::PressureObservations,
        MockBehavior::Return(raw(
            Unit::InchesOfMercury,
            &[(-240, Some(29.80)), (-180, Some(29.85)), (0, Some(29.95))],
        )),
    )
    .await;
    ctl.set_behavior(
        Capability::PressureForecast,
        MockBehavior::Fail(TidewiseError::Other("forecast feed down".into())),
    )
    .await;

    let tw = Tidewise::builder().with_connector(obs).build().unwrap();
    let report = tw.pressure_report(now()).await.unwrap();
    assert_eq!(report.stitched.shortfall(), Some(Shortfall::EmptyInput));
    assert!(report.forecast_provider.is_none());
    assert!(matches!(
        report.forecast_error,
        Some(TidewiseError::AllProvidersFailed(_))
    ));
    assert_eq!(report.reading.available().unwrap().current.value, 29.95);
    assert_eq!(report.lookback.available().unwrap().value, 29.85);
}

#[tokio::test]
async fn lookback_falls_back_when_history_is_short() {
    let (obs, ctl) = dynamic("obs");
    ctl.set_behavior(
        Capability::PressureObservations,
        MockBehavior::Return(raw(
            Unit::InchesOfMercury,
            &[(-60, Some(30.00)), (0, Some(30.02))],
        )),
    )
    .await;
    let tw = Tidewise::builder().with_connector(obs).build().unwrap();
    let report = tw.pressure_report(now()).await.unwrap();
    let lb = report.lookback.available().unwrap();
    assert!(lb.is_fallback());
    assert!((lb.value - 29.92).abs() < 1e-9);
    // no forecast behavior set: the dynamic mock reports the capability unsupported
    assert!(matches!(
        report.forecast_error,
        Some(TidewiseError::AllProvidersFailed(_))
    ));
}

#[tokio::test]
async fn observation_failure_fails_the_report() {
    let tw = Tidewise::builder()
        .with_connector(Arc::new(MockConnector::for_station("DUMMY")))
        .build()
        .unwrap();
    let err = tw.pressure_report(now()).await.unwrap_err();
    assert!(matches!(err, TidewiseError::NotFound { .. }));
}

#[tokio::test]
async fn configured_synthesizer_fills_forecast_gaps() {
    let (feed, ctl) = dynamic("feed");
    ctl.set_behavior(
        Capability::PressureObservations,
        MockBehavior::Return(raw(
            Unit::InchesOfMercury,
            &[(-60, Some(29.90)), (0, Some(30.00))],
        )),
    )
    .await;
    ctl.set_behavior(
        Capability::PressureForecast,
        MockBehavior::Return(raw(
            Unit::InchesOfMercury,
            &[(60, None), (120, Some(30.10)), (180, None)],
        )),
    )
    .await;

    let tw = Tidewise::builder()
        .with_connector(feed)
        .forecast_synthesizer(|last: f64, index: usize| last - 0.5 + 0.1 * index as f64)
        .build()
        .unwrap();
    let report = tw.pressure_report(now()).await.unwrap();
    let st = report.stitched.available().unwrap();
    let values: Vec<f64> = st.forecast.iter().map(|s| s.value).collect();
    assert_eq!(st.synthesized, vec![0, 2]);
    assert!((values[0] - 29.50).abs() < 1e-9);
    assert_eq!(values[1], 30.10);
    assert!((values[2] - 29.70).abs() < 1e-9);
}
