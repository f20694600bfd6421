use std::sync::Arc;

use tidewise::{Capability, Tidewise, TidewiseError, Unit, WindowRequest};
use tidewise_mock::{MockBehavior, MockConnector};

use crate::helpers::{at, dynamic, feet_every_6min, raw};

fn window() -> WindowRequest {
    WindowRequest::new(at(-60), at(60)).unwrap()
}

#[tokio::test]
async fn failing_provider_falls_through_to_next() {
    let (bad, c_bad) = dynamic("bad");
    let (good, c_good) = dynamic("good");
    c_bad
        .set_behavior(
            Capability::TidePredictions,
            MockBehavior::Fail(TidewiseError::Other("503".into())),
        )
        .await;
    c_good
        .set_behavior(
            Capability::TidePredictions,
            MockBehavior::Return(feet_every_6min(-12, &[1.0, 1.5, 2.0])),
        )
        .await;

    let tw = Tidewise::builder()
        .with_connector(bad)
        .with_connector(good)
        .build()
        .unwrap();
    let got = tw.tide_predictions(window()).await.unwrap();
    assert_eq!(got.provider.as_str(), "good");
    assert_eq!(got.data.stats.kept, 3);
    assert_eq!(c_bad.requests(Capability::TidePredictions).await, vec![window()]);
}

#[tokio::test]
async fn placeholder_data_is_treated_as_a_failure() {
    let dummy = Arc::new(MockConnector::named("offline-feed", "DUMMY"));
    let real = Arc::new(MockConnector::named("harmonics", "8461490"));
    let tw = Tidewise::builder()
        .with_connector(dummy)
        .with_connector(real)
        .build()
        .unwrap();

    let got = tw.tide_predictions(window()).await.unwrap();
    assert_eq!(got.provider.as_str(), "harmonics");
    assert!(got.data.data.iter().all(|s| s.value.abs() < 10.0));
}

#[tokio::test]
async fn samples_outside_the_window_do_not_count() {
    let (early, c) = dynamic("early");
    c.set_behavior(
        Capability::TidePredictions,
        MockBehavior::Return(feet_every_6min(-600, &[1.0, 2.0])),
    )
    .await;
    let tw = Tidewise::builder().with_connector(early).build().unwrap();
    let err = tw.tide_predictions(window()).await.unwrap_err();
    assert!(matches!(err, TidewiseError::NotFound { .. }));
}

#[tokio::test]
async fn all_not_found_collapses_to_not_found() {
    let a = Arc::new(MockConnector::named("a", "0000001"));
    let b = Arc::new(MockConnector::named("b", "DUMMY"));
    let tw = Tidewise::builder()
        .with_connector(a)
        .with_connector(b)
        .build()
        .unwrap();
    let err = tw.tide_predictions(window()).await.unwrap_err();
    match err {
        TidewiseError::NotFound { what } => assert!(what.starts_with("tide predictions")),
        other => panic!("unexpected: {other:?}"),
    }
}

#[tokio::test]
async fn mixed_failures_are_aggregated_and_tagged() {
    let (a, c_a) = dynamic("a");
    let (b, c_b) = dynamic("b");
    c_a.set_behavior(
        Capability::PressureObservations,
        MockBehavior::Fail(TidewiseError::Data("bad json".into())),
    )
    .await;
    c_b.set_behavior(
        Capability::PressureObservations,
        MockBehavior::Fail(TidewiseError::not_found("station")),
    )
    .await;
    let tw = Tidewise::builder()
        .with_connector(a)
        .with_connector(b)
        .build()
        .unwrap();
    let err = tw.pressure_observations(window()).await.unwrap_err();
    let parts = err.flatten();
    assert_eq!(parts.len(), 2);
    assert!(matches!(&parts[0], TidewiseError::Connector { connector, .. } if connector == "a"));
    assert!(matches!(&parts[1], TidewiseError::NotFound { .. }));
}

#[tokio::test]
async fn wrong_unit_is_a_provider_failure() {
    let (a, c_a) = dynamic("a");
    let (b, c_b) = dynamic("b");
    c_a.set_behavior(
        Capability::PressureObservations,
        MockBehavior::Return(raw(Unit::Feet, &[(0, Some(30.0))])),
    )
    .await;
    c_b.set_behavior(
        Capability::PressureObservations,
        MockBehavior::Return(raw(Unit::Hectopascals, &[(-30, Some(1013.25))])),
    )
    .await;
    let tw = Tidewise::builder()
        .with_connector(a)
        .with_connector(b)
        .build()
        .unwrap();
    let got = tw.pressure_observations(window()).await.unwrap();
    assert_eq!(got.provider.as_str(), "b");
    assert_eq!(got.data.data.samples()[0].value, 29.92);
}

struct TideOnly;

impl tidewise::TidewiseConnector for TideOnly {
    fn name(&self) -> &'static str {
        "tide-only"
    }
}

#[tokio::test]
async fn no_capable_connector_is_unsupported() {
    let tw = Tidewise::builder()
        .with_connector(Arc::new(TideOnly))
        .build()
        .unwrap();
    let err = tw.pressure_forecast(window()).await.unwrap_err();
    assert_eq!(err, TidewiseError::unsupported("pressure-forecast"));
    assert!(!err.is_actionable());
}
