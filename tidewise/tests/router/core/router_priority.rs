use tidewise::{Capability, Tidewise, Unit, WindowRequest};
use tidewise_mock::MockBehavior;

use crate::helpers::{at, dynamic, feet_every_6min};

fn window() -> WindowRequest {
    WindowRequest::new(at(-60), at(60)).unwrap()
}

#[tokio::test]
async fn registration_order_is_the_default_chain() {
    let (first, c1) = dynamic("first");
    let (second, c2) = dynamic("second");
    c1.set_behavior(
        Capability::TidePredictions,
        MockBehavior::Return(feet_every_6min(0, &[1.0, 2.0])),
    )
    .await;
    c2.set_behavior(
        Capability::TidePredictions,
        MockBehavior::Return(feet_every_6min(0, &[3.0, 4.0])),
    )
    .await;

    let tw = Tidewise::builder()
        .with_connector(first)
        .with_connector(second)
        .build()
        .unwrap();
    let got = tw.tide_predictions(window()).await.unwrap();
    assert_eq!(got.provider.as_str(), "first");
    assert!(c2.requests(Capability::TidePredictions).await.is_empty());
}

#[tokio::test]
async fn per_capability_priority_is_applied() {
    let (low, c_low) = dynamic("low");
    let (high, c_high) = dynamic("high");
    c_low
        .set_behavior(
            Capability::TidePredictions,
            MockBehavior::Return(feet_every_6min(0, &[1.0])),
        )
        .await;
    c_high
        .set_behavior(
            Capability::TidePredictions,
            MockBehavior::Return(feet_every_6min(0, &[2.0])),
        )
        .await;
    c_low
        .set_behavior(
            Capability::PressureObservations,
            MockBehavior::Return(crate::helpers::raw(Unit::InchesOfMercury, &[(0, Some(30.0))])),
        )
        .await;

    let tw = Tidewise::builder()
        .with_connector(low.clone())
        .with_connector(high.clone())
        .prefer_for(Capability::TidePredictions, &[high, low])
        .build()
        .unwrap();

    let tide = tw.tide_predictions(window()).await.unwrap();
    assert_eq!(tide.provider.as_str(), "high");
    assert_eq!(tide.data.data.samples()[0].value, 2.0);

    // other capabilities keep registration order
    let obs = tw.pressure_observations(window()).await.unwrap();
    assert_eq!(obs.provider.as_str(), "low");
}
