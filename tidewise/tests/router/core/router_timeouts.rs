use std::sync::Arc;
use std::time::Duration;

use tidewise::{Capability, Tidewise, TidewiseError, WindowRequest};
use tidewise_mock::{MockBehavior, MockConnector};

use crate::helpers::{at, dynamic, feet_every_6min};

fn window() -> WindowRequest {
    WindowRequest::new(at(-60), at(60)).unwrap()
}

#[tokio::test(start_paused = true)]
async fn hanging_provider_times_out_and_next_is_used() {
    let (slow, c_slow) = dynamic("slow");
    let (fast, c_fast) = dynamic("fast");
    c_slow
        .set_behavior(Capability::TidePredictions, MockBehavior::Hang)
        .await;
    c_fast
        .set_behavior(
            Capability::TidePredictions,
            MockBehavior::Return(feet_every_6min(0, &[1.0])),
        )
        .await;

    let tw = Tidewise::builder()
        .with_connector(slow)
        .with_connector(fast)
        .provider_timeout(Duration::from_millis(100))
        .build()
        .unwrap();
    let got = tw.tide_predictions(window()).await.unwrap();
    assert_eq!(got.provider.as_str(), "fast");
}

#[tokio::test(start_paused = true)]
async fn all_timeouts_collapse_to_all_timed_out() {
    let (a, c_a) = dynamic("a");
    let (b, c_b) = dynamic("b");
    c_a.set_behavior(Capability::PressureForecast, MockBehavior::Hang)
        .await;
    c_b.set_behavior(Capability::PressureForecast, MockBehavior::Hang)
        .await;
    let tw = Tidewise::builder()
        .with_connector(a)
        .with_connector(b)
        .provider_timeout(Duration::from_millis(50))
        .build()
        .unwrap();
    let err = tw.pressure_forecast(window()).await.unwrap_err();
    assert_eq!(
        err,
        TidewiseError::AllProvidersTimedOut {
            capability: "pressure-forecast".into()
        }
    );
}

#[tokio::test(start_paused = true)]
async fn slow_mock_station_exceeds_short_timeout() {
    let tw = Tidewise::builder()
        .with_connector(Arc::new(MockConnector::for_station("TIMEOUT")))
        .provider_timeout(Duration::from_millis(20))
        .build()
        .unwrap();
    let err = tw.tide_predictions(window()).await.unwrap_err();
    assert!(matches!(err, TidewiseError::AllProvidersTimedOut { .. }));
}
