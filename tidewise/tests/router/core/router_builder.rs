use std::sync::Arc;
use std::time::Duration;

use tidewise::{
    Capability, EngineConfig, Quantity, SanityBound, Tidewise, TidewiseConfig, TidewiseConnector,
    TidewiseError,
};
use tidewise_mock::MockConnector;

#[test]
fn build_requires_a_connector() {
    let err = Tidewise::builder().build().err().unwrap();
    assert!(matches!(err, TidewiseError::InvalidArg(_)));
}

#[test]
fn duplicate_connector_names_are_rejected() {
    let a: Arc<dyn TidewiseConnector> = Arc::new(MockConnector::new());
    let b: Arc<dyn TidewiseConnector> = Arc::new(MockConnector::for_station("8443970"));
    let err = Tidewise::builder()
        .with_connector(a)
        .with_connector(b)
        .build()
        .err()
        .unwrap();
    assert!(matches!(err, TidewiseError::InvalidArg(msg) if msg.contains("tidewise-mock")));
}

#[test]
fn invalid_config_is_rejected_at_build() {
    let engine = EngineConfig {
        extrema_window: 0,
        ..EngineConfig::default()
    };
    let res = Tidewise::builder()
        .with_connector(Arc::new(MockConnector::new()))
        .engine(engine)
        .build();
    assert!(matches!(res, Err(TidewiseError::InvalidArg(_))));

    let res = Tidewise::builder()
        .with_connector(Arc::new(MockConnector::new()))
        .provider_timeout(Duration::ZERO)
        .build();
    assert!(matches!(res, Err(TidewiseError::InvalidArg(_))));
}

#[test]
fn builder_setters_reach_the_config() {
    let bound = SanityBound::new(-3.0, 9.0).unwrap();
    let tw = Tidewise::builder()
        .with_connector(Arc::new(MockConnector::new()))
        .provider_timeout(Duration::from_millis(750))
        .sanity_bound(Quantity::TideHeight, bound)
        .build()
        .unwrap();
    assert_eq!(tw.config().provider_timeout, Duration::from_millis(750));
    assert_eq!(tw.config().bound_for(Quantity::TideHeight), bound);
    assert_eq!(
        tw.config().bound_for(Quantity::Pressure),
        TidewiseConfig::default().pressure_bound
    );
}

#[test]
fn config_loaded_from_json_is_used() {
    let cfg: TidewiseConfig =
        serde_json::from_str(r#"{"provider_timeout":{"secs":2,"nanos":0}}"#).unwrap();
    let tw = Tidewise::builder()
        .with_connector(Arc::new(MockConnector::new()))
        .config(cfg)
        .build()
        .unwrap();
    assert_eq!(tw.config().provider_timeout, Duration::from_secs(2));
    assert_eq!(tw.config().engine, EngineConfig::default());
}

#[test]
fn preferences_for_unknown_connectors_are_ignored() {
    let registered: Arc<dyn TidewiseConnector> = Arc::new(MockConnector::new());
    let stranger: Arc<dyn TidewiseConnector> = Arc::new(MockConnector::named("ghost", "8461490"));
    let tw = Tidewise::builder()
        .with_connector(registered.clone())
        .prefer_for(Capability::TidePredictions, &[stranger, registered])
        .build();
    assert!(tw.is_ok());
}
