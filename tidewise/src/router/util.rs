use tidewise_core::{Capability, TidewiseError};

/// Reduce the failures of one station-feed chain to the error a caller sees.
///
/// A chain that never found a connector offering `capability` is
/// `Unsupported`. When every feed that was asked stalled past the provider
/// timeout, the result is `AllProvidersTimedOut`. When every feed answered
/// but none had plausible data for the station and window, the chain as a
/// whole is `NotFound(not_found_what)`; without a label those failures stay
/// itemized. Any other mix keeps the per-feed errors in `AllProvidersFailed`.
pub fn collapse_errors(
    capability: Capability,
    attempted_any: bool,
    errors: Vec<TidewiseError>,
    not_found_what: Option<String>,
) -> TidewiseError {
    if !attempted_any {
        return TidewiseError::unsupported(capability.as_str());
    }
    let every = |pred: fn(&TidewiseError) -> bool| !errors.is_empty() && errors.iter().all(pred);
    let all_stalled = every(|e| matches!(e, TidewiseError::ProviderTimeout { .. }));
    let all_missing = every(|e| matches!(e, TidewiseError::NotFound { .. }));

    if all_stalled {
        return TidewiseError::AllProvidersTimedOut {
            capability: capability.as_str().to_string(),
        };
    }
    match not_found_what {
        Some(what) if all_missing => TidewiseError::not_found(what),
        _ => TidewiseError::AllProvidersFailed(errors),
    }
}
