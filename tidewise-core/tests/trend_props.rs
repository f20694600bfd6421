use chrono::{DateTime, TimeDelta, Utc};
use proptest::prelude::*;
use tidewise_core::{
    Derived, Sample, Series, Shortfall, TidewiseError, TrendLabel, classify_trend, latest_reading,
    reading_at,
};

fn t(sec: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(sec, 0).unwrap()
}

fn series_of(values: &[f64]) -> Series {
    let samples = values
        .iter()
        .enumerate()
        .map(|(i, v)| Sample::new(t(i as i64 * 360), *v))
        .collect();
    Series::new(samples).unwrap()
}

#[test]
fn empty_and_single_sample_are_not_errors() {
    assert_eq!(
        classify_trend(&Series::default()),
        Derived::Unavailable(Shortfall::EmptyInput)
    );
    assert_eq!(
        classify_trend(&series_of(&[1.0])),
        Derived::Unavailable(Shortfall::InsufficientData)
    );
    let r = latest_reading(&series_of(&[1.0])).available().unwrap();
    assert_eq!(r.current.value, 1.0);
    assert_eq!(r.trend.shortfall(), Some(Shortfall::InsufficientData));
}

#[test]
fn plateau_reads_as_falling() {
    assert_eq!(
        classify_trend(&series_of(&[2.0, 2.0])),
        Derived::Available(TrendLabel::Falling)
    );
}

#[test]
fn only_the_last_two_samples_matter() {
    let s = series_of(&[9.0, 1.0, 1.5]);
    assert_eq!(classify_trend(&s), Derived::Available(TrendLabel::Rising));
}

#[test]
fn reading_at_takes_last_sample_strictly_before_now() {
    let s = series_of(&[1.0, 2.0, 1.5, 1.0]);
    // samples at 0, 360, 720, 1080; now exactly on the third
    let r = reading_at(&s, t(720)).available().unwrap();
    assert_eq!(r.current, Sample::new(t(360), 2.0));
    assert_eq!(r.trend, Derived::Available(TrendLabel::Rising));

    let r = reading_at(&s, t(721)).available().unwrap();
    assert_eq!(r.current.value, 1.5);
    assert_eq!(r.trend, Derived::Available(TrendLabel::Falling));
}

#[test]
fn reading_at_before_all_samples_uses_the_first_two() {
    let s = series_of(&[1.0, 2.0, 0.5]);
    let r = reading_at(&s, t(-10)).available().unwrap();
    assert_eq!(r.current.value, 1.0);
    assert_eq!(r.trend, Derived::Available(TrendLabel::Rising));
}

#[test]
fn reading_at_after_all_samples_matches_latest() {
    let s = series_of(&[1.0, 2.0, 0.5]);
    let now = t(0) + TimeDelta::days(1);
    assert_eq!(reading_at(&s, now), latest_reading(&s));
}

proptest! {
    #[test]
    fn rising_iff_last_strictly_greater(values in proptest::collection::vec(-100i32..100, 2..50)) {
        let values: Vec<f64> = values.into_iter().map(|v| f64::from(v) / 10.0).collect();
        let s = series_of(&values);
        let n = values.len();
        let expected = if values[n - 1] > values[n - 2] {
            TrendLabel::Rising
        } else {
            TrendLabel::Falling
        };
        prop_assert_eq!(classify_trend(&s), Derived::Available(expected));
    }

    #[test]
    fn unordered_input_is_rejected_at_index_one(a in 1i64..1000, b in 1i64..1000) {
        prop_assume!(a != b);
        let (hi, lo) = (a.max(b), a.min(b));
        let res = Series::new(vec![Sample::new(t(hi), 1.0), Sample::new(t(lo), 2.0)]);
        prop_assert_eq!(res.unwrap_err(), TidewiseError::Unsorted { index: 1 });
    }
}
