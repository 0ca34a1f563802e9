use std::sync::Arc;

use toss_core::{
    from_json_slice, make_series, to_canonical_json_bytes, toss, Coin, RngHandle, TossError,
    TossSeries, TossSummary,
};

#[test]
fn series_round_trip_json() {
    let coin = Arc::new(Coin::new(&["up", "down"], &[0.25, 0.75]).unwrap());
    let series = toss(&coin, 12, &mut RngHandle::from_seed(11)).unwrap();

    let bytes = to_canonical_json_bytes(&series).expect("serialize");
    let decoded: TossSeries = from_json_slice(&bytes).expect("deserialize");

    assert_eq!(decoded, series);
    assert_eq!(to_canonical_json_bytes(&decoded).unwrap(), bytes);
}

#[test]
fn canonical_json_sorts_keys() {
    let coin = Coin::default();
    let bytes = to_canonical_json_bytes(&coin).unwrap();
    let text = String::from_utf8(bytes).unwrap();
    assert_eq!(
        text,
        r#"{"probabilities":[0.5,0.5],"sides":["heads","tails"]}"#
    );
}

#[test]
fn decoding_recomputes_counts() {
    let json = br#"{
        "coin": {"sides": ["heads", "tails"], "probabilities": [0.5, 0.5]},
        "outcomes": ["heads", "heads", "tails"],
        "total": 99,
        "heads_count": 0,
        "tails_count": 0
    }"#;
    let series: TossSeries = from_json_slice(json).unwrap();
    assert_eq!(series.total(), 3);
    assert_eq!(series.heads_count(), 2);
    assert_eq!(series.tails_count(), 1);
}

#[test]
fn decoding_validates_the_coin() {
    let json = br#"{"sides": ["heads", "tails"], "probabilities": [0.33, 0.66]}"#;
    let err = from_json_slice::<Coin>(json).unwrap_err();
    assert!(matches!(err, TossError::Serde(_)));
    assert!(err.info().message.contains("add up to 1"));
}

#[test]
fn missing_coin_fields_fall_back_to_defaults() {
    let coin: Coin = from_json_slice(br#"{}"#).unwrap();
    assert_eq!(coin, Coin::default());
}

#[test]
fn summary_round_trip_json() {
    let series = make_series(
        Arc::new(Coin::default()),
        vec!["heads".into(), "tails".into(), "tails".into(), "tails".into()],
    );
    let summary = series.summarize().unwrap();
    assert_eq!(summary.proportions, [0.25, 0.75]);
    let bytes = to_canonical_json_bytes(&summary).unwrap();
    let decoded: TossSummary = from_json_slice(&bytes).unwrap();
    assert_eq!(decoded, summary);
}
