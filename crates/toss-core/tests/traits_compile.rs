use std::sync::Arc;

use toss_core::{
    heads_count, make_series, tails_count, Coin, RngHandle, Tally, TossError, TwoSided,
};

/// Two-sided entity whose labels are fixed at compile time.
struct Dreidel {
    sides: [String; 2],
}

impl Dreidel {
    fn new() -> Self {
        Self {
            sides: ["nun".to_string(), "gimel".to_string()],
        }
    }
}

impl TwoSided for Dreidel {
    fn sides(&self) -> &[String; 2] {
        &self.sides
    }

    fn probabilities(&self) -> [f64; 2] {
        [0.0, 1.0]
    }
}

fn sample_any(entity: &dyn TwoSided, count: i64) -> Result<Vec<String>, TossError> {
    entity.sample(count, &mut RngHandle::from_seed(8))
}

#[test]
fn two_sided_is_object_safe() {
    let entities: Vec<Box<dyn TwoSided>> = vec![Box::new(Coin::default()), Box::new(Dreidel::new())];
    for entity in &entities {
        let outcomes = sample_any(entity.as_ref(), 10).unwrap();
        assert_eq!(outcomes.len(), 10);
        assert!(outcomes.iter().all(|outcome| entity.sides().contains(outcome)));
    }
    let dreidel = sample_any(&Dreidel::new(), 4).unwrap();
    assert!(dreidel.iter().all(|outcome| outcome == "gimel"));
}

#[test]
fn default_sampler_validates_count() {
    let err = sample_any(&Dreidel::new(), -2).unwrap_err();
    assert!(matches!(err, TossError::InvalidCount(_)));
}

#[test]
fn tally_dispatches_on_capability() {
    let series = make_series(
        Arc::new(Coin::default()),
        vec!["heads".into(), "tails".into(), "heads".into()],
    );
    assert_eq!(heads_count(&series).unwrap(), 2);
    assert_eq!(tails_count(&series).unwrap(), 1);

    let coin = Coin::default();
    let raw: Vec<String> = vec!["heads".into()];
    let values: [&dyn Tally; 3] = [&series, &coin, &raw];
    let supported: Vec<bool> = values
        .iter()
        .map(|value| value.heads_count().is_ok())
        .collect();
    assert_eq!(supported, vec![true, false, false]);

    let err = tails_count(raw.as_slice()).unwrap_err();
    assert!(matches!(err, TossError::UnsupportedType(_)));
    assert_eq!(
        err.info().context.get("type").map(String::as_str),
        Some("raw outcomes")
    );
}
