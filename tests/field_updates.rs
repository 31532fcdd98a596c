use heart_predict::{
    Field, PatientParameters, PredictError, PredictionCycle, PredictionResult, RiskLevel,
};
use proptest::prelude::*;

fn any_field() -> impl Strategy<Value = Field> {
    (0..Field::ALL.len()).prop_map(|idx| Field::ALL[idx])
}

/// A cycle that already holds a result, so the test can see it survive edits.
fn resolved_cycle() -> PredictionCycle {
    let mut cycle = PredictionCycle::new();
    let submission = cycle.begin_submit();
    cycle.resolve(
        submission.id,
        Ok(PredictionResult {
            risk_level: RiskLevel::Low,
            probability: 0.23,
            prediction: Some(0),
        }),
    );
    cycle
}

proptest! {
    #[test]
    fn update_touches_only_the_named_field(field in any_field(), raw in ".*") {
        let mut cycle = resolved_cycle();
        let before = cycle.parameters().clone();
        let outcome = cycle.outcome().clone();

        cycle.update_field(field, raw.clone());

        prop_assert_eq!(cycle.parameters().get(field), raw.as_str());
        for other in Field::ALL.into_iter().filter(|f| *f != field) {
            prop_assert_eq!(cycle.parameters().get(other), before.get(other));
        }
        prop_assert_eq!(cycle.outcome(), &outcome);
        prop_assert!(!cycle.is_pending());
    }

    #[test]
    fn update_while_in_flight_keeps_pending(field in any_field(), raw in ".*") {
        let mut cycle = resolved_cycle();
        let submission = cycle.begin_submit();

        cycle.update_field(field, raw.clone());

        prop_assert!(cycle.is_pending());
        prop_assert!(cycle.result().is_none());
        prop_assert_eq!(cycle.parameters().get(field), raw.as_str());
        let failure = Err(PredictError::Malformed("empty body".into()));
        prop_assert!(cycle.resolve(submission.id, failure));
        prop_assert!(!cycle.is_pending());
    }

    #[test]
    fn update_is_idempotent(field in any_field(), raw in "[0-9.]{0,6}") {
        let mut once = PatientParameters::default();
        once.set(field, raw.clone());
        let mut twice = once.clone();
        twice.set(field, raw);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn numeric_text_coerces_to_its_value(field in any_field(), value in 0.0f64..500.0) {
        let mut params = PatientParameters::default();
        params.set(field, value.to_string());
        prop_assert_eq!(params.to_request().value(field), Some(value));
    }
}

#[test]
fn named_update_matches_typed_update() {
    let mut by_name = PredictionCycle::new();
    by_name.update_named("thalach", "150").unwrap();
    let mut typed = PredictionCycle::new();
    typed.update_field(Field::Thalach, "150");
    assert_eq!(by_name.parameters(), typed.parameters());
    assert!(by_name.update_named("bmi", "22").is_err());
}

#[test]
fn submit_marks_pending_before_resolution() {
    let mut cycle = resolved_cycle();
    assert!(cycle.result().is_some());

    let submission = cycle.begin_submit();

    assert!(cycle.is_pending());
    assert!(cycle.result().is_none());
    assert!(!cycle.outcome().is_failed());
    assert_eq!(submission.request.missing().len(), 5);
}
