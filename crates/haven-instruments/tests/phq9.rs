use haven_instruments::error::InstrumentError;
use haven_instruments::instruments::phq9::{ITEMS, Phq9};
use haven_instruments::scoring::{ScoreEntry, ScoreRange};
use haven_instruments::severity::MAX_TOTAL;
use haven_instruments::{
    Instrument, ScreeningResponse, SeverityBand, classify_screening, get_instrument,
    score_instrument,
};

/// Build a response whose items sum to `total`, filling from the front.
fn responses_summing_to(total: u8) -> Vec<i32> {
    let mut remaining = total as i32;
    (0..9)
        .map(|_| {
            let value = remaining.min(3);
            remaining -= value;
            value
        })
        .collect()
}

fn keyed(values: [f64; 9]) -> Vec<ScoreEntry> {
    ITEMS
        .iter()
        .zip(values)
        .map(|((id, _), value)| ScoreEntry {
            subscale_id: id.to_string(),
            value,
        })
        .collect()
}

#[test]
fn worked_example_is_moderate() {
    let result = classify_screening(&[0, 1, 2, 3, 1, 0, 2, 1, 3]).unwrap();
    assert_eq!(result.total_score, 13);
    assert_eq!(result.severity, SeverityBand::Moderate);
    assert_eq!(
        result.recommendations,
        SeverityBand::Moderate
            .recommendations()
            .iter()
            .map(|r| r.to_string())
            .collect::<Vec<_>>()
    );
}

#[test]
fn band_boundaries() {
    let cases = [
        (0, SeverityBand::None),
        (4, SeverityBand::None),
        (5, SeverityBand::Mild),
        (9, SeverityBand::Mild),
        (10, SeverityBand::Moderate),
        (14, SeverityBand::Moderate),
        (15, SeverityBand::ModeratelySevere),
        (19, SeverityBand::ModeratelySevere),
        (20, SeverityBand::Severe),
        (27, SeverityBand::Severe),
    ];
    for (total, band) in cases {
        let result = classify_screening(&responses_summing_to(total)).unwrap();
        assert_eq!(result.total_score, total);
        assert_eq!(result.severity, band, "total {total}");
    }
}

#[test]
fn every_total_maps_to_exactly_one_band() {
    for total in 0..=MAX_TOTAL {
        let matching: Vec<_> = SeverityBand::ALL
            .iter()
            .filter(|band| band.score_range().contains(&total))
            .collect();
        assert_eq!(matching.len(), 1, "total {total}");
        assert_eq!(*matching[0], SeverityBand::from_total(total));
    }
}

#[test]
fn classification_is_deterministic() {
    let responses = [2, 2, 1, 3, 0, 1, 2, 2, 0];
    let first = classify_screening(&responses).unwrap();
    let second = classify_screening(&responses).unwrap();
    assert_eq!(first, second);
}

#[test]
fn severe_bands_share_guidance() {
    assert_eq!(
        SeverityBand::ModeratelySevere.recommendations(),
        SeverityBand::Severe.recommendations()
    );
    assert_eq!(SeverityBand::ModeratelySevere.label(), "Moderately severe");
    assert_ne!(
        SeverityBand::None.recommendations(),
        SeverityBand::Mild.recommendations()
    );
}

#[test]
fn rejects_wrong_length() {
    let err = classify_screening(&[1, 1, 1]).unwrap_err();
    assert!(matches!(
        err,
        InstrumentError::InvalidResponseCount {
            expected: 9,
            actual: 3
        }
    ));

    let err = classify_screening(&[0; 10]).unwrap_err();
    assert!(matches!(
        err,
        InstrumentError::InvalidResponseCount { actual: 10, .. }
    ));
}

#[test]
fn rejects_out_of_range_without_clamping() {
    let err = classify_screening(&[0, 0, 0, 4, 0, 0, 0, 0, 0]).unwrap_err();
    match err {
        InstrumentError::Validation(v) => {
            assert_eq!(v.subscale_id, "energy");
            assert_eq!(v.value, 4.0);
        }
        other => panic!("expected validation error, got {other:?}"),
    }

    assert!(classify_screening(&[-1, 0, 0, 0, 0, 0, 0, 0, 0]).is_err());
}

#[test]
fn self_harm_item_requests_followup() {
    let quiet = classify_screening(&[1, 1, 0, 0, 0, 0, 0, 0, 0]).unwrap();
    assert!(!quiet.safety_followup);
    assert_eq!(quiet.severity, SeverityBand::None);

    let flagged = classify_screening(&[0, 0, 0, 0, 0, 0, 0, 0, 1]).unwrap();
    assert!(flagged.safety_followup);
    assert_eq!(flagged.severity, SeverityBand::None);
}

#[test]
fn response_exposes_items_in_order() {
    let response = ScreeningResponse::new(&[3, 2, 1, 0, 0, 1, 2, 3, 0]).unwrap();
    assert_eq!(response.items(), &[3, 2, 1, 0, 0, 1, 2, 3, 0]);
    assert_eq!(response.total(), 12);
}

#[test]
fn registered_in_catalog() {
    let phq9 = get_instrument("phq9").expect("phq9 registered");
    assert_eq!(phq9.name(), "PHQ-9");
    let items: Vec<_> = phq9.domains()[0]
        .subscales
        .iter()
        .map(|s| s.id.as_str())
        .collect();
    assert_eq!(items.len(), 9);
    assert_eq!(items[8], "self_harm");
}

#[test]
fn validate_scores_flags_fractional_and_out_of_range() {
    let entries = vec![
        ScoreEntry {
            subscale_id: "mood".to_string(),
            value: 1.5,
        },
        ScoreEntry {
            subscale_id: "sleep".to_string(),
            value: 3.0,
        },
        ScoreEntry {
            subscale_id: "appetite".to_string(),
            value: 5.0,
        },
    ];
    let errors = Phq9.validate_scores(&entries);
    let ids: Vec<_> = errors.iter().map(|e| e.subscale_id.as_str()).collect();
    assert_eq!(ids, ["mood", "appetite"]);
}

#[test]
fn keyed_scoring_matches_positional() {
    let result = Phq9
        .score(&keyed([0.0, 1.0, 2.0, 3.0, 1.0, 0.0, 2.0, 1.0, 3.0]))
        .unwrap();
    assert_eq!(result.total_score, 13);
    assert_eq!(result.severity, SeverityBand::Moderate);
    assert!(result.safety_followup);
}

#[test]
fn keyed_scoring_rejects_bad_submissions() {
    let mut missing = keyed([1.0; 9]);
    missing.pop();
    assert!(matches!(
        Phq9.score(&missing),
        Err(InstrumentError::MissingItem { subscale_id, .. }) if subscale_id == "self_harm"
    ));

    let mut unknown = keyed([1.0; 9]);
    unknown[0].subscale_id = "appetite_change".to_string();
    assert!(matches!(
        Phq9.score(&unknown),
        Err(InstrumentError::UnknownSubscale { .. })
    ));

    let mut duplicate = keyed([1.0; 9]);
    duplicate.push(duplicate[0].clone());
    assert!(matches!(
        Phq9.score(&duplicate),
        Err(InstrumentError::DuplicateItem { .. })
    ));

    assert!(matches!(
        Phq9.score(&keyed([1.0, 1.0, 1.0, 1.0, 2.5, 1.0, 1.0, 1.0, 1.0])),
        Err(InstrumentError::Validation(_))
    ));
}

#[test]
fn score_instrument_dispatches_by_id() {
    let result = score_instrument("phq9", &keyed([3.0; 9])).unwrap();
    assert_eq!(result.total_score, 27);
    assert_eq!(result.severity, SeverityBand::Severe);

    assert!(matches!(
        score_instrument("gad7", &[]),
        Err(InstrumentError::UnknownInstrument(id)) if id == "gad7"
    ));
}

#[test]
fn keyed_scoring_rejects_near_integer_values() {
    let mut values = [3.0; 9];
    values[4] = 3.0 - 5e-10;
    let err = Phq9.score(&keyed(values)).unwrap_err();
    match err {
        InstrumentError::Validation(v) => assert_eq!(v.subscale_id, "appetite"),
        other => panic!("expected validation error, got {other:?}"),
    }

    let mut values = [0.0; 9];
    values[0] = 1e-12;
    assert!(matches!(
        Phq9.score(&keyed(values)),
        Err(InstrumentError::Validation(_))
    ));
}

#[test]
fn item_range_requires_exact_steps() {
    let range = ScoreRange {
        min: 0.0,
        max: 3.0,
        step: Some(1.0),
    };
    assert!(range.contains(0.0));
    assert!(range.contains(3.0));
    assert!(!range.contains(2.9999999995));
    assert!(!range.contains(1.5));
    assert!(!range.contains(f64::NAN));
    assert!(!range.contains(3.0000000001));

    let unstepped = ScoreRange { step: None, ..range };
    assert!(unstepped.contains(1.5));
}

#[test]
fn result_serializes_band_in_snake_case() {
    let result = classify_screening(&[3, 3, 2, 2, 2, 2, 1, 1, 0]).unwrap();
    assert_eq!(result.severity, SeverityBand::ModeratelySevere);
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["severity"], "moderately_severe");
    assert_eq!(json["total_score"], 16);
}
