use super::*;
use crate::model::styles::VarkStyle;
use proptest::prelude::*;

fn resp(style: &str, weight: Option<f64>) -> Response {
    Response {
        question_id: format!("q_{style}"),
        domain_id: "d".to_string(),
        selected_style: style.to_string(),
        domain_weight: weight,
    }
}

#[test]
fn test_empty_is_neutral() {
    let scores = calculate_scores(&[]);
    assert_eq!(scores, PercentageScores::new(25, 25, 25, 25));
}

#[test]
fn test_single_response_takes_everything() {
    let scores = calculate_scores(&[resp("visual", None)]);
    assert_eq!(scores, PercentageScores::new(100, 0, 0, 0));
}

#[test]
fn test_weighted_three_to_one() {
    let scores = calculate_scores(&[resp("visual", Some(3.0)), resp("auditory", Some(1.0))]);
    assert_eq!(scores, PercentageScores::new(75, 25, 0, 0));
}

#[test]
fn test_thirds_drift_goes_to_first_highest() {
    let responses = [
        resp("visual", None),
        resp("auditory", None),
        resp("reading_writing", None),
    ];
    let out = score_responses(&responses, &ScoringProfile::default_v1());
    assert_eq!(out.scores.total(), 100);
    assert_eq!(out.scores, PercentageScores::new(34, 33, 33, 0));
    assert_eq!(out.drift, 1);
}

#[test]
fn test_negative_drift_taken_from_highest() {
    // 12.5/12.5/12.5/62.5 rounds up to 102
    let responses = [
        resp("visual", Some(1.0)),
        resp("auditory", Some(1.0)),
        resp("reading_writing", Some(1.0)),
        resp("kinesthetic", Some(5.0)),
    ];
    let out = score_responses(&responses, &ScoringProfile::default_v1());
    assert_eq!(out.drift, -2);
    assert_eq!(out.scores, PercentageScores::new(13, 13, 13, 61));
}

#[test]
fn test_largest_remainder_spreads_drift() {
    let responses = [
        resp("visual", Some(1.0)),
        resp("auditory", Some(1.0)),
        resp("reading_writing", Some(1.0)),
        resp("kinesthetic", Some(5.0)),
    ];
    let out = score_responses(&responses, &ScoringProfile::largest_remainder_v1());
    assert_eq!(out.drift, 2);
    assert_eq!(out.scores, PercentageScores::new(13, 13, 12, 62));
}

#[test]
fn test_unrecognized_tags_ignored() {
    let out = score_responses(
        &[resp("visaul", None), resp("kinesthetic", Some(2.0))],
        &ScoringProfile::default_v1(),
    );
    assert_eq!(out.scores, PercentageScores::new(0, 0, 0, 100));
    assert_eq!(out.counted_responses, 1);
    assert_eq!(out.ignored_responses, 1);
}

#[test]
fn test_only_unrecognized_tags_is_neutral() {
    let out = score_responses(
        &[resp("VISUAL", None), resp("tactile", None)],
        &ScoringProfile::default_v1(),
    );
    assert_eq!(out.scores, PercentageScores::neutral(25));
    assert_eq!(out.ignored_responses, 2);
    assert!(out.used_neutral_fallback());
}

#[test]
fn test_zero_weights() {
    assert_eq!(
        calculate_scores(&[resp("visual", Some(0.0)), resp("auditory", Some(0.0))]),
        PercentageScores::neutral(25)
    );
    assert_eq!(
        calculate_scores(&[resp("visual", Some(0.0)), resp("auditory", Some(1.0))]),
        PercentageScores::new(0, 100, 0, 0)
    );
}

#[test]
fn test_camel_case_response_decodes() {
    let json = r#"[{"questionId":"q1","domainId":"d1","selectedStyle":"auditory"},
                   {"question_id":"q2","domain_id":"d1","selected_style":"visual","domain_weight":2.0}]"#;
    let responses: Vec<Response> = serde_json::from_str(json).unwrap();
    assert_eq!(responses[0].weight(), 1.0);
    assert_eq!(responses[0].style(), Some(VarkStyle::Auditory));
    let scores = calculate_scores(&responses);
    assert_eq!(scores, PercentageScores::new(67, 33, 0, 0));
}

#[test]
fn test_huge_weights_keep_their_ratios() {
    let same_style = calculate_scores(&[
        resp("kinesthetic", Some(1.0e308)),
        resp("kinesthetic", Some(1.0e308)),
    ]);
    assert_eq!(same_style, PercentageScores::new(0, 0, 0, 100));

    let split = score_responses(
        &[resp("visual", Some(1.0e308)), resp("auditory", Some(1.0e308))],
        &ScoringProfile::default_v1(),
    );
    assert_eq!(split.scores, PercentageScores::new(50, 50, 0, 0));
    assert!(!split.used_neutral_fallback());

    let lr = score_responses(
        &[resp("visual", Some(1.5e308)), resp("reading_writing", Some(0.5e308))],
        &ScoringProfile::largest_remainder_v1(),
    );
    assert_eq!(lr.scores, PercentageScores::new(75, 0, 25, 0));
}

#[test]
fn test_infinite_weight_is_neutral() {
    let out = score_responses(
        &[resp("visual", Some(f64::INFINITY)), resp("auditory", Some(1.0))],
        &ScoringProfile::default_v1(),
    );
    assert_eq!(out.scores, PercentageScores::neutral(25));
    assert!(out.used_neutral_fallback());
}

#[test]
fn test_negative_total_is_neutral() {
    let out = score_responses(
        &[resp("visual", Some(1.0)), resp("auditory", Some(-2.0))],
        &ScoringProfile::default_v1(),
    );
    assert_eq!(out.scores, PercentageScores::neutral(25));
    assert!(out.used_neutral_fallback());
}

#[test]
fn test_mixed_sign_weights_are_clamped() {
    // raw shares are 150 / -50 / 0 / 0
    let out = score_responses(
        &[resp("visual", Some(3.0)), resp("auditory", Some(-1.0))],
        &ScoringProfile::default_v1(),
    );
    assert_eq!(out.drift, 0);
    assert_eq!(out.scores, PercentageScores::new(100, 0, 0, 0));
    assert!(!out.used_neutral_fallback());
}

#[test]
fn test_nan_weight_is_neutral() {
    let out = score_responses(
        &[resp("visual", Some(f64::NAN)), resp("auditory", Some(1.0))],
        &ScoringProfile::default_v1(),
    );
    assert_eq!(out.scores, PercentageScores::neutral(25));
    assert!(out.used_neutral_fallback());
    assert_eq!(out.counted_responses, 2);
}

#[test]
fn test_constructed_responses_score_like_decoded_ones() {
    let built = [
        Response::new("q1", "d1", VarkStyle::Visual, 2.0),
        Response::new("q2", "d1", VarkStyle::Auditory, 1.0),
    ];
    assert_eq!(built[0].selected_style, "visual");
    assert_eq!(built[1].weight(), 1.0);
    assert_eq!(calculate_scores(&built), PercentageScores::new(67, 33, 0, 0));
}

fn arb_response() -> impl Strategy<Value = Response> {
    (0usize..5, 0.0f64..10.0).prop_map(|(idx, w)| {
        let tag = ["visual", "auditory", "reading_writing", "kinesthetic", "unknown"][idx];
        resp(tag, Some(w))
    })
}

proptest! {
    #[test]
    fn prop_shares_sum_to_100(responses in prop::collection::vec(arb_response(), 0..40)) {
        for profile in [ScoringProfile::default_v1(), ScoringProfile::largest_remainder_v1()] {
            let out = score_responses(&responses, &profile);
            prop_assert_eq!(out.scores.total(), 100);
            for v in out.scores.as_array() {
                prop_assert!(v <= 100);
            }
            prop_assert_eq!(out.counted_responses + out.ignored_responses, responses.len());
        }
    }

    #[test]
    fn prop_scoring_is_deterministic(responses in prop::collection::vec(arb_response(), 0..20)) {
        prop_assert_eq!(calculate_scores(&responses), calculate_scores(&responses));
    }
}
