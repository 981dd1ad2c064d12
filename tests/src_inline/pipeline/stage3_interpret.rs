use super::*;

#[test]
fn test_multimodal_pair() {
    let interp = interpret(&PercentageScores::new(40, 35, 15, 10));
    assert_eq!(interp.dominant.style, VarkStyle::Visual);
    assert_eq!(interp.dominant.percentage, 40);
    assert_eq!(
        interp.secondary.as_ref().map(|s| s.style),
        Some(VarkStyle::Auditory)
    );
    assert!(interp.is_multimodal);
    assert_eq!(
        interp.multimodal_styles,
        vec![VarkStyle::Visual, VarkStyle::Auditory]
    );
    assert_eq!(
        interp.summary,
        "You are a multimodal learner with strong preferences for Visual and Auditory learning."
    );
}

#[test]
fn test_unimodal() {
    let interp = interpret(&PercentageScores::new(70, 10, 10, 10));
    assert_eq!(interp.dominant.style, VarkStyle::Visual);
    assert!(interp.secondary.is_none());
    assert!(!interp.is_multimodal);
    assert!(interp.multimodal_styles.is_empty());
    assert!(interp.summary.starts_with("Your dominant learning style is Visual. "));
    assert!(interp.summary.ends_with(VarkStyle::Visual.description()));
}

#[test]
fn test_four_way_tie() {
    let interp = interpret(&PercentageScores::neutral(25));
    assert_eq!(interp.dominant.style, VarkStyle::Visual);
    assert_eq!(
        interp.secondary.as_ref().map(|s| s.style),
        Some(VarkStyle::Auditory)
    );
    assert!(interp.is_multimodal);
    assert_eq!(interp.multimodal_styles.len(), 4);
    assert!(interp.summary.contains("Visual and Auditory and Reading/Writing and Kinesthetic"));
}

#[test]
fn test_tie_break_follows_precedence() {
    let interp = interpret(&PercentageScores::new(10, 10, 40, 40));
    assert_eq!(interp.dominant.style, VarkStyle::ReadingWriting);
    let order: Vec<_> = interp.all_scores.iter().map(|s| s.style).collect();
    assert_eq!(
        order,
        vec![
            VarkStyle::ReadingWriting,
            VarkStyle::Kinesthetic,
            VarkStyle::Visual,
            VarkStyle::Auditory,
        ]
    );
}

#[test]
fn test_secondary_below_threshold_is_none() {
    let interp = interpret(&PercentageScores::new(5, 24, 1, 70));
    assert_eq!(interp.dominant.style, VarkStyle::Kinesthetic);
    assert!(interp.secondary.is_none());
    assert!(!interp.is_multimodal);
}

#[test]
fn test_secondary_exactly_threshold() {
    let interp = interpret(&PercentageScores::new(75, 25, 0, 0));
    assert_eq!(
        interp.secondary.as_ref().map(|s| s.percentage),
        Some(25)
    );
    assert!(interp.is_multimodal);
}

#[test]
fn test_interpretation_is_idempotent() {
    let scores = PercentageScores::new(31, 29, 22, 18);
    assert_eq!(interpret(&scores), interpret(&scores));
}

#[test]
fn test_dominant_agrees_with_score_vector() {
    for scores in [
        PercentageScores::new(40, 35, 15, 10),
        PercentageScores::new(10, 10, 40, 40),
        PercentageScores::new(0, 0, 0, 100),
        PercentageScores::neutral(25),
    ] {
        assert_eq!(interpret(&scores).dominant.style, scores.dominant());
    }
}

#[test]
fn test_all_scores_sorted_descending() {
    let interp = interpret(&PercentageScores::new(12, 48, 30, 10));
    let values: Vec<_> = interp.all_scores.iter().map(|s| s.percentage).collect();
    assert_eq!(values, vec![48, 30, 12, 10]);
}
