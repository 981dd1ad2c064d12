use super::*;
use crate::input::ResponseSubmission;
use crate::model::response::Response;
use crate::pipeline::score_submissions;

fn submission(id: &str, styles: &[(&str, f64)]) -> ResponseSubmission {
    ResponseSubmission {
        respondent_id: id.to_string(),
        responses: styles
            .iter()
            .enumerate()
            .map(|(i, (s, w))| Response {
                question_id: format!("q{i}"),
                domain_id: "d".to_string(),
                selected_style: s.to_string(),
                domain_weight: Some(*w),
            })
            .collect(),
    }
}

fn scored() -> Vec<ScoredRespondent> {
    let subs = vec![
        submission("s2", &[("auditory", 1.0), ("visual", 1.0)]),
        submission("s1", &[("visual", 3.0), ("auditory", 1.0)]),
        submission("s3", &[("kinesthetic", 1.0), ("bogus", 1.0)]),
    ];
    score_submissions(&subs, &ScoringProfile::default_v1())
}

#[test]
fn test_respondent_reports_written() {
    let dir = tempfile::tempdir().unwrap();
    let summary = write_reports(
        &scored(),
        &ScoringProfile::default_v1(),
        dir.path(),
        ReportMode::Respondent,
    )
    .unwrap();

    assert_eq!(summary.n_respondents, 3);
    assert_eq!(summary.n_responses_ignored, 1);
    assert_eq!(summary.multimodal_count, 2);

    let tsv = std::fs::read_to_string(dir.path().join("vark_scores.tsv")).unwrap();
    let lines: Vec<&str> = tsv.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("respondent_id\tvisual\tauditory"));
    assert_eq!(
        lines[1],
        "s1\t75\t25\t0\t0\tvisual\tauditory\ttrue\tvisual,auditory\t2\t0\t0"
    );
    assert_eq!(
        lines[2],
        "s2\t50\t50\t0\t0\tvisual\tauditory\ttrue\tvisual,auditory\t2\t0\t0"
    );
    assert_eq!(lines[3], "s3\t0\t0\t0\t100\tkinesthetic\t-\tfalse\t-\t1\t1\t0");

    assert!(dir.path().join("summary.json").exists());
    let report = std::fs::read_to_string(dir.path().join("report.txt")).unwrap();
    assert!(report.contains("Respondents: 3"));
    assert!(report.contains("Class leaning: Visual"));
    assert!(!report.contains("5. Respondent"));
}

#[test]
fn test_summary_json_shape() {
    let dir = tempfile::tempdir().unwrap();
    write_reports(
        &scored(),
        &ScoringProfile::default_v1(),
        dir.path(),
        ReportMode::Respondent,
    )
    .unwrap();
    let text = std::fs::read_to_string(dir.path().join("summary.json")).unwrap();
    let v: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(v["n_respondents"], 3);
    assert_eq!(v["drift_policy"], "dominant");
    assert_eq!(v["mode"], "respondent");
    let styles = v["styles"].as_array().unwrap();
    assert_eq!(styles.len(), 4);
    assert_eq!(styles[0]["style"], "visual");
    assert_eq!(styles[0]["dominant_count"], 2);
    assert_eq!(styles[3]["dominant_count"], 1);
}

#[test]
fn test_class_mode_rows_per_style() {
    let dir = tempfile::tempdir().unwrap();
    write_reports(
        &scored(),
        &ScoringProfile::default_v1(),
        dir.path(),
        ReportMode::Class,
    )
    .unwrap();
    let tsv = std::fs::read_to_string(dir.path().join("vark_scores.tsv")).unwrap();
    let lines: Vec<&str> = tsv.lines().collect();
    assert_eq!(lines.len(), 5);
    assert!(lines[1].starts_with("visual\tVisual\t3\t2\t0.666667\t41.666667\t2"));
    assert!(lines[4].starts_with("kinesthetic\tKinesthetic\t3\t1\t0.333333\t33.333333\t1"));

    let json = std::fs::read_to_string(dir.path().join("summary.json")).unwrap();
    let v: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(v["mode"], "class");
    assert_eq!(v["styles"][0]["dominant_count"], 2);
}

#[test]
fn test_single_respondent_report_includes_interpretation() {
    let dir = tempfile::tempdir().unwrap();
    let one = score_submissions(
        &[submission("solo", &[("reading_writing", 1.0)])],
        &ScoringProfile::default_v1(),
    );
    write_reports(&one, &ScoringProfile::default_v1(), dir.path(), ReportMode::Respondent)
        .unwrap();
    let report = std::fs::read_to_string(dir.path().join("report.txt")).unwrap();
    assert!(report.contains("Respondent: solo"));
    assert!(report.contains("Dominant: Reading/Writing (100%)"));
    assert!(report.contains("Secondary: none"));
}
