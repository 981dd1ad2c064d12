use crate::model::scores::PercentageScores;
use crate::pipeline::stage3_interpret::Interpretation;
use crate::report::{ReportContext, StyleStat, format_f64_6};

pub fn render_report_text(ctx: &ReportContext<'_>) -> String {
    let s = ctx.summary;
    let mut out = String::new();

    out.push_str("VARK Learning-Style Report\n");
    out.push_str("==========================\n\n");

    out.push_str("1. Cohort\n");
    out.push_str(&format!("Respondents: {}\n", s.n_respondents));
    out.push_str(&format!(
        "Responses counted: {} (ignored: {})\n",
        s.n_responses_counted, s.n_responses_ignored
    ));
    out.push_str(&format!("Drift policy: {}\n", s.drift_policy));
    if s.neutral_fallback_count > 0 {
        out.push_str(&format!(
            "Neutral fallback profiles: {}\n",
            s.neutral_fallback_count
        ));
    }
    out.push('\n');

    out.push_str("2. Dominant styles\n");
    for stat in &s.styles {
        out.push_str(&format!(
            "{}: {} ({})\n",
            stat.name,
            stat.dominant_count,
            format_f64_6(stat.dominant_fraction)
        ));
    }
    out.push_str(&format!("Class leaning: {}\n\n", class_leaning(&s.styles)));

    out.push_str("3. Mean profile\n");
    for stat in &s.styles {
        out.push_str(&format!(
            "{}: {}\n",
            stat.name,
            format_f64_6(stat.mean_percentage)
        ));
    }
    out.push('\n');

    out.push_str("4. Multimodality\n");
    out.push_str(&format!(
        "Multimodal respondents: {} ({})\n",
        s.multimodal_count,
        format_f64_6(s.multimodal_fraction)
    ));
    out.push_str(&format!(
        "{}\n",
        multimodal_statement(s.multimodal_fraction)
    ));

    if let Some((id, interp)) = ctx.single {
        out.push('\n');
        out.push_str("5. Respondent\n");
        out.push_str(&format!("Respondent: {id}\n"));
        out.push_str(&render_interpretation_text(interp));
    }

    out
}

pub fn render_interpretation_text(interp: &Interpretation) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Dominant: {} ({}%)\n",
        interp.dominant.name, interp.dominant.percentage
    ));
    match &interp.secondary {
        Some(sec) => out.push_str(&format!("Secondary: {} ({}%)\n", sec.name, sec.percentage)),
        None => out.push_str("Secondary: none\n"),
    }
    out.push_str(&format!(
        "Multimodal: {}\n",
        if interp.is_multimodal { "yes" } else { "no" }
    ));
    let all = interp
        .all_scores
        .iter()
        .map(|s| format!("{} {}%", s.name, s.percentage))
        .collect::<Vec<_>>()
        .join(", ");
    out.push_str(&format!("Scores: {all}\n"));
    out.push_str(&format!("Summary: {}\n", interp.summary));
    out
}

pub fn render_scores_line(scores: &PercentageScores) -> String {
    format!(
        "visual={} auditory={} reading_writing={} kinesthetic={}",
        scores.visual, scores.auditory, scores.reading_writing, scores.kinesthetic
    )
}

fn class_leaning(styles: &[StyleStat]) -> String {
    let mut sorted = styles.to_vec();
    // stable: precedence order among equal counts
    sorted.sort_by(|a, b| b.dominant_count.cmp(&a.dominant_count));
    match sorted.first() {
        Some(top) if top.dominant_count > 0 => top.name.to_string(),
        _ => "none".to_string(),
    }
}

fn multimodal_statement(frac: f64) -> &'static str {
    if frac >= 0.5 {
        "Most learners show several strong preferences; mixed-format materials will serve the class well."
    } else if frac > 0.0 {
        "Some learners are multimodal; offer alternative formats alongside the dominant one."
    } else {
        "Learners show single dominant preferences."
    }
}
