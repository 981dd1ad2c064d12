use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use clap::ValueEnum;

use crate::model::styles::VarkStyle;
use crate::model::thresholds::ScoringProfile;
use crate::pipeline::ScoredRespondent;
use crate::report::json::render_summary_json;
use crate::report::text::render_report_text;
use crate::report::{ReportContext, SummaryData, build_summary, format_f64_6};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportMode {
    /// One row per respondent.
    Respondent,
    /// One row per style, aggregated over the batch.
    Class,
}

impl ReportMode {
    pub fn label(self) -> &'static str {
        match self {
            ReportMode::Respondent => "respondent",
            ReportMode::Class => "class",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("report IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("report encoding error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn write_reports(
    respondents: &[ScoredRespondent],
    profile: &ScoringProfile,
    out_dir: &Path,
    mode: ReportMode,
) -> Result<SummaryData, ReportError> {
    fs::create_dir_all(out_dir)?;

    let summary = build_summary(respondents, profile, mode.label());

    let scores_path = out_dir.join("vark_scores.tsv");
    match mode {
        ReportMode::Respondent => write_respondent_tsv(respondents, &scores_path)?,
        ReportMode::Class => write_class_tsv(&summary, &scores_path)?,
    }

    let json = render_summary_json(&summary)?;
    write_text(&out_dir.join("summary.json"), &json)?;

    let single = match respondents {
        [only] => Some((only.respondent_id.as_str(), &only.interpretation)),
        _ => None,
    };
    let ctx = ReportContext {
        summary: &summary,
        single,
    };
    write_text(&out_dir.join("report.txt"), &render_report_text(&ctx))?;

    tracing::info!(
        out_dir = %out_dir.display(),
        mode = mode.label(),
        respondents = respondents.len(),
        "wrote reports"
    );
    Ok(summary)
}

fn write_respondent_tsv(respondents: &[ScoredRespondent], path: &Path) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    let header = [
        "respondent_id",
        "visual",
        "auditory",
        "reading_writing",
        "kinesthetic",
        "dominant",
        "secondary",
        "is_multimodal",
        "multimodal_styles",
        "counted_responses",
        "ignored_responses",
        "drift",
    ]
    .join("\t");
    writeln!(w, "{}", header)?;

    let mut row_order = (0..respondents.len()).collect::<Vec<_>>();
    row_order.sort_by(|&a, &b| {
        match respondents[a]
            .respondent_id
            .cmp(&respondents[b].respondent_id)
        {
            std::cmp::Ordering::Equal => a.cmp(&b),
            other => other,
        }
    });

    for idx in row_order {
        let r = &respondents[idx];
        let s = &r.breakdown.scores;
        let interp = &r.interpretation;
        let row = [
            sanitize_field(&r.respondent_id),
            s.visual.to_string(),
            s.auditory.to_string(),
            s.reading_writing.to_string(),
            s.kinesthetic.to_string(),
            interp.dominant.style.tag().to_string(),
            interp
                .secondary
                .as_ref()
                .map(|sec| sec.style.tag().to_string())
                .unwrap_or_else(|| "-".to_string()),
            interp.is_multimodal.to_string(),
            format_styles(&interp.multimodal_styles),
            r.breakdown.counted_responses.to_string(),
            r.breakdown.ignored_responses.to_string(),
            r.breakdown.drift.to_string(),
        ]
        .join("\t");
        writeln!(w, "{}", row)?;
    }
    w.flush()
}

fn write_class_tsv(summary: &SummaryData, path: &Path) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    writeln!(
        w,
        "style\tname\tn_respondents\tdominant_count\tdominant_fraction\tmean_percentage\tsignificant_count"
    )?;
    for stat in &summary.styles {
        writeln!(
            w,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}",
            stat.style.tag(),
            stat.name,
            summary.n_respondents,
            stat.dominant_count,
            format_f64_6(stat.dominant_fraction),
            format_f64_6(stat.mean_percentage),
            stat.significant_count
        )?;
    }
    w.flush()
}

fn format_styles(styles: &[VarkStyle]) -> String {
    if styles.is_empty() {
        return "-".to_string();
    }
    styles.iter().map(|s| s.tag()).collect::<Vec<_>>().join(",")
}

fn sanitize_field(s: &str) -> String {
    s.replace(['\t', '\n', '\r'], " ")
}

fn write_text(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(contents.as_bytes())?;
    w.flush()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_report.rs"]
mod tests;
