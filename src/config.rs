use std::path::PathBuf;

use clap::Args;

use cornerstones_vark::DriftPolicy;
use cornerstones_vark::ScoringProfile;
use cornerstones_vark::pipeline::stage4_report::ReportMode;

pub const LOG_ENV: &str = "VARK_LOG";

#[derive(Debug, Clone, Args)]
pub struct BatchArgs {
    /// Submissions file (.json or .json.gz)
    #[arg(long)]
    pub input: PathBuf,
    /// Output directory for vark_scores.tsv, summary.json and report.txt
    #[arg(long)]
    pub out: PathBuf,
    /// Row granularity of vark_scores.tsv
    #[arg(long, value_enum, default_value_t = ReportMode::Respondent)]
    pub mode: ReportMode,
    /// How rounding drift is folded back so shares sum to 100
    #[arg(long, value_enum, default_value_t = DriftPolicy::Dominant)]
    pub drift: DriftPolicy,
    /// Persist each profile as <dir>/<respondent_id>.json
    #[arg(long)]
    pub profiles: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct RunConfig {
    pub input: PathBuf,
    pub out_dir: PathBuf,
    pub mode: ReportMode,
    pub scoring: ScoringProfile,
    pub profiles_dir: Option<PathBuf>,
    pub questionnaire: Option<PathBuf>,
}

impl RunConfig {
    pub fn from_args(args: &BatchArgs, questionnaire: Option<PathBuf>) -> Self {
        Self {
            input: args.input.clone(),
            out_dir: args.out.clone(),
            mode: args.mode,
            scoring: ScoringProfile::with_drift_policy(args.drift),
            profiles_dir: args.profiles.clone(),
            questionnaire,
        }
    }
}

/// `-v` flags win over the environment; with neither, only warnings are shown.
pub fn log_filter(verbose: u8) -> String {
    match verbose {
        0 => std::env::var(LOG_ENV)
            .or_else(|_| std::env::var("RUST_LOG"))
            .unwrap_or_else(|_| "warn".to_string()),
        1 => "info".to_string(),
        2 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}
