mod config;
mod error;
mod logging;

use std::io::Write;
use std::path::PathBuf;

use chrono::Utc;
use clap::{Parser, Subcommand, ValueEnum};

use cornerstones_vark::input::{load_answer_submissions, load_response_submissions};
use cornerstones_vark::pipeline::stage1_collect::run_stage1;
use cornerstones_vark::pipeline::stage4_report::write_reports;
use cornerstones_vark::pipeline::{ScoredRespondent, score_submissions};
use cornerstones_vark::profile::{FileProfileStore, ProfileStore, Session};
use cornerstones_vark::questionnaire::{Questionnaire, load_questionnaire};
use cornerstones_vark::report::json::render_interpretation_json;
use cornerstones_vark::report::text::{render_interpretation_text, render_scores_line};
use cornerstones_vark::{PercentageScores, interpret};

use crate::config::{BatchArgs, RunConfig, log_filter};
use crate::error::CliError;

#[derive(Debug, Parser)]
#[command(name = "cornerstones-vark")]
#[command(version)]
#[command(about = "Score VARK learning-style assessments and write class reports")]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score submissions that already carry weighted responses
    Score(BatchArgs),
    /// Resolve questionnaire answers into responses, then score them
    Assess {
        #[command(flatten)]
        batch: BatchArgs,
        /// Custom questionnaire JSON (defaults to the built-in one)
        #[arg(long)]
        questionnaire: Option<PathBuf>,
    },
    /// Interpret a single stored profile
    Interpret(InterpretArgs),
    /// Print the built-in questionnaire as JSON
    Questionnaire {
        /// Write to a file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[derive(Debug, clap::Args)]
struct InterpretArgs {
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=100))]
    visual: u32,
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=100))]
    auditory: u32,
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=100))]
    reading_writing: u32,
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=100))]
    kinesthetic: u32,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() {
    let cli = Cli::parse();
    logging::init_tracing(&log_filter(cli.verbose));

    if let Err(err) = run(cli.command) {
        tracing::error!("{err}");
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<(), CliError> {
    match command {
        Command::Score(args) => run_batch(&RunConfig::from_args(&args, None), false),
        Command::Assess {
            batch,
            questionnaire,
        } => run_batch(&RunConfig::from_args(&batch, questionnaire), true),
        Command::Interpret(args) => run_interpret(&args),
        Command::Questionnaire { out } => run_questionnaire(out),
    }
}

fn run_batch(config: &RunConfig, from_answers: bool) -> Result<(), CliError> {
    let submissions = if from_answers {
        let questionnaire = match &config.questionnaire {
            Some(path) => load_questionnaire(path)?,
            None => Questionnaire::builtin(),
        };
        let answers = load_answer_submissions(&config.input)?;
        run_stage1(&questionnaire, &answers)?
    } else {
        load_response_submissions(&config.input)?
    };

    let scored = score_submissions(&submissions, &config.scoring);
    let summary = write_reports(&scored, &config.scoring, &config.out_dir, config.mode)?;
    if summary.n_responses_ignored > 0 {
        tracing::warn!(
            ignored = summary.n_responses_ignored,
            "some responses carried unrecognized style tags and were not scored"
        );
    }

    if let Some(dir) = &config.profiles_dir {
        // The batch tool writes on behalf of every respondent.
        let session = Session::service(env!("CARGO_PKG_NAME"));
        let store = FileProfileStore::new(dir);
        persist_profiles(&store, &session, &scored)?;
    }
    Ok(())
}

fn persist_profiles(
    store: &dyn ProfileStore,
    session: &Session,
    scored: &[ScoredRespondent],
) -> Result<(), CliError> {
    let completed_at = Utc::now();
    for r in scored {
        store.save_scores(session, &r.respondent_id, &r.breakdown.scores, completed_at)?;
    }
    tracing::info!(profiles = scored.len(), "persisted learning-style profiles");
    Ok(())
}

fn run_interpret(args: &InterpretArgs) -> Result<(), CliError> {
    let scores = PercentageScores::new(
        args.visual,
        args.auditory,
        args.reading_writing,
        args.kinesthetic,
    );
    if scores.total() != 100 {
        tracing::warn!(
            total = scores.total(),
            "scores do not sum to 100; interpreting as given"
        );
    }
    let interpretation = interpret(&scores);
    let rendered = match args.format {
        OutputFormat::Text => format!(
            "{}\n{}",
            render_scores_line(&scores),
            render_interpretation_text(&interpretation)
        ),
        OutputFormat::Json => render_interpretation_json(&scores, &interpretation)? + "\n",
    };
    std::io::stdout().write_all(rendered.as_bytes())?;
    Ok(())
}

fn run_questionnaire(out: Option<PathBuf>) -> Result<(), CliError> {
    let json = serde_json::to_string_pretty(&Questionnaire::builtin())? + "\n";
    match out {
        Some(path) => std::fs::write(path, json)?,
        None => std::io::stdout().write_all(json.as_bytes())?,
    }
    Ok(())
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
