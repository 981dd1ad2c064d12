//! VARK learning-style scoring and interpretation for the 4 Cornerstones LMS.
//!
//! [`calculate_scores`] folds weighted questionnaire responses into a
//! percentage profile that always sums to 100, and [`interpret`] ranks that
//! profile into dominant/secondary styles and a multimodality verdict. Both
//! are pure and never fail.

pub mod input;
pub mod model;
pub mod personalize;
pub mod pipeline;
pub mod profile;
pub mod questionnaire;
pub mod report;

pub use model::response::Response;
pub use model::scores::PercentageScores;
pub use model::styles::VarkStyle;
pub use model::thresholds::{DriftPolicy, ScoringProfile};
pub use pipeline::stage2_score::{ScoreBreakdown, calculate_scores, score_responses};
pub use pipeline::stage3_interpret::{Interpretation, StyleSummary, interpret, interpret_with};
