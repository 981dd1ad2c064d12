use crate::model::response::Response;
use crate::model::scores::{PercentageScores, RawScores};
use crate::model::styles::style_order;
use crate::model::thresholds::{DriftPolicy, ScoringProfile};

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBreakdown {
    pub scores: PercentageScores,
    pub raw: RawScores,
    pub counted_responses: usize,
    pub ignored_responses: usize,
    /// Points added to (or removed from) the rounded shares to reach 100.
    pub drift: i64,
    neutral_fallback: bool,
}

impl ScoreBreakdown {
    pub fn used_neutral_fallback(&self) -> bool {
        self.neutral_fallback
    }
}

pub fn calculate_scores(responses: &[Response]) -> PercentageScores {
    score_responses(responses, &ScoringProfile::default_v1()).scores
}

pub fn score_responses(responses: &[Response], profile: &ScoringProfile) -> ScoreBreakdown {
    let mut raw = RawScores::default();
    let mut counted = 0usize;
    let mut ignored = 0usize;

    for response in responses {
        match response.style() {
            Some(style) => {
                raw.add(style, response.weight());
                counted += 1;
            }
            None => {
                ignored += 1;
                tracing::warn!(
                    question_id = %response.question_id,
                    domain_id = %response.domain_id,
                    tag = %response.selected_style,
                    "ignoring response with unrecognized style tag"
                );
            }
        }
    }

    let mut basis = raw;
    let mut total = raw.total();
    if !total.is_finite() {
        // Huge weights overflowed; shares only depend on ratios, so sum them pre-divided.
        basis = accumulate_scaled(responses, counted.max(1) as f64);
        total = basis.total();
    }

    // `!(total > 0.0)` also routes NaN totals to the neutral profile.
    if !(total > 0.0) || !total.is_finite() {
        if total.is_finite() {
            tracing::debug!(
                counted,
                ignored,
                "no scoring weight accumulated; using neutral profile"
            );
        } else {
            tracing::warn!(
                counted,
                ignored,
                "scoring weights are not finite; using neutral profile"
            );
        }
        return ScoreBreakdown {
            scores: PercentageScores::neutral(profile.neutral_share),
            raw,
            counted_responses: counted,
            ignored_responses: ignored,
            drift: 0,
            neutral_fallback: true,
        };
    }

    let (shares, drift) = match profile.drift_policy {
        DriftPolicy::Dominant => round_with_dominant_drift(&basis, total),
        DriftPolicy::LargestRemainder => round_largest_remainder(&basis, total),
    };

    tracing::debug!(
        counted,
        ignored,
        drift,
        policy = profile.drift_policy.label(),
        "scored responses"
    );

    ScoreBreakdown {
        scores: PercentageScores::from_array(shares.map(clamp_share)),
        raw,
        counted_responses: counted,
        ignored_responses: ignored,
        drift,
        neutral_fallback: false,
    }
}

fn accumulate_scaled(responses: &[Response], divisor: f64) -> RawScores {
    let mut scaled = RawScores::default();
    for response in responses {
        if let Some(style) = response.style() {
            scaled.add(style, response.weight() / divisor);
        }
    }
    scaled
}

fn round_with_dominant_drift(raw: &RawScores, total: f64) -> ([i64; 4], i64) {
    let mut shares = [0i64; 4];
    for &style in style_order() {
        // f64::round rounds half away from zero, i.e. half-up for non-negative shares.
        shares[style.index()] = (raw.get(style) / total * 100.0).round() as i64;
    }

    let drift = 100 - shares.iter().sum::<i64>();
    if drift != 0 {
        let top = highest_index(&shares);
        shares[top] += drift;
    }
    (shares, drift)
}

fn round_largest_remainder(raw: &RawScores, total: f64) -> ([i64; 4], i64) {
    let mut shares = [0i64; 4];
    let mut remainders = [0f64; 4];
    for &style in style_order() {
        let exact = raw.get(style) / total * 100.0;
        let floor = exact.floor();
        shares[style.index()] = floor as i64;
        remainders[style.index()] = exact - floor;
    }

    let drift = 100 - shares.iter().sum::<i64>();
    let mut order: Vec<usize> = (0..4).collect();
    // stable sort keeps precedence order among equal remainders
    order.sort_by(|&a, &b| {
        remainders[b]
            .partial_cmp(&remainders[a])
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    if drift > 0 {
        for &idx in order.iter().cycle().take(drift as usize) {
            shares[idx] += 1;
        }
    } else if drift < 0 {
        // only reachable with negative weights; fall back to the dominant rule
        let top = highest_index(&shares);
        shares[top] += drift;
    }
    (shares, drift)
}

fn highest_index(shares: &[i64; 4]) -> usize {
    let mut best = 0usize;
    for (idx, &v) in shares.iter().enumerate() {
        if v > shares[best] {
            best = idx;
        }
    }
    best
}

fn clamp_share(v: i64) -> u32 {
    v.clamp(0, 100) as u32
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_score.rs"]
mod tests;
