use serde::{Deserialize, Serialize};

use crate::model::styles::VarkStyle;

pub const DEFAULT_DOMAIN_WEIGHT: f64 = 1.0;

/// One answered question. `selected_style` keeps the raw tag so that
/// unrecognized values reach the scorer instead of failing decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    #[serde(alias = "questionId", default)]
    pub question_id: String,
    #[serde(alias = "domainId", default)]
    pub domain_id: String,
    #[serde(alias = "selectedStyle")]
    pub selected_style: String,
    #[serde(alias = "domainWeight", default, skip_serializing_if = "Option::is_none")]
    pub domain_weight: Option<f64>,
}

impl Response {
    pub fn new(
        question_id: impl Into<String>,
        domain_id: impl Into<String>,
        style: VarkStyle,
        domain_weight: f64,
    ) -> Self {
        Self {
            question_id: question_id.into(),
            domain_id: domain_id.into(),
            selected_style: style.tag().to_string(),
            domain_weight: Some(domain_weight),
        }
    }

    pub fn style(&self) -> Option<VarkStyle> {
        VarkStyle::from_tag(&self.selected_style)
    }

    pub fn weight(&self) -> f64 {
        self.domain_weight.unwrap_or(DEFAULT_DOMAIN_WEIGHT)
    }
}
