pub mod response;
pub mod scores;
pub mod styles;
pub mod thresholds;
