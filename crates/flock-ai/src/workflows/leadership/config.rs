use serde::{Deserialize, Serialize};

use super::analysis::DEFAULT_MIN_LEADERSHIP_SCORE;

/// Self-assessed leadership score a member needs before a church-wide run considers them.
pub const DEFAULT_PROFILE_PREFILTER_SCORE: f64 = 30.0;

/// Thresholds applied by the leadership service around the analyzer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LeadershipConfig {
    /// Profiles totalling less than this are dropped from the results.
    pub min_leadership_score: f64,
    /// Roster prefilter on the stored spiritual-profile leadership score.
    pub profile_prefilter_score: f64,
}

impl Default for LeadershipConfig {
    fn default() -> Self {
        Self {
            min_leadership_score: DEFAULT_MIN_LEADERSHIP_SCORE,
            profile_prefilter_score: DEFAULT_PROFILE_PREFILTER_SCORE,
        }
    }
}
