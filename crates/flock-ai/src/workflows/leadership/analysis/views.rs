use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::super::development::DevelopmentMilestone;
use super::super::domain::{
    LeadershipPotential, LeadershipReadiness, MemberId, MentoringCapability,
};
use super::super::opportunities::LeadershipOpportunity;
use super::super::scoring::FactorScore;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadershipProfile {
    pub member_id: MemberId,
    pub member_name: String,
    pub current_role: String,
    pub leadership_potential: LeadershipPotential,
    pub leadership_score: f64,
    pub leadership_readiness: LeadershipReadiness,
    pub strong_suits: Vec<String>,
    pub development_areas: Vec<String>,
    pub recommended_positions: Vec<LeadershipOpportunity>,
    pub development_path: Vec<DevelopmentMilestone>,
    pub mentoring_capability: MentoringCapability,
    pub influence_level: u8,
    pub communication_skills: u8,
    pub spiritual_maturity: u8,
    pub experience_depth: u8,
    pub team_leadership: u8,
    pub vision_casting: u8,
    pub current_mentees: u32,
    pub max_mentee_capacity: u32,
    pub next_review_date: NaiveDate,
    pub score_breakdown: Vec<FactorScore>,
}

impl LeadershipProfile {
    pub fn spare_mentee_capacity(&self) -> u32 {
        self.max_mentee_capacity.saturating_sub(self.current_mentees)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    pub total_candidates_analyzed: usize,
    pub qualified_leaders: usize,
    pub high_potential: usize,
    pub ready_now: usize,
    pub ready_6_months: usize,
    pub average_leadership_score: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuccessionCandidate {
    pub candidate: String,
    pub readiness: LeadershipReadiness,
    pub best_fit: String,
    pub timeline: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DevelopmentPriority {
    pub area: String,
    pub affected_candidates: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MentorAvailability {
    pub mentor_name: String,
    pub capacity: u32,
    pub current_mentees: u32,
    pub available: u32,
    pub strengths: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeadershipInsights {
    pub succession_plan: Vec<SuccessionCandidate>,
    pub development_priorities: Vec<DevelopmentPriority>,
    pub mentoring_opportunities: Vec<MentorAvailability>,
}

/// Result of one church-wide analysis run, handed to the profile sink as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadershipAnalysis {
    pub summary: AnalysisSummary,
    pub profiles: Vec<LeadershipProfile>,
    pub insights: LeadershipInsights,
}
