mod insights;
pub mod metrics;
pub mod views;

pub use metrics::{DevelopmentMetrics, PipelineRecommendations, PipelineReport};
pub use views::{
    AnalysisSummary, DevelopmentPriority, LeadershipAnalysis, LeadershipInsights,
    LeadershipProfile, MentorAvailability, SuccessionCandidate,
};

pub(crate) use insights::generate_insights;

use std::collections::HashMap;

use chrono::NaiveDate;
use tracing::debug;

use super::catalog::LeadershipCatalog;
use super::classifier::ProfileClassifier;
use super::development::DevelopmentPlanner;
use super::domain::{
    LeadershipPotential, LeadershipReadiness, MemberId, MemberRecord, MinistryRecord,
};
use super::opportunities::OpportunityMatcher;
use super::scoring::FactorScorer;

/// Minimum total a profile needs to be reported when the caller does not say otherwise.
pub const DEFAULT_MIN_LEADERSHIP_SCORE: f64 = 50.0;

/// Per-run inputs that are not part of the roster.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisOptions {
    pub today: NaiveDate,
    pub min_leadership_score: f64,
    /// Mentees already assigned per member; members missing from the map have none.
    pub current_mentees: HashMap<MemberId, u32>,
}

impl AnalysisOptions {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today,
            min_leadership_score: DEFAULT_MIN_LEADERSHIP_SCORE,
            current_mentees: HashMap::new(),
        }
    }

    pub fn with_min_score(mut self, min_leadership_score: f64) -> Self {
        self.min_leadership_score = min_leadership_score;
        self
    }

    pub fn with_current_mentees(mut self, current_mentees: HashMap<MemberId, u32>) -> Self {
        self.current_mentees = current_mentees;
        self
    }
}

/// Runs scoring, classification, matching and planning for every member of a roster.
#[derive(Debug, Clone, Default)]
pub struct LeadershipAnalyzer {
    scorer: FactorScorer,
    classifier: ProfileClassifier,
    matcher: OpportunityMatcher,
    planner: DevelopmentPlanner,
}

impl LeadershipAnalyzer {
    pub fn new(catalog: LeadershipCatalog) -> Self {
        Self {
            scorer: FactorScorer::new(catalog),
            classifier: ProfileClassifier,
            matcher: OpportunityMatcher::new(catalog),
            planner: DevelopmentPlanner,
        }
    }

    pub fn standard() -> Self {
        Self::new(LeadershipCatalog::standard())
    }

    pub fn analyze_member(
        &self,
        member: &MemberRecord,
        ministries: &[MinistryRecord],
        today: NaiveDate,
        current_mentees: u32,
    ) -> LeadershipProfile {
        let breakdown = self.scorer.score(member, today);
        let classification = self.classifier.classify(member, &breakdown, today);
        let recommended_positions =
            self.matcher
                .match_opportunities(member, breakdown.total, ministries);
        let development_path = self.planner.build_path(
            classification.potential,
            &classification.development_areas,
            today,
        );

        let current_role = if member.is_volunteer() {
            "Voluntario"
        } else {
            "Miembro"
        };
        let scores = classification.scores;

        LeadershipProfile {
            member_id: member.id.clone(),
            member_name: member.name.clone(),
            current_role: current_role.to_string(),
            leadership_potential: classification.potential,
            leadership_score: breakdown.total,
            leadership_readiness: classification.readiness,
            strong_suits: classification.strong_suits,
            development_areas: classification.development_areas,
            recommended_positions,
            development_path,
            mentoring_capability: classification.mentoring,
            influence_level: scores.influence_level,
            communication_skills: scores.communication_skills,
            spiritual_maturity: scores.spiritual_maturity,
            experience_depth: scores.experience_depth,
            team_leadership: scores.team_leadership,
            vision_casting: scores.vision_casting,
            current_mentees,
            max_mentee_capacity: classification.max_mentee_capacity,
            next_review_date: classification.next_review_date,
            score_breakdown: breakdown.components,
        }
    }

    pub fn analyze_church(
        &self,
        members: &[MemberRecord],
        ministries: &[MinistryRecord],
        options: &AnalysisOptions,
    ) -> LeadershipAnalysis {
        let mut profiles: Vec<LeadershipProfile> = members
            .iter()
            .map(|member| {
                let mentees = options
                    .current_mentees
                    .get(&member.id)
                    .copied()
                    .unwrap_or(0);
                self.analyze_member(member, ministries, options.today, mentees)
            })
            .filter(|profile| profile.leadership_score >= options.min_leadership_score)
            .collect();

        profiles.sort_by(|a, b| b.leadership_score.total_cmp(&a.leadership_score));

        debug!(
            candidates = members.len(),
            qualified = profiles.len(),
            ministries = ministries.len(),
            "leadership roster analyzed"
        );

        LeadershipAnalysis {
            summary: summarize(members.len(), &profiles),
            insights: generate_insights(&profiles),
            profiles,
        }
    }
}

fn summarize(candidates: usize, profiles: &[LeadershipProfile]) -> AnalysisSummary {
    let count_where = |predicate: &dyn Fn(&LeadershipProfile) -> bool| {
        profiles.iter().filter(|profile| predicate(profile)).count()
    };

    let average_leadership_score = if profiles.is_empty() {
        0
    } else {
        let sum: f64 = profiles.iter().map(|profile| profile.leadership_score).sum();
        (sum / profiles.len() as f64).round() as u32
    };

    AnalysisSummary {
        total_candidates_analyzed: candidates,
        qualified_leaders: profiles.len(),
        high_potential: count_where(&|p| p.leadership_potential == LeadershipPotential::High),
        ready_now: count_where(&|p| p.leadership_readiness == LeadershipReadiness::ReadyNow),
        ready_6_months: count_where(&|p| {
            p.leadership_readiness == LeadershipReadiness::Ready6Months
        }),
        average_leadership_score,
    }
}
