use serde::{Deserialize, Serialize};

use super::super::domain::MemberRecord;

/// Self-assessed leadership score at which a member is counted as a potential leader.
pub const POTENTIAL_LEADER_SCORE: f64 = 50.0;
/// Self-assessed leadership score at which an active volunteer is counted as a leader.
pub const CURRENT_LEADER_SCORE: f64 = 70.0;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DevelopmentMetrics {
    pub total_members: usize,
    pub potential_leaders: usize,
    pub current_leaders: usize,
    pub leadership_pipeline: i64,
    pub leadership_ratio: u32,
    pub development_opportunity: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineRecommendations {
    pub focus_on_development: bool,
    pub expand_mentoring: bool,
    pub succession_planning: bool,
}

/// Headcount view of the leadership pipeline for a whole congregation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineReport {
    pub development_metrics: DevelopmentMetrics,
    pub recommendations: PipelineRecommendations,
}

impl PipelineReport {
    /// Only members without a spiritual profile are excluded from the leader counts.
    pub fn from_members(members: &[MemberRecord]) -> Self {
        let total_members = members.len();
        let self_assessed = |member: &MemberRecord| {
            member
                .spiritual_profile
                .map(|profile| profile.leadership_score)
        };

        let potential_leaders = members
            .iter()
            .filter(|member| self_assessed(member).is_some_and(|s| s >= POTENTIAL_LEADER_SCORE))
            .count();
        let current_leaders = members
            .iter()
            .filter(|member| {
                member.is_volunteer()
                    && self_assessed(member).is_some_and(|s| s >= CURRENT_LEADER_SCORE)
            })
            .count();

        let leadership_pipeline = potential_leaders as i64 - current_leaders as i64;
        let (leadership_ratio, development_opportunity) = if total_members == 0 {
            (0, 0)
        } else {
            let total = total_members as f64;
            (
                (current_leaders as f64 / total * 100.0).round() as u32,
                (leadership_pipeline as f64 / total * 100.0).round() as i64,
            )
        };

        Self {
            development_metrics: DevelopmentMetrics {
                total_members,
                potential_leaders,
                current_leaders,
                leadership_pipeline,
                leadership_ratio,
                development_opportunity,
            },
            recommendations: PipelineRecommendations {
                focus_on_development: potential_leaders > current_leaders * 2,
                expand_mentoring: (current_leaders as f64) < total_members as f64 * 0.1,
                succession_planning: current_leaders > 5,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::leadership::domain::{MemberId, SpiritualProfile, VolunteerHistory};

    fn member(id: &str, leadership: Option<f64>, volunteer: bool) -> MemberRecord {
        MemberRecord {
            id: MemberId(id.to_string()),
            name: id.to_string(),
            occupation: None,
            spiritual_profile: leadership.map(|leadership_score| SpiritualProfile {
                leadership_score,
                experience_level: 5.0,
            }),
            spiritual_gifts: Vec::new(),
            ministry_passions: Vec::new(),
            skills: Default::default(),
            availability_score: None,
            volunteer: volunteer.then(VolunteerHistory::default),
            spiritual_calling: None,
        }
    }

    #[test]
    fn empty_roster_reports_zero_ratios() {
        let report = PipelineReport::from_members(&[]);
        assert_eq!(report.development_metrics.total_members, 0);
        assert_eq!(report.development_metrics.leadership_ratio, 0);
        assert_eq!(report.development_metrics.development_opportunity, 0);
        assert!(!report.recommendations.focus_on_development);
        assert!(!report.recommendations.expand_mentoring);
    }

    #[test]
    fn counts_potential_and_current_leaders() {
        let members = vec![
            member("a", Some(80.0), true),
            member("b", Some(75.0), false),
            member("c", Some(55.0), true),
            member("d", None, true),
        ];

        let report = PipelineReport::from_members(&members);
        let metrics = &report.development_metrics;
        assert_eq!(metrics.potential_leaders, 3);
        assert_eq!(metrics.current_leaders, 1);
        assert_eq!(metrics.leadership_pipeline, 2);
        assert_eq!(metrics.leadership_ratio, 25);
        assert_eq!(metrics.development_opportunity, 50);
        assert!(report.recommendations.focus_on_development);
        assert!(!report.recommendations.expand_mentoring);
        assert!(!report.recommendations.succession_planning);
    }
}
