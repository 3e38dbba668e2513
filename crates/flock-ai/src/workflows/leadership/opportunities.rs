use serde::{Deserialize, Serialize};

use super::catalog::{ChurchWidePosition, LeadershipCatalog};
use super::domain::{LeadershipLevel, MemberRecord, MinistryRecord, Urgency};

/// Linked leadership score at which a volunteer counts as an existing leader.
pub const CURRENT_LEADER_THRESHOLD: f64 = 70.0;
/// Score assumed for a volunteer whose member has no spiritual profile.
pub const UNLINKED_VOLUNTEER_SCORE: f64 = 10.0;
pub const MINIMUM_MATCH_SCORE: f64 = 40.0;
pub const MAX_RECOMMENDATIONS: usize = 5;

const PASSION_BONUS: f64 = 40.0;
const GIFT_BONUS: f64 = 15.0;
const READINESS_BONUS_CAP: f64 = 20.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadershipOpportunity {
    pub position_id: String,
    pub title: String,
    pub ministry_area: String,
    pub urgency: Urgency,
    pub match_score: f64,
    pub required_skills: Vec<String>,
    pub time_commitment: String,
    pub leadership_level: LeadershipLevel,
    pub reasoning: Vec<String>,
}

/// Head count and leader coverage for a ministry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinistryStaffing {
    pub volunteers: usize,
    pub leaders: usize,
}

impl MinistryStaffing {
    pub fn of(ministry: &MinistryRecord) -> Self {
        let leaders = ministry
            .volunteers
            .iter()
            .filter(|volunteer| {
                volunteer.leadership_score.unwrap_or(UNLINKED_VOLUNTEER_SCORE)
                    >= CURRENT_LEADER_THRESHOLD
            })
            .count();

        Self {
            volunteers: ministry.volunteers.len(),
            leaders,
        }
    }

    /// One leader is expected for every five volunteers, rounded up.
    pub fn needs_leadership(&self) -> bool {
        self.volunteers == 0 || self.leaders < self.volunteers.div_ceil(5).max(1)
    }

    fn urgency(&self) -> (Urgency, f64, &'static str) {
        if self.volunteers == 0 {
            (Urgency::Immediate, 30.0, "Ministerio sin líderes actuales")
        } else if self.leaders == 0 {
            (Urgency::High, 20.0, "Necesita liderazgo experimentado")
        } else if self.needs_leadership() {
            (
                Urgency::Medium,
                10.0,
                "Podría beneficiarse de liderazgo adicional",
            )
        } else {
            (Urgency::Low, 0.0, "")
        }
    }
}

/// Cross-references a scored member against under-staffed ministries.
#[derive(Debug, Clone, Default)]
pub struct OpportunityMatcher {
    catalog: LeadershipCatalog,
}

impl OpportunityMatcher {
    pub fn new(catalog: LeadershipCatalog) -> Self {
        Self { catalog }
    }

    pub fn match_opportunities(
        &self,
        member: &MemberRecord,
        total_score: f64,
        ministries: &[MinistryRecord],
    ) -> Vec<LeadershipOpportunity> {
        let mut opportunities: Vec<LeadershipOpportunity> = ministries
            .iter()
            .filter_map(|ministry| self.ministry_opening(member, total_score, ministry))
            .collect();

        opportunities.extend(
            self.catalog
                .church_wide_positions
                .iter()
                .filter(|position| total_score >= position.minimum_score)
                .map(|position| church_wide_opening(position, total_score)),
        );

        opportunities.sort_by(|a, b| b.match_score.total_cmp(&a.match_score));
        opportunities.truncate(MAX_RECOMMENDATIONS);
        opportunities
    }

    fn ministry_opening(
        &self,
        member: &MemberRecord,
        total_score: f64,
        ministry: &MinistryRecord,
    ) -> Option<LeadershipOpportunity> {
        let staffing = MinistryStaffing::of(ministry);
        if !staffing.needs_leadership() {
            return None;
        }

        let mut match_score = 0.0;
        let mut reasoning = Vec::new();

        if member.has_passion_for(&ministry.id) {
            match_score += PASSION_BONUS;
            reasoning.push(format!("Tiene pasión por {}", ministry.name));
        }

        let needs = self.catalog.needs_for(&ministry.name);
        let aligned: Vec<&str> = member
            .spiritual_gifts
            .iter()
            .filter(|gift| {
                let gift = gift.to_lowercase();
                needs.skills.iter().any(|need| need.contains(gift.as_str()))
            })
            .map(String::as_str)
            .collect();
        if !aligned.is_empty() {
            match_score += aligned.len() as f64 * GIFT_BONUS;
            reasoning.push(format!("Dones alineados: {}", aligned.join(", ")));
        }

        let (urgency, urgency_bonus, urgency_reason) = staffing.urgency();
        if urgency_bonus > 0.0 {
            match_score += urgency_bonus;
            reasoning.push(urgency_reason.to_string());
        }

        match_score += (total_score / 5.0).min(READINESS_BONUS_CAP);

        if match_score < MINIMUM_MATCH_SCORE {
            return None;
        }

        Some(LeadershipOpportunity {
            position_id: format!("leader-{}", ministry.id),
            title: format!("Líder de {}", ministry.name),
            ministry_area: ministry.name.clone(),
            urgency,
            match_score,
            required_skills: needs.skills.iter().map(|skill| skill.to_string()).collect(),
            time_commitment: needs.time_commitment.to_string(),
            leadership_level: LeadershipLevel::for_team(staffing.volunteers, urgency),
            reasoning,
        })
    }
}

fn church_wide_opening(position: &ChurchWidePosition, total_score: f64) -> LeadershipOpportunity {
    LeadershipOpportunity {
        position_id: position.position_id.to_string(),
        title: position.title.to_string(),
        ministry_area: position.ministry_area.to_string(),
        urgency: position.urgency,
        match_score: total_score * position.match_factor,
        required_skills: position
            .required_skills
            .iter()
            .map(|skill| skill.to_string())
            .collect(),
        time_commitment: position.time_commitment.to_string(),
        leadership_level: position.leadership_level,
        reasoning: position
            .reasoning
            .iter()
            .map(|reason| reason.to_string())
            .collect(),
    }
}
