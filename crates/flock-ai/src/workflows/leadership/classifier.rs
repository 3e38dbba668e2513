use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::domain::{
    add_months, LeadershipPotential, LeadershipReadiness, MemberRecord, MentoringCapability,
};
use super::scoring::{FactorBreakdown, LeadershipFactor};

pub const CONFIDENCE_GAP: &str = "Desarrollar confianza en liderazgo";
pub const EXPERIENCE_GAP: &str = "Ganar más experiencia práctica";
pub const GIFTS_GAP: &str = "Desarrollar dones de liderazgo";
pub const COMMUNICATION_GAP: &str = "Mejorar comunicación y influencia";

/// Threshold check pairing a strength with the gap reported when it is not met.
struct SuitCheck {
    factor: LeadershipFactor,
    threshold: f64,
    strength: &'static str,
    gap: &'static str,
}

const SUIT_CHECKS: [SuitCheck; 4] = [
    SuitCheck {
        factor: LeadershipFactor::Readiness,
        threshold: 20.0,
        strength: "Alta motivación de liderazgo",
        gap: CONFIDENCE_GAP,
    },
    SuitCheck {
        factor: LeadershipFactor::Experience,
        threshold: 15.0,
        strength: "Experiencia sólida en ministerio",
        gap: EXPERIENCE_GAP,
    },
    SuitCheck {
        factor: LeadershipFactor::GiftAlignment,
        threshold: 10.0,
        strength: "Dones espirituales para liderazgo",
        gap: GIFTS_GAP,
    },
    SuitCheck {
        factor: LeadershipFactor::Communication,
        threshold: 7.0,
        strength: "Habilidades de comunicación",
        gap: COMMUNICATION_GAP,
    },
];

const HIGH_POTENTIAL_REVIEW_MONTHS: u32 = 3;
const STANDARD_REVIEW_MONTHS: u32 = 6;

/// Presentation scores on a 0-100 scale. Never read back by the tier logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayScores {
    pub influence_level: u8,
    pub communication_skills: u8,
    pub spiritual_maturity: u8,
    pub experience_depth: u8,
    pub team_leadership: u8,
    pub vision_casting: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub potential: LeadershipPotential,
    pub readiness: LeadershipReadiness,
    pub strong_suits: Vec<String>,
    pub development_areas: Vec<String>,
    pub mentoring: MentoringCapability,
    pub scores: DisplayScores,
    pub max_mentee_capacity: u32,
    pub next_review_date: NaiveDate,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ProfileClassifier;

impl ProfileClassifier {
    pub fn classify(
        &self,
        member: &MemberRecord,
        breakdown: &FactorBreakdown,
        today: NaiveDate,
    ) -> Classification {
        let total = breakdown.total;
        let potential = LeadershipPotential::from_score(total);
        let readiness = LeadershipReadiness::from_score(total, member.experience_level());
        let mentoring = MentoringCapability::from_scores(
            total,
            breakdown.score_for(LeadershipFactor::Experience),
        );

        let mut strong_suits = Vec::new();
        let mut development_areas = Vec::new();
        for check in &SUIT_CHECKS {
            if breakdown.score_for(check.factor) > check.threshold {
                strong_suits.push(check.strength.to_string());
            } else {
                development_areas.push(check.gap.to_string());
            }
        }

        let review_months = if potential == LeadershipPotential::High {
            HIGH_POTENTIAL_REVIEW_MONTHS
        } else {
            STANDARD_REVIEW_MONTHS
        };

        Classification {
            potential,
            readiness,
            strong_suits,
            development_areas,
            mentoring,
            scores: display_scores(member, breakdown),
            max_mentee_capacity: max_mentee_capacity(total),
            next_review_date: add_months(today, review_months),
        }
    }
}

pub fn max_mentee_capacity(total: f64) -> u32 {
    ((total / 20.0).floor().max(0.0) as u32).max(1)
}

fn display_scores(member: &MemberRecord, breakdown: &FactorBreakdown) -> DisplayScores {
    let communication = breakdown.score_for(LeadershipFactor::Communication);
    let experience = breakdown.score_for(LeadershipFactor::Experience);
    let performance = breakdown.score_for(LeadershipFactor::Performance);
    let gifts = breakdown.score_for(LeadershipFactor::GiftAlignment);
    let calling_bonus = if member
        .spiritual_calling
        .as_deref()
        .is_some_and(|calling| !calling.trim().is_empty())
    {
        30.0
    } else {
        10.0
    };

    DisplayScores {
        influence_level: percent(communication * 10.0),
        communication_skills: percent(communication * 10.0),
        spiritual_maturity: percent(
            member.experience_level() * 10.0 + breakdown.leadership_gift_matches as f64 * 15.0,
        ),
        experience_depth: percent(experience * 5.0),
        team_leadership: percent(performance * 6.0),
        vision_casting: percent(calling_bonus + gifts * 2.0),
    }
}

fn percent(value: f64) -> u8 {
    value.clamp(0.0, 100.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mentee_capacity_never_drops_below_one() {
        assert_eq!(max_mentee_capacity(7.0), 1);
        assert_eq!(max_mentee_capacity(39.9), 1);
        assert_eq!(max_mentee_capacity(40.0), 2);
        assert_eq!(max_mentee_capacity(95.0), 4);
    }

    #[test]
    fn percent_caps_and_rounds() {
        assert_eq!(percent(145.0), 100);
        assert_eq!(percent(42.5), 43);
        assert_eq!(percent(-3.0), 0);
    }
}
