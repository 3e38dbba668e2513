mod rules;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::catalog::LeadershipCatalog;
use super::domain::MemberRecord;

/// Months of assignment history that count toward volunteer performance.
pub const PERFORMANCE_WINDOW_MONTHS: u32 = 6;

/// The seven independent inputs to a leadership score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadershipFactor {
    Readiness,
    Experience,
    Performance,
    GiftAlignment,
    Communication,
    Availability,
    Education,
}

impl LeadershipFactor {
    pub const fn ordered() -> [Self; 7] {
        [
            Self::Readiness,
            Self::Experience,
            Self::Performance,
            Self::GiftAlignment,
            Self::Communication,
            Self::Availability,
            Self::Education,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Readiness => "Preparación Base",
            Self::Experience => "Experiencia",
            Self::Performance => "Desempeño",
            Self::GiftAlignment => "Dones de Liderazgo",
            Self::Communication => "Comunicación",
            Self::Availability => "Disponibilidad",
            Self::Education => "Formación",
        }
    }
}

/// Discrete contribution to a leadership score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorScore {
    pub factor: LeadershipFactor,
    pub label: String,
    pub score: f64,
}

/// Sub-scores in factor order plus the unweighted total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorBreakdown {
    pub total: f64,
    pub components: Vec<FactorScore>,
    /// Gifts that matched a leadership keyword; reused by the display scores.
    pub leadership_gift_matches: usize,
}

impl FactorBreakdown {
    pub fn score_for(&self, factor: LeadershipFactor) -> f64 {
        self.components
            .iter()
            .find(|component| component.factor == factor)
            .map(|component| component.score)
            .unwrap_or(0.0)
    }
}

/// Stateless scorer applying the catalog's keyword tables to a member.
#[derive(Debug, Clone, Default)]
pub struct FactorScorer {
    catalog: LeadershipCatalog,
}

impl FactorScorer {
    pub fn new(catalog: LeadershipCatalog) -> Self {
        Self { catalog }
    }

    pub fn score(&self, member: &MemberRecord, today: NaiveDate) -> FactorBreakdown {
        let completed = member
            .volunteer
            .as_ref()
            .map(|history| history.completed_within(today, PERFORMANCE_WINDOW_MONTHS));
        let (gift_score, leadership_gift_matches) =
            rules::gift_alignment_score(&member.spiritual_gifts, &self.catalog);

        let scored = [
            (
                LeadershipFactor::Readiness,
                rules::readiness_score(member.leadership_level()),
            ),
            (
                LeadershipFactor::Experience,
                rules::experience_score(member.experience_level()),
            ),
            (
                LeadershipFactor::Performance,
                rules::performance_score(completed),
            ),
            (LeadershipFactor::GiftAlignment, gift_score),
            (
                LeadershipFactor::Communication,
                rules::communication_score(&member.skills),
            ),
            (
                LeadershipFactor::Availability,
                rules::availability_score(member.availability_score),
            ),
            (
                LeadershipFactor::Education,
                rules::education_score(member.occupation.as_deref(), &self.catalog),
            ),
        ];

        let total: f64 = scored.iter().map(|(_, score)| score).sum();
        let components = scored
            .into_iter()
            .map(|(factor, score)| FactorScore {
                factor,
                label: factor.label().to_string(),
                score,
            })
            .collect();

        FactorBreakdown {
            total,
            components,
            leadership_gift_matches,
        }
    }
}
