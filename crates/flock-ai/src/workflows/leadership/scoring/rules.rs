use super::super::catalog::LeadershipCatalog;
use super::super::domain::SkillsMatrix;

const DEFAULT_COMMUNICATION: f64 = 5.0;
const EXECUTIVE_EDUCATION: f64 = 5.0;
const BASELINE_EDUCATION: f64 = 2.0;

pub(crate) fn readiness_score(leadership_level: f64) -> f64 {
    leadership_level.clamp(0.0, 10.0) * 2.5
}

pub(crate) fn experience_score(experience_level: f64) -> f64 {
    experience_level.clamp(0.0, 10.0) * 2.0
}

/// Zero without an active volunteer record.
pub(crate) fn performance_score(completed_assignments: Option<usize>) -> f64 {
    match completed_assignments {
        Some(count) => (count as f64 * 2.5).min(15.0),
        None => 0.0,
    }
}

/// Returns the score and the number of gifts that matched.
pub(crate) fn gift_alignment_score(gifts: &[String], catalog: &LeadershipCatalog) -> (f64, usize) {
    let matches = gifts
        .iter()
        .filter(|gift| {
            let lower = gift.to_lowercase();
            catalog
                .leadership_gifts
                .iter()
                .any(|keyword| lower.contains(keyword))
        })
        .count();

    (matches as f64 * 5.0, matches)
}

pub(crate) fn communication_score(skills: &SkillsMatrix) -> f64 {
    skills
        .communication
        .or(skills.interpersonal)
        .unwrap_or(DEFAULT_COMMUNICATION)
        .clamp(0.0, 10.0)
}

pub(crate) fn availability_score(availability: Option<f64>) -> f64 {
    (availability.unwrap_or(0.0) / 10.0).clamp(0.0, 10.0)
}

pub(crate) fn education_score(occupation: Option<&str>, catalog: &LeadershipCatalog) -> f64 {
    let lower = occupation.unwrap_or_default().to_lowercase();
    if catalog
        .executive_occupations
        .iter()
        .any(|keyword| lower.contains(keyword))
    {
        EXECUTIVE_EDUCATION
    } else {
        BASELINE_EDUCATION
    }
}
