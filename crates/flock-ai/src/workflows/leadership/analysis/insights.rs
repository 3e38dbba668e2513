use super::super::domain::{LeadershipReadiness, MentoringCapability};
use super::views::{
    DevelopmentPriority, LeadershipInsights, LeadershipProfile, MentorAvailability,
    SuccessionCandidate,
};

const SUCCESSION_LIMIT: usize = 10;
const PRIORITY_LIMIT: usize = 5;
const MENTOR_LIMIT: usize = 5;
const MENTOR_STRENGTHS: usize = 3;
const UNDECIDED_FIT: &str = "A determinar";

/// Expects `profiles` already sorted by descending leadership score.
pub(crate) fn generate_insights(profiles: &[LeadershipProfile]) -> LeadershipInsights {
    LeadershipInsights {
        succession_plan: succession_plan(profiles),
        development_priorities: development_priorities(profiles),
        mentoring_opportunities: mentoring_opportunities(profiles),
    }
}

fn succession_plan(profiles: &[LeadershipProfile]) -> Vec<SuccessionCandidate> {
    profiles
        .iter()
        .filter(|profile| profile.leadership_readiness.is_near_term())
        .take(SUCCESSION_LIMIT)
        .map(|profile| SuccessionCandidate {
            candidate: profile.member_name.clone(),
            readiness: profile.leadership_readiness,
            best_fit: profile
                .recommended_positions
                .first()
                .map(|position| position.title.clone())
                .unwrap_or_else(|| UNDECIDED_FIT.to_string()),
            timeline: if profile.leadership_readiness == LeadershipReadiness::ReadyNow {
                "Inmediato".to_string()
            } else {
                "3-6 meses".to_string()
            },
        })
        .collect()
}

/// Ties keep the order in which an area was first seen.
fn development_priorities(profiles: &[LeadershipProfile]) -> Vec<DevelopmentPriority> {
    let mut counts: Vec<DevelopmentPriority> = Vec::new();
    for area in profiles
        .iter()
        .flat_map(|profile| profile.development_areas.iter())
    {
        match counts.iter_mut().find(|entry| &entry.area == area) {
            Some(entry) => entry.affected_candidates += 1,
            None => counts.push(DevelopmentPriority {
                area: area.clone(),
                affected_candidates: 1,
            }),
        }
    }

    counts.sort_by(|a, b| b.affected_candidates.cmp(&a.affected_candidates));
    counts.truncate(PRIORITY_LIMIT);
    counts
}

fn mentoring_opportunities(profiles: &[LeadershipProfile]) -> Vec<MentorAvailability> {
    profiles
        .iter()
        .filter(|profile| profile.mentoring_capability == MentoringCapability::Excellent)
        .take(MENTOR_LIMIT)
        .map(|mentor| MentorAvailability {
            mentor_name: mentor.member_name.clone(),
            capacity: mentor.max_mentee_capacity,
            current_mentees: mentor.current_mentees,
            available: mentor.spare_mentee_capacity(),
            strengths: mentor
                .strong_suits
                .iter()
                .take(MENTOR_STRENGTHS)
                .cloned()
                .collect(),
        })
        .collect()
}
