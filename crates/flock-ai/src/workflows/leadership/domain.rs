use std::collections::BTreeMap;
use std::fmt;

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// Leadership and experience level assumed when a member has no spiritual profile.
pub const DEFAULT_PROFILE_LEVEL: f64 = 1.0;

/// Tenant identifier; every roster belongs to exactly one church.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChurchId(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberId(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MinistryId(pub String);

impl fmt::Display for ChurchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for MinistryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Self-assessed leadership signals, both on a 0-10 scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpiritualProfile {
    pub leadership_score: f64,
    pub experience_level: f64,
}

/// Named skill levels. Communication and interpersonal are the only ones scored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillsMatrix {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub communication: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interpersonal: Option<f64>,
    #[serde(default, flatten)]
    pub other: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssignmentStatus {
    Scheduled,
    Confirmed,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentRecord {
    pub date: NaiveDate,
    pub status: AssignmentStatus,
}

/// Active volunteer record of a member and its assignment history.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolunteerHistory {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ministry_id: Option<MinistryId>,
    #[serde(default)]
    pub assignments: Vec<AssignmentRecord>,
}

impl VolunteerHistory {
    /// Completed assignments dated on or after `today - months`.
    pub fn completed_within(&self, today: NaiveDate, months: u32) -> usize {
        let cutoff = today
            .checked_sub_months(Months::new(months))
            .unwrap_or(NaiveDate::MIN);

        self.assignments
            .iter()
            .filter(|assignment| {
                assignment.status == AssignmentStatus::Completed && assignment.date >= cutoff
            })
            .count()
    }
}

/// Member as seen by the scoring engine. Built by the roster guard, never by callers
/// directly from raw payloads, so identity is always present and numbers are in range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberRecord {
    pub id: MemberId,
    pub name: String,
    #[serde(default)]
    pub occupation: Option<String>,
    #[serde(default)]
    pub spiritual_profile: Option<SpiritualProfile>,
    #[serde(default)]
    pub spiritual_gifts: Vec<String>,
    #[serde(default)]
    pub ministry_passions: Vec<MinistryId>,
    #[serde(default)]
    pub skills: SkillsMatrix,
    #[serde(default)]
    pub availability_score: Option<f64>,
    #[serde(default)]
    pub volunteer: Option<VolunteerHistory>,
    #[serde(default)]
    pub spiritual_calling: Option<String>,
}

impl MemberRecord {
    pub fn leadership_level(&self) -> f64 {
        self.spiritual_profile
            .map(|profile| profile.leadership_score)
            .unwrap_or(DEFAULT_PROFILE_LEVEL)
    }

    pub fn experience_level(&self) -> f64 {
        self.spiritual_profile
            .map(|profile| profile.experience_level)
            .unwrap_or(DEFAULT_PROFILE_LEVEL)
    }

    pub fn is_volunteer(&self) -> bool {
        self.volunteer.is_some()
    }

    pub fn has_passion_for(&self, ministry: &MinistryId) -> bool {
        self.ministry_passions.iter().any(|id| id == ministry)
    }
}

/// Active volunteer of a ministry, linked back to the member's leadership score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinistryVolunteer {
    pub member_id: MemberId,
    #[serde(default)]
    pub leadership_score: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinistryRecord {
    pub id: MinistryId,
    pub name: String,
    #[serde(default)]
    pub volunteers: Vec<MinistryVolunteer>,
}

/// Member and ministry rosters for a single church.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    pub members: Vec<MemberRecord>,
    pub ministries: Vec<MinistryRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LeadershipPotential {
    High,
    Medium,
    Emerging,
    Low,
}

impl LeadershipPotential {
    pub fn from_score(total: f64) -> Self {
        if total >= 85.0 {
            Self::High
        } else if total >= 70.0 {
            Self::Medium
        } else if total >= 50.0 {
            Self::Emerging
        } else {
            Self::Low
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Emerging => "Emerging",
            Self::Low => "Low",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LeadershipReadiness {
    ReadyNow,
    #[serde(rename = "READY_6_MONTHS")]
    Ready6Months,
    #[serde(rename = "READY_1_YEAR")]
    Ready1Year,
    NeedsDevelopment,
}

impl LeadershipReadiness {
    /// Ready now additionally requires a raw experience level of at least 7.
    pub fn from_score(total: f64, experience_level: f64) -> Self {
        if total >= 85.0 && experience_level >= 7.0 {
            Self::ReadyNow
        } else if total >= 75.0 {
            Self::Ready6Months
        } else if total >= 60.0 {
            Self::Ready1Year
        } else {
            Self::NeedsDevelopment
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::ReadyNow => "Ready Now",
            Self::Ready6Months => "Ready in 6 Months",
            Self::Ready1Year => "Ready in 1 Year",
            Self::NeedsDevelopment => "Needs Development",
        }
    }

    pub const fn is_near_term(self) -> bool {
        matches!(self, Self::ReadyNow | Self::Ready6Months)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MentoringCapability {
    Excellent,
    Good,
    Developing,
    Basic,
}

impl MentoringCapability {
    /// Blends the total with a double-weighted experience factor.
    pub fn from_scores(total: f64, experience_score: f64) -> Self {
        let mentor_score = (total + experience_score * 2.0) / 3.0;

        if mentor_score >= 80.0 {
            Self::Excellent
        } else if mentor_score >= 65.0 {
            Self::Good
        } else if mentor_score >= 45.0 {
            Self::Developing
        } else {
            Self::Basic
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Developing => "Developing",
            Self::Basic => "Basic",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Urgency {
    Immediate,
    High,
    Medium,
    Low,
}

impl Urgency {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Immediate => "Immediate",
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LeadershipLevel {
    Junior,
    Mid,
    Senior,
    Executive,
}

impl LeadershipLevel {
    pub fn for_team(team_size: usize, urgency: Urgency) -> Self {
        if urgency == Urgency::Immediate {
            return Self::Junior;
        }

        match team_size {
            0..=3 => Self::Junior,
            4..=10 => Self::Mid,
            11..=25 => Self::Senior,
            _ => Self::Executive,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Junior => "Junior",
            Self::Mid => "Mid",
            Self::Senior => "Senior",
            Self::Executive => "Executive",
        }
    }
}

pub(crate) fn add_months(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_add_months(Months::new(months))
        .unwrap_or(NaiveDate::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn completed_within_ignores_old_and_unfinished_assignments() {
        let history = VolunteerHistory {
            ministry_id: None,
            assignments: vec![
                AssignmentRecord {
                    date: date(2025, 9, 1),
                    status: AssignmentStatus::Completed,
                },
                AssignmentRecord {
                    date: date(2025, 4, 15),
                    status: AssignmentStatus::Completed,
                },
                AssignmentRecord {
                    date: date(2025, 3, 31),
                    status: AssignmentStatus::Completed,
                },
                AssignmentRecord {
                    date: date(2025, 9, 20),
                    status: AssignmentStatus::Cancelled,
                },
            ],
        };

        assert_eq!(history.completed_within(date(2025, 10, 1), 6), 2);
    }

    #[test]
    fn completed_within_includes_the_window_start() {
        let history = VolunteerHistory {
            ministry_id: None,
            assignments: vec![AssignmentRecord {
                date: date(2025, 4, 1),
                status: AssignmentStatus::Completed,
            }],
        };

        assert_eq!(history.completed_within(date(2025, 10, 1), 6), 1);
        assert_eq!(history.completed_within(date(2025, 10, 2), 6), 0);
    }

    #[test]
    fn leadership_level_bands_follow_team_size() {
        assert_eq!(LeadershipLevel::for_team(3, Urgency::Medium), LeadershipLevel::Junior);
        assert_eq!(LeadershipLevel::for_team(4, Urgency::Medium), LeadershipLevel::Mid);
        assert_eq!(LeadershipLevel::for_team(25, Urgency::High), LeadershipLevel::Senior);
        assert_eq!(LeadershipLevel::for_team(26, Urgency::Low), LeadershipLevel::Executive);
        assert_eq!(
            LeadershipLevel::for_team(40, Urgency::Immediate),
            LeadershipLevel::Junior
        );
    }

    #[test]
    fn readiness_serializes_with_numeric_suffixes() {
        let json = serde_json::to_string(&LeadershipReadiness::Ready6Months).expect("serializes");
        assert_eq!(json, "\"READY_6_MONTHS\"");
        let json = serde_json::to_string(&LeadershipReadiness::NeedsDevelopment).expect("serializes");
        assert_eq!(json, "\"NEEDS_DEVELOPMENT\"");
    }

    #[test]
    fn add_months_clamps_to_month_end() {
        assert_eq!(add_months(date(2025, 1, 31), 1), date(2025, 2, 28));
    }
}
