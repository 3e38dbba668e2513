//! Input boundary for member and ministry rosters.
//!
//! Raw payloads arrive in whatever shape the upstream store produced. The guard rejects
//! records without identity and resolves loose shapes (comma separated tags, non-finite
//! numbers) once, so the scoring modules only ever see a `MemberRecord`.

pub mod import;
pub mod repository;

use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::warn;

use super::domain::{
    MemberId, MemberRecord, MinistryId, MinistryRecord, MinistryVolunteer, Roster, SkillsMatrix,
    SpiritualProfile, VolunteerHistory, DEFAULT_PROFILE_LEVEL,
};

/// Validation errors raised by the roster guard.
#[derive(Debug, thiserror::Error)]
pub enum RosterViolation {
    #[error("member record is missing an id")]
    MissingMemberId,
    #[error("member {member_id} is missing a name")]
    MissingMemberName { member_id: String },
    #[error("ministry record is missing an id")]
    MissingMinistryId,
    #[error("ministry {ministry_id} is missing a name")]
    MissingMinistryName { ministry_id: String },
    #[error("ministry {ministry_id} lists a volunteer without a member id")]
    MissingVolunteerId { ministry_id: String },
}

/// Spiritual profile as stored upstream; either score may be absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpiritualProfileSubmission {
    #[serde(default)]
    pub leadership_score: Option<f64>,
    #[serde(default)]
    pub experience_level: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemberSubmission {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub occupation: Option<String>,
    #[serde(default)]
    pub spiritual_profile: Option<SpiritualProfileSubmission>,
    #[serde(default, deserialize_with = "deserialize_tags")]
    pub spiritual_gifts: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_tags")]
    pub ministry_passions: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_skills")]
    pub skills: SkillsMatrix,
    #[serde(default)]
    pub availability_score: Option<f64>,
    #[serde(default)]
    pub volunteer: Option<VolunteerHistory>,
    #[serde(default)]
    pub spiritual_calling: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VolunteerSubmission {
    #[serde(default)]
    pub member_id: Option<String>,
    /// Overrides the score looked up from the member roster.
    #[serde(default)]
    pub leadership_score: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MinistrySubmission {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub volunteers: Vec<VolunteerSubmission>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RosterSubmission {
    #[serde(default)]
    pub members: Vec<MemberSubmission>,
    #[serde(default)]
    pub ministries: Vec<MinistrySubmission>,
}

/// Guard responsible for producing `MemberRecord` and `MinistryRecord` instances.
#[derive(Debug, Clone, Copy, Default)]
pub struct RosterGuard;

impl RosterGuard {
    pub fn member_from_submission(
        &self,
        submission: MemberSubmission,
    ) -> Result<MemberRecord, RosterViolation> {
        let id = non_blank(submission.id).ok_or(RosterViolation::MissingMemberId)?;
        let name = non_blank(submission.name)
            .or_else(|| {
                let joined = [submission.first_name, submission.last_name]
                    .into_iter()
                    .flatten()
                    .map(|part| part.trim().to_string())
                    .filter(|part| !part.is_empty())
                    .collect::<Vec<_>>()
                    .join(" ");
                non_blank(Some(joined))
            })
            .ok_or_else(|| RosterViolation::MissingMemberName {
                member_id: id.clone(),
            })?;

        let spiritual_profile = submission.spiritual_profile.map(|profile| SpiritualProfile {
            leadership_score: finite(profile.leadership_score).unwrap_or(DEFAULT_PROFILE_LEVEL),
            experience_level: finite(profile.experience_level).unwrap_or(DEFAULT_PROFILE_LEVEL),
        });

        let skills = SkillsMatrix {
            communication: finite(submission.skills.communication),
            interpersonal: finite(submission.skills.interpersonal),
            other: submission
                .skills
                .other
                .into_iter()
                .filter(|(_, level)| level.is_finite())
                .collect(),
        };

        Ok(MemberRecord {
            id: MemberId(id),
            name,
            occupation: non_blank(submission.occupation),
            spiritual_profile,
            spiritual_gifts: clean_tags(submission.spiritual_gifts),
            ministry_passions: clean_tags(submission.ministry_passions)
                .into_iter()
                .map(MinistryId)
                .collect(),
            skills,
            availability_score: finite(submission.availability_score),
            volunteer: submission.volunteer,
            spiritual_calling: non_blank(submission.spiritual_calling),
        })
    }

    /// Volunteers without an explicit score inherit the linked member's self-assessment.
    pub fn ministry_from_submission(
        &self,
        submission: MinistrySubmission,
        leadership_scores: &HashMap<MemberId, f64>,
    ) -> Result<MinistryRecord, RosterViolation> {
        let id = non_blank(submission.id).ok_or(RosterViolation::MissingMinistryId)?;
        let name = non_blank(submission.name).ok_or_else(|| {
            RosterViolation::MissingMinistryName {
                ministry_id: id.clone(),
            }
        })?;

        let volunteers = submission
            .volunteers
            .into_iter()
            .map(|volunteer| {
                let member_id = non_blank(volunteer.member_id)
                    .map(MemberId)
                    .ok_or_else(|| RosterViolation::MissingVolunteerId {
                        ministry_id: id.clone(),
                    })?;
                let leadership_score = finite(volunteer.leadership_score)
                    .or_else(|| leadership_scores.get(&member_id).copied());

                Ok(MinistryVolunteer {
                    member_id,
                    leadership_score,
                })
            })
            .collect::<Result<Vec<_>, RosterViolation>>()?;

        Ok(MinistryRecord {
            id: MinistryId(id),
            name,
            volunteers,
        })
    }

    pub fn roster_from_submission(
        &self,
        submission: RosterSubmission,
    ) -> Result<Roster, RosterViolation> {
        let members = submission
            .members
            .into_iter()
            .map(|member| self.member_from_submission(member))
            .collect::<Result<Vec<_>, _>>()
            .inspect_err(|violation| warn!(%violation, "roster submission rejected"))?;

        let leadership_scores = leadership_scores(&members);
        let ministries = submission
            .ministries
            .into_iter()
            .map(|ministry| self.ministry_from_submission(ministry, &leadership_scores))
            .collect::<Result<Vec<_>, _>>()
            .inspect_err(|violation| warn!(%violation, "roster submission rejected"))?;

        Ok(Roster {
            members,
            ministries,
        })
    }
}

pub(crate) fn leadership_scores(members: &[MemberRecord]) -> HashMap<MemberId, f64> {
    members
        .iter()
        .filter_map(|member| {
            member
                .spiritual_profile
                .map(|profile| (member.id.clone(), profile.leadership_score))
        })
        .collect()
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_string())
        .filter(|trimmed| !trimmed.is_empty())
}

/// Negative levels are floored at zero; NaN and infinities count as missing.
fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|level| level.is_finite()).map(|level| level.max(0.0))
}

fn clean_tags(tags: Vec<String>) -> Vec<String> {
    tags.into_iter()
        .map(|tag| tag.trim().to_string())
        .filter(|tag| !tag.is_empty())
        .collect()
}

pub(crate) fn split_tags(raw: &str) -> Vec<String> {
    raw.split([',', ';', '|'])
        .map(|tag| tag.trim().to_string())
        .filter(|tag| !tag.is_empty())
        .collect()
}

/// Accepts a list of strings, a single delimited string, or anything else as "no tags".
fn deserialize_tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(tag) => Some(tag),
                _ => None,
            })
            .collect(),
        Value::String(raw) => split_tags(&raw),
        _ => Vec::new(),
    })
}

/// Accepts a skills object whose values may be numbers or numeric strings; anything
/// that is not an object yields an empty matrix.
fn deserialize_skills<'de, D>(deserializer: D) -> Result<SkillsMatrix, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let Value::Object(entries) = value else {
        return Ok(SkillsMatrix::default());
    };

    let mut skills = SkillsMatrix::default();
    for (name, level) in entries {
        let level = match level {
            Value::Number(number) => number.as_f64(),
            Value::String(raw) => raw.trim().parse::<f64>().ok(),
            _ => None,
        };
        let Some(level) = level else { continue };

        match name.as_str() {
            "communication" => skills.communication = Some(level),
            "interpersonal" => skills.interpersonal = Some(level),
            _ => {
                skills.other.insert(name, level);
            }
        }
    }

    Ok(skills)
}
