use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};
use tracing::{debug, warn};

use super::super::domain::{
    AssignmentRecord, AssignmentStatus, MinistryId, Roster, SkillsMatrix, VolunteerHistory,
};
use super::{
    leadership_scores, split_tags, MemberSubmission, MinistrySubmission, RosterGuard,
    RosterSubmission, RosterViolation, SpiritualProfileSubmission, VolunteerSubmission,
};

#[derive(Debug, thiserror::Error)]
pub enum RosterImportError {
    #[error("failed to read roster export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid roster CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid roster JSON data: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid assignment date '{value}' for member {member_id}")]
    InvalidDate { member_id: String, value: String },
    #[error(transparent)]
    Violation(#[from] RosterViolation),
}

/// Loads rosters exported from the church management system.
pub struct RosterImporter;

impl RosterImporter {
    pub fn from_json_path<P: AsRef<Path>>(path: P) -> Result<Roster, RosterImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_json_reader(file)
    }

    pub fn from_json_reader<R: Read>(reader: R) -> Result<Roster, RosterImportError> {
        let submission: RosterSubmission = serde_json::from_reader(reader)?;
        Ok(RosterGuard.roster_from_submission(submission)?)
    }

    pub fn from_csv_paths<P: AsRef<Path>, Q: AsRef<Path>>(
        members: P,
        ministries: Q,
    ) -> Result<Roster, RosterImportError> {
        let members = std::fs::File::open(members)?;
        let ministries = std::fs::File::open(ministries)?;
        Self::from_csv_readers(members, ministries)
    }

    /// Members export has one row per member; the ministries export has one row per
    /// volunteer, with a blank volunteer column for ministries nobody serves in.
    pub fn from_csv_readers<M: Read, N: Read>(
        members: M,
        ministries: N,
    ) -> Result<Roster, RosterImportError> {
        let guard = RosterGuard;
        let members = parse_member_rows(members)?
            .into_iter()
            .map(|submission| guard.member_from_submission(submission))
            .collect::<Result<Vec<_>, _>>()
            .inspect_err(|violation| warn!(%violation, "member export rejected"))?;

        let scores = leadership_scores(&members);
        let ministries = parse_ministry_rows(ministries)?
            .into_iter()
            .map(|submission| guard.ministry_from_submission(submission, &scores))
            .collect::<Result<Vec<_>, _>>()
            .inspect_err(|violation| warn!(%violation, "ministry export rejected"))?;

        debug!(
            members = members.len(),
            ministries = ministries.len(),
            "roster exports imported"
        );
        Ok(Roster {
            members,
            ministries,
        })
    }
}

#[derive(Debug, Deserialize)]
struct MemberRow {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    id: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    first_name: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    last_name: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    occupation: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    leadership_score: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    experience_level: Option<String>,
    #[serde(default)]
    spiritual_gifts: String,
    #[serde(default)]
    ministry_passions: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    communication: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    interpersonal: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    availability_score: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    active_volunteer: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    volunteer_ministry: Option<String>,
    #[serde(default)]
    completed_assignments: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    spiritual_calling: Option<String>,
}

impl MemberRow {
    fn into_submission(self) -> Result<MemberSubmission, RosterImportError> {
        let is_volunteer = self.active_volunteer.as_deref().is_some_and(truthy);
        let volunteer = if is_volunteer {
            let member_id = self.id.clone().unwrap_or_default();
            let assignments = split_tags(&self.completed_assignments)
                .into_iter()
                .map(|raw| {
                    NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
                        .map(|date| AssignmentRecord {
                            date,
                            status: AssignmentStatus::Completed,
                        })
                        .map_err(|_| RosterImportError::InvalidDate {
                            member_id: member_id.clone(),
                            value: raw.clone(),
                        })
                })
                .collect::<Result<Vec<_>, _>>()?;

            Some(VolunteerHistory {
                ministry_id: self.volunteer_ministry.map(MinistryId),
                assignments,
            })
        } else {
            None
        };

        let leadership_score = number(self.leadership_score.as_deref());
        let experience_level = number(self.experience_level.as_deref());
        let spiritual_profile = if leadership_score.is_some() || experience_level.is_some() {
            Some(SpiritualProfileSubmission {
                leadership_score,
                experience_level,
            })
        } else {
            None
        };

        Ok(MemberSubmission {
            id: self.id,
            name: None,
            first_name: self.first_name,
            last_name: self.last_name,
            occupation: self.occupation,
            spiritual_profile,
            spiritual_gifts: split_tags(&self.spiritual_gifts),
            ministry_passions: split_tags(&self.ministry_passions),
            skills: SkillsMatrix {
                communication: number(self.communication.as_deref()),
                interpersonal: number(self.interpersonal.as_deref()),
                ..SkillsMatrix::default()
            },
            availability_score: number(self.availability_score.as_deref()),
            volunteer,
            spiritual_calling: self.spiritual_calling,
        })
    }
}

#[derive(Debug, Deserialize)]
struct MinistryRow {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    ministry_id: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    ministry_name: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    volunteer_member_id: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    volunteer_leadership_score: Option<String>,
}

fn reader<R: Read>(input: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(input)
}

fn parse_member_rows<R: Read>(input: R) -> Result<Vec<MemberSubmission>, RosterImportError> {
    let mut csv_reader = reader(input);
    let mut submissions = Vec::new();
    for row in csv_reader.deserialize::<MemberRow>() {
        submissions.push(row?.into_submission()?);
    }
    Ok(submissions)
}

/// Groups volunteer rows by ministry id, keeping first-seen ministry order.
fn parse_ministry_rows<R: Read>(input: R) -> Result<Vec<MinistrySubmission>, RosterImportError> {
    let mut csv_reader = reader(input);
    let mut ministries: Vec<MinistrySubmission> = Vec::new();

    for row in csv_reader.deserialize::<MinistryRow>() {
        let row = row?;
        let index = match ministries
            .iter()
            .position(|ministry| ministry.id.is_some() && ministry.id == row.ministry_id)
        {
            Some(index) => index,
            None => {
                ministries.push(MinistrySubmission {
                    id: row.ministry_id.clone(),
                    name: row.ministry_name.clone(),
                    volunteers: Vec::new(),
                });
                ministries.len() - 1
            }
        };

        if row.volunteer_member_id.is_some() {
            ministries[index].volunteers.push(VolunteerSubmission {
                member_id: row.volunteer_member_id,
                leadership_score: number(row.volunteer_leadership_score.as_deref()),
            });
        }
    }

    Ok(ministries)
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn number(raw: Option<&str>) -> Option<f64> {
    raw.and_then(|value| value.trim().replace(',', ".").parse::<f64>().ok())
}

fn truthy(raw: &str) -> bool {
    matches!(
        raw.trim().to_lowercase().as_str(),
        "true" | "yes" | "y" | "1" | "x" | "si" | "sí"
    )
}
