use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::workflows::leadership::analysis::LeadershipAnalysis;
use crate::workflows::leadership::domain::{
    AssignmentRecord, AssignmentStatus, ChurchId, MemberId, MemberRecord, MinistryId,
    MinistryRecord, MinistryVolunteer, SkillsMatrix, SpiritualProfile, VolunteerHistory,
};
use crate::workflows::leadership::roster::repository::{
    ProfileSink, RosterError, RosterFilter, RosterProvider, SinkError,
};
use crate::workflows::leadership::{LeadershipConfig, LeadershipService};

pub(super) const CHURCH: &str = "iglesia-central";

pub(super) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub(super) fn today() -> NaiveDate {
    date(2025, 10, 1)
}

pub(super) fn church() -> ChurchId {
    ChurchId(CHURCH.to_string())
}

/// Member with nothing but identity.
pub(super) fn bare_member(id: &str, name: &str) -> MemberRecord {
    MemberRecord {
        id: MemberId(id.to_string()),
        name: name.to_string(),
        occupation: None,
        spiritual_profile: None,
        spiritual_gifts: Vec::new(),
        ministry_passions: Vec::new(),
        skills: SkillsMatrix::default(),
        availability_score: None,
        volunteer: None,
        spiritual_calling: None,
    }
}

fn completed_assignments(dates: &[NaiveDate]) -> VolunteerHistory {
    VolunteerHistory {
        ministry_id: None,
        assignments: dates
            .iter()
            .map(|date| AssignmentRecord {
                date: *date,
                status: AssignmentStatus::Completed,
            })
            .collect(),
    }
}

fn six_recent_assignments() -> VolunteerHistory {
    completed_assignments(&[
        date(2025, 4, 15),
        date(2025, 5, 15),
        date(2025, 6, 15),
        date(2025, 7, 15),
        date(2025, 8, 15),
        date(2025, 9, 15),
    ])
}

/// Every input at zero or blank: 0 + 0 + 0 + 0 + 5 + 0 + 2.
pub(super) fn boundary_member() -> MemberRecord {
    MemberRecord {
        occupation: Some(String::new()),
        spiritual_profile: Some(SpiritualProfile {
            leadership_score: 0.0,
            experience_level: 0.0,
        }),
        availability_score: Some(0.0),
        ..bare_member("m-boundary", "Pedro Sánchez")
    }
}

/// 25 + 16 + 15 + 15 + 9 + 10 + 5 = 95.
pub(super) fn director_member() -> MemberRecord {
    MemberRecord {
        occupation: Some("Director de Ventas".to_string()),
        spiritual_profile: Some(SpiritualProfile {
            leadership_score: 10.0,
            experience_level: 8.0,
        }),
        spiritual_gifts: vec![
            "Liderazgo".to_string(),
            "Administración".to_string(),
            "Enseñanza".to_string(),
        ],
        skills: SkillsMatrix {
            communication: Some(9.0),
            ..SkillsMatrix::default()
        },
        availability_score: Some(100.0),
        volunteer: Some(six_recent_assignments()),
        spiritual_calling: Some("Plantación de iglesias".to_string()),
        ..bare_member("m-director", "Marta Ríos")
    }
}

/// 25 + 12 + 15 + 10 + 8 + 8 + 5 = 83.
pub(super) fn coordinator_member() -> MemberRecord {
    MemberRecord {
        occupation: Some("Coordinador de logística".to_string()),
        spiritual_profile: Some(SpiritualProfile {
            leadership_score: 10.0,
            experience_level: 6.0,
        }),
        spiritual_gifts: vec!["Liderazgo".to_string(), "Discernimiento".to_string()],
        skills: SkillsMatrix {
            communication: Some(8.0),
            ..SkillsMatrix::default()
        },
        availability_score: Some(80.0),
        volunteer: Some(six_recent_assignments()),
        ..bare_member("m-coordinator", "Jorge Luna")
    }
}

/// 20 + 10 + 5 + 5 + 6 + 6 + 2 = 54.
pub(super) fn emerging_member() -> MemberRecord {
    MemberRecord {
        occupation: Some("Maestra".to_string()),
        spiritual_profile: Some(SpiritualProfile {
            leadership_score: 8.0,
            experience_level: 5.0,
        }),
        spiritual_gifts: vec!["Pastoreo".to_string(), "Hospitalidad".to_string()],
        skills: SkillsMatrix {
            interpersonal: Some(6.0),
            ..SkillsMatrix::default()
        },
        availability_score: Some(60.0),
        volunteer: Some(completed_assignments(&[date(2025, 9, 1), date(2025, 9, 20)])),
        ..bare_member("m-emerging", "Lucía Torres")
    }
}

pub(super) fn ministry(id: &str, name: &str, volunteer_scores: &[Option<f64>]) -> MinistryRecord {
    MinistryRecord {
        id: MinistryId(id.to_string()),
        name: name.to_string(),
        volunteers: volunteer_scores
            .iter()
            .enumerate()
            .map(|(index, score)| MinistryVolunteer {
                member_id: MemberId(format!("{id}-v{index}")),
                leadership_score: *score,
            })
            .collect(),
    }
}

pub(super) fn congregation() -> Vec<MemberRecord> {
    vec![
        emerging_member(),
        boundary_member(),
        director_member(),
        coordinator_member(),
    ]
}

pub(super) fn ministries() -> Vec<MinistryRecord> {
    vec![
        ministry("min-kids", "Ministerio de Niños", &[]),
        ministry("min-music", "Música y Alabanza", &[Some(20.0), Some(15.0)]),
        ministry("min-hosp", "Hospitalidad", &[Some(80.0), None]),
    ]
}

#[derive(Clone)]
pub(super) struct MemoryRoster {
    church_id: ChurchId,
    members: Vec<MemberRecord>,
    ministries: Vec<MinistryRecord>,
}

impl MemoryRoster {
    pub(super) fn new(members: Vec<MemberRecord>, ministries: Vec<MinistryRecord>) -> Self {
        Self {
            church_id: church(),
            members,
            ministries,
        }
    }

    fn check(&self, church_id: &ChurchId) -> Result<(), RosterError> {
        if church_id == &self.church_id {
            Ok(())
        } else {
            Err(RosterError::UnknownChurch(church_id.clone()))
        }
    }
}

impl RosterProvider for MemoryRoster {
    fn members(
        &self,
        church_id: &ChurchId,
        filter: &RosterFilter,
    ) -> Result<Vec<MemberRecord>, RosterError> {
        self.check(church_id)?;
        Ok(self
            .members
            .iter()
            .filter(|member| filter.matches(member))
            .cloned()
            .collect())
    }

    fn ministries(&self, church_id: &ChurchId) -> Result<Vec<MinistryRecord>, RosterError> {
        self.check(church_id)?;
        Ok(self.ministries.clone())
    }
}

#[derive(Clone, Default)]
pub(super) struct MemorySink {
    stored: Arc<Mutex<Vec<(ChurchId, LeadershipAnalysis)>>>,
}

impl MemorySink {
    pub(super) fn stored(&self) -> Vec<(ChurchId, LeadershipAnalysis)> {
        self.stored.lock().expect("sink mutex poisoned").clone()
    }
}

impl ProfileSink for MemorySink {
    fn store(&self, church_id: &ChurchId, analysis: &LeadershipAnalysis) -> Result<(), SinkError> {
        self.stored
            .lock()
            .expect("sink mutex poisoned")
            .push((church_id.clone(), analysis.clone()));
        Ok(())
    }
}

#[derive(Clone, Default)]
pub(super) struct OfflineSink;

impl ProfileSink for OfflineSink {
    fn store(&self, _church_id: &ChurchId, _analysis: &LeadershipAnalysis) -> Result<(), SinkError> {
        Err(SinkError::Unavailable("dashboard offline".to_string()))
    }
}

/// Prefilter lowered to the 0-10 profile scale used by these fixtures.
pub(super) fn service_config() -> LeadershipConfig {
    LeadershipConfig {
        min_leadership_score: 50.0,
        profile_prefilter_score: 5.0,
    }
}

pub(super) fn build_service() -> (LeadershipService<MemoryRoster, MemorySink>, Arc<MemorySink>) {
    let sink = Arc::new(MemorySink::default());
    let service = LeadershipService::new(
        Arc::new(MemoryRoster::new(congregation(), ministries())),
        sink.clone(),
        service_config(),
    );
    (service, sink)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    serde_json::from_slice(&body).expect("json body")
}
