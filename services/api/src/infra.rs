use chrono::NaiveDate;
use flock_ai::workflows::leadership::{
    ChurchId, LeadershipAnalysis, MemberId, MemberRecord, MinistryRecord, ProfileSink, Roster,
    RosterError, RosterFilter, RosterProvider, SinkError,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Rosters held in memory, keyed by church. Backs the CLI and the demo server.
#[derive(Default, Clone)]
pub(crate) struct InMemoryRosterProvider {
    rosters: Arc<Mutex<HashMap<ChurchId, Roster>>>,
}

impl InMemoryRosterProvider {
    pub(crate) fn with_roster(church_id: ChurchId, roster: Roster) -> Self {
        Self {
            rosters: Arc::new(Mutex::new(HashMap::from([(church_id, roster)]))),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<ChurchId, Roster>>, RosterError> {
        self.rosters
            .lock()
            .map_err(|_| RosterError::Unavailable("roster store lock poisoned".to_string()))
    }

    fn with_church<T>(
        &self,
        church_id: &ChurchId,
        read: impl FnOnce(&Roster) -> T,
    ) -> Result<T, RosterError> {
        self.lock()?
            .get(church_id)
            .map(read)
            .ok_or_else(|| RosterError::UnknownChurch(church_id.clone()))
    }
}

impl RosterProvider for InMemoryRosterProvider {
    fn members(
        &self,
        church_id: &ChurchId,
        filter: &RosterFilter,
    ) -> Result<Vec<MemberRecord>, RosterError> {
        self.with_church(church_id, |roster| {
            roster
                .members
                .iter()
                .filter(|member| filter.matches(member))
                .cloned()
                .collect()
        })
    }

    fn ministries(&self, church_id: &ChurchId) -> Result<Vec<MinistryRecord>, RosterError> {
        self.with_church(church_id, |roster| roster.ministries.clone())
    }
}

/// Keeps the most recent analysis per church.
#[derive(Default, Clone)]
pub(crate) struct InMemoryProfileSink {
    latest: Arc<Mutex<HashMap<ChurchId, LeadershipAnalysis>>>,
}

impl ProfileSink for InMemoryProfileSink {
    fn store(&self, church_id: &ChurchId, analysis: &LeadershipAnalysis) -> Result<(), SinkError> {
        let mut guard = self
            .latest
            .lock()
            .map_err(|_| SinkError::Unavailable("profile store lock poisoned".to_string()))?;
        guard.insert(church_id.clone(), analysis.clone());
        Ok(())
    }
}

impl InMemoryProfileSink {
    #[cfg(test)]
    pub(crate) fn latest(&self, church_id: &ChurchId) -> Option<LeadershipAnalysis> {
        self.latest
            .lock()
            .ok()
            .and_then(|guard| guard.get(church_id).cloned())
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

/// Parses `MEMBER_ID=COUNT`.
pub(crate) fn parse_mentee_count(raw: &str) -> Result<(MemberId, u32), String> {
    let (member_id, count) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected MEMBER_ID=COUNT, got '{raw}'"))?;
    let member_id = member_id.trim();
    if member_id.is_empty() {
        return Err(format!("missing member id in '{raw}'"));
    }
    let count = count
        .trim()
        .parse::<u32>()
        .map_err(|err| format!("invalid mentee count in '{raw}' ({err})"))?;
    Ok((MemberId(member_id.to_string()), count))
}
