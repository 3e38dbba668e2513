use serde::{Deserialize, Serialize};

use super::super::analysis::LeadershipAnalysis;
use super::super::domain::{ChurchId, MemberId, MemberRecord, MinistryRecord};

/// Member selection pushed down to the roster provider.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RosterFilter {
    /// Restrict to one member. Lifts the profile prefilter.
    pub target_member_id: Option<MemberId>,
    /// Require a spiritual profile with at least this self-assessed leadership score.
    pub min_profile_leadership_score: Option<f64>,
}

impl RosterFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn prefiltered(min_profile_leadership_score: f64) -> Self {
        Self {
            target_member_id: None,
            min_profile_leadership_score: Some(min_profile_leadership_score),
        }
    }

    pub fn member(member_id: MemberId) -> Self {
        Self {
            target_member_id: Some(member_id),
            min_profile_leadership_score: None,
        }
    }

    pub fn matches(&self, member: &MemberRecord) -> bool {
        if let Some(target) = &self.target_member_id {
            return &member.id == target;
        }

        match self.min_profile_leadership_score {
            Some(minimum) => member
                .spiritual_profile
                .is_some_and(|profile| profile.leadership_score >= minimum),
            None => true,
        }
    }
}

/// Source of active members and ministries for one church.
pub trait RosterProvider: Send + Sync {
    fn members(
        &self,
        church_id: &ChurchId,
        filter: &RosterFilter,
    ) -> Result<Vec<MemberRecord>, RosterError>;
    fn ministries(&self, church_id: &ChurchId) -> Result<Vec<MinistryRecord>, RosterError>;
}

/// Error enumeration for roster provider failures.
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    #[error("church {0} not found")]
    UnknownChurch(ChurchId),
    #[error("roster unavailable: {0}")]
    Unavailable(String),
}

/// Destination for finished analyses (storage, dashboards, notifications).
pub trait ProfileSink: Send + Sync {
    fn store(&self, church_id: &ChurchId, analysis: &LeadershipAnalysis) -> Result<(), SinkError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("profile sink unavailable: {0}")]
    Unavailable(String),
}
