use std::collections::HashMap;
use std::sync::Arc;

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::analysis::{AnalysisOptions, LeadershipAnalysis, LeadershipAnalyzer, PipelineReport};
use super::config::LeadershipConfig;
use super::domain::{ChurchId, MemberId};
use super::roster::repository::{
    ProfileSink, RosterError, RosterFilter, RosterProvider, SinkError,
};

/// Caller-supplied knobs for a single analysis run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    #[serde(default)]
    pub target_member_id: Option<MemberId>,
    #[serde(default)]
    pub min_leadership_score: Option<f64>,
    #[serde(default)]
    pub today: Option<NaiveDate>,
    #[serde(default)]
    pub current_mentees: HashMap<MemberId, u32>,
}

/// Service composing the roster provider, analyzer, and result sink.
pub struct LeadershipService<R, S> {
    roster: Arc<R>,
    sink: Arc<S>,
    analyzer: Arc<LeadershipAnalyzer>,
    config: LeadershipConfig,
}

impl<R, S> LeadershipService<R, S>
where
    R: RosterProvider + 'static,
    S: ProfileSink + 'static,
{
    pub fn new(roster: Arc<R>, sink: Arc<S>, config: LeadershipConfig) -> Self {
        Self::with_analyzer(roster, sink, LeadershipAnalyzer::standard(), config)
    }

    pub fn with_analyzer(
        roster: Arc<R>,
        sink: Arc<S>,
        analyzer: LeadershipAnalyzer,
        config: LeadershipConfig,
    ) -> Self {
        Self {
            roster,
            sink,
            analyzer: Arc::new(analyzer),
            config,
        }
    }

    pub fn config(&self) -> &LeadershipConfig {
        &self.config
    }

    /// Analyze a church roster (or a single member) and hand the result to the sink.
    pub fn analyze(
        &self,
        church_id: &ChurchId,
        request: AnalysisRequest,
    ) -> Result<LeadershipAnalysis, LeadershipServiceError> {
        let AnalysisRequest {
            target_member_id,
            min_leadership_score,
            today,
            current_mentees,
        } = request;

        let filter = match &target_member_id {
            Some(member_id) => RosterFilter::member(member_id.clone()),
            None => RosterFilter::prefiltered(self.config.profile_prefilter_score),
        };

        let members = self.roster.members(church_id, &filter)?;
        if let Some(member_id) = target_member_id {
            if members.is_empty() {
                return Err(LeadershipServiceError::MemberNotFound(member_id));
            }
        }
        let ministries = self.roster.ministries(church_id)?;

        let today = today.unwrap_or_else(|| Local::now().date_naive());
        let options = AnalysisOptions::new(today)
            .with_min_score(
                min_leadership_score.unwrap_or(self.config.min_leadership_score),
            )
            .with_current_mentees(current_mentees);

        info!(
            church = %church_id,
            candidates = members.len(),
            ministries = ministries.len(),
            "starting leadership development analysis"
        );

        let analysis = self.analyzer.analyze_church(&members, &ministries, &options);
        self.sink.store(church_id, &analysis)?;

        info!(
            church = %church_id,
            qualified = analysis.summary.qualified_leaders,
            high_potential = analysis.summary.high_potential,
            "leadership development analysis stored"
        );

        Ok(analysis)
    }

    /// Pipeline headcounts over every active member of the church.
    pub fn metrics(&self, church_id: &ChurchId) -> Result<PipelineReport, LeadershipServiceError> {
        let members = self.roster.members(church_id, &RosterFilter::all())?;
        Ok(PipelineReport::from_members(&members))
    }
}

/// Error raised by the leadership service.
#[derive(Debug, thiserror::Error)]
pub enum LeadershipServiceError {
    #[error("member {0} not found")]
    MemberNotFound(MemberId),
    #[error(transparent)]
    Roster(#[from] RosterError),
    #[error(transparent)]
    Sink(#[from] SinkError),
}
