//! Leadership development pipeline: scores members on seven weighted factors, classifies
//! their potential and readiness, matches them to open leadership roles, and lays out a
//! dated development path for each qualified candidate.

pub mod analysis;
pub mod catalog;
pub mod classifier;
pub mod config;
pub mod development;
pub mod domain;
pub mod opportunities;
pub mod roster;
pub mod router;
pub mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use analysis::{
    AnalysisOptions, AnalysisSummary, DevelopmentMetrics, DevelopmentPriority,
    LeadershipAnalysis, LeadershipAnalyzer, LeadershipInsights, LeadershipProfile,
    MentorAvailability, PipelineRecommendations, PipelineReport, SuccessionCandidate,
    DEFAULT_MIN_LEADERSHIP_SCORE,
};
pub use catalog::LeadershipCatalog;
pub use config::LeadershipConfig;
pub use development::{DevelopmentMilestone, DevelopmentResource, MilestoneStatus};
pub use domain::{
    ChurchId, LeadershipLevel, LeadershipPotential, LeadershipReadiness, MemberId,
    MemberRecord, MentoringCapability, MinistryId, MinistryRecord, MinistryVolunteer, Roster,
    Urgency,
};
pub use opportunities::LeadershipOpportunity;
pub use roster::import::{RosterImportError, RosterImporter};
pub use roster::repository::{ProfileSink, RosterError, RosterFilter, RosterProvider, SinkError};
pub use roster::{RosterGuard, RosterSubmission, RosterViolation};
pub use router::leadership_router;
pub use scoring::{FactorBreakdown, FactorScore, LeadershipFactor};
pub use service::{AnalysisRequest, LeadershipService, LeadershipServiceError};
