use std::sync::Arc;

use super::common::*;
use crate::workflows::leadership::domain::{ChurchId, MemberId};
use crate::workflows::leadership::roster::repository::{RosterError, SinkError};
use crate::workflows::leadership::{
    AnalysisRequest, LeadershipConfig, LeadershipService, LeadershipServiceError,
};

fn request() -> AnalysisRequest {
    AnalysisRequest {
        today: Some(today()),
        ..AnalysisRequest::default()
    }
}

#[test]
fn analyze_prefilters_on_self_assessed_leadership() {
    let (service, _) = build_service();

    let analysis = service.analyze(&church(), request()).expect("analysis runs");

    // The zero-profile member never reaches the analyzer.
    assert_eq!(analysis.summary.total_candidates_analyzed, 3);
    assert_eq!(analysis.summary.qualified_leaders, 3);
}

#[test]
fn default_prefilter_drops_every_ten_point_profile() {
    let sink = Arc::new(MemorySink::default());
    let service = LeadershipService::new(
        Arc::new(MemoryRoster::new(congregation(), ministries())),
        sink,
        LeadershipConfig::default(),
    );

    let analysis = service.analyze(&church(), request()).expect("analysis runs");
    assert_eq!(analysis.summary.total_candidates_analyzed, 0);
    assert!(analysis.profiles.is_empty());
}

#[test]
fn analyze_stores_results_in_the_sink() {
    let (service, sink) = build_service();

    let analysis = service.analyze(&church(), request()).expect("analysis runs");

    let stored = sink.stored();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].0, church());
    assert_eq!(stored[0].1, analysis);
}

#[test]
fn request_threshold_overrides_configuration() {
    let (service, _) = build_service();

    let analysis = service
        .analyze(
            &church(),
            AnalysisRequest {
                min_leadership_score: Some(90.0),
                ..request()
            },
        )
        .expect("analysis runs");

    assert_eq!(analysis.profiles.len(), 1);
    assert_eq!(
        analysis.profiles[0].member_id,
        MemberId("m-director".to_string())
    );
}

#[test]
fn targeted_analysis_lifts_the_prefilter() {
    let (service, _) = build_service();

    let analysis = service
        .analyze(
            &church(),
            AnalysisRequest {
                target_member_id: Some(MemberId("m-boundary".to_string())),
                min_leadership_score: Some(0.0),
                ..request()
            },
        )
        .expect("analysis runs");

    assert_eq!(analysis.summary.total_candidates_analyzed, 1);
    assert_eq!(analysis.profiles[0].leadership_score, 7.0);
}

#[test]
fn targeted_analysis_reports_unknown_members() {
    let (service, sink) = build_service();

    match service.analyze(
        &church(),
        AnalysisRequest {
            target_member_id: Some(MemberId("m-ghost".to_string())),
            ..request()
        },
    ) {
        Err(LeadershipServiceError::MemberNotFound(member_id)) => {
            assert_eq!(member_id, MemberId("m-ghost".to_string()));
        }
        other => panic!("expected missing member, got {other:?}"),
    }
    assert!(sink.stored().is_empty());
}

#[test]
fn unknown_church_propagates_roster_error() {
    let (service, _) = build_service();

    let err = service
        .analyze(&ChurchId("iglesia-norte".to_string()), request())
        .expect_err("church is not in the roster");
    assert!(matches!(
        err,
        LeadershipServiceError::Roster(RosterError::UnknownChurch(_))
    ));
}

#[test]
fn sink_failures_surface_to_the_caller() {
    let service = LeadershipService::new(
        Arc::new(MemoryRoster::new(congregation(), ministries())),
        Arc::new(OfflineSink),
        service_config(),
    );

    let err = service
        .analyze(&church(), request())
        .expect_err("sink is offline");
    assert!(matches!(
        err,
        LeadershipServiceError::Sink(SinkError::Unavailable(_))
    ));
}

#[test]
fn metrics_cover_the_whole_congregation() {
    let (service, _) = build_service();

    let report = service.metrics(&church()).expect("metrics compute");
    assert_eq!(report.development_metrics.total_members, 4);
    assert_eq!(report.development_metrics.potential_leaders, 0);
    assert!(report.recommendations.expand_mentoring);
}

#[test]
fn missing_date_defaults_to_the_local_calendar() {
    let (service, _) = build_service();

    let analysis = service
        .analyze(&church(), AnalysisRequest::default())
        .expect("analysis runs");
    let local_today = chrono::Local::now().date_naive();
    assert!(analysis
        .profiles
        .iter()
        .all(|profile| profile.next_review_date > local_today));
}
