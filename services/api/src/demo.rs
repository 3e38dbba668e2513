use crate::infra::{InMemoryProfileSink, InMemoryRosterProvider};
use chrono::{Local, NaiveDate};
use clap::Args;
use flock_ai::config::AppConfig;
use flock_ai::error::AppError;
use flock_ai::telemetry::{self, LogSink};
use flock_ai::workflows::leadership::{
    AnalysisRequest, ChurchId, LeadershipAnalysis, LeadershipConfig, LeadershipProfile,
    LeadershipService, MemberId, PipelineReport, Roster, RosterImportError, RosterImporter,
};
use serde::Serialize;
use std::collections::HashMap;
use std::io::Cursor;
use std::path::PathBuf;
use std::sync::Arc;

const DEMO_ROSTER: &str = include_str!("../data/demo_roster.json");
pub(crate) const DEMO_CHURCH: &str = "iglesia-demo";

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Override the analysis date (defaults to today).
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Minimum leadership score for a profile to be reported.
    #[arg(long)]
    pub(crate) min_score: Option<f64>,
    /// Print the analysis as JSON instead of a text report.
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default, Clone)]
pub(crate) struct RosterSource {
    /// JSON roster export with `members` and `ministries` arrays.
    #[arg(long, conflicts_with_all = ["members_csv", "ministries_csv"])]
    pub(crate) roster: Option<PathBuf>,
    /// Member CSV export (used together with --ministries-csv).
    #[arg(long, requires = "ministries_csv")]
    pub(crate) members_csv: Option<PathBuf>,
    /// Ministry CSV export (used together with --members-csv).
    #[arg(long, requires = "members_csv")]
    pub(crate) ministries_csv: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct LeadershipAnalyzeArgs {
    #[command(flatten)]
    pub(crate) source: RosterSource,
    /// Church identifier the roster belongs to.
    #[arg(long, default_value = DEMO_CHURCH)]
    pub(crate) church: String,
    /// Analysis date (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Minimum leadership score for a profile to be reported.
    #[arg(long)]
    pub(crate) min_score: Option<f64>,
    /// Self-assessed score a member needs before being analyzed.
    #[arg(long)]
    pub(crate) prefilter_score: Option<f64>,
    /// Analyze a single member regardless of the prefilter.
    #[arg(long)]
    pub(crate) member: Option<String>,
    /// Current mentee count for a member, as MEMBER_ID=COUNT. Repeatable.
    #[arg(long = "mentees", value_parser = crate::infra::parse_mentee_count)]
    pub(crate) mentees: Vec<(MemberId, u32)>,
    /// Print the analysis as JSON instead of a text report.
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct LeadershipMetricsArgs {
    #[command(flatten)]
    pub(crate) source: RosterSource,
    /// Print the report as JSON instead of text.
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn demo_roster() -> Result<Roster, RosterImportError> {
    RosterImporter::from_json_reader(Cursor::new(DEMO_ROSTER))
}

impl RosterSource {
    pub(crate) fn is_bundled(&self) -> bool {
        self.roster.is_none() && self.members_csv.is_none()
    }

    /// An explicit override wins; the bundled congregation records 0-10 self-assessments,
    /// so it is analyzed without a prefilter.
    pub(crate) fn prefilter_score(&self, config: &LeadershipConfig, requested: Option<f64>) -> f64 {
        match requested {
            Some(prefilter) => prefilter,
            None if self.is_bundled() => 0.0,
            None => config.profile_prefilter_score,
        }
    }
}

pub(crate) fn load_roster(source: &RosterSource) -> Result<Roster, AppError> {
    let roster = match (&source.roster, &source.members_csv, &source.ministries_csv) {
        (Some(path), _, _) => RosterImporter::from_json_path(path)?,
        (None, Some(members), Some(ministries)) => {
            RosterImporter::from_csv_paths(members, ministries)?
        }
        _ => demo_roster()?,
    };
    Ok(roster)
}

fn cli_config() -> Result<AppConfig, AppError> {
    let config = AppConfig::load()?;
    telemetry::init_with(&config.telemetry, LogSink::Stderr)?;
    Ok(config)
}

fn in_memory_service(
    church_id: &ChurchId,
    roster: Roster,
    config: LeadershipConfig,
) -> LeadershipService<InMemoryRosterProvider, InMemoryProfileSink> {
    LeadershipService::new(
        Arc::new(InMemoryRosterProvider::with_roster(church_id.clone(), roster)),
        Arc::new(InMemoryProfileSink::default()),
        config,
    )
}

pub(crate) fn run_leadership_analyze(args: LeadershipAnalyzeArgs) -> Result<(), AppError> {
    let config = cli_config()?.leadership;
    let json = args.json;
    let church_id = ChurchId(args.church.clone());
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    let analysis = analyze_roster(args, config, today)?;

    if json {
        print_json(&analysis);
    } else {
        render_analysis(&church_id, today, &analysis);
    }
    Ok(())
}

fn analyze_roster(
    args: LeadershipAnalyzeArgs,
    mut config: LeadershipConfig,
    today: NaiveDate,
) -> Result<LeadershipAnalysis, AppError> {
    let LeadershipAnalyzeArgs {
        source,
        church,
        min_score,
        prefilter_score,
        member,
        mentees,
        ..
    } = args;

    config.profile_prefilter_score = source.prefilter_score(&config, prefilter_score);

    let church_id = ChurchId(church);
    let service = in_memory_service(&church_id, load_roster(&source)?, config);
    let analysis = service.analyze(
        &church_id,
        AnalysisRequest {
            target_member_id: member.map(MemberId),
            min_leadership_score: min_score,
            today: Some(today),
            current_mentees: mentees.into_iter().collect::<HashMap<_, _>>(),
        },
    )?;
    Ok(analysis)
}

pub(crate) fn run_leadership_metrics(args: LeadershipMetricsArgs) -> Result<(), AppError> {
    let config = cli_config()?.leadership;
    let church_id = ChurchId(DEMO_CHURCH.to_string());
    let service = in_memory_service(&church_id, load_roster(&args.source)?, config);
    let report = service.metrics(&church_id)?;

    if args.json {
        print_json(&report);
    } else {
        render_pipeline(&report);
    }
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        today,
        min_score,
        json,
    } = args;

    let mut config = cli_config()?.leadership;
    config.profile_prefilter_score = RosterSource::default().prefilter_score(&config, None);

    let church_id = ChurchId(DEMO_CHURCH.to_string());
    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let service = in_memory_service(&church_id, demo_roster()?, config);
    let analysis = service.analyze(
        &church_id,
        AnalysisRequest {
            min_leadership_score: min_score,
            today: Some(today),
            ..AnalysisRequest::default()
        },
    )?;
    let report = service.metrics(&church_id)?;

    if json {
        print_json(&analysis);
        return Ok(());
    }

    println!("Leadership development demo");
    render_analysis(&church_id, today, &analysis);
    println!();
    render_pipeline(&report);
    Ok(())
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(err) => eprintln!("JSON output unavailable: {err}"),
    }
}

pub(crate) fn render_analysis(church_id: &ChurchId, today: NaiveDate, analysis: &LeadershipAnalysis) {
    let summary = &analysis.summary;
    println!("Church {church_id} | analysis date {today}");
    println!(
        "- {} candidates analyzed | {} qualified | {} high potential",
        summary.total_candidates_analyzed, summary.qualified_leaders, summary.high_potential
    );
    println!(
        "- {} ready now | {} ready in 6 months | average score {}",
        summary.ready_now, summary.ready_6_months, summary.average_leadership_score
    );

    if analysis.profiles.is_empty() {
        println!("\nProfiles: none above the threshold");
    } else {
        println!("\nProfiles");
        for profile in &analysis.profiles {
            render_profile(profile);
        }
    }

    let insights = &analysis.insights;
    if !insights.succession_plan.is_empty() {
        println!("\nSuccession plan");
        for entry in &insights.succession_plan {
            println!(
                "- {} ({}) -> {} [{}]",
                entry.candidate,
                entry.readiness.label(),
                entry.best_fit,
                entry.timeline
            );
        }
    }

    if !insights.development_priorities.is_empty() {
        println!("\nDevelopment priorities");
        for priority in &insights.development_priorities {
            println!(
                "- {}: {} candidate(s)",
                priority.area, priority.affected_candidates
            );
        }
    }

    if insights.mentoring_opportunities.is_empty() {
        println!("\nMentors available: none");
    } else {
        println!("\nMentors available");
        for mentor in &insights.mentoring_opportunities {
            println!(
                "- {}: {}/{} mentees | {} open slot(s)",
                mentor.mentor_name, mentor.current_mentees, mentor.capacity, mentor.available
            );
        }
    }
}

fn render_profile(profile: &LeadershipProfile) {
    println!(
        "- {} ({}) | score {:.1} | {} potential | {} | review {}",
        profile.member_name,
        profile.current_role,
        profile.leadership_score,
        profile.leadership_potential.label(),
        profile.leadership_readiness.label(),
        profile.next_review_date
    );
    if !profile.strong_suits.is_empty() {
        println!("    strengths: {}", profile.strong_suits.join(", "));
    }
    if !profile.development_areas.is_empty() {
        println!("    growth areas: {}", profile.development_areas.join(", "));
    }
    for position in profile.recommended_positions.iter().take(3) {
        println!(
            "    fit: {} ({}) | match {:.1} | {} urgency",
            position.title,
            position.ministry_area,
            position.match_score,
            position.urgency.label()
        );
    }
    println!(
        "    mentoring: {} | capacity {} | {} milestone(s) planned",
        profile.mentoring_capability.label(),
        profile.max_mentee_capacity,
        profile.development_path.len()
    );
}

pub(crate) fn render_pipeline(report: &PipelineReport) {
    let metrics = &report.development_metrics;
    println!("Leadership pipeline");
    println!(
        "- {} members | {} potential leaders | {} current leaders",
        metrics.total_members, metrics.potential_leaders, metrics.current_leaders
    );
    println!(
        "- pipeline {} | leadership ratio {}% | development opportunity {}%",
        metrics.leadership_pipeline, metrics.leadership_ratio, metrics.development_opportunity
    );

    let recommendations = &report.recommendations;
    let flags = [
        (recommendations.focus_on_development, "Focus on development"),
        (recommendations.expand_mentoring, "Expand mentoring"),
        (recommendations.succession_planning, "Start succession planning"),
    ];
    for (_, label) in flags.iter().filter(|(enabled, _)| *enabled) {
        println!("- {label}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flock_ai::workflows::leadership::{LeadershipPotential, LeadershipReadiness, Urgency};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 10, 1).expect("valid date")
    }

    fn demo_service() -> LeadershipService<InMemoryRosterProvider, InMemoryProfileSink> {
        in_memory_service(
            &ChurchId(DEMO_CHURCH.to_string()),
            demo_roster().expect("demo roster loads"),
            LeadershipConfig {
                profile_prefilter_score: 0.0,
                ..LeadershipConfig::default()
            },
        )
    }

    #[test]
    fn demo_roster_links_volunteers_to_members() {
        let roster = demo_roster().expect("demo roster loads");
        assert_eq!(roster.members.len(), 6);
        assert_eq!(roster.ministries.len(), 4);

        let youth = &roster.ministries[0];
        assert_eq!(youth.volunteers[0].leadership_score, Some(9.0));
        assert_eq!(youth.volunteers[5].leadership_score, None);
    }

    #[test]
    fn demo_analysis_ranks_the_bundled_congregation() {
        let analysis = demo_service()
            .analyze(
                &ChurchId(DEMO_CHURCH.to_string()),
                AnalysisRequest {
                    today: Some(today()),
                    ..AnalysisRequest::default()
                },
            )
            .expect("analysis runs");

        // Elena has no spiritual profile.
        assert_eq!(analysis.summary.total_candidates_analyzed, 5);

        let ana = &analysis.profiles[0];
        assert_eq!(ana.member_name, "Ana Morales");
        assert_eq!(ana.leadership_score, 88.0);
        assert_eq!(ana.leadership_potential, LeadershipPotential::High);
        assert_eq!(ana.leadership_readiness, LeadershipReadiness::ReadyNow);

        let jorge = &analysis.profiles[1];
        assert_eq!(jorge.member_name, "Jorge Luna");
        assert_eq!(jorge.leadership_score, 83.0);

        let music = ana
            .recommended_positions
            .iter()
            .find(|position| position.position_id == "leader-min-music")
            .expect("music ministry has no volunteers");
        assert_eq!(music.urgency, Urgency::Immediate);
        assert!(ana
            .recommended_positions
            .iter()
            .all(|position| position.position_id != "leader-min-kids"));
    }

    #[test]
    fn pipeline_counts_self_assessments_on_their_own_scale() {
        let report = demo_service()
            .metrics(&ChurchId(DEMO_CHURCH.to_string()))
            .expect("metrics compute");

        assert_eq!(report.development_metrics.total_members, 6);
        assert_eq!(report.development_metrics.potential_leaders, 0);
        assert!(report.recommendations.expand_mentoring);
    }

    fn analyze_args(source: RosterSource) -> LeadershipAnalyzeArgs {
        LeadershipAnalyzeArgs {
            source,
            church: DEMO_CHURCH.to_string(),
            today: None,
            min_score: None,
            prefilter_score: None,
            member: None,
            mentees: Vec::new(),
            json: false,
        }
    }

    #[test]
    fn analyze_reports_the_bundled_roster_under_default_configuration() {
        let analysis = analyze_roster(
            analyze_args(RosterSource::default()),
            LeadershipConfig::default(),
            today(),
        )
        .expect("analysis runs");

        assert_eq!(analysis.summary.total_candidates_analyzed, 5);
        assert_eq!(analysis.profiles[0].member_name, "Ana Morales");
    }

    #[test]
    fn explicit_prefilter_overrides_the_bundled_default() {
        let args = LeadershipAnalyzeArgs {
            prefilter_score: Some(9.0),
            ..analyze_args(RosterSource::default())
        };
        let analysis =
            analyze_roster(args, LeadershipConfig::default(), today()).expect("analysis runs");

        // Only Ana (9) and Jorge (10) self-assess at 9 or above.
        assert_eq!(analysis.summary.total_candidates_analyzed, 2);
    }

    #[test]
    fn exported_rosters_keep_the_configured_prefilter() {
        let source = RosterSource {
            roster: Some(PathBuf::from("roster.json")),
            ..RosterSource::default()
        };
        let config = LeadershipConfig::default();
        assert_eq!(
            source.prefilter_score(&config, None),
            config.profile_prefilter_score
        );
        assert!(RosterSource::default().is_bundled());
        assert!(!source.is_bundled());
    }

    #[test]
    fn missing_sources_fall_back_to_the_demo_roster() {
        let roster = load_roster(&RosterSource::default()).expect("demo roster loads");
        assert_eq!(roster.members[0].name, "Ana Morales");
    }

    #[test]
    fn unreadable_roster_path_is_reported() {
        let source = RosterSource {
            roster: Some(PathBuf::from("/nonexistent/roster.json")),
            ..RosterSource::default()
        };
        let err = load_roster(&source).expect_err("file is missing");
        assert!(matches!(err, AppError::Roster(RosterImportError::Io(_))));
    }
}
