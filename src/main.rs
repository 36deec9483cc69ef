use std::fs;

use match_insights::{
    derive_timeline, normalize, AnalyticsConfig, AppError, ImpactScorer, LadderCaps, MatchRecord,
    RankedSnapshot, TeamRoster, TimelineFrame,
};
use serde::Deserialize;
use serde_json::Value;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const USAGE: &str = "match_insights <impact|ladder|timeline> <input.json> [caps.json]";

#[derive(Debug, Deserialize)]
struct TimelineInput {
    roster: TeamRoster,
    frames: Vec<TimelineFrame>,
}

fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "match_insights=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if let Err(err) = run(&args) {
        error!(%err, "match_insights failed");
        std::process::exit(1);
    }
}

fn run(args: &[String]) -> Result<(), AppError> {
    let (command, input) = match args {
        [command, input, ..] => (command.as_str(), input),
        _ => return Err(AppError::Usage(USAGE.to_string())),
    };

    let config = AnalyticsConfig::new();
    let raw = fs::read_to_string(input)?;
    info!(command, input = %input, "Deriving match analytics");

    let output: Value = match command {
        "impact" => {
            let record: MatchRecord = serde_json::from_str(&raw)?;
            serde_json::to_value(ImpactScorer::default().score_match(&record)?)?
        }
        "ladder" => {
            let snapshots: Vec<RankedSnapshot> = serde_json::from_str(&raw)?;
            let prior = match args.get(2) {
                Some(caps_path) => serde_json::from_str(&fs::read_to_string(caps_path)?)?,
                None => LadderCaps::default(),
            };
            serde_json::to_value(normalize(&snapshots, prior)?)?
        }
        "timeline" => {
            let timeline: TimelineInput = serde_json::from_str(&raw)?;
            serde_json::to_value(derive_timeline(
                &timeline.roster,
                &timeline.frames,
                config.chart_team,
                config.chart_mode,
            )?)?
        }
        other => {
            return Err(AppError::Usage(format!(
                "unknown command '{other}'\n{USAGE}"
            )))
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
