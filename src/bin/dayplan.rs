use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::{arg, ArgMatches, Command};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use u_dayplan::generator::{generate_activities, GeneratorConfig};
use u_dayplan::harness::{HarnessConfig, SolveHarness};
use u_dayplan::import::{from_json_file, parse_entry, to_json_string};
use u_dayplan::report::{render_result, render_table, timeout_message};
use u_dayplan::select::DEFAULT_SATISFACTION_RATIO;
use u_dayplan::telemetry::init_tracing;
use u_dayplan::{Activity, PlanError, SelectConfig};

fn cli() -> Command {
    Command::new("dayplan")
        .about("Chooses the activities that fit a time budget with the highest total priority")
        .arg_required_else_help(true)
        .subcommand(
            Command::new("solve")
                .about("Selects activities for a time budget")
                .arg(
                    arg!(--budget <MINUTES> "Total time available")
                        .value_parser(clap::value_parser!(i64))
                        .required(true),
                )
                .arg(
                    arg!(--input <PATH> "JSON activity file (repeatable)")
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(clap::ArgAction::Append)
                        .required(false),
                )
                .arg(
                    arg!(--activity <ENTRY> "Activity as name:duration:priority (repeatable)")
                        .value_parser(clap::value_parser!(String))
                        .action(clap::ArgAction::Append)
                        .required(false),
                )
                .arg(
                    arg!(--"timeout-secs" [SECS] "Give up after this many seconds")
                        .default_value("3600")
                        .value_parser(clap::value_parser!(u64)),
                )
                .arg(
                    arg!(--satisfaction [RATIO] "Stop improving once this share of the total priority is reached")
                        .default_value("0.8")
                        .value_parser(clap::value_parser!(f64)),
                )
                .arg(arg!(--json "Print the result as JSON")),
        )
        .subcommand(
            Command::new("generate")
                .about("Prints a random JSON activity file")
                .arg(
                    arg!(--count [N] "Number of activities")
                        .default_value("20")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    arg!(--seed [SEED] "Random seed")
                        .default_value("42")
                        .value_parser(clap::value_parser!(u64)),
                ),
        )
}

fn main() {
    init_tracing();
    let matches = cli().get_matches();

    let outcome = match matches.subcommand() {
        Some(("solve", sub)) => solve(sub),
        Some(("generate", sub)) => generate(sub),
        _ => Err(anyhow::anyhow!("unknown command")),
    };

    if let Err(e) = outcome {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn collect_activities(matches: &ArgMatches) -> Result<Vec<Activity>> {
    let mut activities = Vec::new();

    if let Some(paths) = matches.get_many::<PathBuf>("input") {
        for path in paths {
            let report = from_json_file(path)?;
            if report.skipped > 0 {
                info!(
                    path = %path.display(),
                    skipped = report.skipped,
                    "skipped malformed activity records"
                );
            }
            activities.extend(report.activities);
        }
    }

    if let Some(entries) = matches.get_many::<String>("activity") {
        for entry in entries {
            let activity = parse_entry(entry).with_context(|| {
                format!("activity {entry:?}: expected name:duration(>0):priority(1-10)")
            })?;
            activities.push(activity);
        }
    }

    Ok(activities)
}

fn solve(matches: &ArgMatches) -> Result<()> {
    let budget = *matches.get_one::<i64>("budget").context("--budget is required")?;
    if budget <= 0 {
        bail!("total time must be a number greater than 0");
    }

    let activities = collect_activities(matches)?;
    if activities.is_empty() {
        bail!("no activities given; use --input or --activity");
    }

    let timeout = Duration::from_secs(*matches.get_one::<u64>("timeout-secs").unwrap_or(&3600));
    let ratio = *matches
        .get_one::<f64>("satisfaction")
        .unwrap_or(&DEFAULT_SATISFACTION_RATIO);
    let harness = SolveHarness::new(
        HarnessConfig::default()
            .with_timeout(timeout)
            .with_select(SelectConfig::default().with_satisfaction_ratio(ratio)),
    );

    let as_json = matches.get_flag("json");
    if !as_json {
        println!("Activities");
        print!("{}", render_table(&activities));
        println!();
    }

    let timed = match harness.run(activities, budget) {
        Ok(timed) => timed,
        Err(PlanError::Timeout(limit)) => bail!(timeout_message(limit)),
        Err(e) => return Err(e.into()),
    };

    if as_json {
        let out = serde_json::json!({
            "selection": timed.result.selection,
            "score": timed.result.score,
            "time_used": timed.result.time_used,
            "satisfied": timed.result.is_satisfied(),
            "elapsed_ms": timed.elapsed.as_secs_f64() * 1000.0,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("Schedule");
        print!("{}", render_result(&timed));
    }
    Ok(())
}

fn generate(matches: &ArgMatches) -> Result<()> {
    let count = *matches.get_one::<usize>("count").unwrap_or(&20);
    let seed = *matches.get_one::<u64>("seed").unwrap_or(&42);

    let config = GeneratorConfig::default().with_count(count);
    let activities = generate_activities(&config, &mut StdRng::seed_from_u64(seed));
    println!("{}", to_json_string(&activities)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_is_consistent() {
        cli().debug_assert();
    }

    #[test]
    fn test_collect_activities_from_entries() {
        let matches = cli().get_matches_from([
            "dayplan",
            "solve",
            "--budget",
            "60",
            "--activity",
            "Gym:45:7",
            "--activity",
            "Read:30:5",
        ]);
        let (_, sub) = matches.subcommand().unwrap();
        let acts = collect_activities(sub).unwrap();
        assert_eq!(acts, vec![Activity::new("Gym", 45, 7), Activity::new("Read", 30, 5)]);
    }

    #[test]
    fn test_collect_activities_rejects_bad_entry() {
        let matches = cli().get_matches_from([
            "dayplan",
            "solve",
            "--budget",
            "60",
            "--activity",
            "Gym:0:7",
        ]);
        let (_, sub) = matches.subcommand().unwrap();
        assert!(collect_activities(sub).is_err());
    }
}
