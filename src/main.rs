use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use qb_league::config::AppConfig;
use qb_league::ingest;
use qb_league::models::{Franchise, LeagueSnapshot, TeamWeekScore, WeekResult, WeeklyLineup};
use qb_league::parse_franchise_list;
use qb_league::scoring::{score_breakdown, ScoreBreakdown};
use qb_league::standings::StandingsEngine;
use qb_league::storage::{list_stats_weeks, JsonlStatsStore, LeagueStore, StorageConfig};

#[derive(Parser)]
#[command(name = "qb-league")]
#[command(about = "QB league scoring, results and standings")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "./config.toml")]
    config: String,

    /// Data directory path (overrides the config file)
    #[arg(long)]
    data_dir: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,

    /// Print results as JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Import a week of raw stats, replacing whatever the week held
    ImportStats {
        /// Week number
        #[arg(long)]
        week: u32,

        /// JSONL file with one stat line per franchise
        #[arg(long)]
        file: PathBuf,
    },

    /// Set a team's lineup for a week
    SetLineup {
        /// Team name
        team: String,

        /// Week number
        week: u32,

        /// Comma-separated franchises (e.g., "CHI,NYJ")
        franchises: String,
    },

    /// Lock every lineup set for a week
    LockWeek {
        /// Week number
        week: u32,
    },

    /// Show a team's score for a week
    Score {
        /// Team name
        team: String,

        /// Week number
        week: u32,

        /// Show the per-rule breakdown for each started franchise
        #[arg(long)]
        breakdown: bool,
    },

    /// Show a team's counted matchup for a week
    Matchup {
        /// Team name
        team: String,

        /// Week number
        week: u32,
    },

    /// Show the standings table
    Standings,

    /// Show every team's week-by-week results
    Results,

    /// Show a team's current record
    Record {
        /// Team name
        team: String,
    },

    /// Recompute the score fields stored on matchups
    SyncScores {
        /// Show what would change without writing
        #[arg(long)]
        dry_run: bool,
    },

    /// Show which weeks are scored, counted and locked
    Weeks,
}

#[derive(Serialize)]
struct ScoreReport {
    team: String,
    week: u32,
    #[serde(flatten)]
    score: TeamWeekScore,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    details: Vec<FranchiseBreakdown>,
}

#[derive(Serialize)]
struct FranchiseBreakdown {
    franchise: Franchise,
    #[serde(flatten)]
    breakdown: ScoreBreakdown,
}

#[derive(Serialize)]
struct WeekStatus {
    week: u32,
    scored: bool,
    counted: bool,
    locked: bool,
    stats_file: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load_or_default(&PathBuf::from(&cli.config))?;

    // Initialize tracing; RUST_LOG wins over the flag, the flag over the config
    let log_level = cli.log_level.as_deref().unwrap_or(&config.log_level);
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

    let registry = tracing_subscriber::registry().with(filter);
    if cli.json_logs {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    tracing::info!("Starting qb-league v{}", env!("CARGO_PKG_VERSION"));

    let data_dir = cli
        .data_dir
        .map(PathBuf::from)
        .unwrap_or_else(|| config.data_dir.clone());
    let storage = StorageConfig::new(data_dir);
    let league_store = LeagueStore::new(storage.clone());
    let stats_store = JsonlStatsStore::new(storage.clone());
    let league = &config.league;

    match cli.command {
        Commands::ImportStats { week, file } => {
            let rows = ingest::read_stats_file(&file)?;
            let result = ingest::import_week_stats(&storage, week, league.season_weeks, rows)?;

            if cli.json {
                print_json(&serde_json::json!({
                    "week": result.week,
                    "rows_written": result.rows_written,
                    "rows_replaced": result.rows_replaced,
                }))?;
            } else {
                println!("\n=== Import Results ===");
                println!("Week:             {}", result.week);
                println!("Rows written:     {}", result.rows_written);
                println!("Rows replaced:    {}", result.rows_replaced);
            }
        }
        Commands::SetLineup {
            team,
            week,
            franchises,
        } => {
            let franchises = parse_franchise_list(&franchises)?;
            let lineup = league_store.set_lineup(WeeklyLineup::new(team, week, franchises), league)?;

            if cli.json {
                print_json(&lineup)?;
            } else {
                println!(
                    "Week {} lineup for {}: {}",
                    lineup.week,
                    lineup.team,
                    join_names(&lineup.franchises)
                );
            }
        }
        Commands::LockWeek { week } => {
            if week == 0 || week > league.season_weeks {
                bail!(
                    "Week {} is outside the {}-week season",
                    week,
                    league.season_weeks
                );
            }
            let locked = league_store.lock_week(week)?;
            if cli.json {
                print_json(&serde_json::json!({ "week": week, "locked": locked }))?;
            } else {
                println!("Locked {} week {} lineup(s)", locked, week);
            }
        }
        Commands::Score {
            team,
            week,
            breakdown,
        } => {
            let snapshot = league_store.load_validated(league)?;
            require_team(&snapshot, &team)?;
            let engine = StandingsEngine::new(&snapshot, &stats_store, league.week_range());
            let score = engine.team_week_score(&team, week).await?;

            let mut details = Vec::new();
            if breakdown {
                let stats = engine.week_stats(week).await?;
                for entry in &score.breakdown {
                    if let Some(line) = stats.get(entry.franchise) {
                        details.push(FranchiseBreakdown {
                            franchise: entry.franchise,
                            breakdown: score_breakdown(line),
                        });
                    }
                }
            }

            if cli.json {
                print_json(&ScoreReport {
                    team,
                    week,
                    score,
                    details,
                })?;
            } else {
                print_score(&team, week, &score, &details);
            }
        }
        Commands::Matchup { team, week } => {
            let snapshot = league_store.load_validated(league)?;
            require_team(&snapshot, &team)?;
            let engine = StandingsEngine::new(&snapshot, &stats_store, league.week_range());

            match engine.team_week_matchup_details(&team, week).await? {
                Some(details) if cli.json => print_json(&details)?,
                Some(details) => {
                    println!(
                        "Week {}: {} {} - {} {} ({})",
                        details.week,
                        team,
                        details.team_score,
                        details.opponent_score,
                        details.opponent,
                        details.result
                    );
                    for (label, side) in [
                        (team.as_str(), &details.team_franchises),
                        (details.opponent.as_str(), &details.opponent_franchises),
                    ] {
                        println!("\n{}:", label);
                        for entry in side {
                            println!("  {:<24} {}", entry.franchise.name(), points(entry.score));
                        }
                    }
                }
                None if cli.json => print_json(&serde_json::Value::Null)?,
                None => println!("No counted matchup for {} in week {}", team, week),
            }
        }
        Commands::Standings => {
            let snapshot = league_store.load_validated(league)?;
            let engine = StandingsEngine::new(&snapshot, &stats_store, league.week_range());
            let table = engine.standings().await?;

            if cli.json {
                print_json(&table)?;
            } else {
                println!(
                    "{:>4}  {:<20} {:>8} {:>7}  Results",
                    "Rank", "Team", "Record", "Points"
                );
                for (rank, row) in table.iter().enumerate() {
                    println!(
                        "{:>4}  {:<20} {:>8} {:>7}  {}",
                        rank + 1,
                        row.team,
                        row.record().to_string(),
                        row.total_points,
                        result_codes(&row.results)
                    );
                }
            }
        }
        Commands::Results => {
            let snapshot = league_store.load_validated(league)?;
            let engine = StandingsEngine::new(&snapshot, &stats_store, league.week_range());
            let results = engine.weekly_results().await?;

            if cli.json {
                print_json(&results)?;
            } else {
                for (team, weeks) in &results {
                    println!("{:<20} {}", team, result_codes(weeks));
                }
            }
        }
        Commands::Record { team } => {
            let snapshot = league_store.load_validated(league)?;
            require_team(&snapshot, &team)?;
            let engine = StandingsEngine::new(&snapshot, &stats_store, league.week_range());
            let record = engine.current_record(&team).await?;

            if cli.json {
                print_json(&serde_json::json!({
                    "team": team,
                    "record": record.to_string(),
                    "wins": record.wins,
                    "losses": record.losses,
                    "ties": record.ties,
                    "games": record.games(),
                }))?;
            } else {
                println!("{}: {} ({} games)", team, record, record.games());
            }
        }
        Commands::SyncScores { dry_run } => {
            let snapshot = league_store.load_validated(league)?;
            let engine = StandingsEngine::new(&snapshot, &stats_store, league.week_range());
            let rescored = engine.rescored_matchups().await?;

            let changed = snapshot
                .matchups
                .iter()
                .zip(&rescored)
                .filter(|(old, new)| {
                    (old.team1_score, old.team2_score, &old.winner)
                        != (new.team1_score, new.team2_score, &new.winner)
                })
                .count();

            if !dry_run && changed > 0 {
                league_store.save_matchups(&rescored)?;
            }

            if cli.json {
                print_json(&serde_json::json!({
                    "matchups": rescored.len(),
                    "changed": changed,
                    "dry_run": dry_run,
                }))?;
            } else {
                println!("\n=== Score Sync Results ===");
                println!("Matchups:         {}", rescored.len());
                println!("Changed:          {}", changed);
                if dry_run {
                    println!("\n(dry run - no data written to disk)");
                }
            }
        }
        Commands::Weeks => {
            let snapshot = league_store.load()?;
            let range = league.week_range();
            let engine = StandingsEngine::new(&snapshot, &stats_store, range);
            let files = list_stats_weeks(&storage)?;

            let mut weeks = Vec::new();
            for week in range.season() {
                weeks.push(WeekStatus {
                    week,
                    scored: engine.is_week_scored(week).await?,
                    counted: range.counts(week),
                    locked: league.is_week_locked(week),
                    stats_file: files.contains(&week),
                });
            }

            if cli.json {
                print_json(&weeks)?;
            } else {
                println!("Week  Scored  Counted  Locked");
                for w in &weeks {
                    println!(
                        "{:>4}  {:<6}  {:<7}  {}",
                        w.week,
                        yes_no(w.scored),
                        yes_no(w.counted),
                        yes_no(w.locked)
                    );
                }
            }
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn require_team(snapshot: &LeagueSnapshot, team: &str) -> Result<()> {
    if snapshot.team(team).is_none() {
        bail!("Unknown team: {}", team);
    }
    Ok(())
}

fn print_score(team: &str, week: u32, score: &TeamWeekScore, details: &[FranchiseBreakdown]) {
    if !score.has_lineup() {
        println!("{} set no lineup for week {} (0 points)", team, week);
        return;
    }

    println!("{} week {}: {} points", team, week, score.score);
    for entry in &score.breakdown {
        println!("  {:<24} {}", entry.franchise.name(), points(entry.score));
    }

    for detail in details {
        let b = &detail.breakdown;
        println!("\n{}:", detail.franchise);
        println!("  Pass yards       {:>4}", b.pass_yards);
        println!("  Touchdowns       {:>4}", b.touchdowns);
        println!("  Completion       {:>4}", b.completion);
        println!("  Turnovers        {:>4}", b.turnovers);
        for line in &b.events {
            println!("  {:<16} {:>4}  (x{})", line.event.label(), line.points, line.occurrences);
        }
        println!("  Total            {:>4}", b.total());
    }
}

fn points(score: Option<i32>) -> String {
    score.map_or_else(|| "-".to_string(), |s| s.to_string())
}

fn result_codes(results: &[Option<WeekResult>]) -> String {
    results
        .iter()
        .map(|r| r.map_or("-", WeekResult::code))
        .collect::<Vec<_>>()
        .join(" ")
}

fn join_names(franchises: &[Franchise]) -> String {
    franchises
        .iter()
        .map(|f| f.name())
        .collect::<Vec<_>>()
        .join(", ")
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}
