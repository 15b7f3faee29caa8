//! Courtside CLI
//!
//! Predict basketball matchups and player outlooks from recent statistics.

use clap::{Parser, Subcommand};
use courtside::{Config, Result};

#[derive(Parser)]
#[command(name = "courtside")]
#[command(about = "Basketball matchup prediction from weighted team factors", long_about = None)]
struct Cli {
    /// Config file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Predict a matchup
    Predict {
        /// Home team name
        home: String,
        /// Away team name
        away: String,
        /// Stats snapshot (JSON); historical averages are used without one
        #[arg(long)]
        stats: Option<String>,
        /// Unavailable player as side:name[:impact], e.g. away:Klay Thompson:medium
        #[arg(long = "out")]
        out: Vec<String>,
        /// Key player whose recent form feeds the prediction (repeatable)
        #[arg(long = "key-player")]
        key_players: Vec<String>,
        /// Output format
        #[arg(long, default_value = "table")]
        format: OutputFormat,
        /// Write the full report as JSON
        #[arg(long)]
        save: Option<String>,
    },
    /// Project a player's next game
    Player {
        /// Player name
        name: String,
        /// Stats snapshot (JSON)
        #[arg(long)]
        stats: String,
        /// Output format
        #[arg(long, default_value = "table")]
        format: OutputFormat,
    },
    /// List teams with historical fallback data
    Teams,
    /// Write a default config file
    Init,
}

#[derive(Clone, Debug)]
enum OutputFormat {
    Table,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}. Use table or json.", s)),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();

    // Load or create config
    let config = if std::path::Path::new(&cli.config).exists() {
        match Config::load(&cli.config) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        Config::default()
    };

    let result = match cli.command {
        Commands::Predict {
            home,
            away,
            stats,
            out,
            key_players,
            format,
            save,
        } => commands::predict(&config, &home, &away, stats, &out, &key_players, format, save),
        Commands::Player {
            name,
            stats,
            format,
        } => commands::player(&config, &name, &stats, format),
        Commands::Teams => commands::teams(),
        Commands::Init => commands::init(&cli.config),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

mod commands {
    use super::*;
    use courtside::data::{
        EmptyProvider, FallbackProvider, FallbackStore, InMemoryProvider, StatsProvider,
        StatsSnapshot, TeamDirectory,
    };
    use courtside::predict::report::{format_performance, format_report};
    use courtside::predict::{AvailabilityReport, ImpactLevel, MatchupAnalyzer, PlayerStatus};
    use courtside::{CourtsideError, Side};

    pub fn init(config_path: &str) -> Result<()> {
        let config = Config::default();
        config.save(config_path)?;
        println!("Created default config at {}", config_path);

        println!("\nNext steps:");
        println!("  1. Edit {} to tune factor weights", config_path);
        println!("  2. Run 'courtside predict \"Lakers\" \"Warriors\"' for a matchup");
        println!("  3. Pass --stats snapshot.json to use recent game logs");

        Ok(())
    }

    #[allow(clippy::too_many_arguments)]
    pub fn predict(
        config: &Config,
        home: &str,
        away: &str,
        stats: Option<String>,
        out: &[String],
        key_players: &[String],
        format: OutputFormat,
        save: Option<String>,
    ) -> Result<()> {
        let availability = parse_unavailable(out)?;
        let key_players: Vec<&str> = key_players.iter().map(String::as_str).collect();

        let report = match stats {
            Some(path) => {
                let snapshot = StatsSnapshot::load(&path)?;
                let provider = InMemoryProvider::new(snapshot, TeamDirectory::nba());
                analyze(
                    FallbackProvider::new(provider, FallbackStore::new()),
                    config,
                    home,
                    away,
                    &availability,
                    &key_players,
                )?
            }
            None => analyze(
                FallbackProvider::new(EmptyProvider, FallbackStore::new()),
                config,
                home,
                away,
                &availability,
                &key_players,
            )?,
        };

        match format {
            OutputFormat::Table => print!("{}", format_report(&report)),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        }

        if let Some(path) = save {
            report.save(&path)?;
            println!("Saved analysis to {}", path);
        }

        Ok(())
    }

    fn analyze<P: StatsProvider>(
        provider: P,
        config: &Config,
        home: &str,
        away: &str,
        availability: &AvailabilityReport,
        key_players: &[&str],
    ) -> Result<courtside::predict::MatchupReport> {
        let analyzer = MatchupAnalyzer::new(provider, config);
        analyzer.analyze(home, away, Some(availability), key_players)
    }

    pub fn player(config: &Config, name: &str, stats: &str, format: OutputFormat) -> Result<()> {
        let snapshot = StatsSnapshot::load(stats)?;
        let provider = InMemoryProvider::new(snapshot, TeamDirectory::nba());
        let analyzer = MatchupAnalyzer::new(provider, config);

        let prediction = analyzer.analyze_player(name)?;
        match format {
            OutputFormat::Table => print!("{}", format_performance(&prediction)),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&prediction)?),
        }

        Ok(())
    }

    pub fn teams() -> Result<()> {
        let store = FallbackStore::new();

        println!("Historical fallback data");
        println!("───────────────────────────────────────────────────────────");
        println!("  {:<26} {:>5} {:>7} {:>7} {:>6} {:>6}", "Team", "W-L", "PPG", "Opp", "FG%", "3P%");
        for team in store.teams() {
            println!(
                "  {:<26} {:>5} {:>7.1} {:>7.1} {:>6.1} {:>6.1}",
                team.team_name,
                format!("{}-{}", team.wins, team.losses),
                team.avg_points_scored.unwrap_or_default(),
                team.avg_points_allowed.unwrap_or_default(),
                team.avg_fg_pct.unwrap_or_default(),
                team.avg_fg3_pct.unwrap_or_default(),
            );
        }
        println!("\nOther teams use league averages.");

        Ok(())
    }

    /// Parse `side:name[:impact]` entries
    fn parse_unavailable(entries: &[String]) -> Result<AvailabilityReport> {
        let mut report = AvailabilityReport::default();

        for entry in entries {
            let mut parts = entry.splitn(3, ':');
            let side: Side = parts.next().unwrap_or_default().trim().parse()?;
            let name = parts.next().map(str::trim).unwrap_or_default();
            if name.is_empty() {
                return Err(CourtsideError::Parse(format!(
                    "Expected side:name[:impact], got '{}'",
                    entry
                )));
            }

            let impact = match parts.next() {
                Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                    log::warn!("Unknown impact '{}' for {}, assuming medium", raw, name);
                    ImpactLevel::Medium
                }),
                None => ImpactLevel::Medium,
            };

            report.push(side, PlayerStatus::out(name, impact));
        }

        Ok(report)
    }
}
