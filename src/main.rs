use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;

use clubhouse::course::{CourseBook, HOLES};
use clubhouse::fetch::{fetch_society_data, load_course_book, SocietyData};
use clubhouse::output;
use clubhouse::rounds::{
    get_round_book_path, load_round_book, save_round_book, ApiClient, RoundKey, SavedRound,
    LOAD_LIMIT,
};
use clubhouse::scoring::{parse_strokes, score_round, RoundSummary};
use clubhouse::sheets::{
    clear_cache, get_cache_path, CacheConfig, SheetClient, FIXTURES_TAB, HANDICAPS_TAB,
    LEAGUES_TAB,
};
use clubhouse::standings::{league_leader, rank};

// Exit codes
const EXIT_SUCCESS: i32 = 0;
const EXIT_NETWORK: i32 = 2;
const EXIT_CONFIG: i32 = 4;
const EXIT_INPUT: i32 = 5;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score a Stableford round
    Score {
        /// Course name (defaults to the configured default course)
        #[arg(long)]
        course: Option<String>,

        /// Playing handicap; 0 means none entered
        #[arg(long)]
        handicap: u32,

        /// Strokes per hole, e.g. "4,5,3,-,6"; blank, "-" or "x" for unplayed
        #[arg(long)]
        strokes: String,

        /// Player name, required with --save
        #[arg(long)]
        player: Option<String>,

        /// Print the scorecard as JSON
        #[arg(long)]
        json: bool,

        /// Save the round
        #[arg(long)]
        save: bool,

        /// Save to the local round book instead of the scores API
        #[arg(long)]
        local: bool,
    },
    /// List courses, or show one course's pars and stroke indexes
    Courses {
        /// Course to show
        name: Option<String>,
    },
    /// Show both league tables
    Standings,
    /// Show the leader of each league
    Leaders,
    /// Show matches still to be played
    Fixtures,
    /// Show played matches
    Results,
    /// Show the knockout rounds
    Knockout,
    /// Show each player's latest handicap
    Handicaps,
    /// List or delete saved rounds
    Rounds {
        #[command(subcommand)]
        action: RoundsCommand,
    },
    /// Open a sheet tab in the browser
    Open {
        /// Tab name as configured, e.g. "leagues"
        tab: String,
    },
    /// Manage the sheet cache
    Cache {
        #[command(subcommand)]
        action: CacheCommand,
    },
}

#[derive(Subcommand, Debug)]
enum RoundsCommand {
    /// List saved rounds, newest first
    List {
        #[arg(long)]
        player: Option<String>,
        #[arg(long)]
        course: Option<String>,
        /// Read the local round book instead of the scores API
        #[arg(long)]
        local: bool,
    },
    /// Delete a saved round by its number in `rounds list`
    Delete {
        /// Index number of the round (1-based, as shown in list)
        index: usize,
        #[arg(long)]
        player: Option<String>,
        #[arg(long)]
        course: Option<String>,
        #[arg(long)]
        local: bool,
    },
}

#[derive(Subcommand, Debug)]
enum CacheCommand {
    /// Remove all cached sheet downloads
    Clear,
}

#[derive(Parser, Debug)]
#[command(name = "clubhouse")]
#[command(
    about = "Golf society companion: Stableford scores, standings, fixtures",
    long_about = None
)]
#[command(version)]
struct Cli {
    /// More logging (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// No logging at all
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to config file (defaults to ~/.config/clubhouse/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Always download the sheet, bypassing the cache
    #[arg(long, global = true)]
    no_cache: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Serialize)]
struct ScorecardReport<'a> {
    course: &'a str,
    handicap: u32,
    strokes: &'a [u8; HOLES],
    #[serde(flatten)]
    summary: &'a RoundSummary,
}

fn exit_with(code: i32, message: &str, error: anyhow::Error) -> ! {
    eprintln!("{}: {:#}", message, error);
    std::process::exit(code);
}

fn require<T>(data: Option<T>, tab: &str) -> T {
    match data {
        Some(d) => d,
        None => {
            eprintln!("Could not load the {} tab. Check your network connection.", tab);
            std::process::exit(EXIT_NETWORK);
        }
    }
}

async fn fetch_or_exit(client: &SheetClient, tabs: &[&str]) -> SocietyData {
    match fetch_society_data(client, tabs).await {
        Ok(data) => data,
        Err(e) => exit_with(EXIT_NETWORK, "Failed to load the society sheet", e),
    }
}

async fn list_rounds(
    api_url: Option<&str>,
    player: Option<&str>,
    course: Option<&str>,
    local: bool,
) -> Vec<SavedRound> {
    if local {
        match load_round_book(&get_round_book_path()) {
            Ok(book) => book.load(player, course, LOAD_LIMIT),
            Err(e) => exit_with(EXIT_CONFIG, "Round book error", e),
        }
    } else {
        let api = ApiClient::new(api_url)
            .unwrap_or_else(|e| exit_with(EXIT_CONFIG, "Config error", e));
        match api.load_rounds(player, course).await {
            Ok(rounds) => rounds,
            Err(e) => exit_with(EXIT_NETWORK, "Failed to load scores", e),
        }
    }
}

#[tokio::main]
async fn main() {
    // Install rustls crypto provider (required for rustls 0.23+)
    let provider_installed = rustls::crypto::ring::default_provider()
        .install_default()
        .is_ok();

    let cli = Cli::parse();
    let start_time = Instant::now();

    if let Err(e) = clubhouse::logging::setup_logging(cli.verbose, cli.quiet) {
        eprintln!("{:#}", e);
    }
    if !provider_installed {
        tracing::debug!("rustls crypto provider already installed");
    }

    // Load config
    let config_path = cli.config.map(PathBuf::from);
    let config = match clubhouse::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => exit_with(EXIT_CONFIG, "Config error", e),
    };

    let cache_config = if cli.no_cache {
        CacheConfig::disabled()
    } else {
        match clubhouse::config::cache_ttl(&config) {
            Ok(ttl) => CacheConfig::new(true, ttl),
            // Reported by validation below
            Err(_) => CacheConfig::disabled(),
        }
    };
    tracing::info!(
        "cache: {}",
        if cache_config.enabled { "enabled" } else { "disabled" }
    );

    let client = match SheetClient::new(config.sheet.clone(), cache_config) {
        Ok(c) => c,
        Err(e) => exit_with(EXIT_NETWORK, "Failed to create HTTP client", e),
    };

    let courses = match cli.command {
        Commands::Score { .. } | Commands::Courses { .. } => load_course_book(&client).await,
        _ => CourseBook::builtin(),
    };

    // Validate config at startup
    if let Err(errors) = clubhouse::config::validate_config(&config, &courses) {
        eprintln!("Config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    let use_colors = output::should_use_colors();
    let api_url = config.api_url.as_deref();

    match cli.command {
        Commands::Score {
            course,
            handicap,
            strokes,
            player,
            json,
            save,
            local,
        } => {
            let course_name = course.as_deref().unwrap_or(config.default_course());
            let Some(course) = courses.get(course_name) else {
                eprintln!("Unknown course: {} (see `clubhouse courses`)", course_name);
                std::process::exit(EXIT_INPUT);
            };

            let strokes = match parse_strokes(&strokes) {
                Ok(s) => s,
                Err(e) => exit_with(EXIT_INPUT, "Invalid strokes", e),
            };
            let summary = score_round(course, handicap, &strokes);

            if json {
                let report = ScorecardReport {
                    course: &course.name,
                    handicap,
                    strokes: &strokes,
                    summary: &summary,
                };
                match serde_json::to_string_pretty(&report) {
                    Ok(text) => println!("{}", text),
                    Err(e) => exit_with(EXIT_INPUT, "Failed to encode scorecard", e.into()),
                }
            } else {
                println!(
                    "{}",
                    output::format_scorecard(course, handicap, &strokes, &summary, use_colors)
                );
            }

            if save {
                let round = SavedRound::from_summary(
                    player.as_deref().unwrap_or(""),
                    &course.name,
                    handicap,
                    &strokes,
                    &summary,
                )
                .unwrap_or_else(|e| exit_with(EXIT_INPUT, "Cannot save", e));

                if local {
                    let path = get_round_book_path();
                    let mut book = load_round_book(&path)
                        .unwrap_or_else(|e| exit_with(EXIT_CONFIG, "Round book error", e));
                    book.save(round);
                    if let Err(e) = save_round_book(&path, &book) {
                        exit_with(EXIT_CONFIG, "Failed to save round", e);
                    }
                    eprintln!("Score saved to {}", path.display());
                } else {
                    let api = ApiClient::new(api_url)
                        .unwrap_or_else(|e| exit_with(EXIT_CONFIG, "Config error", e));
                    if let Err(e) = api.save_round(&round).await {
                        exit_with(EXIT_NETWORK, "Failed to save score", e);
                    }
                    eprintln!("Score saved successfully!");
                }
            }
        }
        Commands::Courses { name } => match name {
            Some(name) => match courses.get(&name) {
                Some(course) => println!("{}", output::format_course_detail(course)),
                None => {
                    eprintln!("Unknown course: {}", name);
                    std::process::exit(EXIT_INPUT);
                }
            },
            None => println!(
                "{}",
                output::format_course_list(&courses, config.default_course())
            ),
        },
        Commands::Standings => {
            let data = fetch_or_exit(&client, &[LEAGUES_TAB]).await;
            let leagues = require(data.leagues, LEAGUES_TAB);
            println!(
                "{}\n\n{}",
                output::format_standings("League 1", &rank(leagues.league_one), use_colors),
                output::format_standings("League 2", &rank(leagues.league_two), use_colors)
            );
        }
        Commands::Leaders => {
            let data = fetch_or_exit(&client, &[LEAGUES_TAB]).await;
            let leagues = require(data.leagues, LEAGUES_TAB);
            println!(
                "{}",
                output::format_leaders(
                    &league_leader(&leagues.league_one),
                    &league_leader(&leagues.league_two)
                )
            );
        }
        Commands::Fixtures => {
            let data = fetch_or_exit(&client, &[FIXTURES_TAB]).await;
            let fixtures = require(data.fixtures, FIXTURES_TAB);
            println!(
                "{}",
                output::format_fixtures(&clubhouse::fixtures::upcoming(&fixtures), use_colors)
            );
        }
        Commands::Results => {
            let data = fetch_or_exit(&client, &[FIXTURES_TAB]).await;
            let fixtures = require(data.fixtures, FIXTURES_TAB);
            println!(
                "{}",
                output::format_results(&clubhouse::fixtures::results(&fixtures), use_colors)
            );
        }
        Commands::Knockout => {
            let data = fetch_or_exit(&client, &[FIXTURES_TAB]).await;
            let fixtures = require(data.fixtures, FIXTURES_TAB);
            println!("{}", output::format_knockout(&fixtures, use_colors));
        }
        Commands::Handicaps => {
            let data = fetch_or_exit(&client, &[HANDICAPS_TAB]).await;
            let handicaps = require(data.handicaps, HANDICAPS_TAB);
            println!("{}", output::format_handicaps(&handicaps));
        }
        Commands::Rounds { action } => match action {
            RoundsCommand::List {
                player,
                course,
                local,
            } => {
                let rounds =
                    list_rounds(api_url, player.as_deref(), course.as_deref(), local).await;
                println!("{}", output::format_saved_rounds(&rounds, use_colors));
            }
            RoundsCommand::Delete {
                index,
                player,
                course,
                local,
            } => {
                let rounds =
                    list_rounds(api_url, player.as_deref(), course.as_deref(), local).await;

                // Validate index bounds (1-based)
                if index < 1 || index > rounds.len() {
                    eprintln!(
                        "Invalid index {}. Must be between 1 and {}.",
                        index,
                        rounds.len()
                    );
                    std::process::exit(EXIT_INPUT);
                }
                let key = RoundKey::from(&rounds[index - 1]);

                if local {
                    let path = get_round_book_path();
                    let mut book = load_round_book(&path)
                        .unwrap_or_else(|e| exit_with(EXIT_CONFIG, "Round book error", e));
                    book.delete(&key);
                    if let Err(e) = save_round_book(&path, &book) {
                        exit_with(EXIT_CONFIG, "Failed to save round book", e);
                    }
                } else {
                    let api = ApiClient::new(api_url)
                        .unwrap_or_else(|e| exit_with(EXIT_CONFIG, "Config error", e));
                    if let Err(e) = api.delete_round(&key).await {
                        exit_with(EXIT_NETWORK, "Failed to delete score", e);
                    }
                }
                eprintln!(
                    "Deleted {} - {} ({})",
                    key.course, key.date, key.player_name
                );
            }
        },
        Commands::Open { tab } => {
            let Some(gid) = config.sheet.tabs.get(&tab) else {
                eprintln!(
                    "Unknown sheet tab: {} (configured: {})",
                    tab,
                    config.sheet.tabs.keys().cloned().collect::<Vec<_>>().join(", ")
                );
                std::process::exit(EXIT_INPUT);
            };
            let url = clubhouse::browser::tab_page_url(&config.sheet.id, gid);

            // Open in browser
            if let Err(e) = clubhouse::browser::open_url(&url) {
                exit_with(EXIT_NETWORK, "Failed to open browser", e);
            }
            println!("Opening {} in browser: {}", tab, url);
        }
        Commands::Cache { action } => match action {
            CacheCommand::Clear => {
                let path = get_cache_path();
                if let Err(e) = clear_cache(&path) {
                    exit_with(EXIT_CONFIG, "Failed to clear cache", e);
                }
                println!("Cache cleared: {}", path.display());
            }
        },
    }

    tracing::info!("done in {:?}", start_time.elapsed());
    std::process::exit(EXIT_SUCCESS);
}
