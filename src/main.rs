use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use golf::commands;
use golf::config;
use golf::store::{PgStore, Store};
use golf::tui;

// Default Configuration Constants
/// Default log level when not specified
const DEFAULT_LOG_LEVEL: &str = "info";

/// Default log file path (no logging to file)
const DEFAULT_LOG_FILE: &str = "/dev/null";

#[derive(Parser)]
#[command(name = "golf")]
#[command(
    about = "Golf scorecard CLI",
    long_about = "Golf scorecard CLI\n\nIf no command is specified, the interactive scorecard \
                  editor opens for the most recent game."
)]
struct Cli {
    /// Set log level (trace, debug, info, warn, error)
    #[arg(short = 'L', long, global = true, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,

    /// Log file path (default: /dev/null for no logging)
    #[arg(short = 'F', long, global = true, default_value = DEFAULT_LOG_FILE)]
    log_file: String,

    /// Postgres connection string (overrides DB_CONN and the config file)
    #[arg(short = 'd', long, global = true)]
    db_conn: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a scorecard for a new round (1-4 players)
    Create {
        /// Course name
        #[arg(short, long)]
        course: String,

        /// Date in mm/dd/yyyy format (defaults to today)
        #[arg(long)]
        date: Option<String>,

        /// Player name (repeat for each player)
        #[arg(short, long = "player")]
        players: Vec<String>,
    },
    /// Record a single score
    Record {
        /// Game id, e.g. "Pebble Beach - 08/27/2026"
        #[arg(short, long)]
        game: String,

        /// Player name
        #[arg(short, long)]
        player: String,

        /// Hole number (1-18)
        #[arg(long)]
        hole: i32,

        /// Strokes (1-8)
        #[arg(short, long)]
        strokes: i32,
    },
    /// Show a scorecard
    Show {
        /// Game id
        game: String,
    },
    /// Show per-player totals
    Totals {
        /// Game id
        game: String,
    },
    /// List all scorecards
    List,
    /// Open the interactive scorecard editor
    Edit {
        /// Game id (defaults to the most recent game)
        game: Option<String>,
    },
    /// Display current configuration
    Config,
}

fn init_logging(log_level: &str, log_file: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
    {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Failed to open log file {}: {}", log_file, e);
            return;
        }
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

/// Handle the config command - display current configuration
fn handle_config_command() {
    let cfg = config::read();

    let (path_str, exists) = match config::get_config_path() {
        Some(path) => {
            let exists = path.exists();
            (path.display().to_string(), exists)
        }
        None => ("Unable to determine config path".to_string(), false),
    };

    println!(
        "Configuration File: {} (Exists: {})",
        path_str,
        if exists { "yes" } else { "no" }
    );
    println!();
    println!("Current Configuration:");
    println!("=====================");
    println!("db_conn: {}", cfg.db_conn);
    println!("log_level: {}", cfg.log_level);
    println!("log_file: {}", cfg.log_file);
    println!("unset_marker: {}", cfg.unset_marker);
    println!();
    println!("[theme]");
    println!("selection_fg: {:?}", cfg.theme.selection_fg);
    println!("notice_fg: {:?}", cfg.theme.notice_fg);
}

/// Resolve log configuration from CLI args and config file
/// CLI arguments take precedence over config file
fn resolve_log_config<'a>(cli: &'a Cli, config: &'a config::Config) -> (&'a str, &'a str) {
    let log_level = if cli.log_level != DEFAULT_LOG_LEVEL {
        cli.log_level.as_str()
    } else {
        config.log_level.as_str()
    };

    let log_file = if cli.log_file != DEFAULT_LOG_FILE {
        cli.log_file.as_str()
    } else {
        config.log_file.as_str()
    };

    (log_level, log_file)
}

/// Resolve the connection string: CLI flag > DB_CONN env var > config file.
fn resolve_db_conn(cli: &Cli, config: &config::Config) -> String {
    if let Some(conn) = &cli.db_conn {
        return conn.clone();
    }
    if let Ok(conn) = std::env::var("DB_CONN") {
        return conn;
    }
    config.db_conn.clone()
}

async fn create_store(conn_str: &str) -> PgStore {
    match PgStore::connect(conn_str).await {
        Ok(store) => store,
        Err(e) => {
            let error_msg = format!(
                "Failed to connect to Postgres ({}).\nSet DB_CONN, pass --db-conn, or configure \
                 db_conn in the config file.",
                e
            );
            tracing::error!("{}", error_msg);
            eprintln!("{}", error_msg);
            std::process::exit(1);
        }
    }
}

/// Open the interactive editor, defaulting to the most recent game.
async fn run_editor(
    store: &PgStore,
    game: Option<String>,
    config: &config::Config,
) -> anyhow::Result<()> {
    use anyhow::Context;

    let game_id = match game {
        Some(id) => id,
        None => store
            .latest_game()
            .await?
            .map(|g| g.game_id)
            .context("No games yet. Create one with 'golf create'.")?,
    };
    let scorecard = store.load_scorecard(&game_id).await?;
    tui::run(store, scorecard, config).await
}

/// Execute a CLI command by routing it to the appropriate command handler
async fn execute_command(
    store: &PgStore,
    command: Commands,
    config: &config::Config,
) -> anyhow::Result<()> {
    match command {
        Commands::Config => unreachable!("Config command should be handled before execute_command"),
        Commands::Create {
            course,
            date,
            players,
        } => commands::create::run(store, course, date, players).await,
        Commands::Record {
            game,
            player,
            hole,
            strokes,
        } => commands::record::run(store, game, player, hole, strokes).await,
        Commands::Show { game } => commands::show::run(store, game).await,
        Commands::Totals { game } => commands::totals::run(store, game).await,
        Commands::List => commands::list::run(store).await,
        Commands::Edit { game } => run_editor(store, game, config).await,
    }
}

#[tokio::main]
async fn main() {
    let config = config::read();
    let cli = Cli::parse();

    // Resolve and initialize logging
    let (log_level, log_file) = resolve_log_config(&cli, &config);
    if log_file != DEFAULT_LOG_FILE {
        init_logging(log_level, log_file);
    }

    // Handle Config command separately (doesn't need a store)
    if matches!(cli.command, Some(Commands::Config)) {
        handle_config_command();
        return;
    }

    let conn_str = resolve_db_conn(&cli, &config);
    let store = create_store(&conn_str).await;

    // If no subcommand, open the editor on the latest game
    let command = match cli.command {
        Some(command) => command,
        None => Commands::Edit { game: None },
    };

    if let Err(e) = execute_command(&store, command, &config).await {
        eprintln!("Error: {:#}", e);
        tracing::error!("Command failed: {:#}", e);
        std::process::exit(1);
    }
}
