#![allow(clippy::uninlined_format_args)]

use anyhow::{Result, anyhow, Context};
use log::{warn, info, LevelFilter, Log, Metadata, Record, Level, SetLoggerError};
use std::path::{Path, PathBuf};
use std::io::Write;
use std::fs::File;
use std::io::BufReader;
use clap::{Parser, ValueEnum, CommandFactory, Subcommand, Args};
use clap_complete::{generate, Shell};

use gacha_history::app_config::{self, Config};
use gacha_history::app_controller::Controller;
use gacha_history::site::Site;

/// CLI wrapper for site selection
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliSite {
    Genshin,
    StarRail,
    All,
}

impl CliSite {
    fn sites(self, config: &Config) -> Vec<Site> {
        match self {
            CliSite::Genshin => vec![Site::Genshin],
            CliSite::StarRail => vec![Site::StarRail],
            CliSite::All => config.enabled_sites(),
        }
    }
}

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

fn level_filter(level: &app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Scrape banner history and write YAML files (default command)
    Scrape(ScrapeArgs),

    /// Generate shell completions for gacha-history
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args, Debug)]
struct ScrapeArgs {
    /// Site to scrape
    #[arg(short, long, value_enum, default_value = "all")]
    site: CliSite,

    /// Read a saved history page instead of downloading it (needs a single --site)
    #[arg(long, value_name = "FILE")]
    html: Option<PathBuf>,

    /// Directory relative output paths are written under
    #[arg(short, long)]
    output_dir: Option<String>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,

    /// Print the YAML to stdout instead of writing files
    #[arg(short = 'n', long)]
    dry_run: bool,
}

/// gacha-history - banner history scraper for BWIKI
///
/// Fetches the Genshin Impact wish history and Honkai: Star Rail warp history
/// pages, merges and normalizes their banner tables and writes them as YAML.
#[derive(Parser, Debug)]
#[command(name = "gacha-history")]
#[command(version)]
#[command(about = "Banner history scraper for BWIKI")]
#[command(args_conflicts_with_subcommands = true)]
#[command(long_about = "gacha-history downloads banner history tables from the BWIKI and writes them as YAML.

EXAMPLES:
    gacha-history                                  # Scrape every enabled site
    gacha-history -s genshin                       # Genshin Impact only
    gacha-history -s star-rail -n                  # Print Star Rail tables instead of writing
    gacha-history -s genshin --html saved.html     # Parse a saved page
    gacha-history completions bash > gh.bash       # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. If the file doesn't
    exist, a default one is created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    scrape: ScrapeArgs,
}

// @struct: Stderr logger with timestamps and colored levels
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(CustomLogger { level }))?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color and tag for a level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("1;31", "ERROR"),
            Level::Warn => ("1;33", "WARN "),
            Level::Info => ("1;32", "INFO "),
            Level::Debug => ("1;36", "DEBUG"),
            Level::Trace => ("1;35", "TRACE"),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level && metadata.target().starts_with("gacha_history")
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let (color, tag) = Self::style_for_level(record.level());
            let _ = writeln!(
                std::io::stderr(),
                "\x1B[{}m{} {} {}\x1B[0m",
                color, now, tag, record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Max level is narrowed again once the config is loaded
    CustomLogger::init(LevelFilter::Trace)?;
    log::set_max_level(LevelFilter::Info);

    let cli = CommandLineOptions::parse();

    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "gacha-history", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Scrape(args)) => run_scrape(args).await,
        None => run_scrape(cli.scrape).await,
    }
}

fn load_config(options: &ScrapeArgs) -> Result<Config> {
    let config_path = &options.config_path;
    let mut config = if Path::new(config_path).exists() {
        let file = File::open(config_path)
            .context(format!("Failed to open config file: {}", config_path))?;
        let reader = BufReader::new(file);
        serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", config_path))?
    } else {
        warn!("Config file not found at '{}', creating default config.", config_path);
        let config = Config::default();
        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;
        std::fs::write(config_path, config_json)
            .context(format!("Failed to write default config to file: {}", config_path))?;
        config
    };

    // Override config with CLI options if provided
    if let Some(output_dir) = &options.output_dir {
        config.output_dir = output_dir.clone();
    }
    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }

    Ok(config)
}

async fn run_scrape(options: ScrapeArgs) -> Result<()> {
    if let Some(cmd_log_level) = &options.log_level {
        let level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level_filter(&level));
    }

    let config = load_config(&options)?;
    log::set_max_level(level_filter(&config.log_level));

    let controller = Controller::with_config(config)?;
    let sites = options.site.sites(controller.config());

    if let Some(html_path) = &options.html {
        let [site] = sites.as_slice() else {
            return Err(anyhow!("--html needs exactly one --site (genshin or star-rail)"));
        };
        controller.run_from_html_file(*site, html_path, options.dry_run)?;
        return Ok(());
    }

    if sites.is_empty() {
        warn!("No sites enabled, nothing to do");
        return Ok(());
    }

    info!(
        "Scraping: {}",
        sites.iter().map(|s| s.display_name()).collect::<Vec<_>>().join(", ")
    );
    controller.run(&sites, options.dry_run).await
}
