// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{anyhow, Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{debug, info, warn, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::fs::File;
use std::io::BufReader;
use std::io::Write;
use std::path::{Path, PathBuf};

use subvocab::app_config::{self, Config};
use subvocab::file_utils::FileManager;
use subvocab::session::{SessionController, SessionOutcome, TerminalInput};
use subvocab::subtitle_extractor::SubtitleExtractor;
use subvocab::tokenizer::Tokenizer;
use subvocab::translation_client::HttpTranslator;
use subvocab::vocabulary_db::{VocabularyDatabase, WordStatus};

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

fn to_level_filter(level: &app_config::LogLevel) -> LevelFilter {
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
    /// Review the words of a subtitle file interactively (default command)
    #[command(alias = "review")]
    Review(ReviewArgs),

    /// List the words classified as not-yet-known
    Learn {
        /// Configuration file path
        #[arg(short, long, default_value = "conf.json")]
        config_path: String,
    },

    /// Generate shell completions for subvocab
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct ReviewArgs {
    /// Subtitle file to review
    #[arg(value_name = "SUBTITLE_FILE")]
    subtitle_file: PathBuf,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Vocabulary database file (overrides the configured path)
    #[arg(short, long)]
    database: Option<PathBuf>,

    /// Minimum word length threshold (words must be longer to be reviewed)
    #[arg(short, long)]
    min_word_length: Option<usize>,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// subvocab - vocabulary review for subtitle files
///
/// Extracts words from a subtitle file, compares them against your vocabulary
/// database and walks you through the unknown ones one keystroke at a time.
#[derive(Parser, Debug)]
#[command(name = "subvocab")]
#[command(version = "0.1.0")]
#[command(about = "Interactive vocabulary review for subtitle files")]
#[command(long_about = "subvocab extracts words from subtitle files and drives an interactive
review loop so you can classify each unknown word.

EXAMPLES:
    subvocab movie.srt                        # Review words from a subtitle file
    subvocab -d vocab.json movie.srt          # Use a specific database file
    subvocab -m 3 movie.srt                   # Only review words longer than 3 letters
    subvocab learn                            # Print words still classified as unknown
    subvocab completions bash > subvocab.bash # Generate bash completions

REVIEW KEYS:
    W not a word    N name    Y known    ? unknown
    B back    C context    T translate    Q quit

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default
    one will be created automatically. The translation API key lives in the
    config file and is only required when the translate key is used.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Subtitle file to review
    #[arg(value_name = "SUBTITLE_FILE")]
    subtitle_file: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Vocabulary database file (overrides the configured path)
    #[arg(short, long)]
    database: Option<PathBuf>,

    /// Minimum word length threshold (words must be longer to be reviewed)
    #[arg(short, long)]
    min_word_length: Option<usize>,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color prefix for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S%.3f");
            let color = Self::color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "{}{} {}\x1B[0m", color, now, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    // Handle subcommands
    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "subvocab", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Learn { config_path }) => run_learn(&config_path),
        Some(Commands::Review(args)) => run_review(args).await,
        None => {
            // Default behavior - use top-level args for backwards compatibility
            let subtitle_file = cli.subtitle_file.ok_or_else(|| {
                anyhow!("SUBTITLE_FILE is required when no subcommand is specified (try --help)")
            })?;

            let review_args = ReviewArgs {
                subtitle_file,
                config_path: cli.config_path,
                database: cli.database,
                min_word_length: cli.min_word_length,
                log_level: cli.log_level,
            };
            run_review(review_args).await
        }
    }
}

/// Load the configuration file, creating a default one when it is missing
fn load_or_create_config(config_path: &str) -> Result<Config> {
    if Path::new(config_path).exists() {
        let file = File::open(config_path)
            .context(format!("Failed to open config file: {}", config_path))?;

        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", config_path))?;
        Ok(config)
    } else {
        warn!("Config file not found at '{}', creating default config.", config_path);

        let config = Config::default();
        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;

        std::fs::write(config_path, config_json)
            .context(format!("Failed to write default config to file: {}", config_path))?;

        Ok(config)
    }
}

async fn run_review(options: ReviewArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let config_log_level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(to_level_filter(&config_log_level));
    }

    let mut config = load_or_create_config(&options.config_path)?;

    // Override config with CLI options if provided
    if let Some(database) = &options.database {
        config.database_path = database.to_string_lossy().to_string();
    }
    if let Some(min_word_length) = options.min_word_length {
        config.min_word_length = min_word_length;
    }
    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }

    // Validate the configuration after loading and overriding
    config.validate().context("Configuration validation failed")?;

    // If log level was not set via command line, update it from config now
    if options.log_level.is_none() {
        log::set_max_level(to_level_filter(&config.log_level));
    }

    if !FileManager::file_exists(&options.subtitle_file) {
        return Err(anyhow!(
            "Subtitle file does not exist: {:?}",
            options.subtitle_file
        ));
    }

    debug!("Extracting text from {:?}", options.subtitle_file);
    let text = SubtitleExtractor::extract_text_from_file(&options.subtitle_file)?;

    let tokenizer = Tokenizer::new(config.min_word_length);
    let review_list = tokenizer.word_stats(&text);

    let database = VocabularyDatabase::load(&config.database_path)?;
    info!(
        "Loaded {} classified words from {}",
        database.len(),
        config.database_path
    );

    let translator = HttpTranslator::new(
        config.translation.endpoint.clone(),
        config.translation.api_key.clone(),
        config.translation.lang.clone(),
        config.translation.timeout_secs,
    )?;

    let mut controller = SessionController::new(
        review_list,
        database,
        options.subtitle_file.clone(),
        TerminalInput,
        Box::new(translator),
    );

    match controller.run().await? {
        SessionOutcome::ListExhausted => debug!("Review list exhausted"),
        SessionOutcome::Quit => debug!("Session quit by user"),
    }

    Ok(())
}

/// Print every word still classified as unknown, one per line
fn run_learn(config_path: &str) -> Result<()> {
    let config = load_or_create_config(config_path)?;
    let database = VocabularyDatabase::load(&config.database_path)?;

    for word in database.words_with_status(WordStatus::Unknown) {
        println!("{}", word);
    }

    Ok(())
}
