use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use mindmap_core::QuizBank;
use mindmap_core::model::{AppState, TOTAL_SECTIONS};
use services::{AppServices, QuizService, StudyService};
use ui::{App, UiApp, build_app_context};

const DEFAULT_DB_URL: &str = "sqlite://mindmap.sqlite3";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidDbUrl { raw: String },
    InvalidQuizBank { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
            ArgsError::InvalidQuizBank { raw } => write!(f, "invalid --quiz-bank value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    services: AppServices,
}

impl UiApp for DesktopApp {
    fn study(&self) -> Arc<StudyService> {
        self.services.study()
    }

    fn quiz(&self) -> Arc<QuizService> {
        self.services.quiz()
    }

    fn initial_state(&self) -> AppState {
        self.services.initial_state()
    }
}

struct Args {
    db_url: String,
    quiz_bank: Option<PathBuf>,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui    [--db <sqlite_url>] [--quiz-bank <path>]");
    eprintln!("  cargo run -p app -- show  [--db <sqlite_url>]");
    eprintln!("  cargo run -p app -- reset [--db <sqlite_url>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --db {DEFAULT_DB_URL}");
    eprintln!("  --quiz-bank <embedded question sets>");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  MINDMAP_DB_URL, MINDMAP_QUIZ_BANK, RUST_LOG (default: info)");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Show,
    Reset,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "show" => Some(Self::Show),
            "reset" => Some(Self::Reset),
            _ => None,
        }
    }
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut db_url = std::env::var("MINDMAP_DB_URL")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map_or_else(|| DEFAULT_DB_URL.into(), normalize_sqlite_url);
        let mut quiz_bank = std::env::var("MINDMAP_QUIZ_BANK")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    db_url = normalize_sqlite_url(value);
                }
                "--quiz-bank" => {
                    let value = require_value(args, "--quiz-bank")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidQuizBank { raw: value });
                    }
                    quiz_bank = Some(PathBuf::from(value));
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self { db_url, quiz_bank })
    }
}

fn normalize_sqlite_url(raw: String) -> String {
    if raw == "sqlite::memory:" || raw.starts_with("sqlite://") {
        return raw;
    }

    let trimmed = raw.trim().to_string();
    let path_str = trimmed
        .strip_prefix("sqlite:")
        .unwrap_or(trimmed.as_str())
        .to_string();
    let path = std::path::Path::new(&path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

fn load_quiz_bank(path: Option<&PathBuf>) -> Result<QuizBank, Box<dyn std::error::Error>> {
    let Some(path) = path else {
        return Ok(QuizBank::embedded()?);
    };
    let raw = std::fs::read_to_string(path).map_err(|err| {
        log::error!("cannot read quiz bank {}: {err}", path.display());
        ArgsError::InvalidQuizBank {
            raw: path.display().to_string(),
        }
    })?;
    let bank = QuizBank::from_json(&raw)?;
    log::info!("loaded {} question sets from {}", bank.len(), path.display());
    Ok(bank)
}

fn init_logging() {
    let filters = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    pretty_env_logger::formatted_builder()
        .parse_filters(&filters)
        .init();
}

fn print_progress(state: &AppState) {
    println!("Progreso: {}%", state.progress_percent());
    println!(
        "Secciones completadas: {}/{TOTAL_SECTIONS}",
        state.completed_count()
    );
    for section in state.completed_sections() {
        println!("  - {section}");
    }
    println!("Tarjetas guardadas: {}", state.bookmarked_cards().len());
    for card in state.bookmarked_cards() {
        println!("  - {card}");
    }
    println!("Tarjetas revisadas: {}", state.reviewed_count());
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // No subcommand launches the UI.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Ui,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Ui,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };

    if !argv.is_empty() && !argv[0].starts_with("--") {
        argv.remove(0);
    }

    let mut iter = argv.into_iter();
    let parsed = Args::parse(&mut iter).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    // SQLite is opened and migrated here so the library crates stay storage-agnostic.
    prepare_sqlite_file(&parsed.db_url)?;
    let bank = load_quiz_bank(parsed.quiz_bank.as_ref())?;
    let services = AppServices::new_sqlite(&parsed.db_url, bank).await?;
    log::info!("progress store: {}", parsed.db_url);

    match cmd {
        Command::Ui => {
            let app: Arc<dyn UiApp> = Arc::new(DesktopApp { services });
            let context = build_app_context(&app);

            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("Mapa Mental Interactivo - Química Orgánica")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
        Command::Show => {
            print_progress(&services.initial_state());
            Ok(())
        }
        Command::Reset => {
            let progress = services.progress();
            progress.try_clear().await?;
            log::info!("progress cleared under key {:?}", progress.key());
            println!("Progreso reiniciado.");
            Ok(())
        }
    }
}

fn prepare_sqlite_file(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    if db_url == "sqlite::memory:" {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        }
        .into());
    }

    let path = std::path::Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    init_logging();
    if let Err(err) = run().await {
        log::error!("{err}");
        std::process::exit(2);
    }
}
