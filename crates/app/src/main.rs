use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use quiz_core::model::{AssetLookup, AssetRole, ProblemId};
use quiz_core::time::DurationUnits;
use services::{AppServices, Clock, ExportService, QuizConfig, QuizMachine};
use storage::Storage;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    EmptyPath { flag: &'static str },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::EmptyPath { flag } => write!(f, "{flag} must not be empty"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    let value = args.next().ok_or(ArgsError::MissingValue { flag })?;
    if value.trim().is_empty() {
        return Err(ArgsError::EmptyPath { flag });
    }
    Ok(value)
}

struct DesktopApp {
    services: AppServices,
}

impl UiApp for DesktopApp {
    fn quiz_machine(&self) -> Arc<QuizMachine> {
        self.services.machine()
    }

    fn exports(&self) -> Arc<ExportService> {
        self.services.exports()
    }

    fn asset_path(&self, role: AssetRole, id: ProblemId) -> Option<PathBuf> {
        match self.services.asset(role, id) {
            AssetLookup::Found(path) => Some(path.to_path_buf()),
            AssetLookup::NotFound => None,
        }
    }

    fn refresh_interval(&self) -> Duration {
        self.services.config().refresh_interval
    }

    fn units(&self) -> DurationUnits {
        self.services.config().units
    }
}

struct Args {
    content_dir: PathBuf,
    output_dir: Option<PathBuf>,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui    [--dir <content_dir>] [--out <output_dir>]");
    eprintln!("  cargo run -p app -- check [--dir <content_dir>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --dir .");
    eprintln!("  --out <content_dir>/results");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_DIR, QUIZ_OUT_DIR, RUST_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Check,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "check" => Some(Self::Check),
            _ => None,
        }
    }
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut content_dir = std::env::var("QUIZ_DIR")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map_or_else(|| PathBuf::from("."), PathBuf::from);
        let mut output_dir = std::env::var("QUIZ_OUT_DIR")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--dir" => content_dir = require_value(args, "--dir")?.into(),
                "--out" => output_dir = Some(require_value(args, "--out")?.into()),
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            content_dir,
            output_dir,
        })
    }

    fn config(&self) -> QuizConfig {
        let config = QuizConfig::new(&self.content_dir);
        match &self.output_dir {
            Some(out) => config.with_output_dir(out),
            None => config,
        }
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Print what was found in the content directory without opening a window.
fn check(services: &AppServices) {
    let machine = services.machine();
    let key = machine.answer_key();
    let source = key
        .source()
        .map_or_else(|| "-".to_string(), |path| path.display().to_string());
    println!("answer key: {source} ({} rows)", key.rows().len());
    println!("problems:   {}", machine.problem_ids().len());
    for &id in machine.problem_ids() {
        let missing: Vec<&str> = [(AssetRole::Problem, "problem"), (AssetRole::Solution, "solution")]
            .into_iter()
            .filter(|(role, _)| services.asset(*role, id) == AssetLookup::NotFound)
            .map(|(_, name)| name)
            .collect();
        if !missing.is_empty() {
            println!("  {id}: missing {}", missing.join(", "));
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // Default behavior: launching UI when no subcommand is provided.
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

    let parsed = Args::parse(&mut argv.into_iter()).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    init_tracing();
    let config = parsed.config();
    let storage = Storage::filesystem(&config.content_dir);
    let services = AppServices::load(config, Clock::default_clock(), &storage)?;

    match cmd {
        Command::Check => {
            check(&services);
            Ok(())
        }
        Command::Ui => {
            let context = build_app_context(Arc::new(DesktopApp { services }));

            // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("数学クイズ")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
    }
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
