use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use lesson_core::model::Lesson;
use lesson_core::sample::screening_tests_lesson;
use lesson_ui::{App, UiApp, build_app_context};
use tracing_subscriber::{EnvFilter, fmt as log_fmt, prelude::*};

#[derive(Debug, PartialEq, Eq)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    UnknownCommand(String),
    InvalidLessonPath { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::UnknownCommand(cmd) => write!(f, "unknown subcommand: {cmd}"),
            ArgsError::InvalidLessonPath { raw } => write!(f, "invalid --lesson value: {raw:?}"),
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
    lesson: Arc<Lesson>,
}

impl UiApp for DesktopApp {
    fn lesson(&self) -> Arc<Lesson> {
        Arc::clone(&self.lesson)
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  lesson ui    [--lesson <path.json>] [--title <window title>]");
    eprintln!("  lesson check [--lesson <path.json>]");
    eprintln!();
    eprintln!("Without --lesson the built-in screening tests lesson is used.");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  LESSON_PATH   default for --lesson");
    eprintln!("  RUST_LOG      log filter (default: warn)");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Check,
    Help,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "check" => Some(Self::Check),
            "help" | "--help" | "-h" => Some(Self::Help),
            _ => None,
        }
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
struct Args {
    lesson_path: Option<PathBuf>,
    window_title: Option<String>,
}

impl Args {
    fn parse(
        args: &mut impl Iterator<Item = String>,
        env_lesson_path: Option<String>,
    ) -> Result<Self, ArgsError> {
        let mut parsed = Self {
            lesson_path: env_lesson_path
                .filter(|value| !value.trim().is_empty())
                .map(PathBuf::from),
            window_title: None,
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--lesson" => {
                    let value = require_value(args, "--lesson")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidLessonPath { raw: value });
                    }
                    parsed.lesson_path = Some(PathBuf::from(value));
                }
                "--title" => {
                    parsed.window_title = Some(require_value(args, "--title")?);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(parsed)
    }
}

/// Split argv into a command and the remaining flags. A bare invocation or
/// one starting with a flag launches the UI.
fn parse_command(mut argv: Vec<String>) -> Result<(Command, Vec<String>), ArgsError> {
    let first = argv.first().cloned();
    let cmd = match first.as_deref() {
        None => return Ok((Command::Ui, argv)),
        Some("--help" | "-h") => Command::Help,
        Some(first) if first.starts_with("--") => return Ok((Command::Ui, argv)),
        Some(first) => {
            Command::from_arg(first).ok_or_else(|| ArgsError::UnknownCommand(first.to_string()))?
        }
    };
    argv.remove(0);
    Ok((cmd, argv))
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(log_fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .init();
}

fn load_lesson(path: Option<&Path>) -> Result<Lesson, lesson_core::Error> {
    let Some(path) = path else {
        tracing::info!("no lesson path given, using built-in sample");
        return Ok(screening_tests_lesson());
    };

    let file = File::open(path)?;
    let lesson = Lesson::from_json_reader(BufReader::new(file))?;
    tracing::info!(
        path = %path.display(),
        questions = lesson.questions().len(),
        resources = lesson.resources().len(),
        "lesson loaded"
    );
    Ok(lesson)
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let argv: Vec<String> = std::env::args().skip(1).collect();
    let (cmd, rest) = parse_command(argv).inspect_err(|_| print_usage())?;

    if cmd == Command::Help {
        print_usage();
        return Ok(());
    }

    let parsed = Args::parse(&mut rest.into_iter(), std::env::var("LESSON_PATH").ok())
        .inspect_err(|e| {
            eprintln!("{e}");
            print_usage();
        })?;

    let lesson = load_lesson(parsed.lesson_path.as_deref())?;

    match cmd {
        Command::Ui => {
            let title = parsed
                .window_title
                .unwrap_or_else(|| lesson.title.clone());
            let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
                lesson: Arc::new(lesson),
            });
            let context = build_app_context(&app);

            // Some dev setups default the webview to always-on-top.
            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title(title)
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
        Command::Check => {
            println!(
                "{}: {} badges, {} concepts, {} guidance points, {} resources, {} questions, {} glossary terms (scoring: {})",
                lesson.title,
                lesson.metadata_badges.len(),
                lesson.section1.key_concepts.len(),
                lesson.section2.guidance.len(),
                lesson.resources().len(),
                lesson.questions().len(),
                lesson.glossary.len(),
                lesson.scoring,
            );
            Ok(())
        }
        Command::Help => Ok(()),
    }
}

fn main() {
    init_tracing();
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
