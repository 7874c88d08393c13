use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use quiz_core::model::QuizSettings;
use services::{Clock, SubjectCatalog};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

#[derive(Debug, PartialEq, Eq)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidSeed { raw: String },
    InvalidDataDir { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidSeed { raw } => write!(f, "invalid --seed value: {raw}"),
            ArgsError::InvalidDataDir { raw } => write!(f, "invalid --data value: {raw:?}"),
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
    catalog: SubjectCatalog,
    seed: Option<u64>,
    user_name: String,
}

impl UiApp for DesktopApp {
    fn catalog(&self) -> SubjectCatalog {
        self.catalog.clone()
    }

    fn settings(&self) -> QuizSettings {
        QuizSettings::default()
    }

    fn clock(&self) -> Clock {
        Clock::system()
    }

    fn seed(&self) -> Option<u64> {
        self.seed
    }

    fn user_name(&self) -> String {
        self.user_name.clone()
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
struct Args {
    data_dir: Option<PathBuf>,
    user_name: String,
    seed: Option<u64>,
    help: bool,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--data <dir>] [--user <name>] [--seed <u64>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  bundled PMM, PBM and FVR question banks");
    eprintln!("  random assignments seeded from the OS");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_DATA_DIR, QUIZ_USER, QUIZ_SEED, RUST_LOG");
}

impl Args {
    /// Flags win over the environment, which wins over defaults.
    fn parse(
        args: &mut impl Iterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ArgsError> {
        let mut parsed = Self {
            data_dir: env("QUIZ_DATA_DIR")
                .filter(|value| !value.trim().is_empty())
                .map(PathBuf::from),
            user_name: env("QUIZ_USER").unwrap_or_default(),
            seed: env("QUIZ_SEED").and_then(|value| value.trim().parse().ok()),
            help: false,
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--data" => {
                    let value = require_value(args, "--data")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDataDir { raw: value });
                    }
                    parsed.data_dir = Some(PathBuf::from(value));
                }
                "--user" => {
                    parsed.user_name = require_value(args, "--user")?;
                }
                "--seed" => {
                    let value = require_value(args, "--seed")?;
                    let seed = value
                        .trim()
                        .parse()
                        .map_err(|_| ArgsError::InvalidSeed { raw: value.clone() })?;
                    parsed.seed = Some(seed);
                }
                "--help" | "-h" => parsed.help = true,
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(parsed)
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let args = Args::parse(&mut argv, |key| std::env::var(key).ok()).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;
    if args.help {
        print_usage();
        return Ok(());
    }

    init_tracing();

    let catalog = match &args.data_dir {
        Some(dir) => SubjectCatalog::from_dir(dir)?,
        None => SubjectCatalog::builtin()?,
    };
    if catalog.is_empty() {
        tracing::warn!("no subjects found; the subject screen will be empty");
    }
    tracing::info!(
        subjects = catalog.subjects().len(),
        seeded = args.seed.is_some(),
        "launching quiz"
    );

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        catalog,
        seed: args.seed,
        user_name: args.user_name,
    });
    let context = build_app_context(&app);

    // Some dev setups open an always-on-top window unless told otherwise.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Quiz App")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str], env: &[(&str, &str)]) -> Result<Args, ArgsError> {
        let mut iter = args.iter().map(ToString::to_string);
        Args::parse(&mut iter, |key| {
            env.iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| (*v).to_string())
        })
    }

    #[test]
    fn defaults_without_flags_or_env() {
        assert_eq!(parse(&[], &[]).unwrap(), Args::default());
    }

    #[test]
    fn flags_override_environment() {
        let args = parse(
            &["--data", "banks", "--user", "Ana", "--seed", "9"],
            &[("QUIZ_DATA_DIR", "other"), ("QUIZ_SEED", "1")],
        )
        .unwrap();
        assert_eq!(args.data_dir, Some(PathBuf::from("banks")));
        assert_eq!(args.user_name, "Ana");
        assert_eq!(args.seed, Some(9));
    }

    #[test]
    fn environment_fills_missing_flags() {
        let args = parse(&[], &[("QUIZ_USER", "Sam"), ("QUIZ_SEED", "42")]).unwrap();
        assert_eq!(args.user_name, "Sam");
        assert_eq!(args.seed, Some(42));
        assert!(args.data_dir.is_none());
    }

    #[test]
    fn rejects_bad_values() {
        assert_eq!(
            parse(&["--seed", "abc"], &[]).unwrap_err(),
            ArgsError::InvalidSeed { raw: "abc".into() }
        );
        assert_eq!(
            parse(&["--user"], &[]).unwrap_err(),
            ArgsError::MissingValue { flag: "--user" }
        );
        assert_eq!(
            parse(&["--verbose"], &[]).unwrap_err(),
            ArgsError::UnknownArg("--verbose".into())
        );
        assert!(matches!(
            parse(&["--data", " "], &[]),
            Err(ArgsError::InvalidDataDir { .. })
        ));
    }

    #[test]
    fn help_flag_is_recorded() {
        assert!(parse(&["-h"], &[]).unwrap().help);
    }
}
