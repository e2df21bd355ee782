mod app;
mod command;
mod config;
mod consts;
mod game;
mod util;
use crate::app::App;
use crate::config::{Config, LoggingConfig};
use anyhow::Context;
use lexopt::{Arg, Parser, ValueExt};
use simplelog::WriteLogger;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::process::ExitCode;

const USAGE: &str = concat!(
    "Usage: snaketrail [--config FILE] [--seed N] [--log-file FILE]\n",
    "\n",
    "Options:\n",
    "  -c, --config FILE    Read configuration from FILE\n",
    "      --seed N         Seed the food placement with N\n",
    "      --log-file FILE  Write log messages to FILE\n",
    "  -h, --help           Show this help and exit\n",
    "  -V, --version        Show the program version and exit\n",
);

#[derive(Clone, Debug, Eq, PartialEq)]
enum Cli {
    Run(Arguments),
    Help,
    Version,
}

impl Cli {
    fn from_parser(mut parser: Parser) -> Result<Cli, lexopt::Error> {
        let mut args = Arguments::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('h') | Arg::Long("help") => return Ok(Cli::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Cli::Version),
                Arg::Short('c') | Arg::Long("config") => {
                    args.config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Long("seed") => args.seed = Some(parser.value()?.parse()?),
                Arg::Long("log-file") => args.log_file = Some(PathBuf::from(parser.value()?)),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Cli::Run(args))
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
struct Arguments {
    config: Option<PathBuf>,
    seed: Option<u64>,
    log_file: Option<PathBuf>,
}

impl Arguments {
    /// Load the configuration file and apply command-line overrides to it
    fn load_config(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path, false)
                .with_context(|| format!("failed to load {}", path.display()))?,
            None => match Config::default_path() {
                Ok(path) => Config::load(&path, true)
                    .with_context(|| format!("failed to load {}", path.display()))?,
                Err(_) => Config::default(),
            },
        };
        if let Some(seed) = self.seed {
            config.game.seed = Some(seed);
        }
        if let Some(path) = &self.log_file {
            config.logging.file = Some(path.clone());
        }
        Ok(config)
    }

    fn run(self) -> anyhow::Result<()> {
        let config = self.load_config()?;
        init_logging(&config.logging)?;
        let terminal = ratatui::init();
        let r = App::new(config.game).run(terminal);
        ratatui::restore();
        match r {
            Err(e) if e.kind() == ErrorKind::BrokenPipe => Ok(()),
            r => r.context("terminal I/O failed"),
        }
    }
}

fn init_logging(logging: &LoggingConfig) -> anyhow::Result<()> {
    let Some(path) = &logging.file else {
        return Ok(());
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs_err::create_dir_all(parent)?;
    }
    let file = fs_err::File::create(path)?;
    WriteLogger::init(logging.level, simplelog::Config::default(), file)
        .context("failed to initialize logger")?;
    Ok(())
}

fn main() -> ExitCode {
    match Cli::from_parser(Parser::from_env()) {
        Ok(Cli::Run(args)) => match args.run() {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("snaketrail: {e:?}");
                ExitCode::from(2)
            }
        },
        Ok(Cli::Help) => {
            print!("{USAGE}");
            ExitCode::SUCCESS
        }
        Ok(Cli::Version) => {
            println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("snaketrail: {e}");
            ExitCode::from(2)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn parse(args: &[&str]) -> Result<Cli, lexopt::Error> {
        Cli::from_parser(Parser::from_args(args.iter().copied()))
    }

    #[rstest]
    #[case(&[], Cli::Run(Arguments::default()))]
    #[case(&["--help"], Cli::Help)]
    #[case(&["--seed", "5", "-h"], Cli::Help)]
    #[case(&["-V"], Cli::Version)]
    #[case(&["--seed", "42"], Cli::Run(Arguments {seed: Some(42), ..Arguments::default()}))]
    #[case(
        &["-c", "snake.toml", "--log-file=snake.log"],
        Cli::Run(Arguments {
            config: Some(PathBuf::from("snake.toml")),
            log_file: Some(PathBuf::from("snake.log")),
            ..Arguments::default()
        })
    )]
    fn test_parse(#[case] args: &[&str], #[case] cli: Cli) {
        assert_eq!(parse(args).unwrap(), cli);
    }

    #[rstest]
    #[case(&["--seed", "many"])]
    #[case(&["--seed"])]
    #[case(&["--speed", "3"])]
    #[case(&["extra"])]
    fn test_parse_error(#[case] args: &[&str]) {
        assert!(parse(args).is_err());
    }

    #[test]
    fn overrides_apply_to_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs_err::write(&path, "[game]\nseed = 1\nframe-rate = 50\n").unwrap();
        let args = Arguments {
            config: Some(path),
            seed: Some(2),
            log_file: Some(PathBuf::from("game.log")),
        };
        let config = args.load_config().unwrap();
        assert_eq!(config.game.seed, Some(2));
        assert_eq!(config.game.frame_rate.get(), 50);
        assert_eq!(config.logging.file, Some(PathBuf::from("game.log")));
    }

    #[test]
    fn explicit_config_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let args = Arguments {
            config: Some(dir.path().join("nope.toml")),
            ..Arguments::default()
        };
        assert!(args.load_config().is_err());
    }
}
