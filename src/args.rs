use crate::config::Config;
use crate::game::Difficulty;
use lexopt::{Arg, Parser, ValueExt};
use std::path::{Path, PathBuf};

pub(crate) const USAGE: &str = "\
Usage: gridsnake [<options>]

Play Snake on a 20x20 grid.  Eat the food, but don't hit the walls or yourself!

Options:
  -c, --config <PATH>       Read configuration from the given file
  -d, --difficulty <LEVEL>  Start at the given difficulty: easy, medium, or hard
      --log-file <PATH>     Append log messages to the given file
  -h, --help                Display this help message and exit
  -V, --version             Show the program version and exit
";

/// What the program was asked to do on the command line
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum CommandLine {
    Run(Arguments),
    Help,
    Version,
}

impl CommandLine {
    pub(crate) fn from_parser(mut parser: Parser) -> Result<CommandLine, lexopt::Error> {
        let mut args = Arguments::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('c') | Arg::Long("config") => {
                    args.config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Short('d') | Arg::Long("difficulty") => {
                    args.difficulty = Some(parser.value()?.parse()?);
                }
                Arg::Long("log-file") => {
                    args.log_file = Some(PathBuf::from(parser.value()?));
                }
                Arg::Short('h') | Arg::Long("help") => return Ok(CommandLine::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(CommandLine::Version),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(CommandLine::Run(args))
    }
}

/// Settings given on the command line.  These take precedence over the
/// configuration file.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct Arguments {
    pub(crate) config: Option<PathBuf>,
    pub(crate) difficulty: Option<Difficulty>,
    pub(crate) log_file: Option<PathBuf>,
}

impl Arguments {
    /// Combine the arguments with the configuration file, returning the
    /// difficulty to start at and the file to log to, if any.  Settings given
    /// on the command line win.
    pub(crate) fn resolve<'a>(&'a self, config: &'a Config) -> (Difficulty, Option<&'a Path>) {
        let difficulty = self.difficulty.unwrap_or(config.difficulty);
        let log_file = self
            .log_file
            .as_deref()
            .or(config.logging.file.as_deref());
        (difficulty, log_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn parse(args: &[&str]) -> Result<CommandLine, lexopt::Error> {
        CommandLine::from_parser(Parser::from_args(args.iter().copied()))
    }

    #[test]
    fn no_args() {
        assert_eq!(
            parse(&[]).unwrap(),
            CommandLine::Run(Arguments::default())
        );
    }

    #[test]
    fn all_args() {
        assert_eq!(
            parse(&["-c", "snake.toml", "--difficulty=HARD", "--log-file", "snake.log"]).unwrap(),
            CommandLine::Run(Arguments {
                config: Some(PathBuf::from("snake.toml")),
                difficulty: Some(Difficulty::Hard),
                log_file: Some(PathBuf::from("snake.log")),
            })
        );
    }

    #[rstest]
    #[case(Some(Difficulty::Hard), Some("cli.log"), Difficulty::Easy, Some("cfg.log"), Difficulty::Hard, Some("cli.log"))]
    #[case(Some(Difficulty::Hard), Some("cli.log"), Difficulty::Medium, None, Difficulty::Hard, Some("cli.log"))]
    #[case(None, None, Difficulty::Easy, Some("cfg.log"), Difficulty::Easy, Some("cfg.log"))]
    #[case(None, Some("cli.log"), Difficulty::Easy, None, Difficulty::Easy, Some("cli.log"))]
    #[case(Some(Difficulty::Easy), None, Difficulty::Hard, Some("cfg.log"), Difficulty::Easy, Some("cfg.log"))]
    #[case(None, None, Difficulty::Medium, None, Difficulty::Medium, None)]
    fn test_resolve(
        #[case] cli_difficulty: Option<Difficulty>,
        #[case] cli_log: Option<&str>,
        #[case] cfg_difficulty: Difficulty,
        #[case] cfg_log: Option<&str>,
        #[case] difficulty: Difficulty,
        #[case] log_file: Option<&str>,
    ) {
        let args = Arguments {
            config: None,
            difficulty: cli_difficulty,
            log_file: cli_log.map(PathBuf::from),
        };
        let mut config = Config {
            difficulty: cfg_difficulty,
            ..Config::default()
        };
        config.logging.file = cfg_log.map(PathBuf::from);
        assert_eq!(
            args.resolve(&config),
            (difficulty, log_file.map(Path::new))
        );
    }

    #[rstest]
    #[case(&["--help"], CommandLine::Help)]
    #[case(&["-d", "easy", "-h"], CommandLine::Help)]
    #[case(&["-V"], CommandLine::Version)]
    fn info_flags(#[case] args: &[&str], #[case] cmd: CommandLine) {
        assert_eq!(parse(args).unwrap(), cmd);
    }

    #[rstest]
    #[case(&["--difficulty", "nightmare"])]
    #[case(&["--difficulty"])]
    #[case(&["--speed", "9"])]
    #[case(&["extra"])]
    fn bad_args(#[case] args: &[&str]) {
        assert!(parse(args).is_err());
    }
}
