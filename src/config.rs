use crate::game::Difficulty;
use crate::highscore::HighScoreFile;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Deserialize, Debug, Default, Eq, PartialEq)]
pub(crate) struct Config {
    /// Difficulty to start out with
    #[serde(default)]
    pub(crate) difficulty: Difficulty,

    /// Settings about data files
    #[serde(default)]
    pub(crate) files: FileConfig,

    #[serde(default)]
    pub(crate) logging: LogConfig,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("gridsnake").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist and
    /// `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's contents
    /// could not be deserialized.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        toml::from_str(&content).map_err(Into::into)
    }

    /// Return the file in which the high score should be kept: the file given
    /// in the configuration or, if that is not set, the default high score
    /// file path.
    ///
    /// Returns `None` if `self.files.save_high_score` is `false` or if no path
    /// is configured and the default path could not be computed.
    pub(crate) fn high_score_file(&self) -> Option<HighScoreFile> {
        if !self.files.save_high_score {
            return None;
        }
        let path = self
            .files
            .high_score_file
            .clone()
            .or_else(HighScoreFile::default_path);
        if path.is_none() {
            tracing::warn!("Could not determine local data directory; high score will not be saved");
        }
        path.map(HighScoreFile::new)
    }
}

#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct FileConfig {
    /// Path at which the high score should be stored
    pub(crate) high_score_file: Option<PathBuf>,

    /// Whether to load & save the high score in a file
    pub(crate) save_high_score: bool,
}

impl Default for FileConfig {
    fn default() -> FileConfig {
        FileConfig {
            high_score_file: None,
            save_high_score: true,
        }
    }
}

#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(default)]
pub(crate) struct LogConfig {
    /// File to append log messages to.  If not set, nothing is logged.
    pub(crate) file: Option<PathBuf>,

    /// Log filter directives, in the syntax used by `RUST_LOG`
    pub(crate) level: String,
}

impl Default for LogConfig {
    fn default() -> LogConfig {
        LogConfig {
            file: None,
            level: String::from("info"),
        }
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn empty() {
        let cfg = toml::from_str::<Config>("").unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.difficulty, Difficulty::Medium);
        assert!(cfg.files.save_high_score);
        assert_eq!(cfg.logging.level, "info");
    }

    #[test]
    fn full() {
        let src = concat!(
            "difficulty = \"hard\"\n",
            "\n",
            "[files]\n",
            "high-score-file = \"/tmp/snake/best.json\"\n",
            "save-high-score = true\n",
            "\n",
            "[logging]\n",
            "file = \"/tmp/snake/log.txt\"\n",
            "level = \"debug\"\n",
        );
        let cfg = toml::from_str::<Config>(src).unwrap();
        assert_eq!(
            cfg,
            Config {
                difficulty: Difficulty::Hard,
                files: FileConfig {
                    high_score_file: Some(PathBuf::from("/tmp/snake/best.json")),
                    save_high_score: true,
                },
                logging: LogConfig {
                    file: Some(PathBuf::from("/tmp/snake/log.txt")),
                    level: String::from("debug"),
                },
            }
        );
        assert_eq!(
            cfg.high_score_file(),
            Some(HighScoreFile::new(PathBuf::from("/tmp/snake/best.json")))
        );
    }

    #[test]
    fn no_saving() {
        let cfg = toml::from_str::<Config>("[files]\nsave-high-score = false\n").unwrap();
        assert_eq!(cfg.high_score_file(), None);
    }

    #[test]
    fn bad_difficulty() {
        assert!(toml::from_str::<Config>("difficulty = \"nightmare\"\n").is_err());
    }

    #[test]
    fn load_missing() {
        let tmpdir = tempdir().unwrap();
        let path = tmpdir.path().join("config.toml");
        assert_eq!(Config::load(&path, true).unwrap(), Config::default());
        assert!(matches!(
            Config::load(&path, false),
            Err(ConfigError::Read(_))
        ));
    }

    #[test]
    fn load_unparseable() {
        let tmpdir = tempdir().unwrap();
        let path = tmpdir.path().join("config.toml");
        fs_err::write(&path, "difficulty = \n").unwrap();
        assert!(matches!(
            Config::load(&path, true),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn load_file() {
        let tmpdir = tempdir().unwrap();
        let path = tmpdir.path().join("config.toml");
        fs_err::write(&path, "difficulty = \"easy\"\n").unwrap();
        let cfg = Config::load(&path, false).unwrap();
        assert_eq!(cfg.difficulty, Difficulty::Easy);
    }
}
