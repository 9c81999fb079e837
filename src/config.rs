//! Configuration file structures for the Kerwhizz bot.
//!
//! The configuration is split into two sections: trivia server settings and
//! Matrix account settings. It is read from a YAML file and every value can be
//! overridden with a `KERWHIZZ_` environment variable, nested keys being
//! separated by `__`.
//!
//! # Configuration File Format
//!
//! ```yaml
//! # Trivia server configuration, every key is optional
//! trivia:
//!   # Base URL of the Open Trivia Database
//!   url: "https://opentdb.com"
//!   # Seconds between a question and its answer
//!   answer_wait_time: 10
//!   # Seconds between an answer and the next question
//!   next_question_wait_time: 3
//!
//! # Matrix account configuration
//! matrix:
//!   # Fully qualified Matrix user ID of the bot account
//!   user_id: "@kerwhizz:matrix.org"
//!   # Device ID the access token was issued for
//!   device_id: "KERWHIZZ"
//!   # Access token of the bot account
//!   access_token: "syt_..."
//! ```
//!
//! # Environment Variable Overrides
//!
//! ```bash
//! export KERWHIZZ_MATRIX__ACCESS_TOKEN="syt_..."
//! export KERWHIZZ_TRIVIA__ANSWER_WAIT_TIME=15
//! ```

use std::time::Duration;

use figment::{
    Figment,
    providers::{Env, Format, Yaml},
};
use serde::Deserialize;

use crate::sequencer::Timings;

/// Prefix of the environment variables overriding the configuration file.
const ENV_PREFIX: &str = "KERWHIZZ_";

/// Root configuration structure for the Kerwhizz bot.
#[derive(Deserialize, Debug)]
pub struct Config {
    /// Trivia server configuration
    #[serde(default)]
    pub trivia: Trivia,
    /// Matrix account configuration
    pub matrix: Matrix,
}

/// Trivia server configuration.
///
/// # YAML Section
///
/// ```yaml
/// trivia:
///   url: "https://opentdb.com"
///   answer_wait_time: 10
///   next_question_wait_time: 3
/// ```
#[derive(Deserialize, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct Trivia {
    /// Base URL of the trivia server.
    ///
    /// Should include the protocol (http/https). A trailing slash is removed
    /// when the configuration is loaded.
    pub url: String,

    /// Seconds to wait between a question and its answer.
    pub answer_wait_time: u64,

    /// Seconds to wait between an answer and the next question.
    pub next_question_wait_time: u64,
}

impl Default for Trivia {
    fn default() -> Self {
        Trivia {
            url: "https://opentdb.com".to_owned(),
            answer_wait_time: 10,
            next_question_wait_time: 3,
        }
    }
}

impl Trivia {
    /// Quiz delays described by this section.
    pub fn timings(&self) -> Timings {
        Timings {
            answer_wait: Duration::from_secs(self.answer_wait_time),
            next_question_wait: Duration::from_secs(self.next_question_wait_time),
        }
    }
}

/// Matrix account configuration.
///
/// # YAML Section
///
/// ```yaml
/// matrix:
///   user_id: "@kerwhizz:matrix.org"
///   device_id: "KERWHIZZ"
///   access_token: "syt_..."
/// ```
#[derive(Deserialize, Debug)]
pub struct Matrix {
    /// Fully qualified Matrix user ID.
    ///
    /// The homeserver is discovered from the server name of this ID.
    pub user_id: String,

    /// Device ID the access token belongs to.
    pub device_id: String,

    /// Access token used to authenticate the bot.
    ///
    /// Prefer setting it with `KERWHIZZ_MATRIX__ACCESS_TOKEN` rather than in
    /// the file.
    pub access_token: String,
}

impl Config {
    /// Loads the configuration from a YAML file merged with `KERWHIZZ_`
    /// environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be parsed or a required value, such
    /// as the Matrix access token, is missing from both the file and the
    /// environment.
    pub fn load(path: &str) -> Result<Self, figment::Error> {
        let mut config: Config = Figment::new()
            .merge(Yaml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()?;

        // Normalize trivia URL by removing trailing slashes
        while config.trivia.url.ends_with('/') {
            config.trivia.url.pop();
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use serial_test::serial;
    use tempfile::NamedTempFile;

    use super::*;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    #[serial]
    fn test_load_full_config() {
        let file = write_config(
            r#"
trivia:
  url: "http://localhost:8080/"
  answer_wait_time: 20
  next_question_wait_time: 5
matrix:
  user_id: "@kerwhizz:example.com"
  device_id: "DEVICE"
  access_token: "token"
"#,
        );

        let config = Config::load(file.path().to_str().unwrap()).unwrap();

        assert_eq!(config.trivia.url, "http://localhost:8080");
        assert_eq!(config.trivia.answer_wait_time, 20);
        assert_eq!(config.trivia.next_question_wait_time, 5);
        assert_eq!(config.matrix.user_id, "@kerwhizz:example.com");
        assert_eq!(config.matrix.device_id, "DEVICE");
        assert_eq!(config.matrix.access_token, "token");
    }

    #[test]
    #[serial]
    fn test_load_trivia_defaults() {
        let file = write_config(
            r#"
matrix:
  user_id: "@kerwhizz:example.com"
  device_id: "DEVICE"
  access_token: "token"
"#,
        );

        let config = Config::load(file.path().to_str().unwrap()).unwrap();

        assert_eq!(config.trivia, Trivia::default());
        assert_eq!(config.trivia.timings(), Timings::default());
    }

    #[test]
    #[serial]
    fn test_load_missing_access_token() {
        let file = write_config(
            r#"
matrix:
  user_id: "@kerwhizz:example.com"
  device_id: "DEVICE"
"#,
        );

        let result = Config::load(file.path().to_str().unwrap());

        assert!(result.is_err());
    }

    #[test]
    #[serial]
    fn test_load_env_overrides() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "config.yaml",
                r#"
matrix:
  user_id: "@kerwhizz:example.com"
  device_id: "DEVICE"
"#,
            )?;
            jail.set_env("KERWHIZZ_MATRIX__ACCESS_TOKEN", "secret-from-env");
            jail.set_env("KERWHIZZ_TRIVIA__ANSWER_WAIT_TIME", "15");

            let config = Config::load("config.yaml")?;

            assert_eq!(config.matrix.access_token, "secret-from-env");
            assert_eq!(config.trivia.answer_wait_time, 15);
            assert_eq!(config.trivia.next_question_wait_time, 3);
            assert_eq!(
                config.trivia.timings().answer_wait,
                Duration::from_secs(15)
            );
            Ok(())
        });
    }
}
