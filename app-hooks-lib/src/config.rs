//! Per-app configuration read from the system configuration file.
//!
//! The file is a JSON object keyed by app name. Each app only looks at its own
//! section:
//!
//! ```json
//! {
//!     "kubos-linux-makeLED": { "led-binary": "/home/kubos/blinkleds/kubos-linux-makeLED" }
//! }
//! ```

use crate::error::HookError;
use crate::led::{LedBinary, DEFAULT_LED_BINARY};
use log::{debug, info};
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Used when no `--config` flag is given.
pub const DEFAULT_CONFIG_PATH: &str = "/home/system/etc/config.json";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct Section {
    #[serde(default = "default_led_binary")]
    led_binary: PathBuf,
}

fn default_led_binary() -> PathBuf {
    PathBuf::from(DEFAULT_LED_BINARY)
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub led_binary: PathBuf,
    /// The app's whole section, including keys this crate does not read.
    pub raw: Value,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            led_binary: default_led_binary(),
            raw: Value::Null,
        }
    }
}

impl Config {
    /// Loads the section for `app_name` from `path`, or from
    /// [`DEFAULT_CONFIG_PATH`] when `path` is `None`.
    ///
    /// A missing file or a missing section yields the defaults. Any other read
    /// failure or malformed JSON is an error.
    pub fn load(app_name: &str, path: Option<&Path>) -> Result<Self, HookError> {
        let path = path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_PATH));

        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(
                    "No configuration file at {}, using defaults",
                    path.display()
                );
                return Ok(Config::default());
            }
            Err(e) => {
                return Err(HookError::Config(format!(
                    "could not read {}: {e}",
                    path.display()
                )))
            }
        };

        Self::from_json(app_name, &contents)
            .map_err(|e| HookError::Config(format!("{}: {e}", path.display())))
    }

    /// Parses a configuration document and extracts the `app_name` section.
    pub fn from_json(app_name: &str, contents: &str) -> Result<Self, serde_json::Error> {
        let data: Value = serde_json::from_str(contents)?;

        let Some(section) = data.get(app_name) else {
            debug!("No '{app_name}' section in configuration, using defaults");
            return Ok(Config::default());
        };

        let parsed = Section::deserialize(section)?;
        Ok(Config {
            led_binary: parsed.led_binary,
            raw: section.clone(),
        })
    }

    pub fn led_binary(&self) -> LedBinary {
        LedBinary::new(&self.led_binary)
    }
}
