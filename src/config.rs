//! Layered application configuration.
//!
//! Settings are merged with figment, later layers winning:
//!
//! 1. Built-in defaults ([`Config::default`])
//! 2. A TOML file: `--config <FILE>`, or `config.toml` in the platform
//!    config directory (e.g. `~/.config/dupes/config.toml`)
//! 3. `DUPES_*` environment variables (`DUPES_MIN_SIZE=4096`)
//! 4. Command-line flags ([`Config::apply_cli`])
//!
//! # Example
//!
//! ```toml
//! paranoid = true
//! min_size = 1024
//! glob = "*.jpg"
//! algorithm = "blake3"
//! ```

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::cli::{Cli, OutputFormat};
use crate::error::ConfigError;
use crate::scanner::filter::MATCH_ALL;
use crate::scanner::HashAlgorithm;

/// Prefix of environment variables read into the configuration.
pub const ENV_PREFIX: &str = "DUPES_";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Confirm digest matches byte-by-byte.
    pub paranoid: bool,
    /// Minimum file size in bytes; smaller files are ignored.
    pub min_size: u64,
    /// Glob pattern for file names to consider.
    pub glob: String,
    /// Digest algorithm.
    pub algorithm: HashAlgorithm,
    /// Output format.
    pub output: OutputFormat,
    /// Follow symbolic links during the walk.
    pub follow_symlinks: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            paranoid: false,
            min_size: 1,
            glob: MATCH_ALL.to_string(),
            algorithm: HashAlgorithm::default(),
            output: OutputFormat::default(),
            follow_symlinks: false,
        }
    }
}

impl Config {
    /// Build the figment for defaults, config file and environment.
    ///
    /// `file` overrides the default config file location.
    #[must_use]
    pub fn figment(file: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Config::default()));

        if let Some(path) = file.map(Path::to_path_buf).or_else(Self::default_path) {
            log::debug!("Reading configuration from {}", path.display());
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX))
    }

    /// Load the configuration from file and environment.
    ///
    /// A missing default config file is not an error; a missing file named
    /// with `--config` is.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if an explicit file is missing or any layer
    /// holds values of the wrong type.
    pub fn load(file: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = file {
            if !path.is_file() {
                return Err(ConfigError::MissingFile(path.to_path_buf()));
            }
        }
        Ok(Self::figment(file).extract()?)
    }

    /// Overlay the flags given on the command line.
    #[must_use]
    pub fn apply_cli(mut self, cli: &Cli) -> Self {
        if cli.paranoid {
            self.paranoid = true;
        } else if cli.no_paranoid {
            self.paranoid = false;
        }
        if cli.follow_symlinks {
            self.follow_symlinks = true;
        } else if cli.no_follow_symlinks {
            self.follow_symlinks = false;
        }
        if let Some(min_size) = cli.min_size {
            self.min_size = min_size;
        }
        if let Some(glob) = &cli.glob {
            self.glob.clone_from(glob);
        }
        if let Some(algorithm) = cli.algorithm {
            self.algorithm = algorithm;
        }
        if let Some(output) = cli.output {
            self.output = output;
        }
        self
    }

    /// Default platform-specific config file path.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "dupes").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Render the configuration as TOML, as printed by `--print-config`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
