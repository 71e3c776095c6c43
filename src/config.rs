use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{GitrError, Result};
use crate::version_file::DEFAULT_TEMPLATE;

/// Name of the per-project configuration file
pub const PROJECT_CONFIG: &str = "gitr.toml";

/// Name of the per-user configuration file inside the user config directory
pub const USER_CONFIG: &str = ".gitr.toml";

/// Represents the complete configuration for gitr.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub bump: BumpConfig,
}

fn default_target() -> String {
    "version.py".to_string()
}

fn default_template() -> String {
    DEFAULT_TEMPLATE.to_string()
}

/// Settings for the `bv` subcommand.
///
/// `template` is the line written into a new or empty version file;
/// `{version}` is replaced with the dotted version.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct BumpConfig {
    #[serde(default = "default_target")]
    pub default_target: String,

    #[serde(default = "default_template")]
    pub template: String,

    #[serde(default)]
    pub quiet: bool,
}

impl Default for BumpConfig {
    fn default() -> Self {
        BumpConfig {
            default_target: default_target(),
            template: default_template(),
            quiet: false,
        }
    }
}

fn read_config(path: &Path) -> Result<Config> {
    let text = fs::read_to_string(path)
        .map_err(|e| GitrError::config(format!("cannot read {}: {}", path.display(), e)))?;
    let config: Config = toml::from_str(&text)
        .map_err(|e| GitrError::config(format!("cannot parse {}: {}", path.display(), e)))?;

    if !config.bump.template.contains("{version}") {
        return Err(GitrError::config(format!(
            "template in {} has no {{version}} placeholder",
            path.display()
        )));
    }
    Ok(config)
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `gitr.toml` in the invocation directory
/// 3. `.gitr.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
/// * `cwd` - Directory the command was invoked from
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>, cwd: &Path) -> Result<Config> {
    if let Some(path) = config_path {
        return read_config(&cwd.join(path));
    }

    let project = cwd.join(PROJECT_CONFIG);
    if project.exists() {
        return read_config(&project);
    }

    if let Some(config_dir) = dirs::config_dir() {
        let user = config_dir.join(USER_CONFIG);
        if user.exists() {
            return read_config(&user);
        }
    }

    Ok(Config::default())
}
