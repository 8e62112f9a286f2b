mod init;
mod schema;
mod validation;

pub use init::run_init_wizard;
pub use schema::{Config, GroupSizeConfig};
pub use validation::validate_config;

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// Get the config directory path (~/.config/ahp-rank/)
pub fn get_config_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Could not determine home directory");
    home.join(".config").join("ahp-rank")
}

/// Get the default config file path (~/.config/ahp-rank/config.yaml)
pub fn get_config_path() -> PathBuf {
    get_config_dir().join("config.yaml")
}

/// Load configuration from a YAML file.
///
/// An explicitly given path must exist. The default path is allowed to be
/// absent: the config only tunes parameters, so a missing file simply
/// means defaults.
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let (config_path, explicit) = match path {
        Some(p) => (p, true),
        None => (get_config_path(), false),
    };

    if !config_path.exists() {
        if explicit {
            anyhow::bail!("Config file not found at {}", config_path.display());
        }
        return Ok(Config::default());
    }

    let config_content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file at {}", config_path.display()))?;

    let config: Config = serde_saphyr::from_str(&config_content).with_context(|| {
        format!(
            "Failed to parse config: invalid YAML in {}",
            config_path.display()
        )
    })?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_explicit_path_is_an_error() {
        let result = load_config(Some(PathBuf::from("/nonexistent/ahp-rank.yaml")));
        assert!(result.is_err());
    }

    #[test]
    fn test_config_path_under_config_dir() {
        let path = get_config_path();
        assert!(path.starts_with(get_config_dir()));
        assert!(path.ends_with("config.yaml"));
    }
}
