use crate::error::{FlightMatchError, Result};
use dialoguer::Input;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

pub const RULES_ENV_VAR: &str = "FLIGHTMATCH_RULES";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub rules: RulesConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RulesConfig {
    /// Rules file; falls back to the XDG data directory when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DisplayConfig {
    #[serde(default = "default_weight_unit")]
    pub weight_unit: String,
    #[serde(default = "default_chart_width")]
    pub chart_width: u16,
    #[serde(default = "default_chart_height")]
    pub chart_height: u16,
}

fn default_weight_unit() -> String {
    "kg".into()
}

fn default_chart_width() -> u16 {
    60
}

fn default_chart_height() -> u16 {
    12
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            weight_unit: default_weight_unit(),
            chart_width: default_chart_width(),
            chart_height: default_chart_height(),
        }
    }
}

impl Config {
    /// Load config from `config_override` or the standard locations.
    /// Defaults are used when no file exists.
    pub fn load(config_override: Option<&PathBuf>) -> Result<Self> {
        let config_path = match config_override {
            Some(p) => {
                if !p.exists() {
                    return Err(FlightMatchError::Config(format!(
                        "Config file not found at {:?}",
                        p
                    )));
                }
                p.clone()
            }
            None => match Self::find_config_path() {
                Some(p) => p,
                None => {
                    debug!("No config file found, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        let config_str = std::fs::read_to_string(&config_path)
            .map_err(|e| FlightMatchError::Config(format!("Failed to read config: {}", e)))?;

        Self::parse(&config_str)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let content = Self::substitute_env_vars(content);
        serde_yaml::from_str(&content)
            .map_err(|e| FlightMatchError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Search for config.yaml in standard locations.
    fn find_config_path() -> Option<PathBuf> {
        let local_config = PathBuf::from("config/config.yaml");
        if local_config.exists() {
            return Some(local_config);
        }

        dirs::config_dir()
            .map(|dir| dir.join("flightmatch").join("config.yaml"))
            .filter(|p| p.exists())
    }

    /// Default path for writing new config files (~/.config/flightmatch/config.yaml).
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| FlightMatchError::Config("Cannot determine config directory".into()))?
            .join("flightmatch");
        Ok(config_dir.join("config.yaml"))
    }

    /// Resolve the rules file: CLI flag, then environment, then config, then
    /// the XDG data directory.
    pub fn rules_path(&self, rules_override: Option<&PathBuf>) -> Result<PathBuf> {
        if let Some(path) = rules_override {
            return Ok(path.clone());
        }

        if let Ok(path) = std::env::var(RULES_ENV_VAR) {
            if !path.trim().is_empty() {
                return Ok(PathBuf::from(path));
            }
        }

        if let Some(path) = &self.rules.path {
            return Ok(path.clone());
        }

        let data_dir = dirs::data_dir()
            .ok_or_else(|| FlightMatchError::Config("Cannot determine data directory".into()))?
            .join("flightmatch");
        Ok(data_dir.join("rules.json"))
    }

    /// Run interactive setup prompts and write config to disk.
    pub fn setup_interactive() -> Result<(Self, PathBuf)> {
        println!();
        println!("Let's set up flightmatch.");
        println!();

        let default_rules = Config::default().rules_path(None)?;
        let rules_path: String = Input::new()
            .with_prompt("  Rules file")
            .default(default_rules.display().to_string())
            .interact_text()
            .map_err(|e| FlightMatchError::Config(format!("Input error: {}", e)))?;

        let weight_unit: String = Input::new()
            .with_prompt("  Weight unit")
            .default(default_weight_unit())
            .interact_text()
            .map_err(|e| FlightMatchError::Config(format!("Input error: {}", e)))?;

        let chart_width: u16 = Input::new()
            .with_prompt("  Chart width")
            .default(default_chart_width())
            .interact_text()
            .map_err(|e| FlightMatchError::Config(format!("Input error: {}", e)))?;

        let config = Config {
            rules: RulesConfig {
                path: Some(PathBuf::from(rules_path)),
            },
            display: DisplayConfig {
                weight_unit,
                chart_width,
                chart_height: default_chart_height(),
            },
        };

        let config_path = Self::default_config_path()?;
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml::to_string(&config)
            .map_err(|e| FlightMatchError::Config(format!("Failed to serialize config: {}", e)))?;

        let content = format!(
            "# flightmatch configuration\n# Generated by `flightmatch init`\n# Environment variable substitution (${{VAR}}) is supported.\n\n{}",
            yaml
        );
        std::fs::write(&config_path, content)?;

        println!("Configuration saved to {}", config_path.display());
        println!();

        Ok((config, config_path))
    }

    fn substitute_env_vars(content: &str) -> String {
        let mut result = content.to_string();

        let Ok(re) = regex_lite::Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}") else {
            return result;
        };

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let placeholder = &cap[0];
            if let Ok(value) = std::env::var(var_name) {
                result = result.replace(placeholder, &value);
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = Config::parse("{}").unwrap();
        assert_eq!(config.display.weight_unit, "kg");
        assert_eq!(config.display.chart_width, 60);
        assert!(config.rules.path.is_none());
    }

    #[test]
    fn parses_sections() {
        let config = Config::parse(
            "rules:\n  path: /srv/rules.json\ndisplay:\n  weight_unit: lb\n  chart_height: 20\n",
        )
        .unwrap();
        assert_eq!(config.rules.path, Some(PathBuf::from("/srv/rules.json")));
        assert_eq!(config.display.weight_unit, "lb");
        assert_eq!(config.display.chart_height, 20);
        assert_eq!(config.display.chart_width, 60);
    }

    #[test]
    fn substitutes_environment_variables() {
        std::env::set_var("FLIGHTMATCH_TEST_RULES_DIR", "/tmp/fm");
        let config = Config::parse("rules:\n  path: ${FLIGHTMATCH_TEST_RULES_DIR}/rules.json\n")
            .unwrap();
        assert_eq!(config.rules.path, Some(PathBuf::from("/tmp/fm/rules.json")));
    }

    #[test]
    fn rejects_bad_yaml() {
        assert!(matches!(
            Config::parse("display: [unterminated"),
            Err(FlightMatchError::Config(_))
        ));
    }

    #[test]
    fn cli_override_wins_for_rules_path() {
        let config = Config::parse("rules:\n  path: /srv/rules.json\n").unwrap();
        let flag = PathBuf::from("/cli/rules.json");
        assert_eq!(config.rules_path(Some(&flag)).unwrap(), flag);
    }

    #[test]
    fn missing_override_file_is_an_error() {
        let missing = PathBuf::from("/definitely/not/here/config.yaml");
        assert!(Config::load(Some(&missing)).is_err());
    }
}
