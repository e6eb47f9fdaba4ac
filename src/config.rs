use anyhow::{Context as _, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::traits::FileSystem;

/// Name of the optional configuration file, looked up in the working directory
pub const CONFIG_FILE: &str = ".tfadopt.yaml";

const DEFAULT_STATE_PATH: &str = "terraform.tfstate";
const DEFAULT_STATE_TOOL: &str = "terraform";

/// Tool configuration, loaded from `.tfadopt.yaml` with CLI flags taking
/// precedence over file values and file values over defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the state snapshot read at the start of every pass
    pub state_path: PathBuf,
    /// Binary whose `import` subcommand registers adopted resources
    pub state_tool: String,
    /// Region forwarded to the cloud client, if any
    pub region: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    state_path: Option<PathBuf>,
    state_tool: Option<String>,
    region: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            state_path: PathBuf::from(DEFAULT_STATE_PATH),
            state_tool: DEFAULT_STATE_TOOL.to_string(),
            region: None,
        }
    }
}

impl Config {
    /// Load configuration, merging the optional config file over defaults
    /// and the given CLI overrides over both.
    ///
    /// A missing config file yields defaults; a malformed one is a fatal
    /// startup error.
    pub fn load(
        fs: &dyn FileSystem,
        state_path: Option<PathBuf>,
        state_tool: Option<String>,
        region: Option<String>,
    ) -> Result<Self> {
        let mut config = Self::default();

        let file_path = Path::new(CONFIG_FILE);
        if fs.exists(file_path) {
            let contents = fs.read_to_string(file_path)?;
            let file: ConfigFile = serde_yaml::from_str(&contents)
                .with_context(|| format!("Failed to parse {}", CONFIG_FILE))?;

            if let Some(path) = file.state_path {
                config.state_path = path;
            }
            if let Some(tool) = file.state_tool {
                config.state_tool = tool;
            }
            if let Some(region) = file.region {
                config.region = Some(region);
            }
        }

        if let Some(path) = state_path {
            config.state_path = path;
        }
        if let Some(tool) = state_tool {
            config.state_tool = tool;
        }
        if let Some(region) = region {
            config.region = Some(region);
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::MockFileSystem;

    #[test]
    fn test_defaults_when_no_config_file() {
        let fs = MockFileSystem::new();

        let config = Config::load(&fs, None, None, None).unwrap();

        assert_eq!(config.state_path, PathBuf::from("terraform.tfstate"));
        assert_eq!(config.state_tool, "terraform");
        assert_eq!(config.region, None);
    }

    #[test]
    fn test_config_file_overrides_defaults() {
        let fs = MockFileSystem::new();
        fs.write(
            Path::new(CONFIG_FILE),
            "state_path: envs/prod/terraform.tfstate\nstate_tool: tofu\nregion: eu-west-1\n",
        )
        .unwrap();

        let config = Config::load(&fs, None, None, None).unwrap();

        assert_eq!(
            config.state_path,
            PathBuf::from("envs/prod/terraform.tfstate")
        );
        assert_eq!(config.state_tool, "tofu");
        assert_eq!(config.region.as_deref(), Some("eu-west-1"));
    }

    #[test]
    fn test_cli_flags_override_config_file() {
        let fs = MockFileSystem::new();
        fs.write(Path::new(CONFIG_FILE), "state_tool: tofu\n").unwrap();

        let config = Config::load(
            &fs,
            Some(PathBuf::from("other.tfstate")),
            Some("terraform".to_string()),
            Some("us-east-1".to_string()),
        )
        .unwrap();

        assert_eq!(config.state_path, PathBuf::from("other.tfstate"));
        assert_eq!(config.state_tool, "terraform");
        assert_eq!(config.region.as_deref(), Some("us-east-1"));
    }

    #[test]
    fn test_malformed_config_file_is_fatal() {
        let fs = MockFileSystem::new();
        fs.write(Path::new(CONFIG_FILE), "state_tool: [not, a, string\n")
            .unwrap();

        assert!(Config::load(&fs, None, None, None).is_err());
    }
}
