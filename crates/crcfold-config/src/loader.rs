//! Configuration loader with multi-source merging

use crate::{ConfigError, CrcfoldConfig, Paths};
use anyhow::{Context, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Configuration loader with builder pattern
pub struct ConfigLoader {
    project_dir: PathBuf,
    env_prefix: String,
    user_config: bool,
}

impl ConfigLoader {
    /// Create a new config loader with default project directory (current dir)
    pub fn new() -> Self {
        Self {
            project_dir: env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            env_prefix: "CRCFOLD".to_string(),
            user_config: true,
        }
    }

    /// Set the project directory
    pub fn with_project_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.project_dir = dir.as_ref().to_path_buf();
        self
    }

    /// Set the environment variable prefix (default: "CRCFOLD")
    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Skip ~/.config/crcfold/config.toml
    pub fn without_user_config(mut self) -> Self {
        self.user_config = false;
        self
    }

    /// Load configuration from all sources with proper precedence
    pub fn load(self) -> Result<CrcfoldConfig> {
        let mut builder = config::Config::builder();

        // 1. Start with built-in defaults
        let defaults = CrcfoldConfig::default();
        builder = builder.add_source(config::Config::try_from(&defaults)?);

        // 2. User config (~/.config/crcfold/config.toml)
        if self.user_config {
            if let Ok(user_config_file) = Paths::new().user_config_file() {
                if user_config_file.exists() {
                    builder = builder.add_source(
                        config::File::from(user_config_file)
                            .required(false)
                            .format(config::FileFormat::Toml),
                    );
                }
            }
        }

        // 3. Project config (crcfold.toml)
        let project_config_file = Paths::project_config_file(&self.project_dir);
        if project_config_file.exists() {
            builder = builder.add_source(
                config::File::from(project_config_file)
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // 4. Local config (crcfold.local.toml, gitignored)
        let local_config_file = Paths::local_config_file(&self.project_dir);
        if local_config_file.exists() {
            builder = builder.add_source(
                config::File::from(local_config_file)
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // 5. Environment variables (CRCFOLD_INPUT__CHUNK_SIZE=4096)
        builder = builder.add_source(
            config::Environment::with_prefix(&self.env_prefix)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder
            .build()
            .map_err(|e| ConfigError::MergeError(e.to_string()))?;

        let crcfold_config: CrcfoldConfig = config
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        crcfold_config.validate()?;

        Ok(crcfold_config)
    }

}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OutputFormat;
    use std::fs;
    use tempfile::tempdir;

    fn loader(dir: &Path) -> ConfigLoader {
        ConfigLoader::new()
            .with_project_dir(dir)
            .with_env_prefix("CRCFOLD_LOADER_TEST")
            .without_user_config()
    }

    #[test]
    fn test_load_defaults() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let config = loader(temp_dir.path()).load().expect("Failed to load config");

        assert_eq!(config, CrcfoldConfig::default());
    }

    #[test]
    fn test_load_project_config() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let project_dir = temp_dir.path();

        let config_content = r#"
[checksum]
polynomial = 0x82F63B78
seed = 0

[input]
chunk_size = 4096

[output]
format = "json"
"#;
        fs::write(project_dir.join("crcfold.toml"), config_content)
            .expect("Failed to write config");

        let config = loader(project_dir).load().expect("Failed to load config");

        assert_eq!(config.checksum.polynomial, 0x82F6_3B78);
        assert_eq!(config.checksum.seed, 0);
        assert_eq!(config.input.chunk_size, 4096);
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_local_overrides() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let project_dir = temp_dir.path();

        fs::write(
            project_dir.join("crcfold.toml"),
            r"
[input]
chunk_size = 4096

[checksum]
seed = 1
",
        )
        .expect("Failed to write project config");

        fs::write(
            project_dir.join("crcfold.local.toml"),
            r"
[input]
chunk_size = 128
",
        )
        .expect("Failed to write local config");

        let config = loader(project_dir).load().expect("Failed to load config");

        // Local config should override project config, key by key
        assert_eq!(config.input.chunk_size, 128);
        assert_eq!(config.checksum.seed, 1);
    }

    #[test]
    fn test_invalid_values_fail_validation() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let project_dir = temp_dir.path();

        fs::write(project_dir.join("crcfold.toml"), "[input]\nchunk_size = 0\n")
            .expect("Failed to write config");

        let err = loader(project_dir).load().unwrap_err();
        assert!(err.downcast_ref::<ConfigError>().is_some(), "{err:#}");
    }

    #[test]
    fn test_unparseable_file_fails() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let project_dir = temp_dir.path();

        fs::write(project_dir.join("crcfold.toml"), "[checksum\nseed = ")
            .expect("Failed to write config");

        assert!(loader(project_dir).load().is_err());
    }

    #[test]
    fn test_hex_strings_in_project_config() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let project_dir = temp_dir.path();

        fs::write(
            project_dir.join("crcfold.toml"),
            "[checksum]\npolynomial = \"0x82F63B78\"\nseed = \"0\"\n",
        )
        .expect("Failed to write config");

        let config = loader(project_dir).load().expect("Failed to load config");
        assert_eq!(config.checksum.polynomial, 0x82F6_3B78);
        assert_eq!(config.checksum.seed, 0);
    }

    // The environment layer is exercised end to end by the CLI integration
    // tests, which set CRCFOLD_* on the child process only.
}
