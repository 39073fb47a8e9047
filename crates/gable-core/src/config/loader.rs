//! Configuration file loading and parsing

use std::fs;

use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};

use crate::config::ConfigBundle;
use crate::error::{Error, Result};

/// Configuration file names to search for
const CONFIG_FILE_NAMES: &[&str] = &["gable.yaml", "gable.yml"];

/// The parsed gable.yaml file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GableFile {
    /// Configuration format version
    pub version: String,

    /// Stack name, used to label the declaration document
    pub name: String,

    /// Site key-value bundle
    #[serde(default)]
    pub site: ConfigBundle,
}

/// Loaded Gable configuration
#[derive(Debug, Clone)]
pub struct GableConfig {
    /// The parsed configuration
    pub config: GableFile,

    /// Path to the configuration file
    pub config_path: Utf8PathBuf,

    /// Working directory
    pub working_dir: Utf8PathBuf,
}

impl GableConfig {
    /// Load configuration from the specified path or search for it
    pub fn load(path: Option<&Utf8Path>) -> Result<Self> {
        let (config_path, content) = if let Some(p) = path {
            let content = fs::read_to_string(p).map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    Error::config_not_found(p.as_str())
                } else {
                    Error::Io(e)
                }
            })?;
            (p.to_owned(), content)
        } else {
            Self::find_config()?
        };

        let working_dir = config_path
            .parent()
            .map(|p| p.to_owned())
            .unwrap_or_else(|| Utf8PathBuf::from("."));

        let config: GableFile = serde_yaml_ng::from_str(&content)?;

        Ok(Self {
            config,
            config_path,
            working_dir,
        })
    }

    /// Find configuration file in current directory or parent directories
    fn find_config() -> Result<(Utf8PathBuf, String)> {
        let cwd = std::env::current_dir().map_err(Error::Io)?;
        let cwd = Utf8PathBuf::try_from(cwd).map_err(|_| {
            Error::invalid_configuration("Current directory path is not valid UTF-8")
        })?;

        let mut current = cwd.as_path();

        loop {
            for name in CONFIG_FILE_NAMES {
                let path = current.join(name);
                if path.exists() {
                    let content = fs::read_to_string(&path)?;
                    return Ok((path, content));
                }
            }

            match current.parent() {
                Some(parent) => current = parent,
                None => break,
            }
        }

        Err(Error::config_not_found(
            "gable.yaml (searched current and parent directories)",
        ))
    }

    /// Get the stack name
    pub fn name(&self) -> &str {
        &self.config.name
    }

    /// Get the site key-value bundle
    pub fn bundle(&self) -> &ConfigBundle {
        &self.config.site
    }

    /// Serialize configuration to YAML
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml_ng::to_string(&self.config).map_err(Error::from)
    }
}

/// Generate a starter gable.yaml
pub fn generate_default_config(name: &str) -> String {
    format!(
        r#"---
# Gable configuration
version: "1"
name: {name}

site:
  # Hostname the site is served at; must sit inside zone_host
  frontend_host: www.example.com
  # Pre-existing Route 53 hosted zone
  zone_host: example.com
  # Domain of the issued ACM certificate (us-east-1)
  cert_host: example.com
  # path: ../frontend/dist
  # indexDocument: index.html
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{KEY_FRONTEND_HOST, KEY_ZONE_HOST};

    #[test]
    fn test_default_config_generation() {
        let config = generate_default_config("my-site");
        assert!(config.contains("name: my-site"));
        assert!(config.contains("frontend_host:"));

        // The starter file must parse back
        let parsed: GableFile = serde_yaml_ng::from_str(&config).unwrap();
        assert_eq!(parsed.name, "my-site");
        assert_eq!(parsed.site.get(KEY_ZONE_HOST), Some("example.com"));
    }

    #[test]
    fn test_parse_minimal_config() {
        let yaml = r#"
version: "1"
name: test-site
site:
  frontend_host: www.example.com
  zone_host: example.com
  cert_host: example.com
"#;
        let config: GableFile = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(config.name, "test-site");
        assert_eq!(config.site.get(KEY_FRONTEND_HOST), Some("www.example.com"));
    }

    #[test]
    fn test_parse_config_without_site_section() {
        // The site bundle defaults to empty; resolution fails later, not here
        let yaml = r#"
version: "1"
name: bare
"#;
        let config: GableFile = serde_yaml_ng::from_str(yaml).unwrap();
        assert!(config.site.is_empty());
    }

    // --- Error path tests ---

    #[test]
    fn test_load_nonexistent_file() {
        let path = Utf8Path::new("/tmp/nonexistent-gable-config-12345.yaml");
        let result = GableConfig::load(Some(path));
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(
            matches!(err, Error::ConfigNotFound { .. }),
            "Expected ConfigNotFound, got: {:?}",
            err
        );
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_load_invalid_yaml_syntax() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let config_path = temp_dir.path().join("gable.yaml");
        std::fs::write(&config_path, "version: \"1\"\nname: test\n  bad_indent: [[[").unwrap();

        let utf8_path =
            Utf8PathBuf::from_path_buf(config_path).expect("path should be valid UTF-8");
        let result = GableConfig::load(Some(utf8_path.as_path()));
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(
            matches!(err, Error::YamlParse(_)),
            "Expected YamlParse, got: {:?}",
            err
        );
    }

    #[test]
    fn test_load_yaml_missing_required_fields() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let config_path = temp_dir.path().join("gable.yaml");
        // Missing name - should fail deserialization
        std::fs::write(&config_path, "version: \"1\"\n").unwrap();

        let utf8_path =
            Utf8PathBuf::from_path_buf(config_path).expect("path should be valid UTF-8");
        let result = GableConfig::load(Some(utf8_path.as_path()));
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(
            err.to_string().contains("missing field"),
            "Expected 'missing field' in error, got: {}",
            err
        );
    }

    #[test]
    fn test_load_round_trips_bundle() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let config_path = temp_dir.path().join("gable.yaml");
        let yaml = r#"
version: "1"
name: round-trip
site:
  frontend_host: www.example.com
  zone_host: example.com
  cert_host: example.com
  path: ./dist
"#;
        std::fs::write(&config_path, yaml).unwrap();

        let utf8_path =
            Utf8PathBuf::from_path_buf(config_path).expect("path should be valid UTF-8");
        let config = GableConfig::load(Some(utf8_path.as_path())).unwrap();
        assert_eq!(config.name(), "round-trip");
        assert_eq!(config.bundle().get("path"), Some("./dist"));
        assert_eq!(config.working_dir, temp_dir.path().to_str().unwrap());
    }
}
