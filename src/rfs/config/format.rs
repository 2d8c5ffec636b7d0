use std::fmt;
use std::path::Path;

use crate::rfs::error::{FilesError, Result};

use super::ConfigObject;

/// On-disk format of a config file, chosen by its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfigFormat {
    /// Everything that is not YAML. Written with 2-space indentation.
    #[default]
    Json,
    /// `.yaml` and `.yml` files.
    Yaml,
}

impl ConfigFormat {
    pub fn from_path(path: impl AsRef<Path>) -> ConfigFormat {
        match path.as_ref().extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                ConfigFormat::Yaml
            }
            _ => ConfigFormat::Json,
        }
    }

    /// Parses the content of the config file at `path`. The top level must be
    /// a mapping.
    pub fn parse(self, path: impl AsRef<Path>, content: &str) -> Result<ConfigObject> {
        match self {
            ConfigFormat::Json => serde_json::from_str::<ConfigObject>(content)
                .map_err(|error| FilesError::parse(path, self, error)),
            ConfigFormat::Yaml => serde_yaml::from_str::<ConfigObject>(content)
                .map_err(|error| FilesError::parse(path, self, error)),
        }
    }

    pub fn render(self, config: &ConfigObject) -> Result<String> {
        match self {
            ConfigFormat::Json => serde_json::to_string_pretty(config)
                .map_err(|error| FilesError::defaults(error.to_string())),
            ConfigFormat::Yaml => serde_yaml::to_string(config)
                .map_err(|error| FilesError::defaults(error.to_string())),
        }
    }
}

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ConfigFormat::Json => write!(f, "JSON"),
            ConfigFormat::Yaml => write!(f, "YAML"),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn format_follows_extension() {
        assert_eq!(ConfigFormat::from_path("app.json"), ConfigFormat::Json);
        assert_eq!(ConfigFormat::from_path("app.yaml"), ConfigFormat::Yaml);
        assert_eq!(ConfigFormat::from_path("app.YML"), ConfigFormat::Yaml);
        assert_eq!(ConfigFormat::from_path(".apprc"), ConfigFormat::Json);
    }

    #[test]
    fn json_is_rendered_with_two_space_indentation() -> Result<()> {
        let config = json!({ "editor": "vim" }).as_object().cloned().unwrap();
        assert_eq!(
            ConfigFormat::Json.render(&config)?,
            "{\n  \"editor\": \"vim\"\n}"
        );
        Ok(())
    }

    #[test]
    fn parser_should_reject_non_mapping_json() {
        let error = ConfigFormat::Json.parse("app.json", "[1, 2]").unwrap_err();
        assert!(error.is_parse());
    }

    #[test]
    fn parser_should_reject_broken_json() {
        let error = ConfigFormat::Json.parse("app.json", "{\"editor\": ").unwrap_err();
        assert!(error.is_parse());
        assert!(error.to_string().contains("does not contain valid JSON"));
    }

    #[test]
    fn parser_should_accept_yaml_mapping() -> Result<()> {
        let config = ConfigFormat::Yaml.parse("app.yaml", "editor: vim\nlines: 3\n")?;
        assert_eq!(config["editor"], json!("vim"));
        assert_eq!(config["lines"], json!(3));
        Ok(())
    }

    #[test]
    fn yaml_rendering_can_be_parsed_back() -> Result<()> {
        let config = json!({ "editor": "vim", "path": "/default.txt" })
            .as_object()
            .cloned()
            .unwrap();
        let text = ConfigFormat::Yaml.render(&config)?;
        assert_eq!(ConfigFormat::Yaml.parse("app.yaml", &text)?, config);
        Ok(())
    }
}
