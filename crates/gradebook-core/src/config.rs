//! Optional tool configuration (`gradebook.toml`).

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GradebookError, Result};
use crate::template::{default_template, template_by_id, GradeTemplate};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Template preselected when `--template` is not given
    #[serde(default = "default_template_id")]
    pub default_template: String,
}

fn default_template_id() -> String {
    default_template().id.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_template: default_template_id(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file. A missing path (or `None`)
    /// yields defaults; a present but unreadable or invalid file is an
    /// error, as is a configured template id the catalog doesn't know.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) if path.exists() => {
                let contents = fs::read_to_string(path)?;
                toml::from_str::<Config>(&contents)?
            }
            Some(path) => {
                return Err(GradebookError::not_found("config file", path.display()));
            }
            None => Config::default(),
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if template_by_id(&self.default_template).is_none() {
            crate::bail_invalid!("default_template", &self.default_template);
        }
        Ok(())
    }

    /// The configured default template
    pub fn template(&self) -> &'static GradeTemplate {
        // validate() guarantees the id resolves
        template_by_id(&self.default_template).unwrap_or_else(default_template)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_path_yields_defaults() {
        let config = Config::load(None).unwrap();
        assert_eq!(config.default_template, "10-10-10-70");
        assert_eq!(config.template().fields(), 4);
    }

    #[test]
    fn loads_default_template_override() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "default_template = \"10-30-60\"").unwrap();
        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.template().id, "10-30-60");
    }

    #[test]
    fn rejects_unknown_default_template() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "default_template = \"50-50\"").unwrap();
        assert!(Config::load(Some(file.path())).is_err());
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let err = Config::load(Some(Path::new("/nonexistent/gradebook.toml"))).unwrap_err();
        assert!(matches!(err, GradebookError::NotFound { .. }));
    }
}
