use crate::core::ConfigProvider;
use crate::domain::model::FieldBinding;
use crate::utils::error::{FormatError, Result};
use crate::utils::validation::{validate_field_name, validate_non_empty_string, validate_unique_names, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is a valid regex"));

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormatterConfig {
    #[serde(default = "FieldBinding::defaults")]
    pub fields: Vec<FieldBinding>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub filter: Option<String>,
    pub json: Option<bool>,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            fields: FieldBinding::defaults(),
            logging: None,
        }
    }
}

impl FormatterConfig {
    /// Loads the configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// Parses the configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content);
        Ok(toml::from_str(&processed)?)
    }

    /// Replaces `${VAR}` with the environment value; unset variables stay as written.
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn logging_filter(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.filter.as_deref())
    }

    pub fn json_logs(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.json).unwrap_or(false)
    }
}

impl ConfigProvider for FormatterConfig {
    fn bindings(&self) -> &[FieldBinding] {
        &self.fields
    }
}

impl Validate for FormatterConfig {
    fn validate(&self) -> Result<()> {
        if self.fields.is_empty() {
            return Err(FormatError::MissingConfigError {
                field: "fields".to_string(),
            });
        }
        for (i, binding) in self.fields.iter().enumerate() {
            validate_field_name(&format!("fields[{}].name", i), &binding.name)?;
        }
        validate_unique_names(self.fields.iter().map(|b| b.name.as_str()))?;

        if let Some(filter) = self.logging.as_ref().and_then(|l| l.filter.as_deref()) {
            validate_non_empty_string("logging.filter", filter)?;
        }

        Ok(())
    }
}
