use thiserror::Error;

#[derive(Error, Debug)]
pub enum FormatError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Field name '{name}' is bound more than once")]
    DuplicateBindingError { name: String },

    #[error("No formatter is bound to field '{name}'")]
    UnknownFieldError { name: String },

    #[error("Host error: {message}")]
    HostError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl FormatError {
    pub fn host(message: impl Into<String>) -> Self {
        FormatError::HostError {
            message: message.into(),
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            FormatError::UnknownFieldError { .. } => ErrorSeverity::Medium,
            FormatError::TomlError(_)
            | FormatError::InvalidConfigValueError { .. }
            | FormatError::MissingConfigError { .. }
            | FormatError::DuplicateBindingError { .. } => ErrorSeverity::High,
            FormatError::IoError(_)
            | FormatError::SerializationError(_)
            | FormatError::HostError { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            FormatError::IoError(e) => format!("Could not read or write a file: {}", e),
            FormatError::TomlError(_) => "The configuration file is not valid TOML".to_string(),
            FormatError::SerializationError(_) => "Could not encode the output".to_string(),
            FormatError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value for {} is invalid: {}", field, reason)
            }
            FormatError::MissingConfigError { field } => {
                format!("Configuration is missing {}", field)
            }
            FormatError::DuplicateBindingError { name } => {
                format!("Field '{}' appears in more than one binding", name)
            }
            FormatError::UnknownFieldError { name } => {
                format!("Field '{}' has no formatter attached", name)
            }
            FormatError::HostError { message } => format!("The page could not be wired: {}", message),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            FormatError::IoError(_) => "Check that the path exists and is readable",
            FormatError::TomlError(_) => "Fix the syntax reported above and retry",
            FormatError::SerializationError(_) => "Retry without --json",
            FormatError::InvalidConfigValueError { .. } | FormatError::MissingConfigError { .. } => {
                "Review the [[fields]] entries in the configuration file"
            }
            FormatError::DuplicateBindingError { .. } => "Keep a single [[fields]] entry per field name",
            FormatError::UnknownFieldError { .. } => {
                "Use a field name listed in the configuration (default: card_number, cvv)"
            }
            FormatError::HostError { .. } => "Make sure the script runs inside a browser page",
        }
    }
}

pub type Result<T> = std::result::Result<T, FormatError>;
