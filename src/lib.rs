pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::memory::{MemoryField, MemoryForm};
pub use config::FormatterConfig;
pub use core::binder::{apply_formatter, FormBinder};
pub use core::formatter::{format_card_number, format_cvv, formatter_for};
pub use domain::model::{BindReport, FieldBinding, FieldKind, Keystroke};
pub use utils::error::{FormatError, Result};
