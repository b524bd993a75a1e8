pub mod binder;
pub mod formatter;

pub use crate::domain::model::{BindReport, FieldBinding, FieldKind};
pub use crate::domain::ports::{ConfigProvider, FieldFormatter, FormHost, InputField};
pub use crate::utils::error::Result;
