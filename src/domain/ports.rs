use crate::domain::model::{FieldBinding, FieldKind};
use crate::utils::error::Result;

pub trait FieldFormatter: Send + Sync {
    fn kind(&self) -> FieldKind;
    fn format(&self, raw: &str) -> String;
}

pub trait ConfigProvider {
    fn bindings(&self) -> &[FieldBinding];
}

/// A text input owned by some host (a DOM element, an in-memory field).
pub trait InputField {
    fn name(&self) -> Option<String>;
    fn value(&self) -> String;
    fn set_value(&self, value: &str);
}

pub type InputHandler<F> = Box<dyn FnMut(&F)>;
pub type ReadyCallback = Box<dyn FnOnce()>;

/// The environment the formatters are wired into.
///
/// Hosts are single-threaded: handlers run synchronously on the host's
/// event loop and are never `Send`.
pub trait FormHost {
    type Field: InputField + Clone + 'static;

    /// Input elements whose `name` attribute equals `name`, in document order.
    fn inputs_named(&self, name: &str) -> Result<Vec<Self::Field>>;

    /// Registers `handler` for every input event on `field`. Listeners are
    /// never removed.
    fn listen_input(&self, field: &Self::Field, handler: InputHandler<Self::Field>) -> Result<()>;

    /// Runs `callback` once the host is ready, or right away if it already is.
    fn when_ready(&self, callback: ReadyCallback) -> Result<()>;
}
