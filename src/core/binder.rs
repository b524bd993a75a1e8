use crate::core::formatter::formatter_for;
use crate::domain::model::{BindReport, FieldBinding, FieldKind};
use crate::domain::ports::{ConfigProvider, FormHost, InputField};
use crate::utils::error::Result;
use std::rc::Rc;

/// Input handler body: reformat `field` in place.
///
/// The formatted value is always written back, even when unchanged.
/// Returns whether the visible value changed.
pub fn apply_formatter<F: InputField + ?Sized>(field: &F, kind: FieldKind) -> bool {
    let raw = field.value();
    let formatted = formatter_for(kind).format(&raw);
    let changed = formatted != raw;

    // lengths only, never the card digits
    tracing::trace!(
        kind = %kind,
        raw_len = raw.len(),
        formatted_len = formatted.len(),
        changed,
        "Formatted input"
    );

    field.set_value(&formatted);
    changed
}

/// Attaches formatters to host inputs according to a list of bindings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormBinder {
    bindings: Vec<FieldBinding>,
}

impl Default for FormBinder {
    fn default() -> Self {
        Self::new(FieldBinding::defaults())
    }
}

impl FormBinder {
    pub fn new(bindings: Vec<FieldBinding>) -> Self {
        Self { bindings }
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Self {
        Self::new(config.bindings().to_vec())
    }

    pub fn bindings(&self) -> &[FieldBinding] {
        &self.bindings
    }

    pub fn kind_for(&self, name: &str) -> Option<FieldKind> {
        self.bindings
            .iter()
            .find(|binding| binding.name == name)
            .map(|binding| binding.kind)
    }

    /// Attaches a listener to every input currently matching a binding.
    pub fn bind<H: FormHost>(&self, host: &H) -> Result<BindReport> {
        let mut report = BindReport::default();

        for binding in &self.bindings {
            let fields = host.inputs_named(&binding.name)?;
            for field in &fields {
                let kind = binding.kind;
                host.listen_input(
                    field,
                    Box::new(move |target: &H::Field| {
                        apply_formatter(target, kind);
                    }),
                )?;
            }

            tracing::debug!(
                field = %binding.name,
                kind = %binding.kind,
                count = fields.len(),
                "Attached formatter"
            );
            report.attached.push((binding.clone(), fields.len()));
        }

        Ok(report)
    }

    /// Defers [`bind`](Self::bind) until the host reports ready.
    pub fn install<H: FormHost + 'static>(self, host: Rc<H>) -> Result<()> {
        let ready_host = Rc::clone(&host);
        host.when_ready(Box::new(move || match self.bind(ready_host.as_ref()) {
            Ok(report) => {
                tracing::info!(inputs = report.total(), "Payment field formatters installed");
            }
            Err(e) => {
                tracing::error!("Failed to attach payment field formatters: {}", e);
            }
        }))
    }
}
