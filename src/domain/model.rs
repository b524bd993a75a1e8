use serde::{Deserialize, Serialize};
use std::fmt;

/// Which formatter a field gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    CardNumber,
    Cvv,
}

impl FieldKind {
    pub const ALL: [FieldKind; 2] = [FieldKind::CardNumber, FieldKind::Cvv];

    /// The `name` attribute the payment form uses for this kind.
    pub fn default_field_name(&self) -> &'static str {
        match self {
            FieldKind::CardNumber => "card_number",
            FieldKind::Cvv => "cvv",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.default_field_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldBinding {
    pub name: String,
    pub kind: FieldKind,
}

impl FieldBinding {
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    pub fn defaults() -> Vec<FieldBinding> {
        FieldKind::ALL
            .iter()
            .map(|kind| FieldBinding::new(kind.default_field_name(), *kind))
            .collect()
    }
}

/// Outcome of [`FormBinder::bind`](crate::core::binder::FormBinder::bind):
/// how many inputs each binding attached to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BindReport {
    pub attached: Vec<(FieldBinding, usize)>,
}

impl BindReport {
    pub fn total(&self) -> usize {
        self.attached.iter().map(|(_, count)| count).sum()
    }

    pub fn count_for(&self, name: &str) -> usize {
        self.attached
            .iter()
            .filter(|(binding, _)| binding.name == name)
            .map(|(_, count)| count)
            .sum()
    }
}

/// One visible value per keystroke, as produced by a typing replay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Keystroke {
    pub key: char,
    pub value: String,
}
