use thiserror::Error;

use super::field::Field;

/// A configuration variable holds a value its field does not accept.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid {} ({}) got={value:?}", .field.description(), .field.env_var())]
pub struct FieldError {
    field: Field,
    value: String,
}

impl FieldError {
    /// Records `value` exactly as it was read, untrimmed.
    pub fn new(field: Field, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }

    /// The offending field.
    pub const fn field(&self) -> Field {
        self.field
    }

    /// Name of the environment variable that held the value.
    pub const fn env_var(&self) -> &'static str {
        self.field.env_var()
    }

    /// The raw value received.
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Every invalid field found by one load pass, in evaluation order.
///
/// Never empty.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("failed to load config:{}", render_list(.errors))]
pub struct ConfigError {
    errors: Vec<FieldError>,
}

impl ConfigError {
    /// Callers guarantee `errors` is non-empty.
    pub(crate) fn new(errors: Vec<FieldError>) -> Self {
        debug_assert!(!errors.is_empty());
        Self { errors }
    }

    /// `None` when there is nothing to report.
    pub fn from_errors(errors: Vec<FieldError>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(Self::new(errors))
        }
    }

    /// The individual failures.
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Number of invalid fields.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Always `false`; provided for API symmetry with [`len`](Self::len).
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// The invalid fields, in evaluation order.
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.errors.iter().map(FieldError::field)
    }

    /// Whether `field` is among the failures.
    pub fn contains(&self, field: Field) -> bool {
        self.fields().any(|f| f == field)
    }

    /// Consumes the aggregate, returning the failures.
    pub fn into_errors(self) -> Vec<FieldError> {
        self.errors
    }
}

impl IntoIterator for ConfigError {
    type Item = FieldError;
    type IntoIter = std::vec::IntoIter<FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ConfigError {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

fn render_list(errors: &[FieldError]) -> String {
    errors.iter().map(|err| format!("\n  - {err}")).collect()
}
