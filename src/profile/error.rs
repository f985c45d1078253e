use thiserror::Error;

use crate::profile::ProfileField;

/// Commit was refused because required fields are empty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("missing required fields: {}", field_list(.missing))]
pub struct ValidationError {
    /// Every empty required field, in form order
    pub missing: Vec<ProfileField>,
}

impl ValidationError {
    pub fn is_missing(&self, field: ProfileField) -> bool {
        self.missing.contains(&field)
    }
}

/// A field or collection name that the draft does not have.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown profile field: '{0}'")]
pub struct UnknownField(pub String);

fn field_list(fields: &[ProfileField]) -> String {
    fields
        .iter()
        .map(|f| f.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
