use crate::form::fields::FieldId;
use crate::image::Upload;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Raw value of one form control.
///
/// Text inputs carry text; checkboxes and number spinners do not count as
/// textual and therefore always read back as the caller's fallback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
    Number(f64),
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text),
            FieldValue::Flag(_) | FieldValue::Number(_) => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(text: &str) -> Self {
        FieldValue::Text(text.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(text: String) -> Self {
        FieldValue::Text(text)
    }
}

/// One row of a repeated group, keyed by sub-field name.
pub type FieldRow = BTreeMap<String, FieldValue>;

/// Immutable capture of the form at the moment an action fires.
///
/// Scalars are keyed by wire id, repeated groups by container id. The
/// picture upload never round-trips through snapshot files; front ends attach
/// it directly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormSnapshot {
    #[serde(default)]
    pub fields: BTreeMap<String, FieldValue>,
    #[serde(default)]
    pub groups: BTreeMap<String, Vec<FieldRow>>,
    #[serde(skip)]
    pub upload: Option<Upload>,
}

impl FormSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter, mostly for tests and templates
    pub fn with_text(mut self, field: FieldId, value: impl Into<String>) -> Self {
        self.set_text(field, value);
        self
    }

    pub fn with_row<K, V>(
        mut self,
        container_id: &str,
        row: impl IntoIterator<Item = (K, V)>,
    ) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.push_row(container_id, row);
        self
    }

    pub fn with_upload(mut self, upload: Upload) -> Self {
        self.upload = Some(upload);
        self
    }

    pub fn set_text(&mut self, field: FieldId, value: impl Into<String>) {
        self.fields
            .insert(field.as_str().to_string(), FieldValue::Text(value.into()));
    }

    pub fn push_row<K, V>(&mut self, container_id: &str, row: impl IntoIterator<Item = (K, V)>)
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        let row: FieldRow = row
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        self.groups
            .entry(container_id.to_string())
            .or_default()
            .push(row);
    }

    pub fn field(&self, field_id: &str) -> Option<&FieldValue> {
        self.fields.get(field_id)
    }

    /// Rows of a repeated group in input order; empty when the container is absent.
    pub fn rows(&self, container_id: &str) -> &[FieldRow] {
        self.groups
            .get(container_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Field accessor: the trimmed text of a field, or `fallback` when the
    /// field is absent, not textual, or blank after trimming.
    pub fn value_of(&self, field_id: &str, fallback: &str) -> String {
        trimmed_or(self.field(field_id), fallback)
    }

    /// Trimmed text of a known field with an empty fallback
    pub fn text(&self, field: FieldId) -> String {
        self.value_of(field.as_str(), "")
    }
}

pub(crate) fn trimmed_or(value: Option<&FieldValue>, fallback: &str) -> String {
    match value.and_then(FieldValue::as_text).map(str::trim) {
        Some(trimmed) if !trimmed.is_empty() => trimmed.to_string(),
        _ => fallback.to_string(),
    }
}
