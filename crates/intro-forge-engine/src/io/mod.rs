//! Snapshot files: the on-disk stand-in for a filled-in form.

use crate::form::editable::IntroductionForm;
use crate::form::fields::FieldId;
use crate::form::groups::{COURSE_GROUP, GroupSchema, LINK_GROUP};
use crate::form::snapshot::FormSnapshot;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("Failed to read snapshot {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse TOML snapshot: {0}")]
    ParseToml(#[from] toml::de::Error),
    #[error("Failed to parse JSON snapshot: {0}")]
    ParseJson(#[from] serde_json::Error),
    #[error("Unsupported snapshot format: {0}")]
    UnsupportedFormat(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotFormat {
    Toml,
    Json,
}

impl SnapshotFormat {
    /// Picks the format from a file extension, case-insensitively
    pub fn from_path(path: &Path) -> Result<Self, SnapshotError> {
        let extension = path
            .extension()
            .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();
        match extension.as_str() {
            "toml" => Ok(SnapshotFormat::Toml),
            "json" => Ok(SnapshotFormat::Json),
            _ => Err(SnapshotError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

impl fmt::Display for SnapshotFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotFormat::Toml => f.write_str("toml"),
            SnapshotFormat::Json => f.write_str("json"),
        }
    }
}

/// Read a snapshot file, choosing the parser by extension
pub fn load_snapshot(path: &Path) -> Result<FormSnapshot, SnapshotError> {
    let format = SnapshotFormat::from_path(path)?;
    let content = fs::read_to_string(path).map_err(|source| SnapshotError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("Loaded {format} snapshot from {}", path.display());
    let snapshot = parse_snapshot(&content, format)?;
    for slot in non_text_values(&snapshot) {
        log::warn!(
            "{}: {slot} is not text and will be read as blank; quote the value",
            path.display()
        );
    }
    Ok(snapshot)
}

pub fn parse_snapshot(
    content: &str,
    format: SnapshotFormat,
) -> Result<FormSnapshot, SnapshotError> {
    let snapshot = match format {
        SnapshotFormat::Toml => toml::from_str(content)?,
        SnapshotFormat::Json => serde_json::from_str(content)?,
    };
    Ok(snapshot)
}

/// Text slots holding a flag or number, e.g. `number = 3135` instead of
/// `number = "3135"`. Such values read as blank, which can silently drop a
/// course or link row. Fields and sub-fields the form does not know are
/// ignored.
pub fn non_text_values(snapshot: &FormSnapshot) -> Vec<String> {
    let fields = snapshot
        .fields
        .iter()
        .filter(|(id, value)| FieldId::from_wire(id).is_some() && value.as_text().is_none())
        .map(|(id, _)| id.clone());

    let groups = [COURSE_GROUP, LINK_GROUP]
        .into_iter()
        .flat_map(|schema| non_text_sub_fields(snapshot, schema));

    fields.chain(groups).collect()
}

fn non_text_sub_fields(snapshot: &FormSnapshot, schema: GroupSchema) -> Vec<String> {
    snapshot
        .rows(schema.container_id)
        .iter()
        .enumerate()
        .flat_map(|(index, row)| {
            schema
                .fields
                .iter()
                .filter(move |&&field| {
                    row.get(field)
                        .is_some_and(|value| value.as_text().is_none())
                })
                .map(move |field| format!("{}[{index}].{field}", schema.container_id))
        })
        .collect()
}

/// A snapshot of `form` in which every known field is present, blank when
/// the form has no value for it. Used as a starting point for hand-written
/// snapshot files.
pub fn template_snapshot(form: &IntroductionForm) -> FormSnapshot {
    let mut snapshot = form.snapshot();
    for field in FieldId::ALL {
        if snapshot.field(field.as_str()).is_none() {
            snapshot.set_text(field, "");
        }
    }
    snapshot
}

const SERIALIZABLE: &str = "snapshot maps only hold strings, bools and numbers";

pub fn write_snapshot(snapshot: &FormSnapshot, format: SnapshotFormat) -> String {
    match format {
        SnapshotFormat::Toml => toml::to_string_pretty(snapshot).expect(SERIALIZABLE),
        SnapshotFormat::Json => serde_json::to_string_pretty(snapshot).expect(SERIALIZABLE),
    }
}
