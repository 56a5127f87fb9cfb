use crate::form::snapshot::{FormSnapshot, trimmed_or};

/// Declares a repeated row group: where its rows live and which named
/// sub-fields each row carries, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupSchema {
    pub container_id: &'static str,
    pub fields: &'static [&'static str],
}

pub const COURSE_GROUP: GroupSchema = GroupSchema {
    container_id: "courseList",
    fields: &["department", "number", "name", "reason"],
};

pub const LINK_GROUP: GroupSchema = GroupSchema {
    container_id: "linkList",
    fields: &["label", "url"],
};

/// One collected row: every schema field present, trimmed, in schema order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupRow {
    values: Vec<(&'static str, String)>,
}

impl GroupRow {
    /// Value of a sub-field; empty when the name is not part of the schema.
    pub fn get(&self, field: &str) -> &str {
        self.values
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, value)| value.as_str())
            .unwrap_or("")
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(|(_, value)| value.as_str())
    }

    pub fn is_blank(&self) -> bool {
        self.values().all(str::is_empty)
    }
}

/// Collects every row of a group in input order. Rows are never filtered
/// here; which rows count as blank or partial depends on the entry type.
pub fn collect_group(snapshot: &FormSnapshot, schema: &GroupSchema) -> Vec<GroupRow> {
    snapshot
        .rows(schema.container_id)
        .iter()
        .map(|row| GroupRow {
            values: schema
                .fields
                .iter()
                .map(|&field| (field, trimmed_or(row.get(field), "")))
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::snapshot::FieldValue;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_collect_fills_missing_fields_with_empty_strings() {
        let snapshot = FormSnapshot::new().with_row("courseList", [("department", " ITIS ")]);

        let rows = collect_group(&snapshot, &COURSE_GROUP);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get("department"), "ITIS");
        assert_eq!(rows[0].get("number"), "");
        assert_eq!(rows[0].get("reason"), "");
        assert_eq!(rows[0].values().count(), 4);
    }

    #[test]
    fn test_collect_keeps_blank_rows_and_order() {
        let snapshot = FormSnapshot::new()
            .with_row("linkList", [("label", "GitHub"), ("url", "https://github.com")])
            .with_row("linkList", [("label", "  "), ("url", "")])
            .with_row("linkList", [("label", "Blog"), ("url", "https://blog.example")]);

        let rows = collect_group(&snapshot, &LINK_GROUP);

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].get("label"), "GitHub");
        assert!(rows[1].is_blank());
        assert_eq!(rows[2].get("label"), "Blog");
    }

    #[test]
    fn test_collect_ignores_fields_outside_the_schema() {
        let snapshot = FormSnapshot::new().with_row(
            "linkList",
            [
                ("label", FieldValue::from("Site")),
                ("url", FieldValue::from("https://example.com")),
                ("pinned", FieldValue::Flag(true)),
            ],
        );

        let rows = collect_group(&snapshot, &LINK_GROUP);

        assert_eq!(rows[0].get("pinned"), "");
        assert_eq!(rows[0].values().collect::<Vec<_>>(), vec!["Site", "https://example.com"]);
    }

    #[test]
    fn test_non_text_sub_field_reads_as_empty() {
        let snapshot =
            FormSnapshot::new().with_row("courseList", [("number", FieldValue::Number(3135.0))]);

        let rows = collect_group(&snapshot, &COURSE_GROUP);

        assert!(rows[0].is_blank());
    }
}
