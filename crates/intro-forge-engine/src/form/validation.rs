use crate::form::fields::FieldId;
use crate::form::groups::{LINK_GROUP, collect_group};
use crate::form::snapshot::FormSnapshot;
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// Which control a validation issue points at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueTarget {
    Field(FieldId),
    /// Zero-based row of the link group
    LinkUrl(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueKind {
    Missing,
    BadDate,
    BadInitials,
    BadUrl,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationIssue {
    pub target: IssueTarget,
    pub kind: IssueKind,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self.target {
            IssueTarget::Field(field) => field.label().to_string(),
            IssueTarget::LinkUrl(row) => format!("Link {} URL", row + 1),
        };
        match self.kind {
            IssueKind::Missing => write!(f, "{name} is required"),
            IssueKind::BadDate => write!(f, "{name} must be a date like 2024-08-26"),
            IssueKind::BadInitials => write!(f, "{name} must be 1 to 5 letters"),
            IssueKind::BadUrl => write!(f, "{name} must be an absolute URL"),
        }
    }
}

/// Every issue found in one validation pass, in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq, thiserror::Error)]
#[error("form has {} invalid field(s)", .issues.len())]
pub struct ValidationReport {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn has_issue_for(&self, target: IssueTarget) -> bool {
        self.issues.iter().any(|issue| issue.target == target)
    }
}

/// Constraint set checked before any generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormRules {
    pub required: Vec<FieldId>,
}

impl Default for FormRules {
    fn default() -> Self {
        Self {
            required: vec![
                FieldId::FirstName,
                FieldId::LastName,
                FieldId::AckStatement,
                FieldId::AckInitials,
                FieldId::AckDate,
                FieldId::MascotAdjective,
                FieldId::MascotAnimal,
            ],
        }
    }
}

impl FormRules {
    pub fn validate(&self, snapshot: &FormSnapshot) -> ValidationReport {
        let mut issues = Vec::new();

        for field in FieldId::ALL {
            let value = snapshot.text(field);
            if value.is_empty() {
                if self.required.contains(&field) {
                    issues.push(ValidationIssue {
                        target: IssueTarget::Field(field),
                        kind: IssueKind::Missing,
                    });
                }
                continue;
            }

            let kind = match field {
                FieldId::AckDate if !date_pattern().is_match(&value) => Some(IssueKind::BadDate),
                FieldId::AckInitials if !initials_pattern().is_match(&value) => {
                    Some(IssueKind::BadInitials)
                }
                _ => None,
            };
            if let Some(kind) = kind {
                issues.push(ValidationIssue {
                    target: IssueTarget::Field(field),
                    kind,
                });
            }
        }

        for (row, link) in collect_group(snapshot, &LINK_GROUP).iter().enumerate() {
            let url = link.get("url");
            if !url.is_empty() && !url_pattern().is_match(url) {
                issues.push(ValidationIssue {
                    target: IssueTarget::LinkUrl(row),
                    kind: IssueKind::BadUrl,
                });
            }
        }

        ValidationReport { issues }
    }
}

fn date_pattern() -> &'static Regex {
    static DATE_REGEX: OnceLock<Regex> = OnceLock::new();
    DATE_REGEX.get_or_init(|| {
        Regex::new(r"^\d{4}-(0[1-9]|1[0-2])-(0[1-9]|[12]\d|3[01])$").expect("Invalid date regex")
    })
}

fn initials_pattern() -> &'static Regex {
    static INITIALS_REGEX: OnceLock<Regex> = OnceLock::new();
    INITIALS_REGEX.get_or_init(|| Regex::new(r"^[A-Za-z.]{1,5}$").expect("Invalid initials regex"))
}

fn url_pattern() -> &'static Regex {
    static URL_REGEX: OnceLock<Regex> = OnceLock::new();
    URL_REGEX
        .get_or_init(|| Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*:\S+$").expect("Invalid URL regex"))
}
