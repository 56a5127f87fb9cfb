use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// One course the author is taking. Every part is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseEntry {
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub number: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub reason: String,
}

impl CourseEntry {
    pub fn new(
        department: impl Into<String>,
        number: impl Into<String>,
        name: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            department: department.into(),
            number: number.into(),
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// A course with nothing filled in is left out of every rendering
    pub fn is_blank(&self) -> bool {
        self.department.is_empty()
            && self.number.is_empty()
            && self.name.is_empty()
            && self.reason.is_empty()
    }

    /// `DEPT NUM`, skipping whichever half is missing
    pub fn code(&self) -> String {
        [self.department.as_str(), self.number.as_str()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// One external link. Only complete links are rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkEntry {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub url: String,
}

impl LinkEntry {
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.label.is_empty() && !self.url.is_empty()
    }
}

/// Canonical representation of one completed introduction form.
///
/// Built fresh from a snapshot for every generation. Scalars are already
/// trimmed and defaulted; the course and link lists are already filtered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntroductionRecord {
    pub first_name: String,
    pub middle_name: String,
    pub nickname: String,
    pub last_name: String,
    pub ack_statement: String,
    pub ack_initials: String,
    pub ack_date: String,
    pub mascot_adjective: String,
    pub mascot_animal: String,
    pub divider: String,
    pub personal_statement: String,
    /// The picture reference typed into the form (or its default)
    pub picture_url: String,
    /// What renderers put in `src`: the resolved upload or `picture_url`
    pub picture_src: String,
    pub picture_alt: String,
    pub picture_caption: String,
    pub personal_background: String,
    pub professional_background: String,
    pub academic_background: String,
    pub subject_background: String,
    pub computer_platform: String,
    pub funny_thing: String,
    pub extra_share: String,
    pub quote: String,
    pub quote_author: String,
    pub courses: Vec<CourseEntry>,
    pub links: Vec<LinkEntry>,
}

impl IntroductionRecord {
    /// Injects the image source produced by picture resolution.
    pub fn with_picture_src(mut self, picture_src: impl Into<String>) -> Self {
        self.picture_src = picture_src.into();
        self
    }

    /// `first [middle] ["nickname"] last <divider> [adjective] [animal]`,
    /// dropping whatever is empty.
    pub fn display_name(&self) -> String {
        self.display_name_with(Cow::Borrowed)
    }

    /// Same composition as [`Self::display_name`] with every value passed
    /// through `encode` first. The quotes around the nickname are not encoded.
    pub fn display_name_with<'a, F>(&'a self, encode: F) -> String
    where
        F: Fn(&'a str) -> Cow<'a, str>,
    {
        let nickname = if self.nickname.is_empty() {
            Cow::Borrowed("")
        } else {
            Cow::Owned(format!("\"{}\"", encode(self.nickname.as_str())))
        };

        [
            encode(self.first_name.as_str()),
            encode(self.middle_name.as_str()),
            nickname,
            encode(self.last_name.as_str()),
            encode(self.divider.as_str()),
            encode(self.mascot_adjective.as_str()),
            encode(self.mascot_animal.as_str()),
        ]
        .iter()
        .map(|part| &**part)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
    }

    /// `statement - initials, date` with empty pieces and their separators dropped
    pub fn acknowledgment(&self) -> String {
        let signature = join_non_empty(&[self.ack_initials.as_str(), self.ack_date.as_str()], ", ");
        join_non_empty(&[self.ack_statement.as_str(), signature.as_str()], " - ")
    }
}

fn join_non_empty(parts: &[&str], separator: &str) -> String {
    parts
        .iter()
        .copied()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(separator)
}
