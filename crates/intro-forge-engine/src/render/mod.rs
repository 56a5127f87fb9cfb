//! The three renderers. Each is a pure function of an
//! [`IntroductionRecord`]: the same record always renders to the same bytes,
//! and missing optional values only ever drop sections, never fail.

pub mod document;
mod html;
pub mod json;
pub mod markup;

use crate::models::record::IntroductionRecord;
use serde::{Deserialize, Serialize};
use std::fmt;

pub use document::render_document;
pub use json::{IntroductionJson, JsonLink, render_json};
pub use markup::render_markup;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// Live document fragment
    Document,
    /// Escaped HTML shown as source text
    Markup,
    /// JSON projection shown as source text
    Json,
}

impl RenderMode {
    pub const ALL: [RenderMode; 3] = [RenderMode::Document, RenderMode::Markup, RenderMode::Json];

    pub fn as_str(self) -> &'static str {
        match self {
            RenderMode::Document => "document",
            RenderMode::Markup => "markup",
            RenderMode::Json => "json",
        }
    }

    /// Source language of the payload when it is displayed as text
    pub fn source_language(self) -> Option<&'static str> {
        match self {
            RenderMode::Document => None,
            RenderMode::Markup => Some("html"),
            RenderMode::Json => Some("json"),
        }
    }
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A finished display payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub mode: RenderMode,
    pub body: String,
}

impl Rendered {
    /// Whether the body must be shown as literal text rather than live markup
    pub fn is_source(&self) -> bool {
        self.mode.source_language().is_some()
    }
}

pub fn render(mode: RenderMode, record: &IntroductionRecord) -> Rendered {
    let body = match mode {
        RenderMode::Document => render_document(record),
        RenderMode::Markup => render_markup(record),
        RenderMode::Json => render_json(record),
    };
    Rendered { mode, body }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::builder::RecordBuilder;
    use crate::tests::sample_snapshot;

    #[test]
    fn test_every_renderer_is_deterministic() {
        let record = RecordBuilder::default().build(&sample_snapshot());

        for mode in RenderMode::ALL {
            assert_eq!(render(mode, &record), render(mode, &record), "{mode} output changed");
        }
    }

    #[test]
    fn test_every_renderer_accepts_an_empty_record() {
        let record = IntroductionRecord::default();

        for mode in RenderMode::ALL {
            assert!(!render(mode, &record).body.is_empty(), "{mode} rendered nothing");
        }
    }

    #[test]
    fn test_blank_courses_never_reach_any_output() {
        let record = RecordBuilder::default().build(&sample_snapshot());
        let course_count = record.courses.len();
        assert_eq!(course_count, 2);

        let document = render(RenderMode::Document, &record).body;
        let markup = render(RenderMode::Markup, &record).body;
        let json: IntroductionJson =
            serde_json::from_str(&render(RenderMode::Json, &record).body).unwrap();

        let course_items = |html: &str| {
            html.matches("<li><strong>ITIS").count() + html.matches("<li><strong>STAT").count()
        };
        assert_eq!(course_items(&document), course_count);
        assert_eq!(course_items(&markup), course_count);
        assert_eq!(json.courses.len(), course_count);
    }

    #[test]
    fn test_only_document_is_live_markup() {
        let record = IntroductionRecord::default();
        assert!(!render(RenderMode::Document, &record).is_source());
        assert!(render(RenderMode::Markup, &record).is_source());
        assert!(render(RenderMode::Json, &record).is_source());
    }
}
