use super::html::{Escaped, Layout, write_introduction};
use crate::models::record::IntroductionRecord;

pub const MARKUP_TITLE: &str = "Introduction HTML";

/// Renders the introduction as HTML source meant to be displayed as text.
/// Every interpolated value has `& < > " '` escaped; nothing else is touched.
pub fn render_markup(record: &IntroductionRecord) -> String {
    let layout = Layout {
        section_class: "introduction-html",
        title: Some(MARKUP_TITLE),
        quote_marks: false,
        encoding: &Escaped,
    };
    write_introduction(record, &layout)
}
