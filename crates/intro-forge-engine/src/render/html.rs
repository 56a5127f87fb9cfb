//! Section layout shared by the document and markup renderers. The two only
//! differ in how interpolated values are encoded and in their outer wrapper.

use crate::models::record::{CourseEntry, IntroductionRecord, LinkEntry};
use std::borrow::Cow;

/// How interpolated values are written into the layout
pub(crate) trait Encoding {
    fn encode<'a>(&self, value: &'a str) -> Cow<'a, str>;
}

/// Values go in as-is; the fragment is inserted as live markup.
pub(crate) struct Trusted;

impl Encoding for Trusted {
    fn encode<'a>(&self, value: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(value)
    }
}

/// Escapes `&`, `<`, `>`, `"` and `'` and nothing else.
pub(crate) struct Escaped;

impl Encoding for Escaped {
    fn encode<'a>(&self, value: &'a str) -> Cow<'a, str> {
        html_escape::encode_quoted_attribute(value)
    }
}

pub(crate) struct Layout<'e> {
    pub section_class: &'static str,
    pub title: Option<&'static str>,
    /// Wrap the favorite quote in literal double quotes
    pub quote_marks: bool,
    pub encoding: &'e dyn Encoding,
}

struct HtmlWriter {
    out: String,
    depth: usize,
}

impl HtmlWriter {
    fn new() -> Self {
        Self {
            out: String::new(),
            depth: 0,
        }
    }

    fn line(&mut self, text: &str) {
        for _ in 0..self.depth {
            self.out.push_str("  ");
        }
        self.out.push_str(text);
        self.out.push('\n');
    }

    fn open(&mut self, tag: &str) {
        self.line(tag);
        self.depth += 1;
    }

    fn close(&mut self, tag: &str) {
        self.depth = self.depth.saturating_sub(1);
        self.line(tag);
    }

    fn finish(mut self) -> String {
        while self.out.ends_with('\n') {
            self.out.pop();
        }
        self.out
    }
}

pub(crate) fn write_introduction(record: &IntroductionRecord, layout: &Layout<'_>) -> String {
    let enc = |value: &str| layout.encoding.encode(value).into_owned();
    let mut w = HtmlWriter::new();

    w.open(&format!("<section class=\"{}\">", layout.section_class));
    if let Some(title) = layout.title {
        w.line(&format!("<h2>{title}</h2>"));
    }

    let name = record.display_name_with(|value| layout.encoding.encode(value));
    w.line(&format!("<h3 class=\"display-line\">{name}</h3>"));

    let acknowledgment = record.acknowledgment();
    if !acknowledgment.is_empty() {
        w.line(&format!("<p><em>{}</em></p>", enc(&acknowledgment)));
    }

    if !record.personal_statement.is_empty() {
        w.line(&format!(
            "<p class=\"personal-statement\">{}</p>",
            enc(&record.personal_statement)
        ));
    }

    w.open("<figure class=\"profile-figure\">");
    w.line(&format!(
        "<img src=\"{}\" alt=\"{}\" class=\"headshot\">",
        enc(&record.picture_src),
        enc(&record.picture_alt)
    ));
    if !record.picture_caption.is_empty() {
        w.line(&format!("<figcaption>{}</figcaption>", enc(&record.picture_caption)));
    }
    w.close("</figure>");

    write_background(&mut w, record, &enc);
    write_links(&mut w, &record.links, &enc);
    write_quote(&mut w, record, layout.quote_marks, &enc);

    w.close("</section>");
    w.finish()
}

fn write_background(
    w: &mut HtmlWriter,
    record: &IntroductionRecord,
    enc: &dyn Fn(&str) -> String,
) {
    w.open("<section class=\"content-block\">");
    w.line("<h3>Background and Course Information</h3>");
    w.open("<ul class=\"info-list\">");

    let fixed = [
        ("Personal Background", &record.personal_background),
        ("Professional Background", &record.professional_background),
        ("Academic Background", &record.academic_background),
        ("Background in this Subject", &record.subject_background),
        ("Primary Computer Platform", &record.computer_platform),
    ];
    for (label, value) in fixed {
        w.line(&format!("<li><strong>{label}:</strong> {}</li>", enc(value)));
    }

    if !record.courses.is_empty() {
        w.open("<li>");
        w.line("<strong>Courses I'm Taking &amp; Why:</strong>");
        w.open("<ul>");
        for course in &record.courses {
            w.line(&format!("<li>{}</li>", course_item(course, enc)));
        }
        w.close("</ul>");
        w.close("</li>");
    }

    if !record.funny_thing.is_empty() {
        w.line(&format!(
            "<li><strong>Funny/Interesting Item to Remember me by:</strong> {}</li>",
            enc(&record.funny_thing)
        ));
    }
    if !record.extra_share.is_empty() {
        w.line(&format!(
            "<li><strong>Something I'd like to share:</strong> {}</li>",
            enc(&record.extra_share)
        ));
    }

    w.close("</ul>");
    w.close("</section>");
}

/// `<strong>DEPT NUM - Name:</strong> reason`, degrading when parts are missing
fn course_item(course: &CourseEntry, enc: &dyn Fn(&str) -> String) -> String {
    let label = [course.code(), course.name.clone()]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" - ");

    match (label.is_empty(), course.reason.is_empty()) {
        (false, false) => format!("<strong>{}:</strong> {}", enc(&label), enc(&course.reason)),
        (false, true) => format!("<strong>{}</strong>", enc(&label)),
        (true, _) => enc(&course.reason),
    }
}

fn write_links(w: &mut HtmlWriter, links: &[LinkEntry], enc: &dyn Fn(&str) -> String) {
    if links.is_empty() {
        return;
    }

    w.open("<section class=\"content-block\">");
    w.line("<h3>Links</h3>");
    w.open("<ul class=\"info-list\">");
    for link in links {
        w.line(&format!(
            "<li><a href=\"{}\" target=\"_blank\" rel=\"noopener\">{}</a></li>",
            enc(&link.url),
            enc(&link.label)
        ));
    }
    w.close("</ul>");
    w.close("</section>");
}

fn write_quote(
    w: &mut HtmlWriter,
    record: &IntroductionRecord,
    quote_marks: bool,
    enc: &dyn Fn(&str) -> String,
) {
    if record.quote.is_empty() && record.quote_author.is_empty() {
        return;
    }

    let mut text = String::new();
    if !record.quote.is_empty() {
        let quote = enc(&record.quote);
        if quote_marks {
            text.push_str(&format!("\"{quote}\""));
        } else {
            text.push_str(&quote);
        }
    }
    if !record.quote_author.is_empty() {
        if !text.is_empty() {
            text.push_str("<br>");
        }
        text.push_str(&format!("- <em>{}</em>", enc(&record.quote_author)));
    }

    w.open("<section>");
    w.line("<h3>Favorite Quote</h3>");
    w.line(&format!("<p class=\"favorite-quote\">{text}</p>"));
    w.close("</section>");
}
