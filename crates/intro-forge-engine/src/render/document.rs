use super::html::{Layout, Trusted, write_introduction};
use crate::models::record::IntroductionRecord;

/// Renders the introduction as a live fragment. Values are inserted unescaped,
/// the same trust the form itself extends to what the user types.
pub fn render_document(record: &IntroductionRecord) -> String {
    let layout = Layout {
        section_class: "introduction",
        title: None,
        quote_marks: true,
        encoding: &Trusted,
    };
    write_introduction(record, &layout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::builder::RecordBuilder;
    use crate::models::record::{CourseEntry, LinkEntry};
    use crate::tests::sample_snapshot;

    fn sample() -> IntroductionRecord {
        RecordBuilder::default().build(&sample_snapshot())
    }

    #[test]
    fn test_sections_appear_in_layout_order() {
        let html = render_document(&sample());

        let positions: Vec<_> = [
            "class=\"display-line\"",
            "<p><em>",
            "personal-statement",
            "profile-figure",
            "Background and Course Information",
            "Courses I'm Taking",
            "<h3>Links</h3>",
            "Favorite Quote",
        ]
        .iter()
        .map(|needle| html.find(needle).unwrap_or_else(|| panic!("missing {needle}")))
        .collect();

        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]), "{positions:?}");
    }

    #[test]
    fn test_values_are_not_escaped() {
        let record = IntroductionRecord {
            personal_statement: "I <em>love</em> R&D".to_string(),
            ..sample()
        };

        let html = render_document(&record);

        assert!(html.contains("<p class=\"personal-statement\">I <em>love</em> R&D</p>"));
        assert!(html.contains("Web Design & Development"));
    }

    #[test]
    fn test_name_line_and_acknowledgment() {
        let html = render_document(&sample());

        assert!(html.contains(
            "<h3 class=\"display-line\">Ada K \"Lovelace\" Byron :: fearless owl</h3>"
        ));
        assert!(html.contains(
            "<p><em>I will only share what I want public - AB, 2024-08-26</em></p>"
        ));
    }

    #[test]
    fn test_course_items() {
        let html = render_document(&sample());

        assert!(html.contains(
            "<li><strong>ITIS 3135 - Web Design & Development:</strong> Required, but fun.</li>"
        ));
        assert!(html.contains("<li><strong>STAT 2122:</strong> Required.</li>"));
    }

    #[test]
    fn test_course_without_label_or_reason() {
        let record = IntroductionRecord {
            courses: vec![
                CourseEntry::new("", "", "", "Just because"),
                CourseEntry::new("GEOG", "", "", ""),
            ],
            ..Default::default()
        };

        let html = render_document(&record);

        assert!(html.contains("<li>Just because</li>"));
        assert!(html.contains("<li><strong>GEOG</strong></li>"));
    }

    #[test]
    fn test_optional_sections_are_omitted() {
        let record = IntroductionRecord {
            divider: "~".to_string(),
            ..Default::default()
        };

        let html = render_document(&record);

        assert!(!html.contains("<p><em>"));
        assert!(!html.contains("personal-statement"));
        assert!(!html.contains("figcaption"));
        assert!(!html.contains("Courses I'm Taking"));
        assert!(!html.contains("Funny/Interesting"));
        assert!(!html.contains("Something I'd like to share"));
        assert!(!html.contains("<h3>Links</h3>"));
        assert!(!html.contains("Favorite Quote"));
        // the five fixed background items are always there
        assert_eq!(html.matches("<li><strong>").count(), 5);
    }

    #[test]
    fn test_links_keep_input_order() {
        let record = IntroductionRecord {
            links: vec![
                LinkEntry::new("GitHub", "https://github.com/ada"),
                LinkEntry::new("Blog", "https://ada.example"),
            ],
            ..Default::default()
        };

        let html = render_document(&record);

        let github = html.find(">GitHub</a>").unwrap();
        let blog = html.find(">Blog</a>").unwrap();
        assert!(github < blog);
        assert!(html.contains(
            "<a href=\"https://github.com/ada\" target=\"_blank\" rel=\"noopener\">GitHub</a>"
        ));
    }

    #[test]
    fn test_quote_with_author_only() {
        let record = IntroductionRecord {
            quote_author: "Anonymous".to_string(),
            ..Default::default()
        };

        let html = render_document(&record);

        assert!(html.contains("<p class=\"favorite-quote\">- <em>Anonymous</em></p>"));
    }

    #[test]
    fn test_quote_is_wrapped_in_quote_marks() {
        let record = IntroductionRecord {
            quote: "Imagination is the discovering faculty".to_string(),
            quote_author: "Ada Lovelace".to_string(),
            ..Default::default()
        };

        let html = render_document(&record);

        assert!(html.contains(
            "<p class=\"favorite-quote\">\"Imagination is the discovering faculty\"<br>\
             - <em>Ada Lovelace</em></p>"
        ));
    }

    #[test]
    fn test_extra_items_when_present() {
        let record = IntroductionRecord {
            funny_thing: "I juggle".to_string(),
            extra_share: "I bake".to_string(),
            ..Default::default()
        };

        let html = render_document(&record);

        assert!(html.contains(
            "<li><strong>Funny/Interesting Item to Remember me by:</strong> I juggle</li>"
        ));
        assert!(html.contains("<li><strong>Something I'd like to share:</strong> I bake</li>"));
    }
}
