use crate::form::fields::FieldId;
use crate::form::groups::{COURSE_GROUP, LINK_GROUP, collect_group};
use crate::form::snapshot::FormSnapshot;
use crate::models::record::{CourseEntry, IntroductionRecord, LinkEntry};
use serde::{Deserialize, Serialize};

pub const DEFAULT_DIVIDER: &str = "~";
pub const DEFAULT_PICTURE_URL: &str = "images/headshot.jpg";

/// Values substituted for blank scalar fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordDefaults {
    pub divider: String,
    pub picture_url: String,
}

impl Default for RecordDefaults {
    fn default() -> Self {
        Self {
            divider: DEFAULT_DIVIDER.to_string(),
            picture_url: DEFAULT_PICTURE_URL.to_string(),
        }
    }
}

/// Assembles an [`IntroductionRecord`] from a snapshot.
///
/// Building is synchronous and pure: the same snapshot always yields the
/// same record. The picture source starts out as the picture reference; the
/// caller swaps in the resolved upload once it is known.
#[derive(Debug, Clone, Default)]
pub struct RecordBuilder {
    defaults: RecordDefaults,
}

impl RecordBuilder {
    pub fn new(defaults: RecordDefaults) -> Self {
        Self { defaults }
    }

    /// Picture reference of a snapshot, i.e. the fallback for picture resolution
    pub fn picture_url(&self, snapshot: &FormSnapshot) -> String {
        snapshot.value_of(FieldId::PictureUrl.as_str(), &self.defaults.picture_url)
    }

    pub fn build(&self, snapshot: &FormSnapshot) -> IntroductionRecord {
        let text = |field: FieldId| snapshot.text(field);

        let first_name = text(FieldId::FirstName);
        let last_name = text(FieldId::LastName);
        let default_alt = format!("{first_name} {last_name}").trim().to_string();
        let picture_url = self.picture_url(snapshot);

        IntroductionRecord {
            middle_name: text(FieldId::MiddleName),
            nickname: text(FieldId::Nickname),
            ack_statement: text(FieldId::AckStatement),
            ack_initials: text(FieldId::AckInitials),
            ack_date: text(FieldId::AckDate),
            mascot_adjective: text(FieldId::MascotAdjective),
            mascot_animal: text(FieldId::MascotAnimal),
            divider: snapshot.value_of(FieldId::Divider.as_str(), &self.defaults.divider),
            personal_statement: text(FieldId::PersonalStatement),
            picture_src: picture_url.clone(),
            picture_url,
            picture_alt: snapshot.value_of(FieldId::PictureAlt.as_str(), &default_alt),
            picture_caption: text(FieldId::PictureCaption),
            personal_background: text(FieldId::PersonalBackground),
            professional_background: text(FieldId::ProfessionalBackground),
            academic_background: text(FieldId::AcademicBackground),
            subject_background: text(FieldId::SubjectBackground),
            computer_platform: text(FieldId::ComputerPlatform),
            funny_thing: text(FieldId::FunnyThing),
            extra_share: text(FieldId::ExtraShare),
            quote: text(FieldId::Quote),
            quote_author: text(FieldId::QuoteAuthor),
            courses: collect_courses(snapshot),
            links: collect_links(snapshot),
            first_name,
            last_name,
        }
    }
}

/// Non-blank course rows in input order
pub fn collect_courses(snapshot: &FormSnapshot) -> Vec<CourseEntry> {
    collect_group(snapshot, &COURSE_GROUP)
        .into_iter()
        .map(|row| {
            CourseEntry::new(
                row.get("department"),
                row.get("number"),
                row.get("name"),
                row.get("reason"),
            )
        })
        .filter(|course| !course.is_blank())
        .collect()
}

/// Complete link rows in input order
pub fn collect_links(snapshot: &FormSnapshot) -> Vec<LinkEntry> {
    collect_group(snapshot, &LINK_GROUP)
        .into_iter()
        .map(|row| LinkEntry::new(row.get("label"), row.get("url")))
        .filter(LinkEntry::is_complete)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::sample_snapshot;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_blank_scalars_use_defaults() {
        let record = RecordBuilder::default().build(&FormSnapshot::new());

        assert_eq!(record.divider, "~");
        assert_eq!(record.picture_url, "images/headshot.jpg");
        assert_eq!(record.picture_src, "images/headshot.jpg");
        assert_eq!(record.picture_alt, "");
        assert!(record.courses.is_empty());
        assert!(record.links.is_empty());
    }

    #[test]
    fn test_configured_defaults_are_used() {
        let builder = RecordBuilder::new(RecordDefaults {
            divider: "|".to_string(),
            picture_url: "me.png".to_string(),
        });

        let record = builder.build(&FormSnapshot::new().with_text(FieldId::Divider, "  "));

        assert_eq!(record.divider, "|");
        assert_eq!(record.picture_src, "me.png");
    }

    #[test]
    fn test_picture_alt_defaults_to_full_name() {
        let snapshot = FormSnapshot::new()
            .with_text(FieldId::FirstName, "Ada")
            .with_text(FieldId::LastName, "Byron");

        assert_eq!(RecordBuilder::default().build(&snapshot).picture_alt, "Ada Byron");

        let only_first = FormSnapshot::new().with_text(FieldId::FirstName, "Ada");
        assert_eq!(RecordBuilder::default().build(&only_first).picture_alt, "Ada");
    }

    #[test]
    fn test_blank_courses_are_dropped_in_place() {
        let snapshot = FormSnapshot::new()
            .with_row("courseList", [("department", "ITIS"), ("number", "3135")])
            .with_row("courseList", [("department", " "), ("reason", "")])
            .with_row("courseList", [("reason", "Because")]);

        let courses = RecordBuilder::default().build(&snapshot).courses;

        assert_eq!(
            courses,
            vec![
                CourseEntry::new("ITIS", "3135", "", ""),
                CourseEntry::new("", "", "", "Because"),
            ]
        );
    }

    #[test]
    fn test_partial_links_are_dropped() {
        let snapshot = FormSnapshot::new()
            .with_row("linkList", [("label", "GitHub"), ("url", "https://github.com/ada")])
            .with_row("linkList", [("label", "Orphan label")])
            .with_row("linkList", [("url", "https://orphan.example")])
            .with_row("linkList", [("label", "Blog"), ("url", "https://ada.example")]);

        let links = RecordBuilder::default().build(&snapshot).links;

        assert_eq!(
            links,
            vec![
                LinkEntry::new("GitHub", "https://github.com/ada"),
                LinkEntry::new("Blog", "https://ada.example"),
            ]
        );
    }

    #[test]
    fn test_build_is_referentially_transparent() {
        let builder = RecordBuilder::default();
        let snapshot = sample_snapshot();
        assert_eq!(builder.build(&snapshot), builder.build(&snapshot));
    }

    #[test]
    fn test_with_picture_src_leaves_reference_untouched() {
        let record = RecordBuilder::default()
            .build(&sample_snapshot())
            .with_picture_src("data:image/png;base64,AAAA");

        assert_eq!(record.picture_src, "data:image/png;base64,AAAA");
        assert_eq!(record.picture_url, "images/ada.jpg");
    }
}
