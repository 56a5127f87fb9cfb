use crate::models::record::{CourseEntry, IntroductionRecord, LinkEntry};
use serde::{Deserialize, Serialize};

/// JSON projection of a record.
///
/// Field order here is the key order of the output. Renamed fields:
/// `nickname` → `preferredName`, `middle_name` → `middleInitial`,
/// `picture_src` → `image`, `picture_caption` → `imageCaption`,
/// `computer_platform` → `primaryComputer`, and a link's `label`/`url` →
/// `name`/`href`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntroductionJson {
    pub first_name: String,
    pub preferred_name: String,
    pub middle_initial: String,
    pub last_name: String,
    pub divider: String,
    pub mascot_adjective: String,
    pub mascot_animal: String,
    pub image: String,
    pub image_caption: String,
    pub personal_statement: String,
    pub personal_background: String,
    pub professional_background: String,
    pub academic_background: String,
    pub subject_background: String,
    pub primary_computer: String,
    pub courses: Vec<CourseEntry>,
    pub links: Vec<JsonLink>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonLink {
    pub name: String,
    pub href: String,
}

impl From<&IntroductionRecord> for IntroductionJson {
    fn from(record: &IntroductionRecord) -> Self {
        Self {
            first_name: record.first_name.clone(),
            preferred_name: record.nickname.clone(),
            middle_initial: record.middle_name.clone(),
            last_name: record.last_name.clone(),
            divider: record.divider.clone(),
            mascot_adjective: record.mascot_adjective.clone(),
            mascot_animal: record.mascot_animal.clone(),
            image: record.picture_src.clone(),
            image_caption: record.picture_caption.clone(),
            personal_statement: record.personal_statement.clone(),
            personal_background: record.personal_background.clone(),
            professional_background: record.professional_background.clone(),
            academic_background: record.academic_background.clone(),
            subject_background: record.subject_background.clone(),
            primary_computer: record.computer_platform.clone(),
            courses: record.courses.clone(),
            links: record
                .links
                .iter()
                .map(|link| JsonLink {
                    name: link.label.clone(),
                    href: link.url.clone(),
                })
                .collect(),
        }
    }
}

impl IntroductionJson {
    /// Writes every projected field back onto `record` through the rename
    /// table. Fields the projection does not carry are left untouched.
    pub fn apply_to(self, record: &mut IntroductionRecord) {
        record.first_name = self.first_name;
        record.nickname = self.preferred_name;
        record.middle_name = self.middle_initial;
        record.last_name = self.last_name;
        record.divider = self.divider;
        record.mascot_adjective = self.mascot_adjective;
        record.mascot_animal = self.mascot_animal;
        record.picture_src = self.image;
        record.picture_caption = self.image_caption;
        record.personal_statement = self.personal_statement;
        record.personal_background = self.personal_background;
        record.professional_background = self.professional_background;
        record.academic_background = self.academic_background;
        record.subject_background = self.subject_background;
        record.computer_platform = self.primary_computer;
        record.courses = self.courses;
        record.links = self
            .links
            .into_iter()
            .map(|link| LinkEntry::new(link.name, link.href))
            .collect();
    }
}

/// Serializes the projection with two-space indentation.
pub fn render_json(record: &IntroductionRecord) -> String {
    serde_json::to_string_pretty(&IntroductionJson::from(record))
        .expect("introduction JSON only contains strings and lists")
}
