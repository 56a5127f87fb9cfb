//! Shared fixtures for unit tests

use crate::form::fields::FieldId;
use crate::form::snapshot::FormSnapshot;
use crate::models::record::CourseEntry;

/// Only the fields the default rules require, all well-formed
pub fn valid_snapshot() -> FormSnapshot {
    FormSnapshot::new()
        .with_text(FieldId::FirstName, "Ada")
        .with_text(FieldId::LastName, "Byron")
        .with_text(FieldId::AckStatement, "I will only share what I want public")
        .with_text(FieldId::AckInitials, "AB")
        .with_text(FieldId::AckDate, "2024-08-26")
        .with_text(FieldId::MascotAdjective, "fearless")
        .with_text(FieldId::MascotAnimal, "owl")
}

/// A fully populated, valid snapshot including a blank course row and a
/// partial link row
pub fn sample_snapshot() -> FormSnapshot {
    valid_snapshot()
        .with_text(FieldId::MiddleName, "K")
        .with_text(FieldId::Nickname, "Lovelace")
        .with_text(FieldId::Divider, "::")
        .with_text(FieldId::PersonalStatement, "I like engines.")
        .with_text(FieldId::PictureUrl, "images/ada.jpg")
        .with_text(FieldId::PictureCaption, "At the analytical engine")
        .with_text(FieldId::PersonalBackground, "Raised in London.")
        .with_text(FieldId::ProfessionalBackground, "Wrote the first program.")
        .with_text(FieldId::AcademicBackground, "Tutored in mathematics.")
        .with_text(FieldId::SubjectBackground, "Some HTML.")
        .with_text(FieldId::ComputerPlatform, "Difference engine")
        .with_text(FieldId::Quote, "That brain of mine is something more than merely mortal.")
        .with_text(FieldId::QuoteAuthor, "Ada Lovelace")
        .with_row(
            "courseList",
            [
                ("department", "ITIS"),
                ("number", "3135"),
                ("name", "Web Design & Development"),
                ("reason", "Required, but fun."),
            ],
        )
        .with_row("courseList", [("department", ""), ("number", "")])
        .with_row(
            "courseList",
            [("department", "STAT"), ("number", "2122"), ("reason", "Required.")],
        )
        .with_row("linkList", [("label", "GitHub"), ("url", "https://github.com/ada")])
        .with_row("linkList", [("label", "Half a link")])
}

pub fn default_courses() -> Vec<CourseEntry> {
    vec![
        CourseEntry::new("ITIS", "3135", "Web Design & Development", "Required for my major."),
        CourseEntry::new("ITSC", "3155", "Software Engineering", "Also required for major."),
    ]
}
