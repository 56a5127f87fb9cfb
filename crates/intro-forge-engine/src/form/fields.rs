use std::fmt;

/// Identifies one scalar field of the introduction form.
///
/// Each variant has a stable wire id (the `id` attribute the field carries in
/// the form and the key it uses in snapshot files).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldId {
    FirstName,
    MiddleName,
    Nickname,
    LastName,
    AckStatement,
    AckInitials,
    AckDate,
    MascotAdjective,
    MascotAnimal,
    Divider,
    PersonalStatement,
    PictureUrl,
    PictureAlt,
    PictureCaption,
    PersonalBackground,
    ProfessionalBackground,
    AcademicBackground,
    SubjectBackground,
    ComputerPlatform,
    FunnyThing,
    ExtraShare,
    Quote,
    QuoteAuthor,
}

impl FieldId {
    /// Every field in form order.
    pub const ALL: [FieldId; 23] = [
        FieldId::FirstName,
        FieldId::MiddleName,
        FieldId::Nickname,
        FieldId::LastName,
        FieldId::AckStatement,
        FieldId::AckInitials,
        FieldId::AckDate,
        FieldId::MascotAdjective,
        FieldId::MascotAnimal,
        FieldId::Divider,
        FieldId::PersonalStatement,
        FieldId::PictureUrl,
        FieldId::PictureAlt,
        FieldId::PictureCaption,
        FieldId::PersonalBackground,
        FieldId::ProfessionalBackground,
        FieldId::AcademicBackground,
        FieldId::SubjectBackground,
        FieldId::ComputerPlatform,
        FieldId::FunnyThing,
        FieldId::ExtraShare,
        FieldId::Quote,
        FieldId::QuoteAuthor,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FieldId::FirstName => "firstName",
            FieldId::MiddleName => "middleName",
            FieldId::Nickname => "nickname",
            FieldId::LastName => "lastName",
            FieldId::AckStatement => "ackStatement",
            FieldId::AckInitials => "ackInitials",
            FieldId::AckDate => "ackDate",
            FieldId::MascotAdjective => "mascotAdjective",
            FieldId::MascotAnimal => "mascotAnimal",
            FieldId::Divider => "divider",
            FieldId::PersonalStatement => "personalStatement",
            FieldId::PictureUrl => "pictureUrl",
            FieldId::PictureAlt => "pictureAlt",
            FieldId::PictureCaption => "pictureCaption",
            FieldId::PersonalBackground => "personalBackground",
            FieldId::ProfessionalBackground => "professionalBackground",
            FieldId::AcademicBackground => "academicBackground",
            FieldId::SubjectBackground => "subjectBackground",
            FieldId::ComputerPlatform => "computerPlatform",
            FieldId::FunnyThing => "funnyThing",
            FieldId::ExtraShare => "extraShare",
            FieldId::Quote => "quote",
            FieldId::QuoteAuthor => "quoteAuthor",
        }
    }

    pub fn from_wire(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.as_str() == id)
    }

    /// Human-readable label shown next to the input and in validation feedback.
    pub fn label(self) -> &'static str {
        match self {
            FieldId::FirstName => "First name",
            FieldId::MiddleName => "Middle name or initial",
            FieldId::Nickname => "Preferred name",
            FieldId::LastName => "Last name",
            FieldId::AckStatement => "Acknowledgment statement",
            FieldId::AckInitials => "Acknowledgment initials",
            FieldId::AckDate => "Acknowledgment date",
            FieldId::MascotAdjective => "Mascot adjective",
            FieldId::MascotAnimal => "Mascot animal",
            FieldId::Divider => "Divider",
            FieldId::PersonalStatement => "Personal statement",
            FieldId::PictureUrl => "Picture URL",
            FieldId::PictureAlt => "Picture alt text",
            FieldId::PictureCaption => "Picture caption",
            FieldId::PersonalBackground => "Personal background",
            FieldId::ProfessionalBackground => "Professional background",
            FieldId::AcademicBackground => "Academic background",
            FieldId::SubjectBackground => "Background in this subject",
            FieldId::ComputerPlatform => "Primary computer platform",
            FieldId::FunnyThing => "Funny or interesting item",
            FieldId::ExtraShare => "Something to share",
            FieldId::Quote => "Favorite quote",
            FieldId::QuoteAuthor => "Quote author",
        }
    }

    /// Long-form fields are edited in a textarea rather than a single-line input.
    pub fn is_multiline(self) -> bool {
        matches!(
            self,
            FieldId::PersonalStatement
                | FieldId::PersonalBackground
                | FieldId::ProfessionalBackground
                | FieldId::AcademicBackground
                | FieldId::SubjectBackground
                | FieldId::FunnyThing
                | FieldId::ExtraShare
                | FieldId::Quote
        )
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
