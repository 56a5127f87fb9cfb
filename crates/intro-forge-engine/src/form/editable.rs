use crate::form::fields::FieldId;
use crate::form::groups::{COURSE_GROUP, LINK_GROUP};
use crate::form::snapshot::FormSnapshot;
use crate::image::Upload;
use crate::models::record::{CourseEntry, LinkEntry};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("the course list must keep at least one row")]
    LastCourseRow,
    #[error("row {index} does not exist (the group has {len} rows)")]
    RowOutOfRange { index: usize, len: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseField {
    Department,
    Number,
    Name,
    Reason,
}

impl CourseField {
    pub const ALL: [CourseField; 4] = [
        CourseField::Department,
        CourseField::Number,
        CourseField::Name,
        CourseField::Reason,
    ];

    pub fn placeholder(self) -> &'static str {
        match self {
            CourseField::Department => "Dept",
            CourseField::Number => "Number",
            CourseField::Name => "Course name",
            CourseField::Reason => "Why you're taking it",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkField {
    Label,
    Url,
}

/// What a reset puts back into the form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormDefaults {
    pub fields: BTreeMap<FieldId, String>,
    pub courses: Vec<CourseEntry>,
    pub links: Vec<LinkEntry>,
}

/// The mutable form the user edits between generations.
///
/// The course list always holds at least one row, blank or not. Rows keep
/// whatever the user typed; blank and partial entries are only dropped when
/// a record is built from a snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct IntroductionForm {
    fields: BTreeMap<FieldId, String>,
    courses: Vec<CourseEntry>,
    links: Vec<LinkEntry>,
    upload: Option<Upload>,
    defaults: FormDefaults,
}

impl IntroductionForm {
    pub fn new(defaults: FormDefaults) -> Self {
        let mut form = Self {
            fields: BTreeMap::new(),
            courses: Vec::new(),
            links: Vec::new(),
            upload: None,
            defaults,
        };
        form.reset();
        form
    }

    pub fn field(&self, field: FieldId) -> &str {
        self.fields.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn set_field(&mut self, field: FieldId, value: impl Into<String>) {
        self.fields.insert(field, value.into());
    }

    pub fn courses(&self) -> &[CourseEntry] {
        &self.courses
    }

    pub fn links(&self) -> &[LinkEntry] {
        &self.links
    }

    pub fn upload(&self) -> Option<&Upload> {
        self.upload.as_ref()
    }

    pub fn attach_upload(&mut self, upload: Option<Upload>) {
        self.upload = upload;
    }

    /// Appends a blank course row and returns its index
    pub fn add_course_row(&mut self) -> usize {
        self.courses.push(CourseEntry::default());
        self.courses.len() - 1
    }

    /// Whether remove buttons on course rows should be enabled
    pub fn can_remove_course_rows(&self) -> bool {
        self.courses.len() > 1
    }

    pub fn remove_course_row(&mut self, index: usize) -> Result<CourseEntry, FormError> {
        check_index(index, self.courses.len())?;
        if !self.can_remove_course_rows() {
            return Err(FormError::LastCourseRow);
        }
        Ok(self.courses.remove(index))
    }

    pub fn set_course_field(
        &mut self,
        index: usize,
        field: CourseField,
        value: impl Into<String>,
    ) -> Result<(), FormError> {
        check_index(index, self.courses.len())?;
        let course = &mut self.courses[index];
        let slot = match field {
            CourseField::Department => &mut course.department,
            CourseField::Number => &mut course.number,
            CourseField::Name => &mut course.name,
            CourseField::Reason => &mut course.reason,
        };
        *slot = value.into();
        Ok(())
    }

    pub fn add_link_row(&mut self) -> usize {
        self.links.push(LinkEntry::default());
        self.links.len() - 1
    }

    pub fn remove_link_row(&mut self, index: usize) -> Result<LinkEntry, FormError> {
        check_index(index, self.links.len())?;
        Ok(self.links.remove(index))
    }

    pub fn set_link_field(
        &mut self,
        index: usize,
        field: LinkField,
        value: impl Into<String>,
    ) -> Result<(), FormError> {
        check_index(index, self.links.len())?;
        let link = &mut self.links[index];
        match field {
            LinkField::Label => link.label = value.into(),
            LinkField::Url => link.url = value.into(),
        }
        Ok(())
    }

    /// Blanks every control: all fields empty, link rows kept but emptied,
    /// the course list reduced to a single blank row, upload dropped.
    pub fn clear(&mut self) {
        self.fields.clear();
        self.courses = vec![CourseEntry::default()];
        for link in &mut self.links {
            *link = LinkEntry::default();
        }
        self.upload = None;
    }

    /// Restores the configured defaults, including the default course rows.
    pub fn reset(&mut self) {
        self.fields = self.defaults.fields.clone();
        self.courses = self.defaults.courses.clone();
        if self.courses.is_empty() {
            self.courses.push(CourseEntry::default());
        }
        self.links = self.defaults.links.clone();
        self.upload = None;
    }

    /// Captures the current control values as a snapshot for generation.
    pub fn snapshot(&self) -> FormSnapshot {
        let mut snapshot = FormSnapshot::new();
        for (field, value) in &self.fields {
            snapshot.set_text(*field, value.clone());
        }
        for course in &self.courses {
            snapshot.push_row(
                COURSE_GROUP.container_id,
                [
                    ("department", course.department.as_str()),
                    ("number", course.number.as_str()),
                    ("name", course.name.as_str()),
                    ("reason", course.reason.as_str()),
                ],
            );
        }
        for link in &self.links {
            snapshot.push_row(
                LINK_GROUP.container_id,
                [("label", link.label.as_str()), ("url", link.url.as_str())],
            );
        }
        snapshot.upload = self.upload.clone();
        snapshot
    }
}

impl Default for IntroductionForm {
    fn default() -> Self {
        Self::new(FormDefaults::default())
    }
}

fn check_index(index: usize, len: usize) -> Result<(), FormError> {
    if index < len {
        Ok(())
    } else {
        Err(FormError::RowOutOfRange { index, len })
    }
}
