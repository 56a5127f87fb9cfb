use intro_forge_engine::{CourseField, FieldId, FormError, IntroductionForm, LinkField, Upload};

/// An edit the form view asks the app to make.
#[derive(Debug, Clone, PartialEq)]
pub enum FormAction {
    SetField(FieldId, String),
    SetCourse {
        row: usize,
        field: CourseField,
        value: String,
    },
    AddCourse,
    RemoveCourse(usize),
    SetLink {
        row: usize,
        field: LinkField,
        value: String,
    },
    AddLink,
    RemoveLink(usize),
    AttachPicture(Option<Upload>),
}

impl FormAction {
    pub fn apply(self, form: &mut IntroductionForm) -> Result<(), FormError> {
        match self {
            FormAction::SetField(field, value) => form.set_field(field, value),
            FormAction::SetCourse { row, field, value } => {
                form.set_course_field(row, field, value)?
            }
            FormAction::AddCourse => {
                form.add_course_row();
            }
            FormAction::RemoveCourse(row) => {
                form.remove_course_row(row)?;
            }
            FormAction::SetLink { row, field, value } => form.set_link_field(row, field, value)?,
            FormAction::AddLink => {
                form.add_link_row();
            }
            FormAction::RemoveLink(row) => {
                form.remove_link_row(row)?;
            }
            FormAction::AttachPicture(upload) => form.attach_upload(upload),
        }
        Ok(())
    }
}
