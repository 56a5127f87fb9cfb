use super::{CourseRows, FieldInput, LinkRows, PictureInput, emit};
use crate::ui::actions::FormAction;
use dioxus::prelude::*;
use intro_forge_engine::{
    FieldId, IntroductionForm, IssueTarget, PictureSource, RenderMode, ValidationReport,
};

const NAME_FIELDS: &[FieldId] = &[
    FieldId::FirstName,
    FieldId::MiddleName,
    FieldId::Nickname,
    FieldId::LastName,
];

const ACKNOWLEDGMENT_FIELDS: &[FieldId] =
    &[FieldId::AckStatement, FieldId::AckInitials, FieldId::AckDate];

const MASCOT_FIELDS: &[FieldId] =
    &[FieldId::MascotAdjective, FieldId::MascotAnimal, FieldId::Divider];

const PICTURE_FIELDS: &[FieldId] =
    &[FieldId::PictureUrl, FieldId::PictureAlt, FieldId::PictureCaption];

const BACKGROUND_FIELDS: &[FieldId] = &[
    FieldId::PersonalStatement,
    FieldId::PersonalBackground,
    FieldId::ProfessionalBackground,
    FieldId::AcademicBackground,
    FieldId::SubjectBackground,
    FieldId::ComputerPlatform,
];

const EXTRA_FIELDS: &[FieldId] = &[
    FieldId::FunnyThing,
    FieldId::ExtraShare,
    FieldId::Quote,
    FieldId::QuoteAuthor,
];

fn field_set(
    legend: &str,
    fields: &[FieldId],
    form: &IntroductionForm,
    report: Option<&ValidationReport>,
    on_action: Option<Callback<FormAction>>,
) -> Element {
    let invalid = |field: FieldId| {
        report.is_some_and(|report| report.has_issue_for(IssueTarget::Field(field)))
    };

    rsx! {
        fieldset {
            legend { "{legend}" }
            for field in fields.iter().copied() {
                FieldInput {
                    key: "{field}",
                    field: field,
                    value: form.field(field).to_string(),
                    invalid: invalid(field),
                    on_action: on_action,
                }
            }
        }
    }
}

/// The whole introduction form with its action buttons.
#[component]
pub fn IntroForm(
    form: IntroductionForm,
    report: Option<ValidationReport>,
    busy: bool,
    on_action: Option<Callback<FormAction>>,
    on_generate: Option<Callback<RenderMode>>,
    on_clear: Option<Callback<()>>,
    on_reset: Option<Callback<()>>,
) -> Element {
    let report = report.as_ref();
    let invalid_links: Vec<usize> = report
        .map(|report| {
            report
                .issues
                .iter()
                .filter_map(|issue| match issue.target {
                    IssueTarget::LinkUrl(row) => Some(row),
                    IssueTarget::Field(_) => None,
                })
                .collect()
        })
        .unwrap_or_default();
    let picture_name = form.upload().map(|upload| upload.file_name().to_string());

    rsx! {
        form {
            id: "introduction-form",
            onsubmit: move |evt| {
                evt.prevent_default();
                emit(on_generate, RenderMode::Document);
            },
            {field_set("Name", NAME_FIELDS, &form, report, on_action)}
            {field_set("Acknowledgment", ACKNOWLEDGMENT_FIELDS, &form, report, on_action)}
            {field_set("Mascot", MASCOT_FIELDS, &form, report, on_action)}
            {field_set("Picture", PICTURE_FIELDS, &form, report, on_action)}
            PictureInput { file_name: picture_name, on_action: on_action }
            {field_set("About You", BACKGROUND_FIELDS, &form, report, on_action)}
            CourseRows { courses: form.courses().to_vec(), on_action: on_action }
            {field_set("Extras", EXTRA_FIELDS, &form, report, on_action)}
            LinkRows {
                links: form.links().to_vec(),
                invalid_rows: invalid_links,
                on_action: on_action,
            }

            div {
                class: "form-buttons",
                button {
                    r#type: "submit",
                    id: "generateButton",
                    disabled: busy,
                    "Generate Introduction"
                }
                button {
                    r#type: "button",
                    id: "generateHtmlButton",
                    disabled: busy,
                    onclick: move |_| emit(on_generate, RenderMode::Markup),
                    "Generate HTML"
                }
                button {
                    r#type: "button",
                    id: "generateJsonButton",
                    disabled: busy,
                    onclick: move |_| emit(on_generate, RenderMode::Json),
                    "Generate JSON"
                }
                button {
                    r#type: "button",
                    id: "clearButton",
                    onclick: move |_| emit(on_clear, ()),
                    "Clear"
                }
                button {
                    r#type: "button",
                    id: "resetButton",
                    onclick: move |_| emit(on_reset, ()),
                    "Reset"
                }
            }
        }
    }
}
