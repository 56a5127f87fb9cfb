//! Integration tests for the boundary between the desktop form and the
//! engine: a config-driven form is edited, generated and reset through the
//! same public API the UI uses.

use intro_forge_config::Config;
use intro_forge_engine::{
    CourseField, FieldId, GenerateError, IntroductionForm, LinkField, RenderMode, Upload,
    ViewController, ViewState,
};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn filled_form(config: &Config) -> IntroductionForm {
    let mut form = IntroductionForm::new(config.form_defaults());
    form.set_field(FieldId::FirstName, "Ada");
    form.set_field(FieldId::LastName, "Byron");
    form.set_field(FieldId::AckStatement, "I understand this page is public");
    form.set_field(FieldId::AckInitials, "AB");
    form.set_field(FieldId::AckDate, "2024-08-26");
    form.set_field(FieldId::MascotAdjective, "Analytical");
    form.set_field(FieldId::MascotAnimal, "Owl");
    form
}

#[tokio::test]
async fn test_configured_form_generates_document() {
    let config = Config::default();
    let mut form = filled_form(&config);
    let mut view = ViewController::new(config.view_settings());

    form.set_course_field(0, CourseField::Reason, "Changed my mind").unwrap();
    let rendered = view.generate(RenderMode::Document, &form.snapshot()).await.unwrap();

    assert!(rendered.body.contains("Ada Byron ~ Analytical Owl"));
    assert!(rendered.body.contains("Changed my mind"));
    assert_eq!(rendered.body.matches("<li><strong>ITSC 3155").count(), 1);
}

#[tokio::test]
async fn test_invalid_link_keeps_form_visible() {
    let config = Config::default();
    let mut form = filled_form(&config);
    let row = form.add_link_row();
    form.set_link_field(row, LinkField::Url, "not a url").unwrap();
    let mut view = ViewController::new(config.view_settings());

    let result = view.generate(RenderMode::Json, &form.snapshot()).await;

    assert!(matches!(result, Err(GenerateError::Invalid(_))));
    assert_eq!(view.state(), &ViewState::FormVisible);
}

#[tokio::test]
async fn test_reset_after_result_restores_configured_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("config.toml");
    std::fs::write(
        &config_file,
        r#"
[headings]
form = "About Me"

[fields]
firstName = "Ada"

[[courses]]
department = "CS"
number = "101"
"#,
    )
    .unwrap();
    let config = Config::load_from_path(&config_file).unwrap().unwrap();

    let mut form = filled_form(&config);
    form.set_field(FieldId::FirstName, "Augusta");
    form.add_course_row();
    form.attach_upload(Some(Upload::from_bytes("me.png", None, vec![1u8, 2, 3])));
    let mut view = ViewController::new(config.view_settings());
    view.generate(RenderMode::Markup, &form.snapshot()).await.unwrap();
    assert_eq!(view.heading(), "Introduction HTML");

    view.reset(&mut form);

    assert_eq!(view.heading(), "About Me");
    assert_eq!(form.field(FieldId::FirstName), "Ada");
    assert_eq!(form.field(FieldId::LastName), "");
    assert_eq!(form.courses().len(), 1);
    assert_eq!(form.courses()[0].department, "CS");
    assert!(form.upload().is_none());
}

#[tokio::test]
async fn test_clear_then_generate_reports_required_fields() {
    let config = Config::default();
    let mut form = filled_form(&config);
    let mut view = ViewController::new(config.view_settings());

    view.clear(&mut form);
    let result = view.generate(RenderMode::Document, &form.snapshot()).await;

    let Err(GenerateError::Invalid(report)) = result else {
        panic!("expected validation to fail after clearing");
    };
    assert_eq!(report.issues.len(), config.view_settings().rules.required.len());
    assert_eq!(form.courses().len(), 1);
    assert!(form.courses()[0].is_blank());
}
