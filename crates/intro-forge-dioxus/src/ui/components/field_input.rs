use super::emit;
use crate::ui::actions::FormAction;
use dioxus::prelude::*;
use intro_forge_engine::FieldId;

/// One labelled scalar control. Long-form fields get a textarea.
#[component]
pub fn FieldInput(
    field: FieldId,
    value: String,
    invalid: bool,
    on_action: Option<Callback<FormAction>>,
) -> Element {
    let id = field.as_str();
    let label = field.label();
    let class = if invalid { "form-field invalid" } else { "form-field" };
    let input_type = match field {
        FieldId::AckDate => "date",
        _ => "text",
    };

    rsx! {
        div {
            class: "{class}",
            label { r#for: "{id}", "{label}" }
            if field.is_multiline() {
                textarea {
                    id: "{id}",
                    name: "{id}",
                    rows: "3",
                    value: "{value}",
                    oninput: move |evt| emit(on_action, FormAction::SetField(field, evt.value())),
                }
            } else {
                input {
                    r#type: input_type,
                    id: "{id}",
                    name: "{id}",
                    value: "{value}",
                    oninput: move |evt| emit(on_action, FormAction::SetField(field, evt.value())),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;

    fn render_field(field: FieldId, value: &str, invalid: bool) -> String {
        let mut dom = VirtualDom::new_with_props(
            FieldInput,
            FieldInputProps {
                field,
                value: value.to_string(),
                invalid,
                on_action: None,
            },
        );
        dom.rebuild_in_place();
        render(&dom)
    }

    #[test]
    fn test_single_line_field_uses_wire_id() {
        let html = render_field(FieldId::FirstName, "Ada", false);

        assert!(html.contains("id=\"firstName\""));
        assert!(html.contains("First name"));
        assert!(html.contains("<input"));
        assert!(html.contains("Ada"));
        assert!(!html.contains("invalid"));
    }

    #[test]
    fn test_long_form_field_is_a_textarea() {
        let html = render_field(FieldId::PersonalStatement, "", false);

        assert!(html.contains("<textarea"));
        assert!(html.contains("id=\"personalStatement\""));
    }

    #[test]
    fn test_invalid_field_is_marked() {
        let html = render_field(FieldId::AckDate, "yesterday", true);

        assert!(html.contains("form-field invalid"));
        assert!(html.contains("type=\"date\""));
    }
}
