use super::emit;
use crate::ui::actions::FormAction;
use dioxus::prelude::*;
use intro_forge_engine::{LinkEntry, LinkField};

/// Editable link rows; `invalid_rows` marks rows whose URL failed validation.
#[component]
pub fn LinkRows(
    links: Vec<LinkEntry>,
    invalid_rows: Vec<usize>,
    on_action: Option<Callback<FormAction>>,
) -> Element {
    rsx! {
        fieldset {
            id: "linkList",
            class: "link-list",
            legend { "Links" }
            for (row, link) in links.iter().enumerate() {
                div {
                    key: "{row}",
                    class: if invalid_rows.contains(&row) {
                        "link-row invalid"
                    } else {
                        "link-row"
                    },
                    input {
                        r#type: "text",
                        placeholder: "Label",
                        value: link.label.clone(),
                        oninput: move |evt| {
                            let field = LinkField::Label;
                            emit(on_action, FormAction::SetLink { row, field, value: evt.value() })
                        },
                    }
                    input {
                        r#type: "url",
                        placeholder: "https://",
                        value: link.url.clone(),
                        oninput: move |evt| {
                            let field = LinkField::Url;
                            emit(on_action, FormAction::SetLink { row, field, value: evt.value() })
                        },
                    }
                    button {
                        r#type: "button",
                        class: "remove-link",
                        onclick: move |_| emit(on_action, FormAction::RemoveLink(row)),
                        "Remove"
                    }
                }
            }
            button {
                r#type: "button",
                id: "addLinkButton",
                onclick: move |_| emit(on_action, FormAction::AddLink),
                "Add Link"
            }
        }
    }
}
