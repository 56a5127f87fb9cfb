use super::emit;
use dioxus::prelude::*;
use intro_forge_engine::Rendered;

/// Shows a finished rendering. The document is inserted as live markup and
/// offers a form reset; markup and JSON are shown as source text with a way
/// back to the untouched form.
#[component]
pub fn ResultView(
    rendered: Rendered,
    on_back: Option<Callback<()>>,
    on_reset: Option<Callback<()>>,
) -> Element {
    let body = rendered.body.clone();

    match rendered.mode.source_language() {
        None => rsx! {
            div {
                id: "generated-introduction",
                dangerous_inner_html: "{body}",
            }
            p {
                class: "reset-link",
                button {
                    r#type: "button",
                    id: "startOverButton",
                    onclick: move |_| emit(on_reset, ()),
                    "Reset Form"
                }
            }
        },
        Some(language) => rsx! {
            section {
                class: "generated-html-output",
                pre {
                    class: "generated-html-code",
                    code { class: "language-{language}", "{body}" }
                }
                p {
                    class: "reset-link",
                    button {
                        r#type: "button",
                        class: "return-to-form",
                        onclick: move |_| emit(on_back, ()),
                        "Return to Form"
                    }
                }
            }
        },
    }
}
