use dioxus::prelude::*;

/// Full-window error display, used when the app cannot start normally
#[component]
pub fn ErrorScreen(title: String, message: String, details: Option<String>) -> Element {
    rsx! {
        div {
            class: "error-screen",
            h1 { "{title}" }
            p { "{message}" }
            if let Some(ref detail_text) = details {
                pre { class: "error-details", "{detail_text}" }
            }
        }
    }
}
