use dioxus::prelude::*;
use intro_forge_engine::ValidationReport;

#[component]
pub fn ValidationNotice(report: ValidationReport) -> Element {
    rsx! {
        div {
            class: "validation-notice",
            role: "alert",
            p { "Please fix the following before generating:" }
            ul {
                for issue in report.issues.iter() {
                    li { "{issue}" }
                }
            }
        }
    }
}
