use super::actions::FormAction;
use super::components::{IntroForm, ResultView, ValidationNotice};
use dioxus::prelude::*;
use intro_forge_config::Config;
use intro_forge_engine::{
    GenerateError, IntroductionForm, RenderMode, ValidationReport, ViewController,
};

const INTRO_FORGE_CSS: &str = include_str!("../assets/intro-forge.css");

const HELPER_TEXT: &str = "Fill out the form below to build your introduction page.";

#[component]
pub fn App(config: Config) -> Element {
    let mut form = use_signal(|| IntroductionForm::new(config.form_defaults()));
    let mut view = use_signal(|| ViewController::new(config.view_settings()));
    let mut report = use_signal(|| None::<ValidationReport>);

    let on_action = move |action: FormAction| {
        if let Err(e) = action.apply(&mut form.write()) {
            log::warn!("Ignoring form edit: {e}");
        }
    };

    let on_generate = move |mode: RenderMode| {
        let snapshot = form.read().snapshot();
        let begun = view.write().begin(mode, &snapshot);
        match begun {
            Ok(pending) => {
                report.set(None);
                spawn(async move {
                    let resolved = pending.resolve().await;
                    if let Err(e) = view.write().finish(resolved) {
                        log::debug!("Discarding {mode} result: {e}");
                    }
                });
            }
            Err(GenerateError::Invalid(found)) => report.set(Some(found)),
            Err(e) => log::debug!("{e}"),
        }
    };

    let on_clear = move |_: ()| {
        report.set(None);
        view.write().clear(&mut form.write());
    };

    let on_reset = move |_: ()| {
        report.set(None);
        view.write().reset(&mut form.write());
    };

    let heading = view.read().heading().to_string();
    let helper_visible = view.read().helper_visible();
    let busy = view.read().is_busy();
    let rendered = view.read().rendered().cloned();

    rsx! {
        style { {INTRO_FORGE_CSS} }
        main {
            id: "intro-form",
            class: "intro-forge",
            h2 { "{heading}" }
            if helper_visible {
                h3 { class: "helper", "{HELPER_TEXT}" }
            }
            match rendered {
                Some(rendered) => rsx! {
                    ResultView {
                        rendered: rendered,
                        on_back: Some(Callback::new(move |_| view.write().back())),
                        on_reset: Some(Callback::new(on_reset)),
                    }
                },
                None => rsx! {
                    if let Some(found) = report() {
                        ValidationNotice { report: found }
                    }
                    IntroForm {
                        form: form(),
                        report: report(),
                        busy: busy,
                        on_action: Some(Callback::new(on_action)),
                        on_generate: Some(Callback::new(on_generate)),
                        on_clear: Some(Callback::new(on_clear)),
                        on_reset: Some(Callback::new(on_reset)),
                    }
                },
            }
        }
    }
}
