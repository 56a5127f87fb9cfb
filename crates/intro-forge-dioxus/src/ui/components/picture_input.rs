use super::emit;
use crate::ui::actions::FormAction;
use dioxus::prelude::*;
use intro_forge_engine::Upload;

/// File picker for the picture. The chosen file is read into memory straight
/// away; choosing nothing detaches any previous upload.
#[component]
pub fn PictureInput(file_name: Option<String>, on_action: Option<Callback<FormAction>>) -> Element {
    rsx! {
        div {
            class: "form-field",
            label { r#for: "pictureUpload", "Upload a picture" }
            input {
                r#type: "file",
                id: "pictureUpload",
                accept: "image/*",
                onchange: move |evt: FormEvent| async move {
                    let mut upload = None;
                    if let Some(file) = evt.files().into_iter().next() {
                        let name = file.name();
                        match file.read_bytes().await {
                            Ok(bytes) => {
                                log::info!("Attached picture {name} ({} bytes)", bytes.len());
                                upload = Some(Upload::from_bytes(name, None, bytes.to_vec()));
                            }
                            Err(e) => log::warn!("Failed to read picture {name}: {e}"),
                        }
                    }
                    emit(on_action, FormAction::AttachPicture(upload));
                },
            }
            if let Some(name) = file_name {
                p { class: "upload-name", "Selected: {name}" }
            }
        }
    }
}
