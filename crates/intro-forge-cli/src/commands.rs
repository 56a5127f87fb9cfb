use anyhow::{Context, Result, bail};
use intro_forge_config::Config;
use intro_forge_engine::{
    GenerateError, IntroductionForm, RenderMode, SnapshotFormat, Upload, ViewController,
    load_snapshot, template_snapshot, write_snapshot,
};
use std::path::Path;

/// Loads a snapshot file, attaches `picture` and renders it in `mode`.
/// Validation failures come back as an error listing every issue.
pub async fn render_form(
    config: &Config,
    form: &Path,
    mode: RenderMode,
    picture: Option<&Path>,
) -> Result<String> {
    let mut snapshot =
        load_snapshot(form).with_context(|| format!("Failed to load snapshot {}", form.display()))?;
    if let Some(picture) = picture {
        snapshot.upload = Some(Upload::from_path(picture));
    }

    let mut view = ViewController::new(config.view_settings());
    match view.generate(mode, &snapshot).await {
        Ok(rendered) => Ok(rendered.body.clone()),
        Err(GenerateError::Invalid(report)) => {
            let issues = report
                .issues
                .iter()
                .map(|issue| format!("  - {issue}"))
                .collect::<Vec<_>>()
                .join("\n");
            bail!("{}: {report}\n{issues}", form.display())
        }
        Err(e) => Err(e.into()),
    }
}

pub async fn write_output(path: &Path, body: &str) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(path, format!("{body}\n"))
        .await
        .with_context(|| format!("Failed to write {}", path.display()))
}

pub fn template(config: &Config, format: SnapshotFormat) -> String {
    let form = IntroductionForm::new(config.form_defaults());
    write_snapshot(&template_snapshot(&form), format)
}
