//! Form/result view state machine.
//!
//! The controller owns everything the page used to keep in ambient state: which
//! view is showing, the heading text and whether the helper text is visible.
//! Generation is split into `begin` → `PendingRender::resolve` → `finish` so
//! the controller is never borrowed across the picture read.

use crate::form::editable::IntroductionForm;
use crate::form::snapshot::FormSnapshot;
use crate::form::validation::{FormRules, ValidationReport};
use crate::image::{Upload, resolve_image};
use crate::models::builder::{RecordBuilder, RecordDefaults};
use crate::models::record::IntroductionRecord;
use crate::render::{RenderMode, Rendered, render};
use serde::{Deserialize, Serialize};
use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error(transparent)]
    Invalid(#[from] ValidationReport),
    #[error("a generation is already in progress")]
    Busy,
    #[error("the form was reset before the generation finished")]
    Stale,
}

/// Heading text per view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Headings {
    pub form: String,
    pub document: String,
    pub markup: String,
    pub json: String,
}

impl Default for Headings {
    fn default() -> Self {
        Self {
            form: "Introduction Form".to_string(),
            document: "Introduction".to_string(),
            markup: "Introduction HTML".to_string(),
            json: "Introduction JSON".to_string(),
        }
    }
}

impl Headings {
    pub fn for_mode(&self, mode: RenderMode) -> &str {
        match mode {
            RenderMode::Document => &self.document,
            RenderMode::Markup => &self.markup,
            RenderMode::Json => &self.json,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewSettings {
    pub headings: Headings,
    pub defaults: RecordDefaults,
    pub rules: FormRules,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    FormVisible,
    ResultVisible(Rendered),
}

/// The in-flight ticket shared between the controller and its outstanding
/// request. Dropping the guard releases the ticket if it is still current.
#[derive(Debug)]
struct TicketGuard {
    ticket: u64,
    in_flight: Rc<Cell<Option<u64>>>,
}

impl TicketGuard {
    fn is_current(&self) -> bool {
        self.in_flight.get() == Some(self.ticket)
    }
}

impl Drop for TicketGuard {
    fn drop(&mut self) {
        if self.is_current() {
            log::debug!("Releasing abandoned request {}", self.ticket);
            self.in_flight.set(None);
        }
    }
}

/// A validated generation waiting for its picture.
#[derive(Debug)]
pub struct PendingRender {
    guard: TicketGuard,
    mode: RenderMode,
    record: IntroductionRecord,
    upload: Option<Upload>,
}

impl PendingRender {
    /// Resolves the picture; the record's picture reference is the fallback.
    pub async fn resolve(self) -> ResolvedRender {
        let picture_src = resolve_image(self.upload.as_ref(), &self.record.picture_url).await;
        ResolvedRender {
            guard: self.guard,
            mode: self.mode,
            record: self.record.with_picture_src(picture_src),
        }
    }
}

/// A generation whose record is complete and ready to render.
#[derive(Debug)]
pub struct ResolvedRender {
    guard: TicketGuard,
    mode: RenderMode,
    record: IntroductionRecord,
}

#[derive(Debug)]
pub struct ViewController {
    settings: ViewSettings,
    builder: RecordBuilder,
    state: ViewState,
    heading: String,
    helper_visible: bool,
    in_flight: Rc<Cell<Option<u64>>>,
    next_ticket: u64,
}

impl ViewController {
    pub fn new(settings: ViewSettings) -> Self {
        let builder = RecordBuilder::new(settings.defaults.clone());
        let heading = settings.headings.form.clone();
        Self {
            settings,
            builder,
            state: ViewState::FormVisible,
            heading,
            helper_visible: true,
            in_flight: Rc::new(Cell::new(None)),
            next_ticket: 0,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn rendered(&self) -> Option<&Rendered> {
        match &self.state {
            ViewState::ResultVisible(rendered) => Some(rendered),
            ViewState::FormVisible => None,
        }
    }

    pub fn is_form_visible(&self) -> bool {
        self.state == ViewState::FormVisible
    }

    pub fn heading(&self) -> &str {
        &self.heading
    }

    pub fn helper_visible(&self) -> bool {
        self.helper_visible
    }

    /// Whether a generation has begun but not finished
    pub fn is_busy(&self) -> bool {
        self.in_flight.get().is_some()
    }

    pub fn settings(&self) -> &ViewSettings {
        &self.settings
    }

    /// Validates the snapshot and builds its record. While the returned
    /// ticket is outstanding, further requests are refused with `Busy`.
    /// Dropping the ticket, or anything resolved from it, frees the slot.
    pub fn begin(
        &mut self,
        mode: RenderMode,
        snapshot: &FormSnapshot,
    ) -> Result<PendingRender, GenerateError> {
        if self.is_busy() {
            log::debug!("Ignoring {mode} request while another generation is in flight");
            return Err(GenerateError::Busy);
        }

        let report = self.settings.rules.validate(snapshot);
        if !report.is_valid() {
            log::debug!("Form rejected: {report}");
            return Err(GenerateError::Invalid(report));
        }

        let ticket = self.next_ticket;
        self.next_ticket += 1;
        self.in_flight.set(Some(ticket));

        Ok(PendingRender {
            guard: TicketGuard {
                ticket,
                in_flight: Rc::clone(&self.in_flight),
            },
            mode,
            record: self.builder.build(snapshot),
            upload: snapshot.upload.clone(),
        })
    }

    /// Renders a resolved generation and shows the result.
    pub fn finish(&mut self, resolved: ResolvedRender) -> Result<&Rendered, GenerateError> {
        if !resolved.guard.is_current() {
            log::debug!("Dropping {} result for an abandoned request", resolved.mode);
            return Err(GenerateError::Stale);
        }
        self.in_flight.set(None);

        let rendered = render(resolved.mode, &resolved.record);
        self.heading = self.settings.headings.for_mode(resolved.mode).to_string();
        self.helper_visible = false;
        self.state = ViewState::ResultVisible(rendered);
        log::debug!("Showing {} result", resolved.mode);

        match &self.state {
            ViewState::ResultVisible(rendered) => Ok(rendered),
            ViewState::FormVisible => unreachable!("state was just set to ResultVisible"),
        }
    }

    /// Validate, resolve the picture, render, show.
    pub async fn generate(
        &mut self,
        mode: RenderMode,
        snapshot: &FormSnapshot,
    ) -> Result<&Rendered, GenerateError> {
        let pending = self.begin(mode, snapshot)?;
        let resolved = pending.resolve().await;
        self.finish(resolved)
    }

    /// Discards the result and shows the form again with the original heading
    /// and helper text. Any generation still in flight is abandoned.
    pub fn back(&mut self) {
        self.state = ViewState::FormVisible;
        self.heading = self.settings.headings.form.clone();
        self.helper_visible = true;
        self.in_flight.set(None);
    }

    /// Restores the form's defaults, then returns to it
    pub fn reset(&mut self, form: &mut IntroductionForm) {
        form.reset();
        self.back();
    }

    /// Blanks the form, then returns to it
    pub fn clear(&mut self, form: &mut IntroductionForm) {
        form.clear();
        self.back();
    }
}

impl Default for ViewController {
    fn default() -> Self {
        Self::new(ViewSettings::default())
    }
}
