//! Account-creation wizard: step navigation, per-step validation and the
//! single submission to the backend.

mod answers;
mod payload;
mod schema;
pub mod steps;

use std::cell::RefCell;

pub use answers::{Answer, Answers};
pub use payload::SubmissionPayload;
pub use schema::{FieldErrors, Schema};
pub use steps::{account_steps, FieldKind, FieldSpec, StepDefinition};

use crate::api::{created_user_id, ProfileBackend};
use crate::error::{ApiError, DraftError, SubmitError};
use crate::principal::Principal;
use crate::storage::{Drafts, KeyValueStore, RESULT_KEY, USER_ID_KEY};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Showing the step at this index.
    Editing(usize),
    /// The backend call is in flight.
    Submitting,
    /// Terminal; reached only after the backend accepted the profile.
    Submitted,
}

#[derive(Debug, Clone)]
pub struct Wizard {
    steps: &'static [StepDefinition],
    phase: Phase,
    answers: Answers,
    errors: FieldErrors,
}

impl Wizard {
    pub fn new(steps: &'static [StepDefinition]) -> Self {
        Self {
            steps,
            phase: Phase::Editing(0),
            answers: Answers::new(),
            errors: FieldErrors::default(),
        }
    }

    pub fn with_answers(mut self, answers: Answers) -> Self {
        self.answers = answers;
        self
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Index of the visible step; the last step while submitting or done.
    pub fn index(&self) -> usize {
        match self.phase {
            Phase::Editing(i) => i,
            Phase::Submitting | Phase::Submitted => self.last_index(),
        }
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    pub fn current_step(&self) -> &'static StepDefinition {
        &self.steps[self.index()]
    }

    pub fn is_last_step(&self) -> bool {
        self.index() == self.last_index()
    }

    pub fn answers(&self) -> &Answers {
        &self.answers
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    fn last_index(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    fn editing(&self) -> bool {
        matches!(self.phase, Phase::Editing(_))
    }

    /// Blank text clears the answer.
    pub fn set_answer(&mut self, field: &str, answer: Answer) {
        if !self.editing() {
            return;
        }
        match answer {
            Answer::Text(text) if text.trim().is_empty() => {
                self.answers.remove(field);
            }
            answer => self.answers.set(field, answer),
        }
        self.errors.clear_field(field);
    }

    pub fn toggle_choice(&mut self, field: &str, option: &str) {
        if self.editing() {
            self.answers.toggle(field, option);
            self.errors.clear_field(field);
        }
    }

    /// Answers belonging to step `index`, for the draft cache.
    pub fn step_answers(&self, index: usize) -> Answers {
        self.steps
            .get(index)
            .map(|s| self.answers.subset(s.field_names()))
            .unwrap_or_default()
    }

    /// Validates the current step and moves to the next one.
    ///
    /// On the last step a valid form stays put; `submit` is the only way on.
    pub fn advance(&mut self, schema: &Schema) -> Result<usize, FieldErrors> {
        let Phase::Editing(index) = self.phase else {
            return Ok(self.index());
        };
        if let Err(errors) = schema.validate(&self.answers, self.steps[index].field_names()) {
            self.errors = errors.clone();
            return Err(errors);
        }
        self.errors = FieldErrors::default();
        if index < self.last_index() {
            self.phase = Phase::Editing(index + 1);
        }
        Ok(self.index())
    }

    pub fn retreat(&mut self) -> usize {
        if let Phase::Editing(index) = self.phase {
            if index > 0 {
                self.phase = Phase::Editing(index - 1);
            }
        }
        self.index()
    }

    /// Validates everything and moves into `Submitting`, returning the payload
    /// to send. Any error leaves the wizard where it was, except that a
    /// failure on an earlier step jumps back to that step.
    pub fn begin_submit(
        &mut self,
        schema: &Schema,
        principal: Option<&str>,
    ) -> Result<SubmissionPayload, SubmitError> {
        let index = match self.phase {
            Phase::Submitting => return Err(SubmitError::InFlight),
            Phase::Submitted => return Err(SubmitError::AlreadySubmitted),
            Phase::Editing(i) => i,
        };
        if index != self.last_index() {
            return Err(SubmitError::NotOnLastStep);
        }

        let all_fields = self.steps.iter().flat_map(|s| s.field_names());
        if let Err(errors) = schema.validate(&self.answers, all_fields) {
            let first_bad = self
                .steps
                .iter()
                .position(|s| s.field_names().any(|f| errors.get(f).is_some()))
                .unwrap_or(index);
            self.phase = Phase::Editing(first_bad);
            self.errors = errors.clone();
            return Err(SubmitError::Invalid(errors));
        }
        self.errors = FieldErrors::default();

        let principal: Principal = principal
            .filter(|p| !p.trim().is_empty())
            .ok_or(SubmitError::MissingPrincipal)?
            .parse()?;

        let payload = SubmissionPayload::build(&self.answers, principal, schema.today());
        self.phase = Phase::Submitting;
        Ok(payload)
    }

    /// Records the outcome of the backend call started by `begin_submit`.
    pub fn finish_submit(&mut self, outcome: Result<(), ApiError>) -> Result<(), SubmitError> {
        if self.phase != Phase::Submitting {
            return Ok(());
        }
        match outcome {
            Ok(()) => {
                self.phase = Phase::Submitted;
                Ok(())
            }
            Err(e) => {
                self.phase = Phase::Editing(self.last_index());
                Err(SubmitError::Remote(e))
            }
        }
    }
}

/// A profile the backend accepted.
#[derive(Debug, Clone, PartialEq)]
pub struct Submitted {
    pub receipt: String,
    /// Id parsed from the receipt; `None` when the receipt carries none.
    pub user_id: Option<String>,
    /// Draft cache writes that failed, keyed by storage key. The profile
    /// itself was still created.
    pub storage_failures: Vec<(&'static str, DraftError)>,
}

/// Runs the final submission: one backend call, no retry.
///
/// The wizard is only borrowed around the await point, never across it, so
/// UI callbacks may inspect it while the call is in flight.
pub async fn submit_profile<B, S>(
    wizard: &RefCell<Wizard>,
    schema: &Schema,
    backend: &B,
    drafts: &Drafts<S>,
) -> Result<Submitted, SubmitError>
where
    B: ProfileBackend,
    S: KeyValueStore,
{
    let principal = drafts.principal();
    let payload = wizard
        .borrow_mut()
        .begin_submit(schema, principal.as_deref())?;

    let mut storage_failures = Vec::new();

    // Merged answers are kept until the backend accepts them.
    let merged = wizard.borrow().answers().clone();
    if let Err(e) = drafts.save_result(&merged) {
        storage_failures.push((RESULT_KEY, e));
    }

    match backend.add_user_profile(&payload).await {
        Ok(receipt) => {
            wizard.borrow_mut().finish_submit(Ok(()))?;
            drafts.clear();
            let user_id = created_user_id(&receipt).map(str::to_string);
            if let Some(id) = &user_id {
                if let Err(e) = drafts.save_user_id(id) {
                    storage_failures.push((USER_ID_KEY, e));
                }
            }
            Ok(Submitted {
                receipt,
                user_id,
                storage_failures,
            })
        }
        Err(e) => {
            wizard.borrow_mut().finish_submit(Err(e.clone()))?;
            Err(SubmitError::Remote(e))
        }
    }
}
