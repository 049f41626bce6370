//! Wizard coordinator — command handlers the host UI invokes.

use crate::profile::ProfileStore;
use crate::storage::StorageBackend;

use super::model::{Answer, DEFAULT_COUNTRY, DOMAINS, DraftAnswers, INDIAN_STATES};
use super::state::{Progress, Step};

/// Blocking notice shown when advancing past an incomplete step.
pub const STEP_INCOMPLETE_NOTICE: &str = "Please complete this step before continuing.";

/// Blocking notice shown when submitting with the final step incomplete.
pub const SUBMIT_INCOMPLETE_NOTICE: &str = "Please complete all fields.";

/// The two enumerated-choice inputs the wizard populates at mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceGroup {
    Domain,
    Region,
}

/// Everything the wizard needs from its hosting page.
///
/// Implementations sit on whatever document tree the host has. A host
/// missing one of the referenced elements (say, no progress indicator on a
/// stripped-down page) should silently skip the call — the wizard neither
/// knows nor cares whether anything was drawn.
pub trait WizardSurface {
    /// Make the container for `step` visible.
    fn show_step(&mut self, step: Step);

    /// Hide the container for `step`.
    fn hide_step(&mut self, step: Step);

    /// Redraw the progress indicator and step counter.
    fn render_progress(&mut self, progress: &Progress);

    /// Fill an enumerated-choice input with `options`, in order.
    fn populate_choices(&mut self, group: ChoiceGroup, options: &[&str]);

    /// Show a blocking notice to the user.
    fn show_notice(&mut self, message: &str);

    /// Navigate away from the wizard after successful submission.
    fn leave_wizard(&mut self);
}

/// Drives one user through the six onboarding steps.
///
/// Owns the step position and the draft answers for the lifetime of the
/// session; nothing is persisted until [`OnboardingWizard::on_submit`]
/// hands the finished draft to the profile store. The surface is passed
/// per command, so the machine itself carries no UI dependency.
pub struct OnboardingWizard {
    step: Step,
    draft: DraftAnswers,
    submitted: bool,
}

impl OnboardingWizard {
    pub fn new() -> Self {
        Self {
            step: Step::Intent,
            draft: DraftAnswers {
                country: DEFAULT_COUNTRY.to_string(),
                ..DraftAnswers::default()
            },
            submitted: false,
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    /// 1-based step position.
    pub fn position(&self) -> usize {
        self.step.index()
    }

    pub fn draft(&self) -> &DraftAnswers {
        &self.draft
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Whether the current step's presence check holds.
    pub fn current_step_complete(&self) -> bool {
        self.draft.step_complete(self.step)
    }

    /// Prepare the hosting page: fill both choice lists and draw the
    /// current step with its progress indicator.
    pub fn mount(&self, surface: &mut dyn WizardSurface) {
        surface.populate_choices(ChoiceGroup::Domain, &DOMAINS);
        surface.populate_choices(ChoiceGroup::Region, &INDIAN_STATES);
        surface.show_step(self.step);
        surface.render_progress(&Progress::for_step(self.step));
    }

    /// Capture one changed input into the draft. No validation, no step
    /// change; edits to earlier steps overwrite their field in place.
    pub fn on_answer(&mut self, answer: Answer) {
        if self.submitted {
            return;
        }
        self.draft.record(answer);
    }

    /// Advance one step, if the current step is complete.
    ///
    /// An incomplete step produces the blocking notice and no transition.
    /// At the last step this is a silent no-op: submission is a separate
    /// action, not a seventh step.
    pub fn on_next(&mut self, surface: &mut dyn WizardSurface) {
        if self.submitted {
            return;
        }
        if !self.current_step_complete() {
            surface.show_notice(STEP_INCOMPLETE_NOTICE);
            return;
        }
        let Some(next) = self.step.next() else {
            return;
        };
        surface.hide_step(self.step);
        self.step = next;
        tracing::debug!(step = %next, "advanced to step");
        surface.show_step(next);
        surface.render_progress(&Progress::for_step(next));
    }

    /// Go back one step. Never validates; a no-op at the first step.
    pub fn on_prev(&mut self, surface: &mut dyn WizardSurface) {
        if self.submitted {
            return;
        }
        let Some(prev) = self.step.prev() else {
            return;
        };
        surface.hide_step(self.step);
        self.step = prev;
        tracing::debug!(step = %prev, "moved back to step");
        surface.show_step(prev);
        surface.render_progress(&Progress::for_step(prev));
    }

    /// Submit the finished draft.
    ///
    /// Only valid at the last step with its answer present; anything else
    /// produces the blocking notice and leaves all state untouched. On
    /// success the whole draft goes to the profile store in one write and
    /// the surface is told to navigate away; the wizard is terminal after
    /// that.
    pub fn on_submit<S: StorageBackend>(
        &mut self,
        surface: &mut dyn WizardSurface,
        profile: &mut ProfileStore<S>,
    ) {
        if self.submitted {
            return;
        }
        if !self.step.is_last() || !self.current_step_complete() {
            surface.show_notice(SUBMIT_INCOMPLETE_NOTICE);
            return;
        }
        profile.complete_onboarding(self.draft.to_patch());
        self.submitted = true;
        tracing::debug!("onboarding submitted");
        surface.leave_wizard();
    }
}

impl Default for OnboardingWizard {
    fn default() -> Self {
        Self::new()
    }
}
