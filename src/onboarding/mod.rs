//! Onboarding wizard — six ordered steps that build the user profile.
//!
//! The wizard owns a draft answer set and a step position. The host page
//! feeds it input changes and navigation clicks as explicit commands; the
//! wizard validates presence per step, drives the progress indicator
//! through a [`WizardSurface`], and on submission hands the whole draft to
//! the profile store in a single write.

pub mod model;
pub mod state;
pub mod wizard;

pub use model::{Answer, DEFAULT_COUNTRY, DOMAINS, DraftAnswers, INDIAN_STATES};
pub use state::{Progress, Step, StepMark, TOTAL_STEPS};
pub use wizard::{
    ChoiceGroup, OnboardingWizard, STEP_INCOMPLETE_NOTICE, SUBMIT_INCOMPLETE_NOTICE,
    WizardSurface,
};
