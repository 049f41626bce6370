//! User profile data model.

use serde::{Deserialize, Serialize};

/// Whether the user is a student.
///
/// `Unanswered` is a real state, not a missing value: the wizard refuses to
/// advance until it becomes `Yes` or `No`, and the persisted payload keeps
/// it distinct from `No`. On the wire it is `true` / `false` / `null`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<bool>", into = "Option<bool>")]
pub enum StudentStatus {
    Yes,
    No,
    #[default]
    Unanswered,
}

impl StudentStatus {
    pub fn is_answered(&self) -> bool {
        !matches!(self, Self::Unanswered)
    }

    pub fn as_bool(&self) -> Option<bool> {
        (*self).into()
    }
}

impl From<Option<bool>> for StudentStatus {
    fn from(value: Option<bool>) -> Self {
        match value {
            Some(true) => Self::Yes,
            Some(false) => Self::No,
            None => Self::Unanswered,
        }
    }
}

impl From<StudentStatus> for Option<bool> {
    fn from(value: StudentStatus) -> Self {
        match value {
            StudentStatus::Yes => Some(true),
            StudentStatus::No => Some(false),
            StudentStatus::Unanswered => None,
        }
    }
}

/// Persisted field names, as they appear in the stored payload.
pub mod keys {
    pub const ONBOARDING_COMPLETED: &str = "onboardingCompleted";
    pub const PRIMARY_INTENT: &str = "primaryIntent";
    pub const IS_STUDENT: &str = "isStudent";
    pub const STARTUP_STAGE: &str = "startupStage";
    pub const DOMAIN: &str = "domain";
    pub const COUNTRY: &str = "country";
    pub const STATE: &str = "state";
    pub const FUNDING_RANGE: &str = "fundingRange";
}

/// Primary-intent values the greeting recognizes.
pub mod intents {
    pub const BUILD_STARTUP: &str = "Build a startup";
    pub const EXPLORE_STUDENT: &str = "Explore student innovation opportunities";
}

/// The durable user profile.
///
/// Always fully populated: loading merges whatever was stored into this
/// default shape, so readers never see a missing field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRecord {
    pub onboarding_completed: bool,
    pub primary_intent: String,
    pub is_student: StudentStatus,
    pub startup_stage: String,
    pub domain: String,
    pub country: String,
    pub state: String,
    pub funding_range: String,
}

impl ProfileRecord {
    /// Merge a partial record into this one, the partial winning per field.
    pub fn apply(&mut self, patch: &ProfilePatch) {
        if let Some(completed) = patch.onboarding_completed {
            self.onboarding_completed = completed;
        }
        if let Some(ref intent) = patch.primary_intent {
            self.primary_intent = intent.clone();
        }
        if let Some(student) = patch.is_student {
            self.is_student = student;
        }
        if let Some(ref stage) = patch.startup_stage {
            self.startup_stage = stage.clone();
        }
        if let Some(ref domain) = patch.domain {
            self.domain = domain.clone();
        }
        if let Some(ref country) = patch.country {
            self.country = country.clone();
        }
        if let Some(ref state) = patch.state {
            self.state = state.clone();
        }
        if let Some(ref range) = patch.funding_range {
            self.funding_range = range.clone();
        }
    }
}

/// Partial profile: the all-optional shadow of [`ProfileRecord`].
///
/// Doubles as the parse target for stored payloads (older or partial
/// captures merge cleanly into the defaults) and as the argument to
/// `update_fields`. Fields the current shape does not recognize land in
/// `extra`, are carried back out on the next persist, and are never read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub onboarding_completed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_intent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_student: Option<StudentStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub startup_stage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub funding_range: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// A single profile value, as returned by keyed reads.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Bool(bool),
    Text(String),
    Student(StudentStatus),
}

/// A single-field write: the field and its new value in one variant.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldUpdate {
    OnboardingCompleted(bool),
    PrimaryIntent(String),
    IsStudent(StudentStatus),
    StartupStage(String),
    Domain(String),
    Country(String),
    State(String),
    FundingRange(String),
}
