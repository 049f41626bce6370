//! Draft answers and the fixed answer catalogs.

use crate::profile::{ProfilePatch, StudentStatus};

use super::state::Step;

/// The wizard always records this; the country field is not asked.
pub const DEFAULT_COUNTRY: &str = "India";

/// Industry domains offered on step 4, in display order.
pub const DOMAINS: [&str; 11] = [
    "Technology & Software",
    "E-commerce & Retail",
    "Healthcare & Biotech",
    "Education & EdTech",
    "Finance & FinTech",
    "Agriculture & AgriTech",
    "Clean Energy & Sustainability",
    "Manufacturing & Industry",
    "Consumer Products",
    "Media & Entertainment",
    "Other",
];

/// Regions offered on step 5, in display order.
pub const INDIAN_STATES: [&str; 30] = [
    "Andhra Pradesh",
    "Arunachal Pradesh",
    "Assam",
    "Bihar",
    "Chhattisgarh",
    "Goa",
    "Gujarat",
    "Haryana",
    "Himachal Pradesh",
    "Jharkhand",
    "Karnataka",
    "Kerala",
    "Madhya Pradesh",
    "Maharashtra",
    "Manipur",
    "Meghalaya",
    "Mizoram",
    "Nagaland",
    "Odisha",
    "Punjab",
    "Rajasthan",
    "Sikkim",
    "Tamil Nadu",
    "Telangana",
    "Tripura",
    "Uttar Pradesh",
    "Uttarakhand",
    "West Bengal",
    "Delhi",
    "Puducherry",
];

/// One captured input: which answer group changed and its new value.
#[derive(Debug, Clone, PartialEq)]
pub enum Answer {
    PrimaryIntent(String),
    Student(StudentStatus),
    StartupStage(String),
    Domain(String),
    Region(String),
    FundingRange(String),
}

/// The in-memory answer set collected during one wizard session.
///
/// Never persisted on its own — it either reaches the profile store through
/// submission or dies with the page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DraftAnswers {
    pub primary_intent: String,
    pub is_student: StudentStatus,
    pub startup_stage: String,
    pub domain: String,
    pub country: String,
    pub state: String,
    pub funding_range: String,
}

impl DraftAnswers {
    /// Overwrite the one field the answer belongs to.
    ///
    /// Domain and region values must exactly match a catalog entry; anything
    /// else leaves the field empty, like a select facing an unknown value.
    pub fn record(&mut self, answer: Answer) {
        match answer {
            Answer::PrimaryIntent(v) => self.primary_intent = v,
            Answer::Student(s) => self.is_student = s,
            Answer::StartupStage(v) => self.startup_stage = v,
            Answer::Domain(v) => self.domain = catalog_value(&DOMAINS, v),
            Answer::Region(v) => self.state = catalog_value(&INDIAN_STATES, v),
            Answer::FundingRange(v) => self.funding_range = v,
        }
    }

    /// Whether the presence check for `step` holds.
    pub fn step_complete(&self, step: Step) -> bool {
        match step {
            Step::Intent => !self.primary_intent.is_empty(),
            Step::Student => self.is_student.is_answered(),
            Step::Stage => !self.startup_stage.is_empty(),
            Step::Domain => !self.domain.is_empty(),
            Step::Region => !self.state.is_empty(),
            Step::Funding => !self.funding_range.is_empty(),
        }
    }

    /// The answers as a profile patch, every field included verbatim.
    pub fn to_patch(&self) -> ProfilePatch {
        ProfilePatch {
            onboarding_completed: None,
            primary_intent: Some(self.primary_intent.clone()),
            is_student: Some(self.is_student),
            startup_stage: Some(self.startup_stage.clone()),
            domain: Some(self.domain.clone()),
            country: Some(self.country.clone()),
            state: Some(self.state.clone()),
            funding_range: Some(self.funding_range.clone()),
            extra: serde_json::Map::new(),
        }
    }
}

fn catalog_value(catalog: &[&str], value: String) -> String {
    if catalog.contains(&value.as_str()) {
        value
    } else {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogs_are_fixed() {
        assert_eq!(DOMAINS.len(), 11);
        assert_eq!(DOMAINS.last(), Some(&"Other"));
        assert_eq!(INDIAN_STATES.len(), 30);
        assert_eq!(INDIAN_STATES[28], "Delhi");
        assert_eq!(INDIAN_STATES[29], "Puducherry");
    }

    #[test]
    fn record_touches_exactly_one_field() {
        let mut draft = DraftAnswers::default();
        draft.record(Answer::PrimaryIntent("Build a startup".to_string()));
        draft.record(Answer::Student(StudentStatus::Yes));

        assert_eq!(draft.primary_intent, "Build a startup");
        assert_eq!(draft.is_student, StudentStatus::Yes);
        assert!(draft.startup_stage.is_empty());
        assert!(draft.funding_range.is_empty());

        // A later edit overwrites only its own field
        draft.record(Answer::PrimaryIntent(
            "Explore student innovation opportunities".to_string(),
        ));
        assert_eq!(
            draft.primary_intent,
            "Explore student innovation opportunities"
        );
        assert_eq!(draft.is_student, StudentStatus::Yes);
    }

    #[test]
    fn catalog_answers_require_exact_matches() {
        let mut draft = DraftAnswers::default();
        draft.record(Answer::Domain("Technology & Software".to_string()));
        assert_eq!(draft.domain, "Technology & Software");

        draft.record(Answer::Domain("technology & software".to_string()));
        assert!(draft.domain.is_empty());

        draft.record(Answer::Region("Karnataka".to_string()));
        assert_eq!(draft.state, "Karnataka");
        draft.record(Answer::Region("Atlantis".to_string()));
        assert!(draft.state.is_empty());
    }

    #[test]
    fn step_checks_are_presence_only() {
        let mut draft = DraftAnswers::default();
        assert!(!draft.step_complete(Step::Intent));
        assert!(!draft.step_complete(Step::Student));

        draft.record(Answer::PrimaryIntent("x".to_string()));
        assert!(draft.step_complete(Step::Intent));

        // No is a valid answer; only Unanswered blocks
        draft.record(Answer::Student(StudentStatus::No));
        assert!(draft.step_complete(Step::Student));

        draft.record(Answer::FundingRange("<₹5 lakh".to_string()));
        assert!(draft.step_complete(Step::Funding));
        assert!(!draft.step_complete(Step::Domain));
    }

    #[test]
    fn patch_carries_every_answer_field() {
        let draft = DraftAnswers {
            primary_intent: "Build a startup".to_string(),
            is_student: StudentStatus::No,
            startup_stage: "Idea".to_string(),
            domain: "Other".to_string(),
            country: DEFAULT_COUNTRY.to_string(),
            state: "Goa".to_string(),
            funding_range: "<₹5 lakh".to_string(),
        };
        let patch = draft.to_patch();
        assert_eq!(patch.onboarding_completed, None);
        assert_eq!(patch.primary_intent.as_deref(), Some("Build a startup"));
        assert_eq!(patch.is_student, Some(StudentStatus::No));
        assert_eq!(patch.country.as_deref(), Some("India"));
        assert_eq!(patch.state.as_deref(), Some("Goa"));
        assert!(patch.extra.is_empty());
    }
}
