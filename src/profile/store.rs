//! Persistent profile store — single source of truth for onboarding answers.

use crate::storage::StorageBackend;

use super::model::{FieldUpdate, FieldValue, ProfilePatch, ProfileRecord, intents, keys};

/// The one durable key the profile lives under.
pub const STORAGE_KEY: &str = "fundme_user_data";

/// Owns the user profile and its backing storage.
///
/// Construct one per browsing context with [`ProfileStore::load`] and pass
/// it by reference to whatever needs it; there is no global instance. Every
/// mutating operation persists the whole record before returning. A failed
/// write is logged and otherwise ignored: the in-memory record keeps the
/// new value and a later write may still catch up.
pub struct ProfileStore<S: StorageBackend> {
    backend: S,
    record: ProfileRecord,
    extras: serde_json::Map<String, serde_json::Value>,
}

impl<S: StorageBackend> ProfileStore<S> {
    /// Load the profile from `backend`.
    ///
    /// An absent payload yields the default record. A payload that fails to
    /// parse is logged and discarded in favor of the defaults — never an
    /// error to the caller. Otherwise the stored fields override the
    /// defaults field-by-field, and unrecognized fields are kept for the
    /// next persist.
    pub fn load(backend: S) -> Self {
        let mut record = ProfileRecord::default();
        let mut extras = serde_json::Map::new();

        match backend.get(STORAGE_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<ProfilePatch>(&raw) {
                Ok(patch) => {
                    record.apply(&patch);
                    extras = patch.extra;
                }
                Err(e) => {
                    tracing::warn!("Failed to parse stored profile, using defaults: {e}");
                }
            },
            Ok(None) => {}
            Err(e) => {
                tracing::warn!("Failed to read stored profile, using defaults: {e}");
            }
        }

        Self {
            backend,
            record,
            extras,
        }
    }

    /// Snapshot of the current record. Mutating the returned value does not
    /// touch the store.
    pub fn get_all(&self) -> ProfileRecord {
        self.record.clone()
    }

    /// Read one field by its persisted key name.
    ///
    /// Unknown keys — including extras carried from older payload shapes —
    /// read as `None`.
    pub fn get_field(&self, key: &str) -> Option<FieldValue> {
        match key {
            keys::ONBOARDING_COMPLETED => {
                Some(FieldValue::Bool(self.record.onboarding_completed))
            }
            keys::PRIMARY_INTENT => Some(FieldValue::Text(self.record.primary_intent.clone())),
            keys::IS_STUDENT => Some(FieldValue::Student(self.record.is_student)),
            keys::STARTUP_STAGE => Some(FieldValue::Text(self.record.startup_stage.clone())),
            keys::DOMAIN => Some(FieldValue::Text(self.record.domain.clone())),
            keys::COUNTRY => Some(FieldValue::Text(self.record.country.clone())),
            keys::STATE => Some(FieldValue::Text(self.record.state.clone())),
            keys::FUNDING_RANGE => Some(FieldValue::Text(self.record.funding_range.clone())),
            _ => None,
        }
    }

    /// Write one field and persist.
    pub fn set_field(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::OnboardingCompleted(v) => self.record.onboarding_completed = v,
            FieldUpdate::PrimaryIntent(v) => self.record.primary_intent = v,
            FieldUpdate::IsStudent(v) => self.record.is_student = v,
            FieldUpdate::StartupStage(v) => self.record.startup_stage = v,
            FieldUpdate::Domain(v) => self.record.domain = v,
            FieldUpdate::Country(v) => self.record.country = v,
            FieldUpdate::State(v) => self.record.state = v,
            FieldUpdate::FundingRange(v) => self.record.funding_range = v,
        }
        self.persist();
    }

    /// Merge a partial record (partial wins per field) and persist.
    pub fn update_fields(&mut self, patch: ProfilePatch) {
        self.record.apply(&patch);
        self.extras.extend(patch.extra);
        self.persist();
    }

    pub fn is_onboarded(&self) -> bool {
        self.record.onboarding_completed
    }

    /// Absorb a completed set of onboarding answers.
    ///
    /// The sole write path the wizard uses. The merged record with
    /// `onboarding_completed` forced on is persisted in a single write, so
    /// storage holds either the full new record or the previous payload.
    pub fn complete_onboarding(&mut self, answers: ProfilePatch) {
        self.record.apply(&answers);
        self.extras.extend(answers.extra);
        self.record.onboarding_completed = true;
        self.persist();
        tracing::debug!("Onboarding answers merged into profile");
    }

    /// Restore defaults and delete the durable payload.
    pub fn reset(&mut self) {
        self.record = ProfileRecord::default();
        self.extras.clear();
        if let Err(e) = self.backend.remove(STORAGE_KEY) {
            tracing::warn!("Failed to remove stored profile: {e}");
        }
    }

    /// Greeting line for the home page, keyed off the primary intent.
    pub fn greeting(&self) -> &'static str {
        match self.record.primary_intent.as_str() {
            intents::BUILD_STARTUP => "Building your startup",
            intents::EXPLORE_STUDENT => "Exploring opportunities",
            _ => "Welcome to FundMe",
        }
    }

    /// Human-readable label for the stored startup stage. Unrecognized
    /// values pass through unchanged.
    pub fn stage_display(&self) -> String {
        match self.record.startup_stage.as_str() {
            "Idea" => "Idea Stage".to_string(),
            "Prototype" => "Prototype Stage".to_string(),
            "Registered startup" => "Registered Startup".to_string(),
            "Early revenue" => "Early Revenue".to_string(),
            other => other.to_string(),
        }
    }

    /// The stored funding range, or a fixed fallback when empty.
    pub fn funding_range_display(&self) -> String {
        if self.record.funding_range.is_empty() {
            "Not specified".to_string()
        } else {
            self.record.funding_range.clone()
        }
    }

    /// Give the backing storage back, dropping the in-memory state.
    pub fn into_backend(self) -> S {
        self.backend
    }

    /// Serialize the record (plus carried extras) and write it out. Write
    /// failures are logged; the in-memory state is not rolled back.
    fn persist(&mut self) {
        let value = match serde_json::to_value(&self.record) {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!("Failed to serialize profile: {e}");
                return;
            }
        };
        let mut payload = self.extras.clone();
        if let serde_json::Value::Object(fields) = value {
            payload.extend(fields);
        }
        let raw = serde_json::Value::Object(payload).to_string();
        if let Err(e) = self.backend.set(STORAGE_KEY, &raw) {
            tracing::warn!("Failed to persist profile: {e}");
        }
    }
}
