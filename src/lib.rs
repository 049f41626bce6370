//! FundMe client core — profile persistence and the onboarding wizard.
//!
//! Two loosely coupled components: a [`profile::ProfileStore`] that owns the
//! durable user profile, and an [`onboarding::OnboardingWizard`] that walks a
//! new user through six steps and hands the finished answers to the store.
//! The host UI drives both through explicit commands and two small ports
//! ([`storage::StorageBackend`] and [`onboarding::WizardSurface`]), so the
//! core itself has no UI or platform dependency.

pub mod error;
pub mod onboarding;
pub mod profile;
pub mod storage;
