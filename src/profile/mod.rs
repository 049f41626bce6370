//! User profile — the durable record of a user's onboarding answers.
//!
//! The store is the single source of truth across page loads: it loads the
//! stored payload merged over the default shape, persists the whole record
//! on every mutation, and derives the few display strings the rest of the
//! site reads. The onboarding wizard writes to it exactly once, through
//! [`ProfileStore::complete_onboarding`].

pub mod model;
pub mod store;

pub use model::{
    FieldUpdate, FieldValue, ProfilePatch, ProfileRecord, StudentStatus, intents, keys,
};
pub use store::{ProfileStore, STORAGE_KEY};
