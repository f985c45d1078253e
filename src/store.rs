//! Boundary to whatever holds the canonical, committed profile.
//!
//! Edit sessions read the current profile from a store to seed their draft and
//! hand the committed profile back to it. Persistence is the store's business.

use std::sync::Mutex;
use tracing::info;

use crate::profile::Profile;

pub trait ProfileStore {
    /// The committed profile, if one exists.
    fn current(&self) -> Option<Profile>;

    /// Replace the committed profile.
    fn replace(&self, profile: Profile);
}

/// Process-local store holding at most one profile.
#[derive(Debug, Default)]
pub struct InMemoryProfileStore {
    profile: Mutex<Option<Profile>>,
}

impl InMemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_profile(profile: Profile) -> Self {
        Self {
            profile: Mutex::new(Some(profile)),
        }
    }
}

impl ProfileStore for InMemoryProfileStore {
    fn current(&self) -> Option<Profile> {
        self.profile
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn replace(&self, profile: Profile) {
        info!("Storing profile {}", profile.id);
        *self
            .profile
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(profile);
    }
}
