use tracing::{info, warn};

use crate::profile::{
    FieldUpdate, Profile, ProfileDraft, ProfileField, SetCollection, ValidationError,
};
use crate::store::ProfileStore;

/// One profile edit flow: seeded from a store when opened, committed back on save.
///
/// Dropping the session without a successful `save` discards the draft.
pub struct EditSession<'a, S: ProfileStore + ?Sized> {
    store: &'a S,
    draft: ProfileDraft,
}

impl<'a, S: ProfileStore + ?Sized> EditSession<'a, S> {
    /// Open a session seeded from the store's current profile.
    pub fn open(store: &'a S) -> Self {
        let draft = ProfileDraft::seed(store.current().as_ref());
        Self { store, draft }
    }

    pub fn draft(&self) -> &ProfileDraft {
        &self.draft
    }

    pub fn set_field(&mut self, update: FieldUpdate) {
        self.draft = self.draft.with_field(update);
    }

    pub fn set_field_text(&mut self, field: ProfileField, raw: &str) {
        self.draft = self.draft.with_field_text(field, raw);
    }

    pub fn toggle(&mut self, collection: SetCollection, token: &str) {
        self.draft = self.draft.toggle(collection, token);
    }

    /// Commit the draft and hand the result to the store.
    ///
    /// On a validation failure nothing is stored and the draft stays as it was,
    /// so the caller can prompt for the missing fields and try again.
    pub fn save(&self) -> Result<Profile, ValidationError> {
        match self.draft.commit() {
            Ok(profile) => {
                self.store.replace(profile.clone());
                info!("Profile {} saved", profile.id);
                Ok(profile)
            }
            Err(e) => {
                warn!("Profile not saved: {}", e);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryProfileStore;

    #[test]
    fn test_open_on_empty_store_uses_defaults() {
        let store = InMemoryProfileStore::new();
        let session = EditSession::open(&store);
        assert_eq!(session.draft(), &ProfileDraft::default());
    }

    #[test]
    fn test_failed_save_keeps_draft_and_store() {
        let store = InMemoryProfileStore::new();
        let mut session = EditSession::open(&store);
        session.set_field(FieldUpdate::FirstName("Taro".to_string()));
        let before = session.draft().clone();

        let err = session.save().unwrap_err();
        assert_eq!(
            err.missing,
            vec![ProfileField::LastName, ProfileField::Email, ProfileField::Phone]
        );
        assert_eq!(session.draft(), &before);
        assert!(store.current().is_none());
    }

    #[test]
    fn test_save_stores_profile_and_reopen_keeps_id() {
        let store = InMemoryProfileStore::new();
        let mut session = EditSession::open(&store);
        session.set_field_text(ProfileField::FirstName, "Taro");
        session.set_field_text(ProfileField::LastName, "Yamada");
        session.set_field_text(ProfileField::Email, "taro@example.com");
        session.set_field_text(ProfileField::Phone, "090");
        session.toggle(SetCollection::PreferredDays, "Fri");
        let saved = session.save().unwrap();
        assert_eq!(store.current().as_ref(), Some(&saved));

        let mut reopened = EditSession::open(&store);
        assert_eq!(reopened.draft().id(), Some(&saved.id));
        reopened.set_field_text(ProfileField::Age, "33");
        let resaved = reopened.save().unwrap();
        assert_eq!(resaved.id, saved.id);
        assert_eq!(resaved.age, 33);
        assert!(resaved.preferred_days.contains("Fri"));
    }

    #[test]
    fn test_abandoned_session_changes_nothing() {
        let store = InMemoryProfileStore::new();
        {
            let mut session = EditSession::open(&store);
            session.set_field_text(ProfileField::FirstName, "Gone");
        }
        assert!(store.current().is_none());
    }
}
