//! Integration tests for hymatch-core
//!
//! These tests drive the public API the way the app's screens do: an edit
//! session against a profile store, and a resolver that labels the form.

use std::collections::BTreeSet;
use std::io::Write;

use hymatch_core::config::Config;
use hymatch_core::i18n::{CoverageValidator, LocaleRegistry, LocaleResolver, LocaleTable};
use hymatch_core::profile::{
    EditSession, FieldUpdate, Gender, JapaneseLevel, Profile, ProfileDraft, ProfileField,
    SetCollection, JOB_TYPES, REQUIRED_FIELDS, WORK_DAYS,
};
use hymatch_core::store::{InMemoryProfileStore, ProfileStore};

// ==================== Test Helpers ====================

fn complete_session(store: &InMemoryProfileStore) -> EditSession<'_, InMemoryProfileStore> {
    let mut session = EditSession::open(store);
    session.set_field(FieldUpdate::FirstName("Nguyen".to_string()));
    session.set_field(FieldUpdate::LastName("Van An".to_string()));
    session.set_field(FieldUpdate::Email("an@example.com".to_string()));
    session.set_field(FieldUpdate::Phone("090-1234-5678".to_string()));
    session
}

// ==================== Profile Flow Tests ====================

#[test]
fn test_first_profile_flow() {
    let store = InMemoryProfileStore::new();
    let mut session = complete_session(&store);
    session.set_field(FieldUpdate::Age("abc".to_string()));
    session.set_field(FieldUpdate::Gender(Gender::Other));
    session.set_field(FieldUpdate::JapaneseLevel(JapaneseLevel::N2));
    session.toggle(SetCollection::PreferredDays, "Mon");
    session.toggle(SetCollection::PreferredDays, "Tue");
    session.toggle(SetCollection::PreferredDays, "Mon");
    session.toggle(SetCollection::PreferredJobTypes, "cooking");

    let profile = session.save().expect("complete draft should commit");

    assert!(profile.is_profile_complete);
    assert!(!profile.id.as_str().is_empty());
    assert_eq!(profile.age, 20);
    assert_eq!(profile.gender, Gender::Other);
    assert_eq!(profile.preferred_days, BTreeSet::from(["Tue".to_string()]));
    assert_eq!(
        profile.preferred_job_types,
        BTreeSet::from(["cooking".to_string()])
    );
    assert_eq!(store.current(), Some(profile));
}

#[test]
fn test_missing_fields_are_all_reported() {
    for mask in 0u8..16 {
        let mut draft = ProfileDraft::seed(None);
        let mut expected = Vec::new();
        for (bit, field) in REQUIRED_FIELDS.into_iter().enumerate() {
            if mask & (1 << bit) != 0 {
                draft = draft.with_field_text(field, "value");
            } else {
                expected.push(field);
            }
        }

        let before = draft.clone();
        match draft.commit() {
            Ok(profile) => {
                assert!(expected.is_empty());
                assert!(profile.is_profile_complete);
            }
            Err(e) => assert_eq!(e.missing, expected),
        }
        assert_eq!(draft, before);
    }
}

#[test]
fn test_separate_sessions_get_distinct_ids() {
    let first_store = InMemoryProfileStore::new();
    let second_store = InMemoryProfileStore::new();

    let first = complete_session(&first_store).save().unwrap();
    let second = complete_session(&second_store).save().unwrap();

    assert_ne!(first.id, second.id);
}

#[test]
fn test_editing_existing_profile_keeps_id() {
    let store = InMemoryProfileStore::new();
    let original = complete_session(&store).save().unwrap();

    let mut session = EditSession::open(&store);
    session.set_field(FieldUpdate::Nationality("Vietnam".to_string()));
    let updated = session.save().unwrap();

    assert_eq!(updated.id, original.id);
    assert_eq!(updated.nationality, "Vietnam");
    assert_eq!(updated.first_name, original.first_name);
}

#[test]
fn test_clearing_required_field_blocks_save() {
    let store = InMemoryProfileStore::new();
    let original = complete_session(&store).save().unwrap();

    let mut session = EditSession::open(&store);
    session.set_field(FieldUpdate::Email(String::new()));
    let err = session.save().unwrap_err();

    assert_eq!(err.missing, vec![ProfileField::Email]);
    assert_eq!(store.current(), Some(original));
    assert!(session.draft().email().is_empty());
}

#[test]
fn test_toggling_every_option_twice_is_identity() {
    let draft = ProfileDraft::seed(None)
        .toggle(SetCollection::PreferredDays, "Wed")
        .toggle(SetCollection::PreferredJobTypes, "office");

    let mut toggled = draft.clone();
    for day in WORK_DAYS {
        toggled = toggled
            .toggle(SetCollection::PreferredDays, day)
            .toggle(SetCollection::PreferredDays, day);
    }
    for job in JOB_TYPES {
        toggled = toggled
            .toggle(SetCollection::PreferredJobTypes, job)
            .toggle(SetCollection::PreferredJobTypes, job);
    }

    assert_eq!(toggled, draft);
}

#[test]
fn test_profile_json_roundtrip() {
    let store = InMemoryProfileStore::new();
    let mut session = complete_session(&store);
    session.set_field(FieldUpdate::ProfilePicture(Some("file:///me.png".to_string())));
    let profile = session.save().unwrap();

    let json = serde_json::to_string(&profile).unwrap();
    assert!(json.contains("\"profilePicture\":\"file:///me.png\""));
    let restored: Profile = serde_json::from_str(&json).unwrap();
    assert_eq!(profile, restored);
}

// ==================== Localization Tests ====================

#[test]
fn test_locale_switch_scenario() {
    let mut resolver = LocaleResolver::builtin();

    resolver.set_locale("en");
    assert_eq!(resolver.resolve("profile.save"), "Save Profile");
    assert_eq!(resolver.resolve("nonexistent.key"), "nonexistent.key");

    resolver.set_locale("ja");
    assert_eq!(resolver.resolve("profile.save"), "プロフィールを保存");
    assert_eq!(resolver.resolve("nonexistent.key"), "nonexistent.key");
}

#[test]
fn test_every_supported_locale_labels_the_form() {
    let mut resolver = LocaleResolver::builtin();
    for locale in LocaleRegistry::get().list_all() {
        resolver.set_locale(locale.code);
        for field in ProfileField::ALL {
            assert_ne!(resolver.resolve(field.label_key()), field.label_key());
        }
        for gender in Gender::ALL {
            assert_ne!(resolver.resolve(gender.label_key()), gender.label_key());
        }
        for collection in [SetCollection::PreferredDays, SetCollection::PreferredJobTypes] {
            assert_ne!(resolver.resolve(collection.label_key()), collection.label_key());
        }
    }
}

#[test]
fn test_unsupported_locale_resolves_keys() {
    let mut resolver = LocaleResolver::builtin();
    resolver.set_locale("fr");
    assert_eq!(resolver.resolve("tabs.jobs"), "tabs.jobs");

    resolver.set_locale("uz");
    assert_eq!(resolver.resolve("tabs.jobs"), "Ishlar");
}

#[test]
fn test_locale_table_from_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("locales.json");
    let json = r#"{
        "en": {"tabs.jobs": "Jobs"},
        "ja": {"tabs.jobs": "お仕事", "tabs.extra": "余分"}
    }"#;
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(json.as_bytes()).unwrap();

    let config = Config {
        default_locale: "en".to_string(),
        locale_file: Some(path),
    };
    let table = config.load_locale_table().unwrap();

    let report = CoverageValidator::validate(&table, "en");
    assert!(!report.has_errors());
    assert!(report.has_warnings());

    let mut resolver = LocaleResolver::new(table, config.default_locale.clone());
    assert_eq!(resolver.resolve("tabs.jobs"), "Jobs");
    resolver.set_locale("ja");
    assert_eq!(resolver.resolve("tabs.jobs"), "お仕事");
    assert_eq!(resolver.resolve("profile.save"), "profile.save");
}

#[test]
fn test_builtin_table_is_complete() {
    let report = CoverageValidator::validate(&LocaleTable::builtin(), "ja");
    assert!(report.is_clean(), "{:?}", report);
}
