//! Committed profile record and the value types its fields use.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::sync::atomic::{AtomicI64, Ordering};

/// Age used for new drafts and for age input that does not parse.
pub const DEFAULT_AGE: u32 = 20;

/// Weekday tokens offered for `preferredDays`.
pub const WORK_DAYS: &[&str] = &["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Job-type tokens offered for `preferredJobTypes`.
pub const JOB_TYPES: &[&str] = &[
    "cooking",
    "delivery",
    "warehouse",
    "cleaning",
    "retail",
    "restaurant",
    "office",
    "construction",
];

// ==================== Identifier ====================

/// Stable profile identifier, assigned at first commit.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileId(String);

/// Last millisecond timestamp handed out, so ids stay unique within a process.
static LAST_ISSUED_MILLIS: AtomicI64 = AtomicI64::new(0);

impl ProfileId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a time-derived identifier (milliseconds since the Unix epoch).
    ///
    /// Two calls in the same millisecond get consecutive values.
    pub fn generate() -> Self {
        let now = Utc::now().timestamp_millis();
        let mut last = LAST_ISSUED_MILLIS.load(Ordering::Relaxed);
        loop {
            let next = now.max(last + 1);
            match LAST_ISSUED_MILLIS.compare_exchange_weak(
                last,
                next,
                Ordering::Relaxed,
                Ordering::Relaxed,
            ) {
                Ok(_) => return Self(next.to_string()),
                Err(current) => last = current,
            }
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ==================== Gender ====================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Male,
    Female,
    Other,
}

impl Gender {
    /// All choices, in form order.
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }

    /// Translation key for the choice's label.
    pub fn label_key(self) -> &'static str {
        match self {
            Gender::Male => "profile.male",
            Gender::Female => "profile.female",
            Gender::Other => "profile.other",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.as_str() == token)
    }
}

// ==================== Japanese Level ====================

/// JLPT level. Declaration order is N1 (most advanced) to N5.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum JapaneseLevel {
    N1,
    N2,
    N3,
    N4,
    #[default]
    N5,
}

impl JapaneseLevel {
    pub const ALL: [JapaneseLevel; 5] = [
        JapaneseLevel::N1,
        JapaneseLevel::N2,
        JapaneseLevel::N3,
        JapaneseLevel::N4,
        JapaneseLevel::N5,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            JapaneseLevel::N1 => "N1",
            JapaneseLevel::N2 => "N2",
            JapaneseLevel::N3 => "N3",
            JapaneseLevel::N4 => "N4",
            JapaneseLevel::N5 => "N5",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.as_str() == token)
    }
}

// ==================== Profile ====================

/// A finalized profile, as handed to the profile store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: ProfileId,
    pub first_name: String,
    pub last_name: String,
    pub age: u32,
    pub gender: Gender,
    pub nationality: String,
    pub email: String,
    pub phone: String,
    pub japanese_level: JapaneseLevel,
    pub preferred_days: BTreeSet<String>,
    pub preferred_job_types: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
    pub is_profile_complete: bool,
}

impl Profile {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== ProfileId Tests ====================

    #[test]
    fn test_generated_ids_are_unique() {
        let ids: BTreeSet<_> = (0..100).map(|_| ProfileId::generate()).collect();
        assert_eq!(ids.len(), 100);
    }

    #[test]
    fn test_generated_id_is_numeric_timestamp() {
        let before = Utc::now().timestamp_millis();
        let id = ProfileId::generate();
        let value: i64 = id.as_str().parse().expect("numeric id");
        assert!(value >= before);
    }

    #[test]
    fn test_profile_id_display() {
        assert_eq!(ProfileId::new("abc").to_string(), "abc");
    }

    // ==================== Gender Tests ====================

    #[test]
    fn test_gender_default_is_male() {
        assert_eq!(Gender::default(), Gender::Male);
    }

    #[test]
    fn test_gender_tokens() {
        assert_eq!(Gender::from_token("female"), Some(Gender::Female));
        assert_eq!(Gender::from_token("Female"), None);
        assert_eq!(Gender::Other.label_key(), "profile.other");
    }

    #[test]
    fn test_gender_serde() {
        assert_eq!(serde_json::to_string(&Gender::Other).unwrap(), "\"other\"");
    }

    // ==================== JapaneseLevel Tests ====================

    #[test]
    fn test_level_default_is_n5() {
        assert_eq!(JapaneseLevel::default(), JapaneseLevel::N5);
    }

    #[test]
    fn test_level_ordering() {
        assert!(JapaneseLevel::N1 < JapaneseLevel::N2);
        assert!(JapaneseLevel::N4 < JapaneseLevel::N5);
        let mut sorted = JapaneseLevel::ALL;
        sorted.sort();
        assert_eq!(sorted, JapaneseLevel::ALL);
    }

    #[test]
    fn test_level_tokens() {
        assert_eq!(JapaneseLevel::from_token("N3"), Some(JapaneseLevel::N3));
        assert_eq!(JapaneseLevel::from_token("N6"), None);
        assert_eq!(serde_json::to_string(&JapaneseLevel::N2).unwrap(), "\"N2\"");
    }

    // ==================== Profile Tests ====================

    #[test]
    fn test_profile_serializes_camel_case() {
        let profile = Profile {
            id: ProfileId::new("1"),
            first_name: "Taro".to_string(),
            last_name: "Yamada".to_string(),
            age: 30,
            gender: Gender::Male,
            nationality: String::new(),
            email: "taro@example.com".to_string(),
            phone: "090".to_string(),
            japanese_level: JapaneseLevel::N1,
            preferred_days: BTreeSet::from(["Mon".to_string()]),
            preferred_job_types: BTreeSet::new(),
            profile_picture: None,
            is_profile_complete: true,
        };

        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["firstName"], "Taro");
        assert_eq!(json["japaneseLevel"], "N1");
        assert_eq!(json["isProfileComplete"], true);
        assert_eq!(json["preferredDays"][0], "Mon");
        assert!(json.get("profilePicture").is_none());
        assert_eq!(profile.full_name(), "Taro Yamada");
    }
}
