//! Profile draft: the in-progress, possibly incomplete profile of an edit session.
//!
//! Every mutation returns a new draft and leaves the receiver untouched, so a
//! draft never aliases the committed profile it was seeded from. Only `commit`
//! can fail, and only on empty required fields. Everything else is normalized
//! to a default instead of being rejected.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::profile::{
    Gender, JapaneseLevel, Profile, ProfileId, UnknownField, ValidationError, DEFAULT_AGE,
};

// ==================== Field Names ====================

/// Scalar fields of a draft, named as the edit form names them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProfileField {
    FirstName,
    LastName,
    Age,
    Gender,
    Nationality,
    Email,
    Phone,
    JapaneseLevel,
    ProfilePicture,
}

/// Fields that must be non-empty for `commit` to succeed, in form order.
pub const REQUIRED_FIELDS: [ProfileField; 4] = [
    ProfileField::FirstName,
    ProfileField::LastName,
    ProfileField::Email,
    ProfileField::Phone,
];

impl ProfileField {
    pub const ALL: [ProfileField; 9] = [
        ProfileField::FirstName,
        ProfileField::LastName,
        ProfileField::Age,
        ProfileField::Gender,
        ProfileField::Nationality,
        ProfileField::Email,
        ProfileField::Phone,
        ProfileField::JapaneseLevel,
        ProfileField::ProfilePicture,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ProfileField::FirstName => "firstName",
            ProfileField::LastName => "lastName",
            ProfileField::Age => "age",
            ProfileField::Gender => "gender",
            ProfileField::Nationality => "nationality",
            ProfileField::Email => "email",
            ProfileField::Phone => "phone",
            ProfileField::JapaneseLevel => "japaneseLevel",
            ProfileField::ProfilePicture => "profilePicture",
        }
    }

    pub fn is_required(self) -> bool {
        REQUIRED_FIELDS.contains(&self)
    }

    /// Translation key for the field's form label.
    pub fn label_key(self) -> &'static str {
        match self {
            ProfileField::FirstName => "profile.firstName",
            ProfileField::LastName => "profile.lastName",
            ProfileField::Age => "profile.age",
            ProfileField::Gender => "profile.gender",
            ProfileField::Nationality => "profile.nationality",
            ProfileField::Email => "profile.email",
            ProfileField::Phone => "profile.phone",
            ProfileField::JapaneseLevel => "profile.japaneseLevel",
            ProfileField::ProfilePicture => "profile.addPhoto",
        }
    }
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProfileField {
    type Err = UnknownField;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == name)
            .ok_or_else(|| UnknownField(name.to_string()))
    }
}

/// Multi-select fields of a draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SetCollection {
    PreferredDays,
    PreferredJobTypes,
}

impl SetCollection {
    pub fn as_str(self) -> &'static str {
        match self {
            SetCollection::PreferredDays => "preferredDays",
            SetCollection::PreferredJobTypes => "preferredJobTypes",
        }
    }

    pub fn label_key(self) -> &'static str {
        match self {
            SetCollection::PreferredDays => "profile.preferredDays",
            SetCollection::PreferredJobTypes => "profile.preferredJobTypes",
        }
    }
}

impl FromStr for SetCollection {
    type Err = UnknownField;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "preferredDays" => Ok(SetCollection::PreferredDays),
            "preferredJobTypes" => Ok(SetCollection::PreferredJobTypes),
            other => Err(UnknownField(other.to_string())),
        }
    }
}

/// A single scalar field replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    FirstName(String),
    LastName(String),
    /// Raw age text as typed; normalized by `parse_age`
    Age(String),
    Gender(Gender),
    Nationality(String),
    Email(String),
    Phone(String),
    JapaneseLevel(JapaneseLevel),
    /// Opaque media reference from the image picker
    ProfilePicture(Option<String>),
}

impl FieldUpdate {
    /// Build an update from raw form text.
    ///
    /// Unknown gender or level tokens become the defaults, and an empty picture
    /// reference clears the picture.
    pub fn from_text(field: ProfileField, raw: &str) -> Self {
        match field {
            ProfileField::FirstName => FieldUpdate::FirstName(raw.to_string()),
            ProfileField::LastName => FieldUpdate::LastName(raw.to_string()),
            ProfileField::Age => FieldUpdate::Age(raw.to_string()),
            ProfileField::Gender => {
                FieldUpdate::Gender(Gender::from_token(raw.trim()).unwrap_or_default())
            }
            ProfileField::Nationality => FieldUpdate::Nationality(raw.to_string()),
            ProfileField::Email => FieldUpdate::Email(raw.to_string()),
            ProfileField::Phone => FieldUpdate::Phone(raw.to_string()),
            ProfileField::JapaneseLevel => FieldUpdate::JapaneseLevel(
                JapaneseLevel::from_token(raw.trim()).unwrap_or_default(),
            ),
            ProfileField::ProfilePicture => {
                let uri = raw.trim();
                FieldUpdate::ProfilePicture((!uri.is_empty()).then(|| uri.to_string()))
            }
        }
    }

    pub fn field(&self) -> ProfileField {
        match self {
            FieldUpdate::FirstName(_) => ProfileField::FirstName,
            FieldUpdate::LastName(_) => ProfileField::LastName,
            FieldUpdate::Age(_) => ProfileField::Age,
            FieldUpdate::Gender(_) => ProfileField::Gender,
            FieldUpdate::Nationality(_) => ProfileField::Nationality,
            FieldUpdate::Email(_) => ProfileField::Email,
            FieldUpdate::Phone(_) => ProfileField::Phone,
            FieldUpdate::JapaneseLevel(_) => ProfileField::JapaneseLevel,
            FieldUpdate::ProfilePicture(_) => ProfileField::ProfilePicture,
        }
    }
}

/// Parse free-form age text, falling back to `DEFAULT_AGE`.
///
/// Leading whitespace and an optional `+` are skipped, then the leading run of
/// digits is read (`"25abc"` is 25). No digits, a minus sign, overflow, or zero
/// all give the default.
pub fn parse_age(raw: &str) -> u32 {
    let trimmed = raw.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits_end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());

    match unsigned[..digits_end].parse::<u32>() {
        Ok(age) if age > 0 => age,
        _ => DEFAULT_AGE,
    }
}

// ==================== Draft ====================

/// Fields are only changed through `with_field`, `with_field_text` and `toggle`.
///
/// ```compile_fail
/// let mut draft = hymatch_core::profile::ProfileDraft::seed(None);
/// draft.age = 0;
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDraft {
    /// Id of the profile this draft was seeded from; kept across commits
    id: Option<ProfileId>,
    first_name: String,
    last_name: String,
    age: u32,
    gender: Gender,
    nationality: String,
    email: String,
    phone: String,
    japanese_level: JapaneseLevel,
    preferred_days: BTreeSet<String>,
    preferred_job_types: BTreeSet<String>,
    profile_picture: Option<String>,
    is_profile_complete: bool,
}

impl Default for ProfileDraft {
    fn default() -> Self {
        Self {
            id: None,
            first_name: String::new(),
            last_name: String::new(),
            age: DEFAULT_AGE,
            gender: Gender::default(),
            nationality: String::new(),
            email: String::new(),
            phone: String::new(),
            japanese_level: JapaneseLevel::default(),
            preferred_days: BTreeSet::new(),
            preferred_job_types: BTreeSet::new(),
            profile_picture: None,
            is_profile_complete: false,
        }
    }
}

impl ProfileDraft {
    /// Start a draft from the committed profile, or from defaults when there is none.
    pub fn seed(existing: Option<&Profile>) -> Self {
        let Some(profile) = existing else {
            return Self::default();
        };

        Self {
            id: Some(profile.id.clone()),
            first_name: profile.first_name.clone(),
            last_name: profile.last_name.clone(),
            age: if profile.age > 0 { profile.age } else { DEFAULT_AGE },
            gender: profile.gender,
            nationality: profile.nationality.clone(),
            email: profile.email.clone(),
            phone: profile.phone.clone(),
            japanese_level: profile.japanese_level,
            preferred_days: profile.preferred_days.clone(),
            preferred_job_types: profile.preferred_job_types.clone(),
            profile_picture: profile.profile_picture.clone(),
            is_profile_complete: profile.is_profile_complete,
        }
    }

    /// Id of the profile this draft edits, if it edits one.
    pub fn id(&self) -> Option<&ProfileId> {
        self.id.as_ref()
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn nationality(&self) -> &str {
        &self.nationality
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn japanese_level(&self) -> JapaneseLevel {
        self.japanese_level
    }

    pub fn preferred_days(&self) -> &BTreeSet<String> {
        &self.preferred_days
    }

    pub fn preferred_job_types(&self) -> &BTreeSet<String> {
        &self.preferred_job_types
    }

    pub fn profile_picture(&self) -> Option<&str> {
        self.profile_picture.as_deref()
    }

    /// Whether the profile this draft was seeded from had been completed.
    pub fn is_profile_complete(&self) -> bool {
        self.is_profile_complete
    }

    /// A copy of this draft with exactly one scalar field replaced.
    #[must_use]
    pub fn with_field(&self, update: FieldUpdate) -> Self {
        let mut next = self.clone();
        match update {
            FieldUpdate::FirstName(v) => next.first_name = v,
            FieldUpdate::LastName(v) => next.last_name = v,
            FieldUpdate::Age(raw) => next.age = parse_age(&raw),
            FieldUpdate::Gender(v) => next.gender = v,
            FieldUpdate::Nationality(v) => next.nationality = v,
            FieldUpdate::Email(v) => next.email = v,
            FieldUpdate::Phone(v) => next.phone = v,
            FieldUpdate::JapaneseLevel(v) => next.japanese_level = v,
            FieldUpdate::ProfilePicture(v) => next.profile_picture = v,
        }
        next
    }

    /// `with_field` for raw form text.
    #[must_use]
    pub fn with_field_text(&self, field: ProfileField, raw: &str) -> Self {
        self.with_field(FieldUpdate::from_text(field, raw))
    }

    /// A copy with `token` removed from `collection` if present, added otherwise.
    #[must_use]
    pub fn toggle(&self, collection: SetCollection, token: &str) -> Self {
        let mut next = self.clone();
        let set = next.collection_mut(collection);
        if !set.remove(token) {
            set.insert(token.to_string());
        }
        next
    }

    pub fn collection(&self, collection: SetCollection) -> &BTreeSet<String> {
        match collection {
            SetCollection::PreferredDays => &self.preferred_days,
            SetCollection::PreferredJobTypes => &self.preferred_job_types,
        }
    }

    fn collection_mut(&mut self, collection: SetCollection) -> &mut BTreeSet<String> {
        match collection {
            SetCollection::PreferredDays => &mut self.preferred_days,
            SetCollection::PreferredJobTypes => &mut self.preferred_job_types,
        }
    }

    /// Required fields that are currently empty, in form order.
    pub fn missing_required(&self) -> Vec<ProfileField> {
        REQUIRED_FIELDS
            .into_iter()
            .filter(|field| self.is_missing(*field))
            .collect()
    }

    /// Whether `field` is required and currently empty.
    pub fn is_missing(&self, field: ProfileField) -> bool {
        self.required_value(field).is_some_and(str::is_empty)
    }

    /// Value of a required text field; `None` for fields that are not required.
    fn required_value(&self, field: ProfileField) -> Option<&str> {
        match field {
            ProfileField::FirstName => Some(self.first_name.as_str()),
            ProfileField::LastName => Some(self.last_name.as_str()),
            ProfileField::Email => Some(self.email.as_str()),
            ProfileField::Phone => Some(self.phone.as_str()),
            ProfileField::Age
            | ProfileField::Gender
            | ProfileField::Nationality
            | ProfileField::JapaneseLevel
            | ProfileField::ProfilePicture => None,
        }
    }

    /// Validate and finalize the draft.
    ///
    /// Fails with every empty required field listed. On success the profile keeps
    /// the seeded id (or gets a fresh one) and is marked complete.
    pub fn commit(&self) -> Result<Profile, ValidationError> {
        let missing = self.missing_required();
        if !missing.is_empty() {
            debug!("Commit refused, {} required fields empty", missing.len());
            return Err(ValidationError { missing });
        }

        let id = match &self.id {
            Some(id) => id.clone(),
            None => ProfileId::generate(),
        };
        debug!("Committing profile {}", id);

        Ok(Profile {
            id,
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            age: self.age,
            gender: self.gender,
            nationality: self.nationality.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            japanese_level: self.japanese_level,
            preferred_days: self.preferred_days.clone(),
            preferred_job_types: self.preferred_job_types.clone(),
            profile_picture: self.profile_picture.clone(),
            is_profile_complete: true,
        })
    }
}
