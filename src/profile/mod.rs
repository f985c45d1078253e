//! Profile editing.
//!
//! - `model`: the committed `Profile` and its field value types
//! - `draft`: `ProfileDraft` mutations and commit-time validation
//! - `session`: one edit flow between seeding from a store and committing to it
//! - `error`: `ValidationError` and `UnknownField`

mod draft;
mod error;
mod model;
mod session;

pub use draft::{parse_age, FieldUpdate, ProfileDraft, ProfileField, SetCollection, REQUIRED_FIELDS};
pub use error::{UnknownField, ValidationError};
pub use model::{Gender, JapaneseLevel, Profile, ProfileId, DEFAULT_AGE, JOB_TYPES, WORK_DAYS};
pub use session::EditSession;
