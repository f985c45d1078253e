//! Core state for the HyMatch job-seeker app.
//!
//! - `profile`: the in-progress profile draft, its mutations and commit-time validation
//! - `i18n`: locale-keyed text resolution with key-literal fallback
//! - `store`: the boundary to whatever holds the committed profile
//! - `config`: environment-driven startup settings

pub mod config;
pub mod i18n;
pub mod profile;
pub mod store;
