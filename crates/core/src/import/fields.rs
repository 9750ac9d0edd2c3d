//! Canonical column names of the onboarding spreadsheet.
//!
//! The header row of an uploaded sheet is matched against these names
//! verbatim; unknown columns are carried through untouched and ignored by
//! validation.

pub const COL_FULL_NAME: &str = "full_name";
pub const COL_FIRST_NAME: &str = "first_name";
pub const COL_LAST_NAME: &str = "last_name";
pub const COL_EMAIL: &str = "email";
pub const COL_PUBLIC_EMAIL: &str = "public_email";
pub const COL_PHONE: &str = "phone";
pub const COL_USERNAME: &str = "username";
pub const COL_PROFILE_URL: &str = "profile_url";
pub const COL_FOLLOWERS: &str = "followers";
pub const COL_FOLLOWING: &str = "following";
pub const COL_REMARKS: &str = "remarks";
pub const COL_SOURCE: &str = "source";
