//! Pure domain logic for the castdesk platform.
//!
//! This crate has no database, async, or I/O dependencies. It provides:
//!
//! - [`booking`] — the booking status lifecycle and its transition table.
//! - [`import`] — row validation, preview/selection bookkeeping, and
//!   error-report shaping for the spreadsheet onboarding import.
//! - [`types`] / [`error`] — shared primitives used by every other crate.

pub mod booking;
pub mod error;
pub mod import;
pub mod types;

pub use error::CoreError;
