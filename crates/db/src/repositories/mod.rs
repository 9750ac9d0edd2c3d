//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod booking_repo;
pub mod candidate_repo;
pub mod casting_repo;
pub mod import_report_repo;
pub mod notification_repo;
pub mod talent_repo;

pub use booking_repo::BookingRepo;
pub use candidate_repo::CandidateRepo;
pub use casting_repo::CastingRepo;
pub use import_report_repo::ImportReportRepo;
pub use notification_repo::NotificationRepo;
pub use talent_repo::TalentRepo;
