//! Database models: one module per table, holding the `FromRow` row
//! struct and its create/update DTOs.

pub mod booking;
pub mod candidate;
pub mod casting;
pub mod import_report;
pub mod notification;
pub mod talent;
