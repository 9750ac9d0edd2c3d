//! Request handlers, one module per entity.

pub mod booking;
pub mod candidate;
pub mod casting;
pub mod import;
pub mod notification;
pub mod talent;
