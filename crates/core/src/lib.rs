//! Domain logic for the Waterline citizen water-issue reporting platform.
//!
//! Everything in this crate is pure: the report status state machine, the
//! priority & escalation engine, the public-map visibility filter, the
//! submission cooldown guard, folio generation, and the field-level edit
//! permission table. Persistence and HTTP concerns live in `waterline-db`
//! and `waterline-api`.

pub mod error;
pub mod folio;
pub mod listing;
pub mod permissions;
pub mod report;
pub mod roles;
pub mod submission;
pub mod types;
pub mod visibility;
