//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod news_repo;
pub mod profile_repo;
pub mod report_repo;
pub mod tanker_repo;
pub mod user_repo;
pub mod validation_repo;

pub use news_repo::{NewsRepo, WellRepo};
pub use profile_repo::ProfileRepo;
pub use report_repo::ReportRepo;
pub use tanker_repo::TankerRepo;
pub use user_repo::UserRepo;
pub use validation_repo::ValidationRepo;
