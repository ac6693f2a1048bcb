pub mod news;
pub mod profile;
pub mod report;
pub mod tanker;
pub mod user;
pub mod validation;
