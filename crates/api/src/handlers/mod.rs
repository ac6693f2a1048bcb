pub mod auth;
pub mod news;
pub mod profile;
pub mod reports;
pub mod tankers;
pub mod wells;
