/// Routed pages for the Atlas web interface

pub mod analytics;
pub mod auth;
pub mod dashboard;
pub mod home;
pub mod not_found;
pub mod profile;
pub mod reports;
pub mod settings;
pub mod users;
