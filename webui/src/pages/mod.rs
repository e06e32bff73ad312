pub mod analytics;
pub mod gallery;
pub mod home;
pub mod not_found;
