pub mod carousel;
pub mod content;
pub mod gallery;
pub mod i18n;
pub mod lifecycle;
pub mod modal;
pub mod routes;
pub mod state;

pub use i18n::{Bilingual, Lang};
pub use state::SiteState;
