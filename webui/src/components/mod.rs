pub mod charts;
pub mod footer;
pub mod founder_modal;
pub mod hero_carousel;
pub mod main_top_nav;
pub mod volunteer_modal;
