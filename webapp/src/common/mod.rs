pub mod document;
pub mod modal;
pub mod storage;
pub mod style;
pub mod toast;

// section anchors on the landing page, shared by the navbar and the sections
pub const DASHBOARD_ANCHOR: &str = "dashboard";
pub const BEERS_ANCHOR: &str = "our-beers";
pub const REVIEWS_ANCHOR: &str = "reviews";
pub const PLANS_ANCHOR: &str = "brewing-plans";
pub const CONTACT_ANCHOR: &str = "contact";
