pub mod feedback_list;
pub mod hero;
pub mod modal;
pub mod navigation;
pub mod product_card;
