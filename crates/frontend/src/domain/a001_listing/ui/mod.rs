pub mod card;
pub mod filters;
pub mod list;
