pub mod api;
pub mod favorites;
pub mod ui;
