pub mod drill;
pub mod serve;
pub mod setup;
pub mod summary;
pub mod ui;
