pub mod cache;
pub mod error;
pub mod page;
pub mod project;
pub mod race;
pub mod season;
