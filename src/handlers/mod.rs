pub mod projects;
pub mod race;
