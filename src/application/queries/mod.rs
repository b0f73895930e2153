pub mod articles;
pub mod categories;
pub mod interactions;
pub mod tags;
