pub mod articles;
mod capability;
pub mod categories;
pub mod interactions;
pub mod tags;

pub(crate) use capability::ensure_capability;
