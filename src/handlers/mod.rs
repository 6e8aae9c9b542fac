pub mod cache;
pub mod location;
pub mod users;
pub mod weather;
