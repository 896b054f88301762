pub mod aircraft;
pub mod airport;
pub mod error;
pub mod flight;
pub mod passenger;
pub mod store;
pub mod time;
