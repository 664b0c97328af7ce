pub mod auth;
pub mod customers;
pub mod profile;
pub mod report;
pub mod tickets;
pub mod users;
