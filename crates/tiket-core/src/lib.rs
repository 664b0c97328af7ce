pub mod config;
pub mod customer;
pub mod error;
pub mod listing;
pub mod report;
pub mod session;
pub mod ticket;
pub mod user;

// Re-export common error type
pub use error::TiketError;
