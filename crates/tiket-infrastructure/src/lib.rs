//! File-backed infrastructure: session persistence, configuration, paths.

pub mod config_service;
pub mod paths;
pub mod session_store;

pub use config_service::ConfigService;
pub use paths::TiketPaths;
pub use session_store::FileSessionStore;
