//! Infrastructure layer: local paths, persisted session storage, and API
//! endpoint configuration.

pub mod config;
pub mod paths;
pub mod session_store;
pub mod storage;

pub use config::ApiConfig;
pub use paths::CimPaths;
pub use session_store::SessionStore;
