pub mod config;
pub mod core;
pub mod errors;
pub mod handlers;
pub mod routes;
pub mod runtime;
pub mod state;

// Re-export commonly used items for convenience
pub use config::ServerConfig;
pub use errors::{AppError, AppResult};
pub use state::AppState;
