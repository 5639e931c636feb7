// Library entry point, shared by the binary and the integration tests
pub mod api;
pub mod config;
pub mod crypto;
pub mod db;
pub mod error;
pub mod validation;

pub use config::Config;
pub use db::Database;
pub use error::AppError;

pub struct AppState {
    pub db: Database,
}
