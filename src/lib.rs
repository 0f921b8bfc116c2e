pub mod api;
pub mod config;
pub mod error;
pub mod network;
pub mod price;
pub mod site;
pub mod ticker;
pub mod upstream;
pub mod utils;

// Re-export common modules
pub use api::router;
pub use config::Config;
pub use error::{AppError, FetchError};
