pub mod adapters;
pub mod config;
pub mod dashboard;
pub mod directory;
pub mod error;
pub mod seed;
pub mod session;
pub mod state;
pub mod telemetry;
pub mod wizard;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;
