pub mod client;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod ui;

pub use error::{AppError, Result};
