pub mod config;
pub mod dashscope;
pub mod error;
pub mod history;
pub mod logger;
pub mod models;
pub mod server;

pub use config::{Config, DashScopeConfig};
pub use dashscope::{DashScopeClient, ImageClient};
pub use error::{QigenError, Result};
pub use history::{HistoryManager, HistoryStore};
pub use models::*;
