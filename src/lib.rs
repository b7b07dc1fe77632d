pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::{HttpAliasClient, LocalStorage, TokioPacer};
pub use crate::config::PurgeConfig;
pub use crate::core::{matcher::matches, purger::Purger};
pub use crate::utils::error::{PurgeError, Result};
