pub mod matcher;
pub mod purger;

pub use crate::domain::model::{Alias, AliasPage, DeletionResult, RunSummary, Termination};
pub use crate::domain::ports::{AliasService, Pacer, Storage};
pub use crate::utils::error::Result;
