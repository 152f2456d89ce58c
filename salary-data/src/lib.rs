//! Loaders that read replacement policy tables from disk.
//!
//! A whole [`PolicyConfig`](salary_core::PolicyConfig) can come from a TOML
//! document, and a progressive bracket table can come from CSV, so a new tax
//! year only needs new data files.

mod bracket_loader;
mod policy_loader;

pub use bracket_loader::{TaxBracketLoader, TaxBracketLoaderError, TaxBracketRecord};
pub use policy_loader::{PolicyLoader, PolicyLoaderError};
