//! Terminal front end for the chain wholesale catalog.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
pub mod types;
