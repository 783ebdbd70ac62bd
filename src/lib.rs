pub mod boundary;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod locator;
pub mod logging;
pub mod platform;
pub mod ui;
pub mod validation;
pub mod version;

pub use error::{BumpVersionError, Result};
