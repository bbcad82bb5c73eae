pub mod cli;
pub mod config;
pub mod consent;
pub mod environment;
pub mod error;
pub mod fetch;
pub mod generator;
pub mod publish;

pub use crate::config::Config;
pub use environment::Environment;
pub use error::DataGenError;
