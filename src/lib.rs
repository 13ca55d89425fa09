pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

#[cfg(feature = "lambda")]
pub use config::lambda::LambdaConfig;

pub use adapters::http::HttpEmployeeClient;
pub use config::toml_config::TomlConfig;
pub use core::checker::EmployeeExistenceChecker;
pub use domain::model::{CheckResult, EmployeeRecord};
pub use utils::error::{CheckError, Result};
