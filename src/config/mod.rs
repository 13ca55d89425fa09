#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "lambda")]
pub mod lambda;
pub mod toml_config;

pub const DEFAULT_LOOKUP_PATH: &str = "/employees/check";
pub const DEFAULT_CREATE_PATH: &str = "/employees";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
