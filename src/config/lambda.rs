use super::{DEFAULT_CREATE_PATH, DEFAULT_LOOKUP_PATH, DEFAULT_TIMEOUT_SECONDS};
use crate::core::ConfigProvider;
use crate::utils::error::{CheckError, Result};
use crate::utils::validation::*;
use std::env;

#[derive(Debug, Clone)]
pub struct LambdaConfig {
    pub base_url: String,
    pub lookup_path: String,
    pub create_path: String,
    pub timeout_seconds: u64,
}

impl LambdaConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            base_url: env::var("EMPLOYEE_API_URL").map_err(|_| CheckError::ConfigError {
                message: "EMPLOYEE_API_URL environment variable is required".to_string(),
            })?,
            lookup_path: env::var("EMPLOYEE_LOOKUP_PATH")
                .unwrap_or_else(|_| DEFAULT_LOOKUP_PATH.to_string()),
            create_path: env::var("EMPLOYEE_CREATE_PATH")
                .unwrap_or_else(|_| DEFAULT_CREATE_PATH.to_string()),
            timeout_seconds: match env::var("EMPLOYEE_API_TIMEOUT") {
                Ok(value) => parse_timeout(&value)?,
                Err(_) => DEFAULT_TIMEOUT_SECONDS,
            },
        })
    }

    /// 事件裡帶的 base_url 優先於環境變數
    pub fn with_base_url(mut self, base_url: Option<String>) -> Self {
        if let Some(url) = base_url {
            self.base_url = url;
        }
        self
    }
}

fn parse_timeout(value: &str) -> Result<u64> {
    value
        .trim()
        .parse()
        .map_err(|e| CheckError::InvalidConfigValueError {
            field: "EMPLOYEE_API_TIMEOUT".to_string(),
            value: value.to_string(),
            reason: format!("Expected whole seconds: {}", e),
        })
}

impl ConfigProvider for LambdaConfig {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn lookup_path(&self) -> &str {
        &self.lookup_path
    }

    fn create_path(&self) -> &str {
        &self.create_path
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }
}

impl Validate for LambdaConfig {
    fn validate(&self) -> Result<()> {
        validate_url("EMPLOYEE_API_URL", &self.base_url)?;
        validate_endpoint_path("EMPLOYEE_LOOKUP_PATH", &self.lookup_path)?;
        validate_endpoint_path("EMPLOYEE_CREATE_PATH", &self.create_path)?;
        validate_positive_number("EMPLOYEE_API_TIMEOUT", self.timeout_seconds, 1)?;
        Ok(())
    }
}
