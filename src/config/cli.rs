use super::{DEFAULT_CREATE_PATH, DEFAULT_LOOKUP_PATH, DEFAULT_TIMEOUT_SECONDS};
use crate::core::{ConfigProvider, EmployeeRecord};
use crate::utils::error::{CheckError, Result};
use crate::utils::validation::*;
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "employee-checker")]
#[command(about = "Check whether an employee exists and create it if absent")]
pub struct CliConfig {
    #[arg(long, help = "TOML config file; overrides the endpoint flags")]
    pub config: Option<String>,

    #[arg(long, env = "EMPLOYEE_API_URL")]
    pub base_url: Option<String>,

    #[arg(long, default_value = DEFAULT_LOOKUP_PATH)]
    pub lookup_path: String,

    #[arg(long, default_value = DEFAULT_CREATE_PATH)]
    pub create_path: String,

    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECONDS)]
    pub timeout_seconds: u64,

    #[arg(long, help = "JSON file containing the employee record")]
    pub record: Option<String>,

    #[arg(long)]
    pub first_name: Option<String>,

    #[arg(long)]
    pub last_name: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub gender: Option<bool>,

    #[arg(long)]
    pub mobile: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// 從 `--record` 檔案或個別欄位參數組出員工資料
    pub fn employee_record(&self) -> Result<EmployeeRecord> {
        if let Some(path) = &self.record {
            let content = std::fs::read_to_string(path)?;
            return Ok(serde_json::from_str(&content)?);
        }

        let mut builder = EmployeeRecord::builder();
        if let Some(first_name) = &self.first_name {
            builder = builder.first_name(first_name);
        }
        if let Some(last_name) = &self.last_name {
            builder = builder.last_name(last_name);
        }
        if let Some(email) = &self.email {
            builder = builder.email(email);
        }
        if let Some(gender) = self.gender {
            builder = builder.gender(gender);
        }
        if let Some(mobile) = &self.mobile {
            builder = builder.mobile(mobile);
        }
        builder.build()
    }
}

impl ConfigProvider for CliConfig {
    fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or_default()
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

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if self.config.is_some() {
            // 端點設定由 TOML 檔負責驗證
            return Ok(());
        }

        let base_url = validate_required_field("base_url", &self.base_url)?;
        validate_url("base_url", base_url)?;
        validate_endpoint_path("lookup_path", &self.lookup_path)?;
        validate_endpoint_path("create_path", &self.create_path)?;
        validate_positive_number("timeout_seconds", self.timeout_seconds, 1)?;

        if self.lookup_path == self.create_path {
            return Err(CheckError::ConfigValidationError {
                field: "create_path".to_string(),
                message: "Lookup and create paths must differ".to_string(),
            });
        }

        Ok(())
    }
}
