use crate::utils::error::{CheckError, Result};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};

pub const STATUS_OK: u16 = 200;
pub const STATUS_NOT_FOUND: u16 = 404;

/// 員工資料，每個請求建立一次，流程中只借用不修改
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRecord {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub gender: bool,
    pub mobile: String,
}

impl EmployeeRecord {
    pub fn builder() -> EmployeeRecordBuilder {
        EmployeeRecordBuilder::default()
    }
}

impl Validate for EmployeeRecord {
    fn validate(&self) -> Result<()> {
        let fields = [
            ("first_name", &self.first_name),
            ("last_name", &self.last_name),
            ("email", &self.email),
            ("mobile", &self.mobile),
        ];
        for (field, value) in fields {
            if value.trim().is_empty() {
                return Err(CheckError::InvalidRecordError {
                    field: field.to_string(),
                    reason: "Value cannot be empty or whitespace-only".to_string(),
                });
            }
        }
        Ok(())
    }
}

#[derive(Debug, Default, Clone)]
pub struct EmployeeRecordBuilder {
    first_name: Option<String>,
    last_name: Option<String>,
    email: Option<String>,
    gender: Option<bool>,
    mobile: Option<String>,
}

impl EmployeeRecordBuilder {
    pub fn first_name(mut self, value: impl Into<String>) -> Self {
        self.first_name = Some(value.into());
        self
    }

    pub fn last_name(mut self, value: impl Into<String>) -> Self {
        self.last_name = Some(value.into());
        self
    }

    pub fn email(mut self, value: impl Into<String>) -> Self {
        self.email = Some(value.into());
        self
    }

    pub fn gender(mut self, value: bool) -> Self {
        self.gender = Some(value);
        self
    }

    pub fn mobile(mut self, value: impl Into<String>) -> Self {
        self.mobile = Some(value.into());
        self
    }

    pub fn build(self) -> Result<EmployeeRecord> {
        Ok(EmployeeRecord {
            first_name: required("first_name", self.first_name)?,
            last_name: required("last_name", self.last_name)?,
            email: required("email", self.email)?,
            gender: required("gender", self.gender)?,
            mobile: required("mobile", self.mobile)?,
        })
    }
}

fn required<T>(field: &str, value: Option<T>) -> Result<T> {
    value.ok_or_else(|| CheckError::MissingFieldError {
        field: field.to_string(),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CheckResult {
    #[serde(rename = "ALREADY_EXIST")]
    AlreadyExists,
    Created,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupResponse {
    pub status: u16,
    /// 查詢端點回傳的員工資料（若有且可解析）
    pub body: Option<EmployeeRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreateResponse {
    pub status: u16,
}

impl CreateResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
