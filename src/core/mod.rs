pub mod checker;

pub use crate::domain::model::{
    CheckResult, CreateResponse, EmployeeRecord, LookupResponse, STATUS_NOT_FOUND, STATUS_OK,
};
pub use crate::domain::ports::{ConfigProvider, CreateClient, LookupClient};
pub use crate::utils::error::Result;
