use crate::domain::model::{CreateResponse, EmployeeRecord, LookupResponse};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn lookup_path(&self) -> &str;
    fn create_path(&self) -> &str;
    fn timeout_seconds(&self) -> u64;
    fn headers(&self) -> Option<&HashMap<String, String>> {
        None
    }
}

/// 查詢員工是否存在。非 2xx 狀態不算錯誤，交給呼叫端判斷
#[async_trait]
pub trait LookupClient: Send + Sync {
    async fn lookup(&self, record: &EmployeeRecord) -> Result<LookupResponse>;
}

#[async_trait]
pub trait CreateClient: Send + Sync {
    async fn create(&self, record: &EmployeeRecord) -> Result<CreateResponse>;
}
