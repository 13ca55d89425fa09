use crate::core::{
    CheckResult, CreateClient, EmployeeRecord, LookupClient, STATUS_NOT_FOUND, STATUS_OK,
};
use crate::utils::error::{CheckError, Result};

/// 檢查員工是否存在，不存在就建立。
///
/// 每次呼叫最多兩個依序執行的外部請求：先查詢，只有查詢回 404 時才建立。
/// 查詢回傳 200/404 以外的狀態會直接回傳 [`CheckError::UnexpectedLookupStatus`]。
pub struct EmployeeExistenceChecker<L: LookupClient, C: CreateClient> {
    lookup: L,
    create: C,
}

impl<L: LookupClient, C: CreateClient> EmployeeExistenceChecker<L, C> {
    pub fn new(lookup: L, create: C) -> Self {
        Self { lookup, create }
    }

    pub async fn check_exist(&self, record: &EmployeeRecord) -> Result<CheckResult> {
        tracing::debug!("Looking up employee {}", record.email);
        let response = self.lookup.lookup(record).await.inspect_err(|e| {
            tracing::error!("❌ Lookup for {} failed: {}", record.email, e);
        })?;
        tracing::debug!("Lookup response status: {}", response.status);

        match response.status {
            STATUS_OK => {
                tracing::info!("✅ Employee {} already exists", record.email);
                Ok(CheckResult::AlreadyExists)
            }
            STATUS_NOT_FOUND => {
                tracing::info!("Employee {} not found, creating", record.email);
                self.create_employee(record).await?;
                tracing::info!("✅ Employee {} created", record.email);
                Ok(CheckResult::Created)
            }
            status => {
                tracing::error!(
                    "❌ Lookup for {} returned unsupported status {}",
                    record.email,
                    status
                );
                Err(CheckError::UnexpectedLookupStatus { status })
            }
        }
    }

    async fn create_employee(&self, record: &EmployeeRecord) -> Result<()> {
        let response = self.create.create(record).await.inspect_err(|e| {
            tracing::error!("❌ Create for {} failed: {}", record.email, e);
        })?;
        tracing::debug!("Create response status: {}", response.status);

        if !response.is_success() {
            tracing::error!(
                "❌ Create for {} returned status {}",
                record.email,
                response.status
            );
            return Err(CheckError::CreateFailed {
                message: format!("create endpoint returned status {}", response.status),
            });
        }

        Ok(())
    }
}
