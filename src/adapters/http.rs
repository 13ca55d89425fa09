use crate::core::{
    ConfigProvider, CreateClient, CreateResponse, EmployeeRecord, LookupClient, LookupResponse,
    STATUS_OK,
};
use crate::utils::error::{CheckError, Result};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use std::collections::HashMap;
use std::time::Duration;

/// 以 reqwest 實作的員工 API 用戶端，同時負責查詢與建立兩個端點
#[derive(Debug, Clone)]
pub struct HttpEmployeeClient {
    client: Client,
    lookup_url: String,
    create_url: String,
    headers: HashMap<String, String>,
}

impl HttpEmployeeClient {
    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds()))
            .build()?;

        let base_url = config.base_url().trim_end_matches('/');

        Ok(Self {
            client,
            lookup_url: format!("{}{}", base_url, config.lookup_path()),
            create_url: format!("{}{}", base_url, config.create_path()),
            headers: config.headers().cloned().unwrap_or_default(),
        })
    }

    pub fn lookup_url(&self) -> &str {
        &self.lookup_url
    }

    pub fn create_url(&self) -> &str {
        &self.create_url
    }

    fn with_headers(&self, mut request: RequestBuilder) -> RequestBuilder {
        for (key, value) in &self.headers {
            request = request.header(key, value);
        }
        request
    }
}

#[async_trait]
impl LookupClient for HttpEmployeeClient {
    async fn lookup(&self, record: &EmployeeRecord) -> Result<LookupResponse> {
        tracing::debug!("📡 POST {}", self.lookup_url);

        let response = self
            .with_headers(self.client.post(&self.lookup_url))
            .json(record)
            .send()
            .await
            .map_err(|e| CheckError::LookupFailed {
                message: e.to_string(),
            })?;

        let status = response.status().as_u16();
        tracing::debug!("📡 Lookup response status: {}", status);

        // 只有 200 才可能帶回員工資料，解析失敗就當作沒有
        let body = if status == STATUS_OK {
            let bytes = response
                .bytes()
                .await
                .map_err(|e| CheckError::LookupFailed {
                    message: e.to_string(),
                })?;
            serde_json::from_slice::<EmployeeRecord>(&bytes).ok()
        } else {
            None
        };

        Ok(LookupResponse { status, body })
    }
}

#[async_trait]
impl CreateClient for HttpEmployeeClient {
    async fn create(&self, record: &EmployeeRecord) -> Result<CreateResponse> {
        tracing::debug!("📡 POST {}", self.create_url);

        let response = self
            .with_headers(self.client.post(&self.create_url))
            .json(record)
            .send()
            .await
            .map_err(|e| CheckError::CreateFailed {
                message: e.to_string(),
            })?;

        let status = response.status().as_u16();
        tracing::debug!("📡 Create response status: {}", status);

        Ok(CreateResponse { status })
    }
}
