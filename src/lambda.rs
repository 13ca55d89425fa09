use employee_checker::config::lambda::LambdaConfig;
use employee_checker::utils::{logger, validation::Validate};
use employee_checker::{CheckResult, EmployeeExistenceChecker, EmployeeRecord, HttpEmployeeClient};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct Request {
    pub employee: EmployeeRecord,
    pub base_url: Option<String>,
}

#[derive(Serialize)]
pub struct Response {
    pub status: CheckResult,
    pub message: String,
}

async fn function_handler(event: LambdaEvent<Request>) -> Result<Response, Error> {
    let Request { employee, base_url } = event.payload;
    tracing::info!("Checking employee {}", employee.email);

    let config = LambdaConfig::from_env()
        .map(|c| c.with_base_url(base_url))
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;
    config
        .validate()
        .and_then(|_| employee.validate())
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;

    let client = HttpEmployeeClient::from_config(&config)
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;
    let checker = EmployeeExistenceChecker::new(client.clone(), client);

    let status = checker.check_exist(&employee).await.map_err(|e| {
        tracing::error!(
            "❌ Employee check failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        Box::new(e) as Box<dyn std::error::Error + Send + Sync>
    })?;

    let message = match status {
        CheckResult::AlreadyExists => "Employee already exists",
        CheckResult::Created => "Employee created",
    };

    Ok(Response {
        status,
        message: message.to_string(),
    })
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    let level = std::env::var("LOG_LEVEL").ok();
    logger::init_lambda_logger(level.as_deref());

    run(service_fn(function_handler)).await
}
