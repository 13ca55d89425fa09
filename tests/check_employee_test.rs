use anyhow::Result;
use employee_checker::{
    CheckError, CheckResult, EmployeeExistenceChecker, EmployeeRecord, HttpEmployeeClient,
    TomlConfig,
};
use httpmock::prelude::*;

const DUMMY_VALUE: &str = "DUMMY_VALUE";

fn dummy_employee() -> EmployeeRecord {
    EmployeeRecord::builder()
        .first_name(DUMMY_VALUE)
        .last_name(DUMMY_VALUE)
        .email(DUMMY_VALUE)
        .gender(true)
        .mobile(DUMMY_VALUE)
        .build()
        .unwrap()
}

fn dummy_employee_json() -> serde_json::Value {
    serde_json::json!({
        "firstName": DUMMY_VALUE,
        "lastName": DUMMY_VALUE,
        "email": DUMMY_VALUE,
        "gender": true,
        "mobile": DUMMY_VALUE
    })
}

fn checker_for(
    server: &MockServer,
) -> Result<EmployeeExistenceChecker<HttpEmployeeClient, HttpEmployeeClient>> {
    let config = TomlConfig::from_toml_str(&format!(
        r#"
[service]
name = "employee-checker-test"

[api]
base_url = "{}"
lookup_path = "/employees/check"
create_path = "/employees"
timeout_seconds = 5
"#,
        server.base_url()
    ))?;
    let client = HttpEmployeeClient::from_config(&config)?;
    Ok(EmployeeExistenceChecker::new(client.clone(), client))
}

#[tokio::test]
async fn test_employee_not_found_should_return_created() -> Result<()> {
    let server = MockServer::start();

    let lookup_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/employees/check")
            .json_body(dummy_employee_json());
        then.status(404);
    });

    let create_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/employees")
            .json_body(dummy_employee_json());
        then.status(201)
            .header("Content-Type", "application/json")
            .json_body(dummy_employee_json());
    });

    let checker = checker_for(&server)?;
    let result = checker.check_exist(&dummy_employee()).await?;

    lookup_mock.assert();
    create_mock.assert_hits(1);
    assert_eq!(result, CheckResult::Created);
    Ok(())
}

#[tokio::test]
async fn test_employee_exist_should_return_exist() -> Result<()> {
    let server = MockServer::start();

    let lookup_mock = server.mock(|when, then| {
        when.method(POST).path("/employees/check");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(dummy_employee_json());
    });

    let create_mock = server.mock(|when, then| {
        when.method(POST).path("/employees");
        then.status(201);
    });

    let checker = checker_for(&server)?;
    let result = checker.check_exist(&dummy_employee()).await?;

    lookup_mock.assert();
    create_mock.assert_hits(0);
    assert_eq!(result, CheckResult::AlreadyExists);
    Ok(())
}

#[tokio::test]
async fn test_server_error_on_lookup_is_not_treated_as_missing() -> Result<()> {
    let server = MockServer::start();

    let lookup_mock = server.mock(|when, then| {
        when.method(POST).path("/employees/check");
        then.status(500);
    });

    let create_mock = server.mock(|when, then| {
        when.method(POST).path("/employees");
        then.status(201);
    });

    let checker = checker_for(&server)?;
    let err = checker.check_exist(&dummy_employee()).await.unwrap_err();

    lookup_mock.assert();
    create_mock.assert_hits(0);
    assert!(matches!(
        err,
        CheckError::UnexpectedLookupStatus { status: 500 }
    ));
    Ok(())
}

#[tokio::test]
async fn test_rejected_create_is_create_failed() -> Result<()> {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(POST).path("/employees/check");
        then.status(404);
    });

    let create_mock = server.mock(|when, then| {
        when.method(POST).path("/employees");
        then.status(409);
    });

    let checker = checker_for(&server)?;
    let err = checker.check_exist(&dummy_employee()).await.unwrap_err();

    create_mock.assert();
    match err {
        CheckError::CreateFailed { message } => assert!(message.contains("409")),
        other => panic!("expected CreateFailed, got {:?}", other),
    }
    Ok(())
}

#[tokio::test]
async fn test_headers_from_toml_reach_both_endpoints() -> Result<()> {
    std::env::set_var("CHECK_EMPLOYEE_TEST_TOKEN", "integration-token");

    let server = MockServer::start();

    let lookup_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/hr/lookup")
            .header("x-api-key", "integration-token");
        then.status(404);
    });

    let create_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/hr/create")
            .header("x-api-key", "integration-token");
        then.status(201);
    });

    let config = TomlConfig::from_toml_str(&format!(
        r#"
[api]
base_url = "{}"
lookup_path = "/hr/lookup"
create_path = "/hr/create"

[api.headers]
X-Api-Key = "${{CHECK_EMPLOYEE_TEST_TOKEN}}"
"#,
        server.base_url()
    ))?;
    let client = HttpEmployeeClient::from_config(&config)?;
    let checker = EmployeeExistenceChecker::new(client.clone(), client);

    let result = checker.check_exist(&dummy_employee()).await?;

    lookup_mock.assert();
    create_mock.assert();
    assert_eq!(result, CheckResult::Created);

    std::env::remove_var("CHECK_EMPLOYEE_TEST_TOKEN");
    Ok(())
}
