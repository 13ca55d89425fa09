use clap::Parser;
use employee_checker::utils::{logger, validation::Validate};
use employee_checker::{
    CheckError, CheckResult, CliConfig, EmployeeExistenceChecker, HttpEmployeeClient, TomlConfig,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // TOML 檔要先載入，日誌等級可能來自檔案
    let toml_config = match config.config.as_deref().map(TomlConfig::from_file).transpose() {
        Ok(toml_config) => toml_config,
        Err(e) => {
            logger::init_cli_logger(config.verbose, None);
            exit_with(&e);
        }
    };

    logger::init_cli_logger(
        config.verbose,
        toml_config.as_ref().and_then(|c| c.log_level()),
    );

    tracing::info!("Starting employee-checker CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    match run(&config, toml_config.as_ref()).await {
        Ok(status) => {
            tracing::info!("✅ Employee check completed: {:?}", status);
            println!("{}", serde_json::json!({ "status": status }));
        }
        Err(e) => exit_with(&e),
    }

    Ok(())
}

async fn run(config: &CliConfig, toml_config: Option<&TomlConfig>) -> Result<CheckResult, CheckError> {
    config.validate()?;

    let client = match toml_config {
        Some(toml_config) => {
            toml_config.validate()?;
            HttpEmployeeClient::from_config(toml_config)?
        }
        None => HttpEmployeeClient::from_config(config)?,
    };
    tracing::debug!(
        "Lookup endpoint: {}, create endpoint: {}",
        client.lookup_url(),
        client.create_url()
    );

    let employee = config.employee_record()?;
    employee.validate()?;

    let checker = EmployeeExistenceChecker::new(client.clone(), client);
    checker.check_exist(&employee).await
}

fn exit_with(e: &CheckError) -> ! {
    tracing::error!(
        "❌ Employee check failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    std::process::exit(e.severity().exit_code());
}
