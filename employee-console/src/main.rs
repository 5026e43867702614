use anyhow::Context;
use employee_client::EmployeeApi;
use employee_console::{Config, EmployeeComponent, StdinPrompt, console, logger, print_banner};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Environment (.env is optional)
    dotenv::dotenv().ok();
    let config = Config::from_env();
    logger::init_logger(&config.log_level, config.log_dir.as_deref());

    print_banner();
    tracing::info!(api_url = %config.api_url, "Employee console starting");

    // 2. Data access layer
    let service = EmployeeApi::from_config(&config.client_config())
        .context("Failed to build employee API client")?;

    // 3. Component + command loop
    let mut component = EmployeeComponent::new(service, StdinPrompt);
    component.initialize().await;
    console::run(&mut component)
        .await
        .context("Console input failed")?;

    tracing::info!("Employee console stopped");
    Ok(())
}
