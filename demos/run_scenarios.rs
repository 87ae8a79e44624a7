/******************************************************************************
    Author: Joaquín Béjar García
    Email: jb@taunais.com
    Date: 16/5/25
 ******************************************************************************/
use std::process::ExitCode;
use std::sync::Arc;
use vk_client::config::Config;
use vk_client::harness::context::VkHarness;
use vk_client::harness::runner::run_all;
use vk_client::utils::logger::setup_logger;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize the logger
    setup_logger();

    // Credentials and endpoints come from the environment
    let config = Arc::new(Config::new());

    // Resolution failures are logged by the resolver
    let harness = match VkHarness::from_config(config).await {
        Ok(harness) => harness,
        Err(_) => return ExitCode::FAILURE,
    };

    let reports = run_all(&harness).await;
    for report in &reports {
        println!("{}", report);
    }

    if reports.iter().all(|report| report.passed()) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
