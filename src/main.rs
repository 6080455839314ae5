//! Portal Smoke CLI
//!
//! Runs one named scenario against the deployed portal and prints the
//! result record as a single JSON line.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use portal_smoke::browser::{BrowserConfig, CdpDriver};
use portal_smoke::input::RunInput;
use portal_smoke::runner::ScenarioRunner;
use portal_smoke::store::FsStore;

/// Headless end-to-end smoke-test runner for the course portal
#[derive(Parser, Debug)]
#[command(name = "portal-smoke")]
#[command(version)]
#[command(about = "Drives a headless browser through named smoke-test scenarios")]
struct Args {
    /// Path to a JSON input object (scenario, baseUrl, loginEmail, loginPassword)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Scenario name (overrides the input file)
    #[arg(short, long)]
    scenario: Option<String>,

    /// Base URL of the application under test (overrides the input file)
    #[arg(short, long)]
    base_url: Option<String>,

    /// Login email (overrides the input file)
    #[arg(long)]
    login_email: Option<String>,

    /// Login password (overrides the input file)
    #[arg(long)]
    login_password: Option<String>,

    /// Directory screenshots and the RESULT record are written into
    #[arg(short, long, default_value = "artifacts")]
    artifacts_dir: PathBuf,

    /// Run the browser in headless mode (pass `--headless false` for a
    /// headed browser)
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    headless: bool,

    /// Disable the Chromium sandbox (needed in some container environments)
    #[arg(long)]
    no_sandbox: bool,

    /// Path to Chrome/Chromium executable
    #[arg(long)]
    chrome_path: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn into_input(self) -> anyhow::Result<(RunInput, BrowserConfig, PathBuf)> {
        let mut input = match &self.input {
            Some(path) => RunInput::from_path(path)
                .with_context(|| format!("Failed to load input from {}", path.display()))?,
            None => RunInput::default(),
        };

        if let Some(scenario) = self.scenario {
            input.scenario = scenario;
        }
        if let Some(base_url) = self.base_url {
            input.base_url = base_url;
        }
        if self.login_email.is_some() {
            input.login_email = self.login_email;
        }
        if self.login_password.is_some() {
            input.login_password = self.login_password;
        }

        let mut builder = BrowserConfig::builder()
            .headless(self.headless)
            .sandbox(!self.no_sandbox);
        if let Some(path) = self.chrome_path {
            builder = builder.chrome_path(path);
        }

        Ok((input, builder.build(), self.artifacts_dir))
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let (input, browser_config, artifacts_dir) = args.into_input()?;

    tracing::info!(
        scenario = %input.scenario,
        base_url = %input.base_url,
        "Starting smoke run"
    );

    let store = FsStore::new(&artifacts_dir).with_context(|| {
        format!(
            "Failed to open artifact directory {}",
            artifacts_dir.display()
        )
    })?;
    let driver = CdpDriver::launch(browser_config)
        .await
        .context("Failed to launch browser")?;

    let result = ScenarioRunner::new(driver, store, input).run().await;

    // The record is the reporting surface; the exit code only reflects
    // whether the run itself could be carried out.
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
