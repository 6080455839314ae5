//! Portal Smoke - End-to-End Smoke-Test Runner
//!
//! This crate drives a headless Chromium browser through a small, closed
//! set of named scenarios against the course portal, captures checkpoint
//! screenshots, and reports a pass/fail/error verdict plus diagnostic
//! artifacts.
//!
//! # Architecture
//!
//! ```text
//! Host input ──▶ Scenario Runner ──▶ PageDriver (CDP)
//!                     │                   │
//!                     ▼                   ▼
//!               ┌──────────┐       ┌────────────┐
//!               │ Capture  │       │  Browser   │
//!               └────┬─────┘       └────────────┘
//!                    │
//!                    ▼
//!            ArtifactStore: <label>.png + RESULT record
//! ```
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use portal_smoke::browser::{BrowserConfig, CdpDriver};
//! use portal_smoke::input::RunInput;
//! use portal_smoke::runner::ScenarioRunner;
//! use portal_smoke::store::FsStore;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let driver = CdpDriver::launch(BrowserConfig::default()).await?;
//!     let store = FsStore::new("./artifacts")?;
//!
//!     let result = ScenarioRunner::new(driver, store, RunInput::default())
//!         .run()
//!         .await;
//!
//!     println!("{}", serde_json::to_string(&result)?);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod browser;
pub mod capture;
pub mod error;
pub mod input;
pub mod result;
pub mod runner;
pub mod scenario;
pub mod store;

// Re-exports for convenience
pub use browser::{BrowserConfig, BrowserController, CdpDriver, PageDriver};
pub use error::{Error, Result};
pub use input::RunInput;
pub use result::{RunResult, RunStatus, ScreenshotRecord, RESULT_KEY};
pub use runner::ScenarioRunner;
pub use scenario::Scenario;
pub use store::{ArtifactStore, FsStore, MemoryStore};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
