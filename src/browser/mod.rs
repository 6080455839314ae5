//! Browser automation module
//!
//! High-level browser control through ChromiumOxide: lifecycle management
//! plus the [`PageDriver`] seam the scenario runner operates against.

pub mod controller;
pub mod driver;

pub use controller::{BrowserConfig, BrowserController, PageHandle};
pub use driver::{CdpDriver, PageDriver, DEFAULT_TIMEOUT_MS};
