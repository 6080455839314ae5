//! Checkpoint screenshot capture
//!
//! A diagnostic screenshot must never cause a test run to abort or mask the
//! real pass/fail signal, so every failure here is logged with its label
//! and swallowed. A failed capture leaves no record and does not alter the
//! run status.

use tracing::warn;

use crate::browser::PageDriver;
use crate::error::Result;
use crate::result::RunResult;
use crate::store::ArtifactStore;

/// Capture a full-page screenshot under `label`, persist it as
/// `"<label>.png"`, and append the record to `result` on success.
///
/// Never propagates failure to the caller.
pub async fn capture<D, S>(driver: &D, store: &S, label: &str, result: &mut RunResult)
where
    D: PageDriver + ?Sized,
    S: ArtifactStore + ?Sized,
{
    match try_capture(driver, store, label).await {
        Ok(key) => result.push_screenshot(label.to_string(), key),
        Err(e) => warn!(label, error = %e, "Screenshot failed"),
    }
}

async fn try_capture<D, S>(driver: &D, store: &S, label: &str) -> Result<String>
where
    D: PageDriver + ?Sized,
    S: ArtifactStore + ?Sized,
{
    let png = driver.screenshot().await?;
    let key = format!("{label}.png");
    store.put_bytes(&key, &png, "image/png").await?;
    Ok(key)
}
