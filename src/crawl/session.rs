//! Scoped browser session for one crawl unit
//!
//! A [`SearchSession`] owns the browser process, its CDP handler task, and
//! the per-session user data directory. The orchestrator calls
//! [`SearchSession::shutdown`] on every exit path; `Drop` is only a
//! best-effort fallback for paths that never reach it.
//!
//! Cleanup order matters: close the browser, wait for the process to exit,
//! remove the user data directory (Chrome holds file locks until exit),
//! THEN abort the handler so it never loses its CDP connection mid-close.

use anyhow::{Context, Result};
use chromiumoxide::browser::Browser;
use std::path::PathBuf;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::browser_setup::launch_browser;
use crate::config::HarvestConfig;
use crate::crawl::driver::CdpPage;

pub struct SearchSession {
    browser: Browser,
    handler: JoinHandle<()>,
    user_data_dir: Option<PathBuf>,
}

impl SearchSession {
    /// Launch a fresh browser for one unit.
    pub async fn launch(config: &HarvestConfig) -> Result<Self> {
        let (browser, handler, user_data_dir) = launch_browser(config)
            .await
            .context("browser session launch failed")?;
        Ok(Self {
            browser,
            handler,
            user_data_dir: Some(user_data_dir),
        })
    }

    /// Open a fresh results page in this session.
    pub async fn new_page(&self) -> Result<CdpPage> {
        let page = self
            .browser
            .new_page("about:blank")
            .await
            .context("failed to open a page in the browser session")?;
        Ok(CdpPage::new(page))
    }

    /// Tear the session down. Safe to call exactly once; every failure along
    /// the way is logged and swallowed so teardown never masks the unit's
    /// real outcome.
    pub async fn shutdown(mut self) {
        if let Err(e) = self.browser.close().await {
            warn!("Failed to close browser cleanly: {}", e);
        }
        if let Err(e) = self.browser.wait().await {
            warn!("Failed to wait for browser exit: {}", e);
        }
        self.cleanup_user_data_dir();
        self.handler.abort();
        debug!("Browser session torn down");
    }

    /// Remove the per-session user data directory. Must run after
    /// `browser.wait()`; Chrome keeps files locked until the process exits.
    fn cleanup_user_data_dir(&mut self) {
        if let Some(path) = self.user_data_dir.take() {
            if let Err(e) = std::fs::remove_dir_all(&path) {
                warn!(
                    "Failed to remove user data directory {}: {}. Manual cleanup may be required.",
                    path.display(),
                    e
                );
            }
        }
    }
}

impl Drop for SearchSession {
    fn drop(&mut self) {
        // Browser::drop kills the Chrome process; the handler must not
        // outlive it.
        self.handler.abort();
        if self.user_data_dir.is_some() {
            warn!("SearchSession dropped without explicit shutdown; removing user data dir");
            self.cleanup_user_data_dir();
        }
    }
}
