use crate::{browser::config::{ConnectionOptions, LaunchOptions},
            driver::ChromeDriver,
            error::{BrowserError, Result},
            finder::ElementFinder};
use headless_chrome::{Browser, Tab};
use std::{sync::Arc, time::Duration};

/// Browser session that manages a Chrome/Chromium instance
pub struct BrowserSession {
    /// The underlying headless_chrome Browser instance
    browser: Browser,

    /// Finder shared by every driver handed out by this session
    element_finder: ElementFinder,
}

impl BrowserSession {
    /// Launch a new browser instance with the given options
    pub fn launch(options: LaunchOptions) -> Result<Self> {
        let headless = options.headless;
        let browser =
            Browser::new(chrome_launch_options(options)).map_err(|e| BrowserError::LaunchFailed(e.to_string()))?;

        browser.new_tab().map_err(|e| BrowserError::LaunchFailed(format!("Failed to create tab: {}", e)))?;

        log::debug!("Launched browser (headless={})", headless);

        Ok(Self { browser, element_finder: ElementFinder::new() })
    }

    /// Connect to an existing browser instance via WebSocket
    pub fn connect(options: ConnectionOptions) -> Result<Self> {
        let browser = Browser::connect_with_timeout(options.ws_url, Duration::from_millis(options.idle_timeout))
            .map_err(|e| BrowserError::ConnectionFailed(e.to_string()))?;

        Ok(Self { browser, element_finder: ElementFinder::new() })
    }

    /// Launch a browser with default options
    pub fn new() -> Result<Self> {
        Self::launch(LaunchOptions::default())
    }

    /// Builder method: replace the element finder (e.g. to use a custom locator vocabulary)
    pub fn with_element_finder(mut self, element_finder: ElementFinder) -> Self {
        self.element_finder = element_finder;
        self
    }

    /// Get the element finder
    pub fn element_finder(&self) -> &ElementFinder {
        &self.element_finder
    }

    /// Driver for the active tab
    pub fn driver(&self) -> Result<ChromeDriver> {
        Ok(ChromeDriver::new(self.get_active_tab()?))
    }

    /// One driver per open tab
    pub fn drivers(&self) -> Result<Vec<ChromeDriver>> {
        Ok(self.get_tabs()?.into_iter().map(ChromeDriver::new).collect())
    }

    /// Get the active tab
    pub fn tab(&self) -> Result<Arc<Tab>> {
        self.get_active_tab()
    }

    /// Create a new tab
    pub fn new_tab(&mut self) -> Result<Arc<Tab>> {
        let tab = self
            .browser
            .new_tab()
            .map_err(|e| BrowserError::TabOperationFailed(format!("Failed to create tab: {}", e)))?;
        Ok(tab)
    }

    /// Get all tabs
    pub fn get_tabs(&self) -> Result<Vec<Arc<Tab>>> {
        let tabs = self
            .browser
            .get_tabs()
            .lock()
            .map_err(|e| BrowserError::TabOperationFailed(format!("Failed to get tabs: {}", e)))?
            .clone();

        Ok(tabs)
    }

    /// Get the currently active tab by checking the document visibility and focus state
    pub fn get_active_tab(&self) -> Result<Arc<Tab>> {
        let tabs = self.get_tabs()?;

        // Visible and focused is the strongest signal, visible alone is the fallback
        for check in ["document.visibilityState === 'visible' && document.hasFocus()", "document.visibilityState === 'visible'"] {
            for tab in &tabs {
                match tab.evaluate(check, false) {
                    Ok(remote_object) => {
                        if remote_object.value.and_then(|v| v.as_bool()).unwrap_or(false) {
                            return Ok(tab.clone());
                        }
                    }
                    Err(e) => {
                        log::debug!("Failed to check tab status: {}", e);
                        continue;
                    }
                }
            }
        }

        Err(BrowserError::TabOperationFailed("No active tab found".to_string()))
    }

    /// Get the underlying Browser instance
    pub fn browser(&self) -> &Browser {
        &self.browser
    }

    /// Navigate to a URL using the active tab
    pub fn navigate(&self, url: &str) -> Result<()> {
        self.tab()?
            .navigate_to(url)
            .map_err(|e| BrowserError::NavigationFailed(format!("Failed to navigate to {}: {}", url, e)))?;

        Ok(())
    }

    /// Wait for navigation to complete
    pub fn wait_for_navigation(&self) -> Result<()> {
        self.tab()?
            .wait_until_navigated()
            .map_err(|e| BrowserError::NavigationFailed(format!("Navigation timeout: {}", e)))?;

        Ok(())
    }

    /// Close the browser
    pub fn close(&self) -> Result<()> {
        // headless_chrome has no explicit close; closing every tab shuts the browser down
        let tabs = self.get_tabs()?;
        for tab in tabs {
            let _ = tab.close(false);
        }
        Ok(())
    }
}

/// Chrome is started with its stock arguments; only the options below are overridden
fn chrome_launch_options(options: LaunchOptions) -> headless_chrome::LaunchOptions<'static> {
    let mut launch_opts = headless_chrome::LaunchOptions::default();

    // Keep the browser alive across long pauses between queries (default is 30 seconds)
    launch_opts.idle_browser_timeout = Duration::from_secs(60 * 60);

    launch_opts.headless = options.headless;
    launch_opts.window_size = Some((options.window_width, options.window_height));
    launch_opts.path = options.chrome_path;
    launch_opts.user_data_dir = options.user_data_dir;
    launch_opts.sandbox = options.sandbox;
    launch_opts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_launch_options_builder() {
        let opts = LaunchOptions::new().headless(true).window_size(800, 600);

        assert!(opts.headless);
        assert_eq!(opts.window_width, 800);
        assert_eq!(opts.window_height, 600);
    }

    #[test]
    fn test_chrome_launch_options_keep_stock_arguments() {
        let opts = chrome_launch_options(LaunchOptions::new().headless(false).window_size(1024, 768).sandbox(false));

        assert!(opts.args.is_empty());
        assert!(opts.ignore_default_args.is_empty());
        assert!(!opts.headless);
        assert!(!opts.sandbox);
        assert_eq!(opts.window_size, Some((1024, 768)));
        assert_eq!(opts.idle_browser_timeout, Duration::from_secs(3600));
    }

    #[test]
    fn test_connection_options() {
        let opts = ConnectionOptions::new("ws://localhost:9222").idle_timeout(5000);

        assert_eq!(opts.ws_url, "ws://localhost:9222");
        assert_eq!(opts.idle_timeout, 5000);
    }

    // Integration tests (require Chrome to be installed)
    #[test]
    #[ignore] // Ignore by default, run with: cargo test -- --ignored
    fn test_launch_browser() {
        let result = BrowserSession::launch(LaunchOptions::new().headless(true));
        assert!(result.is_ok());
    }

    #[test]
    #[ignore]
    fn test_driver_for_active_tab() {
        let session = BrowserSession::launch(LaunchOptions::new().headless(true)).expect("Failed to launch browser");

        session.navigate("about:blank").expect("Failed to navigate");
        assert!(session.driver().is_ok());
    }

    #[test]
    #[ignore]
    fn test_drivers_per_tab() {
        let mut session =
            BrowserSession::launch(LaunchOptions::new().headless(true)).expect("Failed to launch browser");

        session.new_tab().expect("Failed to create tab");

        let drivers = session.drivers().expect("Failed to get drivers");
        assert!(drivers.len() >= 2);
    }
}
