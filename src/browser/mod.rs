//! Browser session plumbing
//!
//! Launching or attaching to Chrome and handing out one `ChromeDriver` per tab.

pub mod config;
pub mod session;

pub use config::{ConnectionOptions, LaunchOptions};
pub use session::BrowserSession;
