//! Support for configuration options
//!
//! The remote endpoint is fixed at build time. There is no configuration file and no environment variable.

use std::sync::{Arc, Mutex};
use once_cell::sync::Lazy;

/// Base URL of the remote REST service
pub const BASE_URL: &str = "https://fsa-crud-2aa9294fe819.herokuapp.com/api";

/// Path segment that identifies the deployment context (a cohort) on the remote service
pub const COHORT_PATH: &str = "/2504-FTB-ET-WEB-PT";

const DEFAULT_APP_TITLE: &str = "Party Planner Admin";

/// Title displayed at the top of the rendered page.
/// Feel free to override it when initing this library.
pub static APP_TITLE: Lazy<Arc<Mutex<String>>> = Lazy::new(|| Arc::new(Mutex::new(DEFAULT_APP_TITLE.to_string())));

/// Returns the current page title
pub fn app_title() -> String {
    match APP_TITLE.lock() {
        Ok(title) => title.clone(),
        Err(_) => {
            log::warn!("Page title lock is poisoned, using the default title");
            DEFAULT_APP_TITLE.to_string()
        },
    }
}
