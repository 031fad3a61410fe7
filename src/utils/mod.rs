//! Utility modules for web, DOM, and formatting operations.
//!
//! Provides:
//! - [`fetch_json`] - Network fetching with timeout
//! - [`RevealObserver`] - Owned `IntersectionObserver` subscription
//! - [`console`] - Console backend for the `log` facade

pub mod console;
pub mod dom;
mod fetch;
pub mod format;
mod observer;

pub use fetch::fetch_json;
pub use observer::RevealObserver;
