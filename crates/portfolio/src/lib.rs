//! Research portfolio: compiled-in content, page composition, and HTML rendering.
//!
//! The HTTP surface lives in the `portfolio-site` service; everything that decides
//! what a page contains and how it reveals itself lives here so it can be tested
//! without a browser.

pub mod assets;
pub mod config;
pub mod content;
pub mod error;
pub mod filter;
pub mod page;
pub mod reveal;
pub mod telemetry;
pub mod widgets;
