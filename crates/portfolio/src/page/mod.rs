//! Routing, section planning, and HTML composition for the two pages.

pub mod composer;
pub mod render;
pub mod route;
pub mod section;

use chrono::{Datelike, Local};

pub use composer::{ComposedPage, PageComposer, PageKind, RenderedSection};
pub use route::Route;
pub use section::{Loading, RevealPolicy, SectionKind, SectionPlan};

use crate::config::SiteConfig;
use crate::filter::FilterError;
use crate::reveal::{ObserverMode, RevealOptions};

#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("cannot mount into root element '{root_id}': {reason}")]
    Mount {
        root_id: String,
        reason: &'static str,
    },
    #[error("failed to render the {section} section")]
    Render { section: &'static str },
    #[error("unknown section '{0}'")]
    UnknownSection(String),
    #[error("the {section} section has no category filter")]
    NotFilterable { section: &'static str },
    #[error(transparent)]
    Filter(#[from] FilterError),
}

impl PageError {
    /// Failures that leave nothing usable on screen.
    pub fn is_mount_failure(&self) -> bool {
        matches!(self, Self::Mount { .. } | Self::Render { .. })
    }
}

/// Per-request inputs to composition.
#[derive(Debug, Clone)]
pub struct ComposeContext {
    pub site: SiteConfig,
    pub reveal: RevealOptions,
    pub observer_mode: ObserverMode,
    /// Copyright year shown in the footer.
    pub year: i32,
}

impl ComposeContext {
    pub fn new(site: &SiteConfig) -> Self {
        Self {
            reveal: RevealOptions {
                root_margin: site.reveal_margin.clone(),
                stagger_ms: site.reveal_stagger_ms,
                ..RevealOptions::default()
            },
            site: site.clone(),
            observer_mode: ObserverMode::Available,
            year: Local::now().year(),
        }
    }

    pub fn with_observer_mode(mut self, mode: ObserverMode) -> Self {
        self.observer_mode = mode;
        self
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }
}

/// Root ids must be usable as a bare HTML id: a letter followed by
/// letters, digits, `-` or `_`.
pub(crate) fn validate_root_id(root_id: &str) -> Result<(), PageError> {
    let mut chars = root_id.chars();
    let reason = match chars.next() {
        None => Some("root id is empty"),
        Some(first) if !first.is_ascii_alphabetic() => Some("root id must start with a letter"),
        Some(_) if !chars.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') => {
            Some("root id contains characters outside [A-Za-z0-9_-]")
        }
        Some(_) => None,
    };
    match reason {
        Some(reason) => Err(PageError::Mount {
            root_id: root_id.to_string(),
            reason,
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_id_validation() {
        assert!(validate_root_id("root").is_ok());
        assert!(validate_root_id("app-shell_2").is_ok());
        for bad in ["", "1root", "root node", "root\"><script>"] {
            let err = validate_root_id(bad).expect_err("invalid root id");
            assert!(err.is_mount_failure(), "{bad:?} should be a mount failure");
        }
    }

    #[test]
    fn context_takes_margin_from_site_config() {
        let site = SiteConfig {
            reveal_margin: "-25%".to_string(),
            reveal_stagger_ms: 90,
            ..SiteConfig::default()
        };
        let ctx = ComposeContext::new(&site).with_year(2031);
        assert_eq!(ctx.reveal.root_margin, "-25%");
        assert_eq!(ctx.reveal.stagger_ms, 90);
        assert_eq!(ctx.year, 2031);
        assert_eq!(ctx.observer_mode, ObserverMode::Available);
    }

    #[test]
    fn filter_errors_are_not_mount_failures() {
        let err = PageError::from(FilterError::UnknownCategory("Poetry".to_string()));
        assert!(!err.is_mount_failure());
    }
}
