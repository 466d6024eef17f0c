use axum::http::HeaderMap;
use metrics_exporter_prometheus::PrometheusHandle;
use portfolio::config::SiteConfig;
use portfolio::page::{ComposeContext, PageComposer};
use portfolio::reveal::ObserverMode;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

/// Client hint sent by browsers whose user asked for less motion.
pub(crate) const REDUCED_MOTION_HINT: &str = "sec-ch-prefers-reduced-motion";

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) site: Arc<SiteConfig>,
    pub(crate) composer: PageComposer,
}

impl AppState {
    pub(crate) fn new(site: SiteConfig, readiness: Arc<AtomicBool>, metrics: PrometheusHandle) -> Self {
        Self {
            readiness,
            metrics: Arc::new(metrics),
            composer: PageComposer::new(&site),
            site: Arc::new(site),
        }
    }

    /// Sections start revealed when the client asks for reduced motion.
    pub(crate) fn compose_context(&self, headers: &HeaderMap) -> ComposeContext {
        let reduced = headers
            .get(REDUCED_MOTION_HINT)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.trim().eq_ignore_ascii_case("reduce"));
        let mode = if reduced {
            ObserverMode::Unavailable
        } else {
            ObserverMode::Available
        };
        ComposeContext::new(&self.site).with_observer_mode(mode)
    }
}

#[cfg(test)]
pub(crate) fn test_state(site: SiteConfig) -> AppState {
    let handle = metrics_exporter_prometheus::PrometheusBuilder::new()
        .build_recorder()
        .handle();
    AppState::new(site, Arc::new(AtomicBool::new(true)), handle)
}
