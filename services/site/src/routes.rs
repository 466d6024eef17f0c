use crate::infra::AppState;
use axum::extract::{Path, Query};
use axum::http::{header, HeaderMap, StatusCode, Uri};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{Extension, Json, Router};
use portfolio::assets;
use portfolio::content::{Collection, ContentError};
use portfolio::error::AppError;
use portfolio::page::{PageError, Route, SectionKind};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::debug;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct CategoryQuery {
    #[serde(default)]
    pub(crate) category: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ContentResponse {
    pub(crate) collection: Collection,
    pub(crate) categories: Vec<&'static str>,
    pub(crate) count: usize,
    pub(crate) records: Vec<Value>,
}

pub(crate) fn site_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(page_endpoint))
        .route("/about", get(page_endpoint))
        .route("/fragments/:section", get(fragment_endpoint))
        .route("/api/v1/content/:collection", get(content_endpoint))
        .route("/assets/:file", get(asset_endpoint))
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .fallback(page_endpoint)
        .layer(Extension(state))
}

/// Renders `/`, `/about`, and the not-found view for everything else.
pub(crate) async fn page_endpoint(
    Extension(state): Extension<AppState>,
    headers: HeaderMap,
    uri: Uri,
) -> Result<Response, AppError> {
    let ctx = state.compose_context(&headers);
    let (status, page) = match Route::resolve(uri.path()) {
        Some(route) => (StatusCode::OK, state.composer.compose(route, &ctx)?),
        None => (
            StatusCode::NOT_FOUND,
            state.composer.not_found(uri.path(), &ctx)?,
        ),
    };
    let html = page.render(&ctx)?;
    Ok((status, Html(html)).into_response())
}

pub(crate) async fn fragment_endpoint(
    Extension(state): Extension<AppState>,
    Path(section): Path<String>,
    Query(query): Query<CategoryQuery>,
) -> Result<Html<String>, AppError> {
    let kind = SectionKind::parse(&section).ok_or(PageError::UnknownSection(section))?;
    debug!(section = kind.anchor(), category = ?query.category, "rendering fragment");
    let html = state
        .composer
        .fragment(kind, query.category.as_deref())?;
    Ok(Html(html))
}

pub(crate) async fn content_endpoint(
    Path(collection): Path<String>,
    Query(query): Query<CategoryQuery>,
) -> Result<Json<ContentResponse>, AppError> {
    let collection = Collection::parse(&collection)
        .ok_or(ContentError::UnknownCollection(collection))?;
    let records = collection.records(query.category.as_deref())?;
    Ok(Json(ContentResponse {
        collection,
        categories: collection.category_labels(),
        count: records.len(),
        records,
    }))
}

pub(crate) async fn asset_endpoint(Path(file): Path<String>) -> Response {
    match assets::find(&file) {
        Some(asset) => {
            let mime = mime_guess::from_path(asset.name).first_or_octet_stream();
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, mime.to_string()),
                    (header::CACHE_CONTROL, "public, max-age=3600".to_string()),
                ],
                asset.body,
            )
                .into_response()
        }
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": format!("no asset named '{file}'") })),
        )
            .into_response(),
    }
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::{test_state, REDUCED_MOTION_HINT};
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use portfolio::config::SiteConfig;
    use tower::ServiceExt;

    fn router() -> Router {
        site_router(test_state(SiteConfig::default()))
    }

    async fn get_body(router: Router, uri: &str) -> (StatusCode, HeaderMap, String) {
        let response = router
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .expect("route executes");
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body reads");
        (status, headers, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn home_renders_every_section_in_order() {
        let (status, _, html) = get_body(router(), "/").await;
        assert_eq!(status, StatusCode::OK);
        let positions: Vec<usize> = [
            "id=\"home\"",
            "id=\"about\"",
            "id=\"projects\"",
            "id=\"experience\"",
            "id=\"education\"",
            "id=\"certifications\"",
            "id=\"research\"",
            "id=\"testimonials\"",
            "id=\"newsletter\"",
            "id=\"contact\"",
        ]
        .iter()
        .map(|needle| html.find(needle).expect("section present"))
        .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[tokio::test]
    async fn about_renders_biography_with_trailing_slash() {
        for path in ["/about", "/about/"] {
            let (status, _, html) = get_body(router(), path).await;
            assert_eq!(status, StatusCode::OK, "{path}");
            assert!(html.contains("id=\"biography\""));
            assert!(html.contains("Return to Portfolio"));
            assert!(!html.contains("id=\"projects\""));
        }
    }

    #[tokio::test]
    async fn unknown_path_renders_not_found_view() {
        let (status, headers, html) = get_body(router(), "/blog").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(headers[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/html"));
        assert!(html.contains("Back to the portfolio"));
    }

    #[tokio::test]
    async fn bad_root_id_replaces_the_page_with_mount_error() {
        let site = SiteConfig {
            root_id: "9 lives".to_string(),
            ..SiteConfig::default()
        };
        let (status, _, html) = get_body(site_router(test_state(site)), "/").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(html.contains("<h1>Mount Error</h1>"));
        assert!(html.contains("The application failed to initialize."));
        assert!(!html.contains("id=\"projects\""));
    }

    #[tokio::test]
    async fn reduced_motion_hint_starts_sections_revealed() {
        let response = router()
            .oneshot(
                Request::get("/")
                    .header(REDUCED_MOTION_HINT, "reduce")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .expect("route executes");
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body reads");
        let html = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(!html.contains("data-reveal=\"unseen\""));
        assert!(html.contains("data-reveal=\"revealed\""));
    }

    #[tokio::test]
    async fn fragment_filters_testimonials() {
        let (status, _, html) =
            get_body(router(), "/fragments/testimonials?category=Leadership").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(html.matches("<figure class=\"card testimonial\"").count(), 3);
        assert!(html.find("data-id=\"t3\"") < html.find("data-id=\"t5\""));
        assert!(html.find("data-id=\"t5\"") < html.find("data-id=\"t7\""));
    }

    #[tokio::test]
    async fn fragment_errors_map_to_client_statuses() {
        let (status, _, _) = get_body(router(), "/fragments/footer").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let (status, _, body) =
            get_body(router(), "/fragments/projects?category=Poetry").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("unknown category"));
    }

    #[tokio::test]
    async fn content_api_filters_certifications() {
        let (status, _, body) =
            get_body(router(), "/api/v1/content/certifications?category=AI").await;
        assert_eq!(status, StatusCode::OK);
        let payload: Value = serde_json::from_str(&body).expect("json body");
        let ids: Vec<&str> = payload["records"]
            .as_array()
            .expect("records array")
            .iter()
            .filter_map(|record| record["id"].as_str())
            .collect();
        assert_eq!(
            ids,
            vec!["dl-specialization", "tensorflow-developer", "stanford-ai-safety"]
        );
        assert_eq!(payload["categories"][0], "All");
    }

    #[tokio::test]
    async fn content_api_rejects_unknown_collections() {
        let (status, _, _) = get_body(router(), "/api/v1/content/blog").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn assets_carry_guessed_content_type() {
        let (status, headers, body) = get_body(router(), "/assets/site.css").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(headers[header::CONTENT_TYPE], "text/css");
        assert!(body.contains("js-reveal"));

        let (_, headers, body) = get_body(router(), "/assets/site.js").await;
        assert!(headers[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .contains("javascript"));
        assert!(body.contains("IntersectionObserver"));

        let (status, _, _) = get_body(router(), "/assets/missing.png").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn readiness_reports_ready() {
        let (status, _, body) = get_body(router(), "/ready").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("ready"));
    }
}
