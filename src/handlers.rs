use crate::config::Config;
use crate::directory_client::DirectoryClient;
use crate::errors::AppError;
use crate::head;
use crate::identifier;
use crate::models::{PageMetadata, SocialLinksRequest, SocialLinksResponse};
use crate::resolver::{MetadataResolver, SiteDefaults};
use crate::social_links;
use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::Html,
    routing::{get, post},
    Json, Router,
};
use percent_encoding::percent_decode_str;
use serde_json::json;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_governor::{
    governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor, GovernorLayer,
};
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};

/// Shared application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Config,
    /// Client for the directory API.
    pub directory_client: DirectoryClient,
    /// Metadata resolver backed by `directory_client`.
    pub resolver: MetadataResolver,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, AppError> {
        let directory_client = DirectoryClient::new(&config)?;
        let resolver = MetadataResolver::new(
            directory_client.clone(),
            SiteDefaults::from_config(&config),
        );
        Ok(Self {
            config,
            directory_client,
            resolver,
        })
    }
}

/// The application router as served: health check, rate-limited API routes,
/// request tracing and CORS.
///
/// The rate limiter keys on the client IP, so the service must be served with
/// connect info or behind a proxy that sets `X-Forwarded-For`.
pub fn build_router(state: Arc<AppState>) -> Result<Router, AppError> {
    // 10 requests/second per IP, burst of 20
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(10)
            .burst_size(20)
            .key_extractor(SmartIpKeyExtractor)
            .finish()
            .ok_or_else(|| {
                AppError::InternalError("Invalid rate limiter configuration".to_string())
            })?,
    );

    let limited = api_routes(state).layer(
        ServiceBuilder::new()
            // Request bodies are small JSON session payloads
            .layer(RequestBodyLimitLayer::new(64 * 1024))
            .layer(GovernorLayer {
                config: governor_conf,
            }),
    );

    // Health check stays outside the rate limit
    Ok(Router::new()
        .route("/health", get(health))
        .merge(limited)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()))
}

fn api_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/api/v1/metadata/:service_name/:service_id",
            get(get_service_metadata),
        )
        .route("/stores/:service_name/:service_id", get(render_store_page))
        .route("/api/v1/business/social-links", post(open_social_links))
        .with_state(state)
}

/// Splits `/<prefix>/:service_name/:service_id` into its last two segments.
///
/// The id stays percent-encoded for [`identifier::decode`]; the name is
/// decoded lossily so a stray byte never rejects the request.
fn route_segments(uri: &Uri) -> Result<(String, &str), AppError> {
    let mut segments = uri.path().rsplit('/');
    match (segments.next(), segments.next()) {
        (Some(raw_id), Some(raw_name)) => Ok((
            percent_decode_str(raw_name).decode_utf8_lossy().into_owned(),
            raw_id,
        )),
        _ => Err(AppError::BadRequest("malformed service path".to_string())),
    }
}

/// Health check endpoint.
pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "service": "nlytical-meta-api",
            "version": env!("CARGO_PKG_VERSION")
        })),
    )
}

/// GET /api/v1/metadata/:service_name/:service_id
///
/// Page metadata for a store detail route. `service_id` is the encoded route
/// segment; a blank decoded id is rejected since it cannot key a lookup.
pub async fn get_service_metadata(
    State(state): State<Arc<AppState>>,
    uri: Uri,
) -> Result<Json<PageMetadata>, AppError> {
    let (service_name, raw_service_id) = route_segments(&uri)?;
    tracing::info!("GET /metadata/{}/{}", service_name, raw_service_id);

    let service_id = identifier::decode(&raw_service_id);
    if service_id.trim().is_empty() {
        return Err(AppError::BadRequest("service_id is empty".to_string()));
    }

    let metadata = state.resolver.resolve(&service_name, &service_id).await;
    Ok(Json(metadata))
}

/// GET /stores/:service_name/:service_id
///
/// The store detail document. Always renders; a failed lookup only degrades
/// the head to the `noindex` error metadata.
pub async fn render_store_page(
    State(state): State<Arc<AppState>>,
    uri: Uri,
) -> Result<Html<String>, AppError> {
    let (service_name, raw_service_id) = route_segments(&uri)?;
    let service_id = identifier::decode(&raw_service_id);
    let metadata = state.resolver.resolve(&service_name, &service_id).await;
    Ok(Html(head::render_document(
        &metadata,
        &service_name,
        &service_id,
    )))
}

/// POST /api/v1/business/social-links
///
/// Dashboard "Add Social Links" quick link. Session values come in the body.
pub async fn open_social_links(
    State(state): State<Arc<AppState>>,
    Json(session): Json<SocialLinksRequest>,
) -> Json<SocialLinksResponse> {
    tracing::info!("POST /business/social-links - is_store: {:?}", session.is_store);

    let response = social_links::open_social_links(&state.directory_client, &session).await;
    Json(response)
}
