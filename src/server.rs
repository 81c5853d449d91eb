//! HTTP surface
//!
//! warp filters for:
//! - `GET /health` — liveness probe
//! - `GET /api/scene` — read the current record
//! - `POST /api/scene` — validated full replace (omitted fields default)
//! - `PATCH /api/scene` — validated all-or-nothing merge
//! - everything else — static files from the configured web root
//!
//! Store errors surface as JSON bodies through one rejection handler:
//! empty patch → 400, validation failure → 422, malformed body → 400.

use crate::config::ServerConfig;
use crate::error::StoreError;
use crate::params::SceneParams;
use crate::store::SceneStore;
use serde::Serialize;
use serde_json::{Map, Value};
use std::convert::Infallible;
use std::sync::Arc;
use warp::http::StatusCode;
use warp::{Filter, Rejection, Reply};

/// JSON error body sent to clients
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    violations: Vec<String>,
}

impl ErrorBody {
    fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            violations: Vec::new(),
        }
    }
}

impl From<&StoreError> for ErrorBody {
    fn from(err: &StoreError) -> Self {
        Self {
            error: err.to_string(),
            violations: err.violations().iter().map(ToString::to_string).collect(),
        }
    }
}

/// Rejection wrapper so store errors flow through warp's recovery
#[derive(Debug)]
struct ApiError(StoreError);

impl warp::reject::Reject for ApiError {}

fn with_store(
    store: Arc<SceneStore>,
) -> impl Filter<Extract = (Arc<SceneStore>,), Error = Infallible> + Clone {
    warp::any().map(move || Arc::clone(&store))
}

/// Build the complete route tree.
pub fn routes(
    store: Arc<SceneStore>,
    config: &ServerConfig,
) -> impl Filter<Extract = impl Reply, Error = Rejection> + Clone {
    let health = warp::path("health")
        .and(warp::path::end())
        .and(warp::get())
        .map(|| warp::reply::json(&serde_json::json!({"status": "ok"})));

    let scene = warp::path!("api" / "scene");

    let scene_get = scene
        .and(warp::get())
        .and(with_store(Arc::clone(&store)))
        .map(|store: Arc<SceneStore>| warp::reply::json(&store.get()));

    let scene_replace = scene
        .and(warp::post())
        .and(with_store(Arc::clone(&store)))
        .and(warp::body::content_length_limit(16 * 1024))
        .and(warp::body::json())
        .and_then(handle_replace);

    let scene_merge = scene
        .and(warp::patch())
        .and(with_store(store))
        .and(warp::body::content_length_limit(16 * 1024))
        .and(warp::body::json())
        .and_then(handle_merge);

    let static_files = warp::fs::dir(config.static_dir.clone());

    let cors = warp::cors()
        .allow_any_origin()
        .allow_methods(vec!["GET", "POST", "PATCH", "OPTIONS"])
        .allow_header("content-type");

    health
        .or(scene_get)
        .or(scene_replace)
        .or(scene_merge)
        .or(static_files)
        .recover(handle_rejection)
        .with(cors)
        .with(warp::trace::request())
}

async fn handle_replace(
    store: Arc<SceneStore>,
    candidate: SceneParams,
) -> Result<impl Reply, Rejection> {
    match store.replace(candidate) {
        Ok(params) => Ok(warp::reply::json(&params)),
        Err(err) => {
            tracing::warn!(%err, "replace rejected");
            Err(warp::reject::custom(ApiError(err)))
        }
    }
}

async fn handle_merge(
    store: Arc<SceneStore>,
    patch: Map<String, Value>,
) -> Result<impl Reply, Rejection> {
    match store.merge(&patch) {
        Ok(params) => Ok(warp::reply::json(&params)),
        Err(err) => {
            tracing::warn!(%err, "merge rejected");
            Err(warp::reject::custom(ApiError(err)))
        }
    }
}

/// Map rejections to JSON error replies with the right status code.
async fn handle_rejection(err: Rejection) -> Result<impl Reply, Infallible> {
    let (status, body) = if err.is_not_found() {
        (StatusCode::NOT_FOUND, ErrorBody::new("not found"))
    } else if let Some(ApiError(store_err)) = err.find::<ApiError>() {
        let status = match store_err {
            StoreError::EmptyPatch => StatusCode::BAD_REQUEST,
            StoreError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        };
        (status, ErrorBody::from(store_err))
    } else if let Some(body_err) = err.find::<warp::filters::body::BodyDeserializeError>() {
        (
            StatusCode::BAD_REQUEST,
            ErrorBody::new(body_err.to_string()),
        )
    } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        (
            StatusCode::METHOD_NOT_ALLOWED,
            ErrorBody::new("method not allowed"),
        )
    } else if err.find::<warp::reject::PayloadTooLarge>().is_some() {
        (StatusCode::PAYLOAD_TOO_LARGE, ErrorBody::new("body too large"))
    } else {
        tracing::error!(?err, "unhandled rejection");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            ErrorBody::new("internal server error"),
        )
    };

    Ok(warp::reply::with_status(warp::reply::json(&body), status))
}

/// Serve the API and static files until the process is terminated.
pub async fn run(store: Arc<SceneStore>, config: ServerConfig) {
    let addr = config.socket_addr();
    tracing::info!(%addr, static_dir = %config.static_dir.display(), "serving scene control API");
    warp::serve(routes(store, &config)).run(addr).await;
}
