// HTTP surface: GET /api/pessoas plus permissive CORS
use crate::config::AppConfig;
use crate::model::{ErrorBody, PeopleResponse, StorageError};
use crate::normalizer::normalize_all;
use crate::storage::PeopleStore;
use axum::extract::{Request, State};
use axum::http::{HeaderValue, Method, StatusCode, header};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info, warn};

pub const PEOPLE_PATH: &str = "/api/pessoas";
pub const QUERY_FAILED: &str = "Erro ao consultar MongoDB";

pub type SharedStore = Arc<dyn PeopleStore>;

#[derive(Debug)]
pub enum ApiError {
    NotFound,
    MethodNotAllowed,
    Upstream(StorageError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::NotFound => (StatusCode::NOT_FOUND, ErrorBody::new("Not found")),
            ApiError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                ErrorBody::new("Método não permitido"),
            ),
            ApiError::Upstream(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody::with_details(QUERY_FAILED, e.to_string()),
            ),
        };
        (status, Json(body)).into_response()
    }
}

impl From<StorageError> for ApiError {
    fn from(e: StorageError) -> Self {
        ApiError::Upstream(e)
    }
}

pub fn build_router(store: SharedStore) -> Router {
    Router::new()
        .route(PEOPLE_PATH, get(list_people).fallback(method_not_allowed))
        .fallback(not_found)
        .layer(middleware::from_fn(cors))
        .with_state(store)
}

/// Binds `api_host:api_port` and serves until `shutdown` resolves.
pub async fn serve<F>(config: &AppConfig, store: SharedStore, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = TcpListener::bind((config.api_host.as_str(), config.api_port)).await?;
    serve_on(listener, store, shutdown).await
}

pub async fn serve_on<F>(listener: TcpListener, store: SharedStore, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    info!(
        "API listening on http://{}{}",
        listener.local_addr()?,
        PEOPLE_PATH
    );
    axum::serve(listener, build_router(store))
        .with_graceful_shutdown(shutdown)
        .await?;
    info!("API stopped");
    Ok(())
}

/// Resolves on Ctrl-C.
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown requested");
}

async fn list_people(State(store): State<SharedStore>) -> Result<Json<PeopleResponse>, ApiError> {
    let documents = store.fetch_all().await.map_err(|e| {
        error!("People query failed: {}", e);
        ApiError::from(e)
    })?;

    let data = normalize_all(&documents);
    info!("Serving {} people", data.len());
    Ok(Json(PeopleResponse { data }))
}

async fn not_found() -> ApiError {
    ApiError::NotFound
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// Answers every pre-flight with 204 and stamps the CORS headers on all
/// responses, including errors.
async fn cors(req: Request, next: Next) -> Response {
    let mut response = if req.method() == Method::OPTIONS {
        StatusCode::NO_CONTENT.into_response()
    } else {
        next.run(req).await
    };

    let headers = response.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, OPTIONS"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type"),
    );
    response
}
