//! HTTP surface: a single-endpoint axum service.
//!
//! `POST /summarize/` accepts a multipart upload with one `file` field,
//! runs the summarization pipeline, and answers with the rendered PDF.
//! The response is served from memory — no output temp file ever exists,
//! and the uploaded bytes live only inside the pipeline's RAII temp file.
//!
//! Cross-origin requests are allowed from any origin with any method and
//! header. The endpoint is a collaborator surface for a browser frontend,
//! not a security boundary; anything stricter belongs in front of this
//! service.

use crate::config::SummarizeConfig;
use crate::error::SummarizeError;
use crate::summarize::summarize_bytes;
use axum::extract::{DefaultBodyLimit, Multipart, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info};

/// Filename suggested to the client for the generated PDF.
const OUTPUT_FILENAME: &str = "meeting_summary.pdf";

/// Uploads above this size are rejected before the pipeline runs.
const MAX_UPLOAD_BYTES: usize = 32 * 1024 * 1024;

/// Shared state: one configuration for every request.
#[derive(Clone)]
pub struct AppState {
    pub config: SummarizeConfig,
}

/// Build the service router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/summarize/", post(summarize_endpoint))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(cors)
        .with_state(state)
}

/// Bind and serve until the process is stopped.
pub async fn run(addr: std::net::SocketAddr, state: AppState) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("listening on {addr}");
    axum::serve(listener, app(state)).await
}

/// `POST /summarize/` — transcript PDF in, summary PDF out.
async fn summarize_endpoint(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Response, ApiError> {
    let upload = read_file_field(multipart).await?;
    info!(bytes = upload.len(), "received transcript upload");

    let output = summarize_bytes(&upload, &state.config).await?;

    let headers = [
        (header::CONTENT_TYPE, "application/pdf".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{OUTPUT_FILENAME}\""),
        ),
    ];
    Ok((StatusCode::OK, headers, output.pdf).into_response())
}

/// Pull the bytes of the `file` field out of the multipart body.
async fn read_file_field(mut multipart: Multipart) -> Result<Vec<u8>, ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Malformed multipart body: {e}")))?
    {
        if field.name() == Some("file") {
            let bytes = field
                .bytes()
                .await
                .map_err(|e| ApiError::BadRequest(format!("Failed to read upload: {e}")))?;
            if bytes.is_empty() {
                return Err(ApiError::BadRequest("Uploaded file is empty.".into()));
            }
            return Ok(bytes.to_vec());
        }
    }
    Err(ApiError::BadRequest(
        "Multipart body must contain a 'file' field.".into(),
    ))
}

/// Error envelope for the HTTP layer.
///
/// Bodies follow the `{"detail": "..."}` shape throughout so clients have
/// one error format to parse.
enum ApiError {
    BadRequest(String),
    Pipeline(SummarizeError),
}

impl From<SummarizeError> for ApiError {
    fn from(e: SummarizeError) -> Self {
        ApiError::Pipeline(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::BadRequest(detail) => (StatusCode::BAD_REQUEST, detail),
            ApiError::Pipeline(e) => {
                let status = match &e {
                    SummarizeError::GenerationTimeout { .. } => StatusCode::GATEWAY_TIMEOUT,
                    _ if e.is_client_error() => StatusCode::BAD_REQUEST,
                    _ => StatusCode::INTERNAL_SERVER_ERROR,
                };
                if status.is_server_error() {
                    error!(error = %e, "request failed");
                }
                (status, e.to_string())
            }
        };
        (status, Json(json!({ "detail": detail }))).into_response()
    }
}
