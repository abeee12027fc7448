//! HTTP request handlers for the bridge service.
//!
//! Implements the content-processing and health endpoints using axum.
//! Request field validation happens here so missing or unknown fields come
//! back as a controlled 400 JSON body rather than a framework rejection,
//! and no collaborator is called for an invalid request.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use scribe_domain::{ActionKind, DocumentStore, ProcessRequest, TextGenerator, UnknownAction};
use scribe_pipeline::{ContentPipeline, PipelineError};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Shared application state
pub struct AppState<S, G>
where
    S: DocumentStore,
    G: TextGenerator,
{
    /// The content pipeline; long-lived, shared by all requests
    pub pipeline: Arc<ContentPipeline<S, G>>,
}

impl<S: DocumentStore, G: TextGenerator> Clone for AppState<S, G> {
    fn clone(&self) -> Self {
        Self {
            pipeline: Arc::clone(&self.pipeline),
        }
    }
}

/// Content-processing request body
#[derive(Debug, Deserialize)]
pub struct ProcessContentRequest {
    /// Caller-supplied source text, or the question for ask_question
    #[serde(default)]
    pub content: Option<String>,

    /// Wire name of the action to perform
    #[serde(default)]
    pub action: Option<String>,

    /// Target page identifier
    #[serde(default, alias = "pageId", alias = "notionPageId")]
    pub page_id: Option<String>,

    /// Whether to append the result back to the page (default true)
    #[serde(default)]
    pub append: Option<bool>,
}

/// Content-processing response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ProcessContentResponse {
    /// Whether the request ran to completion
    pub success: bool,

    /// Generated text; also present on append failure so the result is not lost
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,

    /// Whether the output was appended back to the page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub appended: Option<bool>,

    /// Human-readable error message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    /// Overall health status
    pub status: String,
}

/// Application error type
#[derive(Debug)]
pub enum AppError {
    /// Missing or invalid required request field
    Validation(String),
    /// Failure inside the content pipeline
    Pipeline(PipelineError),
}

impl From<PipelineError> for AppError {
    fn from(e: PipelineError) -> Self {
        AppError::Pipeline(e)
    }
}

impl From<UnknownAction> for AppError {
    fn from(e: UnknownAction) -> Self {
        AppError::Validation(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, output) = match self {
            AppError::Validation(message) => (StatusCode::BAD_REQUEST, message, None),
            AppError::Pipeline(e) => {
                let status = match &e {
                    PipelineError::EmptyContent | PipelineError::MissingQuestion => {
                        StatusCode::BAD_REQUEST
                    }
                    PipelineError::Extraction { .. }
                    | PipelineError::Generation(_)
                    | PipelineError::Append { .. } => StatusCode::INTERNAL_SERVER_ERROR,
                };
                let output = e.generated_text().map(str::to_string);
                (status, e.to_string(), output)
            }
        };

        let body = Json(ProcessContentResponse {
            success: false,
            output,
            appended: Some(false),
            error: Some(message),
        });
        (status, body).into_response()
    }
}

/// POST /api/process - Run one content transformation
async fn process_content<S, G>(
    State(state): State<AppState<S, G>>,
    Json(body): Json<ProcessContentRequest>,
) -> Result<Json<ProcessContentResponse>, AppError>
where
    S: DocumentStore + Send + Sync + 'static,
    G: TextGenerator + Send + Sync + 'static,
{
    let page_id = body
        .page_id
        .filter(|id| !id.trim().is_empty())
        .ok_or_else(|| AppError::Validation("Missing required field: pageId".to_string()))?;

    let action_name = body
        .action
        .filter(|name| !name.trim().is_empty())
        .ok_or_else(|| AppError::Validation("Missing required field: action".to_string()))?;
    let action: ActionKind = action_name.parse()?;

    let mut request = ProcessRequest::new(action, page_id).with_append(body.append.unwrap_or(true));
    if let Some(content) = body.content {
        request = request.with_content(content);
    }

    let outcome = state.pipeline.process(request).await?;

    Ok(Json(ProcessContentResponse {
        success: true,
        output: Some(outcome.output),
        appended: Some(outcome.appended),
        error: None,
    }))
}

/// GET /health - Liveness check
async fn health_check() -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse {
        status: "ok".to_string(),
    })
}

/// Create the axum router with all routes
pub fn create_router<S, G>(state: AppState<S, G>) -> Router
where
    S: DocumentStore + Send + Sync + 'static,
    G: TextGenerator + Send + Sync + 'static,
{
    Router::new()
        .route("/api/process", post(process_content::<S, G>))
        .route("/health", get(health_check))
        .with_state(state)
}
