use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::services::{ServeDir, ServeFile};
use tracing::{info, warn};

use crate::api::{AnalyzeRequest, AnalyzeResponse, ApiError, HealthResponse};
use tone_reader::config::ServerConfig;
use tone_reader::ranking::EmotionRanker;
use tone_reader::{analyze, FriendlyResult};

#[derive(Clone)]
struct AppState {
    ranker: Arc<dyn EmotionRanker>,
}

pub async fn serve(config: ServerConfig, ranker: Arc<dyn EmotionRanker>) -> Result<(), String> {
    let state = AppState { ranker };

    let web_root = config.web_root;
    let index_path = format!("{}/index.html", web_root.trim_end_matches('/'));
    let static_service = ServeDir::new(&web_root).not_found_service(ServeFile::new(index_path));

    let app = Router::new()
        .route("/health", get(health))
        .route("/analyze", post(analyze_handler))
        .route("/analyze-friendly", post(analyze_friendly_handler))
        .nest_service("/", static_service)
        .with_state(state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .map_err(|err| format!("invalid bind address: {}", err))?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|err| format!("failed to bind server: {}", err))?;
    info!(%addr, web_root = %web_root, "tone analyzer listening");

    axum::serve(listener, app)
        .await
        .map_err(|err| format!("server error: {}", err))?;

    Ok(())
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

async fn analyze_handler(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let text = request.into_text("text is required")?;
    let outcome = analyze(state.ranker.as_ref(), &text).await;
    Ok(Json(AnalyzeResponse::from(outcome)))
}

async fn analyze_friendly_handler(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<FriendlyResult>, ApiError> {
    let text = request.into_text("Please provide text")?;
    let result = analyze(state.ranker.as_ref(), &text).await.map_err(|failure| {
        warn!(error = %failure.error, "friendly analysis failed");
        ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, failure.error)
    })?;
    Ok(Json(FriendlyResult::from_analysis(&result)))
}
