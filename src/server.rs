//! HTTP service.
//!
//! - `GET  /health`     liveness probe
//! - `POST /api/render` render a [`RenderPayload`] into an image data URI

use std::sync::Arc;

use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::api::{ApiResponse, RenderPayload, respond};
use crate::config::ServiceConfig;
use crate::fonts::{
    CachedFontLoader, FontLoader, FontResolution, FontResolver, FontStyle, FsFontLoader,
};
use crate::foundation::error::{InkError, InkResult, Stage};
use crate::render::{RenderPool, RenderRequest, RenderResult};

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ServiceConfig>,
    loader: Arc<dyn FontLoader>,
    pool: Arc<RenderPool>,
}

impl AppState {
    /// State reading fonts from `config.font_dir` through a process-lifetime cache.
    pub fn new(config: ServiceConfig) -> InkResult<Self> {
        let loader = CachedFontLoader::new(FsFontLoader::new(config.font_dir.clone()));
        Self::with_loader(config, Arc::new(loader))
    }

    /// State with a caller-supplied loader.
    pub fn with_loader(config: ServiceConfig, loader: Arc<dyn FontLoader>) -> InkResult<Self> {
        config.validate()?;
        let pool = RenderPool::new(config.threads)?;
        Ok(Self {
            config: Arc::new(config),
            loader,
            pool: Arc::new(pool),
        })
    }

    /// Active configuration.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Shared rasterization pool.
    pub fn pool(&self) -> &RenderPool {
        &self.pool
    }

    /// Validate, resolve fonts off the async runtime, then render on the pool.
    pub async fn render(&self, payload: RenderPayload) -> InkResult<RenderResult> {
        let request = payload.into_request(self.config.canvas, self.config.year)?;
        let fonts = self.resolve_fonts(request.style).await?;
        self.rasterize(request, fonts).await
    }

    async fn resolve_fonts(&self, style: FontStyle) -> InkResult<FontResolution> {
        let loader = Arc::clone(&self.loader);
        let task = tokio::task::spawn_blocking(move || FontResolver::new(loader).resolve(style));
        match tokio::time::timeout(self.config.font_timeout(), task).await {
            Ok(Ok(resolved)) => resolved,
            Ok(Err(join)) => Err(InkError::Other(anyhow::anyhow!(
                "font loading task failed: {join}"
            ))),
            Err(_) => {
                tracing::warn!(
                    style = style.id(),
                    timeout_ms = self.config.font_timeout_ms,
                    "font loading timed out"
                );
                let mut attempted = vec![style.locator().to_string()];
                if style != FontStyle::DEFAULT {
                    attempted.push(FontStyle::DEFAULT.locator().to_string());
                }
                Err(InkError::font_load(style.id(), attempted))
            }
        }
    }

    async fn rasterize(
        &self,
        request: RenderRequest,
        fonts: FontResolution,
    ) -> InkResult<RenderResult> {
        let (tx, rx) = tokio::sync::oneshot::channel();
        self.pool.spawn(move |pool| {
            let _ = tx.send(pool.render(&request, &fonts));
        });
        rx.await
            .map_err(|_| InkError::raster(Stage::Raster, "render worker dropped the job"))?
    }
}

/// Build the router.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/render", post(render_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind `config.bind` and serve until the process exits.
pub async fn serve(config: ServiceConfig) -> anyhow::Result<()> {
    let bind = config.bind.clone();
    let state = AppState::new(config)?;
    let listener = tokio::net::TcpListener::bind(&bind).await?;
    tracing::info!(
        addr = %bind,
        threads = state.pool().threads(),
        fonts = %state.config().font_dir.display(),
        "inkframe listening"
    );
    axum::serve(listener, app_router(state)).await?;
    Ok(())
}

async fn health_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "service": "inkframe",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn render_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> (StatusCode, Json<ApiResponse>) {
    let result = match RenderPayload::from_json(&body) {
        Ok(payload) => state.render(payload).await,
        Err(err) => Err(err),
    };
    let (status, response) = respond(result);
    let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(response))
}
