//! Service configuration: JSON file with environment overrides.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context as _;

use crate::foundation::core::Canvas;
use crate::foundation::error::{InkError, InkResult};

/// Runtime settings for the CLI and the HTTP service.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServiceConfig {
    /// Root directory of the font files; style locators are relative to it.
    pub font_dir: PathBuf,
    /// Output size.
    pub canvas: Canvas,
    /// Render pool workers; `None` uses one per core.
    pub threads: Option<usize>,
    /// Per-request font loading budget.
    pub font_timeout_ms: u64,
    /// Listen address of `serve`.
    pub bind: String,
    /// Year the seal's sexagenary label is computed from.
    pub year: i32,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            font_dir: PathBuf::from("fonts"),
            canvas: Canvas::default(),
            threads: None,
            font_timeout_ms: 5_000,
            bind: "0.0.0.0:8080".to_string(),
            year: 2025,
        }
    }
}

impl ServiceConfig {
    /// Parse a JSON document; missing fields take their defaults.
    pub fn from_json_str(s: &str) -> InkResult<Self> {
        serde_json::from_str(s).map_err(|e| InkError::serde(format!("config: {e}")))
    }

    /// Load `path` (or defaults), apply process environment overrides, validate.
    pub fn load(path: Option<&Path>) -> InkResult<Self> {
        let mut cfg = match path {
            Some(p) => {
                let text = std::fs::read_to_string(p)
                    .with_context(|| format!("read config '{}'", p.display()))?;
                Self::from_json_str(&text)?
            }
            None => Self::default(),
        };
        cfg.apply_env(|k| std::env::var(k).ok())?;
        cfg.validate()?;
        tracing::debug!(?cfg, "configuration loaded");
        Ok(cfg)
    }

    /// Apply `INKFRAME_FONT_DIR`, `INKFRAME_BIND`, `PORT`, `INKFRAME_THREADS` and
    /// `INKFRAME_YEAR` as read through `get`. `PORT` replaces only the port of the bind address.
    pub fn apply_env(&mut self, get: impl Fn(&str) -> Option<String>) -> InkResult<()> {
        if let Some(dir) = get("INKFRAME_FONT_DIR") {
            self.font_dir = PathBuf::from(dir);
        }
        if let Some(bind) = get("INKFRAME_BIND") {
            self.bind = bind;
        }
        if let Some(port) = get("PORT") {
            let port: u16 = parse_env("PORT", &port)?;
            let host = self
                .bind
                .rsplit_once(':')
                .map_or(self.bind.as_str(), |(h, _)| h);
            self.bind = format!("{host}:{port}");
        }
        if let Some(threads) = get("INKFRAME_THREADS") {
            self.threads = Some(parse_env("INKFRAME_THREADS", &threads)?);
        }
        if let Some(year) = get("INKFRAME_YEAR") {
            self.year = parse_env("INKFRAME_YEAR", &year)?;
        }
        Ok(())
    }

    /// Reject settings the service cannot start with.
    pub fn validate(&self) -> InkResult<()> {
        Canvas::new(self.canvas.width, self.canvas.height)?;
        if self.threads == Some(0) {
            return Err(InkError::validation("config 'threads' must be >= 1 when set"));
        }
        if self.font_timeout_ms == 0 {
            return Err(InkError::validation("config 'font_timeout_ms' must be > 0"));
        }
        if self.bind.trim().is_empty() {
            return Err(InkError::validation("config 'bind' must be non-empty"));
        }
        Ok(())
    }

    /// [`ServiceConfig::font_timeout_ms`] as a duration.
    pub fn font_timeout(&self) -> Duration {
        Duration::from_millis(self.font_timeout_ms)
    }
}

fn parse_env<T: std::str::FromStr>(key: &str, value: &str) -> InkResult<T>
where
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| InkError::validation(format!("environment {key}='{value}': {e}")))
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
