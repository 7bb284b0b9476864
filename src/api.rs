//! JSON request/response shapes of the HTTP boundary.

use crate::fonts::FontStyle;
use crate::foundation::core::Canvas;
use crate::foundation::error::{InkError, InkResult};
use crate::render::{Mounting, OutputFormat, RenderRequest, RenderResult};

/// Body of `POST /api/render`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RenderPayload {
    /// Verse lines (2, 4 or 6).
    pub poem: Vec<String>,
    /// Script style keyword; empty selects kaishu.
    #[serde(default)]
    pub style: String,
    /// Curated frame id, `generated`, or `seed:<text>`.
    #[serde(default)]
    pub frame: String,
    /// Subject name; seeds the seal and `generated` mountings.
    #[serde(default)]
    pub name: Option<String>,
    /// `png` (default) or `svg`.
    #[serde(default)]
    pub format: Option<String>,
}

impl RenderPayload {
    /// Parse a request body.
    pub fn from_json(body: &[u8]) -> InkResult<Self> {
        serde_json::from_slice(body).map_err(|e| InkError::serde(format!("request body: {e}")))
    }

    /// Validate into a render request.
    pub fn into_request(self, canvas: Canvas, year: i32) -> InkResult<RenderRequest> {
        let name = self.name.as_deref().map(str::trim).filter(|n| !n.is_empty());
        let format = match self.format.as_deref() {
            Some(f) => OutputFormat::parse(f)?,
            None => OutputFormat::Png,
        };
        let style = if self.style.trim().is_empty() {
            FontStyle::Kaishu
        } else {
            FontStyle::parse_or_default(&self.style)
        };
        Ok(RenderRequest::new(&self.poem, name, year)?
            .with_mounting(Mounting::parse(&self.frame, name))
            .with_style(style)
            .with_canvas(canvas)
            .with_format(format))
    }
}

/// Output of the external poem generator. Only `poem` is consumed here.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PoemSource {
    /// Verse lines.
    pub poem: Vec<String>,
    /// Free-text commentary; ignored by rendering.
    #[serde(default)]
    pub explanation: String,
}

impl PoemSource {
    /// Parse the generator's JSON output.
    pub fn from_json(s: &str) -> InkResult<Self> {
        serde_json::from_str(s).map_err(|e| InkError::serde(format!("poem source: {e}")))
    }
}

/// Image payload of a successful response.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageData {
    /// `data:` URI of the rendered image.
    pub image_url: String,
}

/// `{success, data}` or `{success, error}`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ApiResponse {
    /// `true` when `data` is present.
    pub success: bool,
    /// Rendered image on success.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<ImageData>,
    /// Diagnostic on failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiResponse {
    /// Success carrying an image `data:` URI.
    pub fn ok(image_url: String) -> Self {
        Self {
            success: true,
            data: Some(ImageData { image_url }),
            error: None,
        }
    }

    /// Failure carrying a diagnostic.
    pub fn fail(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
        }
    }
}

/// HTTP status and body for a render outcome: 400 for caller errors, 500 otherwise.
pub fn respond(result: InkResult<RenderResult>) -> (u16, ApiResponse) {
    match result {
        Ok(out) => (200, ApiResponse::ok(out.data_uri())),
        Err(err) if err.is_client_error() => (400, ApiResponse::fail(err.to_string())),
        Err(err) => {
            tracing::error!(error = %err, "render failed");
            (500, ApiResponse::fail(err.to_string()))
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/api.rs"]
mod tests;
