use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use base64::Engine as _;

use crate::fonts::{FontLoader, FontResolution, FontResolver, FontStyle};
use crate::foundation::core::Canvas;
use crate::foundation::error::{InkError, InkResult};
use crate::poem::{Poem, SealSpec, build_poem_tree, check_fit};
use crate::render::document::Mounting;
use crate::render::raster;
use crate::tree::layout::layout_tree;
use crate::tree::svg::{SvgOptions, to_svg};

/// Output encoding of a render.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Rasterized PNG.
    #[default]
    Png,
    /// The vector document itself.
    Svg,
}

impl OutputFormat {
    /// Parse `png` / `svg`, case-insensitive.
    pub fn parse(s: &str) -> InkResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "png" => Ok(Self::Png),
            "svg" => Ok(Self::Svg),
            other => Err(InkError::validation(format!(
                "unknown output format '{other}' (expected png or svg)"
            ))),
        }
    }

    /// MIME type of the encoded output.
    pub fn mime(self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Svg => "image/svg+xml",
        }
    }
}

/// A validated render job.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderRequest {
    /// Verse lines.
    pub poem: Poem,
    /// Seal and year label.
    pub seal: SealSpec,
    /// Frame or generated mounting.
    pub mounting: Mounting,
    /// Script style of the verse.
    pub style: FontStyle,
    /// Output size.
    pub canvas: Canvas,
    /// Output encoding.
    pub format: OutputFormat,
}

impl RenderRequest {
    /// Validate raw inputs. Defaults: kaishu, no frame, default canvas, PNG.
    pub fn new<I, S>(lines: I, name: Option<&str>, year: i32) -> InkResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self {
            poem: Poem::new(lines)?,
            seal: SealSpec::new(name, year)?,
            mounting: Mounting::default(),
            style: FontStyle::Kaishu,
            canvas: Canvas::default(),
            format: OutputFormat::Png,
        })
    }

    /// Replace the frame or mounting.
    pub fn with_mounting(mut self, mounting: Mounting) -> Self {
        self.mounting = mounting;
        self
    }

    /// Replace the script style.
    pub fn with_style(mut self, style: FontStyle) -> Self {
        self.style = style;
        self
    }

    /// Replace the output size.
    pub fn with_canvas(mut self, canvas: Canvas) -> Self {
        self.canvas = canvas;
        self
    }

    /// Replace the output encoding.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    fn context(&self) -> String {
        format!("style '{}', {}", self.style, self.mounting)
    }
}

/// Render output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderResult {
    /// Encoding of [`RenderResult::bytes`].
    pub format: OutputFormat,
    /// The vector document.
    pub svg: String,
    /// PNG bytes, present for [`OutputFormat::Png`].
    pub png: Option<Vec<u8>>,
    /// Family the verse was set in.
    pub family: String,
    /// `true` when the requested style was replaced by the default family.
    pub substituted: bool,
}

impl RenderResult {
    /// Encoded output bytes.
    pub fn bytes(&self) -> &[u8] {
        match &self.png {
            Some(png) if self.format == OutputFormat::Png => png,
            _ => self.svg.as_bytes(),
        }
    }

    /// `data:<mime>;base64,...` URI of the output.
    pub fn data_uri(&self) -> String {
        let b64 = base64::engine::general_purpose::STANDARD.encode(self.bytes());
        format!("data:{};base64,{b64}", self.format.mime())
    }
}

/// Resolve fonts through `loader`, then render.
#[tracing::instrument(skip_all, fields(style = %request.style, mounting = %request.mounting))]
pub fn render<L: FontLoader>(request: &RenderRequest, loader: L) -> InkResult<RenderResult> {
    let fonts = FontResolver::new(loader)
        .resolve(request.style)
        .map_err(|e| e.with_context(&request.context()))?;
    render_with_fonts(request, &fonts)
}

/// Render with fonts already resolved.
pub fn render_with_fonts(
    request: &RenderRequest,
    fonts: &FontResolution,
) -> InkResult<RenderResult> {
    let svg = build_svg(request, fonts)?;
    let png = match request.format {
        OutputFormat::Png => {
            let png = raster::svg_to_png(&svg, Some(fonts))
                .map_err(|e| e.with_context(&request.context()))?;
            Some(png)
        }
        OutputFormat::Svg => None,
    };
    Ok(finish(request, fonts, svg, png))
}

/// Compose and serialize the full document. Animations are kept only for SVG output.
///
/// Fails with a validation error when a verse column does not fit the mounting's content slot.
pub fn build_svg(request: &RenderRequest, fonts: &FontResolution) -> InkResult<String> {
    let poem = build_poem_tree(&request.poem, &request.seal, fonts, request.canvas);
    let root = request.mounting.compose(poem, request.canvas);
    let opts = SvgOptions {
        animations: request.format == OutputFormat::Svg,
    };
    let svg = layout_tree(&root, request.canvas).and_then(|laid| {
        check_fit(&laid, request.poem.len())?;
        to_svg(&laid, request.canvas, &opts)
    });
    svg.map_err(|e| e.with_context(&request.context()))
}

fn finish(
    request: &RenderRequest,
    fonts: &FontResolution,
    svg: String,
    png: Option<Vec<u8>>,
) -> RenderResult {
    RenderResult {
        format: request.format,
        svg,
        png,
        family: fonts.primary.family.clone(),
        substituted: fonts.is_substituted(),
    }
}

/// Bounded worker pool for rasterization.
#[derive(Debug)]
pub struct RenderPool {
    pool: rayon::ThreadPool,
    rasterized: AtomicU64,
}

impl RenderPool {
    /// Pool with `threads` workers, or rayon's default when `None`.
    pub fn new(threads: Option<usize>) -> InkResult<Self> {
        Ok(Self {
            pool: build_thread_pool(threads)?,
            rasterized: AtomicU64::new(0),
        })
    }

    /// Worker count.
    pub fn threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Rasterizations run so far.
    pub fn rasterizations(&self) -> u64 {
        self.rasterized.load(Ordering::Relaxed)
    }

    /// Build the document on the caller, rasterize on the pool.
    pub fn render(
        &self,
        request: &RenderRequest,
        fonts: &FontResolution,
    ) -> InkResult<RenderResult> {
        let svg = build_svg(request, fonts)?;
        let png = match request.format {
            OutputFormat::Png => Some(
                self.rasterize(&svg, Some(fonts))
                    .map_err(|e| e.with_context(&request.context()))?,
            ),
            OutputFormat::Svg => None,
        };
        Ok(finish(request, fonts, svg, png))
    }

    /// Rasterize `svg` to PNG on a pool worker, blocking the caller.
    pub fn rasterize(&self, svg: &str, fonts: Option<&FontResolution>) -> InkResult<Vec<u8>> {
        self.rasterized.fetch_add(1, Ordering::Relaxed);
        self.pool.install(|| raster::svg_to_png(svg, fonts))
    }

    /// Run `job` on the pool without blocking; results travel back through the job's own channel.
    pub fn spawn<F>(self: &Arc<Self>, job: F)
    where
        F: FnOnce(&RenderPool) + Send + 'static,
    {
        let this = Arc::clone(self);
        self.pool.spawn(move || job(&this));
    }
}

fn build_thread_pool(threads: Option<usize>) -> InkResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(InkError::validation("render pool 'threads' must be >= 1 when set"));
    }

    let mut builder =
        rayon::ThreadPoolBuilder::new().thread_name(|i| format!("inkframe-raster-{i}"));
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| InkError::Other(anyhow::anyhow!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
