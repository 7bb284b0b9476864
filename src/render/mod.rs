//! Poem + frame → SVG document → PNG.

pub mod document;
/// Render requests, results and the worker pool.
pub mod pipeline;
pub mod raster;

pub use document::{Mounting, document_svg};
pub use pipeline::{
    OutputFormat, RenderPool, RenderRequest, RenderResult, build_svg, render, render_with_fonts,
};
pub use raster::{RasterImage, encode_png, font_database, parse_svg, rasterize, svg_to_png};
